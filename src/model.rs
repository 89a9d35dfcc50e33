// src/model.rs
//
// Spot record + the canonical column order shared by the table, the JSON
// export and the CSV export.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::consts::{PERFORMER_SEP_CSV, PERFORMER_SEP_DISPLAY};
use crate::error::ConfigError;

/// One music video record. Field order here IS the canonical order;
/// serde serializes struct fields in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    #[serde(rename = "Naslov")]
    pub title: String,
    #[serde(rename = "Redatelj")]
    pub director: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Datum")]
    pub date: String,
    #[serde(rename = "Trajanje_sekunde")]
    pub duration_secs: i64,
    #[serde(rename = "Zanr")]
    pub genre: String,
    #[serde(rename = "pregledi")]
    pub views: i64,
    #[serde(rename = "komentari")]
    pub comments: i64,
    #[serde(rename = "lajkovi")]
    pub likes: i64,
    #[serde(rename = "izvodaci", default, deserialize_with = "null_as_empty")]
    pub performers: Vec<String>,
}

fn null_as_empty<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(de)?.unwrap_or_default())
}

/// The ten spot fields, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Title,
    Director,
    Label,
    Date,
    Duration,
    Genre,
    Views,
    Comments,
    Likes,
    Performers,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::Title,
        Column::Director,
        Column::Label,
        Column::Date,
        Column::Duration,
        Column::Genre,
        Column::Views,
        Column::Comments,
        Column::Likes,
        Column::Performers,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Wire name; also the table and CSV header.
    pub fn name(self) -> &'static str {
        match self {
            Column::Title => "Naslov",
            Column::Director => "Redatelj",
            Column::Label => "Label",
            Column::Date => "Datum",
            Column::Duration => "Trajanje_sekunde",
            Column::Genre => "Zanr",
            Column::Views => "pregledi",
            Column::Comments => "komentari",
            Column::Likes => "lajkovi",
            Column::Performers => "izvodaci",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(ix: usize) -> Option<Column> {
        Self::ALL.get(ix).copied()
    }

    /// Case-insensitive lookup by wire name. `Izvodac` (the old selector value)
    /// maps to the performers column.
    pub fn from_name(name: &str) -> Option<Column> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("izvodac") {
            return Some(Column::Performers);
        }
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Column::Duration | Column::Views | Column::Comments | Column::Likes)
    }

    fn number(self, spot: &Spot) -> Option<i64> {
        match self {
            Column::Duration => Some(spot.duration_secs),
            Column::Views => Some(spot.views),
            Column::Comments => Some(spot.comments),
            Column::Likes => Some(spot.likes),
            _ => None,
        }
    }

    fn text(self, spot: &Spot) -> Option<&str> {
        match self {
            Column::Title => Some(&spot.title),
            Column::Director => Some(&spot.director),
            Column::Label => Some(&spot.label),
            Column::Date => Some(&spot.date),
            Column::Genre => Some(&spot.genre),
            _ => None,
        }
    }

    fn render(self, spot: &Spot, performer_sep: &str) -> String {
        if let Some(n) = self.number(spot) {
            return n.to_string();
        }
        match self.text(spot) {
            Some(t) => t.to_string(),
            None => spot.performers.join(performer_sep),
        }
    }

    /// Cell text as shown in the table (and matched by search).
    pub fn display(self, spot: &Spot) -> String {
        self.render(spot, PERFORMER_SEP_DISPLAY)
    }

    /// Cell text as written to CSV.
    pub fn export_value(self, spot: &Spot) -> String {
        self.render(spot, PERFORMER_SEP_CSV)
    }

    /// Sort key comparison: numbers numerically, text case-insensitively.
    pub fn compare(self, a: &Spot, b: &Spot) -> Ordering {
        match (self.number(a), self.number(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => self.display(a).to_lowercase().cmp(&self.display(b).to_lowercase()),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Search scope of the attribute selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Attribute {
    #[default]
    All,
    Column(Column),
}

impl Attribute {
    /// `all` or a column name. Anything else is an error, never a silent fallback.
    pub fn parse(value: &str) -> Result<Attribute, ConfigError> {
        let v = value.trim();
        if v.is_empty() || v.eq_ignore_ascii_case("all") {
            return Ok(Attribute::All);
        }
        Column::from_name(v)
            .map(Attribute::Column)
            .ok_or_else(|| ConfigError::UnknownAttribute(s!(v)))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::All => "all",
            Attribute::Column(c) => c.name(),
        }
    }

    /// Selector entries: "all" followed by every column.
    pub fn choices() -> impl Iterator<Item = Attribute> {
        std::iter::once(Attribute::All).chain(Column::ALL.into_iter().map(Attribute::Column))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
