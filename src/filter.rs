// src/filter.rs
//
// Filter controls → table search calls. Owns the raw control values (query box,
// attribute selector) and pushes them into a SpotTable on every change.
// Changes are applied synchronously in the order they arrive, so the table
// always reflects the last value typed/selected.

use crate::error::ConfigError;
use crate::model::Attribute;
use crate::table::{FilterState, SpotTable};

#[derive(Clone, Debug, Default)]
pub struct FilterController {
    query: String,
    attribute: Attribute,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw CLI-style values (`--query`, `--attribute`).
    pub fn from_raw(query: &str, attribute: &str) -> Result<Self, ConfigError> {
        Ok(Self { query: s!(query), attribute: Attribute::parse(attribute)? })
    }

    pub fn query(&self) -> &str { &self.query }
    pub fn attribute(&self) -> Attribute { self.attribute }

    /// Mutable access for a text edit widget; call `apply` when it reports a change.
    pub fn query_mut(&mut self) -> &mut String { &mut self.query }

    /// Keystroke in the query box.
    pub fn set_query(&mut self, table: Option<&mut SpotTable>, query: &str) {
        self.query = s!(query);
        if let Some(t) = table { self.apply(t); }
    }

    /// Selector change.
    pub fn set_attribute(&mut self, table: Option<&mut SpotTable>, attribute: Attribute) {
        self.attribute = attribute;
        if let Some(t) = table { self.apply(t); }
    }

    /// Push the current control values into the table.
    pub fn apply(&self, table: &mut SpotTable) {
        match self.attribute {
            Attribute::All => table.search_all(&self.query),
            Attribute::Column(c) => {
                // Column::index is always in range
                if let Err(e) = table.search_column(c.index(), &self.query) {
                    loge!("Filter: {}", e);
                }
            }
        }
    }

    pub fn state(&self) -> FilterState {
        FilterState { query: self.query.clone(), scope: self.attribute }
    }

    pub fn clear(&mut self, table: Option<&mut SpotTable>) {
        self.query.clear();
        self.attribute = Attribute::All;
        if let Some(t) = table { self.apply(t); }
    }
}
