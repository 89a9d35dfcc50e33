// src/table.rs
//
// SpotTable: the canonical rows plus a filtered/sorted view over them.
//
// - Rows are owned and never mutated; a new data set means a new SpotTable.
// - The view is a list of row indexes (`row_ix`), rebuilt after every
//   filter or sort change. Rendering and export both read the same view,
//   so "what is exported" is always "what is on screen".

use crate::error::ConfigError;
use crate::model::{Attribute, Column, Spot};

/// Active search: query text + attribute scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub scope: Attribute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub ascending: bool,
}

#[derive(Clone, Debug, Default)]
pub struct SpotTable {
    rows: Vec<Spot>,
    filter: FilterState,
    sort: Option<SortState>,
    /// Positions of visible rows in `rows`, in display order
    row_ix: Vec<usize>,
}

impl SpotTable {
    /// Bind a fresh row set. No filter, no sort: every row visible.
    pub fn new(rows: Vec<Spot>) -> Self {
        let row_ix = (0..rows.len()).collect();
        Self { rows, filter: FilterState::default(), sort: None, row_ix }
    }

    /// Filter every column.
    pub fn search_all(&mut self, term: &str) {
        self.filter = FilterState { query: s!(term), scope: Attribute::All };
        self.rebuild_view();
    }

    /// Filter a single column by canonical index.
    pub fn search_column(&mut self, column_index: usize, term: &str) -> Result<(), ConfigError> {
        let column = Column::from_index(column_index).ok_or(ConfigError::ColumnOutOfRange(column_index))?;
        self.filter = FilterState { query: s!(term), scope: Attribute::Column(column) };
        self.rebuild_view();
        Ok(())
    }

    /// Apply a full filter state at once (used when rebinding new rows).
    pub fn apply_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.rebuild_view();
    }

    pub fn sort_by(&mut self, column: Column, ascending: bool) {
        self.sort = Some(SortState { column, ascending });
        self.rebuild_view();
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.rebuild_view();
    }

    /// Visible rows as owned data, in display order.
    pub fn current_filtered_rows(&self) -> Vec<Spot> {
        self.row_ix.iter().map(|&ix| self.rows[ix].clone()).collect()
    }

    /// Borrow a visible row by display position.
    pub fn row(&self, i: usize) -> Option<&Spot> {
        self.row_ix.get(i).and_then(|&ix| self.rows.get(ix))
    }

    pub fn visible(&self) -> impl Iterator<Item = &Spot> + '_ {
        self.row_ix.iter().map(|&ix| &self.rows[ix])
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
    pub fn total(&self) -> usize { self.rows.len() }
    pub fn rows(&self) -> &[Spot] { &self.rows }
    pub fn filter(&self) -> &FilterState { &self.filter }
    pub fn sort(&self) -> Option<SortState> { self.sort }

    fn rebuild_view(&mut self) {
        let needle = self.filter.query.to_lowercase();
        let scope = self.filter.scope;

        let mut ix: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, spot)| matches(spot, scope, &needle))
            .map(|(i, _)| i)
            .collect();

        if let Some(SortState { column, ascending }) = self.sort {
            let rows = &self.rows;
            // stable: equal keys keep load order
            ix.sort_by(|&a, &b| {
                let ord = column.compare(&rows[a], &rows[b]);
                if ascending { ord } else { ord.reverse() }
            });
        }

        logd!(
            "Table: view rebuilt scope={} query={:?} → {}/{} rows",
            scope, self.filter.query, ix.len(), self.rows.len()
        );
        self.row_ix = ix;
    }
}

/// Case-insensitive substring match; `needle` is already lowercased.
fn matches(spot: &Spot, scope: Attribute, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |c: Column| c.display(spot).to_lowercase().contains(needle);
    match scope {
        Attribute::All => Column::ALL.into_iter().any(hit),
        Attribute::Column(c) => hit(c),
    }
}
