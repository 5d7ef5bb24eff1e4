use serde::Serialize;

/// One row of cell values, one entry per column.
pub type Record = Vec<String>;

/// Display-column range `[start, end)` of one column, measured against the border line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpan {
    pub start: usize,
    pub end: usize,
}

impl ColumnSpan {
    pub fn width(self) -> usize {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTable {
    pub border: String,
    pub columns: Vec<ColumnSpan>,
    pub header: Record,
    pub body: Vec<Record>,
    /// Continuation rows that appeared before any row with a first-column value.
    pub dropped_rows: usize,
}

impl ParsedTable {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Header first, then the merged body records in source order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        std::iter::once(&self.header).chain(self.body.iter())
    }
}
