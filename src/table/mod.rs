//! Parser for reStructuredText-style simple tables.
//!
//! A table is framed by three identical `=` border lines: top, the line
//! separating the header from the body, and bottom. Column widths come from
//! the `=` runs of the border, and every row is sliced positionally against
//! them using display columns, so East Asian wide characters count twice.

use anyhow::{Context, Result};
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::cli::LineTrim;
use crate::model::{ColumnSpan, ParsedTable, Record};

mod border;
mod cells;
mod merge;
mod normalize;
#[cfg(test)]
mod tests;

use border::*;
use cells::*;
use merge::*;
use normalize::*;

/// Top border, header, middle border, at least one body row, bottom border.
const MIN_TABLE_LINES: usize = 5;
const EXPECTED_BORDER_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("table needs at least 5 non-blank lines, found {found}")]
    TooFewLines { found: usize },

    #[error("line {line} is not a border line of `=` runs separated by spaces")]
    MalformedBorder { line: usize },

    #[error("border line {line} directly follows another border line")]
    AdjacentBorders { line: usize },

    #[error("last line {line} is not the table border")]
    MissingBottomBorder { line: usize },

    #[error("expected 3 border lines, found {found}")]
    BorderCount { found: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub trim: LineTrim,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            trim: LineTrim::Trailing,
        }
    }
}

pub struct TableParser {
    border_line: Regex,
    options: ParseOptions,
}

impl TableParser {
    pub fn new(options: ParseOptions) -> Result<Self> {
        Ok(Self {
            border_line: Regex::new(r"^ *=+( +=+)+$")
                .context("failed to compile border line regex")?,
            options,
        })
    }

    pub fn parse(&self, text: &str) -> Result<ParsedTable, FormatError> {
        let lines = normalize_lines(text, self.options.trim);
        let border = check_format(&lines, &self.border_line)?;
        let columns = column_spans(&border);
        debug!(border = %border, columns = columns.len(), "table border accepted");

        let blocks = split_header_and_body(&lines, &border);
        if blocks.header.len() > 1 {
            warn!(
                ignored = blocks.header.len() - 1,
                "multi-line header is not supported; only the first header line is used"
            );
        }

        // check_format rejects adjacent borders, so the header block is never empty.
        let header = blocks
            .header
            .first()
            .map(|line| record_from_line(line, &columns))
            .unwrap_or_else(|| vec![String::new(); columns.len()]);

        let rows: Vec<Record> = blocks
            .body
            .iter()
            .map(|line| record_from_line(line, &columns))
            .collect();
        let row_count = rows.len();

        let merged = merge_continuations(rows, columns.len());
        if merged.dropped_rows > 0 {
            warn!(
                dropped = merged.dropped_rows,
                "continuation rows before the first keyed row were dropped"
            );
        }
        debug!(
            body_rows = row_count,
            records = merged.records.len(),
            "merged continuation rows"
        );

        Ok(ParsedTable {
            border,
            columns,
            header,
            body: merged.records,
            dropped_rows: merged.dropped_rows,
        })
    }
}
