use anyhow::Result;
use thiserror::Error;
use tracing::info;

use crate::cli::ConvertArgs;
use crate::host::{Destination, FileHost, Host};
use crate::model::ParsedTable;
use crate::render::render_csv_table;
use crate::table::{FormatError, ParseOptions, TableParser};

const MISSING_SELECTION_MESSAGE: &str = "Please select a simple table to convert.";
const INVALID_FORMAT_MESSAGE: &str = "The selection is not a valid simple table";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no table selected")]
    MissingSelection,

    #[error("invalid simple table: {0}")]
    InvalidFormat(#[from] FormatError),
}

#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    pub parse: ParseOptions,
    pub indent: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub columns: usize,
    pub rows: usize,
    pub dropped_rows: usize,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let destination = if args.in_place {
        Destination::InPlace
    } else if let Some(path) = args.output.clone() {
        Destination::File(path)
    } else {
        Destination::Stdout
    };

    let mut host = FileHost::new(
        args.selection.input.clone(),
        args.selection.lines,
        destination,
    );
    let options = ConvertOptions {
        parse: ParseOptions {
            trim: args.selection.trim,
        },
        indent: args.indent,
    };

    info!(
        input = %args.selection.input.as_ref().map(|path| path.display().to_string()).unwrap_or_else(|| "<stdin>".to_string()),
        trim = args.selection.trim.as_str(),
        "converting selection"
    );

    let summary = convert_selection(&mut host, &options)?;
    info!(
        columns = summary.columns,
        rows = summary.rows,
        dropped_rows = summary.dropped_rows,
        "conversion completed"
    );

    Ok(())
}

/// True when the error was already shown to the user through [`Host::notify_error`].
pub fn is_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ConvertError>().is_some()
}

/// Parses the host's selection, notifying the host when there is none or it is not a table.
pub fn parse_selection<H: Host>(host: &mut H, options: ParseOptions) -> Result<ParsedTable> {
    let text = match host.selected_text()? {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            host.notify_error(MISSING_SELECTION_MESSAGE);
            return Err(ConvertError::MissingSelection.into());
        }
    };

    let parser = TableParser::new(options)?;
    match parser.parse(&text) {
        Ok(table) => Ok(table),
        Err(err) => {
            host.notify_error(&format!("{INVALID_FORMAT_MESSAGE}: {err}"));
            Err(ConvertError::from(err).into())
        }
    }
}

/// Converts the host's selection in place. On any failure the selection is left untouched.
pub fn convert_selection<H: Host>(host: &mut H, options: &ConvertOptions) -> Result<ConvertSummary> {
    let table = parse_selection(host, options.parse)?;

    let rendered = render_csv_table(table.records(), options.indent);
    host.replace_selected_text(&rendered)?;

    let summary = ConvertSummary {
        columns: table.column_count(),
        rows: table.body.len() + 1,
        dropped_rows: table.dropped_rows,
    };
    host.notify_info(&format!(
        "Converted {} rows into a csv-table with {} columns.",
        summary.rows, summary.columns
    ));

    Ok(summary)
}
