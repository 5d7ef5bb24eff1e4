use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::cli::InspectArgs;
use crate::commands::convert::parse_selection;
use crate::host::{Destination, FileHost};
use crate::model::{ParsedTable, Record};
use crate::table::ParseOptions;
use crate::util::write_json_stdout;

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    trim: &'static str,
    column_count: usize,
    record_count: usize,
    table: &'a ParsedTable,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let mut host = FileHost::new(
        args.selection.input.clone(),
        args.selection.lines,
        Destination::Stdout,
    );
    let table = parse_selection(
        &mut host,
        ParseOptions {
            trim: args.selection.trim,
        },
    )?;
    info!(
        columns = table.column_count(),
        records = table.body.len(),
        "parsed simple table"
    );

    if args.json {
        let report = InspectReport {
            trim: args.selection.trim.as_str(),
            column_count: table.column_count(),
            record_count: table.body.len(),
            table: &table,
        };
        return write_json_stdout(&report);
    }

    write_text_report(&table)
}

fn write_text_report(table: &ParsedTable) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(output, "Border: {}", table.border)?;
    writeln!(output, "Columns: {}", table.column_count())?;
    for (index, span) in table.columns.iter().enumerate() {
        writeln!(
            output,
            "{}.\tstart={} end={} width={}",
            index + 1,
            span.start,
            span.end,
            span.width()
        )?;
    }

    writeln!(output, "Header: {}", format_record(&table.header))?;
    writeln!(output, "Records: {}", table.body.len())?;
    for (index, record) in table.body.iter().enumerate() {
        writeln!(output, "{}.\t{}", index + 1, format_record(record))?;
    }
    if table.dropped_rows > 0 {
        writeln!(output, "Dropped continuation rows: {}", table.dropped_rows)?;
    }

    output.flush()?;
    Ok(())
}

fn format_record(record: &Record) -> String {
    record
        .iter()
        .map(|cell| format!("{cell:?}"))
        .collect::<Vec<String>>()
        .join(" | ")
}
