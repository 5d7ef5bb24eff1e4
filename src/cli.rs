use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "simpletable2csv",
    version,
    about = "Convert reStructuredText simple tables into csv-table directives"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the selected simple table with a csv-table directive.
    Convert(ConvertArgs),
    /// Parse the selected simple table and print its columns and records.
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// File holding the table; stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// 1-based inclusive line range to convert, as START:END; the whole input when omitted.
    #[arg(long)]
    pub lines: Option<LineRange>,

    #[arg(long, value_enum, default_value_t = LineTrim::Trailing)]
    pub trim: LineTrim,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Rewrite the input file instead of printing the result.
    #[arg(long, default_value_t = false, requires = "input", conflicts_with = "output")]
    pub in_place: bool,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = 2)]
    pub indent: usize,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// How leading and trailing whitespace is removed before the border is detected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum LineTrim {
    /// Strip trailing whitespace only; column offsets stay absolute.
    Trailing,
    /// Strip both sides of every line.
    Both,
    /// Strip trailing whitespace and the indentation shared by all lines.
    Dedent,
}

impl LineTrim {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trailing => "trailing",
            Self::Both => "both",
            Self::Dedent => "dedent",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl FromStr for LineRange {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (start, end) = value
            .split_once(':')
            .ok_or_else(|| format!("expected START:END, got `{value}`"))?;
        let start = start
            .trim()
            .parse::<usize>()
            .map_err(|err| format!("invalid start line `{start}`: {err}"))?;
        let end = end
            .trim()
            .parse::<usize>()
            .map_err(|err| format!("invalid end line `{end}`: {err}"))?;

        if start == 0 {
            return Err("line numbers start at 1".to_string());
        }
        if end < start {
            return Err(format!("end line {end} is before start line {start}"));
        }

        Ok(Self { start, end })
    }
}
