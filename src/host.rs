//! Selection I/O for the convert action.
//!
//! The core never touches files or terminals directly; it asks a [`Host`] for
//! the selected text and hands the replacement back to it.

use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use tracing::{error, info};

use crate::cli::LineRange;
use crate::util::{read_input, write_stdout, write_text};

pub trait Host {
    /// The current selection, or `None` when nothing is selected.
    fn selected_text(&mut self) -> Result<Option<String>>;

    fn replace_selected_text(&mut self, text: &str) -> Result<()>;

    fn notify_info(&mut self, message: &str);

    fn notify_error(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    InPlace,
    File(PathBuf),
}

/// Selection backed by a file or stdin, optionally narrowed to a line range.
#[derive(Debug)]
pub struct FileHost {
    input: Option<PathBuf>,
    range: Option<LineRange>,
    destination: Destination,
    document: Option<Document>,
}

#[derive(Debug)]
struct Document {
    before: String,
    selected: String,
    after: String,
}

impl FileHost {
    pub fn new(input: Option<PathBuf>, range: Option<LineRange>, destination: Destination) -> Self {
        Self {
            input,
            range,
            destination,
            document: None,
        }
    }

    fn load(&mut self) -> Result<Option<&Document>> {
        if self.document.is_none() {
            let text = read_input(self.input.as_deref())?;
            self.document = split_selection(&text, self.range);
        }
        Ok(self.document.as_ref())
    }
}

impl Host for FileHost {
    fn selected_text(&mut self) -> Result<Option<String>> {
        Ok(self.load()?.map(|document| document.selected.clone()))
    }

    fn replace_selected_text(&mut self, text: &str) -> Result<()> {
        let Some(document) = self.load()? else {
            bail!("no selection to replace");
        };
        let output = format!("{}{}{}", document.before, text, document.after);

        match &self.destination {
            Destination::Stdout => write_stdout(&output),
            Destination::File(path) => write_text(path, &output),
            Destination::InPlace => {
                let path = self
                    .input
                    .as_ref()
                    .ok_or_else(|| anyhow!("in-place conversion needs an input file"))?;
                write_text(path, &output)
            }
        }
    }

    fn notify_info(&mut self, message: &str) {
        info!("{message}");
    }

    fn notify_error(&mut self, message: &str) {
        error!("{message}");
    }
}

/// Cuts `text` into the lines before, inside and after `range`, keeping line endings.
fn split_selection(text: &str, range: Option<LineRange>) -> Option<Document> {
    let Some(range) = range else {
        return Some(Document {
            before: String::new(),
            selected: text.to_string(),
            after: String::new(),
        });
    };

    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    if range.end > lines.len() {
        return None;
    }

    Some(Document {
        before: lines[..range.start - 1].concat(),
        selected: lines[range.start - 1..range.end].concat(),
        after: lines[range.end..].concat(),
    })
}

/// Host that keeps everything in memory, for exercising the convert action.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryHost {
    pub selection: Option<String>,
    pub replaced: Option<String>,
    pub infos: Vec<String>,
    pub errors: Vec<String>,
}

#[cfg(test)]
impl Host for MemoryHost {
    fn selected_text(&mut self) -> Result<Option<String>> {
        Ok(self.selection.clone())
    }

    fn replace_selected_text(&mut self, text: &str) -> Result<()> {
        self.replaced = Some(text.to_string());
        Ok(())
    }

    fn notify_info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn notify_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
