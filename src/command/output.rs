use std::io;

use calm_io::{stderrln, stdoutln};
use camino::Utf8PathBuf;
use console::style;
use serde_json::Value;

/// Everything a command prints to stdout. Progress and diagnostics go to
/// stderr so stdout can be piped.
#[derive(Clone, PartialEq, Debug)]
pub enum CanvasOutput {
    HistoryWritten {
        path: Utf8PathBuf,
        cell_count: usize,
    },
    Plan(Value),
}

impl CanvasOutput {
    pub fn print(&self) -> io::Result<()> {
        match self {
            CanvasOutput::HistoryWritten { path, cell_count } => {
                stderrln!(
                    "Wrote the history of {} tiles to:",
                    style(cell_count).cyan()
                )?;
                stdoutln!("{}", path)?;
            }
            CanvasOutput::Plan(plan) => {
                let rendered = serde_json::to_string_pretty(plan).map_err(io::Error::other)?;
                stdoutln!("{}", rendered)?;
            }
        }
        Ok(())
    }
}
