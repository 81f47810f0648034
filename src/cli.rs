use clap::{Parser, Subcommand};
use timber::{Level, LogLevel};

use crate::command::{self, CanvasOutput};
use crate::utils::env::CanvasEnv;
use crate::CanvasResult;

#[derive(Debug, Parser)]
#[command(
    name = "canvas-history",
    version,
    about = "
canvas-history fetches the edit history of a rectangle of canvas tiles
in one batched GraphQL request and writes the response to a JSON file.

Print the request a region would send, without sending it:

    $ canvas-history plan --start 0,0 --end 9,9

Fetch it, authenticating with a bearer token:

    $ CANVAS_HISTORY_TOKEN=... canvas-history fetch --start 0,0 --end 9,9
"
)]
pub struct CanvasHistory {
    #[command(subcommand)]
    pub command: Command,

    /// Specify canvas-history's log level
    #[arg(long = "log", short = 'l', global = true, ignore_case = true)]
    pub log_level: Option<LogLevel>,

    #[arg(skip)]
    pub env_store: CanvasEnv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the history of a region and write it to disk
    Fetch(command::Fetch),

    /// Print the batched request for a region without sending it
    Plan(command::Plan),
}

impl CanvasHistory {
    pub fn log_level(&self) -> Option<Level> {
        self.log_level.map(Level::from)
    }

    pub fn run(&self) -> CanvasResult<CanvasOutput> {
        match &self.command {
            Command::Fetch(command) => command.run(&self.env_store),
            Command::Plan(command) => command.run(),
        }
    }
}
