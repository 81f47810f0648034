pub mod cli;
pub mod command;
mod error;
pub mod options;
pub mod persist;
mod utils;

pub use error::{CanvasError, CanvasErrorSuggestion, CanvasResult, Context, anyhow};
pub use utils::env::{CanvasEnv, CanvasEnvKey};
