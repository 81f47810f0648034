mod error;
mod fs;

pub use error::CanvasStdError;
pub use fs::Fs;
