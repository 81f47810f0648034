use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasStdError {
    /// AdhocError comes from the anyhow crate
    #[error(transparent)]
    AdhocError(#[from] anyhow::Error),

    /// The target path has no file name component
    #[error("cannot write to \"{path}\" because it has no final element")]
    NoFileName {
        /// The offending path
        path: String,
    },
}
