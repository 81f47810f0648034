use async_trait::async_trait;
use camino::Utf8PathBuf;
use canvas_std::{CanvasStdError, Fs};

#[cfg_attr(test, derive(thiserror::Error, Debug))]
#[cfg(test)]
#[cfg_attr(test, error("MockWriteFileError"))]
pub struct MockWriteFileError {}

/// Writes bytes to a path, creating or truncating the file.
#[cfg_attr(test, mockall::automock(type Error = MockWriteFileError;))]
#[async_trait]
pub trait WriteFile {
    type Error: std::error::Error + Send + Sync + 'static;
    async fn write_file(&self, path: &Utf8PathBuf, contents: &[u8]) -> Result<(), Self::Error>;
}

#[derive(Clone, Default, Debug, Eq, PartialEq)]
pub struct FsWriteFile {}

#[async_trait]
impl WriteFile for FsWriteFile {
    type Error = CanvasStdError;
    async fn write_file(&self, path: &Utf8PathBuf, contents: &[u8]) -> Result<(), Self::Error> {
        Fs::write_file(path, contents)
    }
}
