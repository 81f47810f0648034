use std::fs::{self, OpenOptions};
use std::io::Write;

use anyhow::Context;
use camino::Utf8Path;

use crate::CanvasStdError;

/// Interact with a file system
#[derive(Default, Copy, Clone, Debug)]
pub struct Fs {}

impl Fs {
    /// writes a file to disk, creating it if absent and truncating it if present
    pub fn write_file<P, C>(path: P, contents: C) -> Result<(), CanvasStdError>
    where
        P: AsRef<Utf8Path>,
        C: AsRef<[u8]>,
    {
        let path = path.as_ref();
        if path.file_name().is_none() {
            return Err(CanvasStdError::NoFileName {
                path: path.to_string(),
            });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
            if !parent.exists() {
                tracing::debug!("parent path '{}' does not exist, creating it", parent);
                Self::create_dir_all(parent)?;
            }
        }

        // the handle is dropped at the end of this scope on every path
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("tried to open {} but was unable to do so", path))?;
        tracing::info!("writing {} to disk", path);
        file.write_all(contents.as_ref())
            .with_context(|| format!("could not write {}", path))?;
        Ok(())
    }

    /// creates a directory and any missing parents
    pub fn create_dir_all<P>(path: P) -> Result<(), CanvasStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        tracing::info!("creating {} directory", path);
        fs::create_dir_all(path).with_context(|| format!("could not create {} directory", path))?;
        Ok(())
    }
}
