/// Scoped temporary raster file
///
/// The raster is written to a fixed path so the display can pick it up.
/// The guard removes the file when it goes out of scope, on every path out
/// of the render pipeline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct TempRaster {
    path: PathBuf,
}

impl TempRaster {
    /// Claim `path` for the duration of one render. Nothing is created yet.
    pub fn claim(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempRaster {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            // Nothing was written, e.g. the render failed before saving
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No temporary file to remove at {}", self.path.display());
            }
            Err(e) => {
                tracing::warn!(
                    "⚠️  Error removing temporary file {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}
