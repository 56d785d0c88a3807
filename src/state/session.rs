use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// File name suffixes the viewer can open (case-sensitive)
pub const ARRAY_SUFFIXES: [&str; 2] = [".npy", ".npz"];

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Navigation state of one viewing session.
///
/// The directory, its array files and the position in that list only change
/// through `load_directory`, `step_previous` and `step_next`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Session {
    /// Directory picked by the user (None until the first successful load)
    directory: Option<PathBuf>,
    /// File names (not paths) in enumeration order
    files: Vec<String>,
    /// Position into `files`, always 0 when `files` is empty
    index: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the file set with the array files found in `directory`.
    ///
    /// Returns the number of files found. On error the session is left
    /// exactly as it was.
    pub fn load_directory(&mut self, directory: PathBuf) -> Result<usize, SessionError> {
        let files = list_array_files(&directory)?;

        self.directory = Some(directory);
        self.files = files;
        self.index = 0;

        Ok(self.files.len())
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Name of the file at the current position
    pub fn current_name(&self) -> Option<&str> {
        self.files.get(self.index).map(String::as_str)
    }

    /// Full path of the file at the current position
    pub fn current_path(&self) -> Option<PathBuf> {
        let directory = self.directory.as_ref()?;
        self.current_name().map(|name| directory.join(name))
    }

    /// Move one file back. Returns false (and does nothing) at the first file.
    pub fn step_previous(&mut self) -> bool {
        if self.index == 0 || self.files.is_empty() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Move one file forward. Returns false (and does nothing) at the last file.
    pub fn step_next(&mut self) -> bool {
        if self.index + 1 >= self.files.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

/// True if the name ends in one of the recognized suffixes
pub fn is_array_file(name: &str) -> bool {
    ARRAY_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// List the entries directly inside `directory` whose names are array files.
///
/// No sorting: the order is whatever the filesystem hands back.
fn list_array_files(directory: &Path) -> Result<Vec<String>, SessionError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| SessionError::ReadDirectory {
            path: directory.to_path_buf(),
            source,
        })?;

        // Names that aren't UTF-8 can't carry our suffixes
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        if is_array_file(name) {
            files.push(name.to_string());
        }
    }

    Ok(files)
}
