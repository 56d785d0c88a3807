/// Viewer orchestration
///
/// `Viewer` ties the session state to the load → render → display → cleanup
/// pipeline. Every failure stops at the operation that hit it and becomes a
/// single log line (mirrored in `status`); nothing propagates to the UI.

use std::path::PathBuf;

use crate::array;
use crate::config::ViewerConfig;
use crate::render::{self, Colormap, RasterSink};
use crate::state::Session;

/// Shown before any directory is loaded
pub const IDLE_STATUS: &str = "Load a directory of .npy / .npz files to begin.";

const EMPTY_DIRECTORY: &str = "No .npy or .npz files found in the selected directory.";

pub struct Viewer<S> {
    session: Session,
    config: ViewerConfig,
    colormap: Colormap,
    sink: S,
    /// Status message to display to the user
    status: String,
}

impl<S: RasterSink> Viewer<S> {
    pub fn new(config: ViewerConfig, sink: S) -> Self {
        Self {
            session: Session::new(),
            config,
            colormap: Colormap::default(),
            sink,
            status: IDLE_STATUS.to_string(),
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Load the directory the user picked (None = the dialog was cancelled)
    pub fn select_directory(&mut self, choice: Option<PathBuf>) {
        let Some(directory) = choice else {
            return;
        };

        match self.session.load_directory(directory) {
            Ok(_) if self.session.is_empty() => {
                tracing::warn!("{}", EMPTY_DIRECTORY);
                self.status = EMPTY_DIRECTORY.to_string();
            }
            Ok(count) => {
                if let Some(directory) = self.session.directory() {
                    tracing::info!("📁 Loaded {} array files from {}", count, directory.display());
                }
                self.show_current();
            }
            Err(e) => {
                tracing::warn!("⚠️  {}", e);
                self.status = e.to_string();
            }
        }
    }

    /// Load, render and display the file at the current position.
    ///
    /// On failure the previous image stays on screen.
    pub fn show_current(&mut self) {
        let Some(path) = self.session.current_path() else {
            return;
        };

        let array = match array::load_array(&path, &self.config.archive_key) {
            Ok(array) => array,
            Err(e) => {
                let message = format!("Error loading data from {}: {}", path.display(), e);
                tracing::warn!(path = %path.display(), "❌ {}", message);
                self.status = message;
                return;
            }
        };

        if let Err(e) = render::render_and_display(
            &array,
            &self.colormap,
            &self.config.temp_raster,
            &mut self.sink,
        ) {
            let message = format!("Error displaying image: {}", e);
            tracing::warn!(path = %path.display(), "❌ {}", message);
            self.status = message;
            return;
        }

        self.status = format!(
            "{} ({}/{})",
            self.session.current_name().unwrap_or_default(),
            self.session.index() + 1,
            self.session.files().len()
        );
    }

    pub fn show_previous(&mut self) {
        if self.session.step_previous() {
            self.show_current();
        }
    }

    pub fn show_next(&mut self) {
        if self.session.step_next() {
            self.show_current();
        }
    }
}
