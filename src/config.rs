/// Viewer settings
///
/// There is no configuration file: everything the viewer needs is a
/// compile-time default gathered here so tests can swap the paths out.

use std::path::PathBuf;

/// Name of the raster written right before display and removed right after
const TEMP_RASTER_NAME: &str = "temp.png";

/// Entry read from `.npz` archives (NumPy's name for the first positional array)
pub const ARCHIVE_KEY: &str = "arr_0";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Window title
    pub title: String,
    /// Initial window size in logical pixels (width, height)
    pub window_size: (f32, f32),
    /// Fixed path of the temporary raster (relative to the working directory)
    pub temp_raster: PathBuf,
    /// Entry name looked up inside `.npz` archives
    pub archive_key: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Npy Viewer".to_string(),
            window_size: (800.0, 600.0),
            temp_raster: PathBuf::from(TEMP_RASTER_NAME),
            archive_key: ARCHIVE_KEY.to_string(),
        }
    }
}
