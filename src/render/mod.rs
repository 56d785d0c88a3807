/// Array rendering module
///
/// Architecture:
/// - `colormap.rs` - scalar → color lookup (viridis by default)
/// - `raster.rs` - array → RGBA raster
/// - `temp.rs` - the scoped temporary file the raster travels through
///
/// `render_and_display` drives one cycle: rasterize, write the PNG, hand it
/// to the display, remove the file.

pub mod colormap;
pub mod raster;
pub mod temp;

pub use colormap::Colormap;
pub use raster::rasterize;
pub use temp::TempRaster;

use std::path::Path;
use thiserror::Error;

use crate::array::NumericArray;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Failed to read raster: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to decode raster: {0}")]
    Decode(#[from] image::ImageError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot display an empty array of shape {0:?}")]
    EmptyArray(Vec<usize>),

    #[error("Invalid shape {0:?} for image data")]
    UnsupportedShape(Vec<usize>),

    #[error("Array of {rows}x{cols} is too large to display")]
    TooLarge { rows: usize, cols: usize },

    #[error("Failed to write raster: {0}")]
    Write(#[from] image::ImageError),

    #[error(transparent)]
    Display(#[from] DisplayError),
}

/// Something that can show a raster image file.
///
/// The sink must be done with the file when `show` returns: the file is
/// deleted right after.
pub trait RasterSink {
    fn show(&mut self, raster: &Path) -> Result<(), DisplayError>;
}

/// Render `array` through the temporary file at `temp_path` into `sink`.
///
/// The temporary file never outlives this call, whatever the outcome.
pub fn render_and_display<S: RasterSink>(
    array: &NumericArray,
    colormap: &Colormap,
    temp_path: &Path,
    sink: &mut S,
) -> Result<(), RenderError> {
    let scratch = TempRaster::claim(temp_path);

    {
        let raster = rasterize(array, colormap)?;
        raster.save_with_format(scratch.path(), image::ImageFormat::Png)?;
    }

    sink.show(scratch.path())?;

    Ok(())
}
