/// Array → RGBA raster conversion
///
/// One array element becomes one pixel, with no axes, margins or padding.
/// - 2-D arrays are scalar fields: normalized between their finite min and
///   max, then colormapped
/// - 3-D arrays with 3 or 4 channels are RGB / RGBA
/// - 3-D arrays with a single channel are treated as 2-D

use image::{Rgba, RgbaImage};
use ndarray::{ArrayView2, ArrayView3, ArrayViewD, Axis, Ix2, Ix3};

use super::colormap::{Colormap, BAD_COLOR};
use super::RenderError;
use crate::array::{ElementKind, NumericArray};

/// Rasterize `array`, mapping scalar data through `colormap`.
pub fn rasterize(array: &NumericArray, colormap: &Colormap) -> Result<RgbaImage, RenderError> {
    if array.values.is_empty() {
        return Err(RenderError::EmptyArray(array.shape().to_vec()));
    }

    let mut view: ArrayViewD<f64> = array.values.view();
    if view.ndim() == 3 && view.shape()[2] == 1 {
        view = view.index_axis_move(Axis(2), 0);
    }

    let shape = view.shape().to_vec();
    match shape.as_slice() {
        [_, _] => {
            let field = view
                .into_dimensionality::<Ix2>()
                .map_err(|_| RenderError::UnsupportedShape(array.shape().to_vec()))?;
            scalar_field(field, colormap)
        }
        [_, _, 3] | [_, _, 4] => {
            let pixels = view
                .into_dimensionality::<Ix3>()
                .map_err(|_| RenderError::UnsupportedShape(array.shape().to_vec()))?;
            color_pixels(pixels, array.kind)
        }
        _ => Err(RenderError::UnsupportedShape(array.shape().to_vec())),
    }
}

/// Canvas size for `rows` x `cols` elements
fn canvas_size(rows: usize, cols: usize) -> Result<(u32, u32), RenderError> {
    let too_large = || RenderError::TooLarge { rows, cols };
    let width = u32::try_from(cols).map_err(|_| too_large())?;
    let height = u32::try_from(rows).map_err(|_| too_large())?;
    Ok((width, height))
}

/// Finite (min, max) of the field, or None if nothing is finite
fn finite_range(field: &ArrayView2<f64>) -> Option<(f64, f64)> {
    field
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn scalar_field(field: ArrayView2<f64>, colormap: &Colormap) -> Result<RgbaImage, RenderError> {
    let (rows, cols) = field.dim();
    let (width, height) = canvas_size(rows, cols)?;

    let (lo, hi) = finite_range(&field).unwrap_or((0.0, 0.0));
    let span = hi - lo;

    let mut raster = RgbaImage::new(width, height);
    for ((row, col), &value) in field.indexed_iter() {
        let color = if !value.is_finite() {
            BAD_COLOR
        } else if span > 0.0 {
            colormap.sample((value - lo) / span)
        } else {
            // Constant data sits at the bottom of the colormap
            colormap.sample(0.0)
        };
        raster.put_pixel(col as u32, row as u32, color);
    }

    Ok(raster)
}

/// Scale one channel value to 0..=255 according to how it was stored
fn channel(value: f64, kind: ElementKind) -> u8 {
    if value.is_nan() {
        return 0;
    }

    let scaled = match kind {
        ElementKind::Float | ElementKind::Bool => value.clamp(0.0, 1.0) * 255.0,
        ElementKind::Integer => value.clamp(0.0, 255.0),
    };
    scaled.round() as u8
}

fn color_pixels(pixels: ArrayView3<f64>, kind: ElementKind) -> Result<RgbaImage, RenderError> {
    let (rows, cols, channels) = pixels.dim();
    let (width, height) = canvas_size(rows, cols)?;

    let mut raster = RgbaImage::new(width, height);
    for (x, y, out) in raster.enumerate_pixels_mut() {
        let (row, col) = (y as usize, x as usize);
        let at = |c: usize| channel(pixels[[row, col, c]], kind);
        let alpha = if channels == 4 { at(3) } else { 255 };
        *out = Rgba([at(0), at(1), at(2), alpha]);
    }

    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::colormap::VIRIDIS;

    fn float_array(shape: &[usize], values: Vec<f64>) -> NumericArray {
        NumericArray::from_shape_vec(shape, values, ElementKind::Float).unwrap()
    }

    #[test]
    fn test_scalar_field_uses_min_max() {
        let array = float_array(&[2, 2], vec![10.0, 20.0, 30.0, 40.0]);

        let raster = rasterize(&array, &VIRIDIS).unwrap();

        assert_eq!(raster.dimensions(), (2, 2));
        assert_eq!(*raster.get_pixel(0, 0), VIRIDIS.sample(0.0));
        assert_eq!(*raster.get_pixel(1, 1), VIRIDIS.sample(1.0));
    }

    #[test]
    fn test_width_follows_columns() {
        let array = float_array(&[2, 5], (0..10).map(f64::from).collect());

        let raster = rasterize(&array, &VIRIDIS).unwrap();

        assert_eq!(raster.dimensions(), (5, 2));
        // Last element of the first row is column 4, row 0
        assert_eq!(*raster.get_pixel(4, 0), VIRIDIS.sample(4.0 / 9.0));
    }

    #[test]
    fn test_constant_field() {
        let array = float_array(&[3, 3], vec![5.0; 9]);

        let raster = rasterize(&array, &VIRIDIS).unwrap();

        assert!(raster.pixels().all(|p| *p == VIRIDIS.sample(0.0)));
    }

    #[test]
    fn test_non_finite_values_are_transparent() {
        let array = float_array(&[1, 4], vec![0.0, f64::NAN, f64::INFINITY, 1.0]);

        let raster = rasterize(&array, &VIRIDIS).unwrap();

        assert_eq!(*raster.get_pixel(1, 0), BAD_COLOR);
        assert_eq!(*raster.get_pixel(2, 0), BAD_COLOR);
        // Infinity doesn't stretch the range
        assert_eq!(*raster.get_pixel(3, 0), VIRIDIS.sample(1.0));
    }

    #[test]
    fn test_single_channel_is_squeezed() {
        let array = float_array(&[2, 3, 1], (0..6).map(f64::from).collect());

        let raster = rasterize(&array, &VIRIDIS).unwrap();

        assert_eq!(raster.dimensions(), (3, 2));
    }

    #[test]
    fn test_float_rgb_is_clipped() {
        let array = float_array(&[1, 2, 3], vec![0.0, 0.5, 1.0, -1.0, 2.0, 0.25]);

        let raster = rasterize(&array, &VIRIDIS).unwrap();

        assert_eq!(*raster.get_pixel(0, 0), Rgba([0, 128, 255, 255]));
        assert_eq!(*raster.get_pixel(1, 0), Rgba([0, 255, 64, 255]));
    }

    #[test]
    fn test_integer_rgba() {
        let array = NumericArray::from_shape_vec(
            &[1, 1, 4],
            vec![10.0, 300.0, -5.0, 128.0],
            ElementKind::Integer,
        )
        .unwrap();

        let raster = rasterize(&array, &VIRIDIS).unwrap();

        assert_eq!(*raster.get_pixel(0, 0), Rgba([10, 255, 0, 128]));
    }

    #[test]
    fn test_rgb_rows_and_columns() {
        // 2 rows x 2 cols; only pixel (row 1, col 0) is red
        let mut values = vec![0.0; 12];
        values[6] = 1.0;
        let array = float_array(&[2, 2, 3], values);

        let raster = rasterize(&array, &VIRIDIS).unwrap();

        assert_eq!(*raster.get_pixel(0, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(*raster.get_pixel(1, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_unsupported_shapes() {
        let line = float_array(&[4], vec![0.0; 4]);
        let volume = float_array(&[2, 2, 2, 2], vec![0.0; 16]);
        let two_channels = float_array(&[2, 2, 2], vec![0.0; 8]);

        for array in [line, volume, two_channels] {
            assert!(matches!(
                rasterize(&array, &VIRIDIS),
                Err(RenderError::UnsupportedShape(_))
            ));
        }
    }

    #[test]
    fn test_empty_array() {
        let array = float_array(&[0, 3], vec![]);

        assert!(matches!(rasterize(&array, &VIRIDIS), Err(RenderError::EmptyArray(_))));
    }
}
