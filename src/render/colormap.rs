/// Colormaps for scalar arrays
///
/// A colormap is a list of evenly spaced color stops; samples between two
/// stops are linearly interpolated.

use image::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colormap {
    stops: &'static [[u8; 3]],
}

/// Viridis, the plotting default (perceptually uniform, dark purple to yellow)
pub const VIRIDIS: Colormap = Colormap {
    stops: &[
        [68, 1, 84],
        [72, 40, 120],
        [62, 73, 137],
        [49, 104, 142],
        [38, 130, 142],
        [31, 158, 137],
        [53, 183, 121],
        [110, 206, 88],
        [253, 231, 37],
    ],
};

/// Color used for NaN and infinite values
pub const BAD_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0]);

impl Colormap {
    /// Map `t` in [0, 1] to an opaque color. Out-of-range values are clamped.
    pub fn sample(&self, t: f64) -> Rgba<u8> {
        if t.is_nan() {
            return BAD_COLOR;
        }

        let t = t.clamp(0.0, 1.0);
        let last = self.stops.len() - 1;
        let position = t * last as f64;
        let lower = (position.floor() as usize).min(last);
        let upper = (lower + 1).min(last);
        let fraction = position - lower as f64;

        let a = self.stops[lower];
        let b = self.stops[upper];
        let mix = |i: usize| {
            let value = a[i] as f64 + (b[i] as f64 - a[i] as f64) * fraction;
            value.round() as u8
        };

        Rgba([mix(0), mix(1), mix(2), 255])
    }
}

impl Default for Colormap {
    fn default() -> Self {
        VIRIDIS
    }
}
