/// Array loading module
///
/// This module handles:
/// - Reading NumPy `.npy` files (one array per file)
/// - Reading the `arr_0` entry of NumPy `.npz` archives
/// - Widening whatever element type was stored to f64 for rendering

pub mod loader;

pub use loader::load_array;

use ndarray::ArrayD;

/// How the elements were stored on disk.
///
/// Rendering RGB(A) data depends on it: floats live in [0, 1], integers in
/// [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Float,
    Integer,
    Bool,
}

/// An N-dimensional array widened to f64
#[derive(Debug, Clone, PartialEq)]
pub struct NumericArray {
    pub values: ArrayD<f64>,
    pub kind: ElementKind,
}

impl NumericArray {
    pub fn new(values: ArrayD<f64>, kind: ElementKind) -> Self {
        Self { values, kind }
    }

    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }
}

/// Element types the loader accepts, with their widening to f64
pub trait Widen: Copy {
    const KIND: ElementKind;

    fn widen(self) -> f64;
}

macro_rules! impl_widen {
    ($kind:expr => $($ty:ty),*) => {
        $(
            impl Widen for $ty {
                const KIND: ElementKind = $kind;

                fn widen(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_widen!(ElementKind::Float => f64, f32);
impl_widen!(ElementKind::Integer => i64, i32, i16, i8, u64, u32, u16, u8);

impl Widen for bool {
    const KIND: ElementKind = ElementKind::Bool;

    fn widen(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }
}

impl<T: Widen> From<ArrayD<T>> for NumericArray {
    fn from(array: ArrayD<T>) -> Self {
        NumericArray::new(array.mapv(T::widen), T::KIND)
    }
}

impl NumericArray {
    #[cfg(test)]
    /// Build from a flat, row-major list of values
    pub fn from_shape_vec(shape: &[usize], values: Vec<f64>, kind: ElementKind) -> Option<Self> {
        ArrayD::from_shape_vec(ndarray::IxDyn(shape), values)
            .ok()
            .map(|values| NumericArray::new(values, kind))
    }
}
