/// NumPy array loader
///
/// This module turns a `.npy` file or one entry of a `.npz` archive into a
/// `NumericArray`. The element type is not known up front, so each supported
/// type is tried in turn until the header's descriptor matches.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use ndarray::{ArrayD, IxDyn, OwnedRepr};
use ndarray_npy::{NpzReader, ReadNpyError, ReadNpyExt, ReadNpzError, ReadableElement};
use thiserror::Error;

use super::{NumericArray, Widen};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid .npy data: {0}")]
    Npy(#[from] ReadNpyError),

    #[error("Invalid .npz archive: {0}")]
    Npz(#[from] ReadNpzError),

    #[error("Archive has no '{0}' entry")]
    MissingEntry(String),

    #[error("Unsupported element type {0}")]
    UnsupportedDtype(String),
}

/// On-disk format, decided by the file name suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayFormat {
    /// Whole file is one array
    Npy,
    /// Zip archive of named `.npy` entries
    Npz,
}

impl ArrayFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;

        if name.ends_with(".npy") {
            Some(ArrayFormat::Npy)
        } else if name.ends_with(".npz") {
            Some(ArrayFormat::Npz)
        } else {
            None
        }
    }
}

/// Load the array stored at `path`.
///
/// `.npz` archives yield their `archive_key` entry; any other entries are
/// ignored.
pub fn load_array(path: &Path, archive_key: &str) -> Result<NumericArray, LoadError> {
    let format = ArrayFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.display().to_string()))?;

    let array = match format {
        ArrayFormat::Npy => decode_npy(&fs::read(path)?)?,
        // Only the requested entry is read out of the archive
        ArrayFormat::Npz => decode_npz_entry(File::open(path)?, archive_key)?,
    };

    tracing::debug!(
        "📦 Loaded {:?} {:?} array from {}",
        array.shape(),
        array.kind,
        path.display()
    );

    Ok(array)
}

type NpyDecoder = fn(&[u8]) -> Result<NumericArray, ReadNpyError>;
type NpzDecoder = fn(&mut NpzReader<File>, &str) -> Result<NumericArray, ReadNpzError>;

/// Element types tried, most common first
const NPY_DECODERS: [NpyDecoder; 11] = [
    npy_as::<f64>,
    npy_as::<f32>,
    npy_as::<i64>,
    npy_as::<i32>,
    npy_as::<i16>,
    npy_as::<i8>,
    npy_as::<u64>,
    npy_as::<u32>,
    npy_as::<u16>,
    npy_as::<u8>,
    npy_as::<bool>,
];

const NPZ_DECODERS: [NpzDecoder; 11] = [
    npz_as::<f64>,
    npz_as::<f32>,
    npz_as::<i64>,
    npz_as::<i32>,
    npz_as::<i16>,
    npz_as::<i8>,
    npz_as::<u64>,
    npz_as::<u32>,
    npz_as::<u16>,
    npz_as::<u8>,
    npz_as::<bool>,
];

fn npy_as<T: ReadableElement + Widen>(bytes: &[u8]) -> Result<NumericArray, ReadNpyError> {
    ArrayD::<T>::read_npy(bytes).map(NumericArray::from)
}

fn npz_as<T: ReadableElement + Widen>(
    npz: &mut NpzReader<File>,
    name: &str,
) -> Result<NumericArray, ReadNpzError> {
    npz.by_name::<OwnedRepr<T>, IxDyn>(name).map(NumericArray::from)
}

fn decode_npy(bytes: &[u8]) -> Result<NumericArray, LoadError> {
    let mut descriptor = String::new();

    for decode in NPY_DECODERS {
        match decode(bytes) {
            Ok(array) => return Ok(array),
            Err(ReadNpyError::WrongDescriptor(descr)) => descriptor = format!("{descr:?}"),
            Err(err) => return Err(err.into()),
        }
    }

    Err(LoadError::UnsupportedDtype(descriptor))
}

fn decode_npz_entry(archive: File, key: &str) -> Result<NumericArray, LoadError> {
    let mut npz = NpzReader::new(archive)?;

    // Entries are stored as "<key>.npy"; accept a bare key as well
    let entry_file = format!("{key}.npy");
    let names = npz.names()?;
    if !names.iter().any(|name| name == key || *name == entry_file) {
        return Err(LoadError::MissingEntry(key.to_string()));
    }

    let mut descriptor = String::new();

    for decode in NPZ_DECODERS {
        match decode(&mut npz, key) {
            Ok(array) => return Ok(array),
            Err(ReadNpzError::Npy(ReadNpyError::WrongDescriptor(descr))) => {
                descriptor = format!("{descr:?}");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(LoadError::UnsupportedDtype(descriptor))
}
