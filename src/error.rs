use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// A label field that is not a valid floating point number.
#[derive(Debug, Error)]
#[error("{value:?} is not a number")]
pub struct InvalidField {
    pub value: String,
    #[source]
    pub source: ParseFloatError,
}

/// Fatal failures that abort a rescaling run.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("label directory does not exist: {}", path.display())]
    LabelDirNotFound { path: PathBuf },

    #[error("label directory path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("invalid label file pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to list label files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read image dimensions from {}: {source}", path.display())]
    ImageHeader {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error("image {} has zero width or height", path.display())]
    EmptyImage { path: PathBuf },

    #[error("image {} is too large: {width}x{height}", path.display())]
    ImageTooLarge {
        path: PathBuf,
        width: usize,
        height: usize,
    },

    #[error("invalid label on line {line} of {}: {source}", path.display())]
    InvalidLabel {
        path: PathBuf,
        line: usize,
        #[source]
        source: InvalidField,
    },
}

impl ResizeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
