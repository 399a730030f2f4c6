use std::path::PathBuf;

use duotone_dither::DitherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Unsupported image format in {}: {message}", path.display())]
    UnsupportedFormat { path: PathBuf, message: String },

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify an `image` decoding failure for `path`.
    pub fn from_image(path: impl Into<PathBuf>, err: image::ImageError) -> Self {
        let path = path.into();
        match err {
            image::ImageError::IoError(source) => AppError::Io { path, source },
            image::ImageError::Unsupported(e) => AppError::UnsupportedFormat {
                path,
                message: e.to_string(),
            },
            other => AppError::Decode {
                path,
                message: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),
}
