use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting the canvas to a file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No export path was chosen")]
    NoPath,

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Export area {width}x{height} exceeds the maximum of {max} pixels per side")]
    TooLarge { width: u32, height: u32, max: u32 },

    #[error("Failed to allocate a {width}x{height} export canvas")]
    Allocate { width: u32, height: u32 },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors produced when raw slider text cannot be turned into a tool width
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolInputError {
    #[error("Tool size is not a number: {0:?}")]
    NotANumber(String),

    #[error("Tool size range {min}..={max} is empty")]
    EmptyRange { min: u32, max: u32 },
}

/// Errors raised while loading a [`crate::CanvasConfig`] file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid canvas config: {0}")]
    Parse(#[from] serde_json::Error),
}
