use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlicerError {
    // IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Cut
    #[error("Error opening input file {}: {source}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Collect
    #[error("No subfiles found in {}", .0.display())]
    NoChunks(PathBuf),

    // Sizes
    #[error("Invalid block size: {0}")]
    InvalidSize(String),

    // Config
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found at {0}, run `slicer init` first")]
    ConfigNotFound(String),

    #[error("TOML deserialization error: {0}")]
    TomlDe(String),

    #[error("TOML serialization error: {0}")]
    TomlSer(String),
}

impl SlicerError {
    /// Failures the CLI prints without failing the process.
    pub fn is_reported_only(&self) -> bool {
        matches!(self, Self::InputOpen { .. } | Self::NoChunks(_))
    }
}

pub type Result<T> = std::result::Result<T, SlicerError>;
