//! Error types for passcard generation and reading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for passcard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating, storing or reading a passcard.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading or writing a key file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Grid rows do not all have the same length.
    #[error("Invalid grid: a grid requires rows of equal length")]
    InvalidGrid,

    /// Decryption failed under the derived key (wrong secret).
    #[error("Decryption failed: wrong secret key or not a valid passcard")]
    InvalidDecryptionKey,

    /// Ciphertext length is not a whole number of cipher blocks.
    #[error("Truncated ciphertext: {len} bytes is not a multiple of the {block} byte block size")]
    TruncatedCiphertext { len: usize, block: usize },

    /// Envelope body is empty, or the decrypted payload cannot be parsed.
    #[error("Empty or corrupt payload: {0}")]
    EmptyOrCorruptPayload(String),

    /// No color generator exists under the requested name.
    #[error("No such color generator: {0}")]
    UnknownPaletteType(String),

    /// No renderer exists for the requested output format.
    #[error("No such output format: {0}")]
    UnknownFormat(String),

    /// A numeric or alphanumeric region does not fit inside the grid.
    #[error("Region '{region}' of {rows}x{cols} does not fit in a {grid_rows}x{grid_cols} grid")]
    RegionOutOfBounds {
        region: &'static str,
        rows: usize,
        cols: usize,
        grid_rows: usize,
        grid_cols: usize,
    },

    /// The charset has no characters to draw from.
    #[error("Charset must contain at least one character")]
    EmptyCharset,

    /// Encryption error.
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Refusing to overwrite an existing key file.
    #[error("Identity file exists: {0}")]
    KeyFileExists(PathBuf),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
