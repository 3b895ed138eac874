//! Configuration constants and types for passcard generation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default grid size (rows, cols).
pub const GRID_SIZE: (usize, usize) = (80, 80);

/// Default numeric region in the top-left corner (rows, cols).
pub const NUMERIC_GRID: (usize, usize) = (20, 20);

/// Default alphanumeric region in the bottom-right corner (rows, cols).
pub const ALPHA_GRID: (usize, usize) = (40, 40);

/// Default charset. Look-alike letters (i, l, o, I, O) are left out.
pub const CHARSET: &str =
    "0123456789abcdefghjkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ@#$%&*<>?-+{}[]()\\/";

/// Digits used when the charset has none.
pub const DEFAULT_NUMERIC_SPACE: &str = "0123456789";

/// Letters used when the charset has no letters or digits.
pub const DEFAULT_ALPHA_SPACE: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default key file location used by the CLI.
pub const DEFAULT_KEY_FILE: &str = "./passcard.key";

/// Size of the sub-grid shown for the `random` view (rows, cols).
pub const RANDOM_VIEW_SIZE: (usize, usize) = (20, 30);

/// Labels used for row and column headers, in order.
pub const HEADERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789αβγδθλμπϕ$£¥€¢\
                           !#%&*<=>?@✓∞♬♡♢♤♧☯☾✈☎☀☁☂☃★⌘♞✂✎";

/// Key file banners.
pub mod banner {
    /// First line of a key file.
    pub const BEGIN: &str = "-------------------- BEGIN PASSCARD KEY -----------------------";

    /// Last line of a key file.
    pub const END: &str = "-------------------- END PASSCARD KEY -------------------------";

    /// Width at which the base64 payload is wrapped.
    pub const LINE_WIDTH: usize = 60;
}

/// Palette defaults.
pub mod palette_params {
    /// Upper bound of the saturation ramp for the `passcard` palette.
    pub const SMAX: f64 = 0.4;

    /// Saturation used by `martin_ankerl`.
    pub const SATURATION: f64 = 0.33;

    /// Value (brightness) used by `martin_ankerl` and `gradient`.
    pub const VALUE: f64 = 0.93;

    /// Sine amplitude for `krazydad`.
    pub const WIDTH: f64 = 55.0;

    /// Sine center for `krazydad`.
    pub const CENTER: f64 = 200.0;
}

/// Options for a generation run. Persisted alongside the grid.
///
/// Never carries the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasscardOptions {
    /// Characters available to the general fill.
    pub charset: String,

    /// Grid size (rows, cols).
    pub size: (usize, usize),

    /// Top-left numeric block (rows, cols).
    pub numeric: (usize, usize),

    /// Bottom-right alphanumeric block (rows, cols).
    pub alpha: (usize, usize),
}

impl Default for PasscardOptions {
    fn default() -> Self {
        Self {
            charset: CHARSET.to_string(),
            size: GRID_SIZE,
            numeric: NUMERIC_GRID,
            alpha: ALPHA_GRID,
        }
    }
}

impl PasscardOptions {
    /// Default options with a custom charset.
    pub fn with_charset(charset: impl Into<String>) -> Self {
        Self {
            charset: charset.into(),
            ..Self::default()
        }
    }

    /// Validate the options before generation.
    pub fn validate(&self) -> Result<()> {
        if self.charset.is_empty() {
            return Err(Error::EmptyCharset);
        }
        self.check_region("numeric", self.numeric)?;
        self.check_region("alpha", self.alpha)
    }

    fn check_region(&self, region: &'static str, (rows, cols): (usize, usize)) -> Result<()> {
        let (grid_rows, grid_cols) = self.size;
        if rows > grid_rows || cols > grid_cols {
            return Err(Error::RegionOutOfBounds {
                region,
                rows,
                cols,
                grid_rows,
                grid_cols,
            });
        }
        Ok(())
    }
}
