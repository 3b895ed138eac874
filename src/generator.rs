//! Random passcard generation.
//!
//! Each cell is drawn independently and uniformly from the character space of
//! its region:
//!
//! ```text
//! +-----------+-----------------+
//! |  numeric  |                 |
//! +-----------+     charset     |
//! |                 +-----------+
//! |                 | alphanum  |
//! +-----------------+-----------+
//! ```
//!
//! The numeric corner wins where the two corners overlap. The secret only
//! keys the envelope; it never seeds the grid.

use crate::config::{PasscardOptions, DEFAULT_ALPHA_SPACE, DEFAULT_NUMERIC_SPACE};
use crate::crypto::{encrypt_with_key, SecretKey};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::keyfile;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything stored inside an envelope: the options plus the flattened grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passcard {
    #[serde(flatten)]
    pub options: PasscardOptions,

    /// Row-major grid, `size.0 * size.1` characters.
    pub grid: String,
}

impl Passcard {
    /// Check the stored grid against the stored options.
    pub fn validate(&self) -> Result<()> {
        self.options.validate()?;
        let (rows, cols) = self.options.size;
        let len = self.grid.chars().count();
        if rows.checked_mul(cols) != Some(len) {
            return Err(Error::EmptyOrCorruptPayload(format!(
                "grid has {} characters, expected {}x{}",
                len, rows, cols
            )));
        }
        Ok(())
    }

    /// Rebuild the grid from its flattened form.
    pub fn to_grid(&self) -> Result<Grid> {
        self.validate()?;
        Grid::from_flat(&self.grid, self.options.size.1)
    }
}

/// The three character spaces a grid draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSpaces {
    pub numeric: Vec<char>,
    pub alpha: Vec<char>,
    pub general: Vec<char>,
}

impl CharSpaces {
    /// Derive the spaces from a charset. Duplicate characters count once.
    pub fn from_charset(charset: &str) -> Self {
        let general = unique(charset.chars());

        let mut numeric = unique(general.iter().copied().filter(char::is_ascii_digit));
        if numeric.is_empty() {
            numeric = DEFAULT_NUMERIC_SPACE.chars().collect();
        }

        let mut alpha = unique(
            general
                .iter()
                .copied()
                .filter(char::is_ascii_alphanumeric),
        );
        if alpha.is_empty() {
            alpha = DEFAULT_ALPHA_SPACE.chars().collect();
        }

        Self {
            numeric,
            alpha,
            general,
        }
    }
}

fn unique(chars: impl Iterator<Item = char>) -> Vec<char> {
    let mut seen = Vec::new();
    for c in chars {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}

/// Region a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Numeric,
    Alphanumeric,
    General,
}

/// Builds passcards and seals them under a secret.
pub struct Generator {
    key: SecretKey,
    options: PasscardOptions,
    grid: Option<String>,
}

impl Generator {
    /// Create a generator for fresh content.
    ///
    /// Fails with [`Error::RegionOutOfBounds`] or [`Error::EmptyCharset`]
    /// before anything is generated.
    pub fn new(secret: &str, options: PasscardOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            key: SecretKey::derive(secret),
            options,
            grid: None,
        })
    }

    /// Create a generator that re-seals existing content under a new secret.
    pub fn from_passcard(secret: &str, passcard: Passcard) -> Result<Self> {
        passcard.validate()?;
        Ok(Self {
            key: SecretKey::derive(secret),
            options: passcard.options,
            grid: Some(passcard.grid),
        })
    }

    pub fn options(&self) -> &PasscardOptions {
        &self.options
    }

    /// Region of the cell at `(row, col)`.
    pub fn region(&self, row: usize, col: usize) -> Region {
        let (rows, cols) = self.options.size;
        let (num_rows, num_cols) = self.options.numeric;
        let (alpha_rows, alpha_cols) = self.options.alpha;

        if row < num_rows && col < num_cols {
            Region::Numeric
        } else if row >= rows - alpha_rows && col >= cols - alpha_cols {
            Region::Alphanumeric
        } else {
            Region::General
        }
    }

    /// Draw a new grid.
    pub fn generate_grid<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid> {
        let spaces = CharSpaces::from_charset(&self.options.charset);
        let (rows, cols) = self.options.size;

        let mut flat = String::with_capacity(rows.saturating_mul(cols));
        for r in 0..rows {
            for c in 0..cols {
                let space = match self.region(r, c) {
                    Region::Numeric => &spaces.numeric,
                    Region::Alphanumeric => &spaces.alpha,
                    Region::General => &spaces.general,
                };
                let ch = space.choose(&mut *rng).ok_or(Error::EmptyCharset)?;
                flat.push(*ch);
            }
        }

        Grid::from_flat(&flat, cols)
    }

    /// Generate content if there is none yet and return the sealed envelope.
    pub fn run(&mut self) -> Result<String> {
        self.run_with_rng(&mut rand::thread_rng())
    }

    /// Like [`Generator::run`], drawing content from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String> {
        let grid = match self.grid.take() {
            Some(grid) => grid,
            None => self.generate_grid(rng)?.to_flat_string(),
        };
        let passcard = Passcard {
            options: self.options.clone(),
            grid,
        };
        let envelope = encrypt_with_key(&passcard, &self.key);
        self.grid = Some(passcard.grid);
        envelope
    }

    /// Generate a passcard and write it to a key file at `path`.
    pub fn create_key_file(secret: &str, path: &Path, options: PasscardOptions) -> Result<()> {
        let envelope = Self::new(secret, options)?.run()?;
        keyfile::write_key_file(path, &envelope)
    }
}
