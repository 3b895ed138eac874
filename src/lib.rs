//! Passcard
//!
//! Generates a large grid of random characters that can be printed and
//! carried around, then used to pick out characters by coordinate as a
//! shared secret. The grid is kept in a key file, encrypted under a
//! user-chosen secret, and read back into named sub-grids for display.
//!
//! # Features
//!
//! - **Grid algebra**: wrap-around row/column selection, slicing, rotation
//! - **Regions**: a numeric top-left corner and an alphanumeric bottom-right corner
//! - **Encrypted key files**: AES-256-CBC under a SHA-512 derived key, base64 armored
//! - **Palettes**: per-row colors with contrasting text colors
//! - **Renderers**: plain text (ANSI colors) and HTML
//!
//! # Architecture
//!
//! ```text
//! secret + options → Generator → Grid → Encrypt → Key file
//! Key file + secret → Decrypt → Reader → View → Renderer
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use passcard::{AsciiRenderer, PasscardOptions, ViewOptions};
//! use std::path::Path;
//!
//! let path = Path::new("./passcard.key");
//! passcard::create("correct horse", path, PasscardOptions::default()).unwrap();
//!
//! let reader = passcard::read("correct horse", path).unwrap();
//! assert!(reader.numeric_grid().is_numeric());
//! println!("{}", reader.render(&AsciiRenderer, &ViewOptions::default()));
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod generator;
pub mod grid;
pub mod keyfile;
pub mod palette;
pub mod reader;
pub mod render;

pub use config::PasscardOptions;
pub use error::{Error, Result};
pub use generator::{Generator, Passcard};
pub use grid::{Coord, Grid, Selector};
pub use palette::{Palette, PaletteKind, PaletteOptions, Rgb};
pub use reader::{Reader, ViewKind, ViewOptions};
pub use render::{AsciiRenderer, HtmlRenderer, OutputFormat, Renderer, View};

use std::path::Path;

/// Generate a passcard and write it, encrypted under `secret`, to `path`.
///
/// Parent directories are created. An existing file is overwritten.
pub fn create(secret: &str, path: &Path, options: PasscardOptions) -> Result<()> {
    Generator::create_key_file(secret, path, options)
}

/// Read and decrypt the passcard at `path`.
pub fn read(secret: &str, path: &Path) -> Result<Reader> {
    Reader::read_key_file(secret, path)
}

/// Re-encrypt the passcard at `path` under a new secret, keeping its grid.
pub fn rekey(old_secret: &str, new_secret: &str, path: &Path) -> Result<()> {
    let passcard = read(old_secret, path)?.to_passcard();
    let envelope = Generator::from_passcard(new_secret, passcard)?.run()?;
    keyfile::write_key_file(path, &envelope)
}
