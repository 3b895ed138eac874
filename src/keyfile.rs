//! Key file format: an envelope between BEGIN/END banner lines.
//!
//! ```text
//! -------------------- BEGIN PASSCARD KEY -----------------------
//! <base64, wrapped at 60 columns>
//! -------------------- END PASSCARD KEY -------------------------
//! ```

use crate::config::banner;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

const BEGIN_MARK: &str = "BEGIN PASSCARD KEY";
const END_MARK: &str = "END PASSCARD KEY";

/// Wrap an envelope in banner lines.
pub fn armor(envelope: &str) -> String {
    let compact: String = envelope.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = String::with_capacity(compact.len() + 2 * banner::BEGIN.len());

    out.push_str(banner::BEGIN);
    out.push('\n');
    let chars: Vec<char> = compact.chars().collect();
    for line in chars.chunks(banner::LINE_WIDTH) {
        out.extend(line);
        out.push('\n');
    }
    out.push_str(banner::END);
    out.push('\n');
    out
}

/// Extract the envelope from between the banner lines.
pub fn dearmor(text: &str) -> Result<String> {
    let mut lines = text.lines();
    if !lines.any(|line| line.contains(BEGIN_MARK)) {
        return Err(Error::EmptyOrCorruptPayload(
            "missing BEGIN PASSCARD KEY line".to_string(),
        ));
    }

    let mut envelope = String::new();
    for line in lines {
        if line.contains(END_MARK) {
            return Ok(envelope);
        }
        envelope.extend(line.chars().filter(|c| !c.is_whitespace()));
    }
    Err(Error::EmptyOrCorruptPayload(
        "missing END PASSCARD KEY line".to_string(),
    ))
}

/// Write an envelope to `path`, creating parent directories.
pub fn write_key_file(path: &Path, envelope: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, armor(envelope))?;
    Ok(())
}

/// Read the envelope stored at `path`.
pub fn read_key_file(path: &Path) -> Result<String> {
    dearmor(&fs::read_to_string(path)?)
}
