//! Encrypted envelope for passcard data.
//!
//! This module provides:
//! - SHA-512 key derivation from the user's secret
//! - AES-256-CBC encryption of a JSON-serialized value, base64 encoded
//!
//! The cipher choice is a legacy carry-over, not a hardened secret store.

mod cipher;
mod kdf;

pub use cipher::{Cipher, BLOCK_SIZE};
pub use kdf::{SecretKey, KEY_LENGTH};

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize `value` to JSON and encrypt it under `secret`.
///
/// Returns the base64 text of the ciphertext.
pub fn encrypt_data<T: Serialize>(value: &T, secret: &str) -> Result<String> {
    encrypt_with_key(value, &SecretKey::derive(secret))
}

/// Decrypt base64 text produced by [`encrypt_data`] and parse the JSON inside.
pub fn decrypt_data<T: DeserializeOwned>(encoded: &str, secret: &str) -> Result<T> {
    decrypt_with_key(encoded, &SecretKey::derive(secret))
}

/// Encrypt with a pre-derived key.
pub fn encrypt_with_key<T: Serialize>(value: &T, key: &SecretKey) -> Result<String> {
    let json = serde_json::to_vec(value)?;
    let ciphertext = Cipher::new(key.clone()).encrypt(&json)?;
    Ok(STANDARD.encode(ciphertext))
}

/// Decrypt with a pre-derived key.
pub fn decrypt_with_key<T: DeserializeOwned>(encoded: &str, key: &SecretKey) -> Result<T> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(Error::EmptyOrCorruptPayload("envelope is empty".to_string()));
    }

    let ciphertext = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| Error::EmptyOrCorruptPayload(format!("invalid base64: {}", e)))?;
    let json = Cipher::new(key.clone()).decrypt(&ciphertext)?;

    if json.is_empty() {
        return Err(Error::EmptyOrCorruptPayload(
            "decrypted payload is empty".to_string(),
        ));
    }
    serde_json::from_slice(&json).map_err(|e| Error::EmptyOrCorruptPayload(e.to_string()))
}
