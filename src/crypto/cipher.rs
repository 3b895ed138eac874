//! AES-256-CBC encryption with PKCS#7 padding.

use crate::crypto::kdf::SecretKey;
use crate::error::{Error, Result};
use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Cipher block size (128 bits).
pub const BLOCK_SIZE: usize = 16;

/// IV size, one block.
const IV_SIZE: usize = BLOCK_SIZE;

/// Prefix of every plaintext. A wrong key garbles it even when the padding
/// happens to check out.
const PLAINTEXT_MAGIC: &[u8] = b"PASSCARD/1\n";

/// AES-256-CBC cipher wrapper.
pub struct Cipher {
    key: SecretKey,
}

impl Cipher {
    /// Create a new cipher from a derived key.
    pub fn new(key: SecretKey) -> Self {
        Self { key }
    }

    /// Encrypt data with a random IV.
    ///
    /// Returns: iv (16 bytes) || ciphertext
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut iv = [0u8; IV_SIZE];
        rand::thread_rng().fill_bytes(&mut iv);

        let mut message = Vec::with_capacity(PLAINTEXT_MAGIC.len() + plaintext.len());
        message.extend_from_slice(PLAINTEXT_MAGIC);
        message.extend_from_slice(plaintext);

        let ciphertext = Aes256CbcEnc::new_from_slices(self.key.as_bytes(), &iv)
            .map_err(|e| Error::Encryption(e.to_string()))?
            .encrypt_padded_vec_mut::<Pkcs7>(&message);

        let mut result = Vec::with_capacity(IV_SIZE + ciphertext.len());
        result.extend_from_slice(&iv);
        result.extend_from_slice(&ciphertext);

        Ok(result)
    }

    /// Decrypt data that was encrypted with `encrypt`.
    ///
    /// Expects: iv (16 bytes) || ciphertext
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() < IV_SIZE + BLOCK_SIZE || data.len() % BLOCK_SIZE != 0 {
            return Err(Error::TruncatedCiphertext {
                len: data.len(),
                block: BLOCK_SIZE,
            });
        }

        let (iv, ciphertext) = data.split_at(IV_SIZE);
        let plaintext = Aes256CbcDec::new_from_slices(self.key.as_bytes(), iv)
            .map_err(|e| Error::Encryption(e.to_string()))?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| Error::InvalidDecryptionKey)?;

        plaintext
            .strip_prefix(PLAINTEXT_MAGIC)
            .map(<[u8]>::to_vec)
            .ok_or(Error::InvalidDecryptionKey)
    }
}
