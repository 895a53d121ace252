//! AES-256-CTR content cipher
//!
//! The counter is the whole 16-byte IV, incremented as a 128-bit big-endian
//! integer, matching the envelopes produced by earlier deployments.

use crate::error::{Error, Result};
use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};

/// Number of bytes in encryption key (256 bits = 32 bytes)
pub const KEYBYTES: usize = 32;
/// Number of bytes in IV (128 bits = 16 bytes)
pub const IVBYTES: usize = 16;

type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// Encrypt `data` in place. CTR mode is symmetric, so this also decrypts.
pub fn apply_keystream(key: &[u8], iv: &[u8], data: &mut [u8]) -> Result<(), Error> {
    if key.len() != KEYBYTES {
        return Err(Error::InvalidKeyLength(key.len(), KEYBYTES));
    }
    if iv.len() != IVBYTES {
        return Err(Error::InvalidIvLength(iv.len(), IVBYTES));
    }
    let mut cipher = Aes256Ctr::new_from_slices(key, iv)
        .map_err(|_| Error::InvalidParameter("aes-ctr key or iv".to_string()))?;
    cipher
        .try_apply_keystream(data)
        .map_err(|_| Error::InvalidParameter("aes-ctr keystream exhausted".to_string()))
}

/// Returns the ciphertext for `plaintext`
pub fn encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    let mut buf = plaintext.to_vec();
    apply_keystream(key, iv, &mut buf)?;
    Ok(buf)
}

/// Returns the plaintext for `ciphertext`
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    encrypt(key, iv, ciphertext)
}
