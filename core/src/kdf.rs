//! Fixed-length key derivation for caller-supplied key strings
//!
//! This is NOT a password KDF. The input is hashed once with SHA-256, so a
//! low-entropy passphrase can be brute-forced quickly. Passwords must be
//! stretched with a slow KDF (pbkdf2, scrypt, argon2) before they reach here.
//!
//! The derived key is the *text* of the truncated hex digest, not its decoded
//! bytes. Envelopes written by earlier deployments depend on this exact
//! construction, so it must not be replaced with a standard KDF.

use crate::{
    error::{Error, Result},
    rand::{random_vec, RandomSource},
    util::{constant_time_eq, truncate_to},
};
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of hex characters in a SHA-256 digest
pub const DIGEST_HEX_LEN: usize = 64;

/// Secret key bytes, zeroed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyBox {
    key: Vec<u8>,
}

impl KeyBox {
    pub fn from_vec(key: Vec<u8>) -> Self {
        Self { key }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl PartialEq for KeyBox {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.key, &other.key)
    }
}

impl Eq for KeyBox {}

/// Implementation of Debug that doesn't print key to prevent accidental leaks via logging
impl fmt::Debug for KeyBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Key:{}B:SECRET)", self.key.len())
    }
}

/// Derive exactly `len` key bytes from an arbitrary string.
///
/// The bytes are the first `len` characters of the lowercase hex SHA-256
/// digest of `key`. Deterministic for a given (`key`, `len`).
/// Fails if `len` exceeds the 64 characters a digest provides.
///
/// ```
///   use hexseal::kdf::stretch_key;
///   let k = stretch_key("keyboard cat", 32).unwrap();
///   assert_eq!(k.len(), 32);
///   assert!(k.as_slice().iter().all(|b| b.is_ascii_hexdigit()));
/// ```
pub fn stretch_key(key: &str, len: usize) -> Result<KeyBox, Error> {
    if len > DIGEST_HEX_LEN {
        return Err(Error::InvalidKeyLength(len, DIGEST_HEX_LEN));
    }
    let mut digest_hex = hex::encode(Sha256::digest(key.as_bytes()));
    let derived = truncate_to(&digest_hex, len).as_bytes().to_vec();
    digest_hex.zeroize();
    Ok(KeyBox::from_vec(derived))
}

/// Key for a cipher requiring `len` bytes: derived from `key` when one is given,
/// otherwise `len` fresh bytes from `rng`. A missing key is never hashed.
pub fn normalize_key(
    key: Option<&str>,
    len: usize,
    rng: &dyn RandomSource,
) -> Result<KeyBox, Error> {
    match key {
        Some(k) => stretch_key(k, len),
        None => Ok(KeyBox::from_vec(random_vec(rng, len)?)),
    }
}
