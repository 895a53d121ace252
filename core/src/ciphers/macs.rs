//! Truncated HMAC-SHA256 integrity tags
//!
//! The tag covers the ciphertext hex text followed by the IV hex text,
//! is hex encoded, and keeps only the first `size` characters.

use crate::{
    error::{Error, Result},
    util::{constant_time_eq, truncate_to},
};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Number of hex characters in an untruncated tag
pub const FULL_TAG_HEX_LEN: usize = 64;

/// Compute the tag for an envelope's ciphertext and IV fields
pub fn compute_tag(
    hmac_key: &[u8],
    size: usize,
    cipher_text_hex: &str,
    iv_hex: &str,
) -> Result<String, Error> {
    // hmac accepts keys of any length; the error arm is unreachable for Hmac<Sha256>
    let mut mac = <HmacSha256 as Mac>::new_from_slice(hmac_key)
        .map_err(|e| Error::InvalidParameter(format!("hmac key: {}", e)))?;
    mac.update(cipher_text_hex.as_bytes());
    mac.update(iv_hex.as_bytes());
    let full = hex::encode(mac.finalize().into_bytes());
    Ok(truncate_to(&full, size).to_string())
}

/// Recompute the tag and compare it to `tag` in constant time.
/// Fails with [`Error::Tampered`] on mismatch.
pub fn verify_tag(
    hmac_key: &[u8],
    size: usize,
    cipher_text_hex: &str,
    iv_hex: &str,
    tag: &str,
) -> Result<(), Error> {
    let expected = compute_tag(hmac_key, size, cipher_text_hex, iv_hex)?;
    if constant_time_eq(&expected, tag) {
        Ok(())
    } else {
        Err(Error::Tampered)
    }
}
