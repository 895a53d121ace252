//! Encryption ciphers

use crate::error::{Error, Result};
use async_trait::async_trait;
use strum_macros::{AsRefStr, Display, EnumString};

pub mod aesctr;
pub mod macs;

mod crypter;
pub use crypter::Crypter;


/// Content cipher. Fixed: the envelope format carries no algorithm identifier.
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum CipherKind {
    /// AES with 256-bit key in counter mode, 128-bit big-endian counter
    #[strum(to_string = "AES-256-CTR", serialize = "aes256ctr")]
    Aes256Ctr,
}

/// Hash used for integrity tags
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum DigestKind {
    /// HMAC-SHA256, 64 hex characters before truncation
    #[strum(to_string = "SHA256", serialize = "sha-256")]
    Sha256,
}

/// Encrypts text into a `$`-delimited hex envelope and back.
///
/// The synchronous methods are the core. The async variants run the same
/// computation and exist for callers that compose with futures; there is no
/// I/O, so nothing ever suspends and no runtime is required.
#[async_trait]
pub trait EnvelopeCipher: Send + Sync {
    /// Encrypts the text, returning the envelope
    fn encrypt(&self, plaintext: &str) -> Result<String, Error>;

    /// Verifies (if integrity is enabled) and decrypts the envelope
    fn decrypt(&self, envelope: &str) -> Result<String, Error>;

    async fn encrypt_async(&self, plaintext: &str) -> Result<String, Error> {
        self.encrypt(plaintext)
    }

    async fn decrypt_async(&self, envelope: &str) -> Result<String, Error> {
        self.decrypt(envelope)
    }
}
