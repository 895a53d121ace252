//! Crate error handling

pub use std::result::Result;
use thiserror::Error as ThisError;

/// Error enum that rolls-up all error messages in this crate
#[derive(Debug, ThisError)]
pub enum Error {
    /// Construction input was not a string, a settings object, or absent
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Tag length must be a positive whole number when integrity is enabled
    #[error("hmacSize must be a positive non-zero integer, got {0}")]
    InvalidHmacSize(String),

    /// Integrity is enabled but the envelope has no tag field
    #[error("Missing HMAC, integrity could not be checked.")]
    MissingTag,

    /// Tag verification failed
    #[error("Encrypted blob has been tampered.")]
    Tampered,

    #[error("Invalid envelope: {0}")]
    InvalidEnvelope(String),

    #[error("Invalid IV length {0}, expected {1}")]
    InvalidIvLength(usize, usize),

    #[error("Invalid key length {0}, expected {1}")]
    InvalidKeyLength(usize, usize),

    #[error("Hex decoding error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Missing environment setting: {0}")]
    MissingEnv(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Random generation error: {0}")]
    Random(String),

    #[error("encoding error {0}")]
    UTF8EncodingError(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(e: std::string::FromUtf8Error) -> Error {
        Error::UTF8EncodingError(e.to_string())
    }
}

impl From<getrandom::Error> for Error {
    fn from(e: getrandom::Error) -> Error {
        Error::Random(e.to_string())
    }
}
