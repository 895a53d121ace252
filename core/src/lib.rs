//! # hexseal
//!
//! Symmetric encryption of text into a transport-safe hex envelope,
//! with an optional keyed integrity tag that detects tampering.
//!
//! An envelope has the form `<cipherTextHex>$<ivHex>[$<tagHex>]`:
//! - content is encrypted with AES-256-CTR under a fresh random 16-byte IV
//! - when integrity is enabled, the tag is HMAC-SHA256 over the ciphertext
//!   hex text followed by the IV hex text, truncated to `hmacSize` hex characters
//!
//! ```
//!   use hexseal::{Crypter, EnvelopeCipher};
//!   let crypter = Crypter::new("keyboard cat").unwrap();
//!   let envelope = crypter.encrypt("hello world!").unwrap();
//!   assert_eq!(crypter.decrypt(&envelope).unwrap(), "hello world!");
//! ```
//!
//! ## Keys
//!
//! A caller-supplied key string is reduced to 32 bytes by a single SHA-256
//! pass (see [`kdf`]). That is fine for high-entropy, server-generated secrets,
//! but NOT for user passwords: stretch those with a real password KDF
//! (pbkdf2, scrypt, argon2) first. When no key is given, a random one is
//! generated and lives only as long as the [`Crypter`].
//!
//! ## Implementation notes
//!
//! Crypto algorithms used are implemented by other packages, notably
//! [RustCrypto](https://github.com/rustcrypto/), a pure-rust implemenation.
//!
//! The cipher and digest are fixed. There is no suite negotiation, and the
//! envelope does not name its algorithm.
//!

pub mod ciphers;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod options;
pub mod rand;
pub mod util;

pub use ciphers::{CipherKind, Crypter, DigestKind, EnvelopeCipher};
pub use envelope::Envelope;
pub use error::Error;
pub use options::{Config, Options, Settings};
pub use rand::{OsRandom, RandomSource};
