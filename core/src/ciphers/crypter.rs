//! Crypter - AES-256-CTR envelope encryption with optional HMAC tags

use crate::{
    ciphers::{
        aesctr::{self, IVBYTES},
        macs, EnvelopeCipher,
    },
    envelope::Envelope,
    error::{Error, Result},
    options::{Config, Options},
    rand::{OsRandom, RandomSource},
};
use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;
use std::sync::Arc;
use tracing::{trace, warn};

/// Encrypts and decrypts text envelopes under one immutable [`Config`].
///
/// Every encryption draws a fresh random IV. When integrity is enabled, the
/// envelope carries an HMAC-SHA256 tag over the ciphertext and IV fields,
/// and decryption refuses to run until that tag verifies.
///
/// A Crypter holds no mutable state, so one instance may be shared across
/// threads (e.g. in an `Arc`) without locking.
///
/// ```
///   use hexseal::{Crypter, EnvelopeCipher, Settings};
///   let crypter = Crypter::new(Settings::new().key("keyboard cat").integrity(true)).unwrap();
///   let envelope = crypter.encrypt("hello world!").unwrap();
///   assert_eq!(envelope.split('$').count(), 3);
///   assert_eq!(crypter.decrypt(&envelope).unwrap(), "hello world!");
/// ```
pub struct Crypter {
    config: Config,
    rng: Arc<dyn RandomSource>,
}

impl Crypter {
    /// Initialize with options, using the platform CSRNG
    pub fn new<O: Into<Options>>(options: O) -> Result<Self, Error> {
        Self::with_rng(options, Arc::new(OsRandom))
    }

    /// Initialize with options and a custom random source.
    /// The source supplies generated keys and every IV.
    pub fn with_rng<O: Into<Options>>(
        options: O,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Self, Error> {
        let config = Config::resolve(options.into(), rng.as_ref())?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encrypts raw bytes, returning the envelope
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<String, Error> {
        let mut iv = [0u8; IVBYTES];
        self.rng.fill(&mut iv)?;

        let cipher_text = aesctr::encrypt(self.config.cipher_key().as_slice(), &iv, plaintext)?;
        let mut envelope = Envelope::from_parts(&cipher_text, &iv);
        if self.config.integrity() {
            let tag = macs::compute_tag(
                self.config.hmac_key().as_slice(),
                self.config.hmac_size(),
                envelope.cipher_text_hex(),
                envelope.iv_hex(),
            )?;
            envelope = envelope.with_tag(tag);
        }
        trace!(
            len = plaintext.len(),
            integrity = self.config.integrity(),
            "encrypted"
        );
        Ok(envelope.to_string())
    }

    /// Verifies (if integrity is enabled) and decrypts the envelope, returning raw bytes.
    ///
    /// With integrity on, the tag is checked before anything is decoded or
    /// decrypted; a missing or mismatched tag fails without producing plaintext.
    pub fn decrypt_bytes(&self, envelope: &str) -> Result<Bytes, Error> {
        let envelope = match Envelope::parse(envelope) {
            // a lone field has no tag either
            Err(Error::InvalidEnvelope(_)) if self.config.integrity() => Err(missing_tag()),
            res => res,
        }?;
        let iv = if self.config.integrity() {
            self.verify(&envelope)?
        } else {
            envelope.decode_iv()?
        };

        let cipher_text = envelope.decode_cipher_text()?;
        let plaintext = aesctr::decrypt(self.config.cipher_key().as_slice(), &iv, &cipher_text)?;
        trace!(len = plaintext.len(), "decrypted");
        Ok(Bytes::from(plaintext))
    }

    /// Checks the envelope's tag, returning the decoded IV
    fn verify(&self, envelope: &Envelope) -> Result<Vec<u8>, Error> {
        let tag = envelope.tag().ok_or_else(missing_tag)?;
        // an IV that is not hex cannot match any tag
        let iv = envelope.decode_iv().map_err(|_| tag_mismatch())?;
        // the IV is hashed in its canonical lowercase form
        macs::verify_tag(
            self.config.hmac_key().as_slice(),
            self.config.hmac_size(),
            envelope.cipher_text_hex(),
            &hex::encode(&iv),
            tag,
        )
        .map_err(|e| match e {
            Error::Tampered => tag_mismatch(),
            e => e,
        })?;
        Ok(iv)
    }
}

fn missing_tag() -> Error {
    warn!("envelope has no integrity tag");
    Error::MissingTag
}

fn tag_mismatch() -> Error {
    warn!("integrity tag mismatch");
    Error::Tampered
}

#[async_trait]
impl EnvelopeCipher for Crypter {
    fn encrypt(&self, plaintext: &str) -> Result<String, Error> {
        self.encrypt_bytes(plaintext.as_bytes())
    }

    fn decrypt(&self, envelope: &str) -> Result<String, Error> {
        let plaintext = self.decrypt_bytes(envelope)?;
        Ok(String::from_utf8(plaintext.to_vec())?)
    }
}

/// Implementation of Debug that doesn't print keys to prevent accidental leaks via logging
impl fmt::Debug for Crypter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crypter")
            .field("config", &self.config)
            .finish()
    }
}
