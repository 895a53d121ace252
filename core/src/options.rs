//! Construction options and their resolution into an immutable [`Config`]
//!
//! Options may be absent, a bare key string, or a [`Settings`] structure.
//! Loosely-typed input (a json value from a config file or another process)
//! goes through `Options::try_from(serde_json::Value)`, which rejects every
//! other shape with [`Error::InvalidOptions`].

use crate::{
    ciphers::{aesctr, CipherKind, DigestKind},
    error::{Error, Result},
    kdf::{normalize_key, KeyBox},
    rand::{random_vec, RandomSource},
    util::{getenv, getenv_default},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::TryFrom;
use std::fmt;
use tracing::debug;

/// Tag length, in hex characters, when none is configured
pub const DEFAULT_HMAC_SIZE: usize = 64;
/// Number of random bytes in a generated hmac key
pub const HMAC_KEYBYTES: usize = 32;
/// Prefix for environment variables read by [`Options::from_env`]
pub const ENV_PREFIX: &str = "HEXSEAL";

/// Caller-facing settings. Field names follow the json form
/// (`key`, `hmacKey`, `integrity`, `hmacSize`).
#[derive(Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// secret used to derive the cipher key. Random key if absent or empty.
    pub key: Option<String>,
    /// secret used as the hmac key. Random key if absent or empty.
    pub hmac_key: Option<String>,
    /// generate and verify integrity tags
    pub integrity: bool,
    /// tag length in hex characters. Kept as a json number so that fractional
    /// and non-numeric input can be rejected at resolution time.
    pub hmac_size: Option<f64>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key<S: Into<String>>(mut self, key: S) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn hmac_key<S: Into<String>>(mut self, hmac_key: S) -> Self {
        self.hmac_key = Some(hmac_key.into());
        self
    }

    pub fn integrity(mut self, integrity: bool) -> Self {
        self.integrity = integrity;
        self
    }

    /// Tag length in hex characters. Accepts anything convertible to `f64`
    /// without loss (`u8`..`u32`, `i8`..`i32`, `f32`, `f64`); use
    /// [`hmac_len`](Self::hmac_len) for a `usize`.
    pub fn hmac_size<N: Into<f64>>(mut self, size: N) -> Self {
        self.hmac_size = Some(size.into());
        self
    }

    /// Tag length in hex characters, as a length
    pub fn hmac_len(mut self, len: usize) -> Self {
        self.hmac_size = Some(len as f64);
        self
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self, Error> {
        Ok(Self {
            key: string_field(map, "key")?,
            hmac_key: string_field(map, "hmacKey")?,
            integrity: map.get("integrity").map(truthy).unwrap_or(false),
            // null and non-numbers are present-but-invalid sizes
            hmac_size: map
                .get("hmacSize")
                .map(|v| v.as_f64().unwrap_or(f64::NAN)),
        })
    }
}

/// Implementation of Debug that doesn't print keys to prevent accidental leaks via logging
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("key", &self.key.as_ref().map(|_| "SECRET"))
            .field("hmac_key", &self.hmac_key.as_ref().map(|_| "SECRET"))
            .field("integrity", &self.integrity)
            .field("hmac_size", &self.hmac_size)
            .finish()
    }
}

/// Accepted construction input
#[derive(Clone, PartialEq)]
pub enum Options {
    /// random cipher and hmac keys, integrity off
    Default,
    /// equivalent to `Settings::new().key(s)`
    Key(String),
    Settings(Settings),
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Options::Default => f.write_str("Default"),
            Options::Key(_) => f.write_str("Key(SECRET)"),
            Options::Settings(s) => f.debug_tuple("Settings").field(s).finish(),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::Default
    }
}

impl From<&str> for Options {
    fn from(key: &str) -> Self {
        Options::Key(key.to_string())
    }
}

impl From<String> for Options {
    fn from(key: String) -> Self {
        Options::Key(key)
    }
}

impl From<Settings> for Options {
    fn from(settings: Settings) -> Self {
        Options::Settings(settings)
    }
}

impl<T: Into<Options>> From<Option<T>> for Options {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or_default()
    }
}

impl TryFrom<Value> for Options {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Error> {
        Options::try_from(&value)
    }
}

impl TryFrom<&Value> for Options {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(Options::Default),
            Value::String(s) => Ok(Options::Key(s.clone())),
            Value::Object(map) => Ok(Options::Settings(Settings::from_map(map)?)),
            Value::Array(_) => Err(invalid_shape("array")),
            Value::Bool(_) => Err(invalid_shape("boolean")),
            Value::Number(_) => Err(invalid_shape("number")),
        }
    }
}

impl Options {
    /// Parse options from json text
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::InvalidOptions(format!("invalid json: {}", e)))?;
        Options::try_from(value)
    }

    /// Read options from `HEXSEAL_KEY`, `HEXSEAL_HMAC_KEY`,
    /// `HEXSEAL_INTEGRITY` and `HEXSEAL_HMAC_SIZE`
    pub fn from_env() -> Self {
        Self::from_env_prefix(ENV_PREFIX)
    }

    /// Same as [`from_env`](Self::from_env), with a custom variable prefix
    pub fn from_env_prefix(prefix: &str) -> Self {
        let var = |name: &str| format!("{}_{}", prefix, name);
        let integrity = getenv_default(&var("INTEGRITY"), "");
        let settings = Settings {
            key: getenv(&var("KEY")).ok(),
            hmac_key: getenv(&var("HMAC_KEY")).ok(),
            integrity: matches!(
                integrity.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ),
            hmac_size: getenv(&var("HMAC_SIZE"))
                .ok()
                .map(|s| s.trim().parse::<f64>().unwrap_or(f64::NAN)),
        };
        Options::Settings(settings)
    }
}

/// Resolved, immutable configuration of a [`Crypter`](crate::Crypter)
#[derive(Clone, Debug)]
pub struct Config {
    algorithm: CipherKind,
    digest: DigestKind,
    integrity: bool,
    hmac_size: usize,
    cipher_key: KeyBox,
    hmac_key: KeyBox,
}

impl Config {
    /// Validate options and fill in defaults.
    /// Missing keys are generated from `rng`.
    pub fn resolve(options: Options, rng: &dyn RandomSource) -> Result<Self, Error> {
        let settings = match options {
            Options::Default => Settings::default(),
            Options::Key(key) => Settings::new().key(key),
            Options::Settings(settings) => settings,
        };
        let size = settings.hmac_size.unwrap_or(DEFAULT_HMAC_SIZE as f64);
        let hmac_size = if settings.integrity {
            validate_hmac_size(size)?
        } else {
            // unused without integrity, so an invalid value is not an error
            validate_hmac_size(size).unwrap_or(DEFAULT_HMAC_SIZE)
        };

        let key = non_empty(settings.key.as_deref());
        let hmac_key = non_empty(settings.hmac_key.as_deref());
        let cipher_key = normalize_key(key, aesctr::KEYBYTES, rng)?;
        let hmac_key_box = match hmac_key {
            Some(k) => KeyBox::from_vec(k.as_bytes().to_vec()),
            None => KeyBox::from_vec(random_vec(rng, HMAC_KEYBYTES)?),
        };

        let config = Self {
            algorithm: CipherKind::Aes256Ctr,
            digest: DigestKind::Sha256,
            integrity: settings.integrity,
            hmac_size,
            cipher_key,
            hmac_key: hmac_key_box,
        };
        debug!(
            algorithm = %config.algorithm,
            digest = %config.digest,
            integrity = config.integrity,
            hmac_size = config.hmac_size,
            key_supplied = key.is_some(),
            hmac_key_supplied = hmac_key.is_some(),
            "resolved crypter options"
        );
        Ok(config)
    }

    pub fn algorithm(&self) -> CipherKind {
        self.algorithm
    }

    pub fn digest(&self) -> DigestKind {
        self.digest
    }

    pub fn integrity(&self) -> bool {
        self.integrity
    }

    /// tag length in hex characters
    pub fn hmac_size(&self) -> usize {
        self.hmac_size
    }

    pub(crate) fn cipher_key(&self) -> &KeyBox {
        &self.cipher_key
    }

    pub(crate) fn hmac_key(&self) -> &KeyBox {
        &self.hmac_key
    }
}

/// Tag sizes must be whole numbers greater than zero
fn validate_hmac_size(size: f64) -> Result<usize, Error> {
    if size.is_finite() && size.fract() == 0.0 && size > 0.0 {
        // saturates for sizes beyond usize; truncation caps at the digest length anyway
        Ok(size as usize)
    } else {
        Err(Error::InvalidHmacSize(size.to_string()))
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

fn invalid_shape(kind: &str) -> Error {
    Error::InvalidOptions(format!(
        "options must be an object or string, got {}",
        kind
    ))
}

fn string_field(map: &Map<String, Value>, name: &str) -> Result<Option<String>, Error> {
    match map.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Error::InvalidOptions(format!("{} must be a string", name))),
    }
}

/// json truthiness: false, null, 0, NaN and "" are false
fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
