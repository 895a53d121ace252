//! CSRNG based on platform (OS) CSRNG.
//!
//! Random bytes are used for IV generation on every encryption, and for
//! cipher and hmac keys when the caller does not supply them.
//! The source is a trait object so tests can substitute a deterministic one.
//!
use crate::error::{Error, Result};
use std::fmt;

/// Source of cryptographically secure random bytes.
///
/// Implementations must be safe for concurrent use; a single source is shared
/// by every encrypt call on a [`Crypter`](crate::Crypter).
pub trait RandomSource: Send + Sync {
    /// Fill the buffer with random bytes
    fn fill(&self, buf: &mut [u8]) -> Result<(), Error>;
}

/// Platform CSRNG, via the `getrandom` crate.
#[derive(Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), Error> {
        fill_buf(buf)
    }
}

impl fmt::Debug for OsRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OsRandom")
    }
}

/// Fill the buffer with random bytes
/// Currently implemented using `getrandom` crate, which uses
/// native OS/platform implementations.
pub fn fill_buf(buf: &mut [u8]) -> Result<(), Error> {
    getrandom::getrandom(buf)?;
    Ok(())
}

/// Allocate `len` bytes and fill them from `rng`
pub(crate) fn random_vec(rng: &dyn RandomSource, len: usize) -> Result<Vec<u8>, Error> {
    let mut buf = vec![0u8; len];
    rng.fill(&mut buf)?;
    Ok(buf)
}
