//! RandomSource - CSPRNG wrapper with bias-free sampling
//!
//! Every random decision in the crate goes through this type. The default
//! source binds the thread-local generator returned by [`rand::rng`], which is
//! a ChaCha-based CSPRNG seeded and periodically reseeded from the operating
//! system. Each thread owns its own generator state, so concurrent callers
//! never share or interleave byte streams.

use rand::rngs::ThreadRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::{GenError, Result};

/// Cryptographically secure random source
#[derive(Debug)]
pub struct RandomSource<R = ThreadRng> {
    rng: R,
}

impl RandomSource<ThreadRng> {
    /// Create a source backed by the thread-local CSPRNG
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomSource<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> RandomSource<R> {
    /// Wrap an existing CSPRNG (e.g. a seeded `StdRng` in tests)
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform integer in `[0, bound)` without modulo bias
    ///
    /// Draws 64-bit values and rejects those at or above the largest multiple
    /// of `bound`, so every residue is equally likely. At most half of the
    /// draws are rejected for any bound.
    pub fn uniform_index(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(GenError::InvalidArgument("bound must be greater than 0".to_string()));
        }

        let bound = bound as u64;
        let zone = (u64::MAX / bound) * bound;
        loop {
            let x = self.rng.next_u64();
            if x < zone {
                return Ok((x % bound) as usize);
            }
        }
    }

    /// Uniformly chosen element of `items`
    pub fn choose_one<T: Copy>(&mut self, items: &[T]) -> Result<T> {
        if items.is_empty() {
            return Err(GenError::InvalidArgument("cannot choose from an empty set".to_string()));
        }
        let idx = self.uniform_index(items.len())?;
        Ok(items[idx])
    }

    /// Fill `dest` with random bytes
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    /// `n` random bytes rendered as `2n` lowercase hex characters
    pub fn hex_bytes(&mut self, n: usize) -> Result<String> {
        if n == 0 {
            return Err(GenError::InvalidArgument("byte count must be greater than 0".to_string()));
        }
        debug!(n, "RandomSource::hex_bytes: called");

        let mut bytes = vec![0u8; n];
        self.rng.fill_bytes(&mut bytes);
        Ok(hex::encode(bytes))
    }
}
