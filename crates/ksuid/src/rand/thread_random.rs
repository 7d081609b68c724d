use crate::{RandSource, Result};
use rand::{RngCore, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded from the OS periodically.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free. This type does **not** store the RNG itself; it simply
/// accesses the thread-local generator on each call, so it is `Send + Sync`
/// and may be installed as the process-wide source.
///
/// ⚠️ NOTE: the thread-local RNG panics rather than erroring if its initial
/// OS seeding fails, so this source never returns `Err`.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        rng().fill_bytes(dest);
        Ok(())
    }
}
