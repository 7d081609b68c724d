use crate::{Error, RandSource, Result};
use rand::{TryRngCore, rngs::OsRng};

/// A `RandSource` that reads directly from the operating system's secure
/// random number generator.
///
/// Every call is a system call (e.g. `getrandom(2)`), so this is the slowest
/// built-in source, but it is the only one that can report failure: if the OS
/// source is unavailable, generation fails with
/// [`Error::EntropyUnavailable`] instead of producing weak payloads.
///
/// This is the default process-wide source.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|err| Error::EntropyUnavailable {
                reason: err.to_string(),
            })
    }
}
