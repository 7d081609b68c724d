use crate::Result;

/// A trait for sources of random payload bytes.
///
/// This abstraction allows you to plug in the operating system's secure
/// source, a faster userspace CSPRNG, or a deterministic byte stream in
/// tests.
///
/// # Example
///
/// ```
/// use ksuid::{Ksuid, RandSource, Result};
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
///         dest.fill(0xAB);
///         Ok(())
///     }
/// }
///
/// let id = Ksuid::from_datetime_and_rand(std::time::SystemTime::now(), &FixedRand).unwrap();
/// assert_eq!(id.payload(), [0xAB; 16]);
/// ```
pub trait RandSource {
    /// Fills all of `dest` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable)
    /// if the source cannot supply `dest.len()` bytes. A source must never
    /// report success after filling only part of `dest`.
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()>;
}
