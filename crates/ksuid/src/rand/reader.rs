use crate::{Error, RandSource, Result};
use parking_lot::Mutex;
use std::io::Read;

/// A `RandSource` backed by any [`Read`] implementation.
///
/// Reads are serialized through a mutex, and each fill uses
/// [`Read::read_exact`], so a short stream fails with
/// [`Error::EntropyUnavailable`] rather than yielding a partial payload.
///
/// Useful for deterministic tests (`std::io::Cursor`, `std::io::repeat`) or
/// for an entropy device such as `/dev/urandom` opened as a `File`.
///
/// # Example
///
/// ```
/// use ksuid::{Ksuid, ReaderRandom};
/// use std::io::Cursor;
///
/// let rng = ReaderRandom::new(Cursor::new([7_u8; 32]));
/// let now = std::time::SystemTime::now();
/// assert_eq!(Ksuid::from_datetime_and_rand(now, &rng).unwrap().payload(), [7; 16]);
/// assert_eq!(Ksuid::from_datetime_and_rand(now, &rng).unwrap().payload(), [7; 16]);
/// assert!(Ksuid::from_datetime_and_rand(now, &rng).is_err());
/// ```
#[derive(Debug)]
pub struct ReaderRandom<R> {
    reader: Mutex<R>,
}

impl<R: Read> ReaderRandom<R> {
    /// Wraps `reader` as an entropy source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }

    /// Consumes the source and returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: Read> RandSource for ReaderRandom<R> {
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        self.reader
            .lock()
            .read_exact(dest)
            .map_err(|err| Error::EntropyUnavailable {
                reason: err.to_string(),
            })
    }
}
