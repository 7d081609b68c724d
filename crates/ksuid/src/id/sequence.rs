use super::{BYTE_LEN, Ksuid};
use crate::{Error, Result};
use core::iter::FusedIterator;

const COUNTER_LEN: usize = 2;

/// Derives up to [`Sequence::MAX_LEN`] ordered KSUIDs from one seed.
///
/// Each identifier is the seed with its last two payload bytes replaced by a
/// big-endian 16-bit counter, so the identifiers share the seed's timestamp
/// and sort in the order they were produced. This trades 16 bits of payload
/// entropy for guaranteed ordering within a batch.
///
/// # Example
///
/// ```
/// use ksuid::{Error, Ksuid, Sequence};
///
/// let mut seq = Sequence::new(Ksuid::NIL);
/// let a = seq.try_next().unwrap();
/// let b = seq.try_next().unwrap();
/// assert!(a < b);
/// assert_eq!(a.timestamp(), b.timestamp());
///
/// let (min, max) = Sequence::new(Ksuid::MAX).bounds();
/// assert!(min < max);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    seed: Ksuid,
    count: u32,
}

impl Sequence {
    /// Number of identifiers a single seed yields.
    pub const MAX_LEN: u32 = 1 << 16;

    /// Starts a sequence from an explicit seed.
    #[must_use]
    pub const fn new(seed: Ksuid) -> Self {
        Self { seed, count: 0 }
    }

    /// Starts a sequence seeded from a freshly generated KSUID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`] if the process-wide entropy
    /// source fails.
    pub fn try_new() -> Result<Self> {
        Ksuid::try_new().map(Self::new)
    }

    /// Returns the seed this sequence derives from.
    #[must_use]
    pub const fn seed(&self) -> Ksuid {
        self.seed
    }

    /// Returns the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SequenceExhausted`] once [`Sequence::MAX_LEN`]
    /// identifiers have been produced.
    pub fn try_next(&mut self) -> Result<Ksuid> {
        let Ok(counter) = u16::try_from(self.count) else {
            return Err(Error::SequenceExhausted);
        };
        self.count += 1;
        Ok(self.with_counter(counter))
    }

    /// Returns the smallest and largest identifiers this sequence can still
    /// produce.
    ///
    /// Any identifier the sequence emits from now on lies within
    /// `min..=max`, which makes the pair usable as a range-scan key.
    #[must_use]
    pub fn bounds(&self) -> (Ksuid, Ksuid) {
        let next = u16::try_from(self.count).unwrap_or(u16::MAX);
        (self.with_counter(next), self.with_counter(u16::MAX))
    }

    /// Returns how many identifiers are left before exhaustion.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        Self::MAX_LEN.saturating_sub(self.count)
    }

    fn with_counter(&self, counter: u16) -> Ksuid {
        let mut bytes = self.seed.to_bytes();
        bytes[BYTE_LEN - COUNTER_LEN..].copy_from_slice(&counter.to_be_bytes());
        Ksuid::from_array(bytes)
    }
}

impl Iterator for Sequence {
    type Item = Ksuid;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sequence {}

impl FusedIterator for Sequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PAYLOAD_LEN;

    fn seed() -> Ksuid {
        Ksuid::from_timestamp_and_payload(100_000_000, [0xAB; PAYLOAD_LEN])
    }

    #[test]
    fn counter_overwrites_last_two_bytes() {
        let mut seq = Sequence::new(seed());
        let first = seq.try_next().unwrap();
        let second = seq.try_next().unwrap();

        assert_eq!(first.timestamp(), 100_000_000);
        assert_eq!(&first.payload()[..14], &[0xAB; 14]);
        assert_eq!(&first.payload()[14..], &[0x00, 0x00]);
        assert_eq!(&second.payload()[14..], &[0x00, 0x01]);
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let ids: Vec<_> = Sequence::new(seed()).take(1_000).collect();
        assert_eq!(ids.len(), 1_000);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert!(ids.windows(2).all(|w| w[0].to_string() < w[1].to_string()));
    }

    #[test]
    fn exhausts_after_max_len() {
        let mut seq = Sequence::new(seed());
        assert_eq!(seq.len(), 65_536);
        let last = seq.by_ref().last().unwrap();
        assert_eq!(&last.payload()[14..], &[0xFF, 0xFF]);
        assert_eq!(seq.remaining(), 0);
        assert_eq!(seq.try_next(), Err(Error::SequenceExhausted));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn iterator_yields_exactly_max_len() {
        assert_eq!(Sequence::new(Ksuid::NIL).count(), Sequence::MAX_LEN as usize);
    }

    #[test]
    fn bounds_cover_remaining_ids() {
        let mut seq = Sequence::new(seed());
        let (min, max) = seq.bounds();
        assert_eq!(&min.payload()[14..], &[0x00, 0x00]);
        assert_eq!(&max.payload()[14..], &[0xFF, 0xFF]);

        let first = seq.try_next().unwrap();
        assert_eq!(first, min);

        let (min, max) = seq.bounds();
        assert_eq!(&min.payload()[14..], &[0x00, 0x01]);
        for id in seq.take(10) {
            assert!(min <= id && id <= max);
        }
    }

    #[test]
    fn seed_is_preserved() {
        let seq = Sequence::new(seed());
        assert_eq!(seq.seed(), seed());
        assert!(Sequence::try_new().is_ok());
    }
}
