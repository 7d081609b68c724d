use crate::base62::{self, Base62Formatter};
use crate::time::{from_corrected_timestamp, now, to_corrected_timestamp, unix_seconds};
use crate::{Error, RandSource, Result, rand_source};
use core::cmp::Ordering;
use core::fmt;
use std::time::SystemTime;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Length of the big-endian timestamp field, in bytes.
pub const TIMESTAMP_LEN: usize = 4;

/// Length of the random payload field, in bytes.
pub const PAYLOAD_LEN: usize = 16;

/// Length of the binary form, in bytes.
pub const BYTE_LEN: usize = TIMESTAMP_LEN + PAYLOAD_LEN;

/// Length of the text form, in base62 characters.
pub const STRING_LEN: usize = base62::ENCODED_LEN;

/// Text form of [`Ksuid::MAX`], the lexicographically largest valid KSUID.
pub const MAX_STRING_ENCODED: &str = "aWgEPTl1tmebfsQzFP4bxwgy80V";

const _: () = {
    // Compile-time check: the layout must match the codec width.
    assert!(
        BYTE_LEN == base62::DECODED_LEN,
        "Layout must match the base62 codec width"
    );
};

/// A K-Sortable Unique Identifier.
///
/// - 32 bits timestamp (seconds since [`KSUID_EPOCH`], big-endian)
/// - 128 bits random payload
///
/// ```text
///  Byte Index:  0             3 4                   19
///               +---------------+---------------------+
///  Field:       | timestamp (4) |    payload (16)     |
///               +---------------+---------------------+
///               |<--- MSB ---- 20 bytes ---- LSB ---->|
/// ```
///
/// `Ord` compares the raw bytes as an unsigned big-endian number, so
/// identifiers sort by timestamp first and payload second. The 27-character
/// text form sorts identically.
///
/// The all-zero value, [`Ksuid::NIL`], represents "no identifier". It is also
/// the [`Default`].
///
/// [`KSUID_EPOCH`]: crate::KSUID_EPOCH
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Ksuid {
    bytes: [u8; BYTE_LEN],
}

impl Ksuid {
    /// The all-zero identifier.
    pub const NIL: Self = Self::from_array([0; BYTE_LEN]);

    /// The all-ones identifier; its text form is [`MAX_STRING_ENCODED`].
    pub const MAX: Self = Self::from_array([0xFF; BYTE_LEN]);

    /// Wraps a 20-byte binary form without validation. Every 20-byte value is
    /// a valid KSUID.
    #[must_use]
    pub const fn from_array(bytes: [u8; BYTE_LEN]) -> Self {
        Self { bytes }
    }

    /// Assembles a KSUID from an already-corrected timestamp and a payload.
    #[must_use]
    pub fn from_timestamp_and_payload(timestamp: u32, payload: [u8; PAYLOAD_LEN]) -> Self {
        let mut bytes = [0_u8; BYTE_LEN];
        let (ts, rest) = bytes.split_at_mut(TIMESTAMP_LEN);
        ts.copy_from_slice(&timestamp.to_be_bytes());
        rest.copy_from_slice(&payload);
        Self { bytes }
    }

    /// Constructs a KSUID from a wall-clock time and a 16-byte payload.
    ///
    /// The time is truncated to whole seconds and corrected by
    /// [`EPOCH_OFFSET`](crate::EPOCH_OFFSET). Times outside the ~136-year
    /// range the 32-bit timestamp covers wrap around silently.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PayloadSizeMismatch`] if `payload` is not exactly
    /// [`PAYLOAD_LEN`] bytes.
    pub fn from_parts(datetime: SystemTime, payload: &[u8]) -> Result<Self> {
        let payload = <[u8; PAYLOAD_LEN]>::try_from(payload)
            .map_err(|_| Error::PayloadSizeMismatch { len: payload.len() })?;
        let timestamp = to_corrected_timestamp(unix_seconds(datetime));
        Ok(Self::from_timestamp_and_payload(timestamp, payload))
    }

    /// Constructs a KSUID from its 20-byte binary form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `bytes` is not exactly
    /// [`BYTE_LEN`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        <[u8; BYTE_LEN]>::try_from(bytes)
            .map(Self::from_array)
            .map_err(|_| Error::binary_size(bytes.len()))
    }

    /// Parses the 27-character text form.
    ///
    /// # Errors
    ///
    /// - [`Error::SizeMismatch`] if `s` is not exactly [`STRING_LEN`] bytes
    /// - [`Error::Base62`] if `s` contains a character outside the alphabet
    ///   or encodes a value above [`Ksuid::MAX`]
    ///
    /// # Example
    ///
    /// ```
    /// use ksuid::{Error, Ksuid};
    ///
    /// let id = Ksuid::parse("0ujtsYcgvSTl8PAuAdqWYSMnLOv").unwrap();
    /// assert_eq!(id.timestamp(), 107_608_047);
    ///
    /// assert_eq!(
    ///     Ksuid::parse("short"),
    ///     Err(Error::SizeMismatch { expected: 27, len: 5 })
    /// );
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_ascii(s.as_bytes())
    }

    /// Parses the text form from raw ASCII bytes.
    ///
    /// # Errors
    ///
    /// See [`Ksuid::parse`].
    pub fn parse_ascii(s: &[u8]) -> Result<Self> {
        if s.len() != STRING_LEN {
            return Err(Error::text_size(s.len()));
        }
        Ok(Self::from_array(base62::decode(s)?))
    }

    /// Decodes either representation, dispatching on length.
    ///
    /// - empty input is [`Ksuid::NIL`]
    /// - [`BYTE_LEN`] bytes are the binary form
    /// - [`STRING_LEN`] bytes are the text form
    ///
    /// This is the entry point for storage adapters that may hand back text,
    /// binary, or nothing for the same column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] for any other length, or the
    /// [`Ksuid::parse`] errors for malformed text.
    pub fn scan(src: &[u8]) -> Result<Self> {
        match src.len() {
            0 => Ok(Self::NIL),
            BYTE_LEN => Self::from_bytes(src),
            STRING_LEN => Self::parse_ascii(src),
            len => Err(Error::binary_size(len)),
        }
    }

    /// Generates a new KSUID from the current time and the process-wide
    /// entropy source.
    ///
    /// # Panics
    ///
    /// Panics if the entropy source fails. Continuing without entropy would
    /// silently break uniqueness, so this is treated as unrecoverable; use
    /// [`Ksuid::try_new`] to handle the failure instead.
    #[must_use]
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(id) => id,
            Err(err) => panic!("couldn't generate KSUID: {err}"),
        }
    }

    /// Generates a new KSUID from the current time and the process-wide
    /// entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`] if the source fails.
    pub fn try_new() -> Result<Self> {
        Self::from_datetime(now())
    }

    /// Generates a KSUID for `datetime` using the process-wide entropy
    /// source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`] if the source fails.
    pub fn from_datetime(datetime: SystemTime) -> Result<Self> {
        Self::from_datetime_and_rand(datetime, rand_source().as_ref())
    }

    /// Generates a KSUID for `datetime` using a caller-supplied entropy source
    /// implementing [`RandSource`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`] if `rng` fails.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(rng)))]
    pub fn from_datetime_and_rand<R>(datetime: SystemTime, rng: &R) -> Result<Self>
    where
        R: RandSource + ?Sized,
    {
        let mut payload = [0_u8; PAYLOAD_LEN];
        if let Err(err) = rng.try_fill_bytes(&mut payload) {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %err, "failed to read KSUID payload");
            return Err(err);
        }
        let timestamp = to_corrected_timestamp(unix_seconds(datetime));
        Ok(Self::from_timestamp_and_payload(timestamp, payload))
    }

    /// Returns the corrected timestamp: seconds since
    /// [`KSUID_EPOCH`](crate::KSUID_EPOCH).
    #[must_use]
    pub const fn timestamp(&self) -> u32 {
        let b = &self.bytes;
        u32::from_be_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Returns the timestamp as a UTC instant, with whole-second precision.
    #[must_use]
    pub fn datetime(&self) -> SystemTime {
        from_corrected_timestamp(self.timestamp())
    }

    /// Returns the 16-byte random payload.
    #[must_use]
    pub fn payload(&self) -> [u8; PAYLOAD_LEN] {
        let mut payload = [0_u8; PAYLOAD_LEN];
        payload.copy_from_slice(&self.bytes[TIMESTAMP_LEN..]);
        payload
    }

    /// Returns the 20-byte binary form.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BYTE_LEN] {
        &self.bytes
    }

    /// Returns a copy of the 20-byte binary form.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; BYTE_LEN] {
        self.bytes
    }

    /// Returns a formatter holding the 27-character text form.
    ///
    /// # Example
    ///
    /// ```
    /// use ksuid::Ksuid;
    ///
    /// assert_eq!(Ksuid::MAX.encode(), "aWgEPTl1tmebfsQzFP4bxwgy80V");
    /// assert_eq!(Ksuid::NIL.encode(), "000000000000000000000000000");
    /// ```
    #[must_use]
    pub fn encode(&self) -> Base62Formatter {
        Base62Formatter::new(&self.bytes)
    }

    /// Returns `true` if this is [`Ksuid::NIL`].
    #[must_use]
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Returns the next KSUID in sort order.
    ///
    /// The payload is incremented as a 128-bit integer; on overflow the carry
    /// moves into the timestamp. [`Ksuid::MAX`] wraps to [`Ksuid::NIL`].
    #[must_use]
    pub fn next(&self) -> Self {
        let (payload, carry) = u128::from_be_bytes(self.payload()).overflowing_add(1);
        let timestamp = self.timestamp().wrapping_add(u32::from(carry));
        Self::from_timestamp_and_payload(timestamp, payload.to_be_bytes())
    }

    /// Returns the previous KSUID in sort order.
    ///
    /// The inverse of [`Ksuid::next`]; [`Ksuid::NIL`] wraps to
    /// [`Ksuid::MAX`].
    #[must_use]
    pub fn prev(&self) -> Self {
        let (payload, borrow) = u128::from_be_bytes(self.payload()).overflowing_sub(1);
        let timestamp = self.timestamp().wrapping_sub(u32::from(borrow));
        Self::from_timestamp_and_payload(timestamp, payload.to_be_bytes())
    }
}

/// Compares two KSUIDs by their raw bytes.
///
/// This is the canonical ordering: it agrees with comparing text forms and
/// with comparing `(timestamp, payload)` tuples.
#[must_use]
pub fn compare(a: &Ksuid, b: &Ksuid) -> Ordering {
    a.bytes.cmp(&b.bytes)
}

impl fmt::Display for Ksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.encode(), f)
    }
}

impl fmt::Debug for Ksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.timestamp();
        f.debug_struct("Ksuid")
            .field("id", &format_args!("{}", self.encode()))
            .field(
                "timestamp",
                &format_args!("{timestamp} (0x{timestamp:08x})"),
            )
            .field("payload", &format_args!("0x{}", Hex(&self.bytes[TIMESTAMP_LEN..])))
            .finish()
    }
}

struct Hex<'a>(&'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}

impl core::str::FromStr for Ksuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Ksuid {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for Ksuid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<[u8; BYTE_LEN]> for Ksuid {
    fn from(bytes: [u8; BYTE_LEN]) -> Self {
        Self::from_array(bytes)
    }
}

impl From<Ksuid> for [u8; BYTE_LEN] {
    fn from(id: Ksuid) -> Self {
        id.bytes
    }
}

impl From<Ksuid> for String {
    fn from(id: Ksuid) -> Self {
        id.encode().into()
    }
}

impl AsRef<[u8]> for Ksuid {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<str> for Ksuid {
    fn eq(&self, other: &str) -> bool {
        self.encode() == *other
    }
}

impl PartialEq<&str> for Ksuid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Ksuid> for &str {
    fn eq(&self, other: &Ksuid) -> bool {
        other == self
    }
}
