use super::{DECODED_LEN, ENCODED_LEN, encode};
use core::fmt;

/// A stack-allocated base62 encoding of a 20-byte value.
///
/// The formatter owns the encoded 27-byte buffer and is a zero-allocation
/// view that implements [`fmt::Display`] and [`AsRef<str>`]. Formatters
/// compare in the same order as the values they were built from.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base62Formatter {
    buf: [u8; ENCODED_LEN],
}

impl Base62Formatter {
    /// Encodes `bytes` into a new formatter.
    #[must_use]
    pub fn new(bytes: &[u8; DECODED_LEN]) -> Self {
        Self { buf: encode(bytes) }
    }

    /// Returns a `&str` view of the base62 encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only characters from the ASCII base62
        // alphabet
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Returns the encoded ASCII bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ENCODED_LEN] {
        &self.buf
    }

    /// Consumes the formatter and returns the raw buffer.
    #[must_use]
    pub const fn into_inner(self) -> [u8; ENCODED_LEN] {
        self.buf
    }
}

impl fmt::Display for Base62Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Base62Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl AsRef<str> for Base62Formatter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Base62Formatter {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Base62Formatter {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for Base62Formatter {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

impl From<Base62Formatter> for String {
    fn from(formatter: Base62Formatter) -> Self {
        formatter.as_str().to_owned()
    }
}
