use crate::base62::Base62Error;
use crate::{BYTE_LEN, PAYLOAD_LEN};

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `ksuid` can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input is not the fixed length the operation requires: 20 bytes
    /// for the binary form, 27 characters for the text form.
    #[error("invalid size: expected {expected}, got {len}")]
    SizeMismatch { expected: usize, len: usize },

    /// The payload passed to part-based construction is not 16 bytes.
    #[error("invalid payload size: expected {}, got {len}", PAYLOAD_LEN)]
    PayloadSizeMismatch { len: usize },

    /// The text form could not be decoded.
    #[error("failed to parse KSUID: {0}")]
    Base62(#[from] Base62Error),

    /// The entropy source failed to supply payload bytes.
    #[error("entropy source unavailable: {reason}")]
    EntropyUnavailable { reason: String },

    /// A [`Sequence`](crate::Sequence) already produced every identifier it
    /// can derive from its seed.
    #[error("sequence exhausted: at most 65536 KSUIDs derive from one seed")]
    SequenceExhausted,
}

impl Error {
    pub(crate) const fn binary_size(len: usize) -> Self {
        Self::SizeMismatch {
            expected: BYTE_LEN,
            len,
        }
    }

    pub(crate) const fn text_size(len: usize) -> Self {
        Self::SizeMismatch {
            expected: crate::STRING_LEN,
            len,
        }
    }
}
