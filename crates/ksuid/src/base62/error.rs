use super::ENCODED_LEN;

/// Errors produced while decoding base62 text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Base62Error {
    /// The input is not exactly [`ENCODED_LEN`] characters long.
    #[error("invalid length: expected {} characters, got {len}", ENCODED_LEN)]
    InvalidLength { len: usize },

    /// The input contains a byte outside the base62 alphabet.
    #[error("invalid base62 character (byte {byte:#04x}) at index {index}")]
    InvalidCharacter { byte: u8, index: usize },

    /// The decoded value does not fit in 160 bits.
    ///
    /// Only strings that sort above `aWgEPTl1tmebfsQzFP4bxwgy80V` trigger
    /// this.
    #[error("value exceeds the maximum encodable KSUID")]
    Overflow,
}
