/// The base62 digit alphabet, in ascending digit value.
///
/// The characters are also in ascending ASCII order, which is what makes the
/// lexicographic order of encoded strings agree with the numeric order of the
/// encoded values.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub(crate) const NO_VALUE: u8 = u8::MAX;

/// Lookup table mapping an ASCII byte to its digit value, or [`NO_VALUE`].
pub(crate) const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_strictly_ascending() {
        assert!(ALPHABET.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn lookup_inverts_alphabet() {
        for (value, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(LOOKUP[c as usize] as usize, value, "char {}", c as char);
        }
        let valid = LOOKUP.iter().filter(|&&v| v != NO_VALUE).count();
        assert_eq!(valid, ALPHABET.len());
    }

    #[test]
    fn lookup_rejects_symbols() {
        for c in [b'!', b'-', b'_', b' ', b'/', b'+', b'=', 0x80, 0xFF] {
            assert_eq!(LOOKUP[c as usize], NO_VALUE, "byte {c:#04x}");
        }
    }
}
