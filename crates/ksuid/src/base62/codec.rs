use super::{ALPHABET, Base62Error, LOOKUP, NO_VALUE};

/// Radix of the text form.
pub const BASE: u32 = 62;

/// Radix of the binary form.
const BYTE_BASE: u32 = 256;

/// Length of the binary form, in bytes.
pub const DECODED_LEN: usize = 20;

/// Length of the text form, in base62 characters.
///
/// 27 is the smallest width with `62^27 > 2^160`.
pub const ENCODED_LEN: usize = 27;

/// Converts a big-endian number between two radixes using fixed-width digit
/// arrays.
///
/// `src` holds the number as `S` big-endian digits in base `src_base`. The
/// result holds the same number as `D` big-endian digits in base `dst_base`,
/// left-padded with zero digits. Every digit of `src` must be smaller than
/// `src_base`.
///
/// The conversion is schoolbook long division: each pass divides the whole
/// number by `dst_base` in place and the remainder becomes the next output
/// digit, filled from the right. Leading zero digits are skipped as the
/// quotient shrinks. Every digit, partial quotient and remainder fits in a
/// `u8`, and every intermediate accumulator fits in a `u32`.
///
/// Returns `None` if either radix lies outside `2..=256`, if a digit of `src`
/// is not smaller than `src_base`, or if the number needs more than `D` digits
/// in `dst_base`.
///
/// # Example
///
/// ```
/// use ksuid::base62::convert_radix;
///
/// // 0x01FF == 511 == 8 * 62 + 15
/// let digits = convert_radix::<2, 4>(&[0x01, 0xFF], 256, 62).unwrap();
/// assert_eq!(digits, [0, 0, 8, 15]);
///
/// // 62^2 does not fit in two base62 digits
/// assert_eq!(convert_radix::<3, 2>(&[1, 0, 0], 62, 62), None);
///
/// // 62 is not a base62 digit
/// assert_eq!(convert_radix::<1, 2>(&[62], 62, 256), None);
/// ```
#[must_use]
pub fn convert_radix<const S: usize, const D: usize>(
    src: &[u8; S],
    src_base: u32,
    dst_base: u32,
) -> Option<[u8; D]> {
    let radixes = 2..=BYTE_BASE;
    if !radixes.contains(&src_base) || !radixes.contains(&dst_base) {
        return None;
    }
    if src.iter().any(|&digit| u32::from(digit) >= src_base) {
        return None;
    }

    let mut number = *src;
    let mut out = [0_u8; D];
    let mut head = 0;
    let mut pos = D;

    loop {
        while head < S && number[head] == 0 {
            head += 1;
        }
        if head == S {
            return Some(out);
        }
        if pos == 0 {
            return None;
        }

        let mut rem = 0_u32;
        for digit in &mut number[head..] {
            let acc = rem * src_base + u32::from(*digit);
            // acc < dst_base * src_base, so the quotient is < src_base <= 256
            *digit = (acc / dst_base) as u8;
            rem = acc % dst_base;
        }

        pos -= 1;
        out[pos] = rem as u8;
    }
}

/// Encodes 20 big-endian bytes as 27 base62 ASCII characters.
///
/// The output is always exactly [`ENCODED_LEN`] characters; small values are
/// left-padded with `'0'`. Because the alphabet is in ASCII order and the
/// width is fixed, comparing two outputs byte-wise gives the same result as
/// comparing the inputs byte-wise.
///
/// # Example
///
/// ```
/// use ksuid::base62::encode;
///
/// let mut bytes = [0_u8; 20];
/// bytes[19] = 62;
/// assert_eq!(&encode(&bytes), b"000000000000000000000000010");
/// assert_eq!(&encode(&[0xFF; 20]), b"aWgEPTl1tmebfsQzFP4bxwgy80V");
/// ```
#[must_use]
pub fn encode(bytes: &[u8; DECODED_LEN]) -> [u8; ENCODED_LEN] {
    let Some(mut digits) = convert_radix::<DECODED_LEN, ENCODED_LEN>(bytes, BYTE_BASE, BASE)
    else {
        unreachable!("62^27 exceeds 2^160, every 20-byte value fits in 27 digits");
    };
    for digit in &mut digits {
        *digit = ALPHABET[*digit as usize];
    }
    digits
}

/// Decodes 27 base62 ASCII characters into 20 big-endian bytes.
///
/// # Errors
///
/// - [`Base62Error::InvalidLength`] if `encoded` is not exactly
///   [`ENCODED_LEN`] bytes long
/// - [`Base62Error::InvalidCharacter`] for the first byte outside the
///   alphabet
/// - [`Base62Error::Overflow`] if the value does not fit in 20 bytes
///
/// # Example
///
/// ```
/// use ksuid::base62::{Base62Error, decode};
///
/// let bytes = decode(b"000000000000000000000000010").unwrap();
/// assert_eq!(bytes[19], 62);
///
/// assert_eq!(
///     decode(b"00000000000000000000000001!"),
///     Err(Base62Error::InvalidCharacter { byte: b'!', index: 26 })
/// );
/// ```
pub fn decode(encoded: &[u8]) -> Result<[u8; DECODED_LEN], Base62Error> {
    let Ok(encoded) = <&[u8; ENCODED_LEN]>::try_from(encoded) else {
        return Err(Base62Error::InvalidLength { len: encoded.len() });
    };

    let mut digits = [0_u8; ENCODED_LEN];
    for (index, (&byte, digit)) in encoded.iter().zip(&mut digits).enumerate() {
        let value = LOOKUP[byte as usize];
        if value == NO_VALUE {
            return Err(Base62Error::InvalidCharacter { byte, index });
        }
        *digit = value;
    }

    convert_radix::<ENCODED_LEN, DECODED_LEN>(&digits, BASE, BYTE_BASE).ok_or(Base62Error::Overflow)
}
