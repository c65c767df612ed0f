//! The Geohash base32 alphabet.
//!
//! Geohash uses its own 32-character alphabet that omits `a`, `i`, `l` and
//! `o`. Each character carries five bits of the interleaved
//! longitude/latitude bisection, most significant bit first. This module maps
//! characters to their 5-bit values and back, and converts whole hashes to and
//! from their integer form.

use crate::error::{GeohashError, Result};

/// The 32-character alphabet used by Geohash, in value order.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Longest hash that fits the integer form (12 * 5 = 60 bits).
pub const MAX_INTEGER_LENGTH: usize = 12;

/// Marker for bytes that are not part of the alphabet.
const INVALID: u8 = 255;

/// Lookup table mapping ASCII byte values to their base32 digit value.
/// Upper-case letters map to the same digit as their lower-case form.
const fn build_decode_lut() -> [u8; 128] {
    let mut lut = [INVALID; 128];
    let mut i = 0;
    while i < 32 {
        let ch = ALPHABET[i];
        lut[ch as usize] = i as u8;
        if ch.is_ascii_lowercase() {
            lut[ch.to_ascii_uppercase() as usize] = i as u8;
        }
        i += 1;
    }
    lut
}

/// Precomputed decode lookup table (computed at compile time).
pub(crate) const DECODE_LUT: [u8; 128] = build_decode_lut();

/// Return the 5-bit value of a single Geohash character.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidHashCharacter`] if the character is not in
/// the alphabet.
///
/// # Examples
///
/// ```
/// use geohash_core::base32::index_of;
/// assert_eq!(index_of('0').unwrap(), 0);
/// assert_eq!(index_of('z').unwrap(), 31);
/// assert_eq!(index_of('Z').unwrap(), 31);
/// assert!(index_of('a').is_err());
/// ```
#[inline]
pub fn index_of(ch: char) -> Result<u8> {
    if !ch.is_ascii() {
        return Err(GeohashError::InvalidHashCharacter(ch));
    }
    match DECODE_LUT[ch as usize] {
        INVALID => Err(GeohashError::InvalidHashCharacter(ch)),
        digit => Ok(digit),
    }
}

/// Return the Geohash character for a 5-bit value, or `None` if `index >= 32`.
///
/// # Examples
///
/// ```
/// use geohash_core::base32::char_at;
/// assert_eq!(char_at(0), Some('0'));
/// assert_eq!(char_at(10), Some('b'));
/// assert_eq!(char_at(32), None);
/// ```
#[inline]
pub fn char_at(index: u8) -> Option<char> {
    ALPHABET.get(index as usize).map(|&b| b as char)
}

/// Convert a hash into its per-character 5-bit values.
pub(crate) fn digits(hash: &str) -> Result<Vec<u8>> {
    hash.chars().map(index_of).collect()
}

/// Convert 5-bit values back into a hash string.
///
/// Every value must be below 32.
pub(crate) fn from_digits(digits: &[u8]) -> String {
    digits
        .iter()
        .map(|&d| ALPHABET[d as usize] as char)
        .collect()
}

/// Validate a hash and return its canonical lower-case form.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidHashCharacter`] for the first character
/// outside the alphabet.
///
/// # Examples
///
/// ```
/// use geohash_core::base32::normalize;
/// assert_eq!(normalize("EZS42").unwrap(), "ezs42");
/// assert!(normalize("ezs4a").is_err());
/// ```
pub fn normalize(hash: &str) -> Result<String> {
    Ok(from_digits(&digits(hash)?))
}

/// Decode a Geohash string into its integer form.
///
/// The first character occupies the most significant five bits.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidHashCharacter`] for characters outside the
/// alphabet and [`GeohashError::InvalidPrecision`] for hashes longer than
/// [`MAX_INTEGER_LENGTH`].
///
/// # Examples
///
/// ```
/// use geohash_core::base32::decode;
/// assert_eq!(decode("0").unwrap(), 0);
/// assert_eq!(decode("z").unwrap(), 31);
/// assert_eq!(decode("10").unwrap(), 32);
/// ```
pub fn decode(hash: &str) -> Result<u64> {
    let length = hash.chars().count();
    if length > MAX_INTEGER_LENGTH {
        return Err(GeohashError::InvalidPrecision {
            precision: length,
            max: MAX_INTEGER_LENGTH,
        });
    }
    let mut value: u64 = 0;
    for ch in hash.chars() {
        value = (value << 5) | u64::from(index_of(ch)?);
    }
    Ok(value)
}

/// Encode an integer into a Geohash string of exactly `length` characters.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidPrecision`] if `length` is zero or larger
/// than [`MAX_INTEGER_LENGTH`], and [`GeohashError::ValueOutOfRange`] if the
/// value needs more than `5 * length` bits.
///
/// # Examples
///
/// ```
/// use geohash_core::base32::encode;
/// assert_eq!(encode(0, 1).unwrap(), "0");
/// assert_eq!(encode(31, 1).unwrap(), "z");
/// assert_eq!(encode(1, 3).unwrap(), "001");
/// ```
pub fn encode(value: u64, length: usize) -> Result<String> {
    if length == 0 || length > MAX_INTEGER_LENGTH {
        return Err(GeohashError::InvalidPrecision {
            precision: length,
            max: MAX_INTEGER_LENGTH,
        });
    }
    if value >> (5 * length) != 0 {
        return Err(GeohashError::ValueOutOfRange { value, length });
    }

    let mut result = vec![0u8; length];
    let mut remaining = value;
    for slot in result.iter_mut().rev() {
        *slot = ALPHABET[(remaining & 0x1f) as usize];
        remaining >>= 5;
    }
    // SAFETY: all bytes come from ALPHABET which is valid ASCII.
    Ok(unsafe { String::from_utf8_unchecked(result) })
}
