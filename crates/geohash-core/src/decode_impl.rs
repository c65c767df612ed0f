//! Geohash decoding: convert a hash string back into the cell it denotes.
//!
//! Each character's five bits are replayed against the full latitude and
//! longitude ranges, in the same alternating order the encoder used, until
//! only the cell's rectangle remains.

use crate::base32;
use crate::cell::GeoCell;
use crate::encode_impl::{Interval, BITS};
use crate::error::Result;
use crate::geometry::Coordinate;

/// Decode a Geohash string into its cell.
///
/// The empty string decodes to the whole globe. Upper-case input is accepted;
/// the returned cell carries the lower-case hash.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidHashCharacter`] for the first character
/// outside the base32 alphabet.
///
/// [`GeohashError::InvalidHashCharacter`]: crate::GeohashError::InvalidHashCharacter
///
/// # Examples
///
/// ```
/// use geohash_core::decode;
/// let cell = decode("ezs42").unwrap();
/// assert!(cell.contains(42.6, -5.6));
/// assert_eq!(cell.longitude_range(), [-5.625, -5.5810546875]);
/// ```
pub fn decode(hash: &str) -> Result<GeoCell> {
    let digits = base32::digits(hash)?;

    let mut lat = Interval::LATITUDE;
    let mut lon = Interval::LONGITUDE;
    let mut is_lon = true;

    for &digit in &digits {
        for bit in BITS {
            let interval = if is_lon { &mut lon } else { &mut lat };
            interval.halve(digit & bit != 0);
            is_lon = !is_lon;
        }
    }

    Ok(GeoCell::new(
        base32::from_digits(&digits),
        lat.bounds(),
        lon.bounds(),
    ))
}

/// Decode a Geohash string straight to the center of its cell.
///
/// # Errors
///
/// Same as [`decode`].
///
/// # Examples
///
/// ```
/// use geohash_core::decode_center;
/// let center = decode_center("ezs42").unwrap();
/// assert!((center.latitude - 42.605).abs() < 1e-3);
/// assert!((center.longitude + 5.603).abs() < 1e-3);
/// ```
pub fn decode_center(hash: &str) -> Result<Coordinate> {
    Ok(decode(hash)?.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_impl;
    use crate::error::GeohashError;

    #[test]
    fn test_decode_known_ranges() {
        let cell = decode("ezs42").unwrap();
        assert_eq!(cell.latitude_range(), [42.5830078125, 42.626953125]);
        assert_eq!(cell.longitude_range(), [-5.625, -5.5810546875]);
    }

    #[test]
    fn test_decode_single_char() {
        // '0' clears every bit: the south-west corner of the globe.
        let cell = decode("0").unwrap();
        assert_eq!(cell.latitude_range(), [-90.0, -45.0]);
        assert_eq!(cell.longitude_range(), [-180.0, -135.0]);
    }

    #[test]
    fn test_decode_uppercase() {
        let cell = decode("EZS42").unwrap();
        assert_eq!(cell.hash(), "ezs42");
        assert_eq!(cell, decode("ezs42").unwrap());
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            decode("ezs4a"),
            Err(GeohashError::InvalidHashCharacter('a'))
        );
        assert!(decode("ez s4").is_err());
    }

    #[test]
    fn test_range_widths() {
        let hash = "u4pruydqqvj";
        for len in 1..=hash.len() {
            let cell = decode(&hash[..len]).unwrap();
            let bits = 5 * len as i32;
            let lon_bits = (bits + 1) / 2;
            let lat_bits = bits / 2;
            assert_eq!(cell.width(), 360.0 / 2f64.powi(lon_bits), "len {len}");
            assert_eq!(cell.height(), 180.0 / 2f64.powi(lat_bits), "len {len}");
        }
    }

    #[test]
    fn test_encode_decode_roundtrip_contains() {
        for &(lat, lon) in &[
            (42.6, -5.6),
            (-33.8688, 151.2093),
            (89.999, 179.999),
            (-89.999, -179.999),
            (0.0, 0.0),
        ] {
            for precision in 1..=12 {
                let hash = encode_impl::encode(lat, lon, precision).unwrap();
                let cell = decode(&hash).unwrap();
                assert!(
                    cell.contains(lat, lon),
                    "{hash} does not contain ({lat}, {lon})"
                );
            }
        }
    }
}
