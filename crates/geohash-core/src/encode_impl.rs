//! Geohash encoding: convert a latitude/longitude pair into a hash string.
//!
//! The encoder bisects the longitude and latitude ranges alternately, one bit
//! per step starting with longitude, and packs every five bits into one
//! base32 character.

use crate::base32::ALPHABET;
use crate::cell::GeoCell;
use crate::error::{GeohashError, Result};

/// Precision used when the caller has no preference.
pub const DEFAULT_PRECISION: usize = 12;

/// Longest hash the encoder produces.
///
/// Past 22 characters the latitude interval is narrower than an `f64` can
/// bisect, so additional characters carry no information.
pub const MAX_PRECISION: usize = 22;

/// Bit weights of a character, most significant first.
pub(crate) const BITS: [u8; 5] = [16, 8, 4, 2, 1];

/// A closed range that shrinks by half at every bit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    pub(crate) const LATITUDE: Interval = Interval {
        low: -90.0,
        high: 90.0,
    };
    pub(crate) const LONGITUDE: Interval = Interval {
        low: -180.0,
        high: 180.0,
    };

    #[inline]
    pub(crate) fn mid(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Keep the upper half when `upper` is set, otherwise the lower half.
    #[inline]
    pub(crate) fn halve(&mut self, upper: bool) {
        let mid = self.mid();
        if upper {
            self.low = mid;
        } else {
            self.high = mid;
        }
    }

    #[inline]
    pub(crate) fn bounds(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}

pub(crate) fn validate_precision(precision: usize) -> Result<()> {
    if precision == 0 || precision > MAX_PRECISION {
        return Err(GeohashError::InvalidPrecision {
            precision,
            max: MAX_PRECISION,
        });
    }
    Ok(())
}

pub(crate) fn validate_coordinate(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(GeohashError::InvalidLatitude(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(GeohashError::InvalidLongitude(longitude));
    }
    Ok(())
}

/// Encode a coordinate into a Geohash string of `precision` characters.
///
/// A coordinate lying exactly on a bisection midpoint falls into the lower
/// half.
///
/// # Arguments
///
/// * `latitude` - Degrees in `-90.0..=90.0`.
/// * `longitude` - Degrees in `-180.0..=180.0`.
/// * `precision` - Output length in characters (`1..=22`, see
///   [`DEFAULT_PRECISION`]).
///
/// # Errors
///
/// Returns [`GeohashError::InvalidPrecision`] for a precision outside
/// `1..=22`, and [`GeohashError::InvalidLatitude`] /
/// [`GeohashError::InvalidLongitude`] for coordinates that are NaN or out of
/// range.
///
/// # Examples
///
/// ```
/// use geohash_core::encode;
/// assert_eq!(encode(42.6, -5.6, 5).unwrap(), "ezs42");
/// ```
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<String> {
    Ok(encode_cell(latitude, longitude, precision)?.hash().to_owned())
}

/// Encode a coordinate and return the cell that contains it.
///
/// The result is identical to `decode(&encode(latitude, longitude, precision)?)`
/// but skips the second bisection pass.
///
/// # Errors
///
/// Same as [`encode`].
///
/// # Examples
///
/// ```
/// use geohash_core::encode_cell;
/// let cell = encode_cell(42.6, -5.6, 5).unwrap();
/// assert_eq!(cell.hash(), "ezs42");
/// assert!(cell.contains(42.6, -5.6));
/// ```
pub fn encode_cell(latitude: f64, longitude: f64, precision: usize) -> Result<GeoCell> {
    validate_precision(precision)?;
    validate_coordinate(latitude, longitude)?;

    let mut lat = Interval::LATITUDE;
    let mut lon = Interval::LONGITUDE;
    let mut hash = String::with_capacity(precision);
    let mut is_lon = true;

    for _ in 0..precision {
        let mut ch = 0u8;
        for bit in BITS {
            let (interval, value) = if is_lon {
                (&mut lon, longitude)
            } else {
                (&mut lat, latitude)
            };
            let upper = value > interval.mid();
            if upper {
                ch |= bit;
            }
            interval.halve(upper);
            is_lon = !is_lon;
        }
        hash.push(ALPHABET[ch as usize] as char);
    }

    Ok(GeoCell::new(hash, lat.bounds(), lon.bounds()))
}
