//! Parallel bulk encoding and decoding (requires the `parallel` feature).

use rayon::prelude::*;

use crate::cell::GeoCell;
use crate::decode_impl::decode;
use crate::encode_impl::{encode, validate_precision};
use crate::error::Result;
use crate::geometry::Coordinate;

/// Encode many coordinates at the same precision in parallel.
///
/// Output order matches input order. If any coordinate is invalid, the error
/// for the first invalid coordinate in input order is returned.
///
/// # Examples
///
/// ```
/// use geohash_core::{encode_many, Coordinate};
/// let hashes = encode_many(&[Coordinate::new(42.6, -5.6)], 5).unwrap();
/// assert_eq!(hashes, ["ezs42"]);
/// ```
pub fn encode_many(coordinates: &[Coordinate], precision: usize) -> Result<Vec<String>> {
    validate_precision(precision)?;
    coordinates
        .par_iter()
        .map(|c| encode(c.latitude, c.longitude, precision))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Decode many hashes in parallel.
///
/// Output order matches input order; the first invalid hash in input order
/// determines the error.
pub fn decode_many<S>(hashes: &[S]) -> Result<Vec<GeoCell>>
where
    S: AsRef<str> + Sync,
{
    hashes
        .par_iter()
        .map(|h| decode(h.as_ref()))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
