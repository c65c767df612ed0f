//! Error types for Geohash encoding, decoding and cell walking.

use thiserror::Error;

use crate::cell::GeoCell;
use crate::direction::Direction;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeohashError>;

/// Errors that can occur while encoding, decoding or walking Geohash cells.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeohashError {
    /// The requested precision is zero or larger than the supported maximum.
    #[error("invalid precision: {precision} (must be 1..={max})")]
    InvalidPrecision {
        /// The rejected precision.
        precision: usize,
        /// The largest precision accepted by the operation.
        max: usize,
    },

    /// A character outside the Geohash base32 alphabet was encountered.
    #[error("invalid geohash character: {0:?}")]
    InvalidHashCharacter(char),

    /// Adjacency would carry past the first character of the hash.
    #[error("no {direction} neighbor: adjacency crosses the outermost cell boundary")]
    EmptyPrefixAdjacency {
        /// The direction that was requested.
        direction: Direction,
    },

    /// The start and end of a line segment are the same point.
    #[error("degenerate line segment: start and end are both ({latitude}, {longitude})")]
    DegenerateLineSegment {
        /// Latitude shared by both endpoints.
        latitude: f64,
        /// Longitude shared by both endpoints.
        longitude: f64,
    },

    /// The line walk visited more cells than allowed.
    ///
    /// `partial` holds every cell produced before the guard tripped.
    #[error("line rasterization exceeded {limit} cells")]
    LineRasterizationLimitExceeded {
        /// The configured maximum number of cells.
        limit: usize,
        /// Cells walked before the limit was reached.
        partial: Vec<GeoCell>,
    },

    /// Latitude is NaN or outside [-90, 90].
    #[error("latitude out of range: {0} (must be -90..=90)")]
    InvalidLatitude(f64),

    /// Longitude is NaN or outside [-180, 180].
    #[error("longitude out of range: {0} (must be -180..=180)")]
    InvalidLongitude(f64),

    /// A direction name could not be parsed.
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    /// An integer geohash does not fit in the requested number of characters.
    #[error("value {value} does not fit in {length} geohash characters")]
    ValueOutOfRange {
        /// The rejected value.
        value: u64,
        /// The requested length in characters.
        length: usize,
    },
}
