//! The decoded form of a Geohash: a latitude/longitude rectangle.

use std::fmt;

use crate::decode_impl::decode;
use crate::direction::Direction;
use crate::error::Result;
use crate::geometry::{Coordinate, Segment};
use crate::neighbor::{self, Neighbors};

/// The rectangle of latitude/longitude space a hash denotes.
///
/// Cells are only produced by decoding (or encoding) and never change
/// afterwards. Both ranges are closed intervals `[low, high]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeoCell {
    hash: String,
    latitude_range: [f64; 2],
    longitude_range: [f64; 2],
}

impl GeoCell {
    pub(crate) fn new(hash: String, latitude_range: [f64; 2], longitude_range: [f64; 2]) -> Self {
        debug_assert!(latitude_range[0] <= latitude_range[1]);
        debug_assert!(longitude_range[0] <= longitude_range[1]);
        Self {
            hash,
            latitude_range,
            longitude_range,
        }
    }

    /// The hash string, lower case. Empty for the whole-globe root cell.
    #[inline]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Number of characters in the hash.
    #[inline]
    pub fn precision(&self) -> usize {
        self.hash.len()
    }

    /// `[south, north]` bounds in degrees.
    #[inline]
    pub fn latitude_range(&self) -> [f64; 2] {
        self.latitude_range
    }

    /// `[west, east]` bounds in degrees.
    #[inline]
    pub fn longitude_range(&self) -> [f64; 2] {
        self.longitude_range
    }

    /// Latitude span in degrees.
    #[inline]
    pub fn height(&self) -> f64 {
        self.latitude_range[1] - self.latitude_range[0]
    }

    /// Longitude span in degrees.
    #[inline]
    pub fn width(&self) -> f64 {
        self.longitude_range[1] - self.longitude_range[0]
    }

    /// Midpoint of both ranges.
    ///
    /// ```
    /// let cell = geohash_core::decode("s").unwrap();
    /// let center = cell.center();
    /// assert_eq!(center.latitude, 22.5);
    /// assert_eq!(center.longitude, 22.5);
    /// ```
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.latitude_range[0] + self.latitude_range[1]) / 2.0,
            (self.longitude_range[0] + self.longitude_range[1]) / 2.0,
        )
    }

    /// The four corners, counter-clockwise from the south-west corner.
    pub fn corners(&self) -> [Coordinate; 4] {
        let [south, north] = self.latitude_range;
        let [west, east] = self.longitude_range;
        [
            Coordinate::new(south, west),
            Coordinate::new(south, east),
            Coordinate::new(north, east),
            Coordinate::new(north, west),
        ]
    }

    /// Whether the point lies inside the cell or on its boundary.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.latitude_range[0]..=self.latitude_range[1]).contains(&latitude)
            && (self.longitude_range[0]..=self.longitude_range[1]).contains(&longitude)
    }

    /// The cell one character shorter, or `None` for the root cell.
    pub fn parent(&self) -> Option<GeoCell> {
        let mut chars = self.hash.chars();
        chars.next_back()?;
        decode(chars.as_str()).ok()
    }

    /// The adjacent cell of the same precision in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`GeohashError::EmptyPrefixAdjacency`] when the step would
    /// leave the globe.
    ///
    /// [`GeohashError::EmptyPrefixAdjacency`]: crate::GeohashError::EmptyPrefixAdjacency
    pub fn neighbor(&self, direction: Direction) -> Result<GeoCell> {
        decode(&neighbor::adjacent(&self.hash, direction)?)
    }

    /// Hashes of all eight surrounding cells.
    pub fn neighbors(&self) -> Result<Neighbors> {
        neighbor::neighbors(&self.hash)
    }

    /// The boundary edge shared with the neighbor in `direction`.
    ///
    /// Edges run counter-clockwise so that consecutive edges meet.
    pub(crate) fn edge(&self, direction: Direction) -> Segment {
        let [sw, se, ne, nw] = self.corners();
        match direction {
            Direction::Bottom => Segment::new(sw, se),
            Direction::Right => Segment::new(se, ne),
            Direction::Top => Segment::new(ne, nw),
            Direction::Left => Segment::new(nw, sw),
        }
    }
}

impl fmt::Display for GeoCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}
