//! Planar primitives over latitude/longitude degrees.

/// A point given in degrees of latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Degrees north of the equator (negative south).
    pub latitude: f64,
    /// Degrees east of the prime meridian (negative west).
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Build from a `(latitude, longitude)` pair.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// A straight segment between two coordinates, treating degrees as a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Segment {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Segment {
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Signed area test: positive on one side of the line through this
    /// segment, negative on the other, zero on the line itself.
    #[inline]
    fn side(&self, p: Coordinate) -> f64 {
        let d_lat = self.start.latitude - self.end.latitude;
        let d_lon = self.start.longitude - self.end.longitude;
        d_lon * (p.latitude - self.start.latitude) + d_lat * (self.start.longitude - p.longitude)
    }

    /// Whether the two segments properly cross.
    ///
    /// Touching at an endpoint and collinear overlap both count as no
    /// crossing.
    pub fn crosses(&self, other: &Segment) -> bool {
        strictly_opposite(self.side(other.start), self.side(other.end))
            && strictly_opposite(other.side(self.start), other.side(self.end))
    }
}

/// Signs differ and neither value is zero.
#[inline]
fn strictly_opposite(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}
