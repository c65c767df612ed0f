//! Line rasterization: the ordered cells a straight segment passes through.
//!
//! The walk starts in the cell containing the first endpoint and repeatedly
//! leaves the current cell through the first edge (bottom, right, top, left)
//! the segment properly crosses, other than the edge it came in through. It
//! stops once no such edge exists.

use std::iter::FusedIterator;
use std::mem;

use tracing::{debug, trace, warn};

use crate::cell::GeoCell;
use crate::direction::Direction;
use crate::encode_impl::{
    encode_cell, validate_coordinate, validate_precision, DEFAULT_PRECISION,
};
use crate::error::{GeohashError, Result};
use crate::geometry::{Coordinate, Segment};

/// Default cap on the number of cells a single line may produce.
pub const DEFAULT_MAX_CELLS: usize = 1_000_000;

/// Walks segments across cells of a fixed precision.
///
/// # Examples
///
/// ```
/// use geohash_core::{Coordinate, LineRasterizer};
///
/// let rasterizer = LineRasterizer::new(5).unwrap().with_max_cells(100);
/// let cells = rasterizer
///     .rasterize(Coordinate::new(42.6, -5.6), Coordinate::new(42.6, -5.5))
///     .unwrap();
/// let hashes: Vec<&str> = cells.iter().map(|c| c.hash()).collect();
/// assert_eq!(hashes, ["ezs42", "ezs43", "ezs46"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRasterizer {
    precision: usize,
    max_cells: usize,
}

impl Default for LineRasterizer {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl LineRasterizer {
    /// Create a rasterizer producing cells of `precision` characters.
    ///
    /// # Errors
    ///
    /// Returns [`GeohashError::InvalidPrecision`] for a precision outside
    /// `1..=MAX_PRECISION`.
    pub fn new(precision: usize) -> Result<Self> {
        validate_precision(precision)?;
        Ok(Self {
            precision,
            ..Self::default()
        })
    }

    /// Set the maximum number of cells [`rasterize`](Self::rasterize) may
    /// return. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells.max(1);
        self
    }

    /// Precision of the produced cells.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Maximum number of cells a rasterized line may contain.
    pub fn max_cells(&self) -> usize {
        self.max_cells
    }

    /// Start a lazy walk from `start` towards `end`.
    ///
    /// The walk has no cell limit; use [`rasterize`](Self::rasterize) for a
    /// bounded result.
    ///
    /// # Errors
    ///
    /// Returns [`GeohashError::InvalidLatitude`] /
    /// [`GeohashError::InvalidLongitude`] for out-of-range endpoints and
    /// [`GeohashError::DegenerateLineSegment`] when both endpoints coincide.
    pub fn walk(&self, start: Coordinate, end: Coordinate) -> Result<LineWalk> {
        validate_coordinate(start.latitude, start.longitude)?;
        validate_coordinate(end.latitude, end.longitude)?;
        if start == end {
            return Err(GeohashError::DegenerateLineSegment {
                latitude: start.latitude,
                longitude: start.longitude,
            });
        }

        let first = encode_cell(start.latitude, start.longitude, self.precision)?;
        Ok(LineWalk {
            segment: Segment::new(start, end),
            state: WalkState::At {
                cell: first,
                entered_through: None,
            },
        })
    }

    /// Collect every cell between `start` and `end`, in walk order.
    ///
    /// # Errors
    ///
    /// Everything [`walk`](Self::walk) reports, plus
    /// [`GeohashError::LineRasterizationLimitExceeded`] carrying the cells
    /// walked so far when the line needs more than
    /// [`max_cells`](Self::max_cells) cells.
    pub fn rasterize(&self, start: Coordinate, end: Coordinate) -> Result<Vec<GeoCell>> {
        let mut cells = Vec::new();
        for cell in self.walk(start, end)? {
            if cells.len() == self.max_cells {
                warn!(
                    limit = self.max_cells,
                    precision = self.precision,
                    last = %cells.last().map_or("", GeoCell::hash),
                    "line rasterization limit reached"
                );
                return Err(GeohashError::LineRasterizationLimitExceeded {
                    limit: self.max_cells,
                    partial: cells,
                });
            }
            cells.push(cell?);
        }

        debug!(
            cells = cells.len(),
            precision = self.precision,
            "line rasterized"
        );
        Ok(cells)
    }
}

#[derive(Debug, Clone)]
enum WalkState {
    At {
        cell: GeoCell,
        entered_through: Option<Direction>,
    },
    Failed(GeohashError),
    Done,
}

/// Lazy iterator over the cells of a line, created by
/// [`LineRasterizer::walk`].
///
/// Yields the start cell first. If stepping to the next cell fails, the error
/// is yielded once and the iterator ends.
#[derive(Debug, Clone)]
pub struct LineWalk {
    segment: Segment,
    state: WalkState,
}

impl LineWalk {
    /// Find the edge the segment leaves `cell` through and step across it.
    fn exit(
        &self,
        cell: &GeoCell,
        entered_through: Option<Direction>,
    ) -> Result<Option<(GeoCell, Direction)>> {
        let Some(edge) = Direction::ALL
            .into_iter()
            .filter(|&dir| Some(dir) != entered_through)
            .find(|&dir| cell.edge(dir).crosses(&self.segment))
        else {
            return Ok(None);
        };

        let next = cell.neighbor(edge)?;
        trace!(from = %cell, to = %next, %edge, "line crossed cell edge");
        Ok(Some((next, edge)))
    }
}

impl Iterator for LineWalk {
    type Item = Result<GeoCell>;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::replace(&mut self.state, WalkState::Done) {
            WalkState::Done => None,
            WalkState::Failed(e) => Some(Err(e)),
            WalkState::At {
                cell,
                entered_through,
            } => {
                self.state = match self.exit(&cell, entered_through) {
                    Ok(Some((next, edge))) => WalkState::At {
                        cell: next,
                        entered_through: Some(edge.opposite()),
                    },
                    Ok(None) => WalkState::Done,
                    Err(e) => WalkState::Failed(e),
                };
                Some(Ok(cell))
            }
        }
    }
}

impl FusedIterator for LineWalk {}

/// Compute the cells of `precision` characters that the segment from
/// `(lat1, lon1)` to `(lat2, lon2)` passes through, in order.
///
/// Uses [`DEFAULT_MAX_CELLS`] as the cell limit; build a [`LineRasterizer`]
/// to choose another.
///
/// # Errors
///
/// See [`LineRasterizer::new`] and [`LineRasterizer::rasterize`].
///
/// # Examples
///
/// ```
/// use geohash_core::encode_line;
/// let cells = encode_line(42.6, -5.6, 42.6, -5.59999, 5).unwrap();
/// assert_eq!(cells.len(), 1);
/// assert_eq!(cells[0].hash(), "ezs42");
/// ```
pub fn encode_line(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    precision: usize,
) -> Result<Vec<GeoCell>> {
    LineRasterizer::new(precision)?
        .rasterize(Coordinate::new(lat1, lon1), Coordinate::new(lat2, lon2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hashes(cells: &[GeoCell]) -> Vec<&str> {
        cells.iter().map(GeoCell::hash).collect()
    }

    #[test]
    fn test_line_within_one_cell() {
        let cells = encode_line(42.6, -5.6, 42.6, -5.59999, 5).unwrap();
        assert_eq!(hashes(&cells), ["ezs42"]);
    }

    #[test]
    fn test_line_eastward() {
        let cells = encode_line(42.6, -5.6, 42.6, -5.5, 5).unwrap();
        assert_eq!(hashes(&cells), ["ezs42", "ezs43", "ezs46"]);
    }

    #[test]
    fn test_line_northward() {
        let cells = encode_line(42.6, -5.6, 42.9, -5.6, 5).unwrap();
        assert_eq!(
            hashes(&cells),
            ["ezs42", "ezs48", "ezs4b", "ezs50", "ezs52", "ezs58", "ezs5b", "ezsh0"]
        );
    }

    #[test]
    fn test_line_diagonal() {
        let cells = encode_line(42.6, -5.6, 42.7, -5.4, 5).unwrap();
        assert_eq!(
            hashes(&cells),
            ["ezs42", "ezs43", "ezs49", "ezs4d", "ezs4e", "ezs4g", "ezs4u", "ezs4v"]
        );
    }

    #[test]
    fn test_line_through_corner_stops() {
        // (45, 45) is the north-east corner of "s"; a corner touch is not a
        // proper crossing of either edge.
        let cells = encode_line(10.0, 10.0, 60.0, 60.0, 1).unwrap();
        assert_eq!(hashes(&cells), ["s"]);
        let cells = encode_line(10.0, 10.0, 60.0, 61.0, 1).unwrap();
        assert_eq!(hashes(&cells), ["s", "t", "v"]);
    }

    #[test]
    fn test_degenerate_segment() {
        assert_eq!(
            encode_line(42.6, -5.6, 42.6, -5.6, 5),
            Err(GeohashError::DegenerateLineSegment {
                latitude: 42.6,
                longitude: -5.6
            })
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            encode_line(42.6, -5.6, 42.7, -5.4, 0),
            Err(GeohashError::InvalidPrecision { .. })
        ));
        assert_eq!(
            encode_line(42.6, -5.6, 95.0, -5.4, 5),
            Err(GeohashError::InvalidLatitude(95.0))
        );
    }

    #[test]
    fn test_limit_returns_partial_result() {
        let rasterizer = LineRasterizer::new(5).unwrap().with_max_cells(3);
        let err = rasterizer
            .rasterize(Coordinate::new(42.6, -5.6), Coordinate::new(42.7, -5.4))
            .unwrap_err();
        match err {
            GeohashError::LineRasterizationLimitExceeded { limit, partial } => {
                assert_eq!(limit, 3);
                assert_eq!(hashes(&partial), ["ezs42", "ezs43", "ezs49"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_limit_exactly_reached_is_ok() {
        let rasterizer = LineRasterizer::new(5).unwrap().with_max_cells(3);
        let cells = rasterizer
            .rasterize(Coordinate::new(42.6, -5.6), Coordinate::new(42.6, -5.5))
            .unwrap();
        assert_eq!(cells.len(), 3);
    }

    #[test]
    fn test_walk_matches_rasterize() {
        let rasterizer = LineRasterizer::new(4).unwrap();
        let start = Coordinate::new(51.5074, -0.1278);
        let end = Coordinate::new(48.8566, 2.3522);
        let walked: Vec<GeoCell> = rasterizer
            .walk(start, end)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(walked, rasterizer.rasterize(start, end).unwrap());
        assert_eq!(walked.first().unwrap().hash(), "gcpv");
        assert_eq!(walked.last().unwrap().hash(), "u09t");
    }

    #[test]
    fn test_walk_is_fused() {
        let mut walk = LineRasterizer::new(5)
            .unwrap()
            .walk(Coordinate::new(42.6, -5.6), Coordinate::new(42.6, -5.59999))
            .unwrap();
        assert!(walk.next().is_some());
        assert!(walk.next().is_none());
        assert!(walk.next().is_none());
    }

    #[test]
    fn test_default_rasterizer() {
        let rasterizer = LineRasterizer::default();
        assert_eq!(rasterizer.precision(), DEFAULT_PRECISION);
        assert_eq!(rasterizer.max_cells(), DEFAULT_MAX_CELLS);
        assert_eq!(rasterizer.with_max_cells(0).max_cells(), 1);
    }
}
