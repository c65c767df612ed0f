//! Compass directions between adjacent cells and hash-length parity.

use std::fmt;
use std::str::FromStr;

use crate::error::GeohashError;

/// One of the four edges shared between a cell and its orthogonal neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// West (decreasing longitude).
    Left,
    /// East (increasing longitude).
    Right,
    /// North (increasing latitude).
    Top,
    /// South (decreasing latitude).
    Bottom,
}

impl Direction {
    /// All directions, in the order the line walker tests cell edges.
    pub const ALL: [Direction; 4] = [
        Direction::Bottom,
        Direction::Right,
        Direction::Top,
        Direction::Left,
    ];

    /// The direction pointing back across the same edge.
    ///
    /// ```
    /// use geohash_core::Direction;
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Top.opposite(), Direction::Bottom);
    /// ```
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
        }
    }

    /// Lower-case name of the direction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
        }
    }

    /// Row index into the neighbor and border tables.
    #[inline]
    pub(crate) const fn table_index(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Top => 2,
            Direction::Bottom => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GeohashError;

    /// Parse `left`, `right`, `top`, `bottom` or the compass names `west`,
    /// `east`, `north`, `south`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "west" | "w" => Ok(Direction::Left),
            "right" | "east" | "e" => Ok(Direction::Right),
            "top" | "north" | "n" => Ok(Direction::Top),
            "bottom" | "south" | "s" => Ok(Direction::Bottom),
            _ => Err(GeohashError::InvalidDirection(s.to_string())),
        }
    }
}

/// Parity of a hash length.
///
/// The neighbor tables differ for characters at even and odd lengths because
/// an odd number of characters leaves longitude with one more bit than
/// latitude, which transposes the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// The hash has an even number of characters.
    Even,
    /// The hash has an odd number of characters.
    Odd,
}

impl Parity {
    /// Parity of a hash with `len` characters.
    #[inline]
    pub const fn of_len(len: usize) -> Self {
        if len % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    #[inline]
    pub(crate) const fn table_index(self) -> usize {
        match self {
            Parity::Even => 0,
            Parity::Odd => 1,
        }
    }
}
