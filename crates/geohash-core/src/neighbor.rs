//! Adjacent-cell lookup straight on the base32 alphabet.
//!
//! Stepping to a neighbor only changes the last character, unless that
//! character sits on the parent cell's border in the requested direction, in
//! which case the step carries into the prefix. Both facts depend on the
//! direction and on the parity of the hash length, and are precomputed into
//! tables indexed by 5-bit character value.

use crate::base32::{self, DECODE_LUT};
use crate::direction::{Direction, Parity};
use crate::error::{GeohashError, Result};

/// Neighbor strings for even-length hashes, in table order
/// (right, left, top, bottom). Position `p` holds the character whose
/// neighbor in that direction is `ALPHABET[p]`.
const NEIGHBORS_EVEN: [&[u8; 32]; 4] = [
    b"bc01fg45238967deuvhjyznpkmstqrwx",
    b"238967debc01fg45kmstqrwxuvhjyznp",
    b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
];

/// Characters on the parent border for even-length hashes, same order.
const BORDERS_EVEN: [&[u8]; 4] = [b"bcfguvyz", b"0145hjnp", b"prxz", b"028b"];

/// Table row whose even entry serves as this row's odd entry.
///
/// Odd lengths transpose the character grid: right swaps with top and left
/// with bottom.
const fn transposed(row: usize) -> usize {
    row ^ 2
}

const fn source_row(row: usize, parity: usize) -> usize {
    if parity == 0 {
        row
    } else {
        transposed(row)
    }
}

/// `[direction][parity][digit] -> neighbor digit`.
const fn build_neighbor_table() -> [[[u8; 32]; 2]; 4] {
    let mut table = [[[0u8; 32]; 2]; 4];
    let mut row = 0;
    while row < 4 {
        let mut parity = 0;
        while parity < 2 {
            let src = NEIGHBORS_EVEN[source_row(row, parity)];
            let mut pos = 0;
            while pos < 32 {
                table[row][parity][DECODE_LUT[src[pos] as usize] as usize] = pos as u8;
                pos += 1;
            }
            parity += 1;
        }
        row += 1;
    }
    table
}

/// `[direction][parity][digit] -> on border`.
const fn build_border_table() -> [[[bool; 32]; 2]; 4] {
    let mut table = [[[false; 32]; 2]; 4];
    let mut row = 0;
    while row < 4 {
        let mut parity = 0;
        while parity < 2 {
            let src = BORDERS_EVEN[source_row(row, parity)];
            let mut i = 0;
            while i < src.len() {
                table[row][parity][DECODE_LUT[src[i] as usize] as usize] = true;
                i += 1;
            }
            parity += 1;
        }
        row += 1;
    }
    table
}

static NEIGHBOR_TABLE: [[[u8; 32]; 2]; 4] = build_neighbor_table();
static BORDER_TABLE: [[[bool; 32]; 2]; 4] = build_border_table();

/// Compute the hash of the same-precision cell adjacent in `direction`.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidHashCharacter`] for characters outside the
/// alphabet, and [`GeohashError::EmptyPrefixAdjacency`] for the empty hash or
/// when the step would leave the outermost cell (past a pole, or across the
/// antimeridian).
///
/// # Examples
///
/// ```
/// use geohash_core::{adjacent, Direction};
/// assert_eq!(adjacent("ezs42", Direction::Top).unwrap(), "ezs48");
/// assert_eq!(adjacent("ezs42", Direction::Left).unwrap(), "ezefr");
/// ```
pub fn adjacent(hash: &str, direction: Direction) -> Result<String> {
    let mut digits = base32::digits(hash)?;
    let row = direction.table_index();

    let mut len = digits.len();
    loop {
        if len == 0 {
            return Err(GeohashError::EmptyPrefixAdjacency { direction });
        }
        let parity = Parity::of_len(len).table_index();
        let last = &mut digits[len - 1];
        let carries = BORDER_TABLE[row][parity][*last as usize];
        *last = NEIGHBOR_TABLE[row][parity][*last as usize];
        if !carries {
            break;
        }
        len -= 1;
    }

    Ok(base32::from_digits(&digits))
}

/// The eight cells surrounding a hash.
///
/// A direction is `None` where no cell exists at the same precision, beyond
/// the poles or across the antimeridian.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbors {
    /// North.
    pub top: Option<String>,
    /// North-east.
    pub top_right: Option<String>,
    /// East.
    pub right: Option<String>,
    /// South-east.
    pub bottom_right: Option<String>,
    /// South.
    pub bottom: Option<String>,
    /// South-west.
    pub bottom_left: Option<String>,
    /// West.
    pub left: Option<String>,
    /// North-west.
    pub top_left: Option<String>,
}

impl Neighbors {
    /// Present neighbors clockwise from `top`.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            &self.top,
            &self.top_right,
            &self.right,
            &self.bottom_right,
            &self.bottom,
            &self.bottom_left,
            &self.left,
            &self.top_left,
        ]
        .into_iter()
        .filter_map(|h| h.as_deref())
    }
}

/// [`adjacent`], with leaving the globe mapped to `None`.
fn step(hash: &str, direction: Direction) -> Result<Option<String>> {
    match adjacent(hash, direction) {
        Ok(next) => Ok(Some(next)),
        Err(GeohashError::EmptyPrefixAdjacency { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

fn step_from(hash: Option<&String>, direction: Direction) -> Result<Option<String>> {
    match hash {
        Some(h) => step(h, direction),
        None => Ok(None),
    }
}

/// Compute all eight neighbors of a hash.
///
/// Diagonals are reached through the vertical neighbor first.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidHashCharacter`] for characters outside the
/// alphabet.
///
/// # Examples
///
/// ```
/// use geohash_core::neighbors;
/// let n = neighbors("ezs42").unwrap();
/// assert_eq!(n.top.as_deref(), Some("ezs48"));
/// assert_eq!(n.bottom_left.as_deref(), Some("ezefp"));
/// assert_eq!(n.iter().count(), 8);
/// ```
pub fn neighbors(hash: &str) -> Result<Neighbors> {
    let hash = base32::normalize(hash)?;
    let top = step(&hash, Direction::Top)?;
    let bottom = step(&hash, Direction::Bottom)?;

    Ok(Neighbors {
        top_right: step_from(top.as_ref(), Direction::Right)?,
        top_left: step_from(top.as_ref(), Direction::Left)?,
        bottom_right: step_from(bottom.as_ref(), Direction::Right)?,
        bottom_left: step_from(bottom.as_ref(), Direction::Left)?,
        right: step(&hash, Direction::Right)?,
        left: step(&hash, Direction::Left)?,
        top,
        bottom,
    })
}
