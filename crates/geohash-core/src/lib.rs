//! # geohash-core
//!
//! Geohash encoding, decoding, neighbor lookup and line rasterization in pure
//! Rust.
//!
//! A [Geohash](https://en.wikipedia.org/wiki/Geohash) packs a
//! latitude/longitude pair into a short base32 string by interleaving the bits
//! of a binary bisection of both axes. Nearby points share prefixes, and each
//! extra character shrinks the denoted cell by a factor of 32.
//!
//! ## Quick Start
//!
//! ```
//! use geohash_core::{adjacent, decode, encode, encode_line, Direction};
//!
//! // Encode: coordinate -> hash
//! let hash = encode(42.6, -5.6, 5).unwrap();
//! assert_eq!(hash, "ezs42");
//!
//! // Decode: hash -> cell
//! let cell = decode(&hash).unwrap();
//! assert!(cell.contains(42.6, -5.6));
//!
//! // Neighbors
//! assert_eq!(adjacent(&hash, Direction::Top).unwrap(), "ezs48");
//!
//! // Cells crossed by a segment
//! let cells = encode_line(42.6, -5.6, 42.6, -5.5, 5).unwrap();
//! assert_eq!(cells.len(), 3);
//! ```
//!
//! ## Features
//!
//! - `parallel`: [`encode_many`] / [`decode_many`] backed by rayon.
//! - `serde`: `Serialize` for [`GeoCell`], `Serialize`/`Deserialize` for
//!   [`Coordinate`], [`Direction`] and [`Neighbors`].

pub mod base32;
pub mod cell;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod line;
pub mod neighbor;

#[cfg(feature = "parallel")]
mod batch;
mod decode_impl;
mod encode_impl;

// Re-export primary functions at crate root.
#[cfg(feature = "parallel")]
pub use batch::{decode_many, encode_many};
pub use cell::GeoCell;
pub use decode_impl::{decode, decode_center};
pub use direction::{Direction, Parity};
pub use encode_impl::{encode, encode_cell, DEFAULT_PRECISION, MAX_PRECISION};
pub use error::{GeohashError, Result};
pub use geometry::Coordinate;
pub use line::{encode_line, LineRasterizer, LineWalk, DEFAULT_MAX_CELLS};
pub use neighbor::{adjacent, neighbors, Neighbors};
