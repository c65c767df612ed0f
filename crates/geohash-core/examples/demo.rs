//! Geohash Demo - encode, decode, neighbors and line rasterization
//!
//! Run with: cargo run --example demo

use geohash_core::{adjacent, decode, encode, encode_line, neighbors, Direction};

fn main() {
    println!("=== Geohash Demo ===\n");

    let (lat, lon) = (57.64911, 10.40744);
    println!("1. Point: ({lat}, {lon})\n");

    // Encode to a geohash at increasing precision
    for precision in [1, 3, 5, 8, 11] {
        let hash = encode(lat, lon, precision).expect("Failed to encode");
        println!("2. precision {precision:>2}: {hash}");
    }
    println!();

    // Decode back to a cell
    let hash = encode(lat, lon, 7).expect("Failed to encode");
    let cell = decode(&hash).expect("Failed to decode");
    let center = cell.center();
    println!("3. Decoded {hash}:");
    println!("   latitude  {:?}", cell.latitude_range());
    println!("   longitude {:?}", cell.longitude_range());
    println!("   center    ({}, {})\n", center.latitude, center.longitude);

    // Neighbors
    println!("4. Neighbors of {hash}:");
    for dir in Direction::ALL {
        let next = adjacent(&hash, dir).expect("Failed to step");
        println!("   {dir:>6}: {next}");
    }
    let around = neighbors(&hash).expect("Failed to compute neighbors");
    println!("   all eight: {:?}\n", around.iter().collect::<Vec<_>>());

    // Line rasterization
    let cells =
        encode_line(51.5074, -0.1278, 48.8566, 2.3522, 4).expect("Failed to rasterize");
    println!("5. London -> Paris crosses {} cells at precision 4:", cells.len());
    let line: Vec<&str> = cells.iter().map(|c| c.hash()).collect();
    println!("   {}", line.join(" "));

    println!("\n=== Demo Complete ===");
}
