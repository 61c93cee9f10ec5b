//! Decompose an L-shaped hexagon and print both stages.
//!
//! Usage:
//!   cargo run -p polydecomp --example l_shape
//!
//! Prints the greedy pieces, the merged pieces, and the diagonal counts.

use nalgebra::vector;
use polydecomp::{decompose_points, DecompCfg};

fn main() {
    let pts = [
        vector![0.0, 0.0],
        vector![0.0, 2.0],
        vector![1.0, 2.0],
        vector![1.0, 1.0],
        vector![2.0, 1.0],
        vector![2.0, 0.0],
    ];
    let (store, d) = match decompose_points(&pts, DecompCfg::default()) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("l_shape: {e}");
            return;
        }
    };
    for (label, pieces) in [("raw", &d.raw), ("merged", &d.merged)] {
        for (i, piece) in pieces.iter().enumerate() {
            let coords: Vec<_> = store.points(piece).iter().map(|p| (p.x, p.y)).collect();
            println!("{label} piece {i}: {coords:?}");
        }
    }
    println!(
        "accepted={} rejected={} stalled={}",
        d.accepted, d.rejected, d.stalled
    );
}
