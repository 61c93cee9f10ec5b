//! Shared polygons and structural checks for unit and property tests.

use std::collections::{BTreeSet, HashMap};

use nalgebra::Vector2;

use crate::notch::notches;
use crate::store::{Polygon, PolygonStore, VertexId};

pub fn store(raw: &[(f64, f64)]) -> PolygonStore {
    let pts: Vec<Vector2<f64>> = raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
    PolygonStore::from_points(&pts).expect("fixture polygon is valid")
}

pub fn ids(raw: &[usize]) -> Polygon {
    raw.iter().copied().map(VertexId).collect()
}

pub fn triangle() -> PolygonStore {
    store(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)])
}

pub fn square() -> PolygonStore {
    store(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
}

/// Clockwise L: notch at id 3 = (1,1).
pub fn l_shape() -> PolygonStore {
    store(&[
        (0.0, 0.0),
        (0.0, 2.0),
        (1.0, 2.0),
        (1.0, 1.0),
        (2.0, 1.0),
        (2.0, 0.0),
    ])
}

/// Square with a spike poking up from the bottom edge: notch at id 5 = (2,3).
pub fn notched_square() -> PolygonStore {
    store(&[
        (0.0, 0.0),
        (0.0, 4.0),
        (4.0, 4.0),
        (4.0, 0.0),
        (3.0, 0.0),
        (2.0, 3.0),
        (1.0, 0.0),
    ])
}

/// U opening upwards, fractional coordinates: notches at ids 3 and 4.
pub fn u_shape() -> PolygonStore {
    store(&[
        (0.0, 0.0),
        (0.0, 3.5),
        (1.25, 3.5),
        (1.25, 1.25),
        (2.75, 1.25),
        (2.75, 3.5),
        (4.0, 3.5),
        (4.0, 0.0),
    ])
}

pub fn vertex_set(pieces: &[Polygon]) -> BTreeSet<VertexId> {
    pieces.iter().flatten().copied().collect()
}

pub fn is_convex_piece(store: &PolygonStore, piece: &[VertexId]) -> bool {
    piece.len() >= 3 && notches(store, piece).is_empty()
}

fn directed_edges(polygon: &[VertexId]) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[i], polygon[(i + 1) % n]))
}

/// Every boundary edge appears exactly once across `pieces`; every other edge is a
/// diagonal whose reverse appears equally often.
pub fn edges_account_for_boundary(store: &PolygonStore, pieces: &[Polygon]) -> bool {
    let boundary: BTreeSet<(VertexId, VertexId)> = directed_edges(store.boundary()).collect();
    let mut counts: HashMap<(VertexId, VertexId), usize> = HashMap::new();
    for piece in pieces {
        for e in directed_edges(piece) {
            *counts.entry(e).or_default() += 1;
        }
    }
    let boundary_ok = boundary.iter().all(|e| counts.get(e) == Some(&1));
    let diagonals_ok = counts
        .iter()
        .filter(|(e, _)| !boundary.contains(e))
        .all(|(&(a, b), &c)| !boundary.contains(&(b, a)) && counts.get(&(b, a)) == Some(&c));
    boundary_ok && diagonals_ok
}
