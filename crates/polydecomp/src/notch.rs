//! Notch (reflex vertex) detection.
//!
//! A notch is a relationship between a vertex and a polygon: the same vertex can
//! be reflex in the input and convex in a partition piece.

use crate::predicates::is_convex_turn;
use crate::store::{PolygonStore, VertexId};

/// Reflex vertices of the clockwise `polygon`.
///
/// Interior triples come first in sequence order, followed by the two
/// wrap-around triples (last vertex, then first vertex).
pub fn notches(store: &PolygonStore, polygon: &[VertexId]) -> Vec<VertexId> {
    let n = polygon.len();
    if n < 3 {
        return Vec::new();
    }
    let reflex = |a: VertexId, b: VertexId, c: VertexId| {
        !is_convex_turn(store.pos(a), store.pos(b), store.pos(c))
    };
    let mut out = Vec::new();
    for w in polygon.windows(3) {
        if reflex(w[0], w[1], w[2]) {
            out.push(w[1]);
        }
    }
    if reflex(polygon[n - 2], polygon[n - 1], polygon[0]) {
        out.push(polygon[n - 1]);
    }
    if reflex(polygon[n - 1], polygon[0], polygon[1]) {
        out.push(polygon[0]);
    }
    out
}

/// Members of `subset` that are notches of `polygon`, in `subset` order.
pub fn check_notch(
    store: &PolygonStore,
    subset: &[VertexId],
    polygon: &[VertexId],
) -> Vec<VertexId> {
    let reflex = notches(store, polygon);
    subset
        .iter()
        .copied()
        .filter(|v| reflex.contains(v))
        .collect()
}

/// Whether `v` is a notch of `polygon`.
pub fn check_vertex_notch(store: &PolygonStore, v: VertexId, polygon: &[VertexId]) -> bool {
    notches(store, polygon).contains(&v)
}
