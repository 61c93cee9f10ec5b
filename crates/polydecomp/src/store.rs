//! Vertex arena and the clockwise boundary derived from it.
//!
//! Vertices are created once from validated input and never mutated. Every
//! polygon in the pipeline is a `Vec<VertexId>` over this arena, so "same vertex"
//! means "same index" even when two vertices share coordinates.

use nalgebra::Vector2;

use crate::error::DecompError;
use crate::predicates::{signed_area, Bounds2};

/// Inputs whose |area| is at most this fraction of their squared bounding-box
/// diagonal are rejected as collinear.
const COLLINEAR_REL_AREA: f64 = 1e-12;

/// Stable vertex identity: index into the store's arena (input order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Ordered, cyclic, duplicate-free sequence of vertex ids (clockwise).
pub type Polygon = Vec<VertexId>;

/// Immutable point with its identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub pos: Vector2<f64>,
}

/// Owns the vertices of one input polygon and its clockwise boundary.
#[derive(Clone, Debug)]
pub struct PolygonStore {
    vertices: Vec<Vertex>,
    boundary: Polygon,
    reversed: bool,
}

impl PolygonStore {
    /// Validate `points` and build the arena.
    ///
    /// Ids follow input order. Counter-clockwise input is stored with a reversed
    /// boundary so downstream predicates can assume clockwise orientation.
    pub fn from_points(points: &[Vector2<f64>]) -> Result<Self, DecompError> {
        let n = points.len();
        if n < 3 {
            return Err(DecompError::TooFewVertices { count: n });
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(DecompError::NonFiniteCoordinate { index });
        }
        if let Some(index) = (0..n).find(|&i| points[i] == points[(i + 1) % n]) {
            return Err(DecompError::ZeroLengthEdge { index });
        }
        let area = signed_area(points);
        let extent = Bounds2::of(points).map_or(0.0, |b| (b.max - b.min).norm_squared());
        if area.abs() <= COLLINEAR_REL_AREA * extent {
            return Err(DecompError::Collinear);
        }

        let vertices: Vec<Vertex> = points
            .iter()
            .enumerate()
            .map(|(i, &pos)| Vertex {
                id: VertexId(i),
                pos,
            })
            .collect();
        let mut boundary: Polygon = (0..n).map(VertexId).collect();
        let reversed = area > 0.0;
        if reversed {
            boundary.reverse();
            tracing::debug!(vertices = n, "input is counter-clockwise; boundary reversed");
        }
        Ok(Self {
            vertices,
            boundary,
            reversed,
        })
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    #[inline]
    pub fn pos(&self, id: VertexId) -> Vector2<f64> {
        self.vertices[id.0].pos
    }

    /// Coordinates of `ids`, in order.
    pub fn points(&self, ids: &[VertexId]) -> Vec<Vector2<f64>> {
        ids.iter().map(|&id| self.pos(id)).collect()
    }

    /// The full input polygon in clockwise order.
    #[inline]
    pub fn boundary(&self) -> &[VertexId] {
        &self.boundary
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    /// Whether the input arrived counter-clockwise.
    #[inline]
    pub fn was_reversed(&self) -> bool {
        self.reversed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn clockwise_input_keeps_order() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
        ];
        let s = PolygonStore::from_points(&pts).unwrap();
        assert!(!s.was_reversed());
        assert_eq!(
            s.boundary(),
            &[VertexId(0), VertexId(1), VertexId(2), VertexId(3)]
        );
        assert_eq!(s.pos(VertexId(2)), vector![1.0, 1.0]);
        assert!(s.contains(VertexId(3)));
        assert!(!s.contains(VertexId(4)));
    }

    #[test]
    fn counter_clockwise_input_is_reversed_but_ids_stay() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        let s = PolygonStore::from_points(&pts).unwrap();
        assert!(s.was_reversed());
        assert_eq!(s.boundary(), &[VertexId(2), VertexId(1), VertexId(0)]);
        assert_eq!(s.vertex(VertexId(1)).pos, vector![1.0, 0.0]);
    }

    #[test]
    fn shared_coordinates_keep_distinct_ids() {
        // Touches itself at (1,1); ids still tell the two vertices apart.
        let pts = vec![
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 2.0],
            vector![2.0, 2.0],
            vector![1.0, 1.0],
            vector![2.0, 0.0],
        ];
        let s = PolygonStore::from_points(&pts).unwrap();
        assert_eq!(s.pos(VertexId(1)), s.pos(VertexId(4)));
        assert_ne!(s.vertex(VertexId(1)).id, s.vertex(VertexId(4)).id);
    }

    #[test]
    fn rejects_degenerate_input() {
        assert_eq!(
            PolygonStore::from_points(&[vector![0.0, 0.0], vector![1.0, 0.0]]).unwrap_err(),
            DecompError::TooFewVertices { count: 2 }
        );
        assert_eq!(
            PolygonStore::from_points(&[
                vector![0.0, 0.0],
                vector![1.0, f64::NAN],
                vector![0.0, 1.0]
            ])
            .unwrap_err(),
            DecompError::NonFiniteCoordinate { index: 1 }
        );
        assert_eq!(
            PolygonStore::from_points(&[
                vector![0.0, 0.0],
                vector![1.0, 0.0],
                vector![1.0, 0.0],
                vector![0.0, 1.0]
            ])
            .unwrap_err(),
            DecompError::ZeroLengthEdge { index: 1 }
        );
        // Closing edge counts too.
        assert_eq!(
            PolygonStore::from_points(&[
                vector![0.0, 0.0],
                vector![1.0, 0.0],
                vector![0.0, 1.0],
                vector![0.0, 0.0]
            ])
            .unwrap_err(),
            DecompError::ZeroLengthEdge { index: 3 }
        );
        assert_eq!(
            PolygonStore::from_points(&[
                vector![0.0, 0.0],
                vector![1.0, 1.0],
                vector![2.0, 2.0],
                vector![3.0, 3.0]
            ])
            .unwrap_err(),
            DecompError::Collinear
        );
    }

    #[test]
    fn collinear_decimals_are_rejected_despite_rounding() {
        let pts = [
            vector![0.0, 0.0],
            vector![0.1, 0.3],
            vector![0.2, 0.6],
            vector![0.7, 2.1],
        ];
        assert_ne!(signed_area(&pts), 0.0);
        assert_eq!(
            PolygonStore::from_points(&pts).unwrap_err(),
            DecompError::Collinear
        );
    }

    #[test]
    fn tiny_polygons_keep_their_area() {
        let pts = [vector![0.0, 0.0], vector![0.0, 1e-9], vector![1e-9, 0.0]];
        let s = PolygonStore::from_points(&pts).unwrap();
        assert_eq!(s.len(), 3);
    }
}
