//! Cyclic successor/predecessor lookup by vertex identity.

use crate::error::DecompError;
use crate::store::VertexId;

#[inline]
fn position(v: VertexId, polygon: &[VertexId]) -> Result<usize, DecompError> {
    polygon
        .iter()
        .position(|&w| w == v)
        .ok_or(DecompError::VertexNotInPolygon { vertex: v })
}

/// Cyclic successor of `v` in `polygon`.
pub fn next(v: VertexId, polygon: &[VertexId]) -> Result<VertexId, DecompError> {
    let i = position(v, polygon)?;
    Ok(polygon[(i + 1) % polygon.len()])
}

/// Cyclic predecessor of `v` in `polygon`.
pub fn prev(v: VertexId, polygon: &[VertexId]) -> Result<VertexId, DecompError> {
    let i = position(v, polygon)?;
    Ok(polygon[(i + polygon.len() - 1) % polygon.len()])
}
