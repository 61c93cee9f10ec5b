//! Diagonal merging: drop inessential diagonals from a convex partition.
//!
//! Purpose
//! - A diagonal is inessential when the two pieces on either side of it form a
//!   convex polygon once it is removed. Merging those pieces reduces the piece
//!   count without breaking convexity.
//!
//! Model
//! - Diagonals are discovered piece by piece (`diagonals`) and deduplicated as
//!   unordered pairs; discovery order is the processing order.
//! - `SinglePass` visits each diagonal once. `FixedPoint` repeats passes until a
//!   pass accepts nothing.
//! - Merge candidates are rebuilt from the store boundary, so every candidate is
//!   in the input clockwise order.

use crate::error::DecompError;
use crate::notch::notches;
use crate::store::{Polygon, PolygonStore, VertexId};
use crate::topology::next;

/// How many passes the merger makes over the diagonal list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MergeStrategy {
    /// One pass in discovery order; rejected diagonals are never revisited.
    #[default]
    SinglePass,
    /// Repeat single passes until one accepts no merge.
    FixedPoint,
}

/// Unordered vertex pair introduced by partitioning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diagonal(pub VertexId, pub VertexId);

impl Diagonal {
    #[inline]
    pub fn same_as(&self, other: &Diagonal) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

/// Merger output.
#[derive(Clone, Debug, Default)]
pub struct Merge {
    pub pieces: Vec<Polygon>,
    /// Diagonals removed.
    pub accepted: usize,
    /// Diagonals found essential and kept.
    pub rejected: usize,
}

/// Edges of `pieces` that are not boundary edges, deduplicated, in discovery order.
pub fn diagonals(store: &PolygonStore, pieces: &[Polygon]) -> Result<Vec<Diagonal>, DecompError> {
    let boundary = store.boundary();
    let mut out: Vec<Diagonal> = Vec::new();
    for piece in pieces {
        for &v in piece {
            let succ = next(v, piece)?;
            if succ == next(v, boundary)? {
                continue;
            }
            let d = Diagonal(v, succ);
            if !out.iter().any(|e| e.same_as(&d)) {
                out.push(d);
            }
        }
    }
    Ok(out)
}

/// Merge adjacent pieces across inessential diagonals.
pub fn merge(
    store: &PolygonStore,
    pieces: Vec<Polygon>,
    strategy: MergeStrategy,
) -> Result<Merge, DecompError> {
    let mut out = Merge {
        pieces,
        ..Merge::default()
    };
    loop {
        let (accepted, rejected) = single_pass(store, &mut out.pieces)?;
        out.accepted += accepted;
        out.rejected += rejected;
        tracing::debug!(accepted, rejected, pieces = out.pieces.len(), "merge pass");
        if strategy == MergeStrategy::SinglePass || accepted == 0 {
            break;
        }
    }
    Ok(out)
}

fn single_pass(
    store: &PolygonStore,
    pieces: &mut Vec<Polygon>,
) -> Result<(usize, usize), DecompError> {
    let mut accepted = 0;
    let mut rejected = 0;
    for d in diagonals(store, pieces)? {
        let Some((i, j)) = locate(pieces, d)? else {
            tracing::trace!(a = d.0 .0, b = d.1 .0, "diagonal no longer shared; skipped");
            continue;
        };
        let candidate = union_in_boundary_order(store, &pieces[i], &pieces[j]);
        if notches(store, &candidate).is_empty() {
            tracing::trace!(a = d.0 .0, b = d.1 .0, size = candidate.len(), "merge accepted");
            pieces[i] = candidate;
            pieces.remove(j);
            accepted += 1;
        } else {
            tracing::trace!(a = d.0 .0, b = d.1 .0, "diagonal is essential");
            rejected += 1;
        }
    }
    Ok((accepted, rejected))
}

/// Indices `(i, j)`, `i < j`, of the two pieces that have `d` as an edge.
fn locate(pieces: &[Polygon], d: Diagonal) -> Result<Option<(usize, usize)>, DecompError> {
    let mut found = Vec::with_capacity(2);
    for (k, piece) in pieces.iter().enumerate() {
        let has_edge = |a: VertexId, b: VertexId| -> Result<bool, DecompError> {
            Ok(piece.contains(&a) && next(a, piece)? == b)
        };
        if has_edge(d.0, d.1)? || has_edge(d.1, d.0)? {
            found.push(k);
            if found.len() == 2 {
                return Ok(Some((found[0], found[1])));
            }
        }
    }
    Ok(None)
}

/// Boundary vertices present in either piece, in boundary order.
fn union_in_boundary_order(store: &PolygonStore, a: &[VertexId], b: &[VertexId]) -> Polygon {
    let mut member = vec![false; store.len()];
    for &v in a.iter().chain(b) {
        member[v.0] = true;
    }
    store
        .boundary()
        .iter()
        .copied()
        .filter(|v| member[v.0])
        .collect()
}
