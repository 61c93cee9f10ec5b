//! Plain-text vertex lists in, edge listings out.
//!
//! Input format: a vertex count `n`, then `n` real `(x, y)` pairs, all separated
//! by whitespace. The polygon is implicitly closed.
//!
//! Output format: one `x1 y1 x2 y2` line per polygon edge, polygons in order,
//! each including its closing edge.

use std::io::{self, Write};

use nalgebra::Vector2;

use crate::error::DecompError;
use crate::store::{Polygon, PolygonStore};

/// One polygon edge, ready for an edge listing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRecord {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Parse the count-prefixed vertex list. Tokens after the declared pairs are ignored.
pub fn parse_vertex_list(text: &str) -> Result<Vec<Vector2<f64>>, DecompError> {
    let mut tokens = text.split_whitespace().enumerate();
    let (_, head) = tokens.next().ok_or(DecompError::Empty)?;
    let declared: usize = head.parse().map_err(|_| DecompError::InvalidToken {
        position: 0,
        token: head.to_string(),
    })?;
    if declared < 3 {
        return Err(DecompError::TooFewVertices { count: declared });
    }

    // Sized by the tokens present, not by `declared`.
    let mut coords: Vec<f64> = Vec::new();
    for (position, tok) in tokens.take(declared.saturating_mul(2)) {
        let value: f64 = tok.parse().map_err(|_| DecompError::InvalidToken {
            position,
            token: tok.to_string(),
        })?;
        coords.push(value);
    }
    let found = coords.len() / 2;
    if found < declared {
        return Err(DecompError::MissingCoordinates { declared, found });
    }
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Vector2::new(xy[0], xy[1]))
        .collect())
}

/// One record per edge of every piece, closing edges included.
pub fn edge_records(store: &PolygonStore, pieces: &[Polygon]) -> Vec<EdgeRecord> {
    let mut out = Vec::with_capacity(pieces.iter().map(Vec::len).sum());
    for piece in pieces {
        let n = piece.len();
        for i in 0..n {
            let a = store.pos(piece[i]);
            let b = store.pos(piece[(i + 1) % n]);
            out.push(EdgeRecord {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
            });
        }
    }
    out
}

pub fn write_edge_records<W: Write>(mut w: W, records: &[EdgeRecord]) -> io::Result<()> {
    for r in records {
        writeln!(w, "{} {} {} {}", r.x1, r.y1, r.x2, r.y2)?;
    }
    w.flush()
}

/// Write `points` in the input format accepted by [`parse_vertex_list`].
pub fn write_vertex_list<W: Write>(mut w: W, points: &[Vector2<f64>]) -> io::Result<()> {
    writeln!(w, "{}", points.len())?;
    for p in points {
        writeln!(w, "{} {}", p.x, p.y)?;
    }
    w.flush()
}
