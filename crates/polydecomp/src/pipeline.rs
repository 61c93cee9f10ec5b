//! End-to-end decomposition: partition, then merge.

use nalgebra::Vector2;

use crate::error::DecompError;
use crate::merge::{merge, MergeStrategy};
use crate::partition::{partition, PartitionCfg};
use crate::store::{Polygon, PolygonStore};

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecompCfg {
    pub partition: PartitionCfg,
    pub merge: MergeStrategy,
}

/// Both stages of one run.
#[derive(Clone, Debug)]
pub struct Decomposition {
    /// Greedy partition, before merging.
    pub raw: Vec<Polygon>,
    /// Final convex pieces.
    pub merged: Vec<Polygon>,
    pub stalled: bool,
    pub accepted: usize,
    pub rejected: usize,
}

pub fn decompose(store: &PolygonStore, cfg: DecompCfg) -> Result<Decomposition, DecompError> {
    let part = partition(store, cfg.partition)?;
    let merged = merge(store, part.pieces.clone(), cfg.merge)?;
    tracing::debug!(
        vertices = store.len(),
        raw = part.pieces.len(),
        merged = merged.pieces.len(),
        iterations = part.iterations,
        stalled = part.stalled,
        "decomposed"
    );
    Ok(Decomposition {
        raw: part.pieces,
        merged: merged.pieces,
        stalled: part.stalled,
        accepted: merged.accepted,
        rejected: merged.rejected,
    })
}

/// Validate `points`, then decompose. Returns the store so callers can resolve ids.
pub fn decompose_points(
    points: &[Vector2<f64>],
    cfg: DecompCfg,
) -> Result<(PolygonStore, Decomposition), DecompError> {
    let store = PolygonStore::from_points(points)?;
    let d = decompose(&store, cfg)?;
    Ok((store, d))
}
