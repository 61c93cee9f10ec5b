//! Greedy convex partition by scan-and-extend chains.
//!
//! Purpose
//! - Split a clockwise simple polygon into convex pieces that share only
//!   diagonals, consuming the remaining polygon one convex chain at a time.
//!
//! Model
//! - A remaining polygon `R` starts as the full input. Each outer iteration grows
//!   a convex chain from the current anchor (`chain::grow_chain`), shrinks it
//!   until no notch of `R` lies strictly inside (`chain::prune_chain`), emits it,
//!   and removes its interior vertices from `R`.
//! - A chain that collapses below three vertices emits nothing; the anchor then
//!   advances by one vertex of `R`.
//! - `R` is rebuilt into a fresh sequence on every consumption step.
//!
//! Termination
//! - An explicit stall counter tracks outer iterations without an emitted piece.
//!   When it reaches `PartitionCfg::stall_limit` (default: `|R|`), the current `R`
//!   is emitted as-is and `Partition::stalled` is set.

mod chain;

use crate::error::DecompError;
use crate::notch::notches;
use crate::store::{Polygon, PolygonStore, VertexId};
use crate::topology::next;

use chain::{grow_chain, prune_chain};

/// Partitioner configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct PartitionCfg {
    /// Consecutive non-emitting iterations tolerated before giving up.
    /// `None` uses the current size of the remaining polygon.
    pub stall_limit: Option<usize>,
}

/// Result of the greedy partition.
#[derive(Clone, Debug, Default)]
pub struct Partition {
    /// Convex pieces in emission order.
    pub pieces: Vec<Polygon>,
    /// Outer iterations performed.
    pub iterations: usize,
    /// True if the progress guard tripped; the last piece may then be non-convex.
    pub stalled: bool,
}

/// Partition the store's full boundary.
pub fn partition(store: &PolygonStore, cfg: PartitionCfg) -> Result<Partition, DecompError> {
    partition_polygon(store, store.boundary(), cfg)
}

/// Partition an arbitrary clockwise polygon over `store`.
pub fn partition_polygon(
    store: &PolygonStore,
    polygon: &[VertexId],
    cfg: PartitionCfg,
) -> Result<Partition, DecompError> {
    GreedyRunner::new(store, polygon, cfg).run()
}

struct GreedyRunner<'a> {
    store: &'a PolygonStore,
    cfg: PartitionCfg,
    remaining: Polygon,
    anchor: Option<VertexId>,
    out: Partition,
    stall: usize,
}

impl<'a> GreedyRunner<'a> {
    fn new(store: &'a PolygonStore, polygon: &[VertexId], cfg: PartitionCfg) -> Self {
        Self {
            store,
            cfg,
            remaining: polygon.to_vec(),
            anchor: polygon.first().copied(),
            out: Partition::default(),
            stall: 0,
        }
    }

    fn run(mut self) -> Result<Partition, DecompError> {
        while let Some(anchor) = self.anchor {
            self.out.iterations += 1;
            if self.remaining.len() <= 3 || notches(self.store, &self.remaining).is_empty() {
                self.finish();
                break;
            }
            let limit = self.cfg.stall_limit.unwrap_or(self.remaining.len());
            if self.stall >= limit {
                tracing::warn!(
                    remaining = self.remaining.len(),
                    stall = self.stall,
                    "no progress; emitting remaining polygon as-is"
                );
                self.out.stalled = true;
                self.finish();
                break;
            }
            self.step(anchor)?;
        }
        Ok(self.out)
    }

    /// One outer iteration: grow, prune, then emit or advance the anchor.
    fn step(&mut self, anchor: VertexId) -> Result<(), DecompError> {
        let chain = grow_chain(self.store, &self.remaining, anchor)?;
        if chain.len() == self.remaining.len() {
            self.finish();
            return Ok(());
        }
        let chain = prune_chain(self.store, &self.remaining, chain);
        if chain.len() < 3 {
            let advanced = next(anchor, &self.remaining)?;
            tracing::debug!(
                anchor = anchor.0,
                next = advanced.0,
                "chain collapsed; advancing anchor"
            );
            self.anchor = Some(advanced);
            self.stall += 1;
            return Ok(());
        }

        let interior = &chain[1..chain.len() - 1];
        self.remaining.retain(|v| !interior.contains(v));
        let tail = chain[chain.len() - 1];
        tracing::debug!(
            anchor = anchor.0,
            size = chain.len(),
            remaining = self.remaining.len(),
            "emit convex piece"
        );
        self.out.pieces.push(chain);
        self.anchor = Some(tail);
        self.stall = 0;
        Ok(())
    }

    fn finish(&mut self) {
        self.out.pieces.push(std::mem::take(&mut self.remaining));
        self.anchor = None;
    }
}
