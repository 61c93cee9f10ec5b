//! Convex chain growth and notch-driven pruning.

use crate::error::DecompError;
use crate::notch::check_notch;
use crate::predicates::{is_convex_turn, is_inside, side, Bounds2, Side};
use crate::store::{PolygonStore, VertexId};
use crate::topology::next;

/// Grow a locally convex chain `[anchor, next(anchor), ...]` along `remaining`.
///
/// A candidate is appended while the turn at the current tail, the closing turn at
/// the candidate, and the turn at the anchor all stay convex, and the chain is
/// shorter than `remaining`.
pub(super) fn grow_chain(
    store: &PolygonStore,
    remaining: &[VertexId],
    anchor: VertexId,
) -> Result<Vec<VertexId>, DecompError> {
    let second = next(anchor, remaining)?;
    let mut chain = vec![anchor, second];
    let mut cand = next(second, remaining)?;
    let turn = |a: VertexId, b: VertexId, c: VertexId| {
        is_convex_turn(store.pos(a), store.pos(b), store.pos(c))
    };
    while chain.len() < remaining.len() {
        let tail = chain[chain.len() - 1];
        let before = chain[chain.len() - 2];
        if !(turn(before, tail, cand) && turn(tail, cand, anchor) && turn(cand, anchor, second)) {
            break;
        }
        chain.push(cand);
        cand = next(cand, remaining)?;
    }
    Ok(chain)
}

/// Shrink `chain` until no notch of `remaining` outside it lies strictly inside it.
///
/// Each candidate notch is visited once. Notches outside the chain's bounding
/// rectangle are skipped without the containment test. A contained notch cuts the
/// chain along the line `notch → anchor`; see [`cut_at_notch`].
pub(super) fn prune_chain(
    store: &PolygonStore,
    remaining: &[VertexId],
    mut chain: Vec<VertexId>,
) -> Vec<VertexId> {
    let cover: Vec<VertexId> = remaining
        .iter()
        .copied()
        .filter(|v| !chain.contains(v))
        .collect();
    for notch in check_notch(store, &cover, remaining) {
        if chain.len() < 3 {
            break;
        }
        let pts = store.points(&chain);
        let Some(rect) = Bounds2::of(&pts) else {
            break;
        };
        let p = store.pos(notch);
        if !rect.contains(p) || !is_inside(p, &pts) {
            continue;
        }
        let before = chain.len();
        chain = cut_at_notch(store, &chain, notch);
        tracing::trace!(notch = notch.0, before, after = chain.len(), "notch cut");
    }
    chain
}

/// Keep the anchor plus the run of chain vertices that share `chain[1]`'s side of
/// the line `notch → anchor`; everything from the first vertex that leaves that
/// side onward is dropped.
///
/// For a convex chain and a strictly interior notch the kept run is a prefix whose
/// closing edge passes strictly between the notch and the kept vertices.
pub(super) fn cut_at_notch(
    store: &PolygonStore,
    chain: &[VertexId],
    notch: VertexId,
) -> Vec<VertexId> {
    let anchor = chain[0];
    let (a, b) = (store.pos(notch), store.pos(anchor));
    let keep_side = side(a, b, store.pos(chain[1]));
    if keep_side == Side::On {
        return chain[..2].to_vec();
    }
    let mut out = vec![anchor];
    out.extend(
        chain[1..]
            .iter()
            .copied()
            .take_while(|&v| side(a, b, store.pos(v)) == keep_side),
    );
    out
}
