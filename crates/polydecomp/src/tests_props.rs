//! Property tests over random star-shaped polygons.

use proptest::prelude::*;

use crate::fixtures::{edges_account_for_boundary, is_convex_piece, vertex_set};
use crate::merge::{merge, MergeStrategy};
use crate::pipeline::{decompose, DecompCfg};
use crate::rand::{draw_star_polygon, ReplayToken, StarCfg};
use crate::store::PolygonStore;

fn star(seed: u64, index: u64, n: usize) -> PolygonStore {
    let cfg = StarCfg {
        vertices: n,
        ..StarCfg::default()
    };
    PolygonStore::from_points(&draw_star_polygon(cfg, ReplayToken { seed, index }))
        .expect("star polygon is valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn partition_covers_every_vertex(seed in any::<u64>(), index in 0u64..1000, n in 4usize..40) {
        let s = star(seed, index, n);
        let d = decompose(&s, DecompCfg::default()).unwrap();
        let all = vertex_set(&[s.boundary().to_vec()]);
        prop_assert_eq!(vertex_set(&d.raw), all.clone());
        prop_assert_eq!(vertex_set(&d.merged), all);
    }

    #[test]
    fn boundary_edges_used_exactly_once(seed in any::<u64>(), index in 0u64..1000, n in 4usize..40) {
        let s = star(seed, index, n);
        let d = decompose(&s, DecompCfg::default()).unwrap();
        prop_assert!(edges_account_for_boundary(&s, &d.raw));
        prop_assert!(edges_account_for_boundary(&s, &d.merged));
    }

    #[test]
    fn pieces_are_convex(seed in any::<u64>(), index in 0u64..1000, n in 4usize..40) {
        let s = star(seed, index, n);
        let d = decompose(&s, DecompCfg::default()).unwrap();
        prop_assert!(!d.stalled);
        for piece in d.raw.iter().chain(&d.merged) {
            prop_assert!(is_convex_piece(&s, piece), "non-convex piece {:?}", piece);
        }
        prop_assert!(d.merged.len() <= d.raw.len());
    }

    #[test]
    fn single_pass_output_is_a_fixed_point(seed in any::<u64>(), index in 0u64..1000, n in 4usize..40) {
        let s = star(seed, index, n);
        let d = decompose(&s, DecompCfg::default()).unwrap();
        let again = merge(&s, d.merged.clone(), MergeStrategy::SinglePass).unwrap();
        prop_assert_eq!(again.accepted, 0);
        prop_assert_eq!(again.pieces, d.merged);
    }
}
