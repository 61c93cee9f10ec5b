//! Random star-shaped simple polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic, indexable sampler of non-convex simple polygons for property
//!   tests, benches, and the CLI `sample` command.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular jitter,
//!   sort, then pick a radius per angle in `[r_min, r_max]`. Sorted angles with
//!   positive radii give a polygon that is star-shaped around the origin, hence
//!   simple. For `n >= 4` every angular gap stays below π, so the origin is a
//!   kernel point and the vertices come out counter-clockwise.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Star polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    /// Vertex count; values below 3 are raised to 3.
    pub vertices: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radius range; `r_min` is clamped away from zero.
    pub r_min: f64,
    pub r_max: f64,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertices: 16,
            angle_jitter_frac: 0.3,
            r_min: 0.3,
            r_max: 1.0,
        }
    }
}

/// `(seed, index)` pair; the same token always yields the same polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let key = splitmix64(self.seed ^ splitmix64(self.index.wrapping_add(GOLDEN_GAMMA)));
        StdRng::seed_from_u64(key)
    }
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Draw a random star-shaped simple polygon.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.rng();
    let n = cfg.vertices.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let r_lo = cfg.r_min.max(1e-6);
    let r_hi = cfg.r_max.max(r_lo);
    let delta = std::f64::consts::TAU / (n as f64);
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            (k as f64) * delta + jitter
        })
        .collect();
    angles.sort_by(f64::total_cmp);
    angles
        .into_iter()
        .map(|th| {
            let r = if r_hi > r_lo {
                rng.gen_range(r_lo..r_hi)
            } else {
                r_lo
            };
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}
