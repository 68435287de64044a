//! Reproducible test figures: regular, rectangular, and radial-jitter polygons.
//!
//! Model
//! - Radial polygons start from `n` equally spaced angles on [0, 2π), add
//!   bounded angular and radial jitter, and keep the angle order, so the
//!   result is star-shaped around its center (not necessarily convex).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Figure`, `benches/scan_bench.rs`, the `cli random` command.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f32,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f32,
    pub base_radius: f32,
    pub center: Vector2<f32>,
    pub random_phase: bool,
    /// Round vertices to integer coordinates.
    pub snap: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 8.0,
            center: Vector2::new(10.0, 10.0),
            random_phase: true,
            snap: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a star-shaped polygon around `cfg.center`.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Vector2<f32>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-3);
    let delta = std::f32::consts::TAU / n as f32;
    let phase = if cfg.random_phase {
        rng.gen::<f32>() * std::f32::consts::TAU
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let th = phase + (k as f32 + (rng.gen::<f32>() * 2.0 - 1.0) * aj) * delta;
            let u = (rng.gen::<f32>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-3) * r0;
            let p = cfg.center + Vector2::new(th.cos(), th.sin()) * r;
            if cfg.snap {
                p.map(f32::round)
            } else {
                p
            }
        })
        .collect()
}

/// Regular `n`-gon (counterclockwise).
pub fn regular_polygon(n: usize, center: Vector2<f32>, radius: f32, phase: f32) -> Vec<Vector2<f32>> {
    let n = n.max(3);
    let delta = std::f32::consts::TAU / n as f32;
    (0..n)
        .map(|k| {
            let th = phase + k as f32 * delta;
            center + Vector2::new(th.cos(), th.sin()) * radius
        })
        .collect()
}

/// Axis-aligned rectangle (counterclockwise from `min`).
pub fn rectangle(min: Vector2<f32>, max: Vector2<f32>) -> Vec<Vector2<f32>> {
    vec![
        min,
        Vector2::new(max.x, min.y),
        max,
        Vector2::new(min.x, max.y),
    ]
}
