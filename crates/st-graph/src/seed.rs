//! Seed-point generation: grid, uniform-random, and density-constrained.

use st_core::{GraphRng, Vec2};

use crate::error::GraphError;

/// How initial seed points are chosen, selected by the host's configuration
/// layer.
#[derive(Clone, Debug)]
pub enum SeedMethod {
    /// One seed per `d_sep`-spaced grid cell, offset to the cell center.
    Grid { d_sep: f32 },
    /// `count` seeds sampled uniformly across the region, no rejection.
    Uniform { count: usize },
    /// `count` attempts, each keeping the first of up to 10 uniform samples
    /// that lands at least `d_sep` from every previously accepted seed.
    DensityConstrained { count: usize, d_sep: f32 },
}

/// Defaults used when a [`SeedMethod`] is decoded from a bare method index
/// (`TryFrom<u8>`) rather than built directly; a host that needs different
/// parameters builds the variant itself or overrides it with
/// [`crate::GenerationConfig::with_seed_method`].
const DEFAULT_SEED_COUNT: usize = 100;
const DEFAULT_D_SEP: f32 = 10.0;

/// Decode the `{0: grid, 1: uniform, 2: density-constrained}` wire index a
/// host's configuration layer passes in, per spec.md §6.
impl TryFrom<u8> for SeedMethod {
    type Error = GraphError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(SeedMethod::Grid { d_sep: DEFAULT_D_SEP }),
            1 => Ok(SeedMethod::Uniform { count: DEFAULT_SEED_COUNT }),
            2 => Ok(SeedMethod::DensityConstrained { count: DEFAULT_SEED_COUNT, d_sep: DEFAULT_D_SEP }),
            other => Err(GraphError::UnknownSeedMethodIndex(other)),
        }
    }
}

const DENSITY_ATTEMPTS_PER_SEED: usize = 10;

/// Generate seeds for `method` within `[bottom_left, top_right]`.
pub fn generate(
    method: &SeedMethod,
    bottom_left: Vec2,
    top_right: Vec2,
    rng: &mut GraphRng,
) -> Vec<Vec2> {
    match *method {
        SeedMethod::Grid { d_sep } => grid(bottom_left, top_right, d_sep),
        SeedMethod::Uniform { count } => uniform(bottom_left, top_right, count, rng),
        SeedMethod::DensityConstrained { count, d_sep } => {
            density_constrained(bottom_left, top_right, count, d_sep, rng)
        }
    }
}

fn grid(bottom_left: Vec2, top_right: Vec2, d_sep: f32) -> Vec<Vec2> {
    if d_sep <= 0.0 {
        return Vec::new();
    }
    let h_region = top_right.y - bottom_left.y;
    let w_region = top_right.x - bottom_left.x;
    let rows = (h_region / d_sep).floor().max(0.0) as usize;
    let cols = (w_region / d_sep).floor().max(0.0) as usize;

    let mut seeds = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            seeds.push(Vec2::new(
                bottom_left.x + d_sep / 2.0 + j as f32 * d_sep,
                bottom_left.y + d_sep / 2.0 + i as f32 * d_sep,
            ));
        }
    }
    seeds
}

fn sample_uniform(bottom_left: Vec2, top_right: Vec2, rng: &mut GraphRng) -> Vec2 {
    Vec2::new(
        rng.gen_range(bottom_left.x..top_right.x),
        rng.gen_range(bottom_left.y..top_right.y),
    )
}

fn uniform(bottom_left: Vec2, top_right: Vec2, count: usize, rng: &mut GraphRng) -> Vec<Vec2> {
    (0..count).map(|_| sample_uniform(bottom_left, top_right, rng)).collect()
}

fn density_constrained(
    bottom_left: Vec2,
    top_right: Vec2,
    count: usize,
    d_sep: f32,
    rng: &mut GraphRng,
) -> Vec<Vec2> {
    let mut seeds: Vec<Vec2> = Vec::with_capacity(count);
    for _ in 0..count {
        for _ in 0..DENSITY_ATTEMPTS_PER_SEED {
            let candidate = sample_uniform(bottom_left, top_right, rng);
            let far_enough = seeds.iter().all(|&s| (candidate - s).length() >= d_sep);
            if far_enough {
                seeds.push(candidate);
                break;
            }
        }
    }
    seeds
}
