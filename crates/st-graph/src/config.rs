//! Generation configuration.

use st_core::Vec2;

use crate::seed::SeedMethod;

/// Which streamline family(ies) each seed grows, mirroring the reference's
/// `computeMajorHyperstreamlines` / `computeStreetGraph` / `computeStreetGraph3`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GrowthStyle {
    /// One road per seed, always along the major eigenvector.
    MajorOnly,
    /// One road per seed; successive seeds alternate between the major and
    /// minor eigenvector to interleave both families.
    AlternatingSingle,
    /// Two roads per seed, grown in opposite directions along the same
    /// (alternating) eigenvector.
    OppositePair,
}

/// Bundles the region bounds, separation distance, seed method, and growth
/// style a host passes to [`StreetGraph::generate`][crate::graph::StreetGraph::generate].
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    pub bottom_left: Vec2,
    pub top_right: Vec2,
    pub d_sep: f32,
    pub seed_method: SeedMethod,
    pub growth_style: GrowthStyle,
}

impl GenerationConfig {
    /// Sane per-field defaults for everything but the region and `d_sep`:
    /// grid seeding and `AlternatingSingle` growth.
    pub fn region(bottom_left: Vec2, top_right: Vec2, d_sep: f32) -> Self {
        GenerationConfig {
            bottom_left,
            top_right,
            d_sep,
            seed_method: SeedMethod::Grid { d_sep },
            growth_style: GrowthStyle::AlternatingSingle,
        }
    }

    pub fn with_seed_method(mut self, method: SeedMethod) -> Self {
        self.seed_method = method;
        self
    }

    pub fn with_growth_style(mut self, style: GrowthStyle) -> Self {
        self.growth_style = style;
        self
    }

    pub fn h_region(&self) -> f32 {
        self.top_right.y - self.bottom_left.y
    }

    pub fn w_region(&self) -> f32 {
        self.top_right.x - self.bottom_left.x
    }
}
