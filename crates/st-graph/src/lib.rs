//! `st-graph` — incremental planar street-graph construction from a tensor field.
//!
//! # Pipeline
//!
//! ```text
//! StreetGraph::generate(field, config, rng, observer):
//!   ① Seed     — config.seed_method produces the initial seed points
//!                (Grid / Uniform / DensityConstrained).
//!   ② Grow     — each seed grows one or two roads by tracing the field's
//!                major/minor eigenvector one fixed-length step at a time
//!                (see st_graph::trace), stopping at a boundary, a
//!                degenerate cell, a closed loop, or the d_sep length cap.
//!   ③ Connect  — GrowthStyle::OppositePair additionally checks each
//!                proposed step against the roads already in the graph;
//!                a crossing either joins an existing node or splits the
//!                met road and inserts a new one (T-junction).
//!   ④ Reseed   — a road that stopped on its length cap may spawn a new
//!                seed at its endpoint if no existing seed is already
//!                within d_sep/4 of it.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use st_core::{GraphRng, Vec2};
//! use st_field::TensorField;
//! use st_graph::{GenerationConfig, NoopObserver, StreetGraph};
//!
//! let mut field = TensorField::new(64, 64);
//! field.fill_grid_from_vector(Vec2::new(1.0, 0.0));
//! field.compute_eigen()?;
//!
//! let config = GenerationConfig::region(Vec2::ZERO, Vec2::new(100.0, 100.0), 4.0);
//! let mut rng = GraphRng::new(42);
//! let mut graph = StreetGraph::new(config.bottom_left, config.top_right, config.d_sep);
//! graph.generate(&field, &config, &mut rng, &mut NoopObserver)?;
//! # Ok::<(), st_graph::GraphError>(())
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod observer;
pub mod seed;
pub mod trace;

#[cfg(test)]
mod tests;

pub use config::{GenerationConfig, GrowthStyle};
pub use error::{GraphError, GraphResult};
pub use graph::{Node, Road, RoadType, StreetGraph};
pub use observer::{GraphObserver, NoopObserver};
pub use seed::SeedMethod;
