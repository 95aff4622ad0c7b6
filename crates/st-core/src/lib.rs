//! `st-core` — foundational types for the street-tensor network generator.
//!
//! This crate is a dependency of every other `st-*` crate. It intentionally
//! has no `st-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module     | Contents                                    |
//! |------------|----------------------------------------------|
//! | [`fuzzy`]  | Absolute-epsilon float comparators           |
//! | [`geom`]   | `Vec2`, small 2D vector math                 |
//! | [`tensor`] | `Tensor`, `EigenCell`, eigen-decomposition   |
//! | [`ids`]    | `NodeId`, `RoadId`                           |
//! | [`rng`]    | `GraphRng` (seeded, injectable)              |
//! | [`error`]  | `CoreError`, `CoreResult`                    |

pub mod error;
pub mod fuzzy;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod tensor;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use fuzzy::{fuzzy_eq, fuzzy_null, EPSILON};
pub use geom::Vec2;
pub use ids::{NodeId, RoadId};
pub use rng::GraphRng;
pub use tensor::{EigenCell, Tensor};
