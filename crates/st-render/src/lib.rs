//! `st-render` — read-only snapshots and coordinate mapping for drawing a
//! street graph. The actual raster output is external; this crate provides
//! the borrowed view and the `u, v` coordinate transform a host's renderer
//! draws from.
//!
//! # Cargo features
//!
//! | Feature | Effect                                                        |
//! |---------|----------------------------------------------------------------|
//! | `csv`   | Adds [`csv::write_snapshot`], a write-only nodes/roads CSV dump. |
//!
//! # Usage
//!
//! ```rust,ignore
//! use st_render::{CoordMapper, Snapshot};
//!
//! let snapshot = Snapshot::new(&graph, &field);
//! let mapper = CoordMapper::new(snapshot.bottom_left(), snapshot.top_right(), 800.0, 600.0);
//! for road in snapshot.roads().values() {
//!     for pair in road.segments.windows(2) {
//!         let (u0, v0) = mapper.to_image(pair[0]);
//!         let (u1, v1) = mapper.to_image(pair[1]);
//!         // draw_line(u0, v0, u1, v1);
//!     }
//! }
//! ```

pub mod coord;
pub mod error;
pub mod snapshot;

#[cfg(feature = "csv")]
pub mod csv;

#[cfg(test)]
mod tests;

pub use coord::CoordMapper;
pub use error::{RenderError, RenderResult};
pub use snapshot::Snapshot;
