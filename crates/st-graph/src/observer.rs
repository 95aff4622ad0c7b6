//! Progress-reporting hooks for `StreetGraph::generate`.

use crate::graph::Road;
use st_core::Vec2;

/// Callbacks invoked by [`StreetGraph::generate`][crate::graph::StreetGraph::generate]
/// at key points during generation.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct RoadCounter(usize);
///
/// impl GraphObserver for RoadCounter {
///     fn on_road_grown(&mut self, _road: &Road) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait GraphObserver {
    /// Called before a seed begins growing its road(s).
    fn on_seed_start(&mut self, _seed: Vec2) {}

    /// Called once a road has been finalized (segments, length, end node).
    fn on_road_grown(&mut self, _road: &Road) {}

    /// Called once after generation completes.
    fn on_generate_end(&mut self) {}
}

/// A [`GraphObserver`] that does nothing. Use when you need to call
/// `generate` but don't want progress callbacks.
pub struct NoopObserver;

impl GraphObserver for NoopObserver {}
