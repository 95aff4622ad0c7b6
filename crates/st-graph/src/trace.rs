//! Streamline tracing along a tensor field's eigen-directions.
//!
//! [`StreamlineStepper`] advances one point at a time rather than running the
//! whole trace to completion in one call. The planar graph builder needs to
//! inspect every candidate point against the existing road set before
//! committing to it (T-junction detection), so the stepping/committing split
//! is the seam between "plain Grow" and "GrowAndConnect" — both drive the
//! same stepper, they just differ in what they do with a [`StepOutcome::Continue`]
//! before calling [`StreamlineStepper::commit`].

use st_core::Vec2;
use st_field::TensorField;

use crate::error::{GraphError, GraphResult};

/// Hard safety cap on trace iterations. Should rarely trigger — see
/// [`StopReason::Runaway`].
pub const MAX_ITERS: usize = 1000;

/// Why a streamline stopped growing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The next point would lie on or outside the region bounds.
    Boundary,
    /// The current cell's tensor is degenerate (no eigenvector).
    Degenerate,
    /// The next point closed a loop back onto the seed.
    Loop,
    /// Accumulated path length exceeded `d_sep` (only checked when the
    /// caller enforces a max length).
    Length,
    /// Hit [`MAX_ITERS`] without otherwise stopping. Finalized exactly like
    /// [`StopReason::Length`], except re-seeding is skipped.
    Runaway,
}

/// The outcome of proposing the next point in a trace.
pub enum StepOutcome {
    /// `p_next` satisfies no stopping predicate; the caller may [`StreamlineStepper::commit`]
    /// it, or substitute a different point (e.g. a T-junction intersection)
    /// and commit that instead.
    Continue(Vec2),
    Stop(StopReason),
}

/// `true` if `p` lies strictly inside `[bottom_left, top_right]` (boundary
/// points count as outside, per the Boundary stopping predicate).
pub fn strictly_inside(p: Vec2, bottom_left: Vec2, top_right: Vec2) -> bool {
    p.x > bottom_left.x && p.x < top_right.x && p.y > bottom_left.y && p.y < top_right.y
}

/// Map a world point to the nearest field cell, clamped to the grid bounds.
pub fn field_index(
    p: Vec2,
    bottom_left: Vec2,
    top_right: Vec2,
    rows: usize,
    cols: usize,
) -> (usize, usize) {
    let h = (top_right.y - bottom_left.y).max(f32::EPSILON);
    let w = (top_right.x - bottom_left.x).max(f32::EPSILON);
    let i = (((p.y - bottom_left.y) / h) * (rows.max(1) - 1) as f32).round();
    let j = (((p.x - bottom_left.x) / w) * (cols.max(1) - 1) as f32).round();
    let i = i.clamp(0.0, (rows.max(1) - 1) as f32) as usize;
    let j = j.clamp(0.0, (cols.max(1) - 1) as f32) as usize;
    (i, j)
}

/// The fixed step length used by every trace: `H_region / 100`.
pub fn step_length(bottom_left: Vec2, top_right: Vec2) -> f32 {
    (top_right.y - bottom_left.y) / 100.0
}

/// Drives a single streamline one step at a time.
pub struct StreamlineStepper<'a> {
    field: &'a TensorField,
    bottom_left: Vec2,
    top_right: Vec2,
    d_sep: f32,
    use_major: bool,
    reverse_first_step: bool,
    enforce_max_length: bool,
    segments: Vec<Vec2>,
    path_length: f32,
    iters: usize,
}

impl<'a> StreamlineStepper<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        field: &'a TensorField,
        start: Vec2,
        bottom_left: Vec2,
        top_right: Vec2,
        d_sep: f32,
        use_major: bool,
        reverse_first_step: bool,
        enforce_max_length: bool,
    ) -> Self {
        StreamlineStepper {
            field,
            bottom_left,
            top_right,
            d_sep,
            use_major,
            reverse_first_step,
            enforce_max_length,
            segments: vec![start],
            path_length: 0.0,
            iters: 0,
        }
    }

    pub fn segments(&self) -> &[Vec2] {
        &self.segments
    }

    pub fn path_length(&self) -> f32 {
        self.path_length
    }

    fn current(&self) -> Vec2 {
        *self.segments.last().expect("segments always has the seed point")
    }

    /// Compute the next candidate point without committing it. Returns
    /// `Ok(Continue(p_next))` if no stopping predicate fires.
    pub fn propose(&self) -> GraphResult<StepOutcome> {
        if self.iters >= MAX_ITERS {
            return Ok(StepOutcome::Stop(StopReason::Runaway));
        }
        let p = self.current();
        let (i, j) = field_index(p, self.bottom_left, self.top_right, self.field.rows(), self.field.cols());

        if self.field.is_degenerate_at(i, j)? {
            return Ok(StepOutcome::Stop(StopReason::Degenerate));
        }

        let v = if self.use_major {
            self.field.major_eigenvector(i, j)?
        } else {
            self.field.minor_eigenvector(i, j)?
        };

        let prev_dir = if self.segments.len() >= 2 {
            p - self.segments[self.segments.len() - 2]
        } else {
            Vec2::ZERO
        };

        let mut dir = v;
        if dir.dot(prev_dir) < 0.0 {
            dir = -dir;
        }
        if self.iters == 0 && self.reverse_first_step {
            dir = -dir;
        }

        let step = step_length(self.bottom_left, self.top_right);
        let p_next = p + dir * step;

        if !strictly_inside(p_next, self.bottom_left, self.top_right) {
            return Ok(StepOutcome::Stop(StopReason::Boundary));
        }
        if p_next.fuzzy_eq(self.segments[0]) {
            return Ok(StepOutcome::Stop(StopReason::Loop));
        }
        if self.enforce_max_length && self.path_length > self.d_sep {
            return Ok(StepOutcome::Stop(StopReason::Length));
        }
        Ok(StepOutcome::Continue(p_next))
    }

    /// Accept `p` (either the proposed `p_next`, or a substitute such as a
    /// T-junction intersection point) as the next segment endpoint.
    pub fn commit(&mut self, p: Vec2) {
        let last = self.current();
        self.path_length += (p - last).length();
        self.segments.push(p);
        self.iters += 1;
    }

    pub fn into_segments(self) -> Vec<Vec2> {
        self.segments
    }
}
