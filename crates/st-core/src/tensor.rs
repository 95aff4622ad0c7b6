//! Symmetric, traceless 2×2 tensors and their eigen-decomposition.
//!
//! A tensor field built from basis fields (grid, radial, rotating, raster)
//! only ever produces tensors of the form `[[a, b], [b, -a]]` — symmetric
//! and traceless by construction. For that restricted family the
//! eigendecomposition has a closed form, so unlike a general 2×2 solver we
//! never need an iterative or library eigensolver:
//!
//!   eigenvalue  λ = sqrt(a² + b²)
//!   major angle θ = 0.5 * atan2(b, a)
//!
//! with the major eigenvector at angle `θ` and the minor eigenvector at
//! `θ + π/2`. This is the standard closed form for direction fields built
//! from traceless symmetric tensors (the two eigenvectors are always
//! orthogonal and carry eigenvalues `±λ`).

use crate::error::{CoreError, CoreResult};
use crate::fuzzy::{fuzzy_null, EPSILON};
use crate::geom::Vec2;

/// A symmetric, traceless 2×2 tensor, stored as `[[a, b], [b, d]]` with
/// `d == -a` expected to hold (within [`EPSILON`]) for any tensor produced
/// by this crate's field basis functions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Tensor {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Tensor {
    pub const ZERO: Tensor = Tensor { a: 0.0, b: 0.0, c: 0.0, d: 0.0 };

    /// Build a tensor from all four components directly. Most callers want
    /// [`Tensor::symmetric`] instead — this exists for the rare case of a
    /// hand-built tensor whose symmetric-traceless shape isn't known in
    /// advance (e.g. before it's validated by [`Tensor::is_symmetric_traceless`]).
    #[inline]
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Tensor { a, b, c, d }
    }

    /// Build a symmetric traceless tensor directly from its two free
    /// parameters: `[[a, b], [b, -a]]`.
    #[inline]
    pub fn symmetric(a: f32, b: f32) -> Self {
        Tensor { a, b, c: b, d: -a }
    }

    /// Build the basis tensor for a uniform direction field at angle `theta`:
    /// `R * [[cos(2θ), sin(2θ)], [sin(2θ), -cos(2θ)]]`, where `r` scales the
    /// tensor's magnitude (and hence its contribution when blended with
    /// other basis fields).
    pub fn from_angle(theta: f32, r: f32) -> Self {
        let two_theta = 2.0 * theta;
        Tensor::symmetric(r * two_theta.cos(), r * two_theta.sin())
    }

    /// `true` if `c == b` and `a + d == 0`, both within [`EPSILON`].
    pub fn is_symmetric_traceless(&self) -> bool {
        fuzzy_null(self.b - self.c) && fuzzy_null(self.a + self.d)
    }

    /// `true` if all four components are within [`EPSILON`] of zero — the
    /// tensor has no preferred direction and its eigenvectors are undefined.
    pub fn is_degenerate(&self) -> bool {
        fuzzy_null(self.a) && fuzzy_null(self.b) && fuzzy_null(self.c) && fuzzy_null(self.d)
    }

    /// Eigen-decompose this tensor into its major/minor eigenvector-value
    /// pairs, returned as an [`EigenCell`].
    ///
    /// A degenerate tensor decomposes to a zeroed `EigenCell` (zero vectors,
    /// zero eigenvalues) rather than an error — callers (the streamline
    /// tracer in particular) treat a zero major vector as a stop condition,
    /// which mirrors the reference behavior.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotSymmetricTraceless`] if `self` fails
    /// [`Tensor::is_symmetric_traceless`]. Every tensor this crate's field
    /// basis functions produce satisfies that invariant, so this only fires
    /// if a tensor was hand-built in violation of it.
    pub fn eigen(&self) -> CoreResult<EigenCell> {
        if !self.is_symmetric_traceless() {
            return Err(CoreError::NotSymmetricTraceless(*self));
        }
        if self.is_degenerate() {
            return Ok(EigenCell::ZERO);
        }
        let lambda = (self.a * self.a + self.b * self.b).sqrt();
        let theta = 0.5 * self.b.atan2(self.a);
        let major_dir = Vec2::new(theta.cos(), theta.sin());
        let minor_dir = Vec2::new(-theta.sin(), theta.cos());
        Ok(EigenCell {
            major: (major_dir, lambda),
            minor: (minor_dir, -lambda),
        })
    }
}

impl std::ops::Add for Tensor {
    type Output = Tensor;
    #[inline]
    fn add(self, rhs: Tensor) -> Tensor {
        Tensor {
            a: self.a + rhs.a,
            b: self.b + rhs.b,
            c: self.c + rhs.c,
            d: self.d + rhs.d,
        }
    }
}

impl std::ops::Mul<f32> for Tensor {
    type Output = Tensor;
    #[inline]
    fn mul(self, rhs: f32) -> Tensor {
        Tensor {
            a: self.a * rhs,
            b: self.b * rhs,
            c: self.c * rhs,
            d: self.d * rhs,
        }
    }
}

/// The result of eigen-decomposing a [`Tensor`]: a unit major eigenvector
/// paired with its eigenvalue, and likewise for the minor (orthogonal) one.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EigenCell {
    pub major: (Vec2, f32),
    pub minor: (Vec2, f32),
}

impl EigenCell {
    pub const ZERO: EigenCell = EigenCell {
        major: (Vec2::ZERO, 0.0),
        minor: (Vec2::ZERO, 0.0),
    };

    /// `true` if the major eigenvector is the zero vector — the marker this
    /// crate uses for "no direction here", whether from a degenerate tensor
    /// or an unfilled field cell.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.major.0.length_squared() < EPSILON
    }
}
