//! The tensor field grid: basis-field fillers, water mask, eigen cache.
//!
//! Row 0 is the bottom of the region in world coordinates; raster inputs
//! (which are top-down) are flipped at ingest so every filler writes through
//! the same `row = H - 1 - i` convention. The reference swaps `i`/`j` when
//! indexing `QImage::pixel` for the heightmap fillers (`pixel(i, j)` where
//! `i` is the row) — we do not reproduce that; `i` is always the row and `j`
//! the column here.

use std::path::PathBuf;

use st_core::{EigenCell, Tensor, Vec2};

use crate::error::{FieldError, FieldResult};
use crate::raster::{sobel_x, sobel_y, RasterView};

/// Gaussian spatial-decay weight `w(x, y, decay) = exp(-decay * (x^2 + y^2))`
/// where `(x, y)` is the cell's position in `[0, 1]^2` relative to `center`.
fn gaussian_weight(x: f32, y: f32, decay: f32) -> f32 {
    (-decay * (x * x + y * y)).exp()
}

/// Cell position normalized to `[0, 1]^2`, offset from `center`.
fn normalized_offset(i: usize, j: usize, rows: usize, cols: usize, center: Vec2) -> (f32, f32) {
    let y = if rows > 1 { i as f32 / (rows - 1) as f32 } else { 0.0 } - center.y;
    let x = if cols > 1 { j as f32 / (cols - 1) as f32 } else { 0.0 } - center.x;
    (x, y)
}

/// A dense `rows x cols` grid of tensors, plus an optional eigen cache.
pub struct TensorField {
    rows: usize,
    cols: usize,
    data: Vec<Tensor>,
    eigen: Option<Vec<EigenCell>>,
    filled: bool,
    water_mask_path: Option<PathBuf>,
}

impl TensorField {
    pub fn new(rows: usize, cols: usize) -> Self {
        TensorField {
            rows,
            cols,
            data: vec![Tensor::ZERO; rows * cols],
            eigen: None,
            filled: false,
            water_mask_path: None,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    #[inline]
    pub fn is_eigen_cached(&self) -> bool {
        self.eigen.is_some()
    }

    pub fn water_mask_path(&self) -> Option<&PathBuf> {
        self.water_mask_path.as_ref()
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Tensor at `(i, j)`. Panics if out of bounds — internal callers never
    /// go out of bounds, and external callers go through the graph/tracer
    /// layer which validates indices first.
    pub fn tensor(&self, i: usize, j: usize) -> Tensor {
        self.data[self.idx(i, j)]
    }

    fn add(&mut self, i: usize, j: usize, t: Tensor) {
        let idx = self.idx(i, j);
        self.data[idx] = self.data[idx] + t;
    }

    fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data = vec![Tensor::ZERO; rows * cols];
        self.eigen = None;
    }

    fn invalidate(&mut self) {
        self.eigen = None;
        self.filled = true;
    }

    // ── Basis fields ──────────────────────────────────────────────────────

    /// Uniform direction field at angle `theta`, strength `l`, weighted by
    /// the *inverse* Gaussian `(1 - w)` so the basis grows stronger away
    /// from `center`.
    pub fn fill_grid(&mut self, theta: f32, l: f32, center: Vec2, decay: f32) -> &mut Self {
        for i in 0..self.rows {
            for j in 0..self.cols {
                let (x, y) = normalized_offset(i, j, self.rows, self.cols, center);
                let w = gaussian_weight(x, y, decay);
                let t = Tensor::from_angle(theta, l * (1.0 - w));
                self.add(i, j, t);
            }
        }
        self.invalidate();
        self
    }

    /// Same as [`TensorField::fill_grid`] but derives `theta`/`l` from a
    /// direction vector, defaulting `center = (0.2, 0.3)`, `decay = 0.1`.
    pub fn fill_grid_from_vector(&mut self, v: Vec2) -> &mut Self {
        let theta = v.y.atan2(v.x);
        let l = v.length();
        self.fill_grid(theta, l, Vec2::new(0.2, 0.3), 0.1)
    }

    /// Sweeping rotation field: `theta(i, j) = pi*j/(W-1) + (pi/4)*i/(H-1)`,
    /// weighted additively by the (non-inverted) Gaussian.
    pub fn fill_rotating(&mut self, center: Vec2, decay: f32) -> &mut Self {
        let (rows, cols) = (self.rows, self.cols);
        for i in 0..rows {
            for j in 0..cols {
                let theta = std::f32::consts::PI * j as f32 / (cols.max(2) - 1) as f32
                    + (std::f32::consts::PI / 4.0) * i as f32 / (rows.max(2) - 1) as f32;
                let (x, y) = normalized_offset(i, j, rows, cols, center);
                let w = gaussian_weight(x, y, decay);
                let t = Tensor::from_angle(theta, w);
                self.add(i, j, t);
            }
        }
        self.invalidate();
        self
    }

    /// Radial field around `center`: `(y^2 - x^2, -2xy, -2xy, -(y^2-x^2)) * w`.
    pub fn fill_radial(&mut self, center: Vec2, decay: f32) -> &mut Self {
        for i in 0..self.rows {
            for j in 0..self.cols {
                let (x, y) = normalized_offset(i, j, self.rows, self.cols, center);
                let w = gaussian_weight(x, y, decay);
                let t = Tensor::symmetric(y * y - x * x, -2.0 * x * y) * w;
                self.add(i, j, t);
            }
        }
        self.invalidate();
        self
    }

    /// Resize to the heightmap's dimensions and fill from its per-pixel
    /// blue-channel forward-difference gradient. The reference never
    /// parameterizes this filler with a center/decay, so `w` is held at `1`
    /// (no localization) to match it exactly.
    pub fn fill_heightmap(&mut self, raster: &RasterView) -> FieldResult<&mut Self> {
        let (w, h) = (raster.width() as usize, raster.height() as usize);
        self.resize(h, w);
        for i in 0..h.saturating_sub(1) {
            for j in 0..w.saturating_sub(1) {
                let current = raster.blue(j as u32, i as u32) as f32;
                let next_j = raster.blue(j as u32 + 1, i as u32) as f32;
                let next_i = raster.blue(j as u32, i as u32 + 1) as f32;
                let gx = current - next_j;
                let gy = current - next_i;
                let row = h - 1 - i;
                if gx == 0.0 && gy == 0.0 {
                    self.add(row, j, Tensor { a: 1.0, b: 0.0, c: 0.0, d: -1.0 });
                    continue;
                }
                let theta = (-gy).atan2(gx) + std::f32::consts::FRAC_PI_2;
                let r = (gx * gx + gy * gy).sqrt();
                self.add(row, j, Tensor::from_angle(theta, r));
            }
        }
        self.invalidate();
        Ok(self)
    }

    /// Same as [`TensorField::fill_heightmap`] but derives the gradient from
    /// a 3x3 Sobel convolution instead of a single forward difference, which
    /// is less sensitive to per-pixel noise.
    pub fn fill_heightmap_sobel(&mut self, raster: &RasterView) -> FieldResult<&mut Self> {
        let (w, h) = (raster.width() as usize, raster.height() as usize);
        self.resize(h, w);
        let gx_map = sobel_x(raster);
        let gy_map = sobel_y(raster);
        for i in 0..h {
            for j in 0..w {
                let gx = gx_map[i * w + j].abs();
                let gy = gy_map[i * w + j].abs();
                if gx == 0.0 && gy == 0.0 {
                    self.add(h - 1 - i, j, Tensor { a: 1.0, b: 0.0, c: 0.0, d: -1.0 });
                    continue;
                }
                let theta = gy.atan2(gx);
                let r = (gx * gx + gy * gy).sqrt();
                self.add(h - 1 - i, j, Tensor::from_angle(theta, r));
            }
        }
        self.invalidate();
        Ok(self)
    }

    /// Sobel gradient of a water-map blue channel, broadcast into the 3x3
    /// neighborhood around each pixel (clipped at field edges) to thicken
    /// coastlines into wider bands of curving road.
    pub fn fill_water_boundary(&mut self, raster: &RasterView) -> FieldResult<&mut Self> {
        let (w, h) = (raster.width() as usize, raster.height() as usize);
        if w != self.cols || h != self.rows {
            return Err(FieldError::SizeMismatch {
                expected: (self.cols as u32, self.rows as u32),
                got: (w as u32, h as u32),
            });
        }
        let gx_map = sobel_x(raster);
        let gy_map = sobel_y(raster);
        for i in 0..h {
            for j in 0..w {
                let gx = gx_map[i * w + j].abs();
                let gy = gy_map[i * w + j].abs();
                if gx == 0.0 && gy == 0.0 {
                    continue;
                }
                let theta = gy.atan2(gx);
                let r = (gx * gx + gy * gy).sqrt();
                let t = Tensor::from_angle(theta, r);
                let row = h - 1 - i;
                for di in -1i32..=1 {
                    for dj in -1i32..=1 {
                        let ni = row as i32 + di;
                        let nj = j as i32 + dj;
                        if ni >= 0 && (ni as usize) < self.rows && nj >= 0 && (nj as usize) < self.cols {
                            self.add(ni as usize, nj as usize, t);
                        }
                    }
                }
            }
        }
        self.invalidate();
        Ok(self)
    }

    /// Zero every cell under a water pixel (blue > 0), y-flipped to match
    /// the field's row convention. Unlike the other fillers this replaces
    /// rather than accumulates, per the water mask's role as a cutout.
    pub fn fill_water_mask(&mut self, raster: &RasterView) -> FieldResult<&mut Self> {
        let (w, h) = (raster.width() as usize, raster.height() as usize);
        if w != self.cols || h != self.rows {
            return Err(FieldError::SizeMismatch {
                expected: (self.cols as u32, self.rows as u32),
                got: (w as u32, h as u32),
            });
        }
        for i in 0..h {
            for j in 0..w {
                if raster.blue(j as u32, i as u32) > 0 {
                    let idx = self.idx(h - 1 - i, j);
                    self.data[idx] = Tensor::ZERO;
                }
            }
        }
        self.invalidate();
        Ok(self)
    }

    pub fn set_water_mask_path(&mut self, path: PathBuf) {
        self.water_mask_path = Some(path);
    }

    // ── Eigen cache ───────────────────────────────────────────────────────

    /// Eigen-decompose every cell, caching the result. Returns the number of
    /// degenerate cells found, and logs a warning if they're the majority —
    /// a diagnostic signal that the field is mostly flat, not a hard error.
    pub fn compute_eigen(&mut self) -> FieldResult<usize> {
        if !self.filled {
            return Err(FieldError::NotFilled);
        }
        let mut cache = Vec::with_capacity(self.data.len());
        let mut degenerate = 0usize;
        for t in &self.data {
            let cell = t.eigen()?;
            if cell.is_zero() {
                degenerate += 1;
            }
            cache.push(cell);
        }
        if degenerate * 2 > cache.len() {
            log::warn!(
                "tensor field is mostly degenerate: {degenerate}/{} cells have no eigenvector",
                cache.len()
            );
        }
        self.eigen = Some(cache);
        Ok(degenerate)
    }

    fn eigen_at(&self, i: usize, j: usize) -> FieldResult<&EigenCell> {
        let cache = self.eigen.as_ref().ok_or(FieldError::EigenNotComputed)?;
        Ok(&cache[self.idx(i, j)])
    }

    pub fn major_eigenvector(&self, i: usize, j: usize) -> FieldResult<Vec2> {
        Ok(self.eigen_at(i, j)?.major.0)
    }

    pub fn minor_eigenvector(&self, i: usize, j: usize) -> FieldResult<Vec2> {
        Ok(self.eigen_at(i, j)?.minor.0)
    }

    pub fn is_degenerate_at(&self, i: usize, j: usize) -> FieldResult<bool> {
        Ok(self.eigen_at(i, j)?.is_zero())
    }
}
