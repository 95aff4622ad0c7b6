//! Blue-channel raster access and 3×3 Sobel convolution.
//!
//! Only the blue channel of an input raster is ever read — the reference
//! treats heightmaps and water maps as single-channel data smuggled through
//! an RGB image, and we keep that convention rather than inventing a
//! grayscale-loading path.

use image::{GenericImageView, RgbImage};

/// A read-only view over an RGB raster's blue channel.
pub struct RasterView {
    image: RgbImage,
}

impl RasterView {
    pub fn from_rgb(image: RgbImage) -> Self {
        RasterView { image }
    }

    /// Decode a raster from disk. Any format the `image` crate recognizes
    /// from the file extension/contents is accepted.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, image::ImageError> {
        let img = image::open(path)?;
        Ok(RasterView { image: img.to_rgb8() })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Blue channel sample at `(x, y)`. Panics if out of bounds, matching
    /// `image`'s own indexing panics elsewhere in this crate.
    #[inline]
    pub fn blue(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y).0[2]
    }
}

const SOBEL_X: [f32; 9] = [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];
const SOBEL_Y: [f32; 9] = [-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0];

fn convolve3x3(view: &RasterView, kernel: &[f32; 9]) -> Vec<f32> {
    let (w, h) = (view.width(), view.height());
    let mut out = vec![0.0f32; (w * h) as usize];
    if w < 3 || h < 3 {
        return out;
    }
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut sum = 0.0f32;
            let mut k = 0;
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let px = view.blue((x as i32 + dx) as u32, (y as i32 + dy) as u32) as f32;
                    sum += px * kernel[k];
                    k += 1;
                }
            }
            out[(y * w + x) as usize] = sum;
        }
    }
    out
}

/// Horizontal gradient of the blue channel via the classical Sobel X kernel.
/// Border rows/columns are left at `0.0`.
pub fn sobel_x(view: &RasterView) -> Vec<f32> {
    convolve3x3(view, &SOBEL_X)
}

/// Vertical gradient of the blue channel via the classical Sobel Y kernel.
/// Border rows/columns are left at `0.0`.
pub fn sobel_y(view: &RasterView) -> Vec<f32> {
    convolve3x3(view, &SOBEL_Y)
}
