//! `st-field` — raster kernels and the tensor field grid.
//!
//! # Crate layout
//!
//! | Module     | Contents                                       |
//! |------------|--------------------------------------------------|
//! | [`raster`] | `RasterView`, `sobel_x`/`sobel_y`                |
//! | [`field`]  | `TensorField` and its basis-field fillers        |
//! | [`error`]  | `FieldError`, `FieldResult<T>`                   |

pub mod error;
pub mod field;
pub mod raster;

#[cfg(test)]
mod tests;

pub use error::{FieldError, FieldResult};
pub use field::TensorField;
pub use raster::{sobel_x, sobel_y, RasterView};
