//! Foundational primitives for 3D voxel processing.
//!
//! ## Grid Layout
//! Grids are dense, x-fastest arrays: the linear index of voxel `(x, y, z)`
//! is `z * slice_stride + y * row_stride + x`. Strides are in elements.
//!
//! ## Binary Convention
//! Operators treat a `u8` voxel as object when nonzero and background when
//! zero. Operators that rewrite a grid normalize surviving object voxels
//! to 255.

mod error;
mod grid;

pub use error::Error;
pub use grid::{Dims, Grid3};
