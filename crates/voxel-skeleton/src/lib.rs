//! Umbrella crate for the `voxel-skeleton` workspace.
//!
//! This crate re-exports the grid container, the topology toolbox and the
//! thinning operators under a single name.

pub use vx_core::*;
pub use vx_skel::*;
pub use vx_topo::*;
