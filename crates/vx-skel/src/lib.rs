//! Parallel homotopic thinning of 3D binary grids.
//!
//! The operators remove simple voxels in parallel while retaining crucial
//! cliques, so every step preserves the topology of the object in the
//! (26, 6) adjacency pair. Variants differ in what they keep besides
//! topology: nothing (ultimate), curve ends, 1D/2D isthmuses, residual
//! shells, with symmetric, asymmetric, directional and persistence-filtered
//! schemes.
//!
//! Input grids are binary (nonzero = object) and are thinned in place;
//! surviving voxels are set to 255. The object must not touch the grid
//! border.

mod clique;
mod engine;
mod neighborhood;
mod persistence;
mod scan;
mod state;
mod variants;

pub use neighborhood::{extract, insert, swap_xz, swap_yz, NEIGHBOR_OFFSETS};
pub use variants::{
    curve_asymmetric_ends, curve_asymmetric_persistent, curve_lifetime_map, curve_symmetric,
    curve_symmetric_ends, curve_symmetric_persistent, removal_step_map, surface_asymmetric_persistent,
    surface_curve_asymmetric_persistent, surface_curve_directional, surface_curve_lifetime_map,
    surface_curve_symmetric, surface_curve_symmetric_persistent, surface_directional,
    surface_lifetime_map, surface_residual_directional, surface_residual_symmetric,
    surface_symmetric, surface_symmetric_persistent, ultimate_asymmetric, ultimate_directional,
    ultimate_symmetric, SURVIVOR_MARK,
};
