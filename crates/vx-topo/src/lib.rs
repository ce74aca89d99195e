//! Discrete topology oracles for 3D binary grids.
//!
//! The object is read with 26-connectivity and the background with
//! 6-connectivity, the usual pairing that keeps the digital Jordan property.
//! All functions are stateless and take plain byte slices (nonzero = object),
//! so callers may run them concurrently over shared data.

mod invariants;
mod ring2d;
mod topo3d;

pub use invariants::{Invariants, cavities6, components26, euler3, invariants};
pub use ring2d::{t4b, t8};
pub use topo3d::{is_simple26, object_neighbors26, object_neighbors6, top26};
