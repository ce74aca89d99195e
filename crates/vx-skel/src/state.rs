//! Per-voxel state bits used during a reduction.
//!
//! The engine keeps these in a scratch array of its own; caller grids stay
//! plain binary. Flags are only ever set on object voxels, so a nonzero state
//! byte always means object.

pub(crate) const OBJECT: u8 = 1;
pub(crate) const SIMPLE: u8 = 2;
pub(crate) const CRUCIAL: u8 = 4;
pub(crate) const INTERIOR: u8 = 8;
pub(crate) const CURVE: u8 = 32;
pub(crate) const SURFACE: u8 = 64;
pub(crate) const SELECTED: u8 = 128;

/// Marker value in an inhibition map.
pub(crate) const INHIBIT: u8 = 1;

pub(crate) fn is_object(v: u8) -> bool {
    v & OBJECT != 0
}

pub(crate) fn is_simple(v: u8) -> bool {
    v & SIMPLE != 0
}

pub(crate) fn is_crucial(v: u8) -> bool {
    v & CRUCIAL != 0
}

pub(crate) fn is_interior(v: u8) -> bool {
    v & INTERIOR != 0
}

pub(crate) fn is_curve(v: u8) -> bool {
    v & CURVE != 0
}

pub(crate) fn is_surface(v: u8) -> bool {
    v & SURFACE != 0
}

pub(crate) fn is_selected(v: u8) -> bool {
    v & SELECTED != 0
}

pub(crate) fn set(v: &mut u8, bit: u8) {
    *v |= bit;
}

pub(crate) fn unset(v: &mut u8, bit: u8) {
    *v &= !bit;
}

/// Candidate for removal: simple and not retained by any crucial clique.
pub(crate) fn is_deletable(v: u8) -> bool {
    v != 0 && is_simple(v) && !is_crucial(v)
}
