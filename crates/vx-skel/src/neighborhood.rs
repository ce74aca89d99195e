//! 27-cell neighborhood codec.
//!
//! A voxel's neighborhood is flattened into a `[u8; 27]` buffer: indices
//! 0..=7 are the ring in the voxel's own slice starting east and turning
//! through north; 8 is the face neighbor below (z-1) and 9..=16 the ring
//! around it; 17 is the face neighbor above (z+1) and 18..=25 its ring;
//! 26 is the center voxel itself.
//!
//! Two involutive isometries act on the buffer: `swap_xz` exchanges the x
//! and z axes, `swap_yz` maps y to -z and z to -y. Together with the
//! identity they bring every axis-aligned clique orientation into the
//! matchers' canonical frame.

use vx_core::Dims;

/// Offsets `(dx, dy, dz)` of the 26 neighbors in canonical order.
pub const NEIGHBOR_OFFSETS: [(i32, i32, i32); 26] = [
    (1, 0, 0),
    (1, -1, 0),
    (0, -1, 0),
    (-1, -1, 0),
    (-1, 0, 0),
    (-1, 1, 0),
    (0, 1, 0),
    (1, 1, 0),
    (0, 0, -1),
    (1, 0, -1),
    (1, -1, -1),
    (0, -1, -1),
    (-1, -1, -1),
    (-1, 0, -1),
    (-1, 1, -1),
    (0, 1, -1),
    (1, 1, -1),
    (0, 0, 1),
    (1, 0, 1),
    (1, -1, 1),
    (0, -1, 1),
    (-1, -1, 1),
    (-1, 0, 1),
    (-1, 1, 1),
    (0, 1, 1),
    (1, 1, 1),
];

// v_new[i] = v_old[PERM[i]]
const PERM_XZ: [usize; 26] = [
    17, 20, 2, 11, 8, 15, 6, 24, 4, 22, 21, 3, 12, 13, 14, 5, 23, 0, 18, 19, 1, 10, 9, 16, 7, 25,
];
const PERM_YZ: [usize; 26] = [
    0, 18, 17, 22, 4, 13, 8, 9, 6, 7, 25, 24, 23, 5, 14, 15, 16, 2, 1, 19, 20, 21, 3, 12, 11, 10,
];

/// Linear offsets of the 26 neighbors for the given extents, in canonical
/// order. Scan loops compute this once and reuse it for every voxel.
pub(crate) fn linear_offsets(dims: &Dims) -> [isize; 26] {
    let rs = dims.row_stride() as isize;
    let ps = dims.slice_stride() as isize;
    let mut out = [0isize; 26];
    for (k, &(dx, dy, dz)) in NEIGHBOR_OFFSETS.iter().enumerate() {
        out[k] = dx as isize + dy as isize * rs + dz as isize * ps;
    }
    out
}

pub(crate) fn extract_with(state: &[u8], i: usize, dims: &Dims, off: &[isize; 26]) -> [u8; 27] {
    assert!(
        !dims.on_border(i),
        "neighborhood of border voxel {i} is incomplete"
    );
    let mut v = [0u8; 27];
    for k in 0..26 {
        v[k] = state[(i as isize + off[k]) as usize];
    }
    v[26] = state[i];
    v
}

pub(crate) fn insert_with(v: &[u8; 27], state: &mut [u8], i: usize, dims: &Dims, off: &[isize; 26]) {
    assert!(
        !dims.on_border(i),
        "neighborhood of border voxel {i} is incomplete"
    );
    for k in 0..26 {
        state[(i as isize + off[k]) as usize] = v[k];
    }
    state[i] = v[26];
}

/// Copies the neighborhood of voxel `i` into a canonical buffer.
///
/// Panics if `i` lies on the grid border; reductions require a background
/// margin around the object.
pub fn extract(state: &[u8], i: usize, dims: &Dims) -> [u8; 27] {
    extract_with(state, i, dims, &linear_offsets(dims))
}

/// Writes a canonical buffer back over the neighborhood of voxel `i`.
pub fn insert(v: &[u8; 27], state: &mut [u8], i: usize, dims: &Dims) {
    insert_with(v, state, i, dims, &linear_offsets(dims))
}

/// Exchanges the x and z axes of the buffer. Involutive.
pub fn swap_xz(v: &mut [u8; 27]) {
    let old = *v;
    for k in 0..26 {
        v[k] = old[PERM_XZ[k]];
    }
}

/// Maps y to -z and z to -y. Involutive.
pub fn swap_yz(v: &mut [u8; 27]) {
    let old = *v;
    for k in 0..26 {
        v[k] = old[PERM_YZ[k]];
    }
}
