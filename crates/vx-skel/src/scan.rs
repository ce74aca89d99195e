//! Auxiliary whole-neighborhood tests used by end-point, residual and
//! directional variants.

use vx_core::Dims;

// Each template: the end voxel's object neighbors are confined to one of
// eight 7-cell half-spaces (a face neighbor, its ring edge cells and the
// corners between them); every cell outside the template must be background.
const END_TEMPLATES: [[usize; 7]; 8] = [
    [19, 20, 18, 17, 2, 1, 0],
    [21, 20, 22, 17, 2, 3, 4],
    [17, 22, 24, 23, 4, 5, 6],
    [17, 18, 24, 25, 0, 7, 6],
    [9, 8, 16, 15, 0, 7, 6],
    [13, 8, 14, 15, 4, 5, 6],
    [11, 10, 8, 9, 2, 1, 0],
    [12, 11, 13, 8, 3, 2, 4],
];

/// Pattern-based end-point test over a canonical neighborhood buffer.
pub(crate) fn match_end(v: &[u8; 27]) -> bool {
    'templates: for tpl in &END_TEMPLATES {
        if !tpl.iter().any(|&k| v[k] != 0) {
            continue;
        }
        for k in 0..26 {
            if v[k] != 0 && !tpl.contains(&k) {
                continue 'templates;
            }
        }
        return true;
    }
    false
}

/// Count-based end-point test: exactly one object 26-neighbor.
pub(crate) fn is_end_count(state: &[u8], i: usize, dims: &Dims) -> bool {
    vx_topo::object_neighbors26(state, i, dims) == 1
}

/// Directions in scheduling order: -x, -y, -z, +x, +y, +z.
pub(crate) const DIRECTIONS: [(i32, i32, i32); 6] = [
    (-1, 0, 0),
    (0, -1, 0),
    (0, 0, -1),
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
];

/// True when the face neighbor of `i` in direction `dir` is background, so
/// voxel `i` is exposed to the sweep coming from that side.
pub(crate) fn exposed(state: &[u8], i: usize, dims: &Dims, dir: usize) -> bool {
    let (dx, dy, dz) = DIRECTIONS[dir];
    match dims.neighbor(i, dx, dy, dz) {
        Some(n) => state[n] == 0,
        None => true,
    }
}
