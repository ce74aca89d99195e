//! Connectivity numbers in the 26-neighborhood of a voxel.
//!
//! Object voxels are nonzero bytes. The pair computed by [`top26`] drives the
//! (26, 6) simplicity test: a voxel is simple when removing it preserves both
//! the object 26-components and the background 6-components locally.

use vx_core::Dims;

// local cube cell index: (dz + 1) * 9 + (dy + 1) * 3 + (dx + 1)
const CENTER: usize = 13;

fn cell(dx: i32, dy: i32, dz: i32) -> usize {
    ((dz + 1) * 9 + (dy + 1) * 3 + (dx + 1)) as usize
}

fn cell_delta(c: usize) -> (i32, i32, i32) {
    (
        (c % 3) as i32 - 1,
        ((c / 3) % 3) as i32 - 1,
        (c / 9) as i32 - 1,
    )
}

fn occupancy(state: &[u8], i: usize, dims: &Dims) -> [bool; 27] {
    let mut occ = [false; 27];
    for c in 0..27 {
        if c == CENTER {
            continue;
        }
        let (dx, dy, dz) = cell_delta(c);
        if let Some(n) = dims.neighbor(i, dx, dy, dz) {
            occ[c] = state[n] != 0;
        }
    }
    occ
}

fn flood27(occ: &[bool; 27], seed: usize, visited: &mut [bool; 27], pred: impl Fn(usize, usize) -> bool) {
    let mut stack = [0usize; 27];
    let mut top = 0;
    visited[seed] = true;
    stack[top] = seed;
    top += 1;
    while top > 0 {
        top -= 1;
        let c = stack[top];
        for n in 0..27 {
            if n == CENTER || visited[n] || !occ[n] {
                continue;
            }
            if pred(c, n) {
                visited[n] = true;
                stack[top] = n;
                top += 1;
            }
        }
    }
}

fn adjacent26(a: usize, b: usize) -> bool {
    let (ax, ay, az) = cell_delta(a);
    let (bx, by, bz) = cell_delta(b);
    a != b && (ax - bx).abs() <= 1 && (ay - by).abs() <= 1 && (az - bz).abs() <= 1
}

fn adjacent6(a: usize, b: usize) -> bool {
    let (ax, ay, az) = cell_delta(a);
    let (bx, by, bz) = cell_delta(b);
    (ax - bx).abs() + (ay - by).abs() + (az - bz).abs() == 1
}

fn in_n18(c: usize) -> bool {
    let (dx, dy, dz) = cell_delta(c);
    let r = dx.abs() + dy.abs() + dz.abs();
    r == 1 || r == 2
}

fn is_face(c: usize) -> bool {
    let (dx, dy, dz) = cell_delta(c);
    dx.abs() + dy.abs() + dz.abs() == 1
}

/// Connectivity numbers `(top, topb)` of voxel `i`:
///
/// - `top`: number of 26-components of object voxels in the punctured
///   26-neighborhood;
/// - `topb`: number of 6-components of background voxels in the
///   18-neighborhood that are 6-adjacent to the center.
///
/// Voxels outside the grid count as background.
pub fn top26(state: &[u8], i: usize, dims: &Dims) -> (u32, u32) {
    let occ = occupancy(state, i, dims);

    let mut visited = [false; 27];
    let mut top = 0;
    for c in 0..27 {
        if c != CENTER && occ[c] && !visited[c] {
            top += 1;
            flood27(&occ, c, &mut visited, adjacent26);
        }
    }

    let mut bg = [false; 27];
    for c in 0..27 {
        bg[c] = c != CENTER && in_n18(c) && !occ[c];
    }
    let mut visited = [false; 27];
    let mut topb = 0;
    for c in 0..27 {
        if is_face(c) && bg[c] && !visited[c] {
            topb += 1;
            flood27(&bg, c, &mut visited, adjacent6);
        }
    }

    (top, topb)
}

/// True when voxel `i` is (26, 6)-simple: both connectivity numbers equal 1.
pub fn is_simple26(state: &[u8], i: usize, dims: &Dims) -> bool {
    top26(state, i, dims) == (1, 1)
}

/// Number of object voxels among the 26 neighbors of `i`.
pub fn object_neighbors26(state: &[u8], i: usize, dims: &Dims) -> usize {
    let occ = occupancy(state, i, dims);
    (0..27).filter(|&c| c != CENTER && occ[c]).count()
}

/// Number of object voxels among the 6 face neighbors of `i`.
pub fn object_neighbors6(state: &[u8], i: usize, dims: &Dims) -> usize {
    let occ = occupancy(state, i, dims);
    (0..27).filter(|&c| c != CENTER && is_face(c) && occ[c]).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vx_core::Grid3;

    fn center(g: &Grid3<u8>) -> usize {
        let d = g.dims();
        d.index(d.width / 2, d.height / 2, d.depth / 2)
    }

    #[test]
    fn isolated_voxel_is_not_simple() {
        let mut g = Grid3::new_fill(5, 5, 5, 0u8);
        *g.get_mut(2, 2, 2).unwrap() = 1;
        let i = center(&g);
        assert_eq!(top26(g.data(), i, &g.dims()), (0, 1));
        assert!(!is_simple26(g.data(), i, &g.dims()));
    }

    #[test]
    fn voxel_with_one_face_neighbor_is_simple() {
        let mut g = Grid3::new_fill(5, 5, 5, 0u8);
        *g.get_mut(2, 2, 2).unwrap() = 1;
        *g.get_mut(3, 2, 2).unwrap() = 1;
        let i = center(&g);
        assert_eq!(top26(g.data(), i, &g.dims()), (1, 1));
        assert!(is_simple26(g.data(), i, &g.dims()));
    }

    #[test]
    fn interior_voxel_has_no_background_component() {
        let g = Grid3::new_fill(5, 5, 5, 1u8);
        let i = center(&g);
        assert_eq!(top26(g.data(), i, &g.dims()), (1, 0));
    }

    #[test]
    fn curve_interior_splits_object() {
        // line along x through the center
        let mut g = Grid3::new_fill(5, 5, 5, 0u8);
        for x in 0..5 {
            *g.get_mut(x, 2, 2).unwrap() = 1;
        }
        let i = center(&g);
        assert_eq!(top26(g.data(), i, &g.dims()), (2, 1));
    }

    #[test]
    fn surface_interior_splits_background() {
        // plane z = 2 through the center
        let mut g = Grid3::new_fill(5, 5, 5, 0u8);
        for y in 0..5 {
            for x in 0..5 {
                *g.get_mut(x, y, 2).unwrap() = 1;
            }
        }
        let i = center(&g);
        assert_eq!(top26(g.data(), i, &g.dims()), (1, 2));
    }

    #[test]
    fn opposite_diagonal_neighbors_split() {
        let mut g = Grid3::new_fill(5, 5, 5, 0u8);
        *g.get_mut(2, 2, 2).unwrap() = 1;
        *g.get_mut(3, 3, 2).unwrap() = 1;
        *g.get_mut(1, 1, 2).unwrap() = 1;
        let i = center(&g);
        // the two diagonal neighbors are separate 26-components of N(x)
        assert_eq!(top26(g.data(), i, &g.dims()).0, 2);
    }

    #[test]
    fn neighbor_counts() {
        let mut g = Grid3::new_fill(5, 5, 5, 0u8);
        *g.get_mut(2, 2, 2).unwrap() = 1;
        *g.get_mut(3, 2, 2).unwrap() = 1;
        *g.get_mut(3, 3, 2).unwrap() = 1;
        let i = center(&g);
        assert_eq!(object_neighbors26(g.data(), i, &g.dims()), 2);
        assert_eq!(object_neighbors6(g.data(), i, &g.dims()), 1);
    }
}
