//! Global topological invariants of a binary voxel grid.
//!
//! The object is interpreted with 26-connectivity and the background with
//! 6-connectivity. The Euler characteristic is computed by counting the cells
//! of the cubical complex spanned by the object voxels; tunnels follow from
//! `components + cavities - euler`.

use vx_core::{Dims, Grid3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invariants {
    pub components: usize,
    pub cavities: usize,
    pub tunnels: usize,
    pub euler: i64,
}

const N26: [(i32, i32, i32); 26] = {
    let mut out = [(0, 0, 0); 26];
    let mut k = 0;
    let mut dz = -1;
    while dz <= 1 {
        let mut dy = -1;
        while dy <= 1 {
            let mut dx = -1;
            while dx <= 1 {
                if dx != 0 || dy != 0 || dz != 0 {
                    out[k] = (dx, dy, dz);
                    k += 1;
                }
                dx += 1;
            }
            dy += 1;
        }
        dz += 1;
    }
    out
};

const N6: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

fn flood(
    member: &[bool],
    labels: &mut [bool],
    seed: usize,
    dims: &Dims,
    nbhd: &[(i32, i32, i32)],
) {
    let mut stack = vec![seed];
    labels[seed] = true;
    while let Some(i) = stack.pop() {
        for &(dx, dy, dz) in nbhd {
            if let Some(n) = dims.neighbor(i, dx, dy, dz) {
                if member[n] && !labels[n] {
                    labels[n] = true;
                    stack.push(n);
                }
            }
        }
    }
}

/// Number of 26-connected components of the object.
pub fn components26(grid: &Grid3<u8>) -> usize {
    let dims = grid.dims();
    let member: Vec<bool> = grid.data().iter().map(|&v| v != 0).collect();
    let mut visited = vec![false; member.len()];
    let mut count = 0;
    for i in 0..member.len() {
        if member[i] && !visited[i] {
            count += 1;
            flood(&member, &mut visited, i, &dims, &N26);
        }
    }
    count
}

/// Number of cavities: bounded 6-connected components of the background.
/// Background components touching the grid border are not cavities.
pub fn cavities6(grid: &Grid3<u8>) -> usize {
    let dims = grid.dims();
    let member: Vec<bool> = grid.data().iter().map(|&v| v == 0).collect();
    let mut visited = vec![false; member.len()];

    // flush everything reachable from the border first
    for i in 0..member.len() {
        if member[i] && !visited[i] && dims.on_border(i) {
            flood(&member, &mut visited, i, &dims, &N6);
        }
    }

    let mut count = 0;
    for i in 0..member.len() {
        if member[i] && !visited[i] {
            count += 1;
            flood(&member, &mut visited, i, &dims, &N6);
        }
    }
    count
}

/// Euler characteristic of the cubical complex spanned by the object:
/// vertices - edges + faces - cubes.
pub fn euler3(grid: &Grid3<u8>) -> i64 {
    let dims = grid.dims();
    let (w, h, d) = (dims.width, dims.height, dims.depth);
    let vd = Dims::new(w + 1, h + 1, d + 1);

    let mut verts = vec![false; vd.len()];
    // edges along x, y, z; faces normal to z, y, x
    let mut ex = vec![false; vd.len()];
    let mut ey = vec![false; vd.len()];
    let mut ez = vec![false; vd.len()];
    let mut fxy = vec![false; vd.len()];
    let mut fxz = vec![false; vd.len()];
    let mut fyz = vec![false; vd.len()];
    let mut cubes = 0i64;

    for z in 0..d {
        for y in 0..h {
            for x in 0..w {
                if grid.data()[dims.index(x, y, z)] == 0 {
                    continue;
                }
                cubes += 1;
                for c in 0..2 {
                    for b in 0..2 {
                        for a in 0..2 {
                            verts[vd.index(x + a, y + b, z + c)] = true;
                        }
                        ex[vd.index(x, y + b, z + c)] = true;
                        ey[vd.index(x + b, y, z + c)] = true;
                        ez[vd.index(x + b, y + c, z)] = true;
                    }
                    fxy[vd.index(x, y, z + c)] = true;
                    fxz[vd.index(x, y + c, z)] = true;
                    fyz[vd.index(x + c, y, z)] = true;
                }
            }
        }
    }

    let count = |v: &[bool]| v.iter().filter(|&&b| b).count() as i64;
    let v = count(&verts);
    let e = count(&ex) + count(&ey) + count(&ez);
    let f = count(&fxy) + count(&fxz) + count(&fyz);
    v - e + f - cubes
}

/// Connected components, cavities, tunnels and Euler characteristic of the
/// object in `grid`.
pub fn invariants(grid: &Grid3<u8>) -> Invariants {
    let components = components26(grid);
    let cavities = cavities6(grid);
    let euler = euler3(grid);
    let tunnels = (components as i64 + cavities as i64 - euler).max(0) as usize;
    Invariants {
        components,
        cavities,
        tunnels,
        euler,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_box(w: usize, h: usize, d: usize, pad: usize) -> Grid3<u8> {
        let mut g = Grid3::new_fill(w + 2 * pad, h + 2 * pad, d + 2 * pad, 0u8);
        for z in 0..d {
            for y in 0..h {
                for x in 0..w {
                    *g.get_mut(x + pad, y + pad, z + pad).unwrap() = 1;
                }
            }
        }
        g
    }

    #[test]
    fn single_voxel() {
        let g = solid_box(1, 1, 1, 1);
        let inv = invariants(&g);
        assert_eq!(
            inv,
            Invariants {
                components: 1,
                cavities: 0,
                tunnels: 0,
                euler: 1
            }
        );
    }

    #[test]
    fn solid_cube() {
        let g = solid_box(5, 5, 5, 1);
        let inv = invariants(&g);
        assert_eq!(inv.components, 1);
        assert_eq!(inv.cavities, 0);
        assert_eq!(inv.tunnels, 0);
        assert_eq!(inv.euler, 1);
    }

    #[test]
    fn hollow_cube_has_one_cavity() {
        let mut g = solid_box(3, 3, 3, 1);
        *g.get_mut(2, 2, 2).unwrap() = 0;
        let inv = invariants(&g);
        assert_eq!(inv.components, 1);
        assert_eq!(inv.cavities, 1);
        assert_eq!(inv.tunnels, 0);
        assert_eq!(inv.euler, 2);
    }

    #[test]
    fn square_ring_has_one_tunnel() {
        // 3x3 ring of voxels in one slice, hole in the middle
        let mut g = Grid3::new_fill(5, 5, 3, 0u8);
        for y in 1..4 {
            for x in 1..4 {
                if x != 2 || y != 2 {
                    *g.get_mut(x, y, 1).unwrap() = 1;
                }
            }
        }
        let inv = invariants(&g);
        assert_eq!(inv.components, 1);
        assert_eq!(inv.cavities, 0);
        assert_eq!(inv.tunnels, 1);
        assert_eq!(inv.euler, 0);
    }

    #[test]
    fn two_separate_components() {
        let mut g = Grid3::new_fill(7, 5, 5, 0u8);
        *g.get_mut(1, 2, 2).unwrap() = 1;
        *g.get_mut(5, 2, 2).unwrap() = 1;
        let inv = invariants(&g);
        assert_eq!(inv.components, 2);
        assert_eq!(inv.euler, 2);
    }
}
