//! 2D topological numbers on the 8-cell ring around a pixel.
//!
//! The ring is packed into a `u8` mask, bit `k` set when ring cell `k` is
//! object. Cells are ordered counterclockwise starting east:
//! E, NE, N, NW, W, SW, S, SE. Even bits are the 4-neighbors of the center.

const RING: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn adjacent8(a: usize, b: usize) -> bool {
    let (ax, ay) = RING[a];
    let (bx, by) = RING[b];
    a != b && (ax - bx).abs() <= 1 && (ay - by).abs() <= 1
}

fn adjacent4(a: usize, b: usize) -> bool {
    let (ax, ay) = RING[a];
    let (bx, by) = RING[b];
    (ax - bx).abs() + (ay - by).abs() == 1
}

fn flood(mask: u8, seed: usize, visited: &mut [bool; 8], four: bool) {
    let mut stack = [0usize; 8];
    let mut top = 0;
    visited[seed] = true;
    stack[top] = seed;
    top += 1;
    while top > 0 {
        top -= 1;
        let c = stack[top];
        for n in 0..8 {
            if visited[n] || mask & (1 << n) == 0 {
                continue;
            }
            let adj = if four {
                adjacent4(c, n)
            } else {
                adjacent8(c, n)
            };
            if adj {
                visited[n] = true;
                stack[top] = n;
                top += 1;
            }
        }
    }
}

/// Number of 8-connected components of object cells in the ring.
pub fn t8(mask: u8) -> u32 {
    let mut visited = [false; 8];
    let mut count = 0;
    for k in 0..8 {
        if mask & (1 << k) != 0 && !visited[k] {
            count += 1;
            flood(mask, k, &mut visited, false);
        }
    }
    count
}

/// Number of 4-connected components of background cells that are 4-adjacent
/// to the center, i.e. components containing at least one of E, N, W, S.
pub fn t4b(mask: u8) -> u32 {
    let bg = !mask;
    let mut visited = [false; 8];
    let mut count = 0;
    for k in [0, 2, 4, 6] {
        if bg & (1 << k) != 0 && !visited[k] {
            count += 1;
            flood(bg, k, &mut visited, true);
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_full_ring() {
        assert_eq!(t8(0x00), 0);
        assert_eq!(t4b(0x00), 1);
        assert_eq!(t8(0xff), 1);
        assert_eq!(t4b(0xff), 0);
    }

    #[test]
    fn single_edge_cell_is_simple_config() {
        // only E set: one object component, one background component
        assert_eq!(t8(0b0000_0001), 1);
        assert_eq!(t4b(0b0000_0001), 1);
    }

    #[test]
    fn opposite_edges_disconnect() {
        // E and W set: two object components, two background components
        let m = 0b0001_0001;
        assert_eq!(t8(m), 2);
        assert_eq!(t4b(m), 2);
    }

    #[test]
    fn corner_bridges_eight_connectivity() {
        // E and N touch diagonally even with NE empty
        let m = 0b0000_0101;
        assert_eq!(t8(m), 1);
    }

    #[test]
    fn background_corner_not_counted() {
        // everything set except NW: lone background corner is not 4-adjacent
        // to the center
        let m = !(1u8 << 3);
        assert_eq!(t4b(m), 0);
        assert_eq!(t8(m), 1);
    }

    #[test]
    fn half_ring() {
        // E, NE, N object; rest background
        let m = 0b0000_0111;
        assert_eq!(t8(m), 1);
        assert_eq!(t4b(m), 1);
    }
}
