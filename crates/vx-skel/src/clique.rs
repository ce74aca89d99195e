//! Crucial-clique matchers over the 27-cell neighborhood buffer.
//!
//! A clique matcher looks for a critical clique in canonical position: the
//! 2-face matcher at the center's face pair along z, the 1-face matcher at
//! two edge placements, the 0-face matcher at the four corner cubes. The
//! 3-view wrappers run a matcher under the identity, the XZ swap and the
//! YZ swap, which covers all axis orientations.
//!
//! Symmetric matchers mark every clique member CRUCIAL (the whole clique is
//! kept); asymmetric matchers mark a single representative SELECTED, which
//! the engine later promotes to CRUCIAL. Tagging matchers mark CURVE or
//! SURFACE instead, feeding the isthmus-based variants.

use crate::neighborhood::{swap_xz, swap_yz};
use crate::state::{self, CRUCIAL, CURVE, SELECTED, SURFACE};
use vx_topo::{t4b, t8};

type Buf = [u8; 27];

/// Flattens the two rings around the center's z face pair: bit `k` is set
/// when ring cell `k` is object in either slice.
fn ring_mask(v: &Buf) -> u8 {
    let mut t = 0u8;
    for k in 0..8 {
        if v[k] != 0 || v[k + 9] != 0 {
            t |= 1 << k;
        }
    }
    t
}

/// Symmetric 2-face matcher: the center and its lower face neighbor form a
/// crucial 2-clique unless the flattened ring is 2D-simple.
pub(crate) fn face2(v: &mut Buf) -> bool {
    if !state::is_simple(v[8]) || !state::is_simple(v[26]) {
        return false;
    }
    let t = ring_mask(v);
    if t4b(t) == 1 && t8(t) == 1 {
        return false;
    }
    state::set(&mut v[8], CRUCIAL);
    state::set(&mut v[26], CRUCIAL);
    true
}

/// 2-face matcher that additionally tags the pair as a 2D isthmus
/// (SURFACE when the ring surrounds it, CURVE when it separates exactly
/// two parts).
pub(crate) fn face2_tagging(v: &mut Buf) -> bool {
    if !state::is_simple(v[8]) || !state::is_simple(v[26]) {
        return false;
    }
    let t = ring_mask(v);
    if t4b(t) == 1 && t8(t) == 1 {
        return false;
    }
    state::set(&mut v[8], CRUCIAL);
    state::set(&mut v[26], CRUCIAL);
    if t4b(t) == 0 {
        state::set(&mut v[8], SURFACE);
        state::set(&mut v[26], SURFACE);
    } else if t8(t) == 2 {
        state::set(&mut v[8], CURVE);
        state::set(&mut v[26], CURVE);
    }
    true
}

/// Asymmetric 2-face matcher: same test, but only the lower neighbor is
/// selected.
pub(crate) fn asym_face2(v: &mut Buf) -> bool {
    if !state::is_simple(v[8]) || !state::is_simple(v[26]) {
        return false;
    }
    let t = ring_mask(v);
    if t4b(t) == 1 && t8(t) == 1 {
        return false;
    }
    state::set(&mut v[8], SELECTED);
    true
}

// One edge placement of the 1-face matcher:
//
//   A A  P1 P2  B B
//   A A  P3 P4  B B
//
// `pairs` are the diagonals (P1, P4) and (P2, P3); `participants` the Pi in
// marking order; `side_a`/`side_b` the flanking 2x2 columns.
struct EdgePlacement {
    pairs: [(usize, usize); 2],
    participants: [usize; 4],
    side_a: [usize; 4],
    side_b: [usize; 4],
}

const EDGE_PLACEMENTS: [EdgePlacement; 2] = [
    EdgePlacement {
        pairs: [(2, 4), (3, 26)],
        participants: [2, 3, 4, 26],
        side_a: [12, 11, 13, 8],
        side_b: [21, 20, 22, 17],
    },
    EdgePlacement {
        pairs: [(2, 0), (1, 26)],
        participants: [2, 1, 0, 26],
        side_a: [10, 11, 9, 8],
        side_b: [19, 20, 18, 17],
    },
];

fn edge1_applies(v: &Buf, pl: &EdgePlacement, allow_empty_sides: bool) -> bool {
    let hit = pl
        .pairs
        .iter()
        .any(|&(a, b)| v[a] != 0 && v[b] != 0);
    if !hit {
        return false;
    }
    let blocked = pl.participants.iter().any(|&k| {
        state::is_object(v[k]) && (!state::is_simple(v[k]) || state::is_crucial(v[k]))
    });
    if blocked {
        return false;
    }
    let any_a = pl.side_a.iter().any(|&k| v[k] != 0);
    let any_b = pl.side_b.iter().any(|&k| v[k] != 0);
    if allow_empty_sides {
        // both sides empty is fine; a populated side must face another
        !((any_a || any_b) && (!any_a || !any_b))
    } else {
        any_a && any_b
    }
}

/// Symmetric 1-face matcher: both placements are tried, object participants
/// of a matching placement become CRUCIAL.
pub(crate) fn edge1(v: &mut Buf) -> bool {
    let mut ret = false;
    for pl in &EDGE_PLACEMENTS {
        if edge1_applies(v, pl, true) {
            for &k in &pl.participants {
                if v[k] != 0 {
                    state::set(&mut v[k], CRUCIAL);
                }
            }
            ret = true;
        }
    }
    ret
}

/// 1-face matcher for the curve condition: both flanking sides must be
/// populated, matched participants are tagged CURVE.
pub(crate) fn edge1_tagging(v: &mut Buf) -> bool {
    let mut ret = false;
    for pl in &EDGE_PLACEMENTS {
        if edge1_applies(v, pl, false) {
            for &k in &pl.participants {
                if v[k] != 0 {
                    state::set(&mut v[k], CURVE);
                }
            }
            ret = true;
        }
    }
    ret
}

/// Asymmetric 1-face matcher: the first object participant of a matching
/// placement is selected.
pub(crate) fn asym_edge1(v: &mut Buf) -> bool {
    let mut ret = false;
    for pl in &EDGE_PLACEMENTS {
        if edge1_applies(v, pl, true) {
            for &k in &pl.participants {
                if v[k] != 0 {
                    state::set(&mut v[k], SELECTED);
                    break;
                }
            }
            ret = true;
        }
    }
    ret
}

// Corner cube of the 0-face matcher: the diagonal neighbor paired with the
// center, plus the six other cells of their 2x2x2 cube.
const VERTEX_CUBES: [(usize, [usize; 6]); 4] = [
    (12, [11, 13, 8, 3, 2, 4]),
    (10, [11, 8, 9, 1, 2, 0]),
    (14, [13, 15, 8, 6, 5, 4]),
    (21, [17, 20, 22, 3, 2, 4]),
];

fn vertex0_applies(v: &Buf) -> bool {
    if v[26] == 0 || !state::is_simple(v[26]) || state::is_crucial(v[26]) {
        return false;
    }
    if VERTEX_CUBES.iter().all(|&(corner, _)| v[corner] == 0) {
        return false;
    }
    for &(corner, rest) in &VERTEX_CUBES {
        if v[corner] == 0 {
            continue;
        }
        if !state::is_simple(v[corner]) || state::is_crucial(v[corner]) {
            return false;
        }
        let blocked = rest.iter().any(|&k| {
            v[k] != 0 && (!state::is_simple(v[k]) || state::is_crucial(v[k]))
        });
        if blocked {
            return false;
        }
    }
    true
}

/// Symmetric 0-face matcher: the center shares a 2x2x2 cube with a diagonal
/// neighbor and every object cell of each such cube is an unretained simple
/// point; the whole configuration becomes CRUCIAL.
///
/// Only applied in the identity view; the four corner cubes already cover
/// all orientations of the 0-clique.
pub(crate) fn vertex0(v: &mut Buf) -> bool {
    if !vertex0_applies(v) {
        return false;
    }
    for &(corner, rest) in &VERTEX_CUBES {
        if v[corner] == 0 {
            continue;
        }
        state::set(&mut v[corner], CRUCIAL);
        for &k in &rest {
            if v[k] != 0 {
                state::set(&mut v[k], CRUCIAL);
            }
        }
    }
    state::set(&mut v[26], CRUCIAL);
    true
}

/// Asymmetric 0-face matcher: same test, only the center is selected.
pub(crate) fn asym_vertex0(v: &mut Buf) -> bool {
    if !vertex0_applies(v) {
        return false;
    }
    state::set(&mut v[26], SELECTED);
    true
}

fn three_views(v: &mut Buf, matcher: fn(&mut Buf) -> bool) -> bool {
    let mut ret = matcher(v);
    swap_xz(v);
    if matcher(v) {
        ret = true;
    }
    swap_xz(v);
    swap_yz(v);
    if matcher(v) {
        ret = true;
    }
    swap_yz(v);
    ret
}

pub(crate) fn face2_views(v: &mut Buf) -> bool {
    three_views(v, face2)
}

pub(crate) fn face2_tagging_views(v: &mut Buf) -> bool {
    three_views(v, face2_tagging)
}

pub(crate) fn asym_face2_views(v: &mut Buf) -> bool {
    three_views(v, asym_face2)
}

pub(crate) fn edge1_views(v: &mut Buf) -> bool {
    three_views(v, edge1)
}

pub(crate) fn edge1_tagging_views(v: &mut Buf) -> bool {
    three_views(v, edge1_tagging)
}

pub(crate) fn asym_edge1_views(v: &mut Buf) -> bool {
    three_views(v, asym_edge1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{OBJECT, SIMPLE};

    const OS: u8 = OBJECT | SIMPLE;

    #[test]
    fn face2_rejects_two_d_simple_ring() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[8] = OS;
        v[0] = OBJECT; // lone east neighbor: ring is 2D-simple
        assert!(!face2(&mut v));
        assert!(!state::is_crucial(v[8]));
    }

    #[test]
    fn face2_marks_pair_on_split_ring() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[8] = OS;
        v[0] = OBJECT; // east
        v[4] = OBJECT; // west: t8 = 2
        assert!(face2(&mut v));
        assert!(state::is_crucial(v[8]));
        assert!(state::is_crucial(v[26]));
    }

    #[test]
    fn face2_tagging_classifies_curve_and_surface() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[8] = OS;
        v[0] = OBJECT;
        v[4] = OBJECT;
        assert!(face2_tagging(&mut v));
        assert!(state::is_curve(v[8]) && state::is_curve(v[26]));

        let mut v = [0u8; 27];
        v[26] = OS;
        v[8] = OS;
        // full ring: no background 4-adjacent to the column
        for k in 0..8 {
            v[k] = OBJECT;
        }
        assert!(face2_tagging(&mut v));
        assert!(state::is_surface(v[8]) && state::is_surface(v[26]));
    }

    #[test]
    fn asym_face2_selects_one_point() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[8] = OS;
        v[0] = OBJECT;
        v[4] = OBJECT;
        assert!(asym_face2(&mut v));
        assert!(state::is_selected(v[8]));
        assert!(!state::is_selected(v[26]));
    }

    #[test]
    fn edge1_requires_a_diagonal_pair() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[2] = OS;
        v[4] = OS; // P1 and P4 of the first placement
        assert!(edge1(&mut v));
        assert!(state::is_crucial(v[2]));
        assert!(state::is_crucial(v[4]));
        assert!(state::is_crucial(v[26]));
    }

    #[test]
    fn edge1_rejects_single_sided_flank() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[2] = OS;
        v[4] = OS;
        v[8] = OBJECT; // side A populated, side B empty
        assert!(!edge1(&mut v));
    }

    #[test]
    fn edge1_accepts_balanced_flanks() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[2] = OS;
        v[4] = OS;
        v[8] = OBJECT | SIMPLE; // side A
        v[17] = OBJECT | SIMPLE; // side B
        assert!(edge1(&mut v));
    }

    #[test]
    fn edge1_rejects_nonsimple_participant() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[2] = OBJECT; // object but not simple
        v[4] = OS;
        assert!(!edge1(&mut v));
    }

    #[test]
    fn edge1_tagging_needs_both_sides() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[2] = OS;
        v[4] = OS;
        assert!(!edge1_tagging(&mut v)); // both sides empty

        v[8] = OBJECT | SIMPLE;
        v[17] = OBJECT | SIMPLE;
        assert!(edge1_tagging(&mut v));
        assert!(state::is_curve(v[2]));
        assert!(state::is_curve(v[26]));
    }

    #[test]
    fn asym_edge1_selects_first_participant() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[3] = OS; // P2/P3 diagonal of the first placement
        assert!(asym_edge1(&mut v));
        assert!(state::is_selected(v[3]));
        assert!(!state::is_selected(v[26]));
    }

    #[test]
    fn vertex0_marks_corner_cube() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[12] = OS; // lower diagonal corner
        assert!(vertex0(&mut v));
        assert!(state::is_crucial(v[26]));
        assert!(state::is_crucial(v[12]));
    }

    #[test]
    fn vertex0_rejects_retained_cube_member() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[12] = OS;
        v[11] = OBJECT | SIMPLE | CRUCIAL;
        assert!(!vertex0(&mut v));
    }

    #[test]
    fn asym_vertex0_selects_center_only() {
        let mut v = [0u8; 27];
        v[26] = OS;
        v[10] = OS;
        assert!(asym_vertex0(&mut v));
        assert!(state::is_selected(v[26]));
        assert!(!state::is_selected(v[10]));
    }

    #[test]
    fn views_cover_the_horizontal_pair() {
        // pair along y instead of z: only found through the YZ-swapped view
        let mut v = [0u8; 27];
        v[26] = OS;
        v[6] = OS; // south face neighbor
        v[0] = OBJECT;
        v[4] = OBJECT; // east and west: the swapped ring splits
        assert!(!face2(&mut v));
        assert!(face2_views(&mut v));
        assert!(state::is_crucial(v[6]));
        assert!(state::is_crucial(v[26]));
    }
}
