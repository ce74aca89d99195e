//! Shared reduction passes.
//!
//! A `Reduction` owns a scratch state array (one byte per voxel, object bit
//! plus transient flags) built from the caller's grid. Drivers wire the
//! passes below in the order of their thinning scheme; each iteration ends
//! in a commit that removes unretained simple voxels and resets the
//! survivors to the bare object bit.
//!
//! Scan order is fixed: ascending linear index. Passes that read flags they
//! are writing (the matcher passes, the simple marking) rely on flags never
//! changing a voxel's object/background status mid-scan.

use crate::clique;
use crate::neighborhood;
use crate::state::{self, CRUCIAL, CURVE, INHIBIT, INTERIOR, OBJECT, SELECTED, SIMPLE, SURFACE};
use vx_core::{Dims, Grid3};
use vx_topo::{is_simple26, top26};

pub(crate) struct Reduction {
    dims: Dims,
    // neighbor offsets in canonical order, computed once per run
    offsets: [isize; 26],
    state: Vec<u8>,
}

impl Reduction {
    pub fn from_grid(grid: &Grid3<u8>) -> Self {
        let state = grid
            .data()
            .iter()
            .map(|&v| if v != 0 { OBJECT } else { 0 })
            .collect();
        let dims = grid.dims();
        Self {
            dims,
            offsets: neighborhood::linear_offsets(&dims),
            state,
        }
    }

    /// Canonical neighborhood buffer of voxel `i`.
    pub fn neighborhood(&self, i: usize) -> [u8; 27] {
        neighborhood::extract_with(&self.state, i, &self.dims, &self.offsets)
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn state(&self) -> &[u8] {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut [u8] {
        &mut self.state
    }

    /// Writes the surviving object back into `grid`, normalized to 255.
    pub fn write_back(&self, grid: &mut Grid3<u8>) {
        for (dst, &src) in grid.data_mut().iter_mut().zip(&self.state) {
            *dst = if src != 0 { 255 } else { 0 };
        }
    }

    /// Marks simple object voxels, skipping inhibited ones when a map is
    /// given.
    pub fn mark_simple(&mut self, inhibit: Option<&[u8]>) {
        for i in 0..self.state.len() {
            if !state::is_object(self.state[i]) {
                continue;
            }
            if let Some(inh) = inhibit {
                if inh[i] != 0 {
                    continue;
                }
            }
            if is_simple26(&self.state, i, &self.dims) {
                state::set(&mut self.state[i], SIMPLE);
            }
        }
    }

    /// Directional variant: additionally requires the voxel to be exposed
    /// in direction `dir`.
    pub fn mark_simple_directional(&mut self, inhibit: &[u8], dir: usize) {
        for i in 0..self.state.len() {
            if !state::is_object(self.state[i]) || inhibit[i] != 0 {
                continue;
            }
            if is_simple26(&self.state, i, &self.dims)
                && crate::scan::exposed(&self.state, i, &self.dims, dir)
            {
                state::set(&mut self.state[i], SIMPLE);
            }
        }
    }

    /// Runs a clique matcher over every simple voxel, writing matched
    /// buffers back.
    pub fn matcher_pass(&mut self, matcher: fn(&mut [u8; 27]) -> bool) {
        for i in 0..self.state.len() {
            if state::is_simple(self.state[i]) {
                let mut v = neighborhood::extract_with(&self.state, i, &self.dims, &self.offsets);
                if matcher(&mut v) {
                    neighborhood::insert_with(&v, &mut self.state, i, &self.dims, &self.offsets);
                }
            }
        }
    }

    /// Promotes SELECTED representatives (asymmetric matchers) to CRUCIAL.
    pub fn promote_selected(&mut self) {
        for s in &mut self.state {
            if state::is_selected(*s) {
                state::unset(s, SELECTED);
                state::set(s, CRUCIAL);
            }
        }
    }

    /// Tags non-simple object voxels whose connectivity numbers expose a
    /// 1D (CURVE) or 2D (SURFACE) isthmus. `strict` asks for the exact
    /// junction counts, otherwise any count above one qualifies.
    pub fn tag_isthmuses(&mut self, curve: bool, surface: bool, strict: bool) {
        for i in 0..self.state.len() {
            let s = self.state[i];
            if !state::is_object(s) || state::is_simple(s) {
                continue;
            }
            let (top, topb) = top26(&self.state, i, &self.dims);
            let is_curve = if strict {
                top == 2 && topb == 1
            } else {
                top > 1
            };
            let is_surface = if strict {
                topb == 2 && top == 1
            } else {
                topb > 1
            };
            if curve && is_curve {
                state::set(&mut self.state[i], CURVE);
            }
            if surface && is_surface {
                state::set(&mut self.state[i], SURFACE);
            }
        }
    }

    /// Clears crucial marks left by the tagging matchers, folds CURVE and/or
    /// SURFACE tags into the inhibition map and strips SIMPLE from every
    /// inhibited voxel.
    pub fn fold_tags_into(&mut self, inhibit: &mut [u8], curve: bool, surface: bool) {
        for (s, inh) in self.state.iter_mut().zip(inhibit.iter_mut()) {
            state::unset(s, CRUCIAL);
            if (curve && state::is_curve(*s)) || (surface && state::is_surface(*s)) {
                *inh = INHIBIT;
            }
            if *inh != 0 {
                state::unset(s, SIMPLE);
            }
        }
    }

    /// Directional variants skip the tagging matchers: non-simple voxels
    /// with split connectivity go straight into the inhibition map.
    pub fn fold_isthmuses_directional(&mut self, inhibit: &mut [u8], curve: bool, surface: bool) {
        for i in 0..self.state.len() {
            let s = self.state[i];
            if !state::is_object(s) || state::is_simple(s) {
                continue;
            }
            let (top, topb) = top26(&self.state, i, &self.dims);
            if (curve && top > 1) || (surface && topb > 1) {
                inhibit[i] = INHIBIT;
                state::unset(&mut self.state[i], SIMPLE);
            }
        }
    }

    /// Flags non-simple object voxels with no background face contact.
    pub fn mark_interior(&mut self) {
        for i in 0..self.state.len() {
            let s = self.state[i];
            if !state::is_object(s) || state::is_simple(s) {
                continue;
            }
            let (_, topb) = top26(&self.state, i, &self.dims);
            if topb == 0 {
                state::set(&mut self.state[i], INTERIOR);
            }
        }
    }

    /// Strips SIMPLE from residual voxels: object voxels with no 6-adjacent
    /// INTERIOR neighbor.
    pub fn exclude_residual6(&mut self) {
        for i in 0..self.state.len() {
            if !state::is_object(self.state[i]) {
                continue;
            }
            let near_interior = crate::scan::DIRECTIONS.iter().any(|&(dx, dy, dz)| {
                self.dims
                    .neighbor(i, dx, dy, dz)
                    .is_some_and(|n| state::is_interior(self.state[n]))
            });
            if !near_interior {
                state::unset(&mut self.state[i], SIMPLE);
            }
        }
    }

    /// Removes every unretained simple voxel and resets survivors to the
    /// bare object bit. Returns true when at least one voxel was removed.
    pub fn commit(&mut self) -> bool {
        self.commit_with(|_| {})
    }

    /// Like [`commit`](Self::commit), reporting each removed index.
    pub fn commit_with(&mut self, mut on_remove: impl FnMut(usize)) -> bool {
        let mut removed = false;
        for i in 0..self.state.len() {
            if state::is_deletable(self.state[i]) {
                self.state[i] = 0;
                removed = true;
                on_remove(i);
            } else if self.state[i] != 0 {
                self.state[i] = OBJECT;
            }
        }
        removed
    }

    /// Commit of the ultimate symmetric scheme: the retained set is first
    /// dilated by one 26-step, and object voxels outside the dilation (whole
    /// components about to vanish) are retained as well.
    pub fn commit_keep_isolated(&mut self) -> bool {
        let n = self.state.len();
        let mut keep = vec![false; n];
        for (i, k) in keep.iter_mut().enumerate() {
            let s = self.state[i];
            *k = s != 0 && (!state::is_simple(s) || state::is_crucial(s));
        }
        let mut near_kept = vec![false; n];
        for i in 0..n {
            near_kept[i] = neighborhood::NEIGHBOR_OFFSETS.iter().any(|&(dx, dy, dz)| {
                self.dims.neighbor(i, dx, dy, dz).is_some_and(|j| keep[j])
            });
        }
        let mut removed = false;
        for i in 0..n {
            if self.state[i] == 0 {
                continue;
            }
            if keep[i] || !near_kept[i] {
                self.state[i] = OBJECT;
            } else {
                self.state[i] = 0;
                removed = true;
            }
        }
        removed
    }

    /// The three symmetric matcher passes in rank order.
    pub fn crucial_passes(&mut self) {
        self.matcher_pass(clique::face2_views);
        self.matcher_pass(clique::edge1_views);
        self.matcher_pass(clique::vertex0);
    }

    /// The three asymmetric matcher passes, each followed by the promotion
    /// of its selected representatives.
    pub fn asym_crucial_passes(&mut self) {
        self.matcher_pass(clique::asym_face2_views);
        self.promote_selected();
        self.matcher_pass(clique::asym_edge1_views);
        self.promote_selected();
        self.matcher_pass(clique::asym_vertex0);
        self.promote_selected();
    }
}
