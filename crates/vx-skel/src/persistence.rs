//! Birth bookkeeping for persistence-filtered variants and lifetime maps.
//!
//! A voxel is "born" the first step it is classified as an isthmus; its
//! birth date never changes afterwards. Persistence variants inhibit a
//! voxel once it has stayed an isthmus for the requested number of steps;
//! lifetime maps record `death - birth` when the voxel is removed.

pub(crate) struct PersistenceTracker {
    // 0 = not born yet; steps are 1-based
    birth: Vec<u32>,
}

impl PersistenceTracker {
    pub fn new(len: usize) -> Self {
        Self {
            birth: vec![0; len],
        }
    }

    /// Records the first step at which voxel `i` became an isthmus.
    pub fn record_birth(&mut self, i: usize, step: u32) {
        if self.birth[i] == 0 {
            self.birth[i] = step;
        }
    }

    pub fn birth(&self, i: usize) -> Option<u32> {
        (self.birth[i] != 0).then_some(self.birth[i])
    }

    /// True when voxel `i` was born and has been an isthmus for at least
    /// `threshold` steps by time `now`. Callers pass `step` or `step + 1`
    /// as `now`, depending on where their scheme checks expiry.
    pub fn expired(&self, i: usize, now: u32, threshold: u32) -> bool {
        self.birth[i] != 0 && now - self.birth[i] >= threshold
    }
}
