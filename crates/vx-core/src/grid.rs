use crate::error::Error;

/// Extents of a 3D grid together with the derived linear strides.
///
/// Layout is x-fastest: linear index `i = z * slice_stride + y * row_stride + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl Dims {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn len(&self) -> usize {
        self.width * self.height * self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance in elements between adjacent rows (y steps).
    pub fn row_stride(&self) -> usize {
        self.width
    }

    /// Distance in elements between adjacent slices (z steps).
    pub fn slice_stride(&self) -> usize {
        self.width * self.height
    }

    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        z * self.slice_stride() + y * self.row_stride() + x
    }

    pub fn coords(&self, i: usize) -> (usize, usize, usize) {
        let ps = self.slice_stride();
        let z = i / ps;
        let r = i % ps;
        (r % self.width, r / self.width, z)
    }

    pub fn contains(&self, x: isize, y: isize, z: isize) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.width
            && (y as usize) < self.height
            && (z as usize) < self.depth
    }

    /// Linear index of the voxel at offset `(dx, dy, dz)` from `i`, or `None`
    /// if it falls outside the grid.
    pub fn neighbor(&self, i: usize, dx: i32, dy: i32, dz: i32) -> Option<usize> {
        let (x, y, z) = self.coords(i);
        let nx = x as isize + dx as isize;
        let ny = y as isize + dy as isize;
        let nz = z as isize + dz as isize;
        if self.contains(nx, ny, nz) {
            Some(self.index(nx as usize, ny as usize, nz as usize))
        } else {
            None
        }
    }

    /// True if voxel `i` lies on any face of the grid.
    pub fn on_border(&self, i: usize) -> bool {
        let (x, y, z) = self.coords(i);
        x == 0
            || y == 0
            || z == 0
            || x == self.width - 1
            || y == self.height - 1
            || z == self.depth - 1
    }
}

/// Dense 3D grid with owned storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid3<T> {
    dims: Dims,
    data: Vec<T>,
}

impl<T: Copy> Grid3<T> {
    pub fn new_fill(width: usize, height: usize, depth: usize, value: T) -> Self {
        let dims = Dims::new(width, height, depth);
        Self {
            dims,
            data: vec![value; dims.len()],
        }
    }

    pub fn from_vec(
        width: usize,
        height: usize,
        depth: usize,
        data: Vec<T>,
    ) -> Result<Self, Error> {
        let dims = Dims::new(width, height, depth);
        if data.len() != dims.len() {
            return Err(Error::SizeMismatch {
                expected: dims.len(),
                actual: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn depth(&self) -> usize {
        self.dims.depth
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        if self.dims.contains(x as isize, y as isize, z as isize) {
            Some(&self.data[self.dims.index(x, y, z)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: usize, y: usize, z: usize) -> Option<&mut T> {
        if self.dims.contains(x as isize, y as isize, z as isize) {
            let i = self.dims.index(x, y, z);
            Some(&mut self.data[i])
        } else {
            None
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// True if `other` has the same extents.
    pub fn same_extents<U: Copy>(&self, other: &Grid3<U>) -> bool {
        self.dims == other.dims
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_coords_round_trip() {
        let d = Dims::new(5, 4, 3);
        for z in 0..3 {
            for y in 0..4 {
                for x in 0..5 {
                    let i = d.index(x, y, z);
                    assert_eq!(d.coords(i), (x, y, z));
                }
            }
        }
    }

    #[test]
    fn from_vec_checks_length() {
        let g = Grid3::from_vec(2, 2, 2, vec![0u8; 8]).unwrap();
        assert_eq!(g.len(), 8);

        let err = Grid3::from_vec(2, 2, 2, vec![0u8; 7]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn neighbor_respects_bounds() {
        let d = Dims::new(3, 3, 3);
        let c = d.index(1, 1, 1);
        assert_eq!(d.neighbor(c, 1, 0, 0), Some(d.index(2, 1, 1)));
        assert_eq!(d.neighbor(c, -1, -1, -1), Some(d.index(0, 0, 0)));

        let corner = d.index(0, 0, 0);
        assert_eq!(d.neighbor(corner, -1, 0, 0), None);
        assert_eq!(d.neighbor(corner, 0, 0, -1), None);
    }

    #[test]
    fn border_detection() {
        let d = Dims::new(4, 4, 4);
        assert!(d.on_border(d.index(0, 2, 2)));
        assert!(d.on_border(d.index(2, 3, 2)));
        assert!(!d.on_border(d.index(1, 1, 1)));
        assert!(!d.on_border(d.index(2, 2, 2)));
    }

    #[test]
    fn get_and_fill() {
        let mut g = Grid3::new_fill(3, 2, 2, 0u8);
        *g.get_mut(2, 1, 1).unwrap() = 7;
        assert_eq!(g.get(2, 1, 1), Some(&7));
        assert_eq!(g.get(3, 0, 0), None);
        g.fill(1);
        assert!(g.data().iter().all(|&v| v == 1));
    }
}
