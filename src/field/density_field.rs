//! The generated density volume.

/// A fully generated 3D density field.
///
/// One `f64` in `[0, 1]` per lattice cell, stored in a single contiguous
/// row-major buffer. The field is only written during generation; once a
/// `DensityField` is returned it exposes shared accessors exclusively, so
/// readers may share it freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityField {
    data: Vec<f64>,
    dim_x: i32,
    dim_y: i32,
    dim_z: i32,
}

impl DensityField {
    /// Allocates a zeroed field. Dimensions must already be validated as
    /// strictly positive by the generator.
    pub(crate) fn zeroed(dim_x: i32, dim_y: i32, dim_z: i32) -> Self {
        let len = dim_x as usize * dim_y as usize * dim_z as usize;
        Self {
            data: vec![0.0; len],
            dim_x,
            dim_y,
            dim_z,
        }
    }

    /// Row-major buffer index of cell (i, j, k).
    #[inline]
    pub(crate) fn index(&self, i: i32, j: i32, k: i32) -> usize {
        ((i * self.dim_y + j) * self.dim_z + k) as usize
    }

    /// Density at cell (i, j, k), where `i < dim_x`, `j < dim_y`, `k < dim_z`.
    ///
    /// # Panics
    /// Panics if any index is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, i: i32, j: i32, k: i32) -> f64 {
        assert!(
            (0..self.dim_x).contains(&i)
                && (0..self.dim_y).contains(&j)
                && (0..self.dim_z).contains(&k),
            "cell ({i}, {j}, {k}) outside {}x{}x{} field",
            self.dim_x,
            self.dim_y,
            self.dim_z,
        );
        self.data[self.index(i, j, k)]
    }

    pub(crate) fn get_mut(&mut self, i: i32, j: i32, k: i32) -> &mut f64 {
        let idx = self.index(i, j, k);
        &mut self.data[idx]
    }

    /// Lattice resolution along x.
    #[inline]
    #[must_use]
    pub const fn dim_x(&self) -> i32 {
        self.dim_x
    }

    /// Lattice resolution along y.
    #[inline]
    #[must_use]
    pub const fn dim_y(&self) -> i32 {
        self.dim_y
    }

    /// Lattice resolution along z.
    #[inline]
    #[must_use]
    pub const fn dim_z(&self) -> i32 {
        self.dim_z
    }

    /// The whole buffer in row-major order (`i` outermost, `k` innermost).
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the field holds no cells. Never the case for a field
    /// returned by the generator, which rejects empty dimensions.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_indexing() {
        let mut field = DensityField::zeroed(2, 3, 4);
        assert_eq!(field.len(), 24);
        assert_eq!(field.index(0, 0, 0), 0);
        assert_eq!(field.index(0, 0, 3), 3);
        assert_eq!(field.index(0, 1, 0), 4);
        assert_eq!(field.index(1, 0, 0), 12);
        assert_eq!(field.index(1, 2, 3), 23);

        *field.get_mut(1, 2, 3) = 0.5;
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(field.get(1, 2, 3), 0.5);
            assert_eq!(field.values()[23], 0.5);
        }
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_get_out_of_bounds_panics() {
        let field = DensityField::zeroed(2, 2, 2);
        field.get(0, 2, 0);
    }
}
