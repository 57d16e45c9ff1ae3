use std::ops::{Index, IndexMut};

use crate::{MathError, Result};

#[derive(Clone, Copy, PartialEq, Eq)]
pub(super) enum LaneKind {
    Row,
    Column,
}

/// A mutable view of a single row or column of a [`Matrix`], borrowing the
/// matrix's storage.
///
/// Returned by [`Matrix::row_mut`] and [`Matrix::column_mut`]. Writes through
/// the view are visible in the matrix as soon as the view is dropped (the
/// borrow checker prevents access to the matrix while the view is alive, so
/// there is no way to observe a stale cell).
///
/// Cells are addressed by their position along the lane, so index 0 is the
/// leftmost cell of a row and the topmost cell of a column.
///
/// [`Matrix`]: super::Matrix
/// [`Matrix::row_mut`]: super::Matrix::row_mut
/// [`Matrix::column_mut`]: super::Matrix::column_mut
pub struct LaneMut<'a, T> {
    cells: &'a mut [T],
    kind: LaneKind,
    start: usize,
    stride: usize,
    len: usize,
}

impl<'a, T> LaneMut<'a, T> {
    pub(super) fn new(
        cells: &'a mut [T],
        kind: LaneKind,
        start: usize,
        stride: usize,
        len: usize,
    ) -> Self {
        debug_assert!(len >= 1 && stride >= 1);
        debug_assert!(start + (len - 1) * stride < cells.len());
        Self {
            cells,
            kind,
            start,
            stride,
            len,
        }
    }

    /// Returns the number of cells in this lane.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; lanes come from matrices, which have no zero-sized
    /// dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(match self.kind {
                LaneKind::Row => MathError::ColumnOutOfRange {
                    column: index,
                    width: self.len,
                },
                LaneKind::Column => MathError::RowOutOfRange {
                    row: index,
                    height: self.len,
                },
            });
        }
        Ok(())
    }

    /// Returns the cell at `index` along the lane.
    pub fn get(&self, index: usize) -> Result<T>
    where
        T: Copy,
    {
        self.check_index(index)?;
        Ok(self.cells[self.start + index * self.stride])
    }

    /// Returns a mutable reference to the cell at `index` along the lane.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.cells[self.start + index * self.stride])
    }

    /// Overwrites the cell at `index` along the lane.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Copies the slice into the lane.
    ///
    /// The slice length must match [`LaneMut::len`]; otherwise the lane is
    /// left untouched and the same shape error the `map_*` callbacks raise
    /// is returned.
    pub fn assign(&mut self, values: &[T]) -> Result<()>
    where
        T: Copy,
    {
        if values.len() != self.len {
            let (expected, got) = match self.kind {
                LaneKind::Row => ((self.len, 1), (values.len(), 1)),
                LaneKind::Column => ((1, self.len), (1, values.len())),
            };
            return Err(MathError::InvalidShape { expected, got });
        }
        for (i, &value) in values.iter().enumerate() {
            self.cells[self.start + i * self.stride] = value;
        }
        Ok(())
    }

    /// Overwrites every cell in the lane with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Copy,
    {
        for i in 0..self.len {
            self.cells[self.start + i * self.stride] = value;
        }
    }

    /// Iterates over the cells of the lane, in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).map(move |i| &self.cells[self.start + i * self.stride])
    }

    /// Iterates over the cells of the lane mutably, in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        let (start, stride) = (self.start, self.stride);
        self.cells
            .iter_mut()
            .skip(start)
            .step_by(stride)
            .take(self.len)
    }
}

impl<'a, T> Index<usize> for LaneMut<'a, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.check_index(index) {
            Ok(()) => &self.cells[self.start + index * self.stride],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, T> IndexMut<usize> for LaneMut<'a, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.check_index(index) {
            Ok(()) => &mut self.cells[self.start + index * self.stride],
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Matrix;

    use super::*;

    #[test]
    fn row_lane() {
        let mut mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let mut lane = mat.row_mut(1).unwrap();
        assert_eq!(lane.len(), 3);
        assert_eq!(lane.get(0), Ok(4));
        assert_eq!(lane.iter().copied().collect::<Vec<_>>(), [4, 5, 6]);

        lane[1] = 50;
        assert_eq!(
            lane.get(3),
            Err(MathError::ColumnOutOfRange {
                column: 3,
                width: 3
            })
        );
        assert_eq!(mat, Matrix::from_rows([[1, 2, 3], [4, 50, 6]]));
    }

    #[test]
    fn column_lane() {
        let mut mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let mut lane = mat.column_mut(2).unwrap();
        assert_eq!(lane.len(), 2);
        assert_eq!(lane.iter().copied().collect::<Vec<_>>(), [3, 6]);

        lane.fill(0);
        assert_eq!(
            lane.get(2),
            Err(MathError::RowOutOfRange { row: 2, height: 2 })
        );
        assert_eq!(mat, Matrix::from_rows([[1, 2, 0], [4, 5, 0]]));
    }

    #[test]
    fn assign() {
        let mut mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        mat.row_mut(0).unwrap().assign(&[7, 8, 9]).unwrap();
        assert_eq!(mat, Matrix::from_rows([[7, 8, 9], [4, 5, 6]]));

        let mut lane = mat.column_mut(1).unwrap();
        assert_eq!(
            lane.assign(&[1, 2, 3]),
            Err(MathError::InvalidShape {
                expected: (1, 2),
                got: (1, 3)
            })
        );
        // A failed assign leaves the lane untouched.
        assert_eq!(lane.get(0), Ok(8));
    }

    #[test]
    fn lane_iter_mut_touches_only_the_lane() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4], [5, 6]]);
        for cell in mat.column_mut(0).unwrap().iter_mut() {
            *cell = -*cell;
        }
        assert_eq!(mat, Matrix::from_rows([[-1, 2], [-3, 4], [-5, 6]]));
    }

    #[test]
    #[should_panic(expected = "column index 5")]
    fn lane_index_panics() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        let lane = mat.row_mut(0).unwrap();
        let _ = lane[5];
    }
}
