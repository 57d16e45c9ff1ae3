use crate::{vec2, vec3, vec4, MathError, Number, Result, Trig, Vec2, Vec3, Vec4};

mod ops;
mod view;

pub use view::LaneMut;
use view::LaneKind;

/// A dynamically-sized matrix with `width` columns and `height` rows, stored
/// row-major in a single contiguous buffer.
///
/// Both dimensions are always at least 1; constructors reject zero-sized
/// shapes with [`MathError::InvalidDimension`]. The element type defaults to
/// `f64`.
///
/// # Construction
///
/// - [`Matrix::new`] and [`Matrix::square`] allocate a zero-filled matrix.
/// - [`Matrix::from_rows`] builds a matrix from nested array literals.
/// - [`Matrix::from_fn`] invokes a closure with the position of each cell.
/// - [`Matrix::identity`] and the transform factories ([`Matrix::translate2`],
///   [`Matrix::scale3`], [`Matrix::rotate2`], ...) produce the common
///   graphics matrices.
///
/// # Cell access
///
/// [`Matrix::get`], [`Matrix::get_mut`] and [`Matrix::set`] are
/// bounds-checked and return [`Result`]s. The [`Index`] and [`IndexMut`]
/// impls take a `(column, row)` tuple, the same `(x, y)` order the named
/// accessors use, and panic when out of bounds, just like slice indexing.
///
/// ```
/// # use zmath::*;
/// let mut mat = Matrix::from_rows([
///     [1, 2],
///     [3, 4],
/// ]);
/// mat[(1, 0)] = 20;
/// assert_eq!(mat.get(1, 0), Ok(20));
/// assert_eq!(mat[(0, 1)], 3);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone)]
pub struct Matrix<T = f64> {
    width: usize,
    height: usize,
    cells: Box<[T]>,
}

impl<T> Matrix<T> {
    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Creates a matrix from nested array literals, one inner array per row.
    ///
    /// # Panics
    ///
    /// Panics if `W` or `H` is zero. This constructor is meant for literal
    /// shapes, which makes the zero-size case a programming error rather
    /// than a data error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat.width(), 3);
    /// assert_eq!(mat.height(), 2);
    /// assert_eq!(mat[(2, 1)], 6);
    /// ```
    pub fn from_rows<const W: usize, const H: usize>(rows: [[T; W]; H]) -> Self {
        assert!(
            W >= 1 && H >= 1,
            "matrix dimensions must be at least 1x1, got {W}x{H}"
        );
        Self {
            width: W,
            height: H,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<T>) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells: cells.into_boxed_slice(),
        }
    }

    fn check_column(&self, column: usize) -> Result<()> {
        if column >= self.width {
            return Err(MathError::ColumnOutOfRange {
                column,
                width: self.width,
            });
        }
        Ok(())
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.height {
            return Err(MathError::RowOutOfRange {
                row,
                height: self.height,
            });
        }
        Ok(())
    }

    fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

impl<T: Number> Matrix<T> {
    /// Allocates a zero-filled matrix with the given dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zmath::*;
    /// let mat = Matrix::<f64>::new(3, 2)?;
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0.0, 0.0, 0.0],
    ///     [0.0, 0.0, 0.0],
    /// ]));
    ///
    /// assert!(Matrix::<f64>::new(0, 5).is_err());
    /// # Ok::<(), MathError>(())
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MathError::InvalidDimension { width, height });
        }
        Ok(Self::zeroed(width, height))
    }

    /// Allocates a zero-filled square matrix.
    pub fn square(size: usize) -> Result<Self> {
        Self::new(size, size)
    }

    /// Creates a matrix by invoking a closure with the `(column, row)`
    /// position of each cell.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zmath::*;
    /// let mat = Matrix::from_fn(3, 2, |col, row| (row * 10 + col) as i64)?;
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// # Ok::<(), MathError>(())
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        if width == 0 || height == 0 {
            return Err(MathError::InvalidDimension { width, height });
        }
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(col, row));
            }
        }
        Ok(Self::from_parts(width, height, cells))
    }

    fn zeroed(width: usize, height: usize) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        Self {
            width,
            height,
            cells: vec![T::ZERO; width * height].into_boxed_slice(),
        }
    }

    fn eye(size: usize) -> Self {
        let mut ret = Self::zeroed(size, size);
        for i in 0..size {
            ret.cells[i * size + i] = T::ONE;
        }
        ret
    }

    fn diagonal(scalars: &[T]) -> Self {
        let n = scalars.len();
        let mut ret = Self::zeroed(n, n);
        for (i, &s) in scalars.iter().enumerate() {
            ret.cells[i * n + i] = s;
        }
        ret
    }

    /// A zero-filled matrix. Alias for [`Matrix::new`].
    pub fn zero(width: usize, height: usize) -> Result<Self> {
        Self::new(width, height)
    }

    /// A zero-filled square matrix.
    pub fn zero_square(size: usize) -> Result<Self> {
        Self::new(size, size)
    }

    /// The square identity matrix: 1 on the main diagonal, 0 elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zmath::*;
    /// assert_eq!(Matrix::identity(2)?, Matrix::from_rows([
    ///     [1, 0],
    ///     [0, 1],
    /// ]));
    /// # Ok::<(), MathError>(())
    /// ```
    pub fn identity(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(MathError::InvalidDimension {
                width: size,
                height: size,
            });
        }
        Ok(Self::eye(size))
    }

    /// A 3x3 homogeneous translation matrix offsetting by `(ox, oy)`.
    ///
    /// The offsets sit in the rightmost column, so multiplying with a
    /// homogeneous column vector (`to_column3(1)`) translates the point.
    pub fn translate2(ox: T, oy: T) -> Self {
        let mut ret = Self::eye(3);
        ret.cells[2] = ox; // (2, 0)
        ret.cells[5] = oy; // (2, 1)
        ret
    }

    /// A 4x4 homogeneous translation matrix offsetting by `(ox, oy, oz)`.
    pub fn translate3(ox: T, oy: T, oz: T) -> Self {
        let mut ret = Self::eye(4);
        ret.cells[3] = ox; // (3, 0)
        ret.cells[7] = oy; // (3, 1)
        ret.cells[11] = oz; // (3, 2)
        ret
    }

    /// A 2x2 scaling matrix with per-axis factors.
    pub fn scale2(sx: T, sy: T) -> Self {
        Self::diagonal(&[sx, sy])
    }

    /// A 2x2 uniform scaling matrix.
    pub fn scale2_uniform(scale: T) -> Self {
        Self::scale2(scale, scale)
    }

    /// A 3x3 scaling matrix with per-axis factors.
    pub fn scale3(sx: T, sy: T, sz: T) -> Self {
        Self::diagonal(&[sx, sy, sz])
    }

    /// A 3x3 uniform scaling matrix.
    pub fn scale3_uniform(scale: T) -> Self {
        Self::scale3(scale, scale, scale)
    }

    /// A 4x4 scaling matrix with per-axis factors.
    pub fn scale4(sx: T, sy: T, sz: T, sw: T) -> Self {
        Self::diagonal(&[sx, sy, sz, sw])
    }

    /// A 4x4 uniform scaling matrix.
    pub fn scale4_uniform(scale: T) -> Self {
        Self::scale4(scale, scale, scale, scale)
    }

    /// An NxN scaling matrix with the given diagonal, for arbitrary N.
    ///
    /// Fails with [`MathError::InvalidDimension`] when `scalars` is empty.
    pub fn scale_diagonal(scalars: &[T]) -> Result<Self> {
        if scalars.is_empty() {
            return Err(MathError::InvalidDimension {
                width: 0,
                height: 0,
            });
        }
        Ok(Self::diagonal(scalars))
    }
}

impl<T: Number + Trig> Matrix<T> {
    /// A 2x2 counter-clockwise rotation matrix. `angle` is in radians.
    pub fn rotate2(angle: T) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        Self::from_parts(2, 2, vec![cos, -sin, sin, cos])
    }

    /// A 2x2 clockwise rotation matrix. `angle` is in radians.
    pub fn rotate2_cw(angle: T) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        Self::from_parts(2, 2, vec![cos, sin, -sin, cos])
    }

    /// A 3x3 counter-clockwise rotation about the X axis.
    #[rustfmt::skip]
    pub fn rotate3_x(angle: T) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let (zero, one) = (T::ZERO, T::ONE);
        Self::from_parts(3, 3, vec![
            one, zero, zero,
            zero, cos, -sin,
            zero, sin, cos,
        ])
    }

    /// A 3x3 clockwise rotation about the X axis.
    pub fn rotate3_x_cw(angle: T) -> Self {
        Self::rotate3_x(-angle)
    }

    /// A 3x3 counter-clockwise rotation about the Y axis.
    #[rustfmt::skip]
    pub fn rotate3_y(angle: T) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let (zero, one) = (T::ZERO, T::ONE);
        Self::from_parts(3, 3, vec![
            cos, zero, sin,
            zero, one, zero,
            -sin, zero, cos,
        ])
    }

    /// A 3x3 clockwise rotation about the Y axis.
    pub fn rotate3_y_cw(angle: T) -> Self {
        Self::rotate3_y(-angle)
    }

    /// A 3x3 counter-clockwise rotation about the Z axis.
    #[rustfmt::skip]
    pub fn rotate3_z(angle: T) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let (zero, one) = (T::ZERO, T::ONE);
        Self::from_parts(3, 3, vec![
            cos, -sin, zero,
            sin, cos, zero,
            zero, zero, one,
        ])
    }

    /// A 3x3 clockwise rotation about the Z axis.
    pub fn rotate3_z_cw(angle: T) -> Self {
        Self::rotate3_z(-angle)
    }
}

impl<T: Number> Matrix<T> {
    /// Returns the cell at `(column, row)`.
    pub fn get(&self, column: usize, row: usize) -> Result<T> {
        self.check_column(column)?;
        self.check_row(row)?;
        Ok(self.cells[row * self.width + column])
    }

    /// Returns a mutable reference to the cell at `(column, row)`.
    pub fn get_mut(&mut self, column: usize, row: usize) -> Result<&mut T> {
        self.check_column(column)?;
        self.check_row(row)?;
        Ok(&mut self.cells[row * self.width + column])
    }

    /// Overwrites the cell at `(column, row)`.
    pub fn set(&mut self, column: usize, row: usize, value: T) -> Result<()> {
        *self.get_mut(column, row)? = value;
        Ok(())
    }

    /// Returns the given row as an independent 1-row matrix.
    ///
    /// Mutating the copy never affects `self`; use [`Matrix::row_mut`] to
    /// edit a row in place.
    pub fn row(&self, row: usize) -> Result<Matrix<T>> {
        self.check_row(row)?;
        Ok(self.copy_row(row))
    }

    /// Returns the given column as an independent 1-column matrix.
    pub fn column(&self, column: usize) -> Result<Matrix<T>> {
        self.check_column(column)?;
        Ok(self.copy_column(column))
    }

    /// Returns a mutable view of the given row, borrowing from `self`.
    ///
    /// The view writes straight into this matrix's storage, so a whole row
    /// can be edited without a copy-then-write-back round trip.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zmath::*;
    /// let mut mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// mat.row_mut(1)?.fill(9);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2],
    ///     [9, 9],
    /// ]));
    /// # Ok::<(), MathError>(())
    /// ```
    pub fn row_mut(&mut self, row: usize) -> Result<LaneMut<'_, T>> {
        self.check_row(row)?;
        let (width, start) = (self.width, row * self.width);
        Ok(LaneMut::new(&mut self.cells, LaneKind::Row, start, 1, width))
    }

    /// Returns a mutable view of the given column, borrowing from `self`.
    pub fn column_mut(&mut self, column: usize) -> Result<LaneMut<'_, T>> {
        self.check_column(column)?;
        let (stride, len) = (self.width, self.height);
        Ok(LaneMut::new(
            &mut self.cells,
            LaneKind::Column,
            column,
            stride,
            len,
        ))
    }

    fn copy_row(&self, row: usize) -> Matrix<T> {
        debug_assert!(row < self.height);
        let cells = self.cells[row * self.width..][..self.width].to_vec();
        Matrix::from_parts(self.width, 1, cells)
    }

    fn copy_column(&self, column: usize) -> Matrix<T> {
        debug_assert!(column < self.width);
        let cells = (0..self.height)
            .map(|row| self.cells[row * self.width + column])
            .collect();
        Matrix::from_parts(1, self.height, cells)
    }

    /// Elementwise sum. Both operands must have identical dimensions.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MathError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let cells = self
            .cells
            .iter()
            .zip(other.cells.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self::from_parts(self.width, self.height, cells))
    }

    /// Elementwise difference. Both operands must have identical dimensions.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MathError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let cells = self
            .cells
            .iter()
            .zip(other.cells.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Self::from_parts(self.width, self.height, cells))
    }

    /// Standard matrix product.
    ///
    /// Requires `self.width() == other.height()`; the result has
    /// `other.width()` columns and `self.height()` rows, each cell being the
    /// dot product of the matching row of `self` and column of `other`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        if self.width != other.height {
            return Err(MathError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut cells = Vec::with_capacity(other.width * self.height);
        for row in 0..self.height {
            for col in 0..other.width {
                let dot = (0..self.width).fold(T::ZERO, |acc, k| {
                    acc + self.cells[row * self.width + k] * other.cells[k * other.width + col]
                });
                cells.push(dot);
            }
        }
        Ok(Self::from_parts(other.width, self.height, cells))
    }

    /// Swaps the rows and columns of this matrix in place.
    ///
    /// See [`Matrix::transposed`] for the copying form.
    pub fn transpose(&mut self) {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.width {
            for row in 0..self.height {
                cells.push(self.cells[row * self.width + col]);
            }
        }
        self.cells = cells.into_boxed_slice();
        std::mem::swap(&mut self.width, &mut self.height);
    }

    /// Returns a transposed copy of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat.transposed(), Matrix::from_rows([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]));
    /// ```
    pub fn transposed(&self) -> Self {
        let mut ret = self.clone();
        ret.transpose();
        ret
    }

    /// Returns the determinant of this square matrix.
    ///
    /// Computed by cofactor expansion along the first row, which is factorial
    /// in the matrix size. Fine for the small matrices this library is
    /// about, but there is deliberately no decomposition fast path.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zmath::*;
    /// assert_eq!(Matrix::<f64>::identity(3)?.determinant(), Ok(1.0));
    ///
    /// let mat = Matrix::from_rows([
    ///     [3, 8],
    ///     [4, 6],
    /// ]);
    /// assert_eq!(mat.determinant(), Ok(-14));
    /// # Ok::<(), MathError>(())
    /// ```
    pub fn determinant(&self) -> Result<T> {
        if self.width != self.height {
            return Err(MathError::SquareRequired {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.det_cofactor())
    }

    fn det_cofactor(&self) -> T {
        let n = self.width;
        if n == 1 {
            return self.cells[0];
        }
        if n == 2 {
            return self.cells[0] * self.cells[3] - self.cells[1] * self.cells[2];
        }

        let mut sign = T::ONE;
        let mut ret = T::ZERO;
        for col in 0..n {
            let multiplier = sign * self.cells[col];
            sign = -sign;
            // A zero multiplier contributes nothing; skip the recursion.
            if multiplier == T::ZERO {
                continue;
            }
            let mut minor = Vec::with_capacity((n - 1) * (n - 1));
            for row in 1..n {
                for c in 0..n {
                    if c != col {
                        minor.push(self.cells[row * n + c]);
                    }
                }
            }
            let minor = Matrix::from_parts(n - 1, n - 1, minor);
            ret = ret + multiplier * minor.det_cofactor();
        }
        ret
    }

    /// Replaces every cell with `f(column, row, cell)`, in place.
    ///
    /// Cells are visited independently; the callback must not rely on any
    /// particular traversal order.
    pub fn map_cells<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize, T) -> T,
    {
        for row in 0..self.height {
            for col in 0..self.width {
                let i = row * self.width + col;
                self.cells[i] = f(col, row, self.cells[i]);
            }
        }
    }

    /// Like [`Matrix::map_cells`], but returns a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.mapped_cells(|_, _, cell| cell * 10), Matrix::from_rows([
    ///     [10, 20],
    ///     [30, 40],
    /// ]));
    /// ```
    pub fn mapped_cells<F>(&self, f: F) -> Self
    where
        F: FnMut(usize, usize, T) -> T,
    {
        let mut ret = self.clone();
        ret.map_cells(f);
        ret
    }

    /// Replaces each row with `f(row_index, row)`, in place.
    ///
    /// The callback receives each row as an independent 1-row matrix and
    /// must return a matrix of exactly the same shape, otherwise the
    /// operation fails with [`MathError::InvalidShape`].
    pub fn map_rows<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(usize, &Matrix<T>) -> Matrix<T>,
    {
        for row in 0..self.height {
            let transformed = f(row, &self.copy_row(row));
            if transformed.shape() != (self.width, 1) {
                return Err(MathError::InvalidShape {
                    expected: (self.width, 1),
                    got: transformed.shape(),
                });
            }
            self.cells[row * self.width..][..self.width].copy_from_slice(&transformed.cells);
        }
        Ok(())
    }

    /// Like [`Matrix::map_rows`], but returns a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// let doubled = mat.mapped_rows(|_, row| row.clone() * 2)?;
    /// assert_eq!(doubled, Matrix::from_rows([
    ///     [2, 4],
    ///     [6, 8],
    /// ]));
    /// # Ok::<(), MathError>(())
    /// ```
    pub fn mapped_rows<F>(&self, f: F) -> Result<Self>
    where
        F: FnMut(usize, &Matrix<T>) -> Matrix<T>,
    {
        let mut ret = self.clone();
        ret.map_rows(f)?;
        Ok(ret)
    }

    /// Replaces each column with `f(column_index, column)`, in place.
    ///
    /// The callback receives each column as an independent 1-column matrix
    /// and must return a matrix of exactly the same shape, otherwise the
    /// operation fails with [`MathError::InvalidShape`].
    pub fn map_columns<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(usize, &Matrix<T>) -> Matrix<T>,
    {
        for col in 0..self.width {
            let transformed = f(col, &self.copy_column(col));
            if transformed.shape() != (1, self.height) {
                return Err(MathError::InvalidShape {
                    expected: (1, self.height),
                    got: transformed.shape(),
                });
            }
            for row in 0..self.height {
                self.cells[row * self.width + col] = transformed.cells[row];
            }
        }
        Ok(())
    }

    /// Like [`Matrix::map_columns`], but returns a new matrix.
    pub fn mapped_columns<F>(&self, f: F) -> Result<Self>
    where
        F: FnMut(usize, &Matrix<T>) -> Matrix<T>,
    {
        let mut ret = self.clone();
        ret.map_columns(f)?;
        Ok(ret)
    }

    /// Collapses each row to the scalar `f(row_index, row)`, in place.
    ///
    /// Afterwards the matrix has a width of 1 and an unchanged height.
    pub fn reduce_rows<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, &Matrix<T>) -> T,
    {
        let mut cells = Vec::with_capacity(self.height);
        for row in 0..self.height {
            cells.push(f(row, &self.copy_row(row)));
        }
        self.cells = cells.into_boxed_slice();
        self.width = 1;
    }

    /// Like [`Matrix::reduce_rows`], but returns a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// let sums = mat.reduced_rows(|_, row| row.get(0, 0).unwrap() + row.get(1, 0).unwrap());
    /// assert_eq!(sums, Matrix::from_rows([
    ///     [3],
    ///     [7],
    /// ]));
    /// ```
    pub fn reduced_rows<F>(&self, f: F) -> Self
    where
        F: FnMut(usize, &Matrix<T>) -> T,
    {
        let mut ret = self.clone();
        ret.reduce_rows(f);
        ret
    }

    /// Collapses each column to the scalar `f(column_index, column)`, in
    /// place.
    ///
    /// Afterwards the matrix has a height of 1 and an unchanged width.
    pub fn reduce_columns<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, &Matrix<T>) -> T,
    {
        let mut cells = Vec::with_capacity(self.width);
        for col in 0..self.width {
            cells.push(f(col, &self.copy_column(col)));
        }
        self.cells = cells.into_boxed_slice();
        self.height = 1;
    }

    /// Like [`Matrix::reduce_columns`], but returns a new matrix.
    pub fn reduced_columns<F>(&self, f: F) -> Self
    where
        F: FnMut(usize, &Matrix<T>) -> T,
    {
        let mut ret = self.clone();
        ret.reduce_columns(f);
        ret
    }

    fn check_vector_shape(&self, len: usize) -> Result<()> {
        if (self.width == 1 && self.height == len) || (self.width == len && self.height == 1) {
            Ok(())
        } else {
            Err(MathError::ShapeMismatch {
                len,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Converts a 1x2 or 2x1 matrix into a [`Vec2`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zmath::*;
    /// let v = vec2(1.0, 2.0);
    /// assert_eq!(v.to_column().to_vec2(), Ok(v));
    /// assert!(Matrix::<f64>::identity(2)?.to_vec2().is_err());
    /// # Ok::<(), MathError>(())
    /// ```
    pub fn to_vec2(&self) -> Result<Vec2<T>> {
        self.check_vector_shape(2)?;
        Ok(vec2(self.cells[0], self.cells[1]))
    }

    /// Converts a 1x3 or 3x1 matrix into a [`Vec3`].
    pub fn to_vec3(&self) -> Result<Vec3<T>> {
        self.check_vector_shape(3)?;
        Ok(vec3(self.cells[0], self.cells[1], self.cells[2]))
    }

    /// Converts a 1x4 or 4x1 matrix into a [`Vec4`].
    pub fn to_vec4(&self) -> Result<Vec4<T>> {
        self.check_vector_shape(4)?;
        Ok(vec4(
            self.cells[0],
            self.cells[1],
            self.cells[2],
            self.cells[3],
        ))
    }
}
