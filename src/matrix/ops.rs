//! Operator, comparison and formatting impls for [`Matrix`].
//!
//! The arithmetic operators delegate to the fallible `checked_*` methods and
//! panic with the same error message on a shape mismatch, mirroring how
//! slice indexing relates to `get`.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::{ApproxEq, Number, Result, Vec2, Vec3, Vec4};

use super::Matrix;

#[track_caller]
fn unwrap_op<T>(res: Result<T>) -> T {
    match res {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Returns the cell at `(column, row)`, panicking when out of bounds.
    #[track_caller]
    fn index(&self, (column, row): (usize, usize)) -> &T {
        unwrap_op(self.check_column(column).and_then(|()| self.check_row(row)));
        &self.cells[row * self.width + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (column, row): (usize, usize)) -> &mut T {
        unwrap_op(self.check_column(column).and_then(|()| self.check_row(row)));
        &mut self.cells[row * self.width + column]
    }
}

/// Exact equality: the dimensions and every cell must match.
///
/// Floating-point matrices usually want [`ApproxEq`] and
/// [`assert_approx_eq!`][crate::assert_approx_eq] instead.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.cells == other.cells
    }
}

impl<T: ApproxEq> ApproxEq for Matrix<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.shape() == other.shape() && self.cells.abs_diff_eq(&other.cells, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.shape() == other.shape() && self.cells.rel_diff_eq(&other.cells, rel_tolerance)
    }
}

impl<T: Number> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.mapped_cells(|_, _, cell| -cell)
    }
}

impl<'a, T: Number> Neg for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.mapped_cells(|_, _, cell| -cell)
    }
}

macro_rules! matrix_binop {
    ($op:ident :: $meth:ident => $checked:ident) => {
        impl<T: Number> $op for Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $meth(self, rhs: Matrix<T>) -> Matrix<T> {
                unwrap_op(self.$checked(&rhs))
            }
        }

        impl<'a, T: Number> $op for &'a Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            fn $meth(self, rhs: &'a Matrix<T>) -> Matrix<T> {
                unwrap_op(self.$checked(rhs))
            }
        }
    };
}
matrix_binop!(Add::add => checked_add);
matrix_binop!(Sub::sub => checked_sub);
matrix_binop!(Mul::mul => checked_mul);

macro_rules! scalar_binop {
    ($op:ident :: $meth:ident) => {
        /// Applies the operation to every cell.
        impl<T: Number> $op<T> for Matrix<T> {
            type Output = Matrix<T>;

            fn $meth(self, rhs: T) -> Matrix<T> {
                self.mapped_cells(|_, _, cell| $op::$meth(cell, rhs))
            }
        }

        impl<'a, T: Number> $op<T> for &'a Matrix<T> {
            type Output = Matrix<T>;

            fn $meth(self, rhs: T) -> Matrix<T> {
                self.mapped_cells(|_, _, cell| $op::$meth(cell, rhs))
            }
        }
    };
}
scalar_binop!(Add::add);
scalar_binop!(Sub::sub);
scalar_binop!(Mul::mul);
scalar_binop!(Div::div);

// `scalar * matrix` cannot be written generically (the scalar type is not
// local), so it is provided for the concrete float types.
macro_rules! scalar_lhs_mul {
    ($($types:ty),+) => {
        $(
            impl Mul<Matrix<$types>> for $types {
                type Output = Matrix<$types>;

                fn mul(self, rhs: Matrix<$types>) -> Matrix<$types> {
                    rhs * self
                }
            }

            impl<'a> Mul<&'a Matrix<$types>> for $types {
                type Output = Matrix<$types>;

                fn mul(self, rhs: &'a Matrix<$types>) -> Matrix<$types> {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(f32, f64);

macro_rules! mul_vector {
    ($($vec:ident => $to:ident;)+) => {
        $(
            /// Multiplies the matrix with the vector, treated as a column.
            ///
            /// Panics when the shapes don't line up; the matrix must be
            /// square with the vector's dimension.
            impl<T: Number> Mul<$vec<T>> for &Matrix<T> {
                type Output = $vec<T>;

                #[track_caller]
                fn mul(self, rhs: $vec<T>) -> $vec<T> {
                    unwrap_op(self.checked_mul(&rhs.to_column()).and_then(|m| m.$to()))
                }
            }

            impl<T: Number> Mul<$vec<T>> for Matrix<T> {
                type Output = $vec<T>;

                #[track_caller]
                fn mul(self, rhs: $vec<T>) -> $vec<T> {
                    &self * rhs
                }
            }
        )+
    };
}
mul_vector! {
    Vec2 => to_vec2;
    Vec3 => to_vec3;
    Vec4 => to_vec4;
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a [T]);
        impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0).finish()
            }
        }

        f.debug_list()
            .entries(self.cells.chunks(self.width).map(FormatRow))
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for cell in row {
                write!(f, " {cell}")?;
            }
            f.write_str(" ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, vec3};

    use super::*;

    #[test]
    fn index() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat[(1, 0)], 2);
        mat[(0, 1)] = 30;
        assert_eq!(mat, Matrix::from_rows([[1, 2], [30, 4]]));
    }

    #[test]
    #[should_panic(expected = "column index 2 exceeds matrix width 2")]
    fn index_out_of_bounds() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        let _ = mat[(2, 0)];
    }

    #[test]
    fn eq_requires_matching_shape() {
        // Same cells, different shape.
        let wide = Matrix::from_rows([[1, 2, 3, 4]]);
        let square = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_ne!(wide, square);
        assert_eq!(square, square.clone());
    }

    #[test]
    fn approx_eq() {
        let a = Matrix::from_rows([[1.0, 2.0]]);
        let b = Matrix::from_rows([[1.00001, 1.99999]]);
        assert_approx_eq!(a, b);

        let col = a.transposed();
        assert!(!a.abs_diff_eq(&col, 1.0));
    }

    #[test]
    fn matrix_operators() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[5, 6], [7, 8]]);
        assert_eq!(&a + &b, Matrix::from_rows([[6, 8], [10, 12]]));
        assert_eq!(&b - &a, Matrix::from_rows([[4, 4], [4, 4]]));
        assert_eq!(&a * &b, Matrix::from_rows([[19, 22], [43, 50]]));
        assert_eq!(-&a, Matrix::from_rows([[-1, -2], [-3, -4]]));
        assert_eq!(a * b, Matrix::from_rows([[19, 22], [43, 50]]));
    }

    #[test]
    #[should_panic(expected = "matrix shapes (2, 2) and (1, 2) are incompatible")]
    fn add_shape_mismatch_panics() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[1], [2]]);
        let _ = a + b;
    }

    #[test]
    fn scalar_operators() {
        let mat = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(&mat + 1.0, Matrix::from_rows([[2.0, 3.0], [4.0, 5.0]]));
        assert_eq!(&mat - 1.0, Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]));
        assert_eq!(&mat * 2.0, Matrix::from_rows([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(&mat / 2.0, Matrix::from_rows([[0.5, 1.0], [1.5, 2.0]]));
        assert_eq!(2.0 * &mat, &mat * 2.0);
    }

    #[test]
    fn vector_multiplication() {
        let mat = Matrix::from_rows([[0.0, -1.0], [1.0, 0.0]]);
        assert_approx_eq!(&mat * vec2(1.0, 0.0), vec2(0.0, 1.0));

        let id = Matrix::identity(3).unwrap();
        assert_eq!(id * vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "incompatible")]
    fn vector_multiplication_mismatch_panics() {
        let mat = Matrix::<f64>::identity(3).unwrap();
        let _ = &mat * vec2(1.0, 2.0);
    }

    #[test]
    fn debug() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(format!("{mat:?}"), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn display() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(format!("{mat}"), "[ 1 2 ]\n[ 3 4 ]");
    }
}
