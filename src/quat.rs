use std::fmt;

use crate::{vec4, Matrix, MinMax, Number, One, Sqrt, Vec4, Zero};

mod ops;

/// A quaternion, stored as a [`Vec4`] with the component convention
/// `(r, i, j, k)`: the real part first, at index 0.
///
/// Addition and subtraction are componentwise; multiplication is the
/// (non-commutative) Hamilton product. Division has a sign convention
/// specific to this component ordering, see [`Div`].
///
/// The element type defaults to `f64`.
///
/// [`Div`]: std::ops::Div
#[derive(Clone, Copy, PartialEq)]
pub struct Quat<T = f64> {
    vec: Vec4<T>,
}

impl<T: Zero + One + Copy> Quat<T> {
    /// The quaternion with all 4 components set to 0.
    pub const ZERO: Self = Self { vec: Vec4::ZERO };
    /// The quaternion with all 4 components set to 1.
    pub const ONE: Self = Self { vec: Vec4::ONE };
    /// The real unit quaternion, `1 + 0i + 0j + 0k`.
    ///
    /// This is the identity of quaternion multiplication.
    pub const R: Self = Self {
        vec: vec4(T::ONE, T::ZERO, T::ZERO, T::ZERO),
    };
    /// The imaginary unit `i`.
    pub const I: Self = Self {
        vec: vec4(T::ZERO, T::ONE, T::ZERO, T::ZERO),
    };
    /// The imaginary unit `j`.
    pub const J: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ONE, T::ZERO),
    };
    /// The imaginary unit `k`.
    pub const K: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion `r + i·i + j·j + k·k` from its components.
    pub const fn new(r: T, i: T, j: T, k: T) -> Self {
        Self {
            vec: vec4(r, i, j, k),
        }
    }

    /// Creates a quaternion with all four components set to `value`.
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self {
            vec: Vec4::splat(value),
        }
    }

    /// Returns the backing [`Vec4`], in `(r, i, j, k)` order.
    pub fn to_vec4(self) -> Vec4<T> {
        self.vec
    }
}

impl<T: Number> Quat<T> {
    /// Returns the real component.
    #[inline]
    pub fn r(self) -> T {
        self.vec.x
    }

    /// Returns the `i` component.
    #[inline]
    pub fn i(self) -> T {
        self.vec.y
    }

    /// Returns the `j` component.
    #[inline]
    pub fn j(self) -> T {
        self.vec.z
    }

    /// Returns the `k` component.
    #[inline]
    pub fn k(self) -> T {
        self.vec.w
    }

    /// Returns the conjugate: the imaginary components negated, the real
    /// component preserved.
    pub fn conjugated(self) -> Self {
        Self::new(self.r(), -self.i(), -self.j(), -self.k())
    }

    /// Computes the squared length of the backing vector.
    pub fn length_squared(self) -> T {
        self.vec.length_squared()
    }

    /// Multiplies every component by `factor`. Identical to `self * factor`.
    pub fn scaled(self, factor: T) -> Self {
        Self {
            vec: self.vec.scaled(factor),
        }
    }

    /// Converts this quaternion into a 1x4 row matrix, `(r, i, j, k)` order.
    pub fn to_row(self) -> Matrix<T> {
        self.vec.to_row()
    }

    /// Converts this quaternion into a 4x1 column matrix.
    pub fn to_column(self) -> Matrix<T> {
        self.vec.to_column()
    }
}

impl<T: Number + MinMax> Quat<T> {
    /// Clamps every component into the range `min ..= max`.
    pub fn clamped(self, min: T, max: T) -> Self {
        Self {
            vec: self.vec.clamped(min, max),
        }
    }
}

impl<T: Number + Sqrt> Quat<T> {
    /// Computes the length of the backing vector.
    pub fn length(self) -> T {
        self.vec.length()
    }

    /// Scales the quaternion to a length of 1.
    ///
    /// Like [`Vector::normalized`][crate::Vector::normalized], this produces
    /// NaNs for the zero quaternion.
    pub fn normalized(self) -> Self {
        Self {
            vec: self.vec.normalized(),
        }
    }
}

impl<T: Number + Sqrt + PartialOrd> Quat<T> {
    /// Rescales the quaternion so that its length falls into
    /// `min_length ..= max_length`.
    pub fn limited_length(self, max_length: T, min_length: T) -> Self {
        Self {
            vec: self.vec.limited_length(max_length, min_length),
        }
    }
}

impl<T> From<Vec4<T>> for Quat<T> {
    fn from(vec: Vec4<T>) -> Self {
        Self { vec }
    }
}

impl<T> From<Quat<T>> for Vec4<T> {
    fn from(quat: Quat<T>) -> Self {
        quat.vec
    }
}

impl<T: fmt::Display + Number> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({}, {}, {}, {})",
            self.r(),
            self.i(),
            self.j(),
            self.k()
        )
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({:?}, {:?}, {:?}, {:?})",
            self.vec[0], self.vec[1], self.vec[2], self.vec[3]
        )
    }
}
