//! Operator and comparison impls for [`Vector`].

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

use crate::{ApproxEq, Number};

use super::Vector;

impl<T: Number, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

macro_rules! binop {
    ($op:ident :: $meth:ident, $assign:ident :: $assign_meth:ident) => {
        /// Componentwise operation on two vectors of the same size.
        impl<T: Number, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            fn $meth(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| $op::$meth(a, b))
            }
        }

        /// Broadcasts the scalar across all components.
        impl<T: Number, const N: usize> $op<T> for Vector<T, N> {
            type Output = Self;

            fn $meth(self, rhs: T) -> Self {
                self.map(|a| $op::$meth(a, rhs))
            }
        }

        impl<T: Number, const N: usize> $assign for Vector<T, N> {
            fn $assign_meth(&mut self, rhs: Self) {
                *self = $op::$meth(*self, rhs);
            }
        }

        impl<T: Number, const N: usize> $assign<T> for Vector<T, N> {
            fn $assign_meth(&mut self, rhs: T) {
                *self = $op::$meth(*self, rhs);
            }
        }
    };
}

binop!(Add::add, AddAssign::add_assign);
binop!(Sub::sub, SubAssign::sub_assign);
binop!(Mul::mul, MulAssign::mul_assign);
binop!(Div::div, DivAssign::div_assign);
binop!(Rem::rem, RemAssign::rem_assign);

// `scalar <op> vector` cannot be written generically (the scalar type is not
// local), so it is provided for the concrete float types. The asymmetric
// operations broadcast the scalar into a vector first, so `s - v` is
// `splat(s) - v`, not `v - s`.
macro_rules! scalar_lhs {
    ($($types:ty),+) => {
        $(
            impl<const N: usize> Add<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn add(self, rhs: Vector<$types, N>) -> Self::Output {
                    rhs + self
                }
            }

            impl<const N: usize> Sub<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn sub(self, rhs: Vector<$types, N>) -> Self::Output {
                    Vector::splat(self) - rhs
                }
            }

            impl<const N: usize> Mul<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn mul(self, rhs: Vector<$types, N>) -> Self::Output {
                    rhs * self
                }
            }

            impl<const N: usize> Div<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn div(self, rhs: Vector<$types, N>) -> Self::Output {
                    Vector::splat(self) / rhs
                }
            }

            impl<const N: usize> Rem<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn rem(self, rhs: Vector<$types, N>) -> Self::Output {
                    Vector::splat(self) % rhs
                }
            }
        )+
    };
}
scalar_lhs!(f32, f64);

impl<T: PartialEq, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        &self.0 == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<Vector<T, N>> for [T; N] {
    fn eq(&self, other: &Vector<T, N>) -> bool {
        self == &other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for Vector<T, N> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne, vec2, vec3};

    #[test]
    fn componentwise() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 6.0, 8.0);
        assert_eq!(a + b, vec3(5.0, 8.0, 11.0));
        assert_eq!(b - a, vec3(3.0, 4.0, 5.0));
        assert_eq!(a * b, vec3(4.0, 12.0, 24.0));
        assert_eq!(b / a, vec3(4.0, 3.0, 8.0 / 3.0));
        assert_eq!(b % a, vec3(0.0, 0.0, 2.0));
        assert_eq!(-a, vec3(-1.0, -2.0, -3.0));
    }

    #[test]
    fn broadcast() {
        let v = vec2(1.0, -4.0);
        assert_eq!(v + 1.0, vec2(2.0, -3.0));
        assert_eq!(v - 1.0, vec2(0.0, -5.0));
        assert_eq!(v * 2.0, vec2(2.0, -8.0));
        assert_eq!(v / 2.0, vec2(0.5, -2.0));
        assert_eq!(vec2(7.0, -7.0) % 4.0, vec2(3.0, -3.0));
    }

    #[test]
    fn scalar_on_the_left() {
        let v = vec2(1.0, 2.0);
        assert_eq!(2.0 + v, v + 2.0);
        assert_eq!(2.0 * v, v * 2.0);

        // Subtraction, division and remainder broadcast the scalar instead.
        assert_eq!(2.0 - v, vec2(1.0, 0.0));
        assert_eq!(2.0 / v, vec2(2.0, 1.0));
        assert_eq!(3.0 % v, vec2(0.0, 1.0));
    }

    #[test]
    fn assign_forms() {
        let mut v = vec2(1.0, 2.0);
        v += vec2(10.0, 20.0);
        assert_eq!(v, vec2(11.0, 22.0));
        v -= 1.0;
        assert_eq!(v, vec2(10.0, 21.0));
        v *= 2.0;
        v /= vec2(4.0, 6.0);
        assert_eq!(v, vec2(5.0, 7.0));
        v %= 3.0;
        assert_eq!(v, vec2(2.0, 1.0));
    }

    #[test]
    fn remainder_keeps_dividend_sign() {
        assert_eq!(vec2(5.5, -5.5) % 2.0, vec2(1.5, -1.5));
    }

    #[test]
    fn array_comparisons() {
        assert_eq!(vec3(1, 2, 3), [1, 2, 3]);
        assert_eq!([1, 2, 3], vec3(1, 2, 3));
        assert_ne!(vec3(1, 2, 3), [1, 2, 4]);
    }

    #[test]
    fn indexing() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(v[2], 3);
        v[0] = 10;
        assert_eq!(v, [10, 2, 3]);
    }

    #[test]
    fn approx() {
        assert_approx_eq!(vec2(1.0, 2.0), vec2(1.00001, 1.99999));
        assert_approx_ne!(vec2(1.0, 2.0), vec2(1.1, 2.0));
    }
}
