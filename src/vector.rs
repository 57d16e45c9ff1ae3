use std::fmt;

use crate::{Matrix, MinMax, Number, One, Sqrt, Trig, Zero};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A small, fixed-size vector with 2, 3 or 4 components.
///
/// The component type defaults to `f64`; the [`Vec2`], [`Vec3`] and [`Vec4`]
/// aliases and the [`vec2`], [`vec3`] and [`vec4`] functions are the usual
/// way to name and build these.
///
/// Vectors of 2 to 4 elements can have their elements accessed as fields
/// `x`, `y`, `z` and `w` (via [`Deref`] impls).
///
/// Arithmetic (`+ - * / %`) works componentwise against another vector of
/// the same size or against a scalar, which is broadcast across all
/// components. Note the asymmetry of scalar subtraction, division and
/// remainder: `v - s` subtracts `s` from every component, while `s - v`
/// broadcasts `s` into a vector first and subtracts `v` from it.
///
/// ```
/// # use zmath::*;
/// let v = vec3(1.0, 2.0, 3.0);
/// assert_eq!(v.x, 1.0);
/// assert_eq!(v + v, vec3(2.0, 4.0, 6.0));
/// assert_eq!(v - 1.0, vec3(0.0, 1.0, 2.0));
/// assert_eq!(6.0 / v, vec3(6.0, 3.0, 2.0));
/// ```
///
/// [`Deref`]: std::ops::Deref
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

/// A vector with 2 components.
pub type Vec2<T = f64> = Vector<T, 2>;
/// A vector with 3 components.
pub type Vec3<T = f64> = Vector<T, 3>;
/// A vector with 4 components.
pub type Vec4<T = f64> = Vector<T, 4>;

/// Constructs a [`Vec2`] from its components.
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its components.
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its components.
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

// Safety: `Vector` is `repr(transparent)` around `[T; N]`.
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero + Copy, const N: usize> Vector<T, N> {
    /// A vector with every component set to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One + Copy, const N: usize> Vector<T, N> {
    /// A vector with every component set to 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Zero + One> Vec2<T> {
    /// The unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// The unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vec3<T> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vec4<T> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with every component set to `value`.
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// Creates a vector by invoking a closure with each component index.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(std::array::from_fn(f))
    }

    /// Returns a reference to the underlying array.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns the components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Consumes the vector and returns the underlying array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Applies a closure to every component, returning the resulting vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    fn zip<F, U, V>(self, other: Vector<U, N>, mut f: F) -> Vector<V, N>
    where
        F: FnMut(T, U) -> V,
        T: Copy,
        U: Copy,
    {
        let mut other = other.0.into_iter();
        self.map(|a| match other.next() {
            Some(b) => f(a, b),
            None => unreachable!(),
        })
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// Computes the dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T {
        self.zip(other, |a, b| a * b)
            .0
            .into_iter()
            .fold(T::ZERO, |acc, x| acc + x)
    }

    /// Computes the squared length of this vector.
    ///
    /// Cheaper to compute than [`Vector::length`], since it avoids the
    /// square root.
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Multiplies every component by `factor`. Identical to `self * factor`.
    pub fn scaled(self, factor: T) -> Self {
        self * factor
    }

    /// Converts this vector into a 1-row matrix.
    pub fn to_row(self) -> Matrix<T> {
        Matrix::from_parts(N, 1, self.0.to_vec())
    }

    /// Converts this vector into a 1-column matrix.
    pub fn to_column(self) -> Matrix<T> {
        Matrix::from_parts(1, N, self.0.to_vec())
    }
}

impl<T: Number + MinMax, const N: usize> Vector<T, N> {
    /// Clamps every component into the range `min ..= max`.
    pub fn clamped(self, min: T, max: T) -> Self {
        self.map(|x| x.clamp(min, max))
    }
}

impl<T: Number + Sqrt, const N: usize> Vector<T, N> {
    /// Computes the length of this vector.
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Divides the vector by its own length, yielding a vector with the same
    /// direction, but a length of 1.
    ///
    /// The zero vector has no direction and normalizes to a vector of NaNs;
    /// there is no guard for that case.
    pub fn normalized(self) -> Self {
        self / self.length()
    }
}

impl<T: Number + Sqrt + PartialOrd, const N: usize> Vector<T, N> {
    /// Rescales the vector so that its length falls into
    /// `min_length ..= max_length`.
    ///
    /// A vector that is too long is scaled down to exactly `max_length`, one
    /// that is too short is scaled up to exactly `min_length`, and a vector
    /// already inside the range is returned unchanged.
    pub fn limited_length(self, max_length: T, min_length: T) -> Self {
        let len_sqr = self.length_squared();
        let max_sqr = max_length * max_length;
        let min_sqr = min_length * min_length;
        if len_sqr > max_sqr {
            // sqrt(a²/b²) == sqrt(a²)/sqrt(b²), saving one sqrt.
            self * (max_sqr / len_sqr).sqrt()
        } else if len_sqr < min_sqr {
            self * (min_sqr / len_sqr).sqrt()
        } else {
            self
        }
    }
}

impl<T: Number + Sqrt + Trig, const N: usize> Vector<T, N> {
    /// Computes the angle between `self` and `other`, in radians.
    ///
    /// The result is in the range `0 ..= π` and does not distinguish
    /// clockwise from counter-clockwise.
    pub fn angle_to(self, other: Self) -> T {
        let cos = self.dot(other) / (self.length_squared() * other.length_squared()).sqrt();
        cos.acos()
    }

    /// Computes the length of the projection of `self` onto `other`.
    pub fn projected_length(self, other: Self) -> T {
        self.length() * self.angle_to(other).cos()
    }

    /// Projects `self` onto `other`.
    pub fn projected(self, other: Self) -> Self {
        other.normalized() * self.projected_length(other)
    }

    /// Computes the component of `self` perpendicular to `other`.
    ///
    /// The projection and the rejection sum back to the original vector.
    pub fn rejected(self, other: Self) -> Self {
        self - self.projected(other)
    }
}

impl<T: Number + Sqrt + Trig> Vec2<T> {
    /// Computes the angle between `self` and the unit X axis, in radians.
    pub fn angle(self) -> T {
        self.angle_to(Self::X)
    }
}

impl<T: Number> Vec2<T> {
    /// Drops the `y` component.
    pub fn shortened(self) -> T {
        self.x
    }

    /// Appends a `z` component.
    pub fn extended(self, z: T) -> Vec3<T> {
        vec3(self.x, self.y, z)
    }

    /// Converts to a 1x3 row matrix, padding with the given `z`.
    pub fn to_row3(self, z: T) -> Matrix<T> {
        self.extended(z).to_row()
    }

    /// Converts to a 3x1 column matrix, padding with the given `z`.
    pub fn to_column3(self, z: T) -> Matrix<T> {
        self.extended(z).to_column()
    }

    /// Converts to a 1x4 row matrix, padding with the given `z` and `w`.
    pub fn to_row4(self, z: T, w: T) -> Matrix<T> {
        self.extended(z).extended(w).to_row()
    }

    /// Converts to a 4x1 column matrix, padding with the given `z` and `w`.
    pub fn to_column4(self, z: T, w: T) -> Matrix<T> {
        self.extended(z).extended(w).to_column()
    }
}

impl<T: Number> Vec3<T> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs, following the right-hand
    /// rule.
    pub fn crossed(self, other: Self) -> Self {
        vec3(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Drops the `z` component.
    pub fn shortened(self) -> Vec2<T> {
        vec2(self.x, self.y)
    }

    /// Appends a `w` component.
    pub fn extended(self, w: T) -> Vec4<T> {
        vec4(self.x, self.y, self.z, w)
    }

    /// Converts to a 1x4 row matrix, padding with the given `w`.
    pub fn to_row4(self, w: T) -> Matrix<T> {
        self.extended(w).to_row()
    }

    /// Converts to a 4x1 column matrix, padding with the given `w`.
    pub fn to_column4(self, w: T) -> Matrix<T> {
        self.extended(w).to_column()
    }
}

impl<T: Number> Vec4<T> {
    /// Drops the `w` component.
    pub fn shortened(self) -> Vec3<T> {
        vec3(self.x, self.y, self.z)
    }

    /// Converts to a 1x5 row matrix, padding with the given value.
    pub fn extended_row(self, v: T) -> Matrix<T> {
        Matrix::from_parts(5, 1, vec![self.x, self.y, self.z, self.w, v])
    }

    /// Converts to a 5x1 column matrix, padding with the given value.
    pub fn extended_column(self, v: T) -> Matrix<T> {
        Matrix::from_parts(1, 5, vec![self.x, self.y, self.z, self.w, v])
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(array: [T; N]) -> Self {
        Self(array)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(vector: Vector<T, N>) -> Self {
        vector.0
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{N}(")?;
        for (i, comp) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{comp}")?;
        }
        f.write_str(")")
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{N}(")?;
        for (i, comp) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{comp:?}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn consts() {
        assert_eq!(Vec3::ZERO, vec3(0.0, 0.0, 0.0));
        assert_eq!(Vec2::ONE, vec2(1.0, 1.0));
        assert_eq!(Vec4::<i32>::W, vec4(0, 0, 0, 1));
        assert_eq!(Vec3::<i32>::X + Vec3::Y + Vec3::Z, Vec3::ONE);
    }

    #[test]
    fn splat_and_from_fn() {
        assert_eq!(Vec3::splat(7), vec3(7, 7, 7));
        assert_eq!(Vec4::from_fn(|i| i * 2), vec4(0, 2, 4, 6));
    }

    #[test]
    fn array_conversions() {
        assert_eq!(Vec3::from([1, 2, 3]), vec3(1, 2, 3));
        assert_eq!(<[i32; 2]>::from(vec2(1, 2)), [1, 2]);
    }

    #[test]
    fn field_access() {
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!((v.x, v.y, v.z, v.w), (1, 2, 3, 4));
        v.z = 30;
        assert_eq!(v.as_array(), &[1, 2, 30, 4]);
        assert_eq!(v.into_array(), [1, 2, 30, 4]);
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3.0, 4.0).length_squared(), 25.0);
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec3(2.0, 3.0, 6.0).length(), 7.0);
    }

    #[test]
    fn normalized() {
        assert_approx_eq!(vec2(12.0, 0.0).normalized(), vec2(1.0, 0.0));
        let n = vec3(1.0, -2.0, 3.0).normalized();
        assert_approx_eq!(n.length(), 1.0);

        // The zero vector normalizes to NaNs.
        assert!(vec2(0.0_f64, 0.0).normalized().x.is_nan());
    }

    #[test]
    fn scaled_and_limited() {
        assert_eq!(vec2(1.0, -2.0).scaled(3.0), vec2(3.0, -6.0));

        let v = vec2(6.0, 8.0);
        assert_approx_eq!(v.limited_length(5.0, 0.0), vec2(3.0, 4.0));
        assert_approx_eq!(v.limited_length(100.0, 20.0), vec2(12.0, 16.0));
        assert_eq!(v.limited_length(100.0, 1.0), v);
    }

    #[test]
    fn clamped() {
        assert_eq!(
            vec3(-5.0, 0.5, 5.0).clamped(-1.0, 1.0),
            vec3(-1.0, 0.5, 1.0)
        );
    }

    #[test]
    fn dot_and_angle() {
        assert_eq!(vec2(1.0, 2.0).dot(vec2(3.0, 4.0)), 11.0);
        assert_approx_eq!(vec2(0.0, 3.0).angle_to(vec2(2.0, 0.0)), FRAC_PI_2);
        assert_approx_eq!(vec2(1.0, 1.0).angle(), FRAC_PI_4);
        assert_approx_eq!(vec2(5.0, 0.0).angle(), 0.0);
    }

    #[test]
    fn projection() {
        let v = vec2(3.0, 4.0);
        let onto = vec2(10.0, 0.0);
        assert_approx_eq!(v.projected_length(onto), 3.0);
        assert_approx_eq!(v.projected(onto), vec2(3.0, 0.0));
        assert_approx_eq!(v.rejected(onto), vec2(0.0, 4.0));
        assert_approx_eq!(v.projected(onto) + v.rejected(onto), v);
    }

    #[test]
    fn cross_product() {
        assert_eq!(Vec3::<i32>::X.crossed(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::<i32>::Y.crossed(Vec3::X), -Vec3::Z);
        let v = vec3(1.0, 2.0, 3.0);
        let w = vec3(-4.0, 5.0, 6.0);
        assert_approx_eq!(v.crossed(w).dot(v), 0.0);
        assert_approx_eq!(v.crossed(w).dot(w), 0.0);
    }

    #[test]
    fn shorten_extend() {
        assert_eq!(vec2(1, 2).shortened(), 1);
        assert_eq!(vec2(1, 2).extended(3), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).shortened(), vec2(1, 2));
        assert_eq!(vec3(1, 2, 3).extended(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).shortened(), vec3(1, 2, 3));
    }

    #[test]
    fn matrix_conversions() {
        assert_eq!(vec2(1, 2).to_row(), Matrix::from_rows([[1, 2]]));
        assert_eq!(vec3(1, 2, 3).to_column(), Matrix::from_rows([[1], [2], [3]]));
        assert_eq!(vec2(1, 2).to_row3(0), Matrix::from_rows([[1, 2, 0]]));
        assert_eq!(
            vec2(1, 2).to_column4(3, 4),
            Matrix::from_rows([[1], [2], [3], [4]])
        );
        assert_eq!(vec3(1, 2, 3).to_row4(9), Matrix::from_rows([[1, 2, 3, 9]]));
        assert_eq!(
            vec4(1, 2, 3, 4).extended_row(5),
            Matrix::from_rows([[1, 2, 3, 4, 5]])
        );
        assert_eq!(
            vec4(1, 2, 3, 4).extended_column(0),
            Matrix::from_rows([[1], [2], [3], [4], [0]])
        );
    }

    #[test]
    fn display() {
        assert_eq!(vec2(1.5, -2.0).to_string(), "Vec2(1.5, -2)");
        assert_eq!(format!("{:?}", vec3(1, 2, 3)), "Vec3(1, 2, 3)");
    }
}
