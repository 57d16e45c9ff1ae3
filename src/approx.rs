//! Approximate equality.
//!
//! Transform pipelines accumulate floating-point error, so every comparison
//! in this library that cares about "the same value" goes through the
//! [`ApproxEq`] trait rather than `==`. The default tolerance for absolute
//! comparisons is `1e-4`.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of
/// their fields are.
///
/// For more information on the subtleties of approximate floating-point
/// number comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type representing the tolerance for absolute and relative comparisons.
    ///
    /// This is almost always either [`f32`] or [`f64`], depending on which one
    /// is the underlying primitive type being compared.
    type Tolerance: DefaultTolerances + Copy;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal
    /// to `abs_tolerance`, the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal
    /// to the largest of the two values times `rel_tolerance`, the values are
    /// considered to be equal.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;
}

/// Trait implemented for the `Tolerance` value of [`ApproxEq`] implementations.
///
/// This supplies the default tolerances used by
/// [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
pub trait DefaultTolerances {
    /// Default tolerance for *absolute comparisons* via [`ApproxEq::abs_diff_eq`].
    ///
    /// This is `1e-4`, the equality tolerance used throughout the library.
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for *relative comparisons* via [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = 1e-4;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = 1e-4;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
}

/// Assertion guard returned by the [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne] macros.
///
/// This type checks the assertion when dropped. Calling [`Asserter::abs`] or
/// [`Asserter::rel`] configures the comparison; if more than one is called,
/// the values are considered equal when *any* configured comparison considers
/// them equal. If neither is called, a default comparison is performed with
/// [`DEFAULT_ABS_TOLERANCE`] and [`DEFAULT_REL_TOLERANCE`].
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
        }
    }

    /// Perform an *absolute comparison* of the values with the given tolerance.
    ///
    /// This type of comparison is typically a good choice when comparing
    /// values that are relatively close to zero and potentially have opposing
    /// signs.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Perform a *relative comparison* of the values with the given tolerance.
    ///
    /// This type of comparison is a good default for numbers that aren't very
    /// close to zero. For numbers close to zero, a very large relative
    /// tolerance might be required (eg. any non-zero number will only compare
    /// equal to 0.0 with a relative tolerance of at least 1.0).
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    fn equal(&mut self) -> bool {
        if let Some(abs) = self.abs.take() {
            if T::abs_diff_eq(self.left, self.right, abs) {
                return true;
            }
        }
        if let Some(rel) = self.rel.take() {
            if T::rel_diff_eq(self.left, self.right, rel) {
                return true;
            }
        }

        false
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // NB: `#[track_caller]` does not work on destructors, so the location of
    // the assertion is captured in `new` and printed manually.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() {
            // Configure default behavior.
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        if (!equal && self.kind == AssertionKind::Eq) || (equal && self.kind == AssertionKind::Ne) {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using
/// [`ApproxEq`]).
///
/// This macro functions identically to [`assert_eq!`], except in that it uses
/// the [`ApproxEq`] trait to perform an approximate comparison, and returns an
/// [`Asserter`] that can be used to configure the exact type of comparison, as
/// well as the tolerance values to use.
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// Default approximate comparison:
///
/// ```
/// # use zmath::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// ```
///
/// Perform absolute and relative comparisons with custom tolerance values:
///
/// ```
/// # use zmath::*;
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal to each other
/// (using [`ApproxEq`]).
///
/// This macro functions identically to [`assert_ne!`], except in that it uses
/// the [`ApproxEq`] trait to perform an approximate comparison, and returns an
/// [`Asserter`] that can be used to configure the exact type of comparison, as
/// well as the tolerance values to use.
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use zmath::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "my message")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "my message");
    }

    #[test]
    fn default_tolerance() {
        // The library-wide default for absolute comparisons is 1e-4.
        assert_approx_eq!(1.0, 1.00005);
        assert_approx_ne!(1.0, 1.0002);
        assert_approx_eq!(0.0, 0.00005);
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).abs(0.0);
        assert_approx_eq!(-1.0, -1.0).rel(0.0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(0.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(0.0);
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(1.0);

        assert_approx_ne!(f32::NAN, 0.0).abs(1.0);
        assert_approx_ne!(f32::NAN, 0.0).rel(1.0);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).rel(0.0);
        assert_approx_ne!(f64::INFINITY, f64::MAX).abs(10000.0);
        assert_approx_ne!(f64::MAX, f64::INFINITY).rel(10000.0);
    }
}
