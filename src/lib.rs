//! A small linear algebra library for graphics-adjacent code.
//!
//! # Motivation
//!
//! This library provides the handful of types that 2D/3D transform code
//! actually needs (fixed-size vectors, a dynamically-sized matrix, and
//! quaternions) without pulling in a large general-purpose linear algebra
//! dependency. It exists for code that wants to build and multiply small
//! transform matrices, rotate things, and project vectors, and wants the
//! types in its public API to stay simple and stable.
//!
//! # Goals & Non-Goals
//!
//! - Vectors are fixed-size (2, 3 or 4 components) and rely on const generics
//!   for their dimension. The [`Matrix`] type is dynamically sized instead,
//!   since transform pipelines routinely mix 2x2, 3x3, 4x4 and row/column
//!   shapes at runtime.
//! - A single, row-major, unpadded data layout for matrices. No sparse
//!   representation, no SIMD path, no linear-system solving (only the
//!   determinant).
//! - Generic over the element type, defaulting to `f64`, but with no attempt
//!   to support non-[`Copy`] numeric types (eg. "big decimals").
//! - Shape violations are reported as [`MathError`] values rather than
//!   panics, so callers can validate dynamically-shaped data through the
//!   library itself.

pub mod approx;
mod error;
mod matrix;
mod quat;
mod traits;
mod vector;

pub use approx::{ApproxEq, DefaultTolerances};
pub use error::*;
pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
