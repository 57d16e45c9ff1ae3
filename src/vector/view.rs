//! Field access for small vectors.
//!
//! [`Vector`]s of 2 to 4 elements dereference to these view structs, making
//! `v.x` style component access work without giving up the array layout.

use std::ops::{Deref, DerefMut};

use super::Vector;

/// View of a [`Vector`] with 2 elements.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
}

/// View of a [`Vector`] with 3 elements.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// View of a [`Vector`] with 4 elements.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

macro_rules! view {
    ($n:literal => $view:ident) => {
        impl<T> Deref for Vector<T, $n> {
            type Target = $view<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: `Vector` is `repr(transparent)` around `[T; N]`,
                // and the view is `repr(C)` with N fields of type `T`, so
                // the layouts match.
                unsafe { &*(self as *const Self).cast() }
            }
        }

        impl<T> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // Safety: see `deref`.
                unsafe { &mut *(self as *mut Self).cast() }
            }
        }
    };
}

view!(2 => XY);
view!(3 => XYZ);
view!(4 => XYZW);
