use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

/// Trait for the element types stored in a [`crate::Matrix`] or [`crate::Vector`].
///
/// Implemented for every type with the arithmetic the containers need, so all primitive
/// numeric types qualify. Negation is required separately by the operations that use it.
pub trait Element:
    Clone
    + PartialEq
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl<T> Element for T where
    T: Clone
        + PartialEq
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}

/// Absolute difference of two values without requiring a signed type.
pub(crate) fn abs_diff<T>(a: &T, b: &T) -> T
where
    T: Element + PartialOrd,
{
    if a >= b {
        a.clone() - b.clone()
    } else {
        b.clone() - a.clone()
    }
}
