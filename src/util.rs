//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use cgmath::num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: std::cmp::PartialOrd> Interval<T> {
    /// Returns true if this interval overlaps with the other.
    /// Intervals which merely touch are considered to overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max < other.min || other.max < self.min)
    }
}

impl<T: Float> Interval<T> {
    /// Creates the smallest interval containing all the given values.
    pub fn hull<const N: usize>(values: [T; N]) -> Self {
        values.into_iter().fold(
            Self::new(T::infinity(), T::neg_infinity()),
            |acc, value| Self::new(T::min(acc.min, value), T::max(acc.max, value)),
        )
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}
