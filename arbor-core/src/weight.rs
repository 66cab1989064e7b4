//! Numeric edge weights.
//!
//! Both engines only need a zero, checked addition, a total order and a
//! couple of validity checks, so [`Weight`] is implemented for the primitive
//! integer and floating-point types. Finite floats compare numerically, so
//! `-0.0` and `0.0` tie and fall through to the label tie-breaks.

use std::{cmp::Ordering, fmt};

/// A numeric edge weight.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use arbor_core::Weight;
///
/// assert_eq!(<u32 as Weight>::ZERO, 0);
/// assert_eq!(2.5_f64.weight_cmp(&1.0), Ordering::Greater);
/// assert!(Weight::is_negative(&-1_i64));
/// assert!(!Weight::is_finite(&f32::NAN));
/// assert_eq!(Weight::checked_add(200_u8, 100), None);
/// assert_eq!(Weight::checked_add(f64::MAX, f64::MAX), None);
/// ```
pub trait Weight: Copy + fmt::Debug + fmt::Display + PartialEq {
    /// Additive identity, used to seed totals and the frontier.
    const ZERO: Self;

    /// Adds two weights, or returns `None` when the sum does not fit the type.
    ///
    /// Float sums that leave the finite range count as overflow.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Total ordering used for the frontier and for sorting candidate edges.
    fn weight_cmp(&self, other: &Self) -> Ordering;

    /// Returns `false` for NaN and infinities.
    fn is_finite(&self) -> bool;

    /// Returns `true` when the weight is strictly below zero.
    fn is_negative(&self) -> bool;
}

macro_rules! impl_unsigned_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }

                fn weight_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn is_finite(&self) -> bool {
                    true
                }

                fn is_negative(&self) -> bool {
                    false
                }
            }
        )+
    };
}

macro_rules! impl_signed_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }

                fn weight_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn is_finite(&self) -> bool {
                    true
                }

                fn is_negative(&self) -> bool {
                    *self < 0
                }
            }
        )+
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0.0;

                fn checked_add(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }

                fn weight_cmp(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other).unwrap_or_else(|| self.total_cmp(other))
                }

                fn is_finite(&self) -> bool {
                    <$ty>::is_finite(*self)
                }

                fn is_negative(&self) -> bool {
                    *self < 0.0
                }
            }
        )+
    };
}

impl_unsigned_weight!(u8, u16, u32, u64, u128, usize);
impl_signed_weight!(i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);
