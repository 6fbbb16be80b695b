//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning checked operations
//! on [`Amount`] into [`Result`](crate::error::Result) values carrying a
//! [`PoolError`] with context, so transition code can propagate failures
//! with `?` instead of unwrapping.

use crate::domain::{Amount, Rounding};
use crate::error::PoolError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - No panics: every failure produces an `Err`.
/// - No saturation: clamped values hide accounting bugs, errors do not.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result would wrap below
    /// zero.
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_mul(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked division with an explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, PoolError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_add(other)
            .ok_or(PoolError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_sub(other)
            .ok_or(PoolError::Overflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_mul(other)
            .ok_or(PoolError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, PoolError> {
        self.checked_div(other, rounding)
            .ok_or(PoolError::Overflow("division by zero"))
    }
}
