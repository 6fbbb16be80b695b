//! Full-precision multiply-then-divide at 256-bit width.
//!
//! The swap formula and the fixed-point price quote both multiply two
//! `u128` values before dividing. Doing that at the working width would
//! either truncate (divide first) or spuriously overflow (multiply
//! first), so the intermediate product is carried in [`U256`], which
//! holds any `u128 * u128` product exactly.

use ethnum::U256;

use crate::domain::Amount;

/// Computes `floor(a * b / divisor)` without intermediate overflow.
///
/// Returns `None` if `divisor` is zero or the quotient does not fit in
/// `u128`.
#[must_use]
pub fn mul_div_floor(a: Amount, b: Amount, divisor: Amount) -> Option<Amount> {
    if divisor.is_zero() {
        return None;
    }
    let product = U256::from(a.get()) * U256::from(b.get());
    let quotient = product / U256::from(divisor.get());
    if quotient > U256::from(u128::MAX) {
        return None;
    }
    Some(Amount::new(quotient.as_u128()))
}

/// Computes the exact product `a * b` at 256-bit width.
///
/// Used for the constant-product invariant `k = reserve_a * reserve_b`,
/// which can exceed `u128` even though each reserve fits.
#[must_use]
pub fn full_product(a: Amount, b: Amount) -> U256 {
    U256::from(a.get()) * U256::from(b.get())
}
