//! Pure reserve state machine.
//!
//! [`Pool`] owns the two reserve counters and all transition math, and
//! nothing else: no transfers, no authorization, no logging. Transitions
//! are split into *plan* methods, which validate and compute the next
//! reserve state without mutating, and a single `commit`, which installs
//! a planned state. The [`PoolEngine`](crate::engine::PoolEngine) runs
//! external transfers between the two, so a failed transfer never leaves
//! a half-applied reserve update behind.
//!
//! # Swap pricing
//!
//! Constant product with no fee, floor rounding:
//!
//! ```text
//! amount_out = floor(reserve_out * amount_in / (reserve_in + amount_in))
//! ```
//!
//! The denominator uses the pre-swap input reserve. The multiply runs at
//! 256-bit width before the divide, so ordering never truncates and the
//! product never wraps. With floor rounding the product
//! `reserve_a * reserve_b` cannot decrease across a committed swap.

use crate::domain::{Amount, AssetId, AssetPair, SpotPrice, SwapSide};
use crate::error::{PoolError, Result};
use crate::math::{mul_div_floor, CheckedArithmetic};

/// A validated swap transition: the output owed to the caller and the
/// complete next reserve state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SwapPlan {
    pub(crate) amount_out: Amount,
    pub(crate) reserve_a: Amount,
    pub(crate) reserve_b: Amount,
}

/// The pool's persistent state: two reserves and the fixed asset roles.
///
/// A pool starts empty and only changes through committed transitions.
/// All arithmetic is checked; an operation that would wrap a reserve
/// fails with [`PoolError::Overflow`] and changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pool {
    pair: AssetPair,
    reserve_a: Amount,
    reserve_b: Amount,
}

impl Pool {
    /// Creates an empty pool for the given asset pair.
    pub const fn new(pair: AssetPair) -> Self {
        Self {
            pair,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
        }
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the current reserve of asset A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the current reserve of asset B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns both reserves as `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Returns `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// Plans a liquidity deposit, returning the next reserve state.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if either amount is zero.
    /// - [`PoolError::Overflow`] if a reserve addition would wrap.
    pub(crate) fn plan_deposit(
        &self,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<(Amount, Amount)> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        let next_a = self.reserve_a.safe_add(&amount_a)?;
        let next_b = self.reserve_b.safe_add(&amount_b)?;
        Ok((next_a, next_b))
    }

    /// Plans a liquidity withdrawal, returning the next reserve state.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if either amount is zero.
    /// - [`PoolError::InsufficientLiquidity`] if either amount exceeds
    ///   its reserve.
    pub(crate) fn plan_withdraw(
        &self,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<(Amount, Amount)> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        if amount_a > self.reserve_a || amount_b > self.reserve_b {
            return Err(PoolError::InsufficientLiquidity);
        }
        let next_a = self.reserve_a.safe_sub(&amount_a)?;
        let next_b = self.reserve_b.safe_sub(&amount_b)?;
        Ok((next_a, next_b))
    }

    /// Plans a swap, returning the output amount and next reserve state.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if the output reserve is
    ///   empty, the input is too small to buy a single unit, or the
    ///   computed output exceeds the output reserve.
    /// - [`PoolError::Overflow`] if the input reserve would wrap.
    pub(crate) fn plan_swap(&self, side: SwapSide, amount_in: Amount) -> Result<SwapPlan> {
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount);
        }

        let (reserve_in, reserve_out) = match side {
            SwapSide::AForB => (self.reserve_a, self.reserve_b),
            SwapSide::BForA => (self.reserve_b, self.reserve_a),
        };

        if reserve_out.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }

        let denominator = reserve_in
            .checked_add(&amount_in)
            .ok_or(PoolError::Overflow("swap input overflows reserve"))?;

        // Full-precision multiply before divide; the 256-bit intermediate
        // cannot wrap and the quotient is bounded by reserve_out.
        let amount_out = mul_div_floor(reserve_out, amount_in, denominator)
            .ok_or(PoolError::Overflow("swap output computation overflow"))?;

        if amount_out.is_zero() {
            // Input too small relative to reserves; it all rounds away.
            return Err(PoolError::InsufficientLiquidity);
        }
        if amount_out > reserve_out {
            // Unreachable under the formula; kept as a hard stop against
            // a reserve underflow ever being committed.
            return Err(PoolError::InsufficientLiquidity);
        }

        let next_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(PoolError::Overflow("output reserve underflow"))?;

        let (reserve_a, reserve_b) = match side {
            SwapSide::AForB => (denominator, next_out),
            SwapSide::BForA => (next_out, denominator),
        };

        Ok(SwapPlan {
            amount_out,
            reserve_a,
            reserve_b,
        })
    }

    /// Quotes a swap without touching state: the output the pool would
    /// pay right now for `amount_in`.
    ///
    /// Same math and same error conditions as the committed swap.
    ///
    /// # Errors
    ///
    /// See [`plan_swap`](Self::plan_swap).
    pub fn quote(&self, side: SwapSide, amount_in: Amount) -> Result<Amount> {
        self.plan_swap(side, amount_in).map(|plan| plan.amount_out)
    }

    /// Returns the spot price of `asset` in units of the other asset,
    /// scaled by [`SpotPrice::SCALE`].
    ///
    /// An empty own-side reserve quotes as [`SpotPrice::ZERO`].
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAsset`] if `asset` is not part of the pool.
    /// - [`PoolError::Overflow`] if the scaled ratio exceeds `u128`.
    pub fn spot_price(&self, asset: AssetId) -> Result<SpotPrice> {
        let (own, other) = if asset == self.pair.asset_a() {
            (self.reserve_a, self.reserve_b)
        } else if asset == self.pair.asset_b() {
            (self.reserve_b, self.reserve_a)
        } else {
            return Err(PoolError::InvalidAsset("asset is not part of this pool"));
        };

        if own.is_zero() {
            return Ok(SpotPrice::ZERO);
        }

        let scaled = mul_div_floor(other, Amount::new(SpotPrice::SCALE), own)
            .ok_or(PoolError::Overflow("scaled price exceeds amount range"))?;
        Ok(SpotPrice::from_raw(scaled.get()))
    }

    /// Installs a planned reserve state.
    ///
    /// Callers must only pass values produced by a `plan_*` method on
    /// the current state.
    pub(crate) fn commit(&mut self, reserve_a: Amount, reserve_b: Amount) {
        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
    }
}
