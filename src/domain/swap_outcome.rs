//! Outcome of a committed swap.

use core::fmt;

use super::{Amount, AssetId};
use crate::error::PoolError;

/// The committed result of a swap: what went in, what came out.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `asset_in != asset_out`.
///
/// Both hold by construction; a `SwapOutcome` only exists for a swap the
/// pool actually committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapOutcome {
    asset_in: AssetId,
    asset_out: AssetId,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAmount`] if either amount is zero and
    /// [`PoolError::InvalidAsset`] if both sides name the same asset.
    pub fn new(
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        amount_out: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() || amount_out.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        if asset_in == asset_out {
            return Err(PoolError::InvalidAsset(
                "swap input and output must be distinct assets",
            ));
        }
        Ok(Self {
            asset_in,
            asset_out,
            amount_in,
            amount_out,
        })
    }

    /// Returns the asset that was sold to the pool.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// Returns the asset that was bought from the pool.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Returns the input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {} {} -> {} {}",
            self.amount_in, self.asset_in, self.amount_out, self.asset_out
        )
    }
}
