//! Audit facts emitted after committed operations.

use crate::domain::{Amount, AssetId, Principal};

/// One fact per committed operation, emitted to the host's
/// [`EventSink`](crate::traits::EventSink) after the reserve change is
/// final.
///
/// Events are observability only. The engine never reads them back, and
/// replaying them is not a supported way to reconstruct reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolEvent {
    /// The operator deposited liquidity into both reserves.
    LiquidityAdded {
        /// Principal that supplied the funds.
        provider: Principal,
        /// Units of asset A deposited.
        amount_a: Amount,
        /// Units of asset B deposited.
        amount_b: Amount,
    },
    /// The operator withdrew liquidity from both reserves.
    LiquidityRemoved {
        /// Principal that received the funds.
        provider: Principal,
        /// Units of asset A withdrawn.
        amount_a: Amount,
        /// Units of asset B withdrawn.
        amount_b: Amount,
    },
    /// A caller exchanged one asset for the other.
    Swapped {
        /// Principal that traded against the pool.
        trader: Principal,
        /// Asset sold to the pool.
        asset_in: AssetId,
        /// Asset bought from the pool.
        asset_out: AssetId,
        /// Units sold.
        amount_in: Amount,
        /// Units bought.
        amount_out: Amount,
    },
}
