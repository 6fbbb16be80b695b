//! Asset transfer collaborator.

use crate::domain::{Amount, AssetId, Principal};

/// External ledger that moves asset units in and out of pool custody.
///
/// The engine never touches balances itself; it instructs the ledger and
/// interprets the boolean result. `false` and any host-level failure are
/// equivalent: the surrounding operation aborts with
/// [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed)
/// before the reserve change is committed, so a refusing ledger can never
/// desynchronize the pool's accounting.
///
/// Implementations are expected to be transactional with the host: a
/// transfer either fully happens or reports `false` without moving
/// anything.
pub trait AssetLedger {
    /// Moves `amount` of `asset` from `owner` into pool custody.
    ///
    /// Returns `true` if the transfer succeeded.
    fn transfer_from(&mut self, asset: AssetId, owner: Principal, amount: Amount) -> bool;

    /// Moves `amount` of `asset` out of pool custody to `recipient`.
    ///
    /// Returns `true` if the transfer succeeded.
    fn transfer(&mut self, asset: AssetId, recipient: Principal, amount: Amount) -> bool;
}
