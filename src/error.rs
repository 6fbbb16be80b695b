//! Unified error type for the pool engine.
//!
//! Every fallible operation across the crate returns [`PoolError`], so
//! consumers deal with a single error surface. All variants are terminal
//! for the operation that raised them: nothing is retried internally, and
//! a failed operation leaves the pool's reserves exactly as they were
//! before the call.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Errors produced by pool operations.
///
/// The static string payloads identify the failing computation for
/// diagnostics; they are not part of the error's identity beyond equality.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolError {
    /// The caller is not the pool operator.
    #[error("caller is not the pool operator")]
    Unauthorized,

    /// An amount that must be positive was zero.
    #[error("amount must be positive")]
    ZeroAmount,

    /// Reserves cannot satisfy the requested operation.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// An asset identifier failed validation or is not part of the pool.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// Checked arithmetic left the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// The asset ledger reported a failed transfer.
    #[error("asset transfer failed: {0}")]
    TransferFailed(&'static str),
}
