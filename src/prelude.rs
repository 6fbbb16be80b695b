//! Convenience re-exports for common types and traits.
//!
//! A single import brings the working set into scope:
//!
//! ```rust
//! use basin_amm::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    Amount, AssetId, AssetPair, Principal, Rounding, SpotPrice, SwapOutcome, SwapSide,
};
pub use crate::engine::{Pool, PoolEngine, PoolEvent};
pub use crate::error::{PoolError, Result};
pub use crate::math::CheckedArithmetic;
pub use crate::traits::{
    AssetLedger, EventSink, MemorySink, NullSink, OperatorAuthority, SingleOperator,
};
