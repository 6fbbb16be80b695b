//! Collaborator seams consumed by the pool engine.
//!
//! The engine owns reserve accounting and pricing; everything else is
//! reached through these traits: [`AssetLedger`] moves funds,
//! [`OperatorAuthority`] gates liquidity management, and [`EventSink`]
//! receives the audit facts.

mod asset_ledger;
mod authority;
mod event_sink;

pub use asset_ledger::AssetLedger;
pub use authority::{OperatorAuthority, SingleOperator};
pub use event_sink::{EventSink, MemorySink, NullSink};
