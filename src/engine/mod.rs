//! The pool engine: reserve state machine, orchestration, and events.
//!
//! [`Pool`] holds the reserves and the transition math; [`PoolEngine`]
//! wraps it with the collaborator seams and the transaction discipline;
//! [`PoolEvent`] is the audit fact emitted after each committed
//! operation.

mod events;
mod pool_engine;
mod state;

#[cfg(test)]
mod proptest_properties;

pub use events::PoolEvent;
pub use pool_engine::PoolEngine;
pub use state::Pool;
