//! # Basin AMM
//!
//! A two-asset constant-product pool engine with operator-gated
//! liquidity and open swaps.
//!
//! The crate owns exactly one hard problem: reserve accounting and
//! pricing for a single liquidity pool. Everything around it, moving
//! funds, authenticating callers, persisting audit events, is reached
//! through small traits the host implements, so the engine runs the same
//! way under a blockchain runtime, a matching service, or a test
//! harness.
//!
//! # Operations
//!
//! | Operation | Who | Effect |
//! |-----------|-----|--------|
//! | `add_liquidity` | operator | grow both reserves, pull both legs from caller |
//! | `remove_liquidity` | operator | shrink both reserves, push both legs to caller |
//! | `swap_a_for_b` / `swap_b_for_a` | anyone | constant-product exchange, no fee |
//! | `quote` | anyone | dry-run swap pricing, read-only |
//! | `price` | anyone | fixed-point spot price, read-only |
//!
//! Swaps price at `floor(reserve_out * amount_in / (reserve_in +
//! amount_in))` with the multiply carried at 256-bit width, which keeps
//! the product of the reserves from ever decreasing across a committed
//! swap.
//!
//! # Quick Start
//!
//! ```rust
//! use basin_amm::config::PoolConfig;
//! use basin_amm::domain::{Amount, AssetId, Principal};
//! use basin_amm::engine::PoolEngine;
//! use basin_amm::traits::{AssetLedger, MemorySink};
//!
//! // A ledger that always honors transfers; real hosts wire their own.
//! struct TrustingLedger;
//!
//! impl AssetLedger for TrustingLedger {
//!     fn transfer_from(&mut self, _: AssetId, _: Principal, _: Amount) -> bool {
//!         true
//!     }
//!     fn transfer(&mut self, _: AssetId, _: Principal, _: Amount) -> bool {
//!         true
//!     }
//! }
//!
//! let operator = Principal::from_bytes([1u8; 32]);
//! let config = PoolConfig::new(
//!     AssetId::from_bytes([10u8; 32]),
//!     AssetId::from_bytes([11u8; 32]),
//!     operator,
//! )
//! .expect("distinct assets");
//!
//! let mut engine =
//!     PoolEngine::new(&config, TrustingLedger, config.authority(), MemorySink::new())
//!         .expect("valid config");
//!
//! engine
//!     .add_liquidity(operator, Amount::new(1_000), Amount::new(1_000))
//!     .expect("operator funds the pool");
//!
//! let trader = Principal::from_bytes([2u8; 32]);
//! let outcome = engine
//!     .swap_a_for_b(trader, Amount::new(111))
//!     .expect("swap succeeds");
//! assert_eq!(outcome.amount_out(), Amount::new(99));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │     Host      │  implements AssetLedger / OperatorAuthority / EventSink
//! └──────┬───────┘
//!        │ operations
//!        ▼
//! ┌──────────────┐
//! │  PoolEngine   │  validate → plan → transfer → commit → emit
//! └──────┬───────┘
//!        │ plan / commit
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  reserves + constant-product transition math
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Amount, AssetId, Principal, SpotPrice, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`AssetId`](domain::AssetId), [`SpotPrice`](domain::SpotPrice), etc. |
//! | [`traits`] | Collaborator seams: [`AssetLedger`](traits::AssetLedger), [`OperatorAuthority`](traits::OperatorAuthority), [`EventSink`](traits::EventSink) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): asset roles and operator, validated once |
//! | [`engine`] | [`Pool`](engine::Pool) state machine, [`PoolEngine`](engine::PoolEngine) orchestration, [`PoolEvent`](engine::PoolEvent) facts |
//! | [`math`] | Checked arithmetic and 256-bit multiply-before-divide helpers |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod prelude;
pub mod traits;
