//! Fundamental domain value types for the pool engine.
//!
//! Newtypes with validated constructors enforce the invariants that the
//! rest of the crate relies on: amounts never wrap, asset pairs are
//! distinct and non-null, and a spot price is always an explicit
//! fixed-point quantity.

mod amount;
mod asset;
mod asset_pair;
mod principal;
mod rounding;
mod side;
mod spot_price;
mod swap_outcome;

pub use amount::Amount;
pub use asset::AssetId;
pub use asset_pair::AssetPair;
pub use principal::Principal;
pub use rounding::Rounding;
pub use side::SwapSide;
pub use spot_price::SpotPrice;
pub use swap_outcome::SwapOutcome;
