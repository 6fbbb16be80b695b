//! The pool's two asset roles.

use super::{AssetId, SwapSide};
use crate::error::PoolError;

/// The two distinct assets a pool trades, in their fixed A/B roles.
///
/// Unlike exchange-wide registries that sort pairs canonically, the A
/// and B roles here are assigned by the creator and kept for the pool's
/// lifetime: reserve accounting, swap directions, and emitted events all
/// refer to them.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(a, b).expect("distinct assets");
/// assert_eq!(pair.asset_a(), a);
/// assert_eq!(pair.asset_b(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a new `AssetPair` with `asset_a` and `asset_b` in the
    /// given roles.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if either identifier is null
    /// or both identify the same asset.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, PoolError> {
        if asset_a.is_null() || asset_b.is_null() {
            return Err(PoolError::InvalidAsset("asset identifier must be non-null"));
        }
        if asset_a == asset_b {
            return Err(PoolError::InvalidAsset("pool assets must be distinct"));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the asset in the A role.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the asset in the B role.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if the given asset is one of the pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Returns the `(input, output)` assets for a swap direction.
    #[must_use]
    pub const fn oriented(&self, side: SwapSide) -> (AssetId, AssetId) {
        match side {
            SwapSide::AForB => (self.asset_a, self.asset_b),
            SwapSide::BForA => (self.asset_b, self.asset_a),
        }
    }
}
