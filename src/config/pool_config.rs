//! Construction-time pool configuration.

use crate::domain::{AssetId, AssetPair, Principal};
use crate::error::PoolError;
use crate::traits::SingleOperator;

/// Immutable parameters fixed when a pool is created: the two asset
/// roles and the operator principal.
///
/// Reserves are not part of the configuration; every pool starts empty
/// and is funded through `add_liquidity`.
///
/// # Validation
///
/// Both asset identifiers must be non-null and distinct. Validation
/// happens at construction and again in [`PoolConfig::validate`], which
/// engine construction calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    asset_a: AssetId,
    asset_b: AssetId,
    operator: Principal,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if the asset identifiers are
    /// equal or either is null.
    pub fn new(
        asset_a: AssetId,
        asset_b: AssetId,
        operator: Principal,
    ) -> Result<Self, PoolError> {
        let config = Self {
            asset_a,
            asset_b,
            operator,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if the asset identifiers are
    /// equal or either is null.
    pub fn validate(&self) -> Result<(), PoolError> {
        AssetPair::new(self.asset_a, self.asset_b).map(|_| ())
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

    /// Returns the operator principal.
    #[must_use]
    pub const fn operator(&self) -> Principal {
        self.operator
    }

    /// Builds the validated [`AssetPair`] for this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] under the same conditions as
    /// [`PoolConfig::validate`].
    pub fn pair(&self) -> Result<AssetPair, PoolError> {
        AssetPair::new(self.asset_a, self.asset_b)
    }

    /// Builds the standard single-operator authority for this
    /// configuration.
    #[must_use]
    pub const fn authority(&self) -> SingleOperator {
        SingleOperator::new(self.operator)
    }
}
