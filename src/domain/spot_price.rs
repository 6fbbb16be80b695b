//! Fixed-point spot price.

use core::fmt;

/// A spot price as an integer scaled by [`SpotPrice::SCALE`] (`10^18`).
///
/// The pool quotes `price(asset) = other_reserve * SCALE / own_reserve`,
/// so a value of `SCALE` means the two reserves are balanced. The zero
/// price is reserved for an empty own-side reserve, where no meaningful
/// quote exists.
///
/// Integer fixed point keeps the quote exact and host-independent; no
/// floating point is involved anywhere in the pricing path.
///
/// # Examples
///
/// ```
/// use basin_amm::domain::SpotPrice;
///
/// let par = SpotPrice::from_raw(SpotPrice::SCALE);
/// assert_eq!(par, SpotPrice::ONE);
/// assert!(!par.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct SpotPrice(u128);

impl SpotPrice {
    /// Fixed-point scaling factor: `10^18`.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// The zero price, returned for an empty reserve.
    pub const ZERO: Self = Self(0);

    /// The 1:1 price (`SCALE`).
    pub const ONE: Self = Self(Self::SCALE);

    /// Creates a `SpotPrice` from a raw scaled value.
    pub const fn from_raw(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the price is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for SpotPrice {
    /// Renders the price as a decimal with the integer and fractional
    /// parts split at the scale boundary, e.g. `1.500000000000000000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        write!(f, "{whole}.{frac:018}")
    }
}
