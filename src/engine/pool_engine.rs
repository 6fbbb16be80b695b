//! Operation orchestration over the pure pool state.
//!
//! [`PoolEngine`] wires the [`Pool`] state machine to its three
//! collaborators and enforces the transaction discipline for every
//! operation:
//!
//! 1. validate preconditions (authority, amounts),
//! 2. plan the next reserve state without mutating,
//! 3. run the external transfers,
//! 4. commit the planned state,
//! 5. emit the audit event.
//!
//! A transfer reporting failure aborts before step 4, so on any error
//! the observable reserve state equals the pre-call state. Nothing is
//! retried; the caller decides whether to resubmit.

use tracing::{debug, warn};

use crate::config::PoolConfig;
use crate::domain::{Amount, AssetId, Principal, SpotPrice, SwapOutcome, SwapSide};
use crate::engine::{Pool, PoolEvent};
use crate::error::{PoolError, Result};
use crate::traits::{AssetLedger, EventSink, OperatorAuthority};

/// The pool engine: reserve accounting and pricing over injected
/// collaborators.
///
/// Operations take `&mut self` and run to completion synchronously; the
/// host is expected to serialize callers, and the engine itself holds no
/// locks and never suspends.
///
/// # Type parameters
///
/// - `L`: the [`AssetLedger`] moving funds in and out of custody.
/// - `A`: the [`OperatorAuthority`] gating liquidity management.
/// - `S`: the [`EventSink`] receiving audit facts.
#[derive(Debug)]
pub struct PoolEngine<L, A, S> {
    pool: Pool,
    ledger: L,
    authority: A,
    events: S,
}

impl<L, A, S> PoolEngine<L, A, S>
where
    L: AssetLedger,
    A: OperatorAuthority,
    S: EventSink,
{
    /// Creates an engine for a freshly configured, empty pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if the configuration's asset
    /// identifiers are equal or null.
    pub fn new(config: &PoolConfig, ledger: L, authority: A, events: S) -> Result<Self> {
        let pair = config.pair()?;
        Ok(Self {
            pool: Pool::new(pair),
            ledger,
            authority,
            events,
        })
    }

    /// Returns the pool state for inspection.
    #[must_use]
    pub const fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Returns the event sink for inspection.
    #[must_use]
    pub const fn event_sink(&self) -> &S {
        &self.events
    }

    /// Returns the asset ledger for inspection.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Deposits `amount_a` and `amount_b` into the pool's reserves,
    /// pulling both legs from `caller`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Unauthorized`] if `caller` is not the operator.
    /// - [`PoolError::ZeroAmount`] if either amount is zero.
    /// - [`PoolError::Overflow`] if a reserve addition would wrap.
    /// - [`PoolError::TransferFailed`] if the ledger refuses either leg.
    pub fn add_liquidity(
        &mut self,
        caller: Principal,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<()> {
        if !self.authority.is_operator(&caller) {
            return Err(PoolError::Unauthorized);
        }
        let (next_a, next_b) = self.pool.plan_deposit(amount_a, amount_b)?;

        let pair = *self.pool.pair();
        if !self.ledger.transfer_from(pair.asset_a(), caller, amount_a) {
            warn!(provider = %caller, "liquidity deposit aborted on asset A leg");
            return Err(PoolError::TransferFailed("asset A deposit was not honored"));
        }
        if !self.ledger.transfer_from(pair.asset_b(), caller, amount_b) {
            warn!(provider = %caller, "liquidity deposit aborted on asset B leg");
            return Err(PoolError::TransferFailed("asset B deposit was not honored"));
        }

        self.pool.commit(next_a, next_b);
        debug!(
            provider = %caller,
            amount_a = %amount_a,
            amount_b = %amount_b,
            "liquidity added"
        );
        self.events.record(PoolEvent::LiquidityAdded {
            provider: caller,
            amount_a,
            amount_b,
        });
        Ok(())
    }

    /// Withdraws `amount_a` and `amount_b` from the pool's reserves,
    /// pushing both legs to `caller`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Unauthorized`] if `caller` is not the operator.
    /// - [`PoolError::ZeroAmount`] if either amount is zero.
    /// - [`PoolError::InsufficientLiquidity`] if either amount exceeds
    ///   its reserve.
    /// - [`PoolError::TransferFailed`] if the ledger refuses either leg.
    pub fn remove_liquidity(
        &mut self,
        caller: Principal,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<()> {
        if !self.authority.is_operator(&caller) {
            return Err(PoolError::Unauthorized);
        }
        let (next_a, next_b) = self.pool.plan_withdraw(amount_a, amount_b)?;

        let pair = *self.pool.pair();
        if !self.ledger.transfer(pair.asset_a(), caller, amount_a) {
            warn!(provider = %caller, "liquidity withdrawal aborted on asset A leg");
            return Err(PoolError::TransferFailed(
                "asset A withdrawal was not honored",
            ));
        }
        if !self.ledger.transfer(pair.asset_b(), caller, amount_b) {
            warn!(provider = %caller, "liquidity withdrawal aborted on asset B leg");
            return Err(PoolError::TransferFailed(
                "asset B withdrawal was not honored",
            ));
        }

        self.pool.commit(next_a, next_b);
        debug!(
            provider = %caller,
            amount_a = %amount_a,
            amount_b = %amount_b,
            "liquidity removed"
        );
        self.events.record(PoolEvent::LiquidityRemoved {
            provider: caller,
            amount_a,
            amount_b,
        });
        Ok(())
    }

    /// Sells `amount_in` of asset A for asset B at the constant-product
    /// price.
    ///
    /// # Errors
    ///
    /// See [`swap`](Self::swap).
    pub fn swap_a_for_b(&mut self, caller: Principal, amount_in: Amount) -> Result<SwapOutcome> {
        self.swap(caller, SwapSide::AForB, amount_in)
    }

    /// Sells `amount_in` of asset B for asset A at the constant-product
    /// price.
    ///
    /// # Errors
    ///
    /// See [`swap`](Self::swap).
    pub fn swap_b_for_a(&mut self, caller: Principal, amount_in: Amount) -> Result<SwapOutcome> {
        self.swap(caller, SwapSide::BForA, amount_in)
    }

    /// Executes a swap in the given direction: pulls the input leg from
    /// `caller`, pushes the output leg back, and commits both reserve
    /// updates together.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if the opposite reserve is
    ///   empty, the input is too small to buy a single unit, or the
    ///   computed output would exceed the opposite reserve.
    /// - [`PoolError::Overflow`] if the input reserve would wrap.
    /// - [`PoolError::TransferFailed`] if the ledger refuses either leg.
    pub fn swap(
        &mut self,
        caller: Principal,
        side: SwapSide,
        amount_in: Amount,
    ) -> Result<SwapOutcome> {
        let plan = self.pool.plan_swap(side, amount_in)?;
        let pair = *self.pool.pair();
        let (asset_in, asset_out) = pair.oriented(side);

        if !self.ledger.transfer_from(asset_in, caller, amount_in) {
            warn!(trader = %caller, %side, "swap aborted on input leg");
            return Err(PoolError::TransferFailed("swap input was not honored"));
        }
        if !self.ledger.transfer(asset_out, caller, plan.amount_out) {
            warn!(trader = %caller, %side, "swap aborted on output leg");
            return Err(PoolError::TransferFailed("swap output was not honored"));
        }

        self.pool.commit(plan.reserve_a, plan.reserve_b);
        debug!(
            trader = %caller,
            %side,
            amount_in = %amount_in,
            amount_out = %plan.amount_out,
            "swap committed"
        );
        self.events.record(PoolEvent::Swapped {
            trader: caller,
            asset_in,
            asset_out,
            amount_in,
            amount_out: plan.amount_out,
        });
        SwapOutcome::new(asset_in, asset_out, amount_in, plan.amount_out)
    }

    /// Quotes a swap without executing it.
    ///
    /// # Errors
    ///
    /// Same as the pricing stage of [`swap`](Self::swap); no transfer
    /// errors are possible.
    pub fn quote(&self, side: SwapSide, amount_in: Amount) -> Result<Amount> {
        self.pool.quote(side, amount_in)
    }

    /// Returns the spot price of `asset` in units of the other asset,
    /// scaled by [`SpotPrice::SCALE`].
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAsset`] if `asset` is not part of the pool.
    /// - [`PoolError::Overflow`] if the scaled ratio exceeds `u128`.
    pub fn price(&self, asset: AssetId) -> Result<SpotPrice> {
        self.pool.spot_price(asset)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::traits::{MemorySink, SingleOperator};

    // -- test doubles ---------------------------------------------------------

    /// Ledger that honors transfers until a scripted call index, then
    /// refuses. Records honored legs so tests can assert on ordering.
    #[derive(Debug, Default)]
    struct ScriptedLedger {
        calls: usize,
        refuse_from: Option<usize>,
        pulls: Vec<(AssetId, Principal, Amount)>,
        pushes: Vec<(AssetId, Principal, Amount)>,
    }

    impl ScriptedLedger {
        fn accepting() -> Self {
            Self::default()
        }

        /// Refuses the `n`-th transfer call (0-based) and every later one.
        fn refusing_from(n: usize) -> Self {
            Self {
                refuse_from: Some(n),
                ..Self::default()
            }
        }

        fn honors(&mut self) -> bool {
            let ok = self.refuse_from.map_or(true, |n| self.calls < n);
            self.calls += 1;
            ok
        }
    }

    impl AssetLedger for ScriptedLedger {
        fn transfer_from(&mut self, asset: AssetId, owner: Principal, amount: Amount) -> bool {
            let ok = self.honors();
            if ok {
                self.pulls.push((asset, owner, amount));
            }
            ok
        }

        fn transfer(&mut self, asset: AssetId, recipient: Principal, amount: Amount) -> bool {
            let ok = self.honors();
            if ok {
                self.pushes.push((asset, recipient, amount));
            }
            ok
        }
    }

    // -- helpers --------------------------------------------------------------

    fn asset_a() -> AssetId {
        AssetId::from_bytes([1u8; 32])
    }

    fn asset_b() -> AssetId {
        AssetId::from_bytes([2u8; 32])
    }

    fn operator() -> Principal {
        Principal::from_bytes([10u8; 32])
    }

    fn trader() -> Principal {
        Principal::from_bytes([20u8; 32])
    }

    fn make_engine(
        ledger: ScriptedLedger,
    ) -> PoolEngine<ScriptedLedger, SingleOperator, MemorySink> {
        let Ok(config) = PoolConfig::new(asset_a(), asset_b(), operator()) else {
            panic!("expected valid config");
        };
        let Ok(engine) = PoolEngine::new(&config, ledger, config.authority(), MemorySink::new())
        else {
            panic!("expected valid engine");
        };
        engine
    }

    /// Engine pre-funded with (1000, 1000) through the operator.
    fn funded_engine() -> PoolEngine<ScriptedLedger, SingleOperator, MemorySink> {
        let mut engine = make_engine(ScriptedLedger::accepting());
        let Ok(()) = engine.add_liquidity(operator(), Amount::new(1_000), Amount::new(1_000))
        else {
            panic!("expected Ok");
        };
        engine
    }

    // -- construction ---------------------------------------------------------

    #[test]
    fn new_engine_starts_empty() {
        let engine = make_engine(ScriptedLedger::accepting());
        assert!(engine.pool().is_empty());
        assert!(engine.event_sink().is_empty());
    }

    // -- add_liquidity --------------------------------------------------------

    #[test]
    fn add_liquidity_updates_reserves_and_pulls_both_legs() {
        let mut engine = make_engine(ScriptedLedger::accepting());
        let Ok(()) = engine.add_liquidity(operator(), Amount::new(1_000), Amount::new(2_000))
        else {
            panic!("expected Ok");
        };

        assert_eq!(
            engine.pool().reserves(),
            (Amount::new(1_000), Amount::new(2_000))
        );
        assert_eq!(
            engine.ledger.pulls,
            vec![
                (asset_a(), operator(), Amount::new(1_000)),
                (asset_b(), operator(), Amount::new(2_000)),
            ]
        );
        assert_eq!(
            engine.event_sink().events(),
            &[PoolEvent::LiquidityAdded {
                provider: operator(),
                amount_a: Amount::new(1_000),
                amount_b: Amount::new(2_000),
            }]
        );
    }

    #[test]
    fn add_liquidity_non_operator_rejected() {
        let mut engine = make_engine(ScriptedLedger::accepting());
        let result = engine.add_liquidity(trader(), Amount::new(1_000), Amount::new(1_000));
        assert_eq!(result, Err(PoolError::Unauthorized));
        assert!(engine.pool().is_empty());
        assert!(engine.ledger.pulls.is_empty());
        assert!(engine.event_sink().is_empty());
    }

    #[test]
    fn add_liquidity_zero_amount_rejected() {
        let mut engine = make_engine(ScriptedLedger::accepting());
        let result = engine.add_liquidity(operator(), Amount::ZERO, Amount::new(1_000));
        assert_eq!(result, Err(PoolError::ZeroAmount));
        assert!(engine.pool().is_empty());
    }

    #[test]
    fn add_liquidity_first_leg_refused_leaves_state() {
        let mut engine = make_engine(ScriptedLedger::refusing_from(0));
        let result = engine.add_liquidity(operator(), Amount::new(1_000), Amount::new(1_000));
        assert!(matches!(result, Err(PoolError::TransferFailed(_))));
        assert!(engine.pool().is_empty());
        assert!(engine.event_sink().is_empty());
    }

    #[test]
    fn add_liquidity_second_leg_refused_leaves_state() {
        let mut engine = make_engine(ScriptedLedger::refusing_from(1));
        let result = engine.add_liquidity(operator(), Amount::new(1_000), Amount::new(1_000));
        assert!(matches!(result, Err(PoolError::TransferFailed(_))));
        assert!(engine.pool().is_empty());
        assert!(engine.event_sink().is_empty());
    }

    // -- remove_liquidity -----------------------------------------------------

    #[test]
    fn remove_liquidity_updates_reserves_and_pushes_both_legs() {
        let mut engine = funded_engine();
        let Ok(()) = engine.remove_liquidity(operator(), Amount::new(400), Amount::new(600))
        else {
            panic!("expected Ok");
        };

        assert_eq!(
            engine.pool().reserves(),
            (Amount::new(600), Amount::new(400))
        );
        assert_eq!(
            engine.ledger.pushes,
            vec![
                (asset_a(), operator(), Amount::new(400)),
                (asset_b(), operator(), Amount::new(600)),
            ]
        );
        assert!(matches!(
            engine.event_sink().events()[1],
            PoolEvent::LiquidityRemoved { .. }
        ));
    }

    #[test]
    fn remove_liquidity_non_operator_rejected() {
        let mut engine = funded_engine();
        let result = engine.remove_liquidity(trader(), Amount::new(1), Amount::new(1));
        assert_eq!(result, Err(PoolError::Unauthorized));
        assert_eq!(
            engine.pool().reserves(),
            (Amount::new(1_000), Amount::new(1_000))
        );
    }

    #[test]
    fn remove_liquidity_beyond_reserve_rejected() {
        let mut engine = funded_engine();
        let result = engine.remove_liquidity(operator(), Amount::new(1_001), Amount::new(1));
        assert_eq!(result, Err(PoolError::InsufficientLiquidity));
        assert_eq!(
            engine.pool().reserves(),
            (Amount::new(1_000), Amount::new(1_000))
        );
    }

    #[test]
    fn remove_liquidity_transfer_refused_leaves_state() {
        let mut engine = funded_engine();
        engine.ledger.refuse_from = Some(engine.ledger.calls);
        let result = engine.remove_liquidity(operator(), Amount::new(100), Amount::new(100));
        assert!(matches!(result, Err(PoolError::TransferFailed(_))));
        assert_eq!(
            engine.pool().reserves(),
            (Amount::new(1_000), Amount::new(1_000))
        );
    }

    // -- swap -----------------------------------------------------------------

    #[test]
    fn swap_a_for_b_reference_scenario() {
        let mut engine = funded_engine();
        let Ok(outcome) = engine.swap_a_for_b(trader(), Amount::new(111)) else {
            panic!("expected Ok");
        };

        assert_eq!(outcome.amount_in(), Amount::new(111));
        assert_eq!(outcome.amount_out(), Amount::new(99));
        assert_eq!(outcome.asset_in(), asset_a());
        assert_eq!(outcome.asset_out(), asset_b());
        assert_eq!(
            engine.pool().reserves(),
            (Amount::new(1_111), Amount::new(901))
        );

        // Input pulled before output pushed.
        assert_eq!(
            engine.ledger.pulls.last(),
            Some(&(asset_a(), trader(), Amount::new(111)))
        );
        assert_eq!(
            engine.ledger.pushes.last(),
            Some(&(asset_b(), trader(), Amount::new(99)))
        );
        assert_eq!(
            engine.event_sink().events().last(),
            Some(&PoolEvent::Swapped {
                trader: trader(),
                asset_in: asset_a(),
                asset_out: asset_b(),
                amount_in: Amount::new(111),
                amount_out: Amount::new(99),
            })
        );
    }

    #[test]
    fn swap_b_for_a_mirrors() {
        let mut engine = funded_engine();
        let Ok(outcome) = engine.swap_b_for_a(trader(), Amount::new(111)) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.asset_in(), asset_b());
        assert_eq!(outcome.asset_out(), asset_a());
        assert_eq!(
            engine.pool().reserves(),
            (Amount::new(901), Amount::new(1_111))
        );
    }

    #[test]
    fn swap_on_empty_pool_rejected() {
        let mut engine = make_engine(ScriptedLedger::accepting());
        let result = engine.swap_a_for_b(trader(), Amount::new(100));
        assert_eq!(result, Err(PoolError::InsufficientLiquidity));
        assert!(engine.pool().is_empty());
    }

    #[test]
    fn swap_zero_input_rejected() {
        let mut engine = funded_engine();
        assert_eq!(
            engine.swap_a_for_b(trader(), Amount::ZERO),
            Err(PoolError::ZeroAmount)
        );
    }

    #[test]
    fn swap_input_leg_refused_leaves_state() {
        let mut engine = funded_engine();
        engine.ledger.refuse_from = Some(engine.ledger.calls);
        let result = engine.swap_a_for_b(trader(), Amount::new(111));
        assert!(matches!(result, Err(PoolError::TransferFailed(_))));
        assert_eq!(
            engine.pool().reserves(),
            (Amount::new(1_000), Amount::new(1_000))
        );
        assert_eq!(engine.event_sink().len(), 1); // only the funding event
    }

    #[test]
    fn swap_output_leg_refused_leaves_state() {
        let mut engine = funded_engine();
        engine.ledger.refuse_from = Some(engine.ledger.calls + 1);
        let result = engine.swap_a_for_b(trader(), Amount::new(111));
        assert!(matches!(result, Err(PoolError::TransferFailed(_))));
        assert_eq!(
            engine.pool().reserves(),
            (Amount::new(1_000), Amount::new(1_000))
        );
    }

    // -- quote & price --------------------------------------------------------

    #[test]
    fn quote_does_not_mutate_or_transfer() {
        let engine = funded_engine();
        let Ok(out) = engine.quote(SwapSide::AForB, Amount::new(111)) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(99));
        assert_eq!(
            engine.pool().reserves(),
            (Amount::new(1_000), Amount::new(1_000))
        );
        assert_eq!(engine.ledger.pulls.len(), 2); // funding legs only
        assert!(engine.ledger.pushes.is_empty());
    }

    #[test]
    fn price_of_both_assets() {
        let mut engine = make_engine(ScriptedLedger::accepting());
        let Ok(()) = engine.add_liquidity(operator(), Amount::new(1_000), Amount::new(2_000))
        else {
            panic!("expected Ok");
        };
        let Ok(price_a) = engine.price(asset_a()) else {
            panic!("expected Ok");
        };
        let Ok(price_b) = engine.price(asset_b()) else {
            panic!("expected Ok");
        };
        assert_eq!(price_a.get(), 2 * SpotPrice::SCALE);
        assert_eq!(price_b.get(), SpotPrice::SCALE / 2);
    }

    #[test]
    fn price_foreign_asset_rejected() {
        let engine = funded_engine();
        let result = engine.price(AssetId::from_bytes([99u8; 32]));
        assert!(matches!(result, Err(PoolError::InvalidAsset(_))));
    }

    #[test]
    fn price_on_empty_pool_is_zero() {
        let engine = make_engine(ScriptedLedger::accepting());
        let Ok(price) = engine.price(asset_a()) else {
            panic!("expected Ok");
        };
        assert!(price.is_zero());
    }
}
