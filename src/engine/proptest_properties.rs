//! Property-based tests for the reserve state machine.
//!
//! Four properties over randomized reserves and inputs:
//!
//! 1. **Invariant preservation**: `reserve_a * reserve_b` never
//!    decreases across a swap.
//! 2. **Round-trip loss**: swapping A→B and feeding the proceeds back
//!    B→A never returns more A than was put in.
//! 3. **Price reciprocity**: `price(A) * price(B)` stays within floor
//!    rounding of `SCALE²`.
//! 4. **Deposit/withdraw accounting**: reserves equal the running net
//!    of committed amounts.

use ethnum::U256;
use proptest::prelude::*;

use crate::domain::{Amount, AssetId, AssetPair, SpotPrice, SwapSide};
use crate::engine::Pool;
use crate::math::full_product;

fn asset(byte: u8) -> AssetId {
    AssetId::from_bytes([byte; 32])
}

fn make_pool(ra: u128, rb: u128) -> Pool {
    let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
        panic!("valid pair");
    };
    let mut pool = Pool::new(pair);
    pool.commit(Amount::new(ra), Amount::new(rb));
    pool
}

/// Reserves kept in a mid range so quotes neither vanish nor overflow.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000u128
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000u128
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_swap_never_decreases_invariant(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in amount_strategy(),
    ) {
        let mut pool = make_pool(ra, rb);
        let k_before = full_product(pool.reserve_a(), pool.reserve_b());

        let Ok(plan) = pool.plan_swap(SwapSide::AForB, Amount::new(amount_in)) else {
            // Dust input or overflow; nothing committed, nothing to check.
            return Ok(());
        };
        pool.commit(plan.reserve_a, plan.reserve_b);

        let k_after = full_product(pool.reserve_a(), pool.reserve_b());
        prop_assert!(
            k_after >= k_before,
            "invariant decreased: {k_before} -> {k_after}"
        );
    }

    #[test]
    fn prop_round_trip_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in amount_strategy(),
    ) {
        let mut pool = make_pool(ra, rb);

        let Ok(forward) = pool.plan_swap(SwapSide::AForB, Amount::new(amount_in)) else {
            return Ok(());
        };
        pool.commit(forward.reserve_a, forward.reserve_b);

        let Ok(back) = pool.plan_swap(SwapSide::BForA, forward.amount_out) else {
            return Ok(());
        };

        prop_assert!(
            back.amount_out.get() <= amount_in,
            "round trip profited: in={} out={}",
            amount_in,
            back.amount_out
        );
    }

    #[test]
    fn prop_price_reciprocity(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let Ok(price_a) = pool.spot_price(asset(1)) else {
            panic!("price(A) on funded pool");
        };
        let Ok(price_b) = pool.spot_price(asset(2)) else {
            panic!("price(B) on funded pool");
        };

        let product = full_product(
            Amount::new(price_a.get()),
            Amount::new(price_b.get()),
        );
        let scale_sq = full_product(
            Amount::new(SpotPrice::SCALE),
            Amount::new(SpotPrice::SCALE),
        );

        prop_assert!(product <= scale_sq);
        // Each factor loses less than one unit to floor rounding.
        let bound = U256::from(price_a.get()) + U256::from(price_b.get()) + U256::from(2u128);
        prop_assert!(
            scale_sq - product <= bound,
            "prices drifted: {} * {} vs SCALE^2",
            price_a.get(),
            price_b.get()
        );
    }

    #[test]
    fn prop_deposit_withdraw_accounting(
        deposits in prop::collection::vec((amount_strategy(), amount_strategy()), 1..8),
        withdraw_divisor in 2u128..10u128,
    ) {
        let mut pool = make_pool(0, 0);
        let mut net_a = 0u128;
        let mut net_b = 0u128;

        for (da, db) in &deposits {
            let Ok((next_a, next_b)) = pool.plan_deposit(Amount::new(*da), Amount::new(*db))
            else {
                panic!("deposit within range must plan");
            };
            pool.commit(next_a, next_b);
            net_a += da;
            net_b += db;
        }

        let wa = (net_a / withdraw_divisor).max(1);
        let wb = (net_b / withdraw_divisor).max(1);
        let Ok((next_a, next_b)) = pool.plan_withdraw(Amount::new(wa), Amount::new(wb)) else {
            panic!("withdrawal below reserves must plan");
        };
        pool.commit(next_a, next_b);
        net_a -= wa;
        net_b -= wb;

        prop_assert_eq!(pool.reserve_a().get(), net_a);
        prop_assert_eq!(pool.reserve_b().get(), net_b);
    }
}
