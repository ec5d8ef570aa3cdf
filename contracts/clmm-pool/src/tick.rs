use crate::error::PoolError;
use crate::storage::{get_tick, set_tick};
use clmm_math::{add_delta, net_delta};
use clmm_types::TickInfo;
use soroban_sdk::Env;

/// Tick info for `tick`, zero-valued if no range has referenced it
///
/// A miss is not written back, so probing unreferenced ticks never grows
/// storage.
pub fn get(env: &Env, tick: i32) -> TickInfo {
    get_tick(env, tick).unwrap_or_default()
}

/// Add deltas to a tick's aggregates without touching storage
///
/// `liquidity_gross` must stay non-negative; `liquidity_net` may take
/// any sign. Fails with `LiquidityOverflow` if either field leaves i128.
pub fn apply(
    info: &TickInfo,
    liquidity_gross_delta: i128,
    liquidity_net_delta: i128,
) -> Result<TickInfo, PoolError> {
    let liquidity_gross = add_delta(info.liquidity_gross, liquidity_gross_delta)
        .ok_or(PoolError::LiquidityOverflow)?;
    let liquidity_net = info
        .liquidity_net
        .checked_add(liquidity_net_delta)
        .ok_or(PoolError::LiquidityOverflow)?;

    Ok(TickInfo {
        liquidity_gross,
        liquidity_net,
    })
}

/// Tick info after `amount` of liquidity is added to a range bounded by `tick`
///
/// Reads the current entry but does not write the result.
pub fn boundary_update(
    env: &Env,
    tick: i32,
    amount: i128,
    upper: bool,
) -> Result<TickInfo, PoolError> {
    let liquidity_net_delta = net_delta(amount, upper).ok_or(PoolError::LiquidityOverflow)?;
    apply(&get(env, tick), amount, liquidity_net_delta)
}

/// Atomic read-modify-write of a single tick
///
/// `add_liquidity` does not call this: it computes both ticks with
/// `boundary_update` and writes them with `set_tick` only after every other
/// value has been computed.
pub fn upsert(
    env: &Env,
    tick: i32,
    liquidity_gross_delta: i128,
    liquidity_net_delta: i128,
) -> Result<TickInfo, PoolError> {
    let info = apply(&get(env, tick), liquidity_gross_delta, liquidity_net_delta)?;
    set_tick(env, tick, &info);
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::has_tick;
    use soroban_sdk::Env;

    /// Helper to run test code within a contract context
    fn with_contract<F, R>(env: &Env, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let contract_id = env.register(crate::ClmmPool, ());
        env.as_contract(&contract_id, f)
    }

    // === get tests ===

    #[test]
    fn test_get_unreferenced_tick_is_zero() {
        let env = Env::default();
        with_contract(&env, || {
            let info = get(&env, 100);
            assert_eq!(info, TickInfo::new());
            assert_eq!(info.liquidity_gross, 0);
            assert_eq!(info.liquidity_net, 0);
        });
    }

    #[test]
    fn test_get_does_not_insert() {
        let env = Env::default();
        with_contract(&env, || {
            get(&env, -7);
            assert!(!has_tick(&env, -7));
        });
    }

    // === apply tests ===

    #[test]
    fn test_apply_adds_both_deltas() {
        let info = TickInfo {
            liquidity_gross: 1000,
            liquidity_net: -200,
        };
        let next = apply(&info, 500, 300).unwrap();
        assert_eq!(next.liquidity_gross, 1500);
        assert_eq!(next.liquidity_net, 100);
    }

    #[test]
    fn test_apply_gross_overflow() {
        let info = TickInfo {
            liquidity_gross: i128::MAX,
            liquidity_net: 0,
        };
        assert_eq!(apply(&info, 1, 1), Err(PoolError::LiquidityOverflow));
    }

    #[test]
    fn test_apply_net_overflow() {
        let info = TickInfo {
            liquidity_gross: 0,
            liquidity_net: i128::MIN + 1,
        };
        assert_eq!(apply(&info, 1, -2), Err(PoolError::LiquidityOverflow));
    }

    #[test]
    fn test_apply_rejects_negative_gross() {
        let info = TickInfo {
            liquidity_gross: 10,
            liquidity_net: 10,
        };
        assert_eq!(apply(&info, -11, 0), Err(PoolError::LiquidityOverflow));
    }

    // === upsert tests ===

    #[test]
    fn test_upsert_creates_tick() {
        let env = Env::default();
        with_contract(&env, || {
            let info = upsert(&env, 100, 1000, 1000).unwrap();
            assert_eq!(info.liquidity_gross, 1000);
            assert_eq!(info.liquidity_net, 1000);
            assert!(has_tick(&env, 100));
            assert_eq!(get(&env, 100), info);
        });
    }

    #[test]
    fn test_upsert_accumulates() {
        let env = Env::default();
        with_contract(&env, || {
            upsert(&env, -100, 1000, 1000).unwrap();
            upsert(&env, -100, 500, -500).unwrap();

            let info = get(&env, -100);
            assert_eq!(info.liquidity_gross, 1500);
            assert_eq!(info.liquidity_net, 500);
        });
    }

    #[test]
    fn test_upsert_overflow_leaves_tick_unchanged() {
        let env = Env::default();
        with_contract(&env, || {
            upsert(&env, 0, i128::MAX, i128::MAX).unwrap();

            assert_eq!(upsert(&env, 0, 1, 1), Err(PoolError::LiquidityOverflow));

            let info = get(&env, 0);
            assert_eq!(info.liquidity_gross, i128::MAX);
            assert_eq!(info.liquidity_net, i128::MAX);
        });
    }

    // === boundary_update tests ===

    #[test]
    fn test_boundary_update_lower_tick() {
        let env = Env::default();
        with_contract(&env, || {
            let info = boundary_update(&env, -10, 500, false).unwrap();
            assert_eq!(info.liquidity_gross, 500);
            assert_eq!(info.liquidity_net, 500, "Lower tick adds to liquidity_net");
            assert!(!has_tick(&env, -10), "boundary_update does not write");
        });
    }

    #[test]
    fn test_boundary_update_upper_tick() {
        let env = Env::default();
        with_contract(&env, || {
            let info = boundary_update(&env, 10, 500, true).unwrap();
            assert_eq!(info.liquidity_gross, 500);
            assert_eq!(
                info.liquidity_net, -500,
                "Upper tick subtracts from liquidity_net"
            );
        });
    }

    #[test]
    fn test_boundary_update_shared_tick_offsets_net() {
        let env = Env::default();
        with_contract(&env, || {
            // Tick 0 is the upper bound of one range...
            let info = boundary_update(&env, 0, 300, true).unwrap();
            set_tick(&env, 0, &info);

            // ...and the lower bound of another
            let info = boundary_update(&env, 0, 300, false).unwrap();
            assert_eq!(info.liquidity_gross, 600);
            assert_eq!(info.liquidity_net, 0);
        });
    }
}
