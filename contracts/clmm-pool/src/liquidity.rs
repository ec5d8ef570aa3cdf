use crate::error::PoolError;
use crate::events;
use crate::invariants::{liquidity_non_negative, position_liquidity_valid, tick_gross_non_negative};
use crate::pool;
use crate::position;
use crate::storage::{set_position, set_state, set_tick};
use crate::tick;
use clmm_math::add_delta;
use clmm_types::{PoolState, Position, PositionKey, TickInfo};
use soroban_sdk::{log, Address, Env};

/// Every entry an `add_liquidity` call writes, computed before the first write
struct LiquidityChange {
    key: PositionKey,
    position: Position,
    lower: TickInfo,
    upper: TickInfo,
    state: PoolState,
    /// Pool state is only written if the range contains the current tick
    in_range: bool,
}

/// Add liquidity to the `[tick_lower, tick_upper)` position of `owner`
///
/// Updates the position, both boundary ticks and, if the current tick lies
/// in range, the pool's active liquidity. Either all of these are written
/// or none are.
pub fn add_liquidity(
    env: &Env,
    owner: Address,
    tick_lower: i32,
    tick_upper: i32,
    amount: i128,
) -> Result<(), PoolError> {
    let state = pool::load(env)?;

    position::validate_range(tick_lower, tick_upper)?;
    if amount <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    let key = PositionKey::new(owner, tick_lower, tick_upper);
    let change = prepare(env, state, key, amount)?;
    commit(env, &change);

    log!(
        env,
        "liquidity added",
        tick_lower,
        tick_upper,
        amount,
        change.state.liquidity
    );
    events::liquidity_added(
        env,
        &change.key,
        amount,
        change.position.liquidity,
        change.state.liquidity,
    );

    Ok(())
}

fn prepare(
    env: &Env,
    mut state: PoolState,
    key: PositionKey,
    amount: i128,
) -> Result<LiquidityChange, PoolError> {
    let position = position::apply(&position::get(env, &key), amount)?;

    let lower = tick::boundary_update(env, key.tick_lower, amount, false)?;
    let upper = tick::boundary_update(env, key.tick_upper, amount, true)?;

    // Liquidity outside the current tick stays dormant until a price
    // crossing applies the boundary's liquidity_net
    let in_range = state.is_in_range(key.tick_lower, key.tick_upper);
    if in_range {
        state.liquidity = add_delta(state.liquidity, amount).ok_or(PoolError::LiquidityOverflow)?;
    }

    Ok(LiquidityChange {
        key,
        position,
        lower,
        upper,
        state,
        in_range,
    })
}

fn commit(env: &Env, change: &LiquidityChange) {
    debug_assert!(position_liquidity_valid(&change.position));
    debug_assert!(tick_gross_non_negative(&change.lower));
    debug_assert!(tick_gross_non_negative(&change.upper));

    set_position(env, &change.key, &change.position);
    set_tick(env, change.key.tick_lower, &change.lower);
    set_tick(env, change.key.tick_upper, &change.upper);

    if change.in_range {
        debug_assert!(liquidity_non_negative(&change.state));
        set_state(env, &change.state);
    }
}
