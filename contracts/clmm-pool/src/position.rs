use crate::error::PoolError;
use crate::storage::{get_position, set_position};
use clmm_math::add_delta;
use clmm_types::{Position, PositionKey};
use soroban_sdk::Env;

/// Position for `key`, zero liquidity if the owner never added to this range
pub fn get(env: &Env, key: &PositionKey) -> Position {
    get_position(env, key).unwrap_or_default()
}

/// Validate tick parameters
pub fn validate_range(tick_lower: i32, tick_upper: i32) -> Result<(), PoolError> {
    if tick_lower >= tick_upper {
        return Err(PoolError::InvalidRange);
    }
    Ok(())
}

/// Position after adding `amount`, without touching storage
pub fn apply(position: &Position, amount: i128) -> Result<Position, PoolError> {
    if amount < 0 {
        return Err(PoolError::InvalidAmount);
    }
    let liquidity = add_delta(position.liquidity, amount).ok_or(PoolError::LiquidityOverflow)?;
    Ok(Position { liquidity })
}

/// Add `amount` to a position, creating it if absent
///
/// Returns the updated liquidity. Only the position entry is written;
/// ticks and pool state are the caller's concern. `add_liquidity` uses the
/// split `apply` / `set_position` path instead, so it can commit the
/// position together with the ticks.
pub fn add(env: &Env, key: &PositionKey, amount: i128) -> Result<i128, PoolError> {
    validate_range(key.tick_lower, key.tick_upper)?;
    let position = apply(&get(env, key), amount)?;
    set_position(env, key, &position);
    Ok(position.liquidity)
}
