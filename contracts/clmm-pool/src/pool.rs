use crate::error::PoolError;
use crate::events;
use crate::storage::{get_state, has_state, set_state};
use clmm_types::PoolState;
use soroban_sdk::{log, Env};

/// Seed the pool state. Runs exactly once per contract instance.
///
/// `sqrt_price_x64` and `current_tick` are stored verbatim; the active
/// tick is not derived from the price and is never advanced afterwards.
pub fn initialize(env: &Env, sqrt_price_x64: i128, current_tick: i32) -> Result<(), PoolError> {
    if has_state(env) {
        return Err(PoolError::AlreadyInitialized);
    }

    let state = PoolState::new(sqrt_price_x64, current_tick);
    set_state(env, &state);

    log!(env, "pool initialized", sqrt_price_x64, current_tick);
    events::pool_initialized(env, &state);

    Ok(())
}

/// Current pool state, or `NotInitialized` before `initialize`
pub fn load(env: &Env) -> Result<PoolState, PoolError> {
    get_state(env).ok_or(PoolError::NotInitialized)
}

pub fn is_initialized(env: &Env) -> bool {
    has_state(env)
}
