use clmm_types::{PoolState, PositionKey};
use soroban_sdk::{Env, Symbol};

pub fn pool_initialized(env: &Env, state: &PoolState) {
    env.events().publish(
        (Symbol::new(env, "pool_initialized"),),
        (state.sqrt_price_x64, state.current_tick),
    );
}

/// `position_liquidity` and `pool_liquidity` are the values after the update
pub fn liquidity_added(
    env: &Env,
    key: &PositionKey,
    amount: i128,
    position_liquidity: i128,
    pool_liquidity: i128,
) {
    env.events().publish(
        (Symbol::new(env, "liquidity_added"), key.owner.clone()),
        (
            key.tick_lower,
            key.tick_upper,
            amount,
            position_liquidity,
            pool_liquidity,
        ),
    );
}
