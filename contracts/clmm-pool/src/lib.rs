#![no_std]

mod error;
mod events;
pub mod invariants;
pub mod liquidity;
pub mod pool;
pub mod position;
mod storage;
pub mod tick;

pub use error::PoolError;

use clmm_types::{PoolState, Position, PositionKey, TickInfo};
use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct ClmmPool;

#[contractimpl]
impl ClmmPool {
    /// Initialize the pool
    ///
    /// Stores both values verbatim and sets active liquidity to zero.
    /// Fails with `AlreadyInitialized` on any call after the first.
    pub fn initialize(env: Env, sqrt_price_x64: i128, current_tick: i32) -> Result<(), PoolError> {
        pool::initialize(&env, sqrt_price_x64, current_tick)
    }

    /// Add liquidity to the `[tick_lower, tick_upper)` position of `owner`
    ///
    /// No tokens are transferred; only the liquidity accounting is updated.
    pub fn add_liquidity(
        env: Env,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        amount: i128,
    ) -> Result<(), PoolError> {
        owner.require_auth();
        liquidity::add_liquidity(&env, owner, tick_lower, tick_upper, amount)
    }

    // === View Functions ===

    /// Get current pool state
    pub fn get_pool_state(env: Env) -> Result<PoolState, PoolError> {
        pool::load(&env)
    }

    /// Get tick info, zero-valued for ticks no range references
    pub fn get_tick_info(env: Env, tick: i32) -> TickInfo {
        tick::get(&env, tick)
    }

    /// Get position info, zero liquidity if absent
    pub fn get_position(env: Env, owner: Address, tick_lower: i32, tick_upper: i32) -> Position {
        let key = PositionKey::new(owner, tick_lower, tick_upper);
        position::get(&env, &key)
    }

    pub fn is_initialized(env: Env) -> bool {
        pool::is_initialized(&env)
    }

    /// Get current sqrt price
    pub fn sqrt_price_x64(env: Env) -> Result<i128, PoolError> {
        Ok(pool::load(&env)?.sqrt_price_x64)
    }

    /// Get current tick
    pub fn current_tick(env: Env) -> Result<i32, PoolError> {
        Ok(pool::load(&env)?.current_tick)
    }

    /// Get current liquidity
    pub fn liquidity(env: Env) -> Result<i128, PoolError> {
        Ok(pool::load(&env)?.liquidity)
    }
}
