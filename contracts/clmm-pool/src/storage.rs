use clmm_types::{PoolState, Position, PositionKey, TickInfo};
use soroban_sdk::{contracttype, Env};

// ============================================================================
// Storage layout
// ============================================================================
// - Pool state lives in Instance storage (read on every call)
// - Each tick and each position is a separate Persistent entry
// - add_liquidity touches 1 instance entry + 3 persistent entries
//   (lower tick, upper tick, position)
// - Nothing is ever removed: liquidity is add-only, so an entry that has
//   been written never becomes empty again
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Current pool state (Instance storage)
    State,
    /// Tick data: tick_index -> TickInfo (Persistent storage)
    Tick(i32),
    /// Position data: PositionKey -> Position (Persistent storage)
    Position(PositionKey),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === State ===

pub fn has_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::State)
}

/// `None` until the pool has been initialized
pub fn get_state(env: &Env) -> Option<PoolState> {
    extend_instance_ttl(env);
    env.storage().instance().get(&DataKey::State)
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Tick ===

/// `None` if the tick has never been referenced by a range
pub fn get_tick(env: &Env, tick: i32) -> Option<TickInfo> {
    env.storage().persistent().get(&DataKey::Tick(tick))
}

pub fn set_tick(env: &Env, tick: i32, info: &TickInfo) {
    let key = DataKey::Tick(tick);
    env.storage().persistent().set(&key, info);
    extend_persistent_ttl(env, &key);
}

#[cfg(test)]
pub fn has_tick(env: &Env, tick: i32) -> bool {
    env.storage().persistent().has(&DataKey::Tick(tick))
}

// === Position ===

/// `None` if the owner never added liquidity to this exact range
pub fn get_position(env: &Env, key: &PositionKey) -> Option<Position> {
    env.storage()
        .persistent()
        .get(&DataKey::Position(key.clone()))
}

pub fn set_position(env: &Env, key: &PositionKey, position: &Position) {
    let data_key = DataKey::Position(key.clone());
    env.storage().persistent().set(&data_key, position);
    extend_persistent_ttl(env, &data_key);
}

#[cfg(test)]
pub fn has_position(env: &Env, key: &PositionKey) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Position(key.clone()))
}
