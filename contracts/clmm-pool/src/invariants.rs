// ============================================================================
// INVARIANTS
// ============================================================================
//
// Predicates over the pool's data model. The engine asserts the liquidity
// invariants with debug_assert! before committing an update; the rest are
// checked by tests.
//
// 1. PRICE
//    - sqrt price is strictly positive (not enforced at initialize)
//
// 2. LIQUIDITY
//    - Pool, tick gross and position liquidity are never negative
//    - Pool liquidity moves by `amount` iff the range holds the current tick
//
// 3. TICKS
//    - Ranges are non-empty: tick_lower < tick_upper
//    - liquidity_net sums to zero across all referenced ticks
//
// ============================================================================

use clmm_math::is_valid_sqrt_price;
use clmm_types::{PoolState, Position, TickInfo};

// ============================================================================
// PRICE INVARIANTS
// ============================================================================

/// Invariant: sqrt_price_x64 > 0
pub fn price_positive(state: &PoolState) -> bool {
    is_valid_sqrt_price(state.sqrt_price_x64)
}

// ============================================================================
// LIQUIDITY INVARIANTS
// ============================================================================

/// Invariant: pool liquidity >= 0
pub fn liquidity_non_negative(state: &PoolState) -> bool {
    state.liquidity >= 0
}

/// Invariant: tick.liquidity_gross >= 0
///
/// `liquidity_gross >= |liquidity_net|` is NOT an invariant: a tick that
/// bounds several ranges accumulates gross from all of them while their
/// nets can offset.
pub fn tick_gross_non_negative(info: &TickInfo) -> bool {
    info.liquidity_gross >= 0
}

/// Invariant: position.liquidity >= 0
pub fn position_liquidity_valid(position: &Position) -> bool {
    position.liquidity >= 0
}

/// Invariant: pool liquidity changes by exactly `amount` when the range
/// contains the current tick, and not at all otherwise
pub fn pool_liquidity_delta_consistent(
    before: &PoolState,
    after: &PoolState,
    tick_lower: i32,
    tick_upper: i32,
    amount: i128,
) -> bool {
    let expected = if before.is_in_range(tick_lower, tick_upper) {
        before.liquidity.checked_add(amount)
    } else {
        Some(before.liquidity)
    };
    expected == Some(after.liquidity)
}

// ============================================================================
// TICK INVARIANTS
// ============================================================================

/// Invariant: tick_lower < tick_upper for a position
pub fn tick_range_valid(tick_lower: i32, tick_upper: i32) -> bool {
    tick_lower < tick_upper
}

/// Invariant: liquidity_net sums to zero across all ticks
///
/// Every range adds +L at its lower tick and -L at its upper tick.
/// Requires iterating all referenced ticks, so callers pass the total.
pub fn liquidity_net_sums_to_zero(total_liquidity_net: i128) -> bool {
    total_liquidity_net == 0
}
