use soroban_sdk::contracterror;

/// Errors returned by pool entry points
///
/// A call that returns any of these left the pool state, the ticks and the
/// positions exactly as they were.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// Pool state read or mutated before `initialize`
    NotInitialized = 1,
    /// `initialize` called on an initialized pool
    AlreadyInitialized = 2,
    /// `tick_lower >= tick_upper`
    InvalidRange = 3,
    /// Liquidity amount out of bounds for the operation
    InvalidAmount = 4,
    /// Accumulated liquidity does not fit in an i128
    LiquidityOverflow = 5,
}
