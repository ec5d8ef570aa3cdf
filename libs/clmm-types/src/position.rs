use soroban_sdk::{contracttype, Address};

/// Position key for pool-level tracking
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionKey {
    pub owner: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl PositionKey {
    pub fn new(owner: Address, tick_lower: i32, tick_upper: i32) -> Self {
        Self {
            owner,
            tick_lower,
            tick_upper,
        }
    }
}

/// Liquidity an owner holds in exactly one `[tick_lower, tick_upper)` range
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub liquidity: i128,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }
}
