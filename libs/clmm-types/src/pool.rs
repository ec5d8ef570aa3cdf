use soroban_sdk::contracttype;

/// Current pool state - stored in Instance storage for frequent access
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Current sqrt(price) as Q64.64
    pub sqrt_price_x64: i128,
    /// Current tick index
    pub current_tick: i32,
    /// Total liquidity currently in range
    pub liquidity: i128,
}

impl PoolState {
    pub fn new(sqrt_price_x64: i128, current_tick: i32) -> Self {
        Self {
            sqrt_price_x64,
            current_tick,
            liquidity: 0,
        }
    }

    /// True when `current_tick` lies in the half-open range `[tick_lower, tick_upper)`
    pub fn is_in_range(&self, tick_lower: i32, tick_upper: i32) -> bool {
        self.current_tick >= tick_lower && self.current_tick < tick_upper
    }
}
