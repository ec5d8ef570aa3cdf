use soroban_sdk::contracttype;

/// Aggregate liquidity stored for each referenced tick
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick as a range boundary
    pub liquidity_gross: i128,
    /// Net liquidity change when tick is crossed (+ when moving right)
    pub liquidity_net: i128,
}

impl TickInfo {
    pub fn new() -> Self {
        Self::default()
    }
}
