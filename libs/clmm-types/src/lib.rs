#![no_std]

mod pool;
mod position;
mod tick;

pub use pool::*;
pub use position::*;
pub use tick::*;

/// Q64 constant (2^64) for fixed-point math
/// A `sqrt_price_x64` of `Q64` is a price of 1.0
pub const Q64: i128 = 1 << 64;
