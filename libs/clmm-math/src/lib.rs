#![no_std]

pub mod fixed_point;
pub mod liquidity_math;

pub use fixed_point::*;
pub use liquidity_math::*;
