//! Q64.64 sqrt price representation.
//!
//! A sqrt price is `sqrt(P) * 2^64` held in an i128. Nothing here converts
//! to or from floating point.

use clmm_types::Q64;

/// Encode an integer sqrt price as Q64.64
///
/// Returns `None` if `sqrt_price * 2^64` does not fit in an i128.
pub fn sqrt_price_x64_from_int(sqrt_price: i128) -> Option<i128> {
    sqrt_price.checked_mul(Q64)
}

/// True if the encoded sqrt price describes a real (strictly positive) price
pub fn is_valid_sqrt_price(sqrt_price_x64: i128) -> bool {
    sqrt_price_x64 > 0
}
