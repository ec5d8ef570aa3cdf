/// Add signed liquidity delta to non-negative liquidity
///
/// Returns `None` if the sum overflows i128 or would be negative.
pub fn add_delta(liquidity: i128, delta: i128) -> Option<i128> {
    let result = liquidity.checked_add(delta)?;
    if result < 0 {
        return None;
    }
    Some(result)
}

/// Signed contribution of a range boundary to a tick's `liquidity_net`
///
/// Crossing a lower bound upward activates the range (+amount), crossing an
/// upper bound upward deactivates it (-amount).
pub fn net_delta(amount: i128, upper: bool) -> Option<i128> {
    if upper {
        amount.checked_neg()
    } else {
        Some(amount)
    }
}
