/// Number of ordered selections of `length` indices out of `pool_size`,
/// i.e. `pool_size! / (pool_size - length)!`
pub fn selection_count(pool_size: usize, length: usize) -> u128 {
    if length > pool_size {
        return 0;
    }
    (pool_size - length + 1..=pool_size).fold(1_u128, |acc, n| acc.saturating_mul(n as u128))
}

/// Total candidate equations for a pool:
/// `sum over k in 2..=n of n!/(n-k)! * 4^(k-1)`
pub fn candidate_count(pool_size: usize) -> u128 {
    (2..=pool_size)
        .map(|length| {
            let operators = u32::try_from(length - 1)
                .ok()
                .and_then(|exp| 4_u128.checked_pow(exp))
                .unwrap_or(u128::MAX);
            selection_count(pool_size, length).saturating_mul(operators)
        })
        .fold(0_u128, u128::saturating_add)
}
