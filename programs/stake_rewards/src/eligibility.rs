//! Whether a stake may take the regular (non-forced) redeem path.

use anchor_lang::prelude::*;

use crate::duration::elapsed_seconds;
use crate::error::StakeError;

/// True once the stake has been held for at least the pool's minimum
/// duration. The boundary is inclusive.
///
/// # Errors
/// Returns `InvalidState` if `start_time` is after `now`.
pub fn can_redeem_without_penalty(
    start_time: i64,
    min_staking_duration_seconds: u64,
    now: i64,
) -> Result<bool> {
    Ok(elapsed_seconds(start_time, now)? >= min_staking_duration_seconds)
}

/// Unix timestamp at which a regular redeem becomes possible.
pub fn unlock_time(start_time: i64, min_staking_duration_seconds: u64) -> Result<i64> {
    let duration =
        i64::try_from(min_staking_duration_seconds).map_err(|_| StakeError::MathOverflow)?;

    let unlock = start_time
        .checked_add(duration)
        .ok_or(StakeError::MathOverflow)?;

    Ok(unlock)
}

/// Seconds left until a regular redeem is possible; zero once eligible.
pub fn seconds_until_unlock(
    start_time: i64,
    min_staking_duration_seconds: u64,
    now: i64,
) -> Result<u64> {
    let elapsed = elapsed_seconds(start_time, now)?;
    Ok(min_staking_duration_seconds.saturating_sub(elapsed))
}
