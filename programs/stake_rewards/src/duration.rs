//! Time helpers shared by the reward calculator and the eligibility checker.

use std::fmt;

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakeError;

/// Seconds elapsed between `start_time` and `now`.
///
/// # Errors
/// Returns `InvalidState` when `start_time` is after `now`.
pub fn elapsed_seconds(start_time: i64, now: i64) -> Result<u64> {
    require!(start_time <= now, StakeError::InvalidState);

    let elapsed = now
        .checked_sub(start_time)
        .ok_or(StakeError::MathOverflow)?;

    Ok(elapsed as u64)
}

/// Converts seconds into fractional days.
pub fn seconds_to_days(seconds: u64) -> f64 {
    seconds as f64 / SECONDS_PER_DAY as f64
}

/// Whole days, hours and minutes of a staking period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StakeDuration {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl StakeDuration {
    pub fn from_seconds(seconds: u64) -> Self {
        let day = SECONDS_PER_DAY as u64;
        let hour = SECONDS_PER_HOUR as u64;
        let minute = SECONDS_PER_MINUTE as u64;

        Self {
            days: seconds / day,
            hours: (seconds % day) / hour,
            minutes: (seconds % hour) / minute,
        }
    }

    /// Duration of a stake that started at `start_time`, as of `now`.
    pub fn since(start_time: i64, now: i64) -> Result<Self> {
        Ok(Self::from_seconds(elapsed_seconds(start_time, now)?))
    }
}

impl fmt::Display for StakeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m", self.days, self.hours, self.minutes)
    }
}
