//! Reward accrual for a stake position.
//!
//! Rewards are simple (non-compounding) interest:
//!
//! ```text
//! daily      = staked * rate / 100 / 365
//! cumulative = daily * elapsed_seconds / 86_400
//! ```
//!
//! Both values are kept as exact fractions over [`REWARD_DENOMINATOR`]
//! (`100 * 365 * 86_400`), so `staked * rate * 86_400` is the numerator of
//! the daily reward and `staked * rate * elapsed_seconds` the numerator of
//! the cumulative one. Nothing is rounded until a caller asks for whole
//! token units.

use std::fmt;

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::duration::elapsed_seconds;
use crate::error::StakeError;

/// An exact reward value, in the mint's smallest unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RewardAmount {
    numerator: u128,
}

impl RewardAmount {
    pub const ZERO: Self = Self { numerator: 0 };

    /// Denominator shared by every reward amount.
    pub const DENOMINATOR: u128 = REWARD_DENOMINATOR;

    pub const fn from_numerator(numerator: u128) -> Self {
        Self { numerator }
    }

    pub const fn from_units(units: u64) -> Self {
        Self {
            numerator: units as u128 * REWARD_DENOMINATOR,
        }
    }

    pub const fn numerator(&self) -> u128 {
        self.numerator
    }

    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Whole token units, rounded down.
    pub fn whole_units(&self) -> Result<u64> {
        let units = u64::try_from(self.numerator / REWARD_DENOMINATOR)
            .map_err(|_| StakeError::MathOverflow)?;

        Ok(units)
    }

    /// Lossy conversion for display.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / REWARD_DENOMINATOR as f64
    }

    pub fn checked_add(&self, other: RewardAmount) -> Option<RewardAmount> {
        self.numerator
            .checked_add(other.numerator)
            .map(Self::from_numerator)
    }
}

impl fmt::Display for RewardAmount {
    /// Renders the amount truncated to four decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.numerator / REWARD_DENOMINATOR;
        let fraction = (self.numerator % REWARD_DENOMINATOR) * 10_000 / REWARD_DENOMINATOR;
        write!(f, "{}.{:04}", whole, fraction)
    }
}

/// Reward accrued by a position at a given instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewardProjection {
    /// Reward earned per full day
    pub daily_reward: RewardAmount,

    /// Reward earned since the stake started
    pub cumulative_reward: RewardAmount,
}

/// Compute the reward accrued by `staked_amount` since `start_time`.
///
/// # Arguments
/// * `staked_amount` - Amount staked, in the mint's smallest unit
/// * `start_time` - Unix timestamp of the stake
/// * `annual_rate_percent` - Pool APY in whole percent (0-100)
/// * `now` - Unix timestamp to evaluate at
///
/// # Errors
/// - `InvalidState` if `start_time` is after `now` or the rate exceeds 100%
/// - `MathOverflow` if the elapsed span is too large to represent
pub fn compute_reward(
    staked_amount: u64,
    start_time: i64,
    annual_rate_percent: u8,
    now: i64,
) -> Result<RewardProjection> {
    // Nothing accrues on an empty position
    if staked_amount == 0 {
        return Ok(RewardProjection::default());
    }

    let elapsed = elapsed_seconds(start_time, now)?;
    require!(
        annual_rate_percent <= MAX_REWARD_RATE,
        StakeError::InvalidState
    );

    // Reward numerator accrued per second
    let per_second = (staked_amount as u128)
        .checked_mul(annual_rate_percent as u128)
        .ok_or(StakeError::MathOverflow)?;

    let daily = per_second
        .checked_mul(SECONDS_PER_DAY as u128)
        .ok_or(StakeError::MathOverflow)?;

    let cumulative = per_second
        .checked_mul(elapsed as u128)
        .ok_or(StakeError::MathOverflow)?;

    Ok(RewardProjection {
        daily_reward: RewardAmount::from_numerator(daily),
        cumulative_reward: RewardAmount::from_numerator(cumulative),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;
    const YEAR: i64 = 365 * SECONDS_PER_DAY;

    #[test]
    fn test_full_year_at_five_percent() {
        let projection = compute_reward(1_000, NOW - YEAR, 5, NOW).unwrap();

        assert_eq!(projection.cumulative_reward, RewardAmount::from_units(50));
        assert_eq!(projection.cumulative_reward.whole_units().unwrap(), 50);

        // 1000 * 0.05 / 365 = 0.13698...
        let daily = projection.daily_reward.to_f64();
        assert!((daily - 0.136_986_301).abs() < 1e-9);
        assert_eq!(projection.daily_reward.to_string(), "0.1369");
    }

    #[test]
    fn test_nothing_elapsed() {
        let projection = compute_reward(1_000, NOW, 5, NOW).unwrap();

        assert!(projection.cumulative_reward.is_zero());
        assert_eq!(projection.daily_reward.numerator(), 1_000 * 5 * 86_400);
    }

    #[test]
    fn test_future_start_is_invalid() {
        assert_eq!(
            compute_reward(1_000, NOW + 10, 5, NOW).unwrap_err(),
            StakeError::InvalidState.into()
        );
        assert_eq!(
            compute_reward(1, i64::MAX, 5, -10).unwrap_err(),
            StakeError::InvalidState.into()
        );
    }

    #[test]
    fn test_empty_position_accrues_nothing() {
        assert_eq!(
            compute_reward(0, NOW - YEAR, 5, NOW).unwrap(),
            RewardProjection::default()
        );
        // An empty position carries no start time worth validating
        assert_eq!(
            compute_reward(0, NOW + 10, 5, NOW).unwrap(),
            RewardProjection::default()
        );
    }

    #[test]
    fn test_zero_rate_accrues_nothing() {
        let projection = compute_reward(1_000, NOW - YEAR, 0, NOW).unwrap();
        assert!(projection.daily_reward.is_zero());
        assert!(projection.cumulative_reward.is_zero());
    }

    #[test]
    fn test_rate_above_hundred_is_invalid() {
        assert_eq!(
            compute_reward(1_000, NOW - YEAR, 101, NOW).unwrap_err(),
            StakeError::InvalidState.into()
        );
    }

    #[test]
    fn test_partial_days_are_not_truncated() {
        // Half a day at 100% on 365_000 units is 500 units
        let projection = compute_reward(365_000, NOW - SECONDS_PER_DAY / 2, 100, NOW).unwrap();
        assert_eq!(projection.cumulative_reward, RewardAmount::from_units(500));
        assert_eq!(projection.daily_reward, RewardAmount::from_units(1_000));
    }

    #[test]
    fn test_large_amounts_keep_precision() {
        // 10^15 units for one second at 7% must stay exact
        let amount = 1_000_000_000_000_000u64;
        let projection = compute_reward(amount, NOW - 1, 7, NOW).unwrap();

        assert_eq!(projection.cumulative_reward.numerator(), amount as u128 * 7);
        assert_eq!(
            compute_reward(amount, NOW - YEAR, 7, NOW)
                .unwrap()
                .cumulative_reward
                .whole_units()
                .unwrap(),
            70_000_000_000_000
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            compute_reward(u64::MAX, i64::MIN / 2, 100, i64::MAX / 2).unwrap_err(),
            StakeError::MathOverflow.into()
        );
    }

    #[test]
    fn test_reward_amount_display() {
        assert_eq!(RewardAmount::ZERO.to_string(), "0.0000");
        assert_eq!(RewardAmount::from_units(12).to_string(), "12.0000");
        assert_eq!(
            RewardAmount::from_numerator(REWARD_DENOMINATOR / 4).to_string(),
            "0.2500"
        );
    }

    #[test]
    fn test_reward_amount_checked_add() {
        let sum = RewardAmount::from_units(2)
            .checked_add(RewardAmount::from_units(3))
            .unwrap();
        assert_eq!(sum, RewardAmount::from_units(5));
        assert!(RewardAmount::from_numerator(u128::MAX)
            .checked_add(RewardAmount::from_numerator(1))
            .is_none());
    }
}
