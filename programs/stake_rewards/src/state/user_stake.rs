use anchor_lang::prelude::*;

use crate::eligibility;
use crate::rewards::{self, RewardProjection};
use crate::state::PoolConfig;

/// Per-user stake account of the `stake_tokens` program.
/// PDA: [user, "user_stake"]
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UserStake {
    /// Amount staked, in the mint's smallest unit
    pub amount: u64,

    /// Unix timestamp (seconds) of the stake
    pub start_time: i64,
}

impl UserStake {
    pub const LEN: usize = 8 + 8 + 8;

    pub fn position(&self) -> StakePosition {
        StakePosition {
            staked_amount: self.amount,
            start_time: self.start_time,
        }
    }
}

/// How much a user has staked and since when.
///
/// A `staked_amount` of zero means there is no active stake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StakePosition {
    pub staked_amount: u64,
    pub start_time: i64,
}

impl StakePosition {
    pub fn is_empty(&self) -> bool {
        self.staked_amount == 0
    }

    /// Reward accrued by this position under `pool` as of `now`.
    pub fn project(&self, pool: &PoolConfig, now: i64) -> Result<RewardProjection> {
        rewards::compute_reward(
            self.staked_amount,
            self.start_time,
            pool.annual_rate_percent,
            now,
        )
    }

    pub fn can_redeem_without_penalty(&self, pool: &PoolConfig, now: i64) -> Result<bool> {
        eligibility::can_redeem_without_penalty(
            self.start_time,
            pool.min_staking_duration_seconds,
            now,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::RewardAmount;

    #[test]
    fn test_position_from_account() {
        let stake = UserStake {
            amount: 1_000,
            start_time: 1_700_000_000,
        };

        let position = stake.position();
        assert_eq!(position.staked_amount, 1_000);
        assert_eq!(position.start_time, 1_700_000_000);
        assert!(!position.is_empty());
        assert!(UserStake::default().position().is_empty());
    }

    #[test]
    fn test_position_projection() {
        let pool = PoolConfig::new(5, 86_400).unwrap();
        let now = 1_700_000_000;
        let position = StakePosition {
            staked_amount: 1_000,
            start_time: now - 365 * 86_400,
        };

        let projection = position.project(&pool, now).unwrap();
        assert_eq!(projection.cumulative_reward, RewardAmount::from_units(50));
        assert!(position.can_redeem_without_penalty(&pool, now).unwrap());
    }

    #[test]
    fn test_decode_rejects_other_account() {
        let mut data = Vec::new();
        UserStake {
            amount: 5,
            start_time: 10,
        }
        .try_serialize(&mut data)
        .unwrap();
        assert_eq!(data.len(), UserStake::LEN);

        let decoded = UserStake::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded.amount, 5);

        data[0] ^= 0xff;
        assert!(UserStake::try_deserialize(&mut data.as_slice()).is_err());
    }
}
