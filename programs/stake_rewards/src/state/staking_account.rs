use anchor_lang::prelude::*;

use crate::constants::MAX_REWARD_RATE;
use crate::error::StakeError;

/// Staking pool account of the `stake_tokens` program.
/// PDA: [admin, "staking_account"]
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StakingAccount {
    /// Pool admin; also owns the pool's token account
    pub admin: Pubkey,

    /// Annual reward rate in whole percent (0-100)
    pub reward_rate: u8,

    /// PDA bump seed
    pub bump: u8,

    /// Mint of the only token this pool accepts
    pub token_mint: Pubkey,

    /// Reward tokens funded by the admin and not yet paid out
    pub admin_reward_amount: u64,

    /// Minimum staking duration in seconds before a regular redeem
    pub min_staking_duration: i64,
}

impl StakingAccount {
    pub const LEN: usize = 8 + 32 + 1 + 1 + 32 + 8 + 8;

    /// Validated pool parameters.
    ///
    /// # Errors
    /// Returns `InvalidState` if the stored rate exceeds 100% or the
    /// minimum duration is negative.
    pub fn pool_config(&self) -> Result<PoolConfig> {
        PoolConfig::new(self.reward_rate, self.min_staking_duration)
    }
}

/// Admin-set parameters of a staking pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolConfig {
    pub annual_rate_percent: u8,
    pub min_staking_duration_seconds: u64,
}

impl PoolConfig {
    pub fn new(annual_rate_percent: u8, min_staking_duration_seconds: i64) -> Result<Self> {
        require!(
            annual_rate_percent <= MAX_REWARD_RATE,
            StakeError::InvalidState
        );
        require!(
            min_staking_duration_seconds >= 0,
            StakeError::InvalidState
        );

        Ok(Self {
            annual_rate_percent,
            min_staking_duration_seconds: min_staking_duration_seconds as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::Discriminator;

    fn account(reward_rate: u8, min_staking_duration: i64) -> StakingAccount {
        StakingAccount {
            admin: Pubkey::new_unique(),
            reward_rate,
            bump: 254,
            token_mint: Pubkey::new_unique(),
            admin_reward_amount: 1_000,
            min_staking_duration,
        }
    }

    #[test]
    fn test_pool_config_from_account() {
        let config = account(5, 86_400).pool_config().unwrap();

        assert_eq!(config.annual_rate_percent, 5);
        assert_eq!(config.min_staking_duration_seconds, 86_400);
    }

    #[test]
    fn test_pool_config_rejects_out_of_range() {
        assert_eq!(
            account(101, 0).pool_config().unwrap_err(),
            StakeError::InvalidState.into()
        );
        assert_eq!(
            account(5, -1).pool_config().unwrap_err(),
            StakeError::InvalidState.into()
        );
    }

    #[test]
    fn test_account_round_trip() {
        let original = account(10, 3_600);
        let mut data = Vec::new();
        original.try_serialize(&mut data).unwrap();

        assert_eq!(data.len(), StakingAccount::LEN);
        assert_eq!(&data[..8], &StakingAccount::DISCRIMINATOR);

        let decoded = StakingAccount::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded, original);
    }
}
