/// Initialize instruction builder.
///
/// Creates the configured admin's staking pool.
///
/// ## Pre-flight Checks
/// - Reward rate within 0-100%
/// - Minimum staking duration non-negative
/// - Pool PDA and bump derived from the configured admin

use anchor_lang::prelude::*;
use anchor_lang::{Discriminator, InstructionData};
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::system_program;

use crate::config::StakeConfig;
use crate::constants::*;
use crate::error::StakeError;

/// Arguments of the `initialize` instruction, in wire order.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitializeArgs {
    pub bump: u8,
    pub token_mint: Pubkey,
    pub reward_rate: u8,
    pub min_staking_duration: i64,
}

impl Discriminator for InitializeArgs {
    const DISCRIMINATOR: [u8; 8] = discriminator::INITIALIZE;
}

impl InstructionData for InitializeArgs {}

/// Accounts of the `initialize` instruction.
#[derive(Clone, Copy, Debug)]
pub struct InitializeAccounts {
    /// The staking pool PDA to create.
    pub staking_account: Pubkey,

    /// The admin paying for and owning the pool.
    pub admin: Pubkey,

    /// System program for account creation.
    pub system_program: Pubkey,
}

impl ToAccountMetas for InitializeAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.staking_account, false),
            AccountMeta::new(self.admin, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Build the instruction creating the configured admin's pool.
///
/// # Arguments
/// * `config` - Program and pool admin
/// * `token_mint` - The only mint the pool will accept
/// * `reward_rate` - Annual reward rate in whole percent
/// * `min_staking_duration` - Seconds before a regular redeem is allowed
///
/// # Errors
/// - `InvalidRewardRate` if the rate exceeds 100%
/// - `InvalidState` if the minimum duration is negative
pub fn initialize(
    config: &StakeConfig,
    token_mint: Pubkey,
    reward_rate: u8,
    min_staking_duration: i64,
) -> Result<Instruction> {
    require!(
        reward_rate <= MAX_REWARD_RATE,
        StakeError::InvalidRewardRate
    );
    require!(min_staking_duration >= 0, StakeError::InvalidState);

    let (staking_account, bump) = config.staking_account();

    let accounts = InitializeAccounts {
        staking_account,
        admin: config.pool_admin,
        system_program: system_program::ID,
    };
    let args = InitializeArgs {
        bump,
        token_mint,
        reward_rate,
        min_staking_duration,
    };

    log::debug!(
        "initialize pool {} (rate {}%, min duration {}s)",
        staking_account,
        reward_rate,
        min_staking_duration
    );

    Ok(Instruction {
        program_id: config.program_id,
        accounts: accounts.to_account_metas(None),
        data: args.data(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_instruction() {
        let config = StakeConfig::default().with_pool_admin(Pubkey::new_unique());
        let mint = Pubkey::new_unique();

        let ix = initialize(&config, mint, 5, 86_400).unwrap();
        let (pool, bump) = config.staking_account();

        assert_eq!(ix.program_id, config.program_id);
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new(pool, false),
                AccountMeta::new(config.pool_admin, true),
                AccountMeta::new_readonly(system_program::ID, false),
            ]
        );

        let mut expected = discriminator::INITIALIZE.to_vec();
        expected.push(bump);
        expected.extend_from_slice(mint.as_ref());
        expected.push(5);
        expected.extend_from_slice(&86_400i64.to_le_bytes());
        assert_eq!(ix.data, expected);
    }

    #[test]
    fn test_initialize_rejects_invalid_parameters() {
        let config = StakeConfig::default();
        let mint = Pubkey::new_unique();

        assert_eq!(
            initialize(&config, mint, 101, 0).unwrap_err(),
            StakeError::InvalidRewardRate.into()
        );
        assert_eq!(
            initialize(&config, mint, 5, -1).unwrap_err(),
            StakeError::InvalidState.into()
        );
        assert!(initialize(&config, mint, 0, 0).is_ok());
    }
}
