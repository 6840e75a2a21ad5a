//! Stake instruction builder.
//!
//! Builds the transfer of a user's tokens into the pool.

use anchor_lang::prelude::*;
use anchor_lang::{Discriminator, InstructionData};
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::system_program;

use crate::config::StakeConfig;
use crate::constants::*;
use crate::error::StakeError;
use crate::pda;
use crate::state::StakePosition;

/// Arguments of the `stake` instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct StakeArgs {
    pub amount: u64,
    /// Start time override honored by test deployments; `None` uses the
    /// cluster clock.
    pub timestamp: Option<i64>,
}

impl Discriminator for StakeArgs {
    const DISCRIMINATOR: [u8; 8] = discriminator::STAKE;
}

impl InstructionData for StakeArgs {}

/// Accounts of the `stake` instruction.
#[derive(Clone, Copy, Debug)]
pub struct StakeAccounts {
    pub staking_account: Pubkey,
    /// User stake PDA, created by the program.
    pub user_stake: Pubkey,
    pub user: Pubkey,
    pub user_token_account: Pubkey,
    pub staking_token_account: Pubkey,
    pub token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for StakeAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.staking_account, false),
            AccountMeta::new(self.user_stake, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new(self.user_token_account, false),
            AccountMeta::new(self.staking_token_account, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Check a stake request against the user's current position.
///
/// # Arguments
/// * `existing` - The user's decoded position, if the stake account exists
/// * `amount` - Amount the user wants to stake
///
/// # Errors
/// - `ZeroAmount` if `amount` is zero
/// - `AlreadyStaked` if the user already has tokens staked
pub fn plan_stake(existing: Option<&StakePosition>, amount: u64) -> Result<()> {
    require!(amount > 0, StakeError::ZeroAmount);

    if let Some(position) = existing {
        if !position.is_empty() {
            log::warn!(
                "stake rejected: {} tokens already staked",
                position.staked_amount
            );
            return err!(StakeError::AlreadyStaked);
        }
    }

    Ok(())
}

/// Build the instruction staking `amount` of `token_mint` for `user`.
///
/// # Errors
/// Returns `ZeroAmount` if `amount` is zero.
pub fn stake(
    config: &StakeConfig,
    user: &Pubkey,
    token_mint: &Pubkey,
    amount: u64,
) -> Result<Instruction> {
    require!(amount > 0, StakeError::ZeroAmount);

    let (staking_account, _) = config.staking_account();
    let (user_stake, _) = config.user_stake(user);

    let accounts = StakeAccounts {
        staking_account,
        user_stake,
        user: *user,
        user_token_account: pda::token_account_address(user, token_mint),
        staking_token_account: pda::token_account_address(&config.pool_admin, token_mint),
        token_program: anchor_spl::token::ID,
        system_program: system_program::ID,
    };
    let args = StakeArgs {
        amount,
        timestamp: None,
    };

    log::debug!("stake {} tokens for {} into {}", amount, user, user_stake);

    Ok(Instruction {
        program_id: config.program_id,
        accounts: accounts.to_account_metas(None),
        data: args.data(),
    })
}
