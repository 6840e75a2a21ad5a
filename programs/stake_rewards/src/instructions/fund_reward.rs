/// Fund reward instruction builder.
///
/// Moves reward tokens from the admin into the pool's token account.

use anchor_lang::prelude::*;
use anchor_lang::{Discriminator, InstructionData};
use anchor_lang::solana_program::instruction::Instruction;

use crate::config::StakeConfig;
use crate::constants::*;
use crate::error::StakeError;
use crate::pda;

/// Arguments of the `fund_reward` instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct FundRewardArgs {
    pub amount: u64,
}

impl Discriminator for FundRewardArgs {
    const DISCRIMINATOR: [u8; 8] = discriminator::FUND_REWARD;
}

impl InstructionData for FundRewardArgs {}

/// Accounts of the `fund_reward` instruction.
#[derive(Clone, Copy, Debug)]
pub struct FundRewardAccounts {
    pub staking_account: Pubkey,
    /// Pool token account receiving the rewards.
    pub staking_token_account: Pubkey,
    pub admin: Pubkey,
    /// Admin token account the rewards are taken from.
    pub admin_token_account: Pubkey,
    pub token_program: Pubkey,
}

impl ToAccountMetas for FundRewardAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.staking_account, false),
            AccountMeta::new(self.staking_token_account, false),
            AccountMeta::new(self.admin, true),
            AccountMeta::new(self.admin_token_account, false),
            AccountMeta::new_readonly(self.token_program, false),
        ]
    }
}

/// Build the instruction funding the pool's reward balance.
///
/// The pool holds its tokens in the admin's associated token account, so
/// source and destination token accounts coincide.
///
/// # Errors
/// Returns `ZeroAmount` if `amount` is zero.
pub fn fund_reward(config: &StakeConfig, token_mint: &Pubkey, amount: u64) -> Result<Instruction> {
    require!(amount > 0, StakeError::ZeroAmount);

    let (staking_account, _) = config.staking_account();
    let pool_token_account = pda::token_account_address(&config.pool_admin, token_mint);

    let accounts = FundRewardAccounts {
        staking_account,
        staking_token_account: pool_token_account,
        admin: config.pool_admin,
        admin_token_account: pool_token_account,
        token_program: anchor_spl::token::ID,
    };

    log::debug!("fund pool {} with {} tokens", staking_account, amount);

    Ok(Instruction {
        program_id: config.program_id,
        accounts: accounts.to_account_metas(None),
        data: FundRewardArgs { amount }.data(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_reward_instruction() {
        let config = StakeConfig::default().with_pool_admin(Pubkey::new_unique());
        let mint = Pubkey::new_unique();

        let ix = fund_reward(&config, &mint, 1_000).unwrap();

        let pool_token_account = pda::token_account_address(&config.pool_admin, &mint);
        assert_eq!(ix.accounts.len(), 5);
        assert_eq!(ix.accounts[0].pubkey, config.staking_account().0);
        assert_eq!(ix.accounts[1].pubkey, pool_token_account);
        assert_eq!(ix.accounts[2], AccountMeta::new(config.pool_admin, true));
        assert_eq!(ix.accounts[3].pubkey, pool_token_account);
        assert_eq!(
            ix.accounts[4],
            AccountMeta::new_readonly(anchor_spl::token::ID, false)
        );

        let mut expected = discriminator::FUND_REWARD.to_vec();
        expected.extend_from_slice(&1_000u64.to_le_bytes());
        assert_eq!(ix.data, expected);
    }

    #[test]
    fn test_fund_reward_rejects_zero() {
        assert_eq!(
            fund_reward(&StakeConfig::default(), &Pubkey::new_unique(), 0).unwrap_err(),
            StakeError::ZeroAmount.into()
        );
    }
}
