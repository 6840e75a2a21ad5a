//! Redeem instruction builder.
//!
//! Decides whether the force flag is needed and builds the withdrawal of
//! the user's stake and accrued reward.

use anchor_lang::prelude::*;
use anchor_lang::{Discriminator, InstructionData};
use anchor_lang::solana_program::instruction::Instruction;

use crate::config::StakeConfig;
use crate::constants::*;
use crate::error::StakeError;
use crate::pda;
use crate::rewards::RewardProjection;
use crate::state::{StakePosition, StakingAccount};

/// Arguments of the `redeem` instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RedeemArgs {
    pub force_redeem: bool,
}

impl Discriminator for RedeemArgs {
    const DISCRIMINATOR: [u8; 8] = discriminator::REDEEM;
}

impl InstructionData for RedeemArgs {}

/// Accounts of the `redeem` instruction.
#[derive(Clone, Copy, Debug)]
pub struct RedeemAccounts {
    pub staking_account: Pubkey,
    /// Owner of the pool token account; co-signs the payout.
    pub staking_token_account_owner: Pubkey,
    pub user_stake: Pubkey,
    pub user: Pubkey,
    pub user_token_account: Pubkey,
    pub staking_token_account: Pubkey,
    pub token_program: Pubkey,
}

impl ToAccountMetas for RedeemAccounts {
    fn to_account_metas(&self, _is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.staking_account, false),
            AccountMeta::new(self.staking_token_account_owner, true),
            AccountMeta::new(self.user_stake, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new(self.user_token_account, false),
            AccountMeta::new(self.staking_token_account, false),
            AccountMeta::new_readonly(self.token_program, false),
        ]
    }
}

/// Outcome of checking a redeem request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedeemPlan {
    /// Value of the force flag to send.
    pub force_redeem: bool,
    /// Whether the minimum staking duration has been met.
    pub eligible: bool,
    /// Reward accrued at planning time.
    pub projection: RewardProjection,
    /// Accrued reward in whole token units.
    pub reward_units: u64,
    /// Reward the program will transfer. A forced redeem pays whatever the
    /// pool holds when that is less than `reward_units`.
    pub payout_units: u64,
    /// Whether a non-zero payout is covered by the pool's funded balance.
    pub reward_funded: bool,
}

/// Check a redeem request and decide the force flag.
///
/// # Arguments
/// * `position` - The user's stake
/// * `pool` - The decoded staking pool
/// * `now` - Unix timestamp to evaluate at
/// * `force_requested` - Whether the user accepted an early, forced redeem
///
/// # Errors
/// - `NothingStaked` if the position is empty
/// - `ForceRedeemRequired` if the minimum duration is not met and force was
///   not requested
/// - `InvalidState` for inconsistent pool or position data
pub fn plan_redeem(
    position: &StakePosition,
    pool: &StakingAccount,
    now: i64,
    force_requested: bool,
) -> Result<RedeemPlan> {
    require!(!position.is_empty(), StakeError::NothingStaked);

    let pool_config = pool.pool_config()?;
    let eligible = position.can_redeem_without_penalty(&pool_config, now)?;

    if !eligible && !force_requested {
        log::warn!(
            "redeem rejected: minimum duration of {}s not met",
            pool_config.min_staking_duration_seconds
        );
        return err!(StakeError::ForceRedeemRequired);
    }

    let projection = position.project(&pool_config, now)?;
    let reward_units = projection.cumulative_reward.whole_units()?;
    let payout_units = if force_requested {
        reward_units.min(pool.admin_reward_amount)
    } else {
        reward_units
    };

    Ok(RedeemPlan {
        force_redeem: force_requested,
        eligible,
        projection,
        reward_units,
        payout_units,
        reward_funded: payout_units > 0 && payout_units <= pool.admin_reward_amount,
    })
}

/// Build the redeem instruction for `user` with the flag chosen by `plan`.
pub fn redeem(
    config: &StakeConfig,
    user: &Pubkey,
    token_mint: &Pubkey,
    plan: &RedeemPlan,
) -> Instruction {
    let (staking_account, _) = config.staking_account();
    let (user_stake, _) = config.user_stake(user);

    let accounts = RedeemAccounts {
        staking_account,
        staking_token_account_owner: config.pool_admin,
        user_stake,
        user: *user,
        user_token_account: pda::token_account_address(user, token_mint),
        staking_token_account: pda::token_account_address(&config.pool_admin, token_mint),
        token_program: anchor_spl::token::ID,
    };
    let args = RedeemArgs {
        force_redeem: plan.force_redeem,
    };

    log::debug!(
        "redeem {} for {} (force: {})",
        user_stake,
        user,
        plan.force_redeem
    );

    Instruction {
        program_id: config.program_id,
        accounts: accounts.to_account_metas(None),
        data: args.data(),
    }
}
