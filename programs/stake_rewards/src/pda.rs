//! Program-derived addresses of the `stake_tokens` program.
//!
//! Seed order matters: the owning key comes first, the literal tag second.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::*;

/// Staking pool PDA for `admin`.
pub fn find_staking_account_address(admin: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[admin.as_ref(), STAKING_ACCOUNT_SEED], program_id)
}

/// Stake account PDA for `user`.
pub fn find_user_stake_address(user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[user.as_ref(), USER_STAKE_SEED], program_id)
}

/// Token account holding a wallet's balance of `mint`.
pub fn token_account_address(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(wallet, mint)
}
