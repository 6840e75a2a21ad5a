//! Constants shared by the reward calculator, the address deriver and the
//! instruction builders.
//!
//! Seeds and discriminators mirror the account layout of the deployed
//! `stake_tokens` program and must not change independently of it.

/// Seed for deriving the staking pool PDA (combined with the admin key)
pub const STAKING_ACCOUNT_SEED: &[u8] = b"staking_account";

/// Seed for deriving user stake account PDAs (combined with the user key)
pub const USER_STAKE_SEED: &[u8] = b"user_stake";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Number of seconds in an hour
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Number of seconds in a minute
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Days in a reward year (simple interest, no leap years)
pub const DAYS_PER_YEAR: u64 = 365;

/// Reward rates are whole percentages
pub const PERCENT_DENOMINATOR: u64 = 100;

/// Maximum annual reward rate accepted by the pool (100%)
pub const MAX_REWARD_RATE: u8 = 100;

/// Denominator of every reward numerator:
/// percent * days per year * seconds per day.
///
/// With this denominator `staked * rate * elapsed_seconds` is the exact
/// accrued reward, so no step of the calculation rounds.
pub const REWARD_DENOMINATOR: u128 =
    PERCENT_DENOMINATOR as u128 * DAYS_PER_YEAR as u128 * SECONDS_PER_DAY as u128;

/// Admin of the deployed staking pool
pub mod pool_admin {
    use anchor_lang::prelude::*;

    declare_id!("5axWRVjKhJnXv7Va25kTBjXs3WRKfzXQRSdUxugK75e2");
}

/// Environment variable overriding the staking program id
pub const PROGRAM_ID_ENV: &str = "STAKE_PROGRAM_ID";

/// Environment variable overriding the pool admin
pub const POOL_ADMIN_ENV: &str = "STAKE_POOL_ADMIN";

/// Genesis hashes of the public clusters
pub mod genesis {
    pub const MAINNET_BETA: &str = "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdpKuc147dw2N9d";
    pub const DEVNET: &str = "EtWTRABZaYq6iMfeYKouRu166VU2xqa1wcaWoxPkrZBG";
    pub const TESTNET: &str = "4uhcVJyU9pJkvQyS88uRDiswHXSCkY3zQawwpjk2NsNY";
}

/// Instruction discriminators published in the program IDL
pub mod discriminator {
    pub const INITIALIZE: [u8; 8] = [175, 175, 109, 31, 13, 152, 155, 237];
    pub const FUND_REWARD: [u8; 8] = [188, 50, 249, 165, 93, 151, 38, 63];
    pub const STAKE: [u8; 8] = [206, 176, 202, 18, 200, 209, 179, 108];
    pub const REDEEM: [u8; 8] = [184, 12, 86, 149, 70, 196, 97, 225];
}
