//! Account layouts of the `stake_tokens` program and the snapshots derived
//! from them.

pub mod staking_account;
pub mod user_stake;

pub use staking_account::*;
pub use user_stake::*;
