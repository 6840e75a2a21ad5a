//! # Stake Rewards
//!
//! Client-side logic for the `stake_tokens` staking program: a single-token
//! pool with a fixed annual rate and a minimum staking duration.
//!
//! - **Reward calculator**: simple-interest accrual, exact fixed-point
//!   arithmetic over real-valued days
//! - **Eligibility checker**: whether a stake may be redeemed without the
//!   force flag
//! - **Address deriver**: pool and user-stake PDAs
//! - **Reader**: typed decoding of pool and stake accounts
//! - **Instruction builders**: `initialize`, `fund_reward`, `stake`, `redeem`
//!
//! Every computation is pure and synchronous; account data and the current
//! time are supplied by the caller.

use anchor_lang::prelude::*;

declare_id!("7a8fBQMwbtE1C61fcGUW6quAgdqdmzYojha5cQq9Ju4q");

pub mod config;
pub mod constants;
pub mod duration;
pub mod eligibility;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod reader;
pub mod rewards;
pub mod state;

pub use config::{Cluster, StakeConfig};
pub use eligibility::can_redeem_without_penalty;
pub use error::StakeError;
pub use reader::{AccountSource, StakeOverview, StakeReader};
pub use rewards::{compute_reward, RewardAmount, RewardProjection};
pub use state::{PoolConfig, StakePosition, StakingAccount, UserStake};
