//! Typed reads of the staking program's accounts.
//!
//! Transport is left to an [`AccountSource`]; this module only locates,
//! decodes and combines snapshots.

use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::config::StakeConfig;
use crate::duration::StakeDuration;
use crate::rewards::RewardProjection;
use crate::state::{PoolConfig, StakePosition, StakingAccount, UserStake};

/// Raw account data by address.
pub trait AccountSource {
    /// Data of the account at `address`, or `None` if it does not exist.
    fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>>;
}

impl AccountSource for HashMap<Pubkey, Vec<u8>> {
    fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        Ok(self.get(address).cloned())
    }
}

/// Everything the dashboard shows for a user's stake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StakeOverview {
    pub pool: StakingAccount,
    pub pool_config: PoolConfig,
    pub position: StakePosition,
    pub projection: RewardProjection,
    pub can_redeem_without_penalty: bool,
    pub elapsed: StakeDuration,
}

/// Reads pool and stake accounts for one configured pool.
pub struct StakeReader<'a, S: AccountSource> {
    source: &'a S,
    config: StakeConfig,
}

impl<'a, S: AccountSource> StakeReader<'a, S> {
    pub fn new(source: &'a S, config: StakeConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &StakeConfig {
        &self.config
    }

    /// The configured staking pool, if it has been initialized.
    pub fn fetch_pool(&self) -> Result<Option<StakingAccount>> {
        let (address, _) = self.config.staking_account();
        self.fetch(&address)
    }

    /// The user's stake account, if the user has staked.
    pub fn fetch_user_stake(&self, user: &Pubkey) -> Result<Option<UserStake>> {
        let (address, _) = self.config.user_stake(user);
        self.fetch(&address)
    }

    /// Pools available to stake in. A deployment has at most one pool per
    /// admin.
    pub fn available_pools(&self) -> Result<Vec<StakingAccount>> {
        Ok(self.fetch_pool()?.into_iter().collect())
    }

    /// Snapshot of the user's stake evaluated at `now`.
    ///
    /// Returns `None` when either the pool or the user's stake account is
    /// missing.
    ///
    /// # Errors
    /// Fails on undecodable accounts and on inconsistent snapshot data
    /// (see [`crate::compute_reward`]).
    pub fn stake_overview(&self, user: &Pubkey, now: i64) -> Result<Option<StakeOverview>> {
        let Some(pool) = self.fetch_pool()? else {
            return Ok(None);
        };
        let Some(user_stake) = self.fetch_user_stake(user)? else {
            return Ok(None);
        };

        let pool_config = pool.pool_config()?;
        let position = user_stake.position();

        Ok(Some(StakeOverview {
            projection: position.project(&pool_config, now)?,
            can_redeem_without_penalty: position.can_redeem_without_penalty(&pool_config, now)?,
            elapsed: StakeDuration::since(position.start_time, now)?,
            pool,
            pool_config,
            position,
        }))
    }

    fn fetch<T: AccountDeserialize>(&self, address: &Pubkey) -> Result<Option<T>> {
        let Some(data) = self.source.account_data(address)? else {
            log::debug!("account {} not found", address);
            return Ok(None);
        };

        log::debug!("decoding account {} ({} bytes)", address, data.len());
        let account = T::try_deserialize(&mut data.as_slice())?;

        Ok(Some(account))
    }
}
