//! Client configuration: which program and which pool to talk to.

use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakeError;
use crate::pda;

/// Program and pool the client operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakeConfig {
    /// Deployed `stake_tokens` program
    pub program_id: Pubkey,

    /// Admin whose key seeds the staking pool PDA
    pub pool_admin: Pubkey,
}

impl Default for StakeConfig {
    fn default() -> Self {
        Self {
            program_id: crate::ID,
            pool_admin: pool_admin::ID,
        }
    }
}

impl StakeConfig {
    /// Defaults overridden by `STAKE_PROGRAM_ID` and `STAKE_POOL_ADMIN`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the
    /// configuration keys.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if a provided value is not a valid public key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(PROGRAM_ID_ENV) {
            config.program_id = parse_pubkey(PROGRAM_ID_ENV, &value)?;
        }
        if let Some(value) = lookup(POOL_ADMIN_ENV) {
            config.pool_admin = parse_pubkey(POOL_ADMIN_ENV, &value)?;
        }

        Ok(config)
    }

    pub fn with_pool_admin(mut self, pool_admin: Pubkey) -> Self {
        self.pool_admin = pool_admin;
        self
    }

    /// The staking pool PDA and its bump.
    pub fn staking_account(&self) -> (Pubkey, u8) {
        pda::find_staking_account_address(&self.pool_admin, &self.program_id)
    }

    /// The user's stake account PDA and its bump.
    pub fn user_stake(&self, user: &Pubkey) -> (Pubkey, u8) {
        pda::find_user_stake_address(user, &self.program_id)
    }
}

fn parse_pubkey(key: &str, value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value.trim()).map_err(|err| {
        log::warn!("{} is not a valid public key: {}", key, err);
        error!(StakeError::InvalidConfig)
    })
}

/// Cluster a connection points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cluster {
    MainnetBeta,
    Devnet,
    Testnet,
    Unknown,
}

impl Cluster {
    pub fn from_genesis_hash(hash: &str) -> Self {
        match hash {
            genesis::MAINNET_BETA => Cluster::MainnetBeta,
            genesis::DEVNET => Cluster::Devnet,
            genesis::TESTNET => Cluster::Testnet,
            _ => Cluster::Unknown,
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
