//! Error types for the staking client.
//!
//! Errors are Anchor error codes so callers that already surface program
//! errors can render client-side failures the same way.
//!
//! ## Error Code Ranges
//! - 6000-6001: State/math errors (corrupt or mis-fetched snapshots)
//! - 6002-6006: Planning errors (request rejected before it is sent)
//! - 6007: Configuration errors

use anchor_lang::prelude::*;

/// Custom error codes for the staking client.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakeError {
    // ========== State/Math Errors (6000-6001) ==========

    /// [6000] Snapshot data is inconsistent: a start time in the future or
    /// a negative / out-of-range value where a bounded one is required.
    #[msg("Invalid stake state: start time is in the future or a value is out of range")]
    InvalidState,

    /// [6001] Checked arithmetic overflowed.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Planning Errors (6002-6006) ==========

    /// [6002] Redeem requested for a position with nothing staked.
    #[msg("User has nothing staked")]
    NothingStaked,

    /// [6003] Stake requested while the user already has an open position.
    #[msg("User has already staked")]
    AlreadyStaked,

    /// [6004] Stake or fund amount is zero.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// [6005] Pool reward rate is above 100%.
    #[msg("Reward rate must be between 0 and 100 percent")]
    InvalidRewardRate,

    /// [6006] Minimum staking duration not met and force redeem not requested.
    #[msg("Force redeem is required to unstake before the minimum duration")]
    ForceRedeemRequired,

    // ========== Configuration Errors (6007) ==========

    /// [6007] A configured public key could not be parsed.
    #[msg("Invalid public key in configuration")]
    InvalidConfig,
}
