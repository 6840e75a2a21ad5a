//! Instruction builders for the `stake_tokens` program.
//!
//! One module per program instruction. Account order and argument layout
//! follow the program IDL.

pub mod fund_reward;
pub mod initialize;
pub mod redeem;
pub mod stake;

pub use fund_reward::*;
pub use initialize::*;
pub use redeem::*;
pub use stake::*;
