#![no_std]

mod admin;
mod constants;
mod contract;
mod errors;
mod events;
mod math;
mod storage;
mod tiers;
mod types;
mod validation;
mod vault;

pub use constants::MAX_DEPOSIT;
pub use contract::{VaultContract, VaultContractClient};
pub use errors::VaultError;
pub use types::{DepositReceipt, DepositRecord, UserStats, VaultStats, WithdrawalReceipt};
