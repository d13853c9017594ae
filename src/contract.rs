//! Timelock Vault Contract - tiered time-locked deposits with linear yield
//!
//! Users lock the vault token for one of three fixed tiers. Once the lock
//! matures they withdraw principal plus yield in one call. Each account holds
//! at most one active deposit at a time.

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

use crate::{
    admin,
    errors::VaultError,
    math, storage,
    types::{DepositReceipt, DepositRecord, UserStats, VaultStats, WithdrawalReceipt},
    vault,
};

#[contract]
pub struct VaultContract;

#[contractimpl]
impl VaultContract {
    /// Initializes the vault
    ///
    /// # Arguments
    /// * `owner` - Address allowed to toggle the pause switch
    /// * `token` - Address of the token contract holding locked value
    pub fn __constructor(e: Env, owner: Address, token: Address) {
        admin::initialize(&e, &owner, &token);
        storage::extend_instance(&e);
    }

    /// Locks `amount` for `tier` (`short`, `medium` or `long`)
    pub fn deposit(
        e: Env,
        user: Address,
        amount: i128,
        tier: Symbol,
    ) -> Result<DepositReceipt, VaultError> {
        user.require_auth();
        let receipt = vault::deposit(&e, &user, amount, &tier)?;
        storage::extend_instance(&e);
        Ok(receipt)
    }

    /// Withdraws a matured deposit with its accrued yield
    pub fn withdraw(e: Env, user: Address) -> Result<WithdrawalReceipt, VaultError> {
        user.require_auth();
        let receipt = vault::withdraw(&e, &user)?;
        storage::extend_instance(&e);
        Ok(receipt)
    }

    /// Owner toggles whether new deposits are accepted, returning the new state
    pub fn toggle_pause(e: Env, caller: Address) -> Result<bool, VaultError> {
        caller.require_auth();
        let paused = admin::toggle_pause(&e, &caller)?;
        storage::extend_instance(&e);
        Ok(paused)
    }

    /// Adds yield funding to the vault's custody balance
    pub fn fund_vault(e: Env, from: Address, amount: i128) -> Result<(), VaultError> {
        from.require_auth();
        vault::fund(&e, &from, amount)?;
        storage::extend_instance(&e);
        Ok(())
    }

    pub fn get_owner(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_owner(&e)
    }

    pub fn get_token(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_token(&e)
    }

    /// Returns the user's deposit record, including a withdrawn one
    pub fn get_deposit_info(e: Env, user: Address) -> Option<DepositRecord> {
        storage::extend_instance(&e);
        storage::get_deposit(&e, &user)
    }

    pub fn get_user_stats(e: Env, user: Address) -> UserStats {
        storage::extend_instance(&e);
        storage::get_user_stats(&e, &user)
    }

    pub fn get_vault_stats(e: Env) -> VaultStats {
        storage::extend_instance(&e);
        VaultStats {
            total_locked: storage::get_total_locked(&e),
            total_yield_distributed: storage::get_total_yield_distributed(&e),
            vault_paused: storage::is_paused(&e),
            current_height: e.ledger().sequence(),
            creation_height: storage::get_creation_height(&e),
        }
    }

    /// Returns true once the user's deposit has reached its unlock height
    pub fn is_lock_expired(e: Env, user: Address) -> bool {
        storage::extend_instance(&e);
        storage::get_deposit(&e, &user)
            .map(|record| record.is_matured(e.ledger().sequence()))
            .unwrap_or(false)
    }

    /// Returns ledgers remaining until unlock, or 0 if matured or absent
    pub fn get_blocks_remaining(e: Env, user: Address) -> u32 {
        storage::extend_instance(&e);
        storage::get_deposit(&e, &user)
            .map(|record| math::blocks_remaining(record.unlock_height, e.ledger().sequence()))
            .unwrap_or(0)
    }

    /// Returns the yield the user's deposit has accrued at the current height
    pub fn calculate_yield(e: Env, user: Address) -> Result<i128, VaultError> {
        storage::extend_instance(&e);
        let record = storage::get_deposit(&e, &user).ok_or(VaultError::NotFound)?;
        math::calculate_yield(&record, e.ledger().sequence())
    }

    /// Returns the vault's custody balance of the value token
    pub fn get_vault_balance(e: Env) -> i128 {
        storage::extend_instance(&e);
        vault::vault_balance(&e)
    }
}
