use soroban_sdk::{Address, Env};

use crate::{
    constants::MAX_DEPOSIT,
    errors::VaultError,
    storage,
    types::DepositRecord,
};

/// Validates that new deposits are not administratively blocked
pub fn require_not_paused(env: &Env) -> Result<(), VaultError> {
    if storage::is_paused(env) {
        return Err(VaultError::VaultPaused);
    }
    Ok(())
}

/// Validates a deposit amount is positive and within the per-deposit cap
pub fn require_valid_deposit_amount(amount: i128) -> Result<(), VaultError> {
    if amount <= 0 {
        return Err(VaultError::ZeroAmount);
    }
    if amount > MAX_DEPOSIT {
        return Err(VaultError::InvalidAmount);
    }
    Ok(())
}

/// Validates that a funding amount is positive
pub fn require_positive_amount(amount: i128) -> Result<(), VaultError> {
    if amount <= 0 {
        return Err(VaultError::ZeroAmount);
    }
    Ok(())
}

/// Validates that a user doesn't hold an active deposit
pub fn require_no_active_deposit(env: &Env, user: &Address) -> Result<(), VaultError> {
    match storage::get_deposit(env, user) {
        Some(record) if record.is_active() => Err(VaultError::AlreadyExists),
        _ => Ok(()),
    }
}

/// Validates that the caller holds enough of the vault token
pub fn require_sufficient_balance(balance: i128, amount: i128) -> Result<(), VaultError> {
    if balance < amount {
        return Err(VaultError::InsufficientBalance);
    }
    Ok(())
}

/// Returns the user's active deposit, treating withdrawn records as absent
pub fn require_active_deposit(env: &Env, user: &Address) -> Result<DepositRecord, VaultError> {
    let record = storage::get_deposit(env, user).ok_or(VaultError::NotFound)?;
    if !record.is_active() {
        return Err(VaultError::NotFound);
    }
    Ok(record)
}

/// Validates that a deposit has reached its unlock height
pub fn require_matured(env: &Env, record: &DepositRecord) -> Result<(), VaultError> {
    if !record.is_matured(env.ledger().sequence()) {
        return Err(VaultError::LockPeriodNotMet);
    }
    Ok(())
}

/// Validates that custody can cover a payout
pub fn require_vault_solvent(vault_balance: i128, payout: i128) -> Result<(), VaultError> {
    if vault_balance < payout {
        return Err(VaultError::InsufficientVaultBalance);
    }
    Ok(())
}

/// Validates that the vault total stays within the deposit cap
pub fn require_within_cap(total_locked: i128) -> Result<(), VaultError> {
    if total_locked > MAX_DEPOSIT {
        return Err(VaultError::InvalidAmount);
    }
    Ok(())
}

/// Validates that `caller` is the configured owner
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), VaultError> {
    if storage::get_owner(env) != *caller {
        return Err(VaultError::OwnerOnly);
    }
    Ok(())
}
