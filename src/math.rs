use crate::{errors::VaultError, types::DepositRecord};

pub const BPS_DENOMINATOR: i128 = 10_000;

/// Calculates the yield accrued by a deposit at `current_height`
///
/// yield = floor(amount * yield_rate * blocks_elapsed / (lock_period * 10_000))
///
/// Accrual is not capped at `lock_period`, so blocks past maturity keep
/// earning until the withdrawal lands.
pub fn calculate_yield(record: &DepositRecord, current_height: u32) -> Result<i128, VaultError> {
    if record.lock_period == 0 {
        return Err(VaultError::InvalidLockPeriod);
    }
    let blocks_elapsed = current_height.saturating_sub(record.deposit_height);

    let numerator = record
        .amount
        .checked_mul(record.yield_rate as i128)
        .and_then(|n| n.checked_mul(blocks_elapsed as i128))
        .ok_or(VaultError::InvalidAmount)?;
    let denominator = (record.lock_period as i128)
        .checked_mul(BPS_DENOMINATOR)
        .ok_or(VaultError::InvalidAmount)?;

    // Operands are non-negative, so truncation is floor
    Ok(numerator / denominator)
}

/// Ledgers left until `unlock_height`, or 0 once matured
pub fn blocks_remaining(unlock_height: u32, current_height: u32) -> u32 {
    unlock_height.saturating_sub(current_height)
}

/// Returns `unlock_height` for a deposit made at `deposit_height`
pub fn unlock_height(deposit_height: u32, lock_period: u32) -> Result<u32, VaultError> {
    deposit_height
        .checked_add(lock_period)
        .ok_or(VaultError::InvalidLockPeriod)
}
