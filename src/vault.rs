use soroban_sdk::{log, token, Address, Env, Symbol};

use crate::{
    errors::VaultError,
    events::VaultEvents,
    math,
    storage,
    tiers,
    types::{DepositReceipt, DepositRecord, UserStats, WithdrawalReceipt},
    validation,
};

/// Helper to get the client for the vault's value token
fn token_client(env: &Env) -> token::Client<'_> {
    token::Client::new(env, &storage::get_token(env))
}

/// Returns the vault's custody balance
pub fn vault_balance(env: &Env) -> i128 {
    token_client(env).balance(&env.current_contract_address())
}

/// Locks `amount` for the given tier
pub fn deposit(
    env: &Env,
    user: &Address,
    amount: i128,
    tier: &Symbol,
) -> Result<DepositReceipt, VaultError> {
    let token = token_client(env);

    // Checks
    validation::require_not_paused(env)?;
    validation::require_valid_deposit_amount(amount)?;
    let lock_tier = tiers::lookup(tier)?;
    validation::require_no_active_deposit(env, user)?;
    validation::require_sufficient_balance(token.balance(user), amount)?;

    // Pull funds into custody
    token.transfer(user, &env.current_contract_address(), &amount);

    // Record the position
    let deposit_height = env.ledger().sequence();
    let unlock_height = math::unlock_height(deposit_height, lock_tier.lock_period)?;
    let record = DepositRecord {
        amount,
        lock_period: lock_tier.lock_period,
        deposit_height,
        unlock_height,
        yield_rate: lock_tier.yield_rate,
        withdrawn: false,
    };
    storage::set_deposit(env, user, &record);

    // Update state
    let stats = storage::get_user_stats(env, user);
    let stats = UserStats {
        total_deposited: checked_add(stats.total_deposited, amount)?,
        deposit_count: stats.deposit_count.checked_add(1).ok_or(VaultError::InvalidAmount)?,
        ..stats
    };
    storage::set_user_stats(env, user, &stats);

    let total_locked = checked_add(storage::get_total_locked(env), amount)?;
    validation::require_within_cap(total_locked)?;
    storage::set_total_locked(env, total_locked);

    log!(env, "deposit", user.clone(), amount, unlock_height);
    VaultEvents::deposit(env, user.clone(), amount, unlock_height, lock_tier.yield_rate);

    Ok(DepositReceipt {
        amount,
        unlock_height,
        yield_rate: lock_tier.yield_rate,
    })
}

/// Closes a matured deposit, paying principal plus accrued yield
pub fn withdraw(env: &Env, user: &Address) -> Result<WithdrawalReceipt, VaultError> {
    let token = token_client(env);

    // Checks
    let record = validation::require_active_deposit(env, user)?;
    validation::require_matured(env, &record)?;

    let yield_amount = math::calculate_yield(&record, env.ledger().sequence())?;
    let total = checked_add(record.amount, yield_amount)?;
    validation::require_vault_solvent(token.balance(&env.current_contract_address()), total)?;

    // Close the record before paying out
    let closed = DepositRecord {
        withdrawn: true,
        ..record.clone()
    };
    storage::set_deposit(env, user, &closed);

    token.transfer(&env.current_contract_address(), user, &total);

    // Update state
    let stats = storage::get_user_stats(env, user);
    let stats = UserStats {
        total_withdrawn: checked_add(stats.total_withdrawn, total)?,
        total_yield_earned: checked_add(stats.total_yield_earned, yield_amount)?,
        ..stats
    };
    storage::set_user_stats(env, user, &stats);

    let total_locked = storage::get_total_locked(env)
        .checked_sub(record.amount)
        .ok_or(VaultError::InvalidAmount)?;
    storage::set_total_locked(env, total_locked);
    storage::set_total_yield_distributed(
        env,
        checked_add(storage::get_total_yield_distributed(env), yield_amount)?,
    );

    log!(env, "withdraw", user.clone(), record.amount, yield_amount);
    VaultEvents::withdraw(env, user.clone(), record.amount, yield_amount, total);

    Ok(WithdrawalReceipt {
        principal: record.amount,
        yield_amount,
        total,
    })
}

/// Tops up custody with yield funding. Locked totals are unaffected.
pub fn fund(env: &Env, from: &Address, amount: i128) -> Result<(), VaultError> {
    let token = token_client(env);
    validation::require_positive_amount(amount)?;
    validation::require_sufficient_balance(token.balance(from), amount)?;

    token.transfer(from, &env.current_contract_address(), &amount);

    log!(env, "fund", from.clone(), amount);
    VaultEvents::funded(env, from.clone(), amount);
    Ok(())
}

fn checked_add(a: i128, b: i128) -> Result<i128, VaultError> {
    a.checked_add(b).ok_or(VaultError::InvalidAmount)
}
