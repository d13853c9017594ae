use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env};
use stellar_tokens::fungible::{
    BALANCE_EXTEND_AMOUNT, BALANCE_TTL_THRESHOLD, INSTANCE_EXTEND_AMOUNT, INSTANCE_TTL_THRESHOLD,
};

use crate::types::{DepositRecord, UserStats};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum VaultStorageKey {
    Owner,
    Token,
    Paused,
    CreationHeight,
    TotalLocked,
    TotalYieldDistributed,
    Deposit(Address),
    UserStats(Address),
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_EXTEND_AMOUNT);
}

fn extend_persistent(e: &Env, key: &VaultStorageKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, BALANCE_TTL_THRESHOLD, BALANCE_EXTEND_AMOUNT);
}

// ========== Configuration ==========

pub fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<VaultStorageKey, Address>(&VaultStorageKey::Owner)
        .unwrap_optimized()
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage()
        .instance()
        .set::<VaultStorageKey, Address>(&VaultStorageKey::Owner, owner);
}

pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<VaultStorageKey, Address>(&VaultStorageKey::Token)
        .unwrap_optimized()
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage()
        .instance()
        .set::<VaultStorageKey, Address>(&VaultStorageKey::Token, token);
}

pub fn get_creation_height(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<VaultStorageKey, u32>(&VaultStorageKey::CreationHeight)
        .unwrap_or(0)
}

pub fn set_creation_height(e: &Env, height: u32) {
    e.storage()
        .instance()
        .set::<VaultStorageKey, u32>(&VaultStorageKey::CreationHeight, &height);
}

// ========== Vault aggregates ==========

pub fn is_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<VaultStorageKey, bool>(&VaultStorageKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(e: &Env, paused: bool) {
    e.storage()
        .instance()
        .set::<VaultStorageKey, bool>(&VaultStorageKey::Paused, &paused);
}

pub fn get_total_locked(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<VaultStorageKey, i128>(&VaultStorageKey::TotalLocked)
        .unwrap_or(0)
}

pub fn set_total_locked(e: &Env, total: i128) {
    e.storage()
        .instance()
        .set::<VaultStorageKey, i128>(&VaultStorageKey::TotalLocked, &total);
}

pub fn get_total_yield_distributed(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<VaultStorageKey, i128>(&VaultStorageKey::TotalYieldDistributed)
        .unwrap_or(0)
}

pub fn set_total_yield_distributed(e: &Env, total: i128) {
    e.storage()
        .instance()
        .set::<VaultStorageKey, i128>(&VaultStorageKey::TotalYieldDistributed, &total);
}

// ========== Per-user entries ==========

pub fn get_deposit(e: &Env, user: &Address) -> Option<DepositRecord> {
    let key = VaultStorageKey::Deposit(user.clone());
    let result = e
        .storage()
        .persistent()
        .get::<VaultStorageKey, DepositRecord>(&key);
    if result.is_some() {
        extend_persistent(e, &key);
    }
    result
}

pub fn set_deposit(e: &Env, user: &Address, record: &DepositRecord) {
    let key = VaultStorageKey::Deposit(user.clone());
    e.storage()
        .persistent()
        .set::<VaultStorageKey, DepositRecord>(&key, record);
    extend_persistent(e, &key);
}

pub fn get_user_stats(e: &Env, user: &Address) -> UserStats {
    let key = VaultStorageKey::UserStats(user.clone());
    match e
        .storage()
        .persistent()
        .get::<VaultStorageKey, UserStats>(&key)
    {
        Some(stats) => {
            extend_persistent(e, &key);
            stats
        }
        None => UserStats::default(),
    }
}

pub fn set_user_stats(e: &Env, user: &Address, stats: &UserStats) {
    let key = VaultStorageKey::UserStats(user.clone());
    e.storage()
        .persistent()
        .set::<VaultStorageKey, UserStats>(&key, stats);
    extend_persistent(e, &key);
}
