//! Fixed lock tiers, keyed by tier symbol.

use soroban_sdk::{symbol_short, Symbol};

use crate::errors::VaultError;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LockTier {
    /// Lock duration in ledgers
    pub lock_period: u32,
    /// Yield rate in basis points
    pub yield_rate: u32,
}

pub const SHORT: Symbol = symbol_short!("short");
pub const MEDIUM: Symbol = symbol_short!("medium");
pub const LONG: Symbol = symbol_short!("long");

const LOCK_TIERS: [(Symbol, LockTier); 3] = [
    (SHORT, LockTier { lock_period: 4320, yield_rate: 500 }),
    (MEDIUM, LockTier { lock_period: 8640, yield_rate: 1000 }),
    (LONG, LockTier { lock_period: 17280, yield_rate: 1500 }),
];

/// Resolves a tier symbol against the tier table
pub fn lookup(tier: &Symbol) -> Result<LockTier, VaultError> {
    LOCK_TIERS
        .iter()
        .find(|(name, _)| name == tier)
        .map(|(_, lock_tier)| *lock_tier)
        .ok_or(VaultError::InvalidLockPeriod)
}
