use soroban_sdk::contracttype;

/// A user's single time-locked position.
///
/// Written on deposit and mutated once on withdrawal, which only flips
/// `withdrawn`. The record is kept afterwards so lookups stay stable; a new
/// deposit overwrites it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DepositRecord {
    pub amount: i128,
    pub lock_period: u32,
    pub deposit_height: u32,
    pub unlock_height: u32,
    /// Basis points, fixed by the tier at deposit time
    pub yield_rate: u32,
    pub withdrawn: bool,
}

impl DepositRecord {
    pub fn is_active(&self) -> bool {
        !self.withdrawn
    }

    pub fn is_matured(&self, current_height: u32) -> bool {
        current_height >= self.unlock_height
    }
}

/// Cumulative per-user counters. Bookkeeping only.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct UserStats {
    pub total_deposited: i128,
    pub total_withdrawn: i128,
    pub total_yield_earned: i128,
    pub deposit_count: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VaultStats {
    pub total_locked: i128,
    pub total_yield_distributed: i128,
    pub vault_paused: bool,
    pub current_height: u32,
    pub creation_height: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DepositReceipt {
    pub amount: i128,
    pub unlock_height: u32,
    pub yield_rate: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WithdrawalReceipt {
    pub principal: i128,
    pub yield_amount: i128,
    pub total: i128,
}
