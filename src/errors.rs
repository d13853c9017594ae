use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    OwnerOnly = 100,
    /// No deposit record for the account, or the record was already withdrawn
    NotFound = 101,
    InsufficientBalance = 102,
    LockPeriodNotMet = 103,
    AlreadyExists = 104,
    InvalidAmount = 105,
    VaultPaused = 106,
    InvalidLockPeriod = 107,
    ZeroAmount = 108,
    InsufficientVaultBalance = 109,
}
