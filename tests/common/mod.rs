#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, Symbol, Vec,
};
use timelock_vault::{VaultContract, VaultContractClient};

// Constants
pub const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
pub const START_HEIGHT: u32 = 100;
pub const USER_FUNDING: i128 = 100_000_000;

pub const SHORT_LOCK: u32 = 4320;
pub const MEDIUM_LOCK: u32 = 8640;
pub const LONG_LOCK: u32 = 17280;

/// Test environment with all necessary components
pub struct TestEnv<'a> {
    pub env: Env,
    pub token: Address,
    pub vault: VaultContractClient<'a>,
    pub owner: Address,
    pub users: Vec<Address>,
}

/// Configuration for vault setup
pub struct VaultConfig {
    pub num_users: u32,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            num_users: 2,
        }
    }
}

/// Creates a complete test environment with vault, token and funded users
pub fn setup_vault_with_config<'a>(config: VaultConfig) -> TestEnv<'a> {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    env.mock_all_auths();

    // Set TTL parameters so entries outlive the longest lock
    env.ledger().set_min_temp_entry_ttl(ONE_DAY_LEDGERS);
    env.ledger().set_min_persistent_entry_ttl(ONE_DAY_LEDGERS * 30);
    env.ledger().set_sequence_number(START_HEIGHT);

    let owner = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(owner.clone());

    let mut users = Vec::new(&env);
    for _ in 0..config.num_users {
        let user = Address::generate(&env);
        StellarAssetClient::new(&env, &token.address()).mint(&user, &USER_FUNDING);
        users.push_back(user);
    }

    let vault_address = env.register(VaultContract, (owner.clone(), token.address()));
    let vault = VaultContractClient::new(&env, &vault_address);

    TestEnv {
        env,
        token: token.address(),
        vault,
        owner,
        users,
    }
}

/// Creates a basic test environment with default configuration
pub fn setup_vault<'a>() -> TestEnv<'a> {
    setup_vault_with_config(VaultConfig::default())
}

impl<'a> TestEnv<'a> {
    pub fn token_client(&self) -> TokenClient {
        TokenClient::new(&self.env, &self.token)
    }

    pub fn mint_tokens(&self, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.token).mint(to, &amount);
    }

    pub fn create_funded_user(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.mint_tokens(&user, amount);
        user
    }

    pub fn token_balance(&self, user: &Address) -> i128 {
        self.token_client().balance(user)
    }

    pub fn vault_balance(&self) -> i128 {
        self.token_client().balance(&self.vault.address)
    }

    /// Owner mints and deposits yield funding into custody
    pub fn fund_vault(&self, amount: i128) {
        self.mint_tokens(&self.owner, amount);
        self.vault.fund_vault(&self.owner, &amount);
    }

    pub fn tier(&self, name: &str) -> Symbol {
        Symbol::new(&self.env, name)
    }

    pub fn height(&self) -> u32 {
        self.env.ledger().sequence()
    }

    /// Advance the clock by `ledgers`
    pub fn advance_blocks(&self, ledgers: u32) {
        let current = self.env.ledger().sequence();
        self.env.ledger().set_sequence_number(current + ledgers);
    }

    /// Sum of amounts over all non-withdrawn records of `users`
    pub fn active_principal(&self, users: &[Address]) -> i128 {
        users
            .iter()
            .filter_map(|user| self.vault.get_deposit_info(user))
            .filter(|record| !record.withdrawn)
            .map(|record| record.amount)
            .sum()
    }
}

/// Expected yield for a record, matching the on-chain floor formula
pub fn expected_yield(amount: i128, yield_rate: u32, lock_period: u32, elapsed: u32) -> i128 {
    amount * yield_rate as i128 * elapsed as i128 / (lock_period as i128 * 10_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_vault() {
        let test_env = setup_vault();

        assert_eq!(test_env.users.len(), 2);
        let user = test_env.users.get(0).unwrap();
        assert_eq!(test_env.token_balance(&user), USER_FUNDING);
        assert_eq!(test_env.vault.get_vault_stats().creation_height, START_HEIGHT);
    }
}
