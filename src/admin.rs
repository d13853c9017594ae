//! Owner-gated setup and the pause switch

use soroban_sdk::{log, Address, Env};

use crate::{errors::VaultError, events::VaultEvents, storage, validation};

/// Binds the vault to its owner and value token. Runs once, at deployment.
pub fn initialize(env: &Env, owner: &Address, token: &Address) {
    let creation_height = env.ledger().sequence();
    storage::set_owner(env, owner);
    storage::set_token(env, token);
    storage::set_creation_height(env, creation_height);
    storage::set_paused(env, false);
    storage::set_total_locked(env, 0);
    storage::set_total_yield_distributed(env, 0);

    VaultEvents::initialized(env, owner.clone(), token.clone(), creation_height);
}

/// Flips the pause flag and returns the new value
pub fn toggle_pause(env: &Env, caller: &Address) -> Result<bool, VaultError> {
    validation::require_owner(env, caller)?;

    let paused = !storage::is_paused(env);
    storage::set_paused(env, paused);

    log!(env, "pause", paused);
    VaultEvents::pause_toggled(env, caller.clone(), paused);
    Ok(paused)
}
