use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    #[topic]
    pub owner: Address,
    pub token: Address,
    pub creation_height: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    #[topic]
    pub user: Address,
    pub amount: i128,
    pub unlock_height: u32,
    pub yield_rate: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    #[topic]
    pub user: Address,
    pub principal: i128,
    pub yield_amount: i128,
    pub total: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggled {
    #[topic]
    pub owner: Address,
    pub paused: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultFunded {
    #[topic]
    pub from: Address,
    pub amount: i128,
}

pub struct VaultEvents;

impl VaultEvents {
    pub fn initialized(env: &Env, owner: Address, token: Address, creation_height: u32) {
        Initialized {
            owner,
            token,
            creation_height,
        }
        .publish(env);
    }

    pub fn deposit(env: &Env, user: Address, amount: i128, unlock_height: u32, yield_rate: u32) {
        Deposited {
            user,
            amount,
            unlock_height,
            yield_rate,
        }
        .publish(env);
    }

    pub fn withdraw(env: &Env, user: Address, principal: i128, yield_amount: i128, total: i128) {
        Withdrawn {
            user,
            principal,
            yield_amount,
            total,
        }
        .publish(env);
    }

    pub fn pause_toggled(env: &Env, owner: Address, paused: bool) {
        PauseToggled { owner, paused }.publish(env);
    }

    pub fn funded(env: &Env, from: Address, amount: i128) {
        VaultFunded { from, amount }.publish(env);
    }
}
