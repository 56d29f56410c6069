use escrow_shared::{Config, DataKey, EscrowError as Error, EscrowRecord, Vault};
use soroban_sdk::{BytesN, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
// Open escrows have no expiry, so every touch pushes live entries well clear of archival
pub(crate) const ENTRY_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ENTRY_TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;

/// Keeps the engine instance (and its config) live. Called by every entry point.
pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

fn extend_entry(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, ENTRY_TTL_THRESHOLD, ENTRY_TTL_EXTEND_TO);
}

pub(crate) fn read_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic!("Config not set"))
}

pub(crate) fn write_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub(crate) fn has_escrow(env: &Env, id: &BytesN<32>) -> bool {
    env.storage().persistent().has(&DataKey::Escrow(id.clone()))
}

pub(crate) fn read_escrow(env: &Env, id: &BytesN<32>) -> Result<EscrowRecord, Error> {
    let key = DataKey::Escrow(id.clone());
    let record = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    extend_entry(env, &key);
    Ok(record)
}

pub(crate) fn write_escrow(env: &Env, id: &BytesN<32>, record: &EscrowRecord) {
    let key = DataKey::Escrow(id.clone());
    env.storage().persistent().set(&key, record);
    extend_entry(env, &key);
}

pub(crate) fn remove_escrow(env: &Env, id: &BytesN<32>) {
    env.storage().persistent().remove(&DataKey::Escrow(id.clone()));
}

pub(crate) fn read_vault(env: &Env, id: &BytesN<32>) -> Result<Vault, Error> {
    let key = DataKey::Vault(id.clone());
    let vault = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    extend_entry(env, &key);
    Ok(vault)
}

pub(crate) fn write_vault(env: &Env, vault: &Vault) {
    let key = DataKey::Vault(vault.id.clone());
    env.storage().persistent().set(&key, vault);
    extend_entry(env, &key);
}

pub(crate) fn remove_vault(env: &Env, id: &BytesN<32>) {
    env.storage().persistent().remove(&DataKey::Vault(id.clone()));
}
