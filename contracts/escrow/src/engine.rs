use escrow_shared::{
    escrow_ids, only_asset, only_distinct_assets, only_funded, only_holder, only_non_negative,
    only_positive, only_seller, only_vault, total, Config, EscrowError as Error, EscrowRecord,
    SubAccount, Vault,
};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env};

use crate::events;
use crate::ledger::AssetLedger;
use crate::storage;
use crate::vault::{self, VaultAuthority};

#[contract]
pub struct EscrowEngine;

#[contractimpl]
impl EscrowEngine {
    /// Initialize the engine with its admin and the holding reserve charged per vault
    pub fn __constructor(env: Env, admin: Address, reserve_asset: Address, reserve: i128) {
        if let Err(error) = only_non_negative(reserve) {
            panic_with_error!(&env, error);
        }
        storage::extend_instance(&env);
        storage::write_config(
            &env,
            &Config {
                admin,
                reserve_asset,
                reserve,
            },
        );
    }

    /// Lock `amount_offered` of `asset_offered` in a new vault in exchange for
    /// `amount_requested` of `asset_requested`. Returns the escrow id.
    pub fn open(
        env: Env,
        seller: Address,
        asset_offered: Address,
        asset_requested: Address,
        seller_offered: SubAccount,
        amount_offered: i128,
        amount_requested: i128,
    ) -> Result<BytesN<32>, Error> {
        seller.require_auth();
        storage::extend_instance(&env);

        only_positive(amount_offered)?;
        only_positive(amount_requested)?;
        only_distinct_assets(&asset_offered, &asset_requested)?;
        only_asset(&seller_offered, &asset_offered)?;
        only_holder(&seller_offered, &seller)?;

        let id = escrow_ids::escrow_id(&env, &seller);
        if storage::has_escrow(&env, &id) {
            return Err(Error::AlreadyOpen);
        }

        let config = storage::read_config(&env);
        let ledger = AssetLedger::new(&env);
        let reserve_payer = SubAccount::new(&config.reserve_asset, &seller);
        if config.reserve_asset == asset_offered {
            let required = total(amount_offered, config.reserve)?;
            only_funded(ledger.balance(&seller_offered), required)?;
        } else {
            only_funded(ledger.balance(&seller_offered), amount_offered)?;
            only_funded(ledger.balance(&reserve_payer), config.reserve)?;
        }

        // Every check has passed; effects start here
        let authority = VaultAuthority::derive(&env, &id);
        let mut locked = vault::create(
            &ledger,
            &authority,
            &asset_offered,
            &reserve_payer,
            config.reserve,
        )?;
        vault::deposit(&ledger, &authority, &mut locked, &seller_offered, amount_offered)?;
        storage::write_vault(&env, &locked);

        let record = EscrowRecord {
            seller,
            asset_offered,
            asset_requested,
            amount_offered,
            amount_requested,
            vault: authority.vault_id().clone(),
        };
        storage::write_escrow(&env, &id, &record);

        log!(&env, "vault opened", record.vault, amount_offered);
        events::opened(&env, &id, &record);
        Ok(id)
    }

    /// Pay the requested asset to the seller and receive the vault's contents.
    /// Consumes the escrow; a second accept or cancel fails with `NotFound`.
    pub fn accept(
        env: Env,
        buyer: Address,
        escrow: BytesN<32>,
        vault: BytesN<32>,
        seller_requested: SubAccount,
        buyer_offered: SubAccount,
        buyer_requested: SubAccount,
    ) -> Result<(), Error> {
        buyer.require_auth();
        storage::extend_instance(&env);

        let record = storage::read_escrow(&env, &escrow)?;
        only_vault(&record, &vault)?;
        only_asset(&seller_requested, &record.asset_requested)?;
        only_holder(&seller_requested, &record.seller)?;
        only_asset(&buyer_offered, &record.asset_offered)?;
        only_holder(&buyer_offered, &buyer)?;
        only_asset(&buyer_requested, &record.asset_requested)?;
        only_holder(&buyer_requested, &buyer)?;

        let ledger = AssetLedger::new(&env);
        only_funded(ledger.balance(&buyer_requested), record.amount_requested)?;

        let authority = VaultAuthority::derive(&env, &escrow);
        let mut locked = storage::read_vault(&env, &vault)?;

        // Both legs and the teardown run in this one invocation
        ledger.transfer(&buyer_requested, &seller_requested, record.amount_requested)?;
        vault::release(&ledger, &authority, &mut locked, &buyer_offered)?;
        settle(&env, &ledger, &authority, &escrow, locked, &record.seller)?;

        events::accepted(&env, &escrow, &buyer, &record.seller);
        Ok(())
    }

    /// Return the locked asset to the seller and destroy the escrow.
    pub fn cancel(
        env: Env,
        seller: Address,
        escrow: BytesN<32>,
        vault: BytesN<32>,
        seller_offered: SubAccount,
    ) -> Result<(), Error> {
        seller.require_auth();
        storage::extend_instance(&env);

        let record = storage::read_escrow(&env, &escrow)?;
        only_seller(&record, &seller)?;
        only_vault(&record, &vault)?;
        only_asset(&seller_offered, &record.asset_offered)?;
        only_holder(&seller_offered, &record.seller)?;

        let ledger = AssetLedger::new(&env);
        let authority = VaultAuthority::derive(&env, &escrow);
        let mut locked = storage::read_vault(&env, &vault)?;

        vault::release(&ledger, &authority, &mut locked, &seller_offered)?;
        settle(&env, &ledger, &authority, &escrow, locked, &record.seller)?;

        events::cancelled(&env, &escrow, &seller);
        Ok(())
    }

    /// Update the reserve charged for vaults opened from now on (admin only)
    pub fn set_reserve(env: Env, reserve_asset: Address, reserve: i128) -> Result<(), Error> {
        storage::extend_instance(&env);
        let mut config = storage::read_config(&env);
        config.admin.require_auth();
        only_non_negative(reserve)?;

        config.reserve_asset = reserve_asset;
        config.reserve = reserve;
        storage::write_config(&env, &config);

        events::reserve_set(&env, &config.reserve_asset, config.reserve);
        Ok(())
    }

    /// Recompute the escrow id a seller opens under
    pub fn escrow_id(env: Env, seller: Address) -> BytesN<32> {
        escrow_ids::escrow_id(&env, &seller)
    }

    /// Recompute the vault id this engine holds for an escrow
    pub fn vault_id(env: Env, escrow: BytesN<32>) -> BytesN<32> {
        escrow_ids::vault_id(&env, &env.current_contract_address(), &escrow)
    }

    /// Read an open escrow. Reading also keeps the record and its vault live.
    pub fn get_escrow(env: Env, escrow: BytesN<32>) -> Result<EscrowRecord, Error> {
        storage::extend_instance(&env);
        let record = storage::read_escrow(&env, &escrow)?;
        storage::read_vault(&env, &record.vault)?;
        Ok(record)
    }

    pub fn get_vault(env: Env, vault: BytesN<32>) -> Result<Vault, Error> {
        storage::extend_instance(&env);
        storage::read_vault(&env, &vault)
    }

    pub fn config(env: Env) -> Config {
        storage::extend_instance(&env);
        storage::read_config(&env)
    }
}

// Destroys the drained vault (refunding its reserve to the seller) and the record
fn settle(
    env: &Env,
    ledger: &AssetLedger,
    authority: &VaultAuthority,
    escrow: &BytesN<32>,
    locked: Vault,
    seller: &Address,
) -> Result<(), Error> {
    vault::close(env, ledger, authority, locked, seller)?;
    storage::remove_escrow(env, escrow);
    Ok(())
}
