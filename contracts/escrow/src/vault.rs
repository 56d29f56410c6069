use escrow_shared::{escrow_ids, EscrowError as Error, SubAccount, Vault};
use soroban_sdk::{log, Address, BytesN, Env};

use crate::ledger::AssetLedger;
use crate::storage;

/// Capability to debit one vault.
///
/// Derived from the engine's own contract address and the escrow id, and only
/// constructible inside this crate. The engine address has no private key, so
/// holding this value is the only way funds leave a vault.
pub(crate) struct VaultAuthority {
    custodian: Address,
    escrow: BytesN<32>,
    vault: BytesN<32>,
}

impl VaultAuthority {
    pub(crate) fn derive(env: &Env, escrow: &BytesN<32>) -> Self {
        let custodian = env.current_contract_address();
        let vault = escrow_ids::vault_id(env, &custodian, escrow);
        Self {
            custodian,
            escrow: escrow.clone(),
            vault,
        }
    }

    pub(crate) fn vault_id(&self) -> &BytesN<32> {
        &self.vault
    }

    fn custody(&self, asset: &Address) -> SubAccount {
        SubAccount::new(asset, &self.custodian)
    }

    fn only_own(&self, vault: &Vault) -> Result<(), Error> {
        if vault.id != self.vault || vault.escrow != self.escrow {
            return Err(Error::AccountMismatch);
        }
        Ok(())
    }
}

/// Creates the vault for an escrow, collecting its holding reserve from `payer`.
/// The vault is empty until `deposit` and is not persisted here.
pub(crate) fn create(
    ledger: &AssetLedger,
    authority: &VaultAuthority,
    asset: &Address,
    payer: &SubAccount,
    reserve: i128,
) -> Result<Vault, Error> {
    ledger.transfer(payer, &authority.custody(&payer.asset), reserve)?;
    Ok(Vault {
        id: authority.vault.clone(),
        escrow: authority.escrow.clone(),
        asset: asset.clone(),
        balance: 0,
        reserve_asset: payer.asset.clone(),
        reserve,
    })
}

pub(crate) fn deposit(
    ledger: &AssetLedger,
    authority: &VaultAuthority,
    vault: &mut Vault,
    from: &SubAccount,
    amount: i128,
) -> Result<(), Error> {
    authority.only_own(vault)?;
    ledger.transfer(from, &authority.custody(&vault.asset), amount)?;
    vault.balance = vault.balance.checked_add(amount).ok_or(Error::InvalidAmount)?;
    Ok(())
}

/// Pays the vault's whole balance out to `to` and returns the amount released.
pub(crate) fn release(
    ledger: &AssetLedger,
    authority: &VaultAuthority,
    vault: &mut Vault,
    to: &SubAccount,
) -> Result<i128, Error> {
    authority.only_own(vault)?;
    let amount = vault.balance;
    ledger.transfer(&authority.custody(&vault.asset), to, amount)?;
    vault.balance = 0;
    Ok(amount)
}

/// Destroys a drained vault and returns its reserve to `recipient`.
/// Fails with `InvalidAmount` while the vault still holds a balance.
pub(crate) fn close(
    env: &Env,
    ledger: &AssetLedger,
    authority: &VaultAuthority,
    vault: Vault,
    recipient: &Address,
) -> Result<(), Error> {
    authority.only_own(&vault)?;
    // Only a drained vault may be destroyed
    if vault.balance != 0 {
        return Err(Error::InvalidAmount);
    }
    ledger.transfer(
        &authority.custody(&vault.reserve_asset),
        &SubAccount::new(&vault.reserve_asset, recipient),
        vault.reserve,
    )?;
    storage::remove_vault(env, &vault.id);
    log!(env, "vault closed", vault.id, vault.reserve);
    Ok(())
}
