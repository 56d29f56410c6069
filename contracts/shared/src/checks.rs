use soroban_sdk::{Address, BytesN};

use crate::types::{EscrowError as Error, EscrowRecord, SubAccount};

// Validation helpers shared by open, accept and cancel. None of them touch
// storage or the ledger, so they can all run before the first effect.

pub fn only_positive(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

pub fn only_non_negative(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

/// Sum of two legs drawn from the same balance.
pub fn total(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_add(b).ok_or(Error::InvalidAmount)
}

pub fn only_distinct_assets(offered: &Address, requested: &Address) -> Result<(), Error> {
    if offered == requested {
        return Err(Error::AssetMismatch);
    }
    Ok(())
}

pub fn only_asset(account: &SubAccount, asset: &Address) -> Result<(), Error> {
    if account.asset != *asset {
        return Err(Error::AssetMismatch);
    }
    Ok(())
}

pub fn only_holder(account: &SubAccount, holder: &Address) -> Result<(), Error> {
    if account.holder != *holder {
        return Err(Error::AccountMismatch);
    }
    Ok(())
}

pub fn only_seller(record: &EscrowRecord, caller: &Address) -> Result<(), Error> {
    if record.seller != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn only_vault(record: &EscrowRecord, vault: &BytesN<32>) -> Result<(), Error> {
    if record.vault != *vault {
        return Err(Error::AccountMismatch);
    }
    Ok(())
}

pub fn only_funded(balance: i128, required: i128) -> Result<(), Error> {
    if balance < required {
        return Err(Error::InsufficientBalance);
    }
    Ok(())
}
