use soroban_sdk::{contracterror, contracttype, Address, BytesN};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    InvalidAmount = 1,
    AlreadyOpen = 2,
    NotFound = 3,
    Unauthorized = 4,
    AssetMismatch = 5,
    AccountMismatch = 6,
    InsufficientBalance = 7,
}

/// Balance of one asset held by one holder on the asset ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubAccount {
    pub asset: Address,  // Token contract of the asset
    pub holder: Address, // Owner of the balance
}

impl SubAccount {
    pub fn new(asset: &Address, holder: &Address) -> Self {
        Self {
            asset: asset.clone(),
            holder: holder.clone(),
        }
    }
}

/// Terms of one pending trade. Written once by `open`, removed by `accept` or `cancel`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowRecord {
    pub seller: Address,
    pub asset_offered: Address,
    pub asset_requested: Address,
    pub amount_offered: i128,   // Locked in the vault for the record's lifetime
    pub amount_requested: i128, // Paid by the buyer on accept
    pub vault: BytesN<32>,
}

/// Protocol-held sub-account locking the offered asset of one escrow.
///
/// The tokens sit at the engine's own contract address; `balance` is the
/// share of that custody belonging to this vault. `reserve` is the holding
/// cost the seller paid at open and gets back when the vault is closed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vault {
    pub id: BytesN<32>,
    pub escrow: BytesN<32>,
    pub asset: Address,
    pub balance: i128,
    pub reserve_asset: Address,
    pub reserve: i128,
}

/// Engine configuration, kept in instance storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub reserve_asset: Address,
    pub reserve: i128,
}

// Storage keys
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    // Escrow record keyed by its deterministic id
    Escrow(BytesN<32>),
    // Vault keyed by its deterministic id
    Vault(BytesN<32>),
}
