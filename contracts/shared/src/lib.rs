#![no_std]

// Shared library for the two-party swap escrow
// Contains the data model, error taxonomy, identifier derivation and validation helpers

pub mod types;
pub mod ids;
pub mod checks;

// Re-export commonly used types for easier imports
pub use types::*;
pub use ids::{ids as escrow_ids, ESCROW_TAG, VAULT_TAG};
pub use checks::{
    only_asset, only_distinct_assets, only_funded, only_holder, only_non_negative, only_positive,
    only_seller, only_vault, total,
};

#[cfg(test)]
mod test;
