use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Protocol tag for escrow record identifiers.
pub const ESCROW_TAG: &str = "escrow";
/// Protocol tag for vault identifiers.
pub const VAULT_TAG: &str = "vault";

// Deterministic identifiers
pub mod ids {
    use super::*;

    /// Computes sha256(len(tag) || tag || seed).
    ///
    /// The tag is length-prefixed so that no (tag, seed) pair can produce the
    /// preimage of another. Tags are at most 255 bytes.
    pub fn derive(env: &Env, tag: &str, seed: &Bytes) -> BytesN<32> {
        debug_assert!(tag.len() <= u8::MAX as usize, "tag longer than 255 bytes");
        let mut bytes = Bytes::new(env);
        bytes.push_back(tag.len() as u8);
        bytes.extend_from_slice(tag.as_bytes());
        bytes.append(seed);
        env.crypto().sha256(&bytes).into()
    }

    /// Identifier of the escrow record a seller may open. Anyone can recompute it.
    pub fn escrow_id(env: &Env, seller: &Address) -> BytesN<32> {
        derive(env, ESCROW_TAG, &seller.clone().to_xdr(env))
    }

    /// Identifier of the vault that `custodian` holds for `escrow`.
    pub fn vault_id(env: &Env, custodian: &Address, escrow: &BytesN<32>) -> BytesN<32> {
        let mut seed = custodian.clone().to_xdr(env);
        seed.extend_from_array(&escrow.to_array());
        derive(env, VAULT_TAG, &seed)
    }
}
