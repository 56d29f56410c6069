#![cfg(test)]

use super::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Bytes, BytesN, Env};

extern crate std;

fn create_test_record(env: &Env, seller: &Address) -> EscrowRecord {
    EscrowRecord {
        seller: seller.clone(),
        asset_offered: Address::generate(env),
        asset_requested: Address::generate(env),
        amount_offered: 40,
        amount_requested: 40,
        vault: BytesN::from_array(env, &[0x07; 32]),
    }
}

// ===== IDENTIFIER TESTS =====

#[test]
fn test_escrow_id_is_deterministic() {
    let env = Env::default();
    let seller = Address::generate(&env);

    let first = escrow_ids::escrow_id(&env, &seller);
    let second = escrow_ids::escrow_id(&env, &seller);
    assert_eq!(first, second);
}

#[test]
fn test_escrow_id_differs_per_seller() {
    let env = Env::default();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    assert_ne!(
        escrow_ids::escrow_id(&env, &alice),
        escrow_ids::escrow_id(&env, &bob)
    );
}

#[test]
fn test_escrow_id_matches_tagged_hash() {
    let env = Env::default();
    let seller = Address::generate(&env);

    let mut preimage = Bytes::new(&env);
    preimage.push_back(6);
    preimage.extend_from_slice(b"escrow");
    preimage.append(&soroban_sdk::xdr::ToXdr::to_xdr(seller.clone(), &env));
    let expected: BytesN<32> = env.crypto().sha256(&preimage).into();

    assert_eq!(escrow_ids::escrow_id(&env, &seller), expected);
}

#[test]
fn test_tags_separate_namespaces() {
    let env = Env::default();
    let seed = Bytes::from_slice(&env, &[0x11; 32]);

    assert_ne!(
        escrow_ids::derive(&env, ESCROW_TAG, &seed),
        escrow_ids::derive(&env, VAULT_TAG, &seed)
    );
}

#[test]
#[should_panic(expected = "tag longer than 255 bytes")]
fn test_derive_rejects_oversized_tag() {
    let env = Env::default();
    let seed = Bytes::from_slice(&env, &[0x11; 32]);
    let tag = std::string::String::from_utf8(std::vec![b'a'; 256]).unwrap();

    escrow_ids::derive(&env, &tag, &seed);
}

#[test]
fn test_derive_accepts_longest_tag() {
    let env = Env::default();
    let seed = Bytes::from_slice(&env, &[0x11; 32]);
    let tag = std::string::String::from_utf8(std::vec![b'a'; 255]).unwrap();

    let first = escrow_ids::derive(&env, &tag, &seed);
    assert_eq!(first, escrow_ids::derive(&env, &tag, &seed));
}

#[test]
fn test_vault_id_bound_to_custodian() {
    let env = Env::default();
    let seller = Address::generate(&env);
    let engine = Address::generate(&env);
    let other_engine = Address::generate(&env);
    let escrow = escrow_ids::escrow_id(&env, &seller);

    let vault = escrow_ids::vault_id(&env, &engine, &escrow);
    assert_eq!(vault, escrow_ids::vault_id(&env, &engine, &escrow));
    assert_ne!(vault, escrow_ids::vault_id(&env, &other_engine, &escrow));
    assert_ne!(vault, escrow);
}

// ===== CHECK TESTS =====

#[test]
fn test_amount_checks() {
    assert_eq!(only_positive(1), Ok(()));
    assert_eq!(only_positive(0), Err(EscrowError::InvalidAmount));
    assert_eq!(only_positive(-5), Err(EscrowError::InvalidAmount));

    assert_eq!(only_non_negative(0), Ok(()));
    assert_eq!(only_non_negative(-1), Err(EscrowError::InvalidAmount));

    assert_eq!(total(40, 2), Ok(42));
    assert_eq!(total(i128::MAX, 1), Err(EscrowError::InvalidAmount));
}

#[test]
fn test_funded_check() {
    assert_eq!(only_funded(40, 40), Ok(()));
    assert_eq!(only_funded(39, 40), Err(EscrowError::InsufficientBalance));
    assert_eq!(only_funded(0, 0), Ok(()));
}

#[test]
fn test_sub_account_checks() {
    let env = Env::default();
    let asset = Address::generate(&env);
    let other_asset = Address::generate(&env);
    let holder = Address::generate(&env);
    let stranger = Address::generate(&env);
    let account = SubAccount::new(&asset, &holder);

    assert_eq!(only_asset(&account, &asset), Ok(()));
    assert_eq!(only_asset(&account, &other_asset), Err(EscrowError::AssetMismatch));
    assert_eq!(only_holder(&account, &holder), Ok(()));
    assert_eq!(only_holder(&account, &stranger), Err(EscrowError::AccountMismatch));

    assert_eq!(only_distinct_assets(&asset, &other_asset), Ok(()));
    assert_eq!(only_distinct_assets(&asset, &asset), Err(EscrowError::AssetMismatch));
}

#[test]
fn test_record_checks() {
    let env = Env::default();
    let seller = Address::generate(&env);
    let stranger = Address::generate(&env);
    let record = create_test_record(&env, &seller);

    assert_eq!(only_seller(&record, &seller), Ok(()));
    assert_eq!(only_seller(&record, &stranger), Err(EscrowError::Unauthorized));

    assert_eq!(only_vault(&record, &BytesN::from_array(&env, &[0x07; 32])), Ok(()));
    assert_eq!(
        only_vault(&record, &BytesN::from_array(&env, &[0x08; 32])),
        Err(EscrowError::AccountMismatch)
    );
}
