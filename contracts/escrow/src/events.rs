use escrow_shared::EscrowRecord;
use soroban_sdk::{symbol_short, Address, BytesN, Env};

pub(crate) fn opened(env: &Env, id: &BytesN<32>, record: &EscrowRecord) {
    env.events().publish(
        (symbol_short!("opened"), id.clone()),
        (
            record.seller.clone(),
            record.asset_offered.clone(),
            record.amount_offered,
            record.asset_requested.clone(),
            record.amount_requested,
        ),
    );
}

pub(crate) fn accepted(env: &Env, id: &BytesN<32>, buyer: &Address, seller: &Address) {
    env.events().publish(
        (symbol_short!("accepted"), id.clone()),
        (buyer.clone(), seller.clone()),
    );
}

pub(crate) fn cancelled(env: &Env, id: &BytesN<32>, seller: &Address) {
    env.events()
        .publish((symbol_short!("cancelled"), id.clone()), seller.clone());
}

pub(crate) fn reserve_set(env: &Env, reserve_asset: &Address, reserve: i128) {
    env.events()
        .publish((symbol_short!("reserve"),), (reserve_asset.clone(), reserve));
}
