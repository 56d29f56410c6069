#![no_std]

// Two-party swap escrow
// A seller locks one asset in a protocol-held vault; a buyer claims it by paying
// the requested asset, or the seller takes it back.

mod engine;
mod events;
mod ledger;
mod storage;
mod vault;

// Re-export the contract
pub use engine::{EscrowEngine, EscrowEngineClient};
