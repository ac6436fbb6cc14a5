use near_sdk::json_types::{U128, U64};
use near_sdk::{AccountId, BorshStorageKey, near};

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    TreesById,
    TreesPerOwner,
    TreesPerOwnerInner { account_id_hash: Vec<u8> },
}

/// Per-token record. Created on purchase, never mutated or removed.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Tree {
    pub owner_id: AccountId,
    pub minter_id: AccountId,
    pub minted_at: u64,
    pub paid_price: U128,
}

#[near(serializers = [json])]
pub struct TreeView {
    pub token_id: U64,
    pub owner_id: AccountId,
    pub minter_id: AccountId,
    pub minted_at: u64,
    pub paid_price: U128,
    pub token_uri: String,
}
