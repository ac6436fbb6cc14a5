//! Nftrees: a fixed-price NFT mint with an owner-adjustable supply cap.
//!
//! Anyone can buy exactly one tree per call by attaching exactly 0.2 NEAR;
//! the payment is forwarded in full to the contract owner. Token ids are
//! sequential starting at 1 and the metadata URI of a token is the base URI
//! with the token id appended. The owner can move the cap anywhere in
//! `[0, 420]`, including below the number already minted, which simply blocks
//! further minting until the cap is raised again.

use near_sdk::json_types::{U128, U64};
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod types;

mod events;

mod admin;
mod mint;
mod views;


pub use constants::*;
pub use errors::NftreesError;
pub use types::{StorageKey, Tree, TreeView};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/nftrees/nftrees-contracts",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub cap: u32,
    pub total_supply: u32,
    pub base_uri: String,

    pub trees_by_id: IterableMap<u64, Tree>,
    pub(crate) trees_per_owner: LookupMap<AccountId, IterableSet<u64>>,
}
