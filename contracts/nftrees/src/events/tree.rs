use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::builder::EventBuilder;
use super::nep171;

pub fn emit_tree_purchased(buyer_id: &AccountId, token_id: u64, price: U128) {
    // Wallet-facing standard event first, then the contract-specific one.
    nep171::emit_mint(buyer_id.as_str(), &[token_id.to_string()], None);

    EventBuilder::new("tree_purchased", buyer_id)
        .field("token_id", token_id.to_string())
        .field("price", price)
        .emit();
}
