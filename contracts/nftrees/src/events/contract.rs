use near_sdk::AccountId;

use super::builder::EventBuilder;

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new("owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_cap_updated(owner_id: &AccountId, old_cap: u32, new_cap: u32) {
    EventBuilder::new("cap_updated", owner_id)
        .field("old_cap", old_cap)
        .field("new_cap", new_cap)
        .emit();
}
