use near_sdk::require;

use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, base_uri: String, cap: u32) -> Self {
        require!(!base_uri.is_empty(), "Base URI cannot be empty");
        require!(
            base_uri.ends_with('/'),
            "Base URI must end with a trailing slash"
        );
        assert!(
            cap <= MAX_CAP,
            "Cap cannot exceed the ceiling of {}",
            MAX_CAP
        );
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            cap,
            total_supply: 0,
            base_uri,
            trees_by_id: IterableMap::new(StorageKey::TreesById),
            trees_per_owner: LookupMap::new(StorageKey::TreesPerOwner),
        }
    }

    /// Moves the cap anywhere in `[0, MAX_CAP]`. Lowering it below the
    /// current supply is allowed and stops minting until it is raised again;
    /// nothing already minted is affected.
    #[handle_result]
    pub fn set_cap(&mut self, new_cap: u32) -> Result<(), NftreesError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_cap > MAX_CAP {
            return Err(NftreesError::CapExceedsCeiling(format!(
                "Cap {} exceeds the ceiling of {}",
                new_cap, MAX_CAP
            )));
        }
        let old_cap = self.cap;
        self.cap = new_cap;
        events::emit_cap_updated(&self.owner_id, old_cap, new_cap);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), NftreesError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(NftreesError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
