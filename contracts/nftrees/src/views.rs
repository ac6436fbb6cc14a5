use crate::*;

#[near]
impl Contract {
    pub fn get_cap(&self) -> u32 {
        self.cap
    }

    pub fn total_supply(&self) -> u32 {
        self.total_supply
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Metadata URI of a minted token: the base URI with the decimal token id
    /// appended. Ids outside `[1, total_supply]` have never been minted.
    #[handle_result]
    pub fn token_uri(&self, token_id: U64) -> Result<String, NftreesError> {
        let id = token_id.0;
        if id == 0 || id > self.total_supply as u64 {
            return Err(NftreesError::token_not_found(id));
        }
        Ok(format!("{}{}", self.base_uri, id))
    }

    pub fn tree_info(&self, token_id: U64) -> Option<TreeView> {
        let tree = self.trees_by_id.get(&token_id.0)?;
        Some(TreeView {
            token_id,
            owner_id: tree.owner_id.clone(),
            minter_id: tree.minter_id.clone(),
            minted_at: tree.minted_at,
            paid_price: tree.paid_price,
            token_uri: format!("{}{}", self.base_uri, token_id.0),
        })
    }

    pub fn supply_for_owner(&self, account_id: AccountId) -> u32 {
        self.trees_per_owner
            .get(&account_id)
            .map(|trees| trees.len())
            .unwrap_or(0)
    }

    pub fn trees_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U64>,
        limit: Option<u64>,
    ) -> Vec<U64> {
        let Some(trees_set) = self.trees_per_owner.get(&account_id) else {
            return vec![];
        };

        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100) as usize;

        trees_set
            .iter()
            .skip(start)
            .take(limit)
            .map(|id| U64(*id))
            .collect()
    }
}
