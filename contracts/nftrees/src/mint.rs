use crate::*;

#[near]
impl Contract {
    /// Buys exactly one tree. Requires an attached deposit of exactly
    /// [`UNIT_PRICE`]; the whole deposit is forwarded to the contract owner.
    /// Returns the id of the freshly minted token.
    ///
    /// All checks run before any state changes, so a rejection leaves the
    /// contract untouched and the runtime refunds the deposit.
    #[payable]
    #[handle_result]
    pub fn buy_item(&mut self) -> Result<U64, NftreesError> {
        crate::guards::check_exact_price()?;

        if self.total_supply >= self.cap {
            return Err(NftreesError::CapReached(format!(
                "All {} tokens under the current cap have been minted",
                self.cap
            )));
        }

        let buyer_id = env::predecessor_account_id();
        let token_id = self.internal_mint(&buyer_id, UNIT_PRICE.as_yoctonear());

        // Payment forward fires only after the mint has committed.
        let _ = Promise::new(self.owner_id.clone()).transfer(UNIT_PRICE);

        events::emit_tree_purchased(&buyer_id, token_id, U128(UNIT_PRICE.as_yoctonear()));
        Ok(U64(token_id))
    }
}

impl Contract {
    /// Supply counter is the id source: token ids are `1..=total_supply`
    /// with no gaps, which is what makes `token_uri` range checks possible.
    pub(crate) fn internal_mint(&mut self, owner_id: &AccountId, paid_price: u128) -> u64 {
        self.total_supply += 1;
        let token_id = self.total_supply as u64;

        let tree = Tree {
            owner_id: owner_id.clone(),
            minter_id: owner_id.clone(),
            minted_at: env::block_timestamp(),
            paid_price: U128(paid_price),
        };
        self.trees_by_id.insert(token_id, tree);
        self.add_tree_to_owner(owner_id, token_id);

        token_id
    }

    pub(crate) fn add_tree_to_owner(&mut self, owner_id: &AccountId, token_id: u64) {
        if !self.trees_per_owner.contains_key(owner_id) {
            self.trees_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::TreesPerOwnerInner {
                    account_id_hash: crate::guards::hash_account_id(owner_id),
                }),
            );
        }
        self.trees_per_owner
            .get_mut(owner_id)
            .unwrap()
            .insert(token_id);
    }
}
