use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), NftreesError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(NftreesError::InvalidInput(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Exact-match payment check. No tolerance in either direction; a rejected
/// call panics out of the runtime, so the attached deposit bounces back to
/// the buyer untouched.
pub(crate) fn check_exact_price() -> Result<(), NftreesError> {
    let attached = env::attached_deposit().as_yoctonear();
    if attached != UNIT_PRICE.as_yoctonear() {
        return Err(NftreesError::InsufficientOrExcessPayment(format!(
            "Requires attached deposit of exactly {}, got {} yoctoNEAR",
            UNIT_PRICE, attached
        )));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), NftreesError> {
        if actor_id != &self.owner_id {
            return Err(NftreesError::only_owner("contract owner"));
        }
        Ok(())
    }
}
