use near_sdk::NearToken;

/// Hard ceiling on the mint cap. `set_cap` can never go above this.
pub const MAX_CAP: u32 = 420;

/// Exact price of one tree. Over- and underpayment are both rejected.
pub const UNIT_PRICE: NearToken = NearToken::from_millinear(200);

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
