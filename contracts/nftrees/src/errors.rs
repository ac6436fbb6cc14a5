use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum NftreesError {
    Unauthorized(String),
    CapExceedsCeiling(String),
    CapReached(String),
    InsufficientOrExcessPayment(String),
    NonexistentToken(String),
    InvalidInput(String),
}

impl std::fmt::Display for NftreesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::CapExceedsCeiling(msg) => write!(f, "Cap exceeds ceiling: {}", msg),
            Self::CapReached(msg) => write!(f, "Cap reached: {}", msg),
            Self::InsufficientOrExcessPayment(msg) => write!(f, "Wrong payment: {}", msg),
            Self::NonexistentToken(msg) => write!(f, "Nonexistent token: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl NftreesError {
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn token_not_found(token_id: u64) -> Self {
        Self::NonexistentToken(format!("Token {} has not been minted", token_id))
    }
}
