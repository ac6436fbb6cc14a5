mod builder;

mod contract;
mod nep171;
mod tree;

pub use contract::*;
pub use tree::*;

pub(crate) const STANDARD: &str = "nftrees";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";
