use near_sdk::serde::Serialize;
use near_sdk::serde_json::{Map, Value, json, to_value};
use near_sdk::{AccountId, env};

use super::{PREFIX, STANDARD, VERSION};

/// NEP-297 envelope for contract-specific events. One `data` entry per log.
pub(crate) struct EventBuilder {
    event: &'static str,
    data: Map<String, Value>,
}

impl EventBuilder {
    pub fn new(event: &'static str, actor_id: &AccountId) -> Self {
        let mut data = Map::new();
        data.insert("actor_id".into(), Value::String(actor_id.to_string()));
        Self { event, data }
    }

    pub fn field(mut self, key: &str, value: impl Serialize) -> Self {
        if let Ok(v) = to_value(value) {
            self.data.insert(key.into(), v);
        }
        self
    }

    pub fn emit(self) {
        let payload = json!({
            "standard": STANDARD,
            "version": VERSION,
            "event": self.event,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", PREFIX, payload));
    }
}

/// NEP-297 envelope for NEP-171 standard events (`nft_mint` and friends),
/// consumed by wallets and indexers.
pub(crate) struct Nep171Event {
    event: &'static str,
    version: &'static str,
    data: Map<String, Value>,
}

impl Nep171Event {
    pub fn new(event: &'static str, version: &'static str) -> Self {
        Self {
            event,
            version,
            data: Map::new(),
        }
    }

    pub fn field(mut self, key: &str, value: impl Serialize) -> Self {
        if let Ok(v) = to_value(value) {
            self.data.insert(key.into(), v);
        }
        self
    }

    pub fn field_opt(self, key: &str, value: Option<impl Serialize>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    pub fn emit(self) {
        let payload = json!({
            "standard": "nep171",
            "version": self.version,
            "event": self.event,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", PREFIX, payload));
    }
}
