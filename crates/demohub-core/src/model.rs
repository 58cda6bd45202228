//! Stored record model for the item store.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Body of a create request. Every field is required; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub value: String,
    /// Client-supplied, stored as-is.
    pub timestamp: String,
}

/// One persisted record. Field order matches the on-disk layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub value: String,
    pub timestamp: String,
    pub id: i64,
    pub created_at: String,
}

impl Item {
    /// Stamp a new record with a server id and creation time.
    pub fn from_new(new: NewItem, id: i64, created_at: String) -> Self {
        Self {
            name: new.name,
            value: new.value,
            timestamp: new.timestamp,
            id,
            created_at,
        }
    }
}

/// Current wall-clock time as RFC 3339 UTC with microseconds.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_key_order() {
        let item = Item::from_new(
            NewItem { name: "a".into(), value: "1".into(), timestamp: "t1".into() },
            1,
            "2024-01-01T00:00:00.000000Z".into(),
        );
        let s = serde_json::to_string(&item).unwrap_or_default();
        assert_eq!(
            s,
            r#"{"name":"a","value":"1","timestamp":"t1","id":1,"created_at":"2024-01-01T00:00:00.000000Z"}"#
        );
    }

    #[test]
    fn new_item_requires_all_fields() {
        let missing = serde_json::from_str::<NewItem>(r#"{"name":"a","value":"1"}"#);
        assert!(missing.is_err());

        let extra = serde_json::from_str::<NewItem>(
            r#"{"name":"a","value":"1","timestamp":"t","other":true}"#,
        );
        assert!(extra.is_ok());
    }

    #[test]
    fn now_is_rfc3339() {
        let now = now_iso8601();
        assert!(chrono::DateTime::parse_from_rfc3339(&now).is_ok());
        assert!(now.ends_with('Z'));
    }
}
