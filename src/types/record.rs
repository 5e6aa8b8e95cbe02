//! Captured webhook record
//!
//! The wire shape mirrors what webhook senders post: `{"event", "data", "version"}`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Dynamically typed payload of a webhook
pub type Payload = Map<String, Value>;

/// One captured webhook occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EventRecord {
    /// Caller-supplied event type, opaque to the buffer
    #[serde(rename = "event", default, deserialize_with = "null_as_default")]
    pub event_type: String,
    /// Arbitrary JSON object; absent or null decodes to an empty map
    #[serde(rename = "data", default, deserialize_with = "null_as_default")]
    pub payload: Payload,
    /// Opaque schema/version label
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
}

impl EventRecord {
    /// Create a record from its parts
    pub fn new(event_type: impl Into<String>, payload: Payload, version: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
            version: version.into(),
        }
    }

    /// Look up a payload field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
