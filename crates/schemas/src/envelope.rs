//! Versioned message envelope

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Wraps a payload with the schema it conforms to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Envelope {
    /// Identifier of the payload schema
    pub schema_id: String,

    /// Version of the payload schema
    pub version: String,

    /// Opaque payload
    pub payload: serde_json::Value,
}

impl Envelope {
    /// Envelope around a serializable payload
    pub fn wrap<T: Serialize>(
        schema_id: impl Into<String>,
        version: impl Into<String>,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            schema_id: schema_id.into(),
            version: version.into(),
            payload: serde_json::to_value(payload)?,
        })
    }
}
