//! Wire DTOs for the user and category REST endpoints.
//!
//! DESIGN
//! ======
//! Responses wrap payloads in a `{ "data": ... }` envelope and failures carry
//! `{ "error": "..." }`. These types mirror that shape so parsing stays
//! schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A category as stored by the remote API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned identifier; numeric ids are normalized to strings.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub is_active: bool,
}

impl Category {
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }
}

/// Body of a create request; the server assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `{ "data": T }` success envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Payload of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenPayload {
    pub token: String,
}

/// `{ "error": "..." }` failure body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
