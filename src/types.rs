//! Core types for randomcard

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{Error, Result};

/// A card record as returned by the upstream API.
///
/// The payload is kept as an opaque JSON object; only `name` is ever read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardRecord(Map<String, Value>);

impl CardRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Parse a raw upstream body. Anything other than a JSON object is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(Error::UnexpectedPayload(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Raw `name` field, if the upstream sent one
    pub fn name(&self) -> Option<&Value> {
        self.0.get("name")
    }

    /// The card name, provided it is present and truthy
    pub fn card_name(&self) -> Result<Value> {
        match self.name() {
            Some(name) if is_truthy(name) => Ok(name.clone()),
            _ => Err(Error::MissingName),
        }
    }
}

impl From<Map<String, Value>> for CardRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Body returned by `POST /RandomCard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RandomCardResponse {
    Card {
        /// Card name as sent by the upstream (normally a string)
        #[schema(value_type = String)]
        name: Value,
    },
    Error {
        /// Error message
        error: String,
    },
}

impl RandomCardResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, RandomCardResponse::Error { .. })
    }
}

impl From<Result<Value>> for RandomCardResponse {
    fn from(result: Result<Value>) -> Self {
        match result {
            Ok(name) => RandomCardResponse::Card { name },
            Err(e) => RandomCardResponse::Error {
                error: e.to_string(),
            },
        }
    }
}

/// Truthiness of a JSON value: null, false, zero and empty containers are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
