//! User record and wire models for the `/users` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A stored user record.
///
/// `name` is trimmed and `email` lower-cased at creation; both are stored
/// verbatim afterwards. The record is never mutated once inserted.
///
/// # Example
/// ```json
/// {
///   "id": "5f6b9a1e-1d24-4c0b-a601-3c1f4a3f9a20",
///   "name": "Alice",
///   "email": "alice@example.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier (UUID v4), also the store key.
    pub id: String,

    /// Display name, surrounding whitespace stripped.
    pub name: String,

    /// Email address, normalized to lower case.
    pub email: String,
}

/// Request payload for `POST /users`.
///
/// Both fields are kept as raw JSON values so the handler can distinguish a
/// missing field from a present-but-wrong-type one (e.g. `{"name": 42}`).
///
/// # Example
/// ```json
/// {
///   "name": "Alice",
///   "email": "Alice@Example.com"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<JsonValue>,

    #[serde(default)]
    pub email: Option<JsonValue>,
}

impl CreateUserRequest {
    /// Presence check: `null`, `""`, `false` and `0` all count as missing,
    /// not just an absent key.
    pub fn is_present(value: &Option<JsonValue>) -> bool {
        match value {
            None | Some(JsonValue::Null) => false,
            Some(JsonValue::Bool(b)) => *b,
            Some(JsonValue::String(s)) => !s.is_empty(),
            Some(JsonValue::Number(n)) => n.as_f64() != Some(0.0),
            Some(_) => true,
        }
    }
}

/// Response payload for `GET /users`.
///
/// # Example
/// ```json
/// {
///   "users": [{"id": "…", "name": "Alice", "email": "alice@example.com"}],
///   "count": 1
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub count: usize,
}
