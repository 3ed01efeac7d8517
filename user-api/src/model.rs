//! Wire types for the users API.
//!
//! `User` is both the stored record and the response shape. Request bodies
//! deserialize into `UserInput`, which tolerates missing keys so that an
//! absent `name` is reported as a missing field rather than a malformed body.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// Request payload for create and update.
///
/// `id` is parsed so that a non-integer id still counts as a malformed body,
/// but its value is never used: the store assigns ids on create and the path
/// decides the id on update. `age` is accepted as-is.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UserInput {
    pub id: Option<i64>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    pub age: i64,
}

impl UserInput {
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Static metadata served by the health endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

impl ServiceInfo {
    pub fn new(app_name: impl Into<String>, docs: Option<String>) -> Self {
        Self {
            message: app_name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            docs,
        }
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_APP_NAME, None)
    }
}
