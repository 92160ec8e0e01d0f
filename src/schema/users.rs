//! User schemas

use serde::{Deserialize, Serialize};
use std::fmt;
use super::Uuid4;

/// E-mail address with a minimal shape check (`local@domain.tld`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let valid = match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain
                        .split_once('.')
                        .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                        .unwrap_or(false)
            }
            None => false,
        };
        if valid {
            Ok(Self(value))
        } else {
            Err(format!("'{value}' is not a valid email address"))
        }
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user as seen through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSchema {
    pub id: Uuid4,
    pub email: Email,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone_number: String,
}

/// `GET /api/v1/users/{user_id}` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUserResponseSchema {
    pub user: UserSchema,
}
