//! Identifier types

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A version 4 (random) UUID. Other versions are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct Uuid4(Uuid);

impl Uuid4 {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl TryFrom<Uuid> for Uuid4 {
    type Error = String;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        match value.get_version_num() {
            4 => Ok(Self(value)),
            other => Err(format!("'{value}' is a version {other} UUID, expected version 4")),
        }
    }
}

impl From<Uuid4> for Uuid {
    fn from(id: Uuid4) -> Self {
        id.0
    }
}

impl fmt::Display for Uuid4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
