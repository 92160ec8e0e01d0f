//! Test scenarios
//!
//! A scenario names the state of the outside world a mock should simulate.
//! The set is closed: there is no wildcard and no default, every request
//! must name one explicitly.

use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata key carrying the scenario, shared by HTTP headers and gRPC metadata.
pub const SCENARIO_KEY: &str = "x-test-scenario";

/// Supported test scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    UserWithActiveDebitCardAccount,
    UserWithActiveCreditCardAccount,
}

impl Scenario {
    /// Every declared scenario, in declaration order.
    pub const ALL: [Scenario; 2] = [
        Scenario::UserWithActiveDebitCardAccount,
        Scenario::UserWithActiveCreditCardAccount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserWithActiveDebitCardAccount => "user_with_active_debit_card_account",
            Self::UserWithActiveCreditCardAccount => "user_with_active_credit_card_account",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scenario {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == value)
            .ok_or_else(|| Error::UnknownScenario(value.to_string()))
    }
}
