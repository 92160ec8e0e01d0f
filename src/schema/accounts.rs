//! Account schemas

use serde::{Deserialize, Serialize};
use super::Uuid4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Deposit,
    Savings,
    DebitCard,
    CreditCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    PendingClosure,
    Closed,
}

/// A bank account as seen through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSchema {
    pub id: Uuid4,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub status: AccountStatus,
    pub user_id: Uuid4,
    pub balance: f64,
}

/// `GET /api/v1/accounts/{account_id}` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAccountResponseSchema {
    pub account: AccountSchema,
}

/// `GET /api/v1/accounts` query parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountsQuerySchema {
    pub user_id: Uuid4,
}

/// `GET /api/v1/accounts` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAccountsResponseSchema {
    pub accounts: Vec<AccountSchema>,
}
