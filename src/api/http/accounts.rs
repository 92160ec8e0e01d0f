//! Accounts service HTTP mocks

use super::{ApiError, ScenarioHeader};
use crate::api::ServiceLoaders;
use crate::loader::{MockFileKey, MockLoader};
use crate::scenario::Scenario;
use crate::schema::{
    GetAccountResponseSchema, GetAccountsQuerySchema, GetAccountsResponseSchema, Uuid4,
};
use crate::Result;

use axum::extract::{Path, Query, State};
use axum::Json;

pub const GET_ACCOUNT: &str = "get_account";
pub const GET_ACCOUNTS: &str = "get_accounts";

/// `GET /api/v1/accounts/{account_id}`
pub async fn get_account(
    State(loaders): State<ServiceLoaders>,
    ScenarioHeader(scenario): ScenarioHeader,
    Path(_account_id): Path<Uuid4>,
) -> std::result::Result<Json<GetAccountResponseSchema>, ApiError> {
    let response = loaders
        .accounts
        .load_key(MockFileKey::new(GET_ACCOUNT, scenario))
        .await?;
    Ok(Json(response))
}

/// `GET /api/v1/accounts?userId=...`
pub async fn get_accounts(
    State(loaders): State<ServiceLoaders>,
    ScenarioHeader(scenario): ScenarioHeader,
    Query(_query): Query<GetAccountsQuerySchema>,
) -> std::result::Result<Json<GetAccountsResponseSchema>, ApiError> {
    let response = loaders
        .accounts
        .load_key(MockFileKey::new(GET_ACCOUNTS, scenario))
        .await?;
    Ok(Json(response))
}

/// Load every accounts fixture for `scenario`.
pub async fn verify_fixtures(loader: &MockLoader, scenario: Scenario) -> Result<()> {
    loader
        .load_key::<GetAccountResponseSchema>(MockFileKey::new(GET_ACCOUNT, scenario))
        .await?;
    loader
        .load_key::<GetAccountsResponseSchema>(MockFileKey::new(GET_ACCOUNTS, scenario))
        .await?;
    Ok(())
}
