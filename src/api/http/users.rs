//! Users service HTTP mocks

use super::{ApiError, ScenarioHeader};
use crate::api::ServiceLoaders;
use crate::loader::{MockFileKey, MockLoader};
use crate::scenario::Scenario;
use crate::schema::{GetUserResponseSchema, Uuid4};
use crate::Result;

use axum::extract::{Path, State};
use axum::Json;

pub const GET_USER: &str = "get_user";

/// `GET /api/v1/users/{user_id}`
///
/// `user_id` is part of the wire contract and validated as a version 4 UUID,
/// but the response depends on the scenario alone.
pub async fn get_user(
    State(loaders): State<ServiceLoaders>,
    ScenarioHeader(scenario): ScenarioHeader,
    Path(_user_id): Path<Uuid4>,
) -> std::result::Result<Json<GetUserResponseSchema>, ApiError> {
    let response = loaders
        .users
        .load_key(MockFileKey::new(GET_USER, scenario))
        .await?;
    Ok(Json(response))
}

/// Load every users fixture for `scenario`.
pub async fn verify_fixtures(loader: &MockLoader, scenario: Scenario) -> Result<()> {
    loader
        .load_key::<GetUserResponseSchema>(MockFileKey::new(GET_USER, scenario))
        .await?;
    Ok(())
}
