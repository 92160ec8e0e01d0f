//! Cards service HTTP mocks

use super::{ApiError, ScenarioHeader};
use crate::api::ServiceLoaders;
use crate::loader::{MockFileKey, MockLoader};
use crate::scenario::Scenario;
use crate::schema::{GetCardResponseSchema, GetCardsQuerySchema, GetCardsResponseSchema, Uuid4};
use crate::Result;

use axum::extract::{Path, Query, State};
use axum::Json;

pub const GET_CARD: &str = "get_card";
pub const GET_CARDS: &str = "get_cards";

/// `GET /api/v1/cards/{card_id}`
pub async fn get_card(
    State(loaders): State<ServiceLoaders>,
    ScenarioHeader(scenario): ScenarioHeader,
    Path(_card_id): Path<Uuid4>,
) -> std::result::Result<Json<GetCardResponseSchema>, ApiError> {
    let response = loaders
        .cards
        .load_key(MockFileKey::new(GET_CARD, scenario))
        .await?;
    Ok(Json(response))
}

/// `GET /api/v1/cards?accountId=...`
pub async fn get_cards(
    State(loaders): State<ServiceLoaders>,
    ScenarioHeader(scenario): ScenarioHeader,
    Query(_query): Query<GetCardsQuerySchema>,
) -> std::result::Result<Json<GetCardsResponseSchema>, ApiError> {
    let response = loaders
        .cards
        .load_key(MockFileKey::new(GET_CARDS, scenario))
        .await?;
    Ok(Json(response))
}

/// Load every cards fixture for `scenario`.
pub async fn verify_fixtures(loader: &MockLoader, scenario: Scenario) -> Result<()> {
    loader
        .load_key::<GetCardResponseSchema>(MockFileKey::new(GET_CARD, scenario))
        .await?;
    loader
        .load_key::<GetCardsResponseSchema>(MockFileKey::new(GET_CARDS, scenario))
        .await?;
    Ok(())
}
