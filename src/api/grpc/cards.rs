//! `bank.cards.v1.CardsService` mock

use super::{observe, GrpcResult};
use crate::contracts::cards::cards_service_server::CardsService;
use crate::contracts::cards::{GetCardRequest, GetCardResponse, GetCardsRequest, GetCardsResponse};
use crate::extract::extract_scenario;
use crate::loader::{MockFileKey, MockLoader};
use crate::scenario::Scenario;
use crate::Result;

use std::sync::Arc;
use tonic::{Request, Response};

const GRPC_SERVICE_CARDS: &str = "bank.cards.v1.CardsService";

pub const GET_CARD: &str = "GetCard";
pub const GET_CARDS: &str = "GetCards";

pub struct CardsMockService {
    loader: Arc<MockLoader>,
}

impl CardsMockService {
    pub fn new(loader: Arc<MockLoader>) -> Self {
        Self { loader }
    }
}

#[tonic::async_trait]
impl CardsService for CardsMockService {
    async fn get_card(
        &self,
        request: Request<GetCardRequest>,
    ) -> GrpcResult<Response<GetCardResponse>> {
        observe(GRPC_SERVICE_CARDS, GET_CARD, async {
            let scenario = extract_scenario(request.metadata())?;
            self.loader.load_key(MockFileKey::new(GET_CARD, scenario)).await
        })
        .await
    }

    async fn get_cards(
        &self,
        request: Request<GetCardsRequest>,
    ) -> GrpcResult<Response<GetCardsResponse>> {
        observe(GRPC_SERVICE_CARDS, GET_CARDS, async {
            let scenario = extract_scenario(request.metadata())?;
            self.loader.load_key(MockFileKey::new(GET_CARDS, scenario)).await
        })
        .await
    }
}

/// Load every cards fixture for `scenario`.
pub async fn verify_fixtures(loader: &MockLoader, scenario: Scenario) -> Result<()> {
    loader
        .load_key::<GetCardResponse>(MockFileKey::new(GET_CARD, scenario))
        .await?;
    loader
        .load_key::<GetCardsResponse>(MockFileKey::new(GET_CARDS, scenario))
        .await?;
    Ok(())
}
