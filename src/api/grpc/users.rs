//! `bank.users.v1.UsersService` mock

use super::{observe, GrpcResult};
use crate::contracts::users::users_service_server::UsersService;
use crate::contracts::users::{GetUserRequest, GetUserResponse};
use crate::extract::extract_scenario;
use crate::loader::{MockFileKey, MockLoader};
use crate::scenario::Scenario;
use crate::Result;

use std::sync::Arc;
use tonic::{Request, Response};

const GRPC_SERVICE_USERS: &str = "bank.users.v1.UsersService";

pub const GET_USER: &str = "GetUser";

pub struct UsersMockService {
    loader: Arc<MockLoader>,
}

impl UsersMockService {
    pub fn new(loader: Arc<MockLoader>) -> Self {
        Self { loader }
    }
}

#[tonic::async_trait]
impl UsersService for UsersMockService {
    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> GrpcResult<Response<GetUserResponse>> {
        observe(GRPC_SERVICE_USERS, GET_USER, async {
            let scenario = extract_scenario(request.metadata())?;
            self.loader.load_key(MockFileKey::new(GET_USER, scenario)).await
        })
        .await
    }
}

/// Load every users fixture for `scenario`.
pub async fn verify_fixtures(loader: &MockLoader, scenario: Scenario) -> Result<()> {
    loader
        .load_key::<GetUserResponse>(MockFileKey::new(GET_USER, scenario))
        .await?;
    Ok(())
}
