//! `bank.accounts.v1.AccountsService` mock

use super::{observe, GrpcResult};
use crate::contracts::accounts::accounts_service_server::AccountsService;
use crate::contracts::accounts::{
    GetAccountRequest, GetAccountResponse, GetAccountsRequest, GetAccountsResponse,
};
use crate::extract::extract_scenario;
use crate::loader::{MockFileKey, MockLoader};
use crate::scenario::Scenario;
use crate::Result;

use std::sync::Arc;
use tonic::{Request, Response};

const GRPC_SERVICE_ACCOUNTS: &str = "bank.accounts.v1.AccountsService";

pub const GET_ACCOUNT: &str = "GetAccount";
pub const GET_ACCOUNTS: &str = "GetAccounts";

pub struct AccountsMockService {
    loader: Arc<MockLoader>,
}

impl AccountsMockService {
    pub fn new(loader: Arc<MockLoader>) -> Self {
        Self { loader }
    }
}

#[tonic::async_trait]
impl AccountsService for AccountsMockService {
    async fn get_account(
        &self,
        request: Request<GetAccountRequest>,
    ) -> GrpcResult<Response<GetAccountResponse>> {
        observe(GRPC_SERVICE_ACCOUNTS, GET_ACCOUNT, async {
            let scenario = extract_scenario(request.metadata())?;
            self.loader.load_key(MockFileKey::new(GET_ACCOUNT, scenario)).await
        })
        .await
    }

    async fn get_accounts(
        &self,
        request: Request<GetAccountsRequest>,
    ) -> GrpcResult<Response<GetAccountsResponse>> {
        observe(GRPC_SERVICE_ACCOUNTS, GET_ACCOUNTS, async {
            let scenario = extract_scenario(request.metadata())?;
            self.loader.load_key(MockFileKey::new(GET_ACCOUNTS, scenario)).await
        })
        .await
    }
}

/// Load every accounts fixture for `scenario`.
pub async fn verify_fixtures(loader: &MockLoader, scenario: Scenario) -> Result<()> {
    loader
        .load_key::<GetAccountResponse>(MockFileKey::new(GET_ACCOUNT, scenario))
        .await?;
    loader
        .load_key::<GetAccountsResponse>(MockFileKey::new(GET_ACCOUNTS, scenario))
        .await?;
    Ok(())
}
