//! gRPC mock services for the users, cards and accounts contracts.
//!
//! Each RPC pulls the scenario out of call metadata before anything else;
//! a missing or unknown scenario ends the call with `INVALID_ARGUMENT` and
//! no response message.

pub mod accounts;
pub mod cards;
pub mod users;

pub use accounts::AccountsMockService;
pub use cards::CardsMockService;
pub use users::UsersMockService;

use crate::api::telemetry::record_grpc_request;
use crate::api::ServiceLoaders;
use crate::contracts::accounts::accounts_service_server::AccountsServiceServer;
use crate::contracts::cards::cards_service_server::CardsServiceServer;
use crate::contracts::users::users_service_server::UsersServiceServer;
use crate::{Error, Result};

use std::future::Future;
use std::net::SocketAddr;
use std::time::Instant;
use tokio::sync::watch;
use tonic::transport::server::Router;
use tonic::transport::Server;
use tonic::{Code, Response, Status};
use tracing::{info_span, warn, Instrument};

type GrpcResult<T> = std::result::Result<T, Status>;

/// Run the gRPC mock server until `shutdown` flips to `true`.
pub async fn run_mock_grpc_server(
    addr: SocketAddr,
    loaders: &ServiceLoaders,
    shutdown: watch::Receiver<bool>,
) -> Result<()> {
    grpc_router(loaders)
        .serve_with_shutdown(addr, wait_for_shutdown(shutdown))
        .await
        .map_err(|e| Error::Internal(format!("Mock gRPC server error: {e}")))?;

    Ok(())
}

/// All mock services on one tonic router, ready to serve.
pub fn grpc_router(loaders: &ServiceLoaders) -> Router {
    Server::builder()
        .add_service(UsersServiceServer::new(UsersMockService::new(
            loaders.users.clone(),
        )))
        .add_service(CardsServiceServer::new(CardsMockService::new(
            loaders.cards.clone(),
        )))
        .add_service(AccountsServiceServer::new(AccountsMockService::new(
            loaders.accounts.clone(),
        )))
}

async fn wait_for_shutdown(mut shutdown: watch::Receiver<bool>) {
    if *shutdown.borrow() {
        return;
    }
    let _ = shutdown.changed().await;
}

/// Run one RPC inside a request span, translate its error into a status
/// and record the outcome.
async fn observe<T, F>(service: &'static str, method: &'static str, call: F) -> GrpcResult<Response<T>>
where
    F: Future<Output = Result<T>>,
{
    let start = Instant::now();
    let span = info_span!(
        "grpc.request",
        otel.kind = "server",
        rpc.system = "grpc",
        rpc.service = service,
        rpc.method = method
    );

    let result = call.instrument(span).await.map(Response::new).map_err(|e| {
        warn!(
            rpc.service = service,
            rpc.method = method,
            error = %e,
            "gRPC mock call rejected"
        );
        Status::from(e)
    });

    let code = match &result {
        Ok(_) => Code::Ok,
        Err(status) => status.code(),
    };
    record_grpc_request(service, method, code, start.elapsed().as_secs_f64());
    result
}
