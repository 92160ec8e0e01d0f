//! Mock service surfaces
//!
//! Both transports expose the same downstream services:
//! - HTTP (axum) under `/api/v1/{users,cards,accounts}`
//! - gRPC (tonic) as `bank.{users,cards,accounts}.v1` services
//!
//! Every endpoint follows the same pipeline: extract the scenario from
//! request metadata, build the fixture key from the operation name and
//! scenario, load it through the service's [`MockLoader`] and return it.
//! Request parameters never influence which fixture is chosen.

pub mod grpc;
pub mod http;
mod telemetry;

use crate::config::MockServerConfig;
use crate::loader::MockLoader;
use crate::scenario::Scenario;
use crate::Result;

use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Base paths of the mocked HTTP services.
pub mod routes {
    pub const USERS: &str = "/api/v1/users";
    pub const CARDS: &str = "/api/v1/cards";
    pub const ACCOUNTS: &str = "/api/v1/accounts";
}

/// One loader per mocked downstream service.
#[derive(Debug, Clone)]
pub struct ServiceLoaders {
    pub users: Arc<MockLoader>,
    pub cards: Arc<MockLoader>,
    pub accounts: Arc<MockLoader>,
}

impl ServiceLoaders {
    /// Loaders rooted at `<root>/users`, `<root>/cards` and `<root>/accounts`.
    pub fn new(root: &Path) -> Self {
        Self {
            users: Arc::new(MockLoader::for_component(
                root.join("users"),
                "USERS_SERVICE_MOCK_LOADER",
            )),
            cards: Arc::new(MockLoader::for_component(
                root.join("cards"),
                "CARDS_SERVICE_MOCK_LOADER",
            )),
            accounts: Arc::new(MockLoader::for_component(
                root.join("accounts"),
                "ACCOUNTS_SERVICE_MOCK_LOADER",
            )),
        }
    }
}

/// Loaders for both transports. Built once at startup and shared by all
/// requests; holds no per-request state.
#[derive(Debug, Clone)]
pub struct MockServices {
    pub http: ServiceLoaders,
    pub grpc: ServiceLoaders,
}

impl MockServices {
    pub fn new(http_root: &Path, grpc_root: &Path) -> Self {
        Self {
            http: ServiceLoaders::new(http_root),
            grpc: ServiceLoaders::new(grpc_root),
        }
    }

    pub fn from_config(config: &MockServerConfig) -> Self {
        Self::new(&config.http_fixtures_root, &config.grpc_fixtures_root)
    }

    /// Load and validate the fixture of every (operation, scenario) pair on
    /// both transports. Stops at the first missing or non-conforming file.
    pub async fn verify_fixtures(&self) -> Result<()> {
        for scenario in Scenario::ALL {
            http::users::verify_fixtures(&self.http.users, scenario).await?;
            http::cards::verify_fixtures(&self.http.cards, scenario).await?;
            http::accounts::verify_fixtures(&self.http.accounts, scenario).await?;

            grpc::users::verify_fixtures(&self.grpc.users, scenario).await?;
            grpc::cards::verify_fixtures(&self.grpc.cards, scenario).await?;
            grpc::accounts::verify_fixtures(&self.grpc.accounts, scenario).await?;

            info!(%scenario, "Fixtures verified");
        }
        Ok(())
    }
}

/// Build the HTTP mock router
pub fn build_http_router(loaders: ServiceLoaders) -> Router {
    use axum::middleware;
    use axum::routing::get;
    use tower_http::cors::{Any, CorsLayer};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))

        // Users service
        .route(
            &format!("{}/:user_id", routes::USERS),
            get(http::users::get_user),
        )

        // Cards service
        .route(routes::CARDS, get(http::cards::get_cards))
        .route(
            &format!("{}/:card_id", routes::CARDS),
            get(http::cards::get_card),
        )

        // Accounts service
        .route(routes::ACCOUNTS, get(http::accounts::get_accounts))
        .route(
            &format!("{}/:account_id", routes::ACCOUNTS),
            get(http::accounts::get_account),
        )

        .with_state(loaders)
        .layer(middleware::from_fn(telemetry::http_observability_middleware))
        .layer(cors)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Readiness check endpoint
async fn ready_check() -> &'static str {
    "READY"
}
