//! # bankmock
//!
//! Scenario-driven mock services for the banking demo test harness.
//!
//! Services under test (gateway, operations) call users, cards and accounts
//! services over HTTP and gRPC. In tests those dependencies are replaced by
//! mocks whose answers are chosen by a single piece of request metadata:
//! the `x-test-scenario` key.
//!
//! ## Resolution pipeline
//!
//! - **Scenario**: closed set of identifiers, no default value
//! - **Extractor**: reads and validates the scenario from HTTP headers or
//!   gRPC metadata, rejecting the call before any fixture is touched
//! - **Loader**: maps `{operation}/{scenario}.json` below a root directory to
//!   a typed contract value, failing loudly on missing or malformed fixtures
//! - **Endpoints**: one per remote operation; parameters are accepted as the
//!   wire contract demands but never influence the chosen fixture

pub mod api;
pub mod config;
pub mod context;
pub mod contracts;
pub mod extract;
pub mod loader;
pub mod scenario;
pub mod schema;
pub mod telemetry;

mod error;

pub use error::{Error, Result};

/// Re-exports for convenience
pub mod prelude {
    pub use crate::api::{build_http_router, MockServices, ServiceLoaders};
    pub use crate::config::{MockServerConfig, ServerAddress};
    pub use crate::context::{build_grpc_metadata, build_http_headers, RequestContext};
    pub use crate::extract::{extract_scenario, MetadataCarrier};
    pub use crate::loader::{MockFileKey, MockLoader};
    pub use crate::scenario::{Scenario, SCENARIO_KEY};
    pub use crate::{Error, Result};
}
