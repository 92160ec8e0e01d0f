//! Client-side request context.
//!
//! Tests and test clients describe which outside world they expect with a
//! [`RequestContext`], then translate it into transport metadata so the mock
//! services can read it back.

use crate::scenario::{Scenario, SCENARIO_KEY};

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use tonic::metadata::{MetadataMap, MetadataValue};

/// Per-request control information for the mock layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub scenario: Scenario,
}

impl RequestContext {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// Attach the context to an outgoing gRPC request.
    pub fn attach<T>(&self, mut request: tonic::Request<T>) -> tonic::Request<T> {
        request
            .metadata_mut()
            .insert(SCENARIO_KEY, MetadataValue::from_static(self.scenario.as_str()));
        request
    }
}

/// Headers for an HTTP request made under `context`.
pub fn build_http_headers(context: &RequestContext) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(SCENARIO_KEY),
        HeaderValue::from_static(context.scenario.as_str()),
    );
    headers
}

/// Metadata for a gRPC call made under `context`.
pub fn build_grpc_metadata(context: &RequestContext) -> MetadataMap {
    let mut metadata = MetadataMap::new();
    metadata.insert(SCENARIO_KEY, MetadataValue::from_static(context.scenario.as_str()));
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_scenario;

    #[test]
    fn built_metadata_round_trips_through_extraction() {
        for scenario in Scenario::ALL {
            let context = RequestContext::new(scenario);
            assert_eq!(extract_scenario(&build_http_headers(&context)).unwrap(), scenario);
            assert_eq!(extract_scenario(&build_grpc_metadata(&context)).unwrap(), scenario);

            let request = context.attach(tonic::Request::new(()));
            assert_eq!(extract_scenario(request.metadata()).unwrap(), scenario);
        }
    }
}
