//! HTTP mock endpoints
//!
//! Handlers receive the scenario through the [`ScenarioHeader`] extractor,
//! so a request without a valid `X-Test-Scenario` header is rejected before
//! the handler body runs.

pub mod accounts;
pub mod cards;
pub mod users;

use crate::extract::extract_scenario;
use crate::scenario::Scenario;
use crate::Error;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

/// Scenario taken from the `X-Test-Scenario` request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioHeader(pub Scenario);

#[async_trait]
impl<S> FromRequestParts<S> for ScenarioHeader
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_scenario(&parts.headers)
            .map(ScenarioHeader)
            .map_err(ApiError::from)
    }
}

/// Error response for the HTTP mocks: `{"detail": "<message>"}`.
///
/// Scenario problems are the caller's fault (400); fixture problems are
/// defects in the test suite itself (500).
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "HTTP mock failed");
        } else {
            warn!(error = %self.0, "HTTP mock request rejected");
        }

        (
            status,
            Json(serde_json::json!({
                "detail": self.0.to_string()
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{build_http_router, ServiceLoaders};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::tempdir;
    use tower::ServiceExt;
    use tracing_test::traced_test;

    const USER_URI: &str = "/api/v1/users/5b8f1c1e-8a3c-4c8e-9a77-1f0a7c9d2e10";

    #[tokio::test]
    #[traced_test]
    async fn rejected_scenario_never_touches_fixtures() {
        let dir = tempdir().unwrap();
        let router = build_http_router(ServiceLoaders::new(dir.path()));

        for header in [None, Some("xyz")] {
            let mut request = Request::builder().uri(USER_URI);
            if let Some(value) = header {
                request = request.header("x-test-scenario", value);
            }
            let response = router
                .clone()
                .oneshot(request.body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        assert!(!logs_contain("Loading mock file"));
        assert!(!logs_contain("Mock file not found"));
    }

    #[tokio::test]
    #[traced_test]
    async fn missing_fixture_is_logged_and_server_error() {
        let dir = tempdir().unwrap();
        let router = build_http_router(ServiceLoaders::new(dir.path()));

        let response = router
            .oneshot(
                Request::builder()
                    .uri(USER_URI)
                    .header("x-test-scenario", "user_with_active_debit_card_account")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(logs_contain("Mock file not found"));
        assert!(logs_contain("USERS_SERVICE_MOCK_LOADER"));
    }
}
