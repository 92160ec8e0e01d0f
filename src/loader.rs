//! Mock fixture loading
//!
//! [`MockLoader`] is the single place where fixture files become typed
//! values. It knows nothing about transports or why a scenario was chosen:
//! it resolves a relative path under its root, reads it and validates it
//! against the contract type the caller asks for.
//!
//! Nothing is cached. Fixtures are small and every call re-reads storage,
//! so edits to fixture files take effect on the next request.

use crate::scenario::Scenario;
use crate::{Error, Result};

use serde::de::DeserializeOwned;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, info_span, Instrument, Span};

/// Deterministic fixture location for one (operation, scenario) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MockFileKey {
    pub operation: &'static str,
    pub scenario: Scenario,
}

impl MockFileKey {
    pub fn new(operation: &'static str, scenario: Scenario) -> Self {
        Self {
            operation,
            scenario,
        }
    }

    /// Path relative to a loader root: `{operation}/{scenario}.json`.
    pub fn path(&self) -> PathBuf {
        Path::new(self.operation).join(format!("{}.json", self.scenario))
    }
}

impl fmt::Display for MockFileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}.json", self.operation, self.scenario)
    }
}

/// Reads fixtures below a root directory and validates them into contract types.
#[derive(Debug, Clone)]
pub struct MockLoader {
    root: PathBuf,
    span: Span,
}

impl MockLoader {
    /// Create a loader that records its activity under `span`.
    pub fn new(root: impl Into<PathBuf>, span: Span) -> Self {
        Self {
            root: root.into(),
            span,
        }
    }

    /// Create a loader with a span named after `component`,
    /// e.g. `USERS_SERVICE_MOCK_LOADER`.
    pub fn for_component(root: impl Into<PathBuf>, component: &str) -> Self {
        Self::new(root, info_span!("mock_loader", component = %component))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a fixture's raw content.
    ///
    /// A missing file is a test-suite authoring defect and always fails with
    /// [`Error::MockFileNotFound`].
    pub async fn read_raw(&self, file: impl AsRef<Path>) -> Result<String> {
        let path = self.root.join(file.as_ref());

        async {
            match tokio::fs::read_to_string(&path).await {
                Ok(raw) => {
                    info!(path = %path.display(), "Loading mock file");
                    Ok(raw)
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    error!(path = %path.display(), "Mock file not found");
                    Err(Error::MockFileNotFound(path.clone()))
                }
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to read mock file");
                    Err(Error::Io(e))
                }
            }
        }
        .instrument(self.span.clone())
        .await
    }

    /// Read a fixture and validate it against contract `T`.
    ///
    /// Content that does not conform fails with [`Error::ContractValidation`];
    /// a partially valid value is never returned.
    pub async fn load<T: DeserializeOwned>(&self, file: impl AsRef<Path>) -> Result<T> {
        let file = file.as_ref();
        let raw = self.read_raw(file).await?;
        let contract = contract_name::<T>();

        self.span.in_scope(|| {
            debug!(contract, path = %file.display(), "Validating mock against contract");

            serde_json::from_str(&raw).map_err(|e| {
                error!(contract, path = %file.display(), error = %e, "Mock file failed contract validation");
                Error::ContractValidation {
                    contract,
                    path: self.root.join(file),
                    message: e.to_string(),
                }
            })
        })
    }

    /// Load the fixture for `key`.
    pub async fn load_key<T: DeserializeOwned>(&self, key: MockFileKey) -> Result<T> {
        self.load(key.path()).await
    }
}

/// Short type name for logs and error messages. Generic types keep their
/// full path.
fn contract_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    if full.contains('<') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn key_path_is_operation_then_scenario() {
        let key = MockFileKey::new("GetUser", Scenario::UserWithActiveDebitCardAccount);
        assert_eq!(
            key.path(),
            Path::new("GetUser").join("user_with_active_debit_card_account.json")
        );
        assert_eq!(
            key.to_string(),
            "GetUser/user_with_active_debit_card_account.json"
        );
    }

    #[test]
    fn contract_name_strips_module_path() {
        assert_eq!(contract_name::<Sample>(), "Sample");
    }

    #[test]
    fn contract_name_keeps_generic_types_whole() {
        let name = contract_name::<Vec<Sample>>();
        assert_eq!(name, std::any::type_name::<Vec<Sample>>());
        assert!(name.ends_with("Sample>"), "{name}");
        assert!(name.contains("Vec<"), "{name}");
    }

    #[tokio::test]
    async fn load_rereads_changed_content() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("sample.json");
        std::fs::write(&file, r#"{"name":"a","count":1}"#).unwrap();

        let loader = MockLoader::for_component(dir.path(), "TEST_LOADER");
        let first: Sample = loader.load("sample.json").await.unwrap();
        assert_eq!(first.count, 1);

        std::fs::write(&file, r#"{"name":"a","count":2}"#).unwrap();
        let second: Sample = loader.load("sample.json").await.unwrap();
        assert_eq!(second.count, 2);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let loader = MockLoader::for_component(dir.path(), "TEST_LOADER");

        let err = loader.read_raw("GetUser/none.json").await.unwrap_err();
        match err {
            Error::MockFileNotFound(path) => assert_eq!(path, dir.path().join("GetUser/none.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn absent_required_field_fails_validation() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("sample.json"), r#"{"name":"a"}"#).unwrap();
        let loader = MockLoader::for_component(dir.path(), "TEST_LOADER");

        let err = loader.load::<Sample>("sample.json").await.unwrap_err();
        match err {
            Error::ContractValidation {
                contract, message, ..
            } => {
                assert_eq!(contract, "Sample");
                assert!(message.contains("count"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
