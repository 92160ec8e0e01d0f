//! Shared helpers for the mock service integration tests.

#![allow(dead_code)]

use bankmock::api::{MockServices, ServiceLoaders};
use bankmock::scenario::Scenario;

use std::fs;
use std::path::{Path, PathBuf};

pub const DEBIT: Scenario = Scenario::UserWithActiveDebitCardAccount;
pub const CREDIT: Scenario = Scenario::UserWithActiveCreditCardAccount;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn http_fixtures_root() -> PathBuf {
    repo_root().join("fixtures/http")
}

pub fn grpc_fixtures_root() -> PathBuf {
    repo_root().join("fixtures/grpc")
}

/// Services backed by the checked-in fixture set.
pub fn repo_services() -> MockServices {
    MockServices::new(&http_fixtures_root(), &grpc_fixtures_root())
}

pub fn http_loaders() -> ServiceLoaders {
    repo_services().http
}

pub fn grpc_loaders() -> ServiceLoaders {
    repo_services().grpc
}

/// Parsed JSON of `<root>/<relative>`.
pub fn fixture_json(root: &Path, relative: &str) -> serde_json::Value {
    let path = root.join(relative);
    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("invalid JSON in {}: {e}", path.display()))
}

/// Write `content` to `<root>/<relative>`, creating parent directories.
pub fn write_fixture(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
}
