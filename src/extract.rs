//! Scenario extraction at the transport boundary.
//!
//! Both transports expose request metadata as a key/value carrier. The
//! validation logic lives once in [`extract_scenario`]; the HTTP and gRPC
//! adapters only know how to look a key up.

use crate::scenario::{Scenario, SCENARIO_KEY};
use crate::{Error, Result};

use axum::http::HeaderMap;
use std::borrow::Cow;
use tonic::metadata::MetadataMap;

/// Request metadata that can be searched by key.
pub trait MetadataCarrier {
    /// Returns the value stored under `key`, if present.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than dropped, so a
    /// present but unreadable value is never mistaken for an absent one.
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl MetadataCarrier for HeaderMap {
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        // HeaderName lookups are case-insensitive.
        self.get(key).map(|value| String::from_utf8_lossy(value.as_bytes()))
    }
}

impl MetadataCarrier for MetadataMap {
    fn get_value(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| String::from_utf8_lossy(value.as_encoded_bytes()))
    }
}

/// Pull the scenario out of request metadata.
///
/// An absent or empty value is [`Error::MissingScenario`]; anything outside
/// the declared set is [`Error::UnknownScenario`].
pub fn extract_scenario<C: MetadataCarrier + ?Sized>(carrier: &C) -> Result<Scenario> {
    match carrier.get_value(SCENARIO_KEY).as_deref() {
        None | Some("") => Err(Error::MissingScenario),
        Some(raw) => raw.parse(),
    }
}
