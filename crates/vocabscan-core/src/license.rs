use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::models::{UNKNOWN_LICENSE, WarningKind};
use crate::report::Report;

/// The consumed remote capability: both lookups are total, any network or
/// payload failure is `None`.
pub trait LicenseService {
    /// First license URI discoverable in the RDF document at `uri`.
    fn find_license_in_document(&self, uri: &str) -> Option<String>;
    /// Human-readable title of a license URI.
    fn license_label(&self, license_uri: &str) -> Option<String>;
}

/// Client for the Licensius REST API.
#[derive(Clone)]
pub struct LicensiusClient {
    config: ResolverConfig,
    http: Client,
}

impl std::fmt::Debug for LicensiusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicensiusClient")
            .field("find_license_endpoint", &self.config.find_license_endpoint)
            .field("license_info_endpoint", &self.config.license_info_endpoint)
            .finish_non_exhaustive()
    }
}

impl LicensiusClient {
    pub fn new(config: ResolverConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { config, http })
    }

    fn get_json(&self, endpoint: &str, uri: &str) -> Option<serde_json::Value> {
        let response = self
            .http
            .get(endpoint)
            .query(&[("uri", uri)])
            .send()
            .inspect_err(|e| tracing::debug!(endpoint, error = %e, "license lookup failed"))
            .ok()?;
        if !response.status().is_success() {
            tracing::debug!(endpoint, status = %response.status(), "license lookup rejected");
            return None;
        }
        response.json().ok()
    }
}

impl LicenseService for LicensiusClient {
    fn find_license_in_document(&self, uri: &str) -> Option<String> {
        // The endpoint answers with an array of candidate statements; the
        // first entry carrying a non-empty "license" string wins.
        let payload = self.get_json(&self.config.find_license_endpoint, uri)?;
        payload.as_array()?.iter().find_map(|candidate| {
            candidate
                .get("license")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        })
    }

    fn license_label(&self, license_uri: &str) -> Option<String> {
        let payload = self.get_json(&self.config.license_info_endpoint, license_uri)?;
        payload
            .get("label")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != UNKNOWN_LICENSE)
}

/// Best-effort resolution chain for a vocabulary's license.
///
/// Remote document scan first, then the label lookup for whatever it
/// found; if the remote chain yields nothing usable the locally declared
/// `license`/`rights` value is restored; with no source at all both
/// fields become the `"unknown"` sentinel and one `LICENCE_NOT_FOUND`
/// warning is recorded under the namespace URI. Remote faults never
/// escape this function.
pub fn resolve_license(
    service: &dyn LicenseService,
    namespace_uri: &str,
    local_license: Option<&str>,
    report: &Report,
) -> Result<(String, String)> {
    if let Some(license_uri) = service
        .find_license_in_document(namespace_uri)
        .filter(|s| !s.is_empty())
    {
        if let Some(label) = service.license_label(&license_uri).filter(|s| !s.is_empty()) {
            return Ok((license_uri, label));
        }
        // Title lookup failed: a locally declared value beats a bare URI.
        if let Some(local) = non_empty(local_license) {
            return Ok((local.to_string(), local.to_string()));
        }
        return Ok((license_uri, UNKNOWN_LICENSE.to_string()));
    }

    if let Some(local) = non_empty(local_license) {
        return Ok((local.to_string(), local.to_string()));
    }

    report.record_warning(namespace_uri, WarningKind::LicenceNotFound)?;
    Ok((UNKNOWN_LICENSE.to_string(), UNKNOWN_LICENSE.to_string()))
}
