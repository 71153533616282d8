//! HTTP health checks attached to container instances.
//!
//! A health check describes a request made by an external monitoring process;
//! the model only stores and validates it. Checks are declared either
//! programmatically through `ContainerInstance::add_health_check` or as a
//! [`HealthCheckSpec`] document, and both paths run the same validation.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ModelError, ModelResult};

/// Seconds between polls when no interval is given.
pub const DEFAULT_INTERVAL: i64 = 60;

/// Seconds before a poll is considered failed when no timeout is given.
pub const DEFAULT_TIMEOUT: i64 = 0;

/// Unvalidated health check declaration, e.g. from a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckSpec {
    /// Human readable description of what the check verifies
    pub name: String,
    /// Absolute URL to poll, e.g. "https://example.com/health"
    pub url: String,
    /// Seconds between polls (default 60)
    #[serde(default = "default_interval")]
    pub interval: i64,
    /// Seconds to wait for a response (default 0)
    #[serde(default)]
    pub timeout: i64,
}

fn default_interval() -> i64 {
    DEFAULT_INTERVAL
}

impl HealthCheckSpec {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            interval: DEFAULT_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// A validated HTTP health check. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "HealthCheckSpec")]
pub struct HttpHealthCheck {
    name: String,
    url: String,
    interval: u64,
    timeout: u64,
}

impl HttpHealthCheck {
    /// Validate and build a health check.
    ///
    /// Checks run in a fixed order (name, URL presence, URL syntax,
    /// interval, timeout) and the first failure is reported.
    pub fn new(name: &str, url: &str, interval: i64, timeout: i64) -> ModelResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::MissingName);
        }

        let url = url.trim();
        if url.is_empty() {
            return Err(ModelError::MissingUrl);
        }
        let invalid = || ModelError::InvalidUrl(url.to_string());
        // "localhost:8080" parses with "localhost" as its scheme and no host.
        let parsed = Url::parse(url).map_err(|_| invalid())?;
        if parsed.cannot_be_a_base()
            || parsed.host_str().is_none()
            || !matches!(parsed.scheme(), "http" | "https")
        {
            return Err(invalid());
        }

        let interval = u64::try_from(interval).map_err(|_| ModelError::NegativeInterval)?;
        let timeout = u64::try_from(timeout).map_err(|_| ModelError::NegativeTimeout)?;

        Ok(Self {
            name: name.to_string(),
            url: url.to_string(),
            interval,
            timeout,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Seconds between polls.
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Seconds to wait for a response; zero leaves it to the monitor.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }
}

impl TryFrom<HealthCheckSpec> for HttpHealthCheck {
    type Error = ModelError;

    fn try_from(spec: HealthCheckSpec) -> Result<Self, Self::Error> {
        Self::new(&spec.name, &spec.url, spec.interval, spec.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_scheme_qualified_urls() {
        let check = HttpHealthCheck::new("Web", "http://localhost:8080", 60, 0).unwrap();
        assert_eq!(check.name(), "Web");
        assert_eq!(check.url(), "http://localhost:8080");
        assert_eq!(check.interval(), 60);
        assert_eq!(check.timeout(), 0);

        assert!(HttpHealthCheck::new("Api", "https://api.example.com/health?deep=1", 5, 2).is_ok());
    }

    #[test]
    fn rejects_bare_hostnames() {
        assert_eq!(
            HttpHealthCheck::new("Web", "localhost", 60, 0),
            Err(ModelError::InvalidUrl("localhost".to_string()))
        );
        assert_eq!(
            HttpHealthCheck::new("Web", "www.example.com/health", 60, 0),
            Err(ModelError::InvalidUrl("www.example.com/health".to_string()))
        );
        for url in ["localhost:8080", "db.internal:8080", "foo:bar"] {
            assert_eq!(
                HttpHealthCheck::new("Web", url, 60, 0),
                Err(ModelError::InvalidUrl(url.to_string())),
                "{url}"
            );
        }
    }

    #[test]
    fn rejects_non_http_urls() {
        for url in [
            "ftp://files.example.com/health",
            "mailto:ops@example.com",
            "file:///tmp/up",
        ] {
            assert_eq!(
                HttpHealthCheck::new("Web", url, 60, 0),
                Err(ModelError::InvalidUrl(url.to_string())),
                "{url}"
            );
        }
    }

    #[test]
    fn name_is_checked_before_url() {
        assert_eq!(
            HttpHealthCheck::new("", "", -1, -1),
            Err(ModelError::MissingName)
        );
        assert_eq!(
            HttpHealthCheck::new("Web", " ", -1, -1),
            Err(ModelError::MissingUrl)
        );
        assert_eq!(
            HttpHealthCheck::new("Web", "https://localhost", -1, -1),
            Err(ModelError::NegativeInterval)
        );
    }

    #[test]
    fn zero_interval_and_timeout_are_allowed() {
        let check = HttpHealthCheck::new("Web", "https://localhost", 0, 0).unwrap();
        assert_eq!(check.interval(), 0);
        assert_eq!(check.timeout(), 0);
    }

    #[test]
    fn spec_applies_defaults_when_deserialized() {
        let spec: HealthCheckSpec =
            serde_json::from_str(r#"{"name":"Web","url":"https://localhost"}"#).unwrap();
        assert_eq!(spec, HealthCheckSpec::new("Web", "https://localhost"));
        assert_eq!(spec.interval, 60);
        assert_eq!(spec.timeout, 0);
    }

    #[test]
    fn deserializing_a_check_runs_validation() {
        let check: HttpHealthCheck = serde_json::from_str(
            r#"{"name":"Web","url":"https://localhost","interval":30,"timeout":5}"#,
        )
        .unwrap();
        assert_eq!(check.interval(), 30);
        assert_eq!(check.timeout(), 5);

        let err = serde_json::from_str::<HttpHealthCheck>(r#"{"name":"Web","url":"localhost"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("localhost is not a valid URL."));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let check = HttpHealthCheck::new("Web", "https://localhost", 60, 0).unwrap();
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Web",
                "url": "https://localhost",
                "interval": 60,
                "timeout": 0,
            })
        );
    }

    #[test]
    fn spec_schema_lists_required_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(HealthCheckSpec)).unwrap();
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("name")));
        assert!(required.contains(&serde_json::json!("url")));
        assert!(!required.contains(&serde_json::json!("interval")));
    }
}
