//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,

    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// Add request ID for tracing
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Service name
    pub service: String,

    /// Individual component checks
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub checks: HashMap<String, HealthStatus>,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,

    /// Server version
    pub version: String,
}

impl HealthResponse {
    /// Healthy response for the named service
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            service: service.into(),
            checks: HashMap::new(),
            timestamp: Utc::now(),
            version: version.into(),
        }
    }

    /// Record a component check; any non-healthy check degrades the overall status
    pub fn with_check(mut self, name: impl Into<String>, status: HealthStatus) -> Self {
        if status != HealthStatus::Healthy && self.status == HealthStatus::Healthy {
            self.status = HealthStatus::Degraded;
        }
        self.checks.insert(name.into(), status);
        self
    }
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_serialization() {
        let response = ApiResponse::success(42).with_request_id("req-1");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert_eq!(json["request_id"], "req-1");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_response_has_no_data() {
        let response: ApiResponse<()> = ApiResponse::error("boom");
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("boom"));
        assert!(response.into_data().is_none());
    }

    #[test]
    fn test_health_degrades_on_failed_check() {
        let health = HealthResponse::healthy("svc", "0.1.0")
            .with_check("catalog", HealthStatus::Healthy)
            .with_check("stats", HealthStatus::Unhealthy);
        assert_eq!(health.status, HealthStatus::Degraded);
        assert_eq!(health.checks.len(), 2);
    }
}
