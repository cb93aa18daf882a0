//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Standard success envelope: `{statusCode, status, message, data?}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicResponse<T> {
    /// HTTP status code mirrored in the body
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// `"success"` or `"error"`
    pub status: String,

    /// Human-readable message
    pub message: String,

    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> BasicResponse<T> {
    /// Create a successful response carrying data
    pub fn success(status_code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            status_code,
            status: String::from("success"),
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create a successful response without a payload
    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            status: String::from("success"),
            message: message.into(),
            data: None,
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
    Down,
}

/// Individual service health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Service status
    pub status: HealthStatus,

    /// Backend description or failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Individual service health checks
    pub services: BTreeMap<String, ServiceHealth>,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,

    /// Server version
    pub version: String,
}

impl HealthResponse {
    /// Start a report that is `up` until a failing service is added
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Up,
            services: BTreeMap::new(),
            timestamp: Utc::now(),
            version: version.into(),
        }
    }

    /// Record a service check; any `down` service marks the whole report `down`
    pub fn with_service(
        mut self,
        name: impl Into<String>,
        status: HealthStatus,
        message: Option<String>,
    ) -> Self {
        if status == HealthStatus::Down {
            self.status = HealthStatus::Down;
        }
        self.services
            .insert(name.into(), ServiceHealth { status, message });
        self
    }
}
