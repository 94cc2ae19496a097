//! Response types for the salary engine API.
//!
//! This module defines the calculation envelope, the error response
//! structures and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::SalaryBreakdown;
use crate::presentation::SalarySummary;

/// Message attached to server errors; the request can simply be retried.
pub const RETRY_MESSAGE: &str = "حدث خطأ أثناء تحميل البيانات. يرجى المحاولة مرة أخرى.";

/// Message for requests lacking the classification parameters.
pub const MISSING_DATA_MESSAGE: &str = "البيانات المطلوبة غير متوفرة";

/// Envelope returned by `/results` and `/calculate`.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    /// Unique identifier of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// Engine version.
    pub engine_version: String,
    /// The raw breakdown.
    pub breakdown: SalaryBreakdown,
    /// The formatted sections.
    pub summary: SalarySummary,
}

impl CalculationResponse {
    /// Wraps a breakdown in a fresh envelope.
    pub fn new(breakdown: SalaryBreakdown) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            summary: SalarySummary::from_breakdown(&breakdown),
            breakdown,
        }
    }
}

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Extra context, such as the retry hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Error without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Error carrying details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// A request that parsed but is incomplete.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// A body that is not the expected JSON.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error for missing navigation parameters.
    pub fn missing_parameters(fields: &[&str]) -> Self {
        Self::with_details(
            "VALIDATION_ERROR",
            MISSING_DATA_MESSAGE,
            format!("missing parameters: {}", fields.join(", ")),
        )
    }
}

/// An [`ApiError`] paired with its status.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// Status to send.
    pub status: StatusCode,
    /// Body to send.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidReferenceData { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", message, RETRY_MESSAGE),
            },
            EngineError::ClassificationNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("CLASSIFICATION_NOT_FOUND", message),
            },
            EngineError::SalaryScaleNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("SALARY_SCALE_NOT_FOUND", message),
            },
            EngineError::InvalidSelection { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_SELECTION", message),
            },
            EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", message, RETRY_MESSAGE),
            },
        }
    }
}
