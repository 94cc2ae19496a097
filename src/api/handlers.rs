//! HTTP request handlers for the salary engine API.
//!
//! This module contains the router and the handler functions for all API
//! endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::evaluate_selection;
use crate::error::EngineError;
use crate::models::{PositionSelection, SalaryBreakdown};
use crate::presentation::render_payslip;
use crate::wizard::NavigationParams;

use super::request::{CalculationRequest, MainCorpQuery, PractitionerQuery, SubCorpQuery};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/classifications/main-corps", get(main_corps_handler))
        .route("/classifications/sub-corps", get(sub_corps_handler))
        .route("/classifications/grades", get(grades_handler))
        .route("/salary-scales/:category", get(salary_scale_handler))
        .route("/positions", get(positions_handler))
        .route("/practitioner-data", get(practitioner_data_handler))
        .route("/results", get(results_handler))
        .route("/print", get(print_handler))
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handler for GET /classifications/main-corps.
async fn main_corps_handler(State(state): State<AppState>) -> Response {
    Json(state.reference().main_corps()).into_response()
}

/// Handler for GET /classifications/sub-corps.
async fn sub_corps_handler(
    State(state): State<AppState>,
    Query(query): Query<MainCorpQuery>,
) -> Response {
    Json(state.reference().sub_corps(&query.main_corp)).into_response()
}

/// Handler for GET /classifications/grades.
async fn grades_handler(
    State(state): State<AppState>,
    Query(query): Query<SubCorpQuery>,
) -> Response {
    Json(state.reference().grades(&query.main_corp, &query.sub_corp)).into_response()
}

/// Handler for GET /salary-scales/:category.
async fn salary_scale_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Response {
    match state.reference().salary_scale(&category) {
        Some(scale) => Json(scale).into_response(),
        None => {
            debug!(category = %category, "Salary scale not found");
            ApiErrorResponse::from(EngineError::SalaryScaleNotFound { category }).into_response()
        }
    }
}

/// Handler for GET /positions.
async fn positions_handler(
    State(state): State<AppState>,
    Query(query): Query<SubCorpQuery>,
) -> Response {
    Json(state.reference().positions_for(&query.main_corp, &query.sub_corp)).into_response()
}

/// Handler for GET /practitioner-data.
///
/// Returns the classification, its salary scale, the selected position and
/// every compensation code in one bundle.
async fn practitioner_data_handler(
    State(state): State<AppState>,
    Query(query): Query<PractitionerQuery>,
) -> Response {
    let position = PositionSelection::from_param(&query.poste_sup);
    match state
        .reference()
        .lookup_bundle(&query.main_corp, &query.sub_corp, &query.grade, position)
    {
        Ok(bundle) => Json(bundle).into_response(),
        Err(err) => {
            warn!(
                main_corp = %query.main_corp,
                sub_corp = %query.sub_corp,
                grade = %query.grade,
                "Practitioner not found"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Evaluates the selection carried by navigation parameters.
fn breakdown_for_params(
    state: &AppState,
    params: NavigationParams,
    correlation_id: Uuid,
) -> Result<SalaryBreakdown, ApiErrorResponse> {
    let missing = params.missing_fields();
    if !missing.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            missing = ?missing,
            "Navigation parameters missing"
        );
        return Err(ApiErrorResponse::bad_request(ApiError::missing_parameters(
            &missing,
        )));
    }

    let input = params.into_input();
    let start_time = Instant::now();
    let breakdown = evaluate_selection(&input, state.reference()).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
        ApiErrorResponse::from(err)
    })?;

    info!(
        correlation_id = %correlation_id,
        category = %breakdown.category,
        gross_salary = %breakdown.gross_salary,
        net_salary = %breakdown.net_salary.round_dp(2),
        warnings = breakdown.audit_trace.warnings.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Calculation completed successfully"
    );
    Ok(breakdown)
}

/// Handler for GET /results.
async fn results_handler(
    State(state): State<AppState>,
    Query(params): Query<NavigationParams>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing results request");

    match breakdown_for_params(&state, params, correlation_id) {
        Ok(breakdown) => Json(CalculationResponse::new(breakdown)).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Handler for GET /print.
///
/// Returns the payslip as plain text.
async fn print_handler(
    State(state): State<AppState>,
    Query(params): Query<NavigationParams>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing print request");

    match breakdown_for_params(&state, params, correlation_id) {
        Ok(breakdown) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_payslip(&breakdown, Utc::now().date_naive()),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

/// Handler for POST /calculate.
///
/// Accepts a calculation request and returns the salary breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let input = match request.into_input() {
        Ok(input) => input,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid selection");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    match evaluate_selection(&input, state.reference()) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                category = %breakdown.category,
                gross_salary = %breakdown.gross_salary,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Calculation completed successfully"
            );
            Json(CalculationResponse::new(breakdown)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/reference"))
            .expect("Failed to load reference data");
        AppState::new(config)
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = create_router(create_test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_calculate(body: &str, content_type: Option<&str>) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method("POST").uri("/calculate");
        if let Some(content_type) = content_type {
            builder = builder.header("Content-Type", content_type);
        }
        let response = create_router(create_test_state())
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn nurse_request() -> String {
        serde_json::json!({
            "main_corp": "شبه الطبيين",
            "sub_corp": "الممرضون",
            "grade": "ممرض حاصل على شهادة الدولة",
            "seniority_step": 5,
            "risk_tier": "high",
            "family": {"children": 2, "older_children": 1, "spouse_employed": true}
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_calculate_returns_breakdown() {
        let (status, body) = post_calculate(&nurse_request(), Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["breakdown"]["category"], "11");
        let gross: Decimal = body["breakdown"]["gross_salary"].as_str().unwrap().parse().unwrap();
        assert_eq!(gross, Decimal::from(42070));
        assert_eq!(body["summary"]["net_salary"], "36,190.55");
        assert!(body["calculation_id"].is_string());
        assert_eq!(body["engine_version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_calculate_malformed_json() {
        let (status, body) = post_calculate("{invalid json", Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_calculate_missing_field() {
        let (status, body) =
            post_calculate(r#"{"main_corp": "a", "sub_corp": "b"}"#, Some("application/json"))
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("missing field"));
    }

    #[tokio::test]
    async fn test_calculate_missing_content_type() {
        let (status, body) = post_calculate(&nurse_request(), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_calculate_unknown_classification() {
        let body = r#"{"main_corp": "a", "sub_corp": "b", "grade": "c"}"#;
        let (status, body) = post_calculate(body, Some("application/json")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "CLASSIFICATION_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_calculate_seniority_out_of_range() {
        let body = serde_json::json!({
            "main_corp": "شبه الطبيين",
            "sub_corp": "الممرضون",
            "grade": "ممرض حاصل على شهادة الدولة",
            "seniority_step": 13
        })
        .to_string();
        let (status, body) = post_calculate(&body, Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_SELECTION");
    }

    #[tokio::test]
    async fn test_salary_scale_lookup() {
        let (status, body) = get_json("/salary-scales/11").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "11");

        let (status, body) = get_json("/salary-scales/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "SALARY_SCALE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_results_without_parameters() {
        let (status, body) = get_json("/results").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}
