//! HTTP request handlers for the Labor Cost Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::build_staffing_guide;
use crate::error::EngineResult;
use crate::models::{Employee, LaborCostReport, ShiftTextEntry};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts one week of the schedule grid and returns the labor cost report.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let shifts_count = request.shifts.len();
    match perform_calculation(request, &state) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                week_start = %report.week.start_date,
                shifts_count,
                total_cost = %report.result.weekly_summary.total_cost,
                warnings = report.result.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Resolves the request against the loaded configuration and costs the week.
///
/// Explicitly supplied employees are validated up front; settings and
/// problems inside the shift grid are reported as warnings in the report.
fn perform_calculation(
    request: CalculationRequest,
    state: &AppState,
) -> EngineResult<LaborCostReport> {
    let config = state.config();
    let week = request.week();
    let settings = request.settings(config.settings());

    let employees: Vec<Employee> = match request.employees {
        Some(employees) => employees.into_iter().map(Into::into).collect(),
        None => config.employees(),
    };
    for employee in &employees {
        employee.validate()?;
    }

    let shift_text: Vec<ShiftTextEntry> = request.shifts.into_iter().map(Into::into).collect();
    let result = state
        .allocator()
        .calculate_week(&week, &employees, &shift_text, &settings);

    let staffing =
        build_staffing_guide(&week, &result.shift_costs, &employees, &settings.closed_days);
    Ok(LaborCostReport::new(week, settings.labor_goal_percentage, result).with_staffing(staffing))
}
