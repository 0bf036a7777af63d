//! HTTP API module for the Labor Cost Engine.
//!
//! This module provides the REST API endpoint for costing one week of a
//! restaurant's schedule grid.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EmployeeRequest, ShiftTextRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
