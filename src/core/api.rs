//! HTTP API for the triangle calculator
//!
//! Endpoints:
//! - GET /triangle?year=&month=&day=[&analysis=true] - Compute a triangle
//! - GET /triangle/{date} - Same, date as `YYYY-MM-DD`
//! - GET /calendar/days?year=&month= - Valid days of a month
//! - GET /calendar/years - Years offered by the picker
//! - GET /health - Health check

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use log::{info, warn};
use serde::Serialize;
use std::sync::Arc;

use crate::core::date_parser::{parse_field, parse_flag, query_value};
use crate::core::{analyze, calendar, DateParser, TriangleCalculator};
use crate::types::{Analysis, BirthDate, DateError, TriangleResult};

/// App state. Read-only, shared by every handler.
#[derive(Debug, Default)]
pub struct AppState {
    pub calculator: TriangleCalculator,
    pub parser: DateParser,
}

/// Triangle response
#[derive(Debug, Serialize)]
pub struct TriangleResponse {
    pub result: TriangleResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

/// Days response
#[derive(Debug, Serialize)]
pub struct DaysResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<u32>,
}

/// Years response
#[derive(Debug, Serialize)]
pub struct YearsResponse {
    pub years: Vec<i32>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error body for rejected input
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub detail: DateError,
}

/// Rejected date input, rendered as 400
#[derive(Debug)]
pub struct ApiError(pub DateError);

impl From<DateError> for ApiError {
    fn from(err: DateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("event=request_rejected code={} message={}", self.0.code(), self.0);
        let body = ErrorResponse {
            error: self.0.code().to_string(),
            message: self.0.to_string(),
            detail: self.0,
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router() -> Router {
    create_router_with_state(Arc::new(AppState::default()))
}

/// Create the API router around an existing state
pub fn create_router_with_state(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/triangle", get(triangle_by_query))
        .route("/triangle/:date", get(triangle_by_path))
        .route("/calendar/days", get(calendar_days))
        .route("/calendar/years", get(calendar_years))
        .with_state(state)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

fn respond(state: &AppState, date: BirthDate, with_analysis: bool) -> Json<TriangleResponse> {
    let result = state.calculator.compute(date);
    info!(
        "event=triangle_served date={} apex={} analysis={}",
        date,
        result.main_code(),
        with_analysis
    );
    let analysis = with_analysis.then(|| analyze(&result));
    Json(TriangleResponse { result, analysis })
}

/// Compute from `year`, `month`, `day` query fields
async fn triangle_by_query(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Result<Json<TriangleResponse>, ApiError> {
    let query = raw.unwrap_or_default();
    let date = state.parser.parse_query(&query)?;
    let with_analysis = parse_flag(query_value(&query, "analysis"))?;
    Ok(respond(&state, date, with_analysis))
}

/// Compute from a date path segment
async fn triangle_by_path(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
    RawQuery(raw): RawQuery,
) -> Result<Json<TriangleResponse>, ApiError> {
    let query = raw.unwrap_or_default();
    let date = state.parser.parse(&date)?;
    let with_analysis = parse_flag(query_value(&query, "analysis"))?;
    Ok(respond(&state, date, with_analysis))
}

/// Valid days for a year/month
async fn calendar_days(RawQuery(raw): RawQuery) -> Result<Json<DaysResponse>, ApiError> {
    let query = raw.unwrap_or_default();
    let year = parse_field("year", query_value(&query, "year"))?;
    let month = parse_field("month", query_value(&query, "month"))?;
    let days = calendar::month_days(year, month)?;
    Ok(Json(DaysResponse {
        year: year as i32,
        month: month as u32,
        days,
    }))
}

/// Years offered by the picker
async fn calendar_years() -> Json<YearsResponse> {
    Json(YearsResponse {
        years: calendar::picker_years().collect(),
    })
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("event=server_start addr={}", addr);
    println!("Trinum API running on {}", addr);
    println!("  GET /triangle?year=&month=&day= - Compute triangle");
    println!("  GET /triangle/:date              - Compute from YYYY-MM-DD");
    println!("  GET /calendar/days?year=&month=  - Valid days");
    println!("  GET /calendar/years              - Picker years");
    println!("  GET /health                      - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
