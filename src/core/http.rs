//! HTTP endpoint server using Axum

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, Request, State,
    },
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::analysis::AnalysisEngine;
use crate::config::AnalysisConfig;
use crate::indicators::{calculate_gann_square_of_nine, calculate_support_resistance, AnalysisError};
use crate::metrics::Metrics;
use crate::models::{analysis_assets, find_asset, AnalysisReport, PricePoint};
use crate::services::{PriceHistoryProvider, SyntheticHistoryProvider};

pub const SERVICE_NAME: &str = "tahlil-analysis";

const MSG_PRICE_REQUIRED: &str = "پارامتر price الزامی است";
const MSG_PRICE_INVALID: &str = "قیمت نامعتبر است";
const MSG_DAYS_INVALID: &str = "تعداد روز نامعتبر است";
const MSG_BODY_INVALID: &str = "بدنه درخواست نامعتبر است";
const MSG_QUERY_INVALID: &str = "پارامترهای درخواست نامعتبر است";
const MSG_SERVER_ERROR: &str = "خطای سرور";

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub engine: AnalysisEngine,
    pub config: AnalysisConfig,
    pub history: Arc<dyn PriceHistoryProvider>,
}

impl AppState {
    pub fn new(
        metrics: Arc<Metrics>,
        config: AnalysisConfig,
        history: Arc<dyn PriceHistoryProvider>,
    ) -> Result<Self, AnalysisError> {
        Ok(Self {
            metrics,
            start_time: Arc::new(Instant::now()),
            engine: AnalysisEngine::with_tolerance(config.tolerance)?,
            config,
            history,
        })
    }
}

type ApiError = (StatusCode, Json<Value>);
type ApiResult = Result<Json<Value>, ApiError>;

fn success(data: impl serde::Serialize) -> ApiResult {
    Ok(Json(json!({ "success": true, "data": data })))
}

fn failure(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(json!({ "success": false, "message": message.into() })),
    )
}

fn rejected(state: &AppState, err: AnalysisError) -> ApiError {
    state.metrics.analysis_failures_total.inc();
    warn!(error = %err, "Analysis request rejected");
    failure(StatusCode::BAD_REQUEST, err.to_string())
}

fn malformed(state: &AppState, message: &str, detail: String) -> ApiError {
    state.metrics.analysis_failures_total.inc();
    warn!(detail = %detail, "Malformed analysis request");
    failure(StatusCode::BAD_REQUEST, message)
}

/// Server-side failure on data the service produced itself
fn internal(err: AnalysisError) -> ApiError {
    error!(error = %err, "Analysis of generated history failed");
    failure(StatusCode::INTERNAL_SERVER_ERROR, MSG_SERVER_ERROR)
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state.metrics.export().map_err(|e| {
        error!(error = %e, "Failed to export metrics");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// List the assets offered on the analysis dashboard
async fn list_assets() -> ApiResult {
    success(analysis_assets())
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeSeriesRequest {
    pub prices: Vec<PricePoint>,
    #[serde(default)]
    pub tolerance: Option<f64>,
}

/// Analyze a caller-supplied, date-ascending price series
async fn analyze_series(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeSeriesRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) =
        payload.map_err(|e| malformed(&state, MSG_BODY_INVALID, e.body_text()))?;

    let engine = match request.tolerance {
        Some(tolerance) => {
            AnalysisEngine::with_tolerance(tolerance).map_err(|e| rejected(&state, e))?
        }
        None => state.engine,
    };

    let analysis = engine
        .analyze(&request.prices)
        .map_err(|e| rejected(&state, e))?;

    state.metrics.analyses_total.inc();
    info!(
        bars = request.prices.len(),
        trend = %analysis.trend,
        zones = analysis.prz.len(),
        "Analyzed submitted series"
    );
    success(analysis)
}

#[derive(Debug, Deserialize)]
pub struct AssetAnalysisQuery {
    pub price: Option<String>,
    pub days: Option<String>,
}

/// Requested history length, the configured default when absent.
fn requested_days(state: &AppState, raw: Option<&str>) -> Result<usize, ApiError> {
    let Some(raw) = raw else {
        return Ok(state.config.default_days);
    };

    let requested = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| malformed(state, MSG_DAYS_INVALID, e.to_string()))?;
    if !(1..=state.config.max_days).contains(&requested) {
        return Err(rejected(
            state,
            AnalysisError::InvalidDays {
                requested,
                max: state.config.max_days,
            },
        ));
    }

    Ok(requested)
}

/// Build history for an asset around its current price and analyze it
async fn analyze_asset(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    query: Result<Query<AssetAnalysisQuery>, QueryRejection>,
) -> ApiResult {
    let Query(params) =
        query.map_err(|e| malformed(&state, MSG_QUERY_INVALID, e.body_text()))?;
    let days = requested_days(&state, params.days.as_deref())?;

    let raw_price = params
        .price
        .ok_or_else(|| failure(StatusCode::BAD_REQUEST, MSG_PRICE_REQUIRED))?;
    let current_price = raw_price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or_else(|| failure(StatusCode::BAD_REQUEST, MSG_PRICE_INVALID))?;

    let history = state
        .history
        .price_history(&slug, current_price, days)
        .map_err(internal)?;
    let analysis = state.engine.analyze(&history).map_err(internal)?;

    state.metrics.analyses_total.inc();
    info!(
        slug = %slug,
        days,
        provider = state.history.name(),
        trend = %analysis.trend,
        zones = analysis.prz.len(),
        "Analyzed asset"
    );

    success(AnalysisReport {
        asset: find_asset(&slug),
        current_price,
        support_resistance: calculate_support_resistance(&history, current_price),
        square_of_nine: calculate_gann_square_of_nine(current_price),
        historical_prices: history,
        analysis,
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/analysis", post(analyze_series))
        .route("/api/analysis/assets", get(list_assets))
        .route("/api/analysis/{slug}", get(analyze_asset))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let config = AnalysisConfig::from_env();
    info!(
        tolerance = config.tolerance,
        default_days = config.default_days,
        max_days = config.max_days,
        "Analysis configuration"
    );

    let state = AppState::new(metrics, config, Arc::new(SyntheticHistoryProvider::new()))?;
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
