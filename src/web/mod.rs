//! Web API module for huewheel.
//!
//! This module provides a small JSON REST API over the palette generator and
//! the wheel mapper, for browser front ends and scripts.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/harmonies?color=&size=` - Five harmonies for a base color
//! - `GET /api/wheel/pick?x=&y=&size=&margin=` - Color under a canvas point
//! - `GET /api/wheel/locate?color=&size=&margin=` - Canvas point of a color
//! - `GET /api/random` - Random base color
//! - `GET /api/theme?color=` - Accent theme tokens for a base color
//! - `GET /api/export?color=&format=&size=` - Palette file download
//! - `GET /api/config` - Current configuration

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::cli::harmonies::HarmonyOutput;
use crate::config::{Config, MAX_WHEEL_SIZE};
use crate::export::{self, ExportFormat};
use crate::models::{Color, HarmonySize, HexCase};
use crate::services::{
    harmonies_for, random_color, resolve_base, ThemeTokens, WheelGeometry, WheelHit,
};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration the server was started with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Hex string in the configured case.
    fn hex(&self, color: Color) -> String {
        color.format_hex(self.config.palette.hex_case)
    }

    /// Base color for a request, defaulting to the configured one.
    fn base_input(&self, color: Option<&str>) -> String {
        color.map_or_else(
            || self.config.palette.default_base.to_hex(),
            ToString::to_string,
        )
    }

    fn harmony_size(&self, size: Option<&str>) -> ApiResult<HarmonySize> {
        size.map_or(Ok(self.config.palette.size), |s| {
            HarmonySize::parse(s).map_err(|e| bad_request("Invalid harmony size", e))
        })
    }

    fn wheel(&self, size: Option<f64>, margin: Option<f64>) -> ApiResult<WheelGeometry> {
        let size = size.unwrap_or_else(|| f64::from(self.config.wheel.size));
        let margin = margin.unwrap_or_else(|| f64::from(self.config.wheel.margin));

        if !size.is_finite() || size <= 0.0 || size > f64::from(MAX_WHEEL_SIZE) {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                ApiError::new(format!(
                    "Canvas size must be between 0 and {MAX_WHEEL_SIZE}"
                )),
            ));
        }
        if !margin.is_finite() || margin < 0.0 || margin * 2.0 >= size {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                ApiError::new("Margin leaves no room for a wheel"),
            ));
        }

        Ok(WheelGeometry::from_canvas(size, margin))
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters for harmony generation.
#[derive(Debug, Deserialize)]
pub struct HarmoniesQuery {
    /// Base color; the configured default when omitted.
    pub color: Option<String>,
    /// "verbose" or "compact".
    pub size: Option<String>,
}

/// Harmony generation response.
#[derive(Debug, Serialize)]
pub struct HarmoniesResponse {
    /// Base color the harmonies were generated from.
    pub base: String,
    /// True when the input was invalid and the default base was used.
    pub fallback: bool,
    /// Size policy used.
    pub size: HarmonySize,
    /// The five harmonies.
    pub harmonies: Vec<HarmonyOutput>,
}

/// Query parameters for a wheel pick.
#[derive(Debug, Deserialize)]
pub struct PickQuery {
    /// Horizontal canvas coordinate.
    pub x: f64,
    /// Vertical canvas coordinate.
    pub y: f64,
    /// Canvas edge length.
    pub size: Option<f64>,
    /// Gap between canvas edge and rim.
    pub margin: Option<f64>,
}

/// Query parameters for locating a color on the wheel.
#[derive(Debug, Deserialize)]
pub struct LocateQuery {
    /// Color to locate.
    pub color: String,
    /// Canvas edge length.
    pub size: Option<f64>,
    /// Gap between canvas edge and rim.
    pub margin: Option<f64>,
}

/// Canvas position of a color.
#[derive(Debug, Serialize)]
pub struct LocateResponse {
    /// Parsed color.
    pub color: Color,
    /// Horizontal canvas coordinate.
    pub x: f64,
    /// Vertical canvas coordinate.
    pub y: f64,
}

/// Random color response.
#[derive(Debug, Serialize)]
pub struct RandomResponse {
    /// The random color.
    pub color: Color,
}

/// Query parameters carrying only a color.
#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    /// Base color; the configured default when omitted.
    pub color: Option<String>,
}

/// Theme tokens response.
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    /// Base color the tokens were derived from.
    pub base: String,
    /// True when the input was invalid and the default base was used.
    pub fallback: bool,
    /// The tokens.
    pub tokens: ThemeTokens,
    /// The tokens as CSS declarations.
    pub css: String,
}

/// Query parameters for export.
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// Base color; the configured default when omitted.
    pub color: Option<String>,
    /// md, json, css or gpl (default md).
    pub format: Option<String>,
    /// "verbose" or "compact".
    pub size: Option<String>,
}

/// Configuration response.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// Default base color.
    pub default_base: String,
    /// Harmony size policy.
    pub size: HarmonySize,
    /// Hex output case.
    pub hex_case: HexCase,
    /// Wheel canvas size.
    pub wheel_size: u32,
    /// Wheel margin.
    pub wheel_margin: u32,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

fn error_response(status: StatusCode, error: ApiError) -> (StatusCode, Json<ApiError>) {
    (status, Json(error))
}

fn bad_request(error: &str, details: anyhow::Error) -> (StatusCode, Json<ApiError>) {
    error_response(
        StatusCode::BAD_REQUEST,
        ApiError::with_details(error, details.to_string()),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/harmonies - Generate the five harmonies.
async fn get_harmonies(
    State(state): State<AppState>,
    Query(query): Query<HarmoniesQuery>,
) -> ApiResult<Json<HarmoniesResponse>> {
    let size = state.harmony_size(query.size.as_deref())?;
    let base = resolve_base(&state.base_input(query.color.as_deref()));

    let case = state.config.palette.hex_case;

    Ok(Json(HarmoniesResponse {
        base: state.hex(base.color),
        fallback: base.fallback,
        size,
        harmonies: harmonies_for(base.color, size)
            .iter()
            .map(|h| HarmonyOutput::from_harmony(h, case))
            .collect(),
    }))
}

/// GET /api/wheel/pick - Color under a canvas point.
async fn pick_color(
    State(state): State<AppState>,
    Query(query): Query<PickQuery>,
) -> ApiResult<Json<WheelHit>> {
    let wheel = state.wheel(query.size, query.margin)?;

    wheel.pick(query.x, query.y).map(Json).ok_or_else(|| {
        debug!("Pick at ({}, {}) missed the wheel", query.x, query.y);
        error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::new(format!(
                "Point ({}, {}) is outside the wheel",
                query.x, query.y
            )),
        )
    })
}

/// GET /api/wheel/locate - Canvas point of a color.
async fn locate_color(
    State(state): State<AppState>,
    Query(query): Query<LocateQuery>,
) -> ApiResult<Json<LocateResponse>> {
    let wheel = state.wheel(query.size, query.margin)?;

    let color = Color::parse(&query.color).map_err(|e| {
        error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::with_details("Invalid color", e.to_string()),
        )
    })?;

    let point = wheel.locate(color).ok_or_else(|| {
        error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::new(format!("Color {color} has no hue and no position on the wheel")),
        )
    })?;

    Ok(Json(LocateResponse {
        color,
        x: point.x,
        y: point.y,
    }))
}

/// GET /api/random - Random base color.
async fn get_random() -> Json<RandomResponse> {
    Json(RandomResponse {
        color: random_color(&mut rand::thread_rng()),
    })
}

/// GET /api/theme - Accent theme tokens.
async fn get_theme(
    State(state): State<AppState>,
    Query(query): Query<ColorQuery>,
) -> Json<ThemeResponse> {
    let base = resolve_base(&state.base_input(query.color.as_deref()));
    let tokens = ThemeTokens::derive(base.color);

    Json(ThemeResponse {
        base: state.hex(base.color),
        fallback: base.fallback,
        css: tokens.to_css(),
        tokens,
    })
}

/// GET /api/export - Palette file in the requested format.
async fn export_palette(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<impl IntoResponse> {
    let format = query
        .format
        .as_deref()
        .map_or(Ok(ExportFormat::default()), ExportFormat::parse)
        .map_err(|e| bad_request("Invalid export format", e))?;
    let size = state.harmony_size(query.size.as_deref())?;
    let base = resolve_base(&state.base_input(query.color.as_deref()));

    let harmonies = harmonies_for(base.color, size);
    let body = export::export_palette(base.color, &harmonies, format, state.config.palette.hex_case)
        .map_err(|e| {
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("Failed to export palette", e.to_string()),
            )
        })?;

    let filename = export::default_file_name_today(base.color, format);
    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, body))
}

/// GET /api/config - Current configuration.
async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let config = state.config();
    Json(ConfigResponse {
        default_base: state.hex(config.palette.default_base),
        size: config.palette.size,
        hex_case: config.palette.hex_case,
        wheel_size: config.wheel.size,
        wheel_margin: config.wheel.margin,
    })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        // Palette endpoints
        .route("/api/harmonies", get(get_harmonies))
        .route("/api/random", get(get_random))
        .route("/api/theme", get(get_theme))
        .route("/api/export", get(export_palette))
        // Wheel endpoints
        .route("/api/wheel/pick", get(pick_color))
        .route("/api/wheel/locate", get(locate_color))
        .route("/api/config", get(get_config))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(AppState::new(config));

    info!("Starting huewheel web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
