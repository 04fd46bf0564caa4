//! HTTP request handlers

use super::types::{ErrorResponse, HealthResponse, ReportQuery, ReportResponse, UssdCallback};
use super::AppState;
use crate::controller::UssdRequest;
use crate::dialog::Screen;
use crate::locale::{self, band_label, Locale};
use crate::metric::{self, ValidationError};
use async_trait::async_trait;
use axum::{
    extract::{rejection::QueryRejection, FromRequest, Query, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use tracing::Instrument;
use uuid::Uuid;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Gateway callback
        .route("/ussd", post(handle_ussd))
        // Probes
        .route("/health", get(health))
        .route("/version", get(get_version))
        // JSON report
        .route("/api/bmi", get(bmi_report))
        .with_state(state)
}

// ============================================================
// USSD Callback
// ============================================================

/// Callback body accepted as JSON or as a urlencoded form, chosen by
/// content type. Anything unparseable is answered with the generic END
/// screen and a 400.
pub struct UssdPayload(pub UssdCallback);

#[async_trait]
impl<S> FromRequest<S> for UssdPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let parsed = if is_json {
            Json::<UssdCallback>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|e| e.body_text())
        } else {
            Form::<UssdCallback>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|e| e.body_text())
        };

        parsed.map(Self).map_err(|reason| {
            tracing::warn!(%reason, "Rejected malformed USSD callback");
            generic_failure(StatusCode::BAD_REQUEST)
        })
    }
}

async fn handle_ussd(
    State(state): State<AppState>,
    UssdPayload(callback): UssdPayload,
) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "ussd",
        %request_id,
        session_id = %callback.session_id,
        service_code = callback.service_code.as_deref().unwrap_or_default()
    );
    let request = UssdRequest {
        session_id: callback.session_id,
        caller: callback.phone_number,
        input: callback.text,
    };

    async move {
        match state.controller.handle(&request).await {
            Ok(screen) => {
                tracing::info!(caller = %request.caller, "USSD request handled");
                screen.into_response()
            }
            Err(e) => {
                tracing::error!(caller = %request.caller, error = %e, "USSD request failed");
                generic_failure(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
    .instrument(span)
    .await
}

/// Generic END screen; never carries details
fn generic_failure(status: StatusCode) -> Response {
    (status, Screen::Error.render(Locale::default())).into_response()
}

// ============================================================
// Probes
// ============================================================

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "BMI USSD service is running",
        store: state.store_kind().as_str(),
    })
}

async fn get_version() -> &'static str {
    concat!("bmi-ussd ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// JSON Report
// ============================================================

async fn bmi_report(
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<ReportResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let weight = metric::parse_mass(query.weight.as_deref().unwrap_or_default())?;
    let height = metric::parse_height(query.height.as_deref().unwrap_or_default())?;
    let locale = query
        .lang
        .as_deref()
        .and_then(Locale::parse)
        .unwrap_or_default();

    let bmi = metric::compute_metric(weight, height)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let band = metric::classify(bmi);
    let (min_bmi, max_bmi) = query.profile.healthy_bounds();

    Ok(Json(ReportResponse {
        bmi,
        band,
        band_label: band_label(band, locale),
        locale,
        profile: query.profile,
        ideal_weight: metric::ideal_weight_range(height, query.profile),
        weight_to_lose: metric::weight_to_lose(weight, max_bmi, height),
        weight_to_gain: metric::weight_to_gain(weight, min_bmi, height),
        tips: locale::tips(Some(band), locale)
            .lines()
            .map(str::to_string)
            .collect(),
        exercise: locale::exercise_advice(band, locale),
        nutrition: locale::nutrition_advice(band, locale),
    }))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Report failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
