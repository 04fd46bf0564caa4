//! API request and response types

use crate::locale::Locale;
use crate::metric::{Band, Profile, WeightRange};
use serde::{Deserialize, Serialize};

/// USSD gateway callback body, sent as a form or as JSON
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UssdCallback {
    pub session_id: String,
    #[serde(default)]
    pub service_code: Option<String>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub text: String,
}

/// Query for the JSON report endpoint
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub weight: Option<String>,
    pub height: Option<String>,
    pub lang: Option<String>,
    #[serde(default)]
    pub profile: Profile,
}

/// BMI report with localized advice
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub bmi: f64,
    pub band: Band,
    pub band_label: &'static str,
    pub locale: Locale,
    pub profile: Profile,
    pub ideal_weight: WeightRange,
    pub weight_to_lose: f64,
    pub weight_to_gain: f64,
    pub tips: Vec<String>,
    pub exercise: &'static str,
    pub nutrition: &'static str,
}

/// Response for the health probe
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub store: &'static str,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
