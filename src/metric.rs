//! Body-mass index engine
//!
//! Pure arithmetic over a mass (kg) and a height (cm): the index itself, its
//! band, the validation policy for caller-typed numbers, and a few helpers
//! for the JSON report endpoint.

#[cfg(test)]
mod proptests;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted mass in kilograms
pub const MAX_MASS_KG: f64 = 500.0;
/// Largest accepted height in centimeters
pub const MAX_HEIGHT_CM: f64 = 300.0;

const LOW_UPPER: f64 = 18.5;
const NORMAL_UPPER: f64 = 25.0;
const HIGH_UPPER: f64 = 30.0;

/// Engine precondition failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("invalid input: mass={mass}, height={height}")]
    InvalidInput { mass: f64, height: f64 },
}

/// Caller-typed number rejected by the validation policy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("mass must be a number in (0, 500]: {0:?}")]
    InvalidMass(String),
    #[error("height must be a number in (0, 300]: {0:?}")]
    InvalidHeight(String),
}

/// BMI band, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Normal,
    High,
    VeryHigh,
}

impl Band {
    #[cfg(test)]
    pub const ALL: [Band; 4] = [Band::Low, Band::Normal, Band::High, Band::VeryHigh];
}

/// Compute the index for `mass_kg` and `height_cm`, rounded to one decimal.
///
/// # Errors
///
/// Returns [`MetricError::InvalidInput`] when either value is non-finite or
/// not strictly positive.
pub fn compute_metric(mass_kg: f64, height_cm: f64) -> Result<f64, MetricError> {
    if !mass_kg.is_finite() || !height_cm.is_finite() || mass_kg <= 0.0 || height_cm <= 0.0 {
        return Err(MetricError::InvalidInput {
            mass: mass_kg,
            height: height_cm,
        });
    }
    let height_m = height_cm / 100.0;
    Ok(round_tenths(mass_kg / (height_m * height_m)))
}

/// Place a metric into its band. Bands are half-open so every value lands in
/// exactly one of them.
pub fn classify(metric: f64) -> Band {
    if metric < LOW_UPPER {
        Band::Low
    } else if metric < NORMAL_UPPER {
        Band::Normal
    } else if metric < HIGH_UPPER {
        Band::High
    } else {
        Band::VeryHigh
    }
}

/// Parse a caller-typed mass token.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMass`] for non-numeric text or a value
/// outside `(0, 500]`.
pub fn parse_mass(token: &str) -> Result<f64, ValidationError> {
    parse_in_range(token, MAX_MASS_KG).ok_or_else(|| ValidationError::InvalidMass(token.to_string()))
}

/// Parse a caller-typed height token (centimeters).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidHeight`] for non-numeric text or a
/// value outside `(0, 300]`.
pub fn parse_height(token: &str) -> Result<f64, ValidationError> {
    parse_in_range(token, MAX_HEIGHT_CM)
        .ok_or_else(|| ValidationError::InvalidHeight(token.to_string()))
}

fn parse_in_range(token: &str, max: f64) -> Option<f64> {
    let value: f64 = token.trim().parse().ok()?;
    (value.is_finite() && value > 0.0 && value <= max).then_some(value)
}

fn round_tenths(value: f64) -> f64 {
    // f64::round is half-away-from-zero
    (value * 10.0).round() / 10.0
}

// ============================================================================
// Report helpers
// ============================================================================

/// Which healthy range to use when computing an ideal weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Neutral,
    Male,
    Female,
}

impl Profile {
    /// Lower and upper healthy index for this profile
    pub fn healthy_bounds(self) -> (f64, f64) {
        match self {
            Profile::Neutral => (18.5, 24.9),
            Profile::Male => (20.0, 25.0),
            Profile::Female => (18.5, 24.0),
        }
    }
}

/// Inclusive weight range in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

/// Weight range that maps onto the healthy band for `height_cm`.
pub fn ideal_weight_range(height_cm: f64, profile: Profile) -> WeightRange {
    let (min_bmi, max_bmi) = profile.healthy_bounds();
    WeightRange {
        min: weight_for(min_bmi, height_cm),
        max: weight_for(max_bmi, height_cm),
    }
}

/// Kilograms above the weight that would give `target_bmi`, or zero.
pub fn weight_to_lose(current_kg: f64, target_bmi: f64, height_cm: f64) -> f64 {
    round_tenths((current_kg - target_weight(target_bmi, height_cm)).max(0.0))
}

/// Kilograms below the weight that would give `target_bmi`, or zero.
pub fn weight_to_gain(current_kg: f64, target_bmi: f64, height_cm: f64) -> f64 {
    round_tenths((target_weight(target_bmi, height_cm) - current_kg).max(0.0))
}

fn target_weight(target_bmi: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    target_bmi * height_m * height_m
}

fn weight_for(bmi: f64, height_cm: f64) -> f64 {
    round_tenths(target_weight(bmi, height_cm))
}
