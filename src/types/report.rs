use crate::types::signals::{LandUseSignal, WeatherSignal};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FertilizerSource {
    MlDataset,
    Default,
}

/// Inputs echoed back when dataset-based adjustments were applied.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedAdjustments {
    pub soil_type: String,
    pub ph_level: f64,
    pub adjustments_applied: bool,
}

/// Final N/P/K amounts in kg per acre, after soil and pH adjustment.
#[derive(Debug, Clone, Serialize)]
pub struct FertilizerPlan {
    pub nitrogen: u32,
    pub phosphorus: u32,
    pub potassium: u32,
    pub source: FertilizerSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustments: Option<AppliedAdjustments>,
}

/// Per-nutrient application guidance attached to fertilizer responses.
#[derive(Debug, Clone, Serialize)]
pub struct NutrientAdvice {
    pub amount: u32,
    pub form: &'static str,
    pub application: &'static str,
    pub timing: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FertilizerAdvice {
    pub nitrogen: NutrientAdvice,
    pub phosphorus: NutrientAdvice,
    pub potassium: NutrientAdvice,
}

/// Response payload for a single-crop fertilizer request.
#[derive(Debug, Clone, Serialize)]
pub struct FertilizerReport {
    pub crop_name: String,
    pub soil_type: String,
    pub ph_level: f64,
    pub recommendations: FertilizerPlan,
    pub fertilizer_advice: FertilizerAdvice,
    pub source: FertilizerSource,
}

/// One ranked crop recommendation in the advisory response.
#[derive(Debug, Clone, Serialize)]
pub struct CropSuggestion {
    pub name: String,
    #[serde(rename = "yield")]
    pub expected_yield: String,
    pub profit: String,
    pub sustainability: String,
    pub score: u32,
    pub emoji: String,
    pub fertilizer: FertilizerPlan,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Qualitative read of a live weather signal for farming purposes.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherAssessment {
    pub temperature_category: &'static str,
    pub humidity_category: &'static str,
    pub rainfall_category: &'static str,
    pub farming_conditions: &'static str,
    pub alerts: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherBlock {
    pub current: Option<WeatherSignal>,
    pub analysis: Option<WeatherAssessment>,
    pub source: &'static str,
}

/// Provenance map for every enrichment input that fed the advisory.
#[derive(Debug, Clone, Serialize)]
pub struct DataSources {
    pub geocoding: &'static str,
    pub land_use: &'static str,
    pub soil_data: &'static str,
    pub weather: &'static str,
}

/// Full advisory response: ranked recommendations plus the enrichment
/// context they were scored against.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryReport {
    pub recommendations: Vec<CropSuggestion>,
    pub location_analyzed: String,
    pub region_detected: String,
    pub coordinates: Coordinates,
    pub land_use_data: LandUseSignal,
    pub weather_data: WeatherBlock,
    pub data_sources: DataSources,
}
