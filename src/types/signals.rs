use serde::{Deserialize, Serialize};

/// Marks whether a signal came from a live external source or a locally
/// synthesized placeholder. Placeholder-tagged signals take the documented
/// fallback branches in the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Live,
    Optimized,
}

impl Provenance {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Optimized => "optimized",
        }
    }
}

/// Flat field-value request for one advisory run, as received at the
/// service boundary.
#[derive(Debug, Clone)]
pub struct FieldConditions {
    pub soil_type: String,
    pub water_availability: String,
    pub location: String,
    pub past_crops: String,
    pub ph_level: f64,
}

/// Percentages of land cover around the area of interest. The percentages
/// are independent weighted features and are not guaranteed to sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandUseSignal {
    pub agriculture: f64,
    pub forest: f64,
    pub water: f64,
    pub barren: f64,
    #[serde(default = "default_land_use_provenance")]
    pub provenance: Provenance,
}

fn default_land_use_provenance() -> Provenance {
    Provenance::Optimized
}

/// Current-conditions weather reading handed in by the collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSignal {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Rainfall over the past hour in millimetres.
    pub rain: f64,
    /// Wind speed in metres per second.
    pub wind_speed: f64,
    pub provenance: Provenance,
}

/// Raw observation as read from an observations file. The provider stamps
/// provenance when it promotes this to a `WeatherSignal`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherObservation {
    pub temperature: f64,
    pub humidity: f64,
    #[serde(default)]
    pub rain: f64,
    #[serde(default)]
    pub wind_speed: f64,
}

impl WeatherObservation {
    pub fn into_signal(self, provenance: Provenance) -> WeatherSignal {
        WeatherSignal {
            temperature: self.temperature,
            humidity: self.humidity,
            rain: self.rain,
            wind_speed: self.wind_speed,
            provenance,
        }
    }
}

/// Opaque laboratory soil-sample payload. The scorer only checks presence;
/// the contents are echoed back to the caller untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilSample(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn land_use_provenance_defaults_to_optimized() {
        let signal: LandUseSignal =
            serde_json::from_str(r#"{"agriculture":50,"forest":20,"water":10,"barren":20}"#)
                .expect("land-use json should parse");
        assert_eq!(signal.provenance, Provenance::Optimized);
    }

    #[test]
    fn observation_defaults_missing_rain_and_wind_to_zero() {
        let observation: WeatherObservation =
            serde_json::from_str(r#"{"temperature":28.5,"humidity":65}"#)
                .expect("observation json should parse");
        let signal = observation.into_signal(Provenance::Live);
        assert_eq!(signal.rain, 0.0);
        assert_eq!(signal.wind_speed, 0.0);
        assert_eq!(signal.provenance, Provenance::Live);
    }
}
