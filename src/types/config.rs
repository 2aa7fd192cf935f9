use crate::error::CropwiseError;
use crate::types::signals::{LandUseSignal, Provenance};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "Data-raw";
pub const DEFAULT_TOP_K: usize = 4;
pub const DEFAULT_PH: f64 = 6.5;
pub const DEFAULT_CACHE_TTL_SECS: u32 = 300;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CropwiseConfig {
    pub data: Option<DataConfig>,
    pub advisor: Option<AdvisorConfig>,
    pub weather: Option<WeatherConfig>,
    pub landuse: Option<LandUseConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorConfig {
    pub top_k: Option<usize>,
    pub default_ph: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_enabled")]
    pub enabled: bool,
    pub observations_file: Option<PathBuf>,
    pub cache_ttl_secs: Option<u32>,
}

fn default_weather_enabled() -> bool {
    true
}

/// Overrides for the placeholder land-cover percentages used when no live
/// land-use signal is supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct LandUseConfig {
    pub agriculture: Option<f64>,
    pub forest: Option<f64>,
    pub water: Option<f64>,
    pub barren: Option<f64>,
}

impl CropwiseConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.data
            .as_ref()
            .and_then(|data| data.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    pub fn top_k(&self) -> usize {
        self.advisor
            .as_ref()
            .and_then(|advisor| advisor.top_k)
            .unwrap_or(DEFAULT_TOP_K)
    }

    pub fn default_ph(&self) -> f64 {
        self.advisor
            .as_ref()
            .and_then(|advisor| advisor.default_ph)
            .unwrap_or(DEFAULT_PH)
    }

    pub fn weather_enabled(&self) -> bool {
        self.weather
            .as_ref()
            .map(|weather| weather.enabled)
            .unwrap_or(true)
    }

    pub fn observations_file(&self) -> Option<PathBuf> {
        self.weather
            .as_ref()
            .and_then(|weather| weather.observations_file.clone())
    }

    pub fn cache_ttl_secs(&self) -> u32 {
        self.weather
            .as_ref()
            .and_then(|weather| weather.cache_ttl_secs)
            .unwrap_or(DEFAULT_CACHE_TTL_SECS)
    }

    /// Placeholder land-use signal: pre-calculated national averages, with
    /// any configured overrides applied. Always tagged `optimized`.
    pub fn placeholder_land_use(&self) -> LandUseSignal {
        let overrides = self.landuse.as_ref();
        LandUseSignal {
            agriculture: overrides.and_then(|cfg| cfg.agriculture).unwrap_or(50.0),
            forest: overrides.and_then(|cfg| cfg.forest).unwrap_or(20.0),
            water: overrides.and_then(|cfg| cfg.water).unwrap_or(10.0),
            barren: overrides.and_then(|cfg| cfg.barren).unwrap_or(20.0),
            provenance: Provenance::Optimized,
        }
    }

    pub fn validate(&self) -> Result<(), CropwiseError> {
        if let Some(advisor) = &self.advisor {
            if advisor.top_k == Some(0) {
                return Err(CropwiseError::ConfigParse(
                    "advisor.top_k must be greater than 0".to_string(),
                ));
            }
            if let Some(ph) = advisor.default_ph {
                if !(0.0..=14.0).contains(&ph) {
                    return Err(CropwiseError::ConfigParse(
                        "advisor.default_ph must be between 0.0 and 14.0".to_string(),
                    ));
                }
            }
        }

        if let Some(weather) = &self.weather {
            if weather.cache_ttl_secs == Some(0) {
                return Err(CropwiseError::ConfigParse(
                    "weather.cache_ttl_secs must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(landuse) = &self.landuse {
            for (key, value) in [
                ("agriculture", landuse.agriculture),
                ("forest", landuse.forest),
                ("water", landuse.water),
                ("barren", landuse.barren),
            ] {
                if let Some(pct) = value {
                    if !(0.0..=100.0).contains(&pct) {
                        return Err(CropwiseError::ConfigParse(format!(
                            "landuse.{key} must be between 0.0 and 100.0"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
