use crate::types::report::WeatherAssessment;
use crate::types::signals::{Provenance, WeatherObservation, WeatherSignal};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Supplies a current-conditions reading for a coordinate pair. Returning
/// `None` means "signal absent"; implementations must swallow their own
/// failures rather than propagate them.
pub trait WeatherProvider {
    fn current(&self, lat: f64, lon: f64) -> Option<WeatherSignal>;
}

/// Reads a JSON observation file placed by the operator or an external
/// fetcher. A missing or malformed file degrades to absence with a logged
/// warning.
#[derive(Debug, Clone)]
pub struct ObservationFileProvider {
    path: PathBuf,
}

impl ObservationFileProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl WeatherProvider for ObservationFileProvider {
    fn current(&self, _lat: f64, _lon: f64) -> Option<WeatherSignal> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "weather observations unavailable");
                return None;
            }
        };
        match serde_json::from_str::<WeatherObservation>(&text) {
            Ok(observation) => Some(observation.into_signal(Provenance::Live)),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "weather observations malformed");
                None
            }
        }
    }
}

/// Time-bounded cache of weather readings keyed by coordinates rounded to
/// one decimal degree, so nearby locations share an entry. Callers pass the
/// current instant, which keeps expiry deterministic under test.
#[derive(Debug)]
pub struct WeatherCache {
    ttl: Duration,
    entries: HashMap<(i64, i64), CacheEntry>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    signal: WeatherSignal,
    fetched_at: DateTime<Utc>,
}

impl WeatherCache {
    pub fn new(ttl_secs: u32) -> Self {
        Self {
            ttl: Duration::seconds(i64::from(ttl_secs)),
            entries: HashMap::new(),
        }
    }

    fn key(lat: f64, lon: f64) -> (i64, i64) {
        ((lat * 10.0).round() as i64, (lon * 10.0).round() as i64)
    }

    /// Returns a fresh cached reading or consults the provider. Absent
    /// readings are not cached, so a later call may still succeed.
    pub fn fetch(
        &mut self,
        provider: &dyn WeatherProvider,
        lat: f64,
        lon: f64,
        now: DateTime<Utc>,
    ) -> Option<WeatherSignal> {
        let key = Self::key(lat, lon);
        if let Some(entry) = self.entries.get(&key) {
            if now - entry.fetched_at < self.ttl {
                debug!(lat, lon, "using cached weather reading");
                return Some(entry.signal.clone());
            }
        }

        let signal = provider.current(lat, lon)?;
        self.entries.insert(
            key,
            CacheEntry {
                signal: signal.clone(),
                fetched_at: now,
            },
        );
        Some(signal)
    }
}

/// Qualitative farming read of a live reading: banded categories plus
/// operator alerts.
pub fn assess(signal: &WeatherSignal) -> WeatherAssessment {
    let mut alerts = Vec::new();
    let mut recommendations = Vec::new();

    let temperature_category = if signal.temperature < 10.0 {
        alerts.push("Very cold temperatures - avoid heat-sensitive crops");
        recommendations.push("Consider cold-resistant crops like wheat, barley");
        "cold"
    } else if signal.temperature > 35.0 {
        alerts.push("High temperatures - ensure adequate irrigation");
        recommendations.push("Water-intensive crops may need extra irrigation");
        "hot"
    } else {
        "optimal"
    };

    let humidity_category = if signal.humidity < 30.0 {
        alerts.push("Low humidity - high evaporation risk");
        recommendations.push("Increase irrigation frequency");
        "dry"
    } else if signal.humidity > 80.0 {
        alerts.push("High humidity - fungal disease risk");
        recommendations.push("Monitor for fungal diseases");
        "humid"
    } else {
        "optimal"
    };

    let rainfall_category = if signal.rain > 5.0 {
        alerts.push("Heavy rainfall - drainage needed");
        recommendations.push("Ensure proper drainage systems");
        "heavy"
    } else if signal.rain > 1.0 {
        "moderate"
    } else {
        "light"
    };

    if signal.wind_speed > 10.0 {
        alerts.push("High winds - protect young crops");
        recommendations.push("Use windbreaks or support structures");
    }

    let farming_conditions = match alerts.len() {
        0 => "excellent",
        1 | 2 => "good",
        _ => "challenging",
    };

    WeatherAssessment {
        temperature_category,
        humidity_category,
        rainfall_category,
        farming_conditions,
        alerts,
        recommendations,
    }
}
