pub mod landuse;
pub mod weather;

use crate::registry::AdvisoryRegistry;
use crate::types::report::Coordinates;
use crate::types::signals::{LandUseSignal, SoilSample, WeatherSignal};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use weather::{WeatherCache, WeatherProvider};

/// Everything the engine needs beyond the caller's field conditions,
/// gathered up front so scoring itself never performs I/O.
#[derive(Debug, Clone)]
pub struct Enrichment {
    pub region: String,
    pub coordinates: Coordinates,
    pub land_use: LandUseSignal,
    pub weather: Option<WeatherSignal>,
    pub soil_sample: Option<SoilSample>,
}

/// Input locations for the optional enrichment signals.
pub struct EnrichmentSources<'a> {
    pub placeholder_land_use: LandUseSignal,
    pub land_use_file: Option<&'a Path>,
    pub weather_provider: Option<&'a dyn WeatherProvider>,
    pub soil_sample_file: Option<&'a Path>,
}

/// Resolves the region, looks up representative coordinates, and collects
/// the optional signals. Every failure path downgrades to signal-absent.
pub fn gather(
    registry: &AdvisoryRegistry,
    location: &str,
    sources: &EnrichmentSources,
    cache: &mut WeatherCache,
    now: DateTime<Utc>,
) -> Enrichment {
    let region = registry.detect_region(location);
    let coordinates = registry.region_coordinates(region);
    debug!(region, lat = coordinates.lat, lon = coordinates.lon, "resolved location");

    let land_use = sources
        .land_use_file
        .and_then(landuse::from_file)
        .unwrap_or_else(|| sources.placeholder_land_use.clone());

    let weather = sources
        .weather_provider
        .and_then(|provider| cache.fetch(provider, coordinates.lat, coordinates.lon, now));

    let soil_sample = sources.soil_sample_file.and_then(read_soil_sample);

    Enrichment {
        region: region.to_string(),
        coordinates,
        land_use,
        weather,
        soil_sample,
    }
}

fn read_soil_sample(path: &Path) -> Option<SoilSample> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            warn!(path = %path.display(), %error, "soil sample unavailable");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(SoilSample(value)),
        Err(error) => {
            warn!(path = %path.display(), %error, "soil sample malformed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::signals::Provenance;
    use std::io::Write;

    fn placeholder() -> LandUseSignal {
        LandUseSignal {
            agriculture: 50.0,
            forest: 20.0,
            water: 10.0,
            barren: 20.0,
            provenance: Provenance::Optimized,
        }
    }

    #[test]
    fn gather_without_optional_sources_uses_placeholder_and_absence() {
        let registry = AdvisoryRegistry::builtin();
        let mut cache = WeatherCache::new(300);
        let sources = EnrichmentSources {
            placeholder_land_use: placeholder(),
            land_use_file: None,
            weather_provider: None,
            soil_sample_file: None,
        };

        let enrichment = gather(&registry, "Ludhiana, Punjab", &sources, &mut cache, Utc::now());
        assert_eq!(enrichment.region, "punjab");
        assert_eq!(enrichment.land_use.provenance, Provenance::Optimized);
        assert!(enrichment.weather.is_none());
        assert!(enrichment.soil_sample.is_none());
    }

    #[test]
    fn gather_prefers_live_land_use_when_the_file_parses() {
        let registry = AdvisoryRegistry::builtin();
        let mut cache = WeatherCache::new(300);
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        write!(
            file,
            r#"{{"agriculture": 65.0, "forest": 25.0, "water": 6.0, "barren": 4.0}}"#
        )
        .expect("land-use json should write");

        let sources = EnrichmentSources {
            placeholder_land_use: placeholder(),
            land_use_file: Some(file.path()),
            weather_provider: None,
            soil_sample_file: None,
        };

        let enrichment = gather(&registry, "Nagpur, Maharashtra", &sources, &mut cache, Utc::now());
        assert_eq!(enrichment.land_use.provenance, Provenance::Live);
        assert_eq!(enrichment.land_use.agriculture, 65.0);
    }

    #[test]
    fn gather_reads_soil_sample_presence() {
        let registry = AdvisoryRegistry::builtin();
        let mut cache = WeatherCache::new(300);
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        write!(file, r#"{{"nitrogen": 88, "ph": 6.1}}"#).expect("sample json should write");

        let sources = EnrichmentSources {
            placeholder_land_use: placeholder(),
            land_use_file: None,
            weather_provider: None,
            soil_sample_file: Some(file.path()),
        };

        let enrichment = gather(&registry, "Patna, Bihar", &sources, &mut cache, Utc::now());
        assert!(enrichment.soil_sample.is_some());
    }
}
