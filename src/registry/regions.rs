use crate::types::report::Coordinates;

/// Fallback when no known region name appears in the location text:
/// uttar pradesh is the largest agricultural state by sown area.
pub const DEFAULT_REGION: &str = "uttar pradesh";

/// Geographic centre of India, used when a region has no table entry.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    lat: 20.5937,
    lon: 78.9629,
};

/// Free-text name → canonical region key. Telangana shares its cropping
/// profile with Andhra Pradesh in the crop reference data.
const REGION_ALIASES: &[(&str, &str)] = &[
    ("punjab", "punjab"),
    ("haryana", "haryana"),
    ("uttar pradesh", "uttar pradesh"),
    ("delhi", "delhi"),
    ("rajasthan", "rajasthan"),
    ("madhya pradesh", "madhya pradesh"),
    ("gujarat", "gujarat"),
    ("maharashtra", "maharashtra"),
    ("karnataka", "karnataka"),
    ("tamil nadu", "tamil nadu"),
    ("andhra pradesh", "andhra pradesh"),
    ("telangana", "andhra pradesh"),
    ("west bengal", "west bengal"),
    ("bihar", "bihar"),
    ("assam", "assam"),
    ("odisha", "odisha"),
    ("jharkhand", "jharkhand"),
    ("chhattisgarh", "chhattisgarh"),
];

/// Representative coordinates per canonical region (state capital or the
/// dominant agricultural market town).
const REGION_COORDINATES: &[(&str, Coordinates)] = &[
    ("punjab", Coordinates { lat: 30.7333, lon: 76.7794 }),
    ("haryana", Coordinates { lat: 29.0588, lon: 76.0856 }),
    ("uttar pradesh", Coordinates { lat: 26.8467, lon: 80.9462 }),
    ("delhi", Coordinates { lat: 28.7041, lon: 77.1025 }),
    ("rajasthan", Coordinates { lat: 26.9124, lon: 75.7873 }),
    ("madhya pradesh", Coordinates { lat: 23.2599, lon: 77.4126 }),
    ("gujarat", Coordinates { lat: 23.0225, lon: 72.5714 }),
    ("maharashtra", Coordinates { lat: 19.0760, lon: 72.8777 }),
    ("karnataka", Coordinates { lat: 12.9716, lon: 77.5946 }),
    ("tamil nadu", Coordinates { lat: 13.0827, lon: 80.2707 }),
    ("andhra pradesh", Coordinates { lat: 17.3850, lon: 78.4867 }),
    ("west bengal", Coordinates { lat: 22.5726, lon: 88.3639 }),
    ("bihar", Coordinates { lat: 25.5941, lon: 85.1376 }),
    ("assam", Coordinates { lat: 26.1445, lon: 91.7362 }),
    ("odisha", Coordinates { lat: 20.2961, lon: 85.8245 }),
    ("jharkhand", Coordinates { lat: 23.3441, lon: 85.3096 }),
    ("chhattisgarh", Coordinates { lat: 21.2514, lon: 81.6296 }),
];

/// Resolves a free-text location to a canonical region key by substring
/// match, falling back to [`DEFAULT_REGION`]. Never fails.
pub fn detect_region(location: &str) -> &'static str {
    let location = location.to_lowercase();
    REGION_ALIASES
        .iter()
        .find(|(alias, _)| location.contains(alias))
        .map(|(_, region)| *region)
        .unwrap_or(DEFAULT_REGION)
}

pub fn region_coordinates(region: &str) -> Coordinates {
    REGION_COORDINATES
        .iter()
        .find(|(key, _)| *key == region)
        .map(|(_, coords)| *coords)
        .unwrap_or(DEFAULT_COORDINATES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_region_as_substring_of_location() {
        assert_eq!(detect_region("Ludhiana, Punjab"), "punjab");
        assert_eq!(detect_region("village near TAMIL NADU coast"), "tamil nadu");
    }

    #[test]
    fn telangana_maps_to_andhra_pradesh() {
        assert_eq!(detect_region("Warangal, Telangana"), "andhra pradesh");
    }

    #[test]
    fn unknown_location_falls_back_to_default_region() {
        assert_eq!(detect_region("Mandalay"), DEFAULT_REGION);
        assert_eq!(detect_region(""), DEFAULT_REGION);
    }

    #[test]
    fn every_aliased_region_has_coordinates() {
        for (_, region) in REGION_ALIASES {
            let coords = region_coordinates(region);
            assert!(
                (coords.lat, coords.lon) != (DEFAULT_COORDINATES.lat, DEFAULT_COORDINATES.lon),
                "{region} should have a table entry"
            );
        }
    }

    #[test]
    fn unknown_region_gets_default_coordinates() {
        let coords = region_coordinates("atlantis");
        assert_eq!(coords.lat, DEFAULT_COORDINATES.lat);
        assert_eq!(coords.lon, DEFAULT_COORDINATES.lon);
    }
}
