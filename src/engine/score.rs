use crate::enrich::Enrichment;
use crate::types::profile::{CropProfile, Sustainability, WaterNeed};
use crate::types::signals::{FieldConditions, LandUseSignal, Provenance, SoilSample, WeatherSignal};

/// Upper bound of the suitability scale. Sub-scores are additive and the
/// total is clamped here regardless of intermediate overflow.
pub const MAX_SCORE: u32 = 140;

/// Computes the suitability score for one crop against the field conditions
/// and gathered enrichment signals. Deterministic; malformed inputs degrade
/// to documented fallback points, never errors.
pub fn score_crop(crop: &CropProfile, conditions: &FieldConditions, enrichment: &Enrichment) -> u32 {
    let mut score = 0;

    score += soil_match_points(&conditions.soil_type, crop.soil_types);
    score += water_match_points(
        WaterNeed::parse(&conditions.water_availability),
        crop.water_requirement,
    );
    score += region_points(crop, &enrichment.region);
    score += land_use_points(crop, &enrichment.land_use);
    score += rotation_points(crop.name, &conditions.past_crops);
    score += sustainability_bonus(Some(crop.sustainability));
    score += soil_sample_points(enrichment.soil_sample.as_ref());
    score += weather_points(crop.name, enrichment.weather.as_ref());

    score.min(MAX_SCORE)
}

/// Soil compatibility: exact membership beats partial (substring) overlap.
fn soil_match_points(soil_type: &str, compatible: &[&str]) -> u32 {
    let soil = soil_type.trim().to_lowercase();
    if soil.is_empty() {
        return 0;
    }
    if compatible.iter().any(|known| *known == soil) {
        25
    } else if compatible.iter().any(|known| soil.contains(known)) {
        15
    } else {
        0
    }
}

/// 3x3 availability/requirement table. Unrecognised availability text is
/// worth a neutral 8 rather than an error.
fn water_match_points(availability: Option<WaterNeed>, requirement: WaterNeed) -> u32 {
    use WaterNeed::{High, Low, Medium};
    match availability {
        None => 8,
        Some(availability) => match (availability, requirement) {
            (High, High) => 20,
            (High, Medium) => 12,
            (High, Low) => 4,
            (Medium, High) => 16,
            (Medium, Medium) => 20,
            (Medium, Low) => 12,
            (Low, High) => 4,
            (Low, Medium) => 12,
            (Low, Low) => 20,
        },
    }
}

/// A crop outside its known regions is still viable, just suboptimal.
fn region_points(crop: &CropProfile, region: &str) -> u32 {
    if crop.grown_in(region) {
        20
    } else {
        8
    }
}

/// Land-cover bonuses only apply to live-sourced signals; the optimized
/// placeholder takes a flat fallback. The three sub-bonuses are independent
/// and intentionally uncapped; the outer clamp at [`MAX_SCORE`] is the only
/// enforced ceiling.
fn land_use_points(crop: &CropProfile, land_use: &LandUseSignal) -> u32 {
    if land_use.provenance != Provenance::Live {
        return 10;
    }

    let mut points = 0;
    if land_use.agriculture > 60.0 {
        points += 15;
    } else if land_use.agriculture > 40.0 {
        points += 10;
    } else if land_use.agriculture > 20.0 {
        points += 5;
    }

    if crop.water_requirement == WaterNeed::High && land_use.water > 10.0 {
        points += 10;
    } else if crop.water_requirement == WaterNeed::Low && land_use.water < 5.0 {
        points += 8;
    }

    if crop.sustainability == Sustainability::High && land_use.forest > 20.0 {
        points += 5;
    }

    points
}

/// Crop rotation: absence from the recent cropping history earns the full
/// bonus, repetition only a token amount.
fn rotation_points(crop_name: &str, past_crops: &str) -> u32 {
    if past_crops
        .to_lowercase()
        .contains(&crop_name.to_lowercase())
    {
        5
    } else {
        15
    }
}

fn sustainability_bonus(rating: Option<Sustainability>) -> u32 {
    match rating {
        Some(Sustainability::High) => 10,
        Some(Sustainability::Medium) => 7,
        Some(Sustainability::Low) => 3,
        None => 5,
    }
}

/// Presence of any laboratory soil sample is rewarded; its contents are not
/// interpreted here.
fn soil_sample_points(sample: Option<&SoilSample>) -> u32 {
    if sample.is_some() {
        5
    } else {
        0
    }
}

/// Inclusive-bounds band over a weather measurement.
#[derive(Debug, Clone, Copy)]
enum Band {
    /// measurement strictly greater than the threshold
    Above(f64),
    /// measurement strictly less than the threshold
    Below(f64),
    /// measurement within the closed interval
    Between(f64, f64),
}

impl Band {
    fn contains(self, value: f64) -> bool {
        match self {
            Band::Above(threshold) => value > threshold,
            Band::Below(threshold) => value < threshold,
            Band::Between(low, high) => (low..=high).contains(&value),
        }
    }
}

struct WeatherPreference {
    crop: &'static str,
    temperature: Option<(Band, u32)>,
    humidity: Option<(Band, u32)>,
    rainfall: Option<(Band, u32)>,
}

/// Per-crop weather preference bands. Tropical crops favour warm and wet
/// conditions, temperate cereals cooler and drier ones. Crops not listed
/// here take no weather bonus.
const WEATHER_PREFERENCES: &[WeatherPreference] = &[
    WeatherPreference {
        crop: "Rice",
        temperature: Some((Band::Between(25.0, 35.0), 8)),
        humidity: Some((Band::Above(60.0), 5)),
        rainfall: Some((Band::Above(2.0), 7)),
    },
    WeatherPreference {
        crop: "Sugarcane",
        temperature: Some((Band::Between(25.0, 35.0), 8)),
        humidity: None,
        rainfall: Some((Band::Above(2.0), 7)),
    },
    WeatherPreference {
        crop: "Wheat",
        temperature: Some((Band::Between(15.0, 25.0), 8)),
        humidity: Some((Band::Below(70.0), 5)),
        rainfall: Some((Band::Below(5.0), 5)),
    },
    WeatherPreference {
        crop: "Barley",
        temperature: Some((Band::Between(15.0, 25.0), 8)),
        humidity: Some((Band::Below(70.0), 5)),
        rainfall: Some((Band::Below(5.0), 5)),
    },
    WeatherPreference {
        crop: "Maize",
        temperature: Some((Band::Between(20.0, 30.0), 6)),
        humidity: None,
        rainfall: None,
    },
    WeatherPreference {
        crop: "Cotton",
        temperature: Some((Band::Between(20.0, 30.0), 6)),
        humidity: Some((Band::Between(40.0, 70.0), 4)),
        rainfall: Some((Band::Below(3.0), 4)),
    },
    WeatherPreference {
        crop: "Groundnut",
        temperature: None,
        humidity: None,
        rainfall: Some((Band::Below(3.0), 4)),
    },
];

/// Weather bonus applies only to live-sourced signals. Each of the three
/// measurements contributes independently when its band holds.
fn weather_points(crop_name: &str, weather: Option<&WeatherSignal>) -> u32 {
    let Some(weather) = weather else {
        return 0;
    };
    if weather.provenance != Provenance::Live {
        return 0;
    }
    let Some(preference) = WEATHER_PREFERENCES
        .iter()
        .find(|preference| preference.crop.eq_ignore_ascii_case(crop_name))
    else {
        return 0;
    };

    let mut points = 0;
    if let Some((band, value)) = preference.temperature {
        if band.contains(weather.temperature) {
            points += value;
        }
    }
    if let Some((band, value)) = preference.humidity {
        if band.contains(weather.humidity) {
            points += value;
        }
    }
    if let Some((band, value)) = preference.rainfall {
        if band.contains(weather.rain) {
            points += value;
        }
    }
    points
}
