pub mod estimate;
pub mod fertilizer;
pub mod score;

use crate::dataset::FertilizerTable;
use crate::enrich::{weather, Enrichment};
use crate::registry::AdvisoryRegistry;
use crate::types::profile::CropProfile;
use crate::types::report::{
    AdvisoryReport, CropSuggestion, DataSources, WeatherBlock,
};
use crate::types::signals::FieldConditions;
use rand::Rng;
use tracing::debug;

/// Scores every crop in the registry, ranks them, truncates to `top_k`, and
/// attaches yield/profit estimates and a fertilizer plan to each pick.
pub fn recommend<R: Rng + ?Sized>(
    registry: &AdvisoryRegistry,
    fertilizer_table: &FertilizerTable,
    conditions: &FieldConditions,
    enrichment: &Enrichment,
    top_k: usize,
    rng: &mut R,
) -> AdvisoryReport {
    let mut scored: Vec<(&CropProfile, u32)> = registry
        .crops()
        .iter()
        .map(|crop| (crop, score::score_crop(crop, conditions, enrichment)))
        .collect();
    // Stable sort keeps registry order for equal scores.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let recommendations = scored
        .into_iter()
        .take(top_k)
        .map(|(crop, score)| {
            debug!(crop = crop.name, score, "selected crop");
            let estimate = estimate::estimate(crop, score, rng);
            let plan = fertilizer::recommend(
                fertilizer_table,
                crop.name,
                &conditions.soil_type,
                conditions.ph_level,
            );
            CropSuggestion {
                name: crop.name.to_string(),
                expected_yield: format_yield(crop, estimate.yield_value),
                profit: format_inr(estimate.profit_value),
                sustainability: crop.sustainability.display().to_string(),
                score,
                emoji: crop.glyph.to_string(),
                fertilizer: plan,
            }
        })
        .collect();

    let weather_analysis = enrichment.weather.as_ref().map(weather::assess);
    let weather_source = if enrichment.weather.is_some() {
        "live"
    } else {
        "optimized"
    };

    AdvisoryReport {
        recommendations,
        location_analyzed: conditions.location.clone(),
        region_detected: enrichment.region.clone(),
        coordinates: enrichment.coordinates,
        land_use_data: enrichment.land_use.clone(),
        weather_data: WeatherBlock {
            current: enrichment.weather.clone(),
            analysis: weather_analysis,
            source: weather_source,
        },
        data_sources: DataSources {
            geocoding: "optimized",
            land_use: enrichment.land_use.provenance.as_str(),
            soil_data: if enrichment.soil_sample.is_some() {
                "provided"
            } else {
                "estimated"
            },
            weather: weather_source,
        },
    }
}

/// Renders a yield value with the crop's unit and precision metadata.
fn format_yield(crop: &CropProfile, value: f64) -> String {
    match crop.yield_decimals {
        0 => format!("{value:.0} {}", crop.yield_unit),
        _ => format!("{value:.1} {}", crop.yield_unit),
    }
}

/// Rupee amount with thousands grouping, e.g. ₹45,230.
fn format_inr(value: f64) -> String {
    let rounded = value.round().max(0.0) as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("₹{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::NpkBaseline;
    use crate::types::report::Coordinates;
    use crate::types::signals::{LandUseSignal, Provenance};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn conditions() -> FieldConditions {
        FieldConditions {
            soil_type: "loamy".to_string(),
            water_availability: "high".to_string(),
            location: "Ludhiana, Punjab".to_string(),
            past_crops: "wheat".to_string(),
            ph_level: 6.5,
        }
    }

    fn enrichment() -> Enrichment {
        Enrichment {
            region: "punjab".to_string(),
            coordinates: Coordinates {
                lat: 30.7333,
                lon: 76.7794,
            },
            land_use: LandUseSignal {
                agriculture: 50.0,
                forest: 20.0,
                water: 10.0,
                barren: 20.0,
                provenance: Provenance::Optimized,
            },
            weather: None,
            soil_sample: None,
        }
    }

    fn table() -> FertilizerTable {
        FertilizerTable::from_rows(vec![(
            "rice".to_string(),
            NpkBaseline::new(80.0, 35.0, 45.0),
        )])
    }

    #[test]
    fn recommend_truncates_to_top_k_in_score_order() {
        let registry = AdvisoryRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let report = recommend(
            &registry,
            &table(),
            &conditions(),
            &enrichment(),
            4,
            &mut rng,
        );

        assert_eq!(report.recommendations.len(), 4);
        let scores: Vec<u32> = report
            .recommendations
            .iter()
            .map(|suggestion| suggestion.score)
            .collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted, "recommendations should be ranked");
        assert_eq!(report.recommendations[0].name, "Rice");
        assert_eq!(report.region_detected, "punjab");
    }

    #[test]
    fn recommend_attaches_fertilizer_plans_per_crop() {
        let registry = AdvisoryRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let report = recommend(
            &registry,
            &table(),
            &conditions(),
            &enrichment(),
            2,
            &mut rng,
        );

        let rice = &report.recommendations[0];
        assert_eq!(rice.name, "Rice");
        assert_eq!(rice.fertilizer.nitrogen, 80);
        // Sugarcane has no dataset row, so it takes the defaults.
        let sugarcane = &report.recommendations[1];
        assert_eq!(sugarcane.name, "Sugarcane");
        assert_eq!(sugarcane.fertilizer.nitrogen, 80);
        assert_eq!(sugarcane.fertilizer.phosphorus, 35);
        assert_eq!(sugarcane.fertilizer.potassium, 45);
    }

    #[test]
    fn data_sources_reflect_signal_provenance() {
        let registry = AdvisoryRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let report = recommend(
            &registry,
            &table(),
            &conditions(),
            &enrichment(),
            1,
            &mut rng,
        );
        assert_eq!(report.data_sources.land_use, "optimized");
        assert_eq!(report.data_sources.weather, "optimized");
        assert_eq!(report.data_sources.soil_data, "estimated");
        assert!(report.weather_data.current.is_none());
        assert!(report.weather_data.analysis.is_none());
    }

    #[test]
    fn yield_strings_respect_crop_formatting_metadata() {
        let registry = AdvisoryRegistry::builtin();
        let sugarcane = registry
            .find_crop("Sugarcane")
            .expect("sugarcane should exist");
        let rice = registry.find_crop("Rice").expect("rice should exist");
        assert_eq!(format_yield(sugarcane, 412.345), "412 tonnes/acre");
        assert_eq!(format_yield(rice, 28.46), "28.5 q/acre");
    }

    #[test]
    fn rupee_amounts_group_thousands() {
        assert_eq!(format_inr(45230.4), "₹45,230");
        assert_eq!(format_inr(812.0), "₹812");
        assert_eq!(format_inr(1234567.0), "₹1,234,567");
    }
}
