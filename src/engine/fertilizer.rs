use crate::dataset::FertilizerTable;
use crate::types::report::{
    AppliedAdjustments, FertilizerAdvice, FertilizerPlan, FertilizerSource, NutrientAdvice,
};

/// Fallback amounts (kg/acre) when the crop has no dataset row.
pub const DEFAULT_NITROGEN: u32 = 80;
pub const DEFAULT_PHOSPHORUS: u32 = 35;
pub const DEFAULT_POTASSIUM: u32 = 45;

/// Looks up the crop's baseline N/P/K and adjusts for soil type and pH.
/// Unknown crops take the fixed defaults; this never fails.
///
/// The soil and pH adjustments compose: the pH multiplier applies to the
/// already soil-adjusted phosphorus, not to the base amount.
pub fn recommend(
    table: &FertilizerTable,
    crop_name: &str,
    soil_type: &str,
    ph_level: f64,
) -> FertilizerPlan {
    let Some(baseline) = table.baseline(crop_name) else {
        return FertilizerPlan {
            nitrogen: DEFAULT_NITROGEN,
            phosphorus: DEFAULT_PHOSPHORUS,
            potassium: DEFAULT_POTASSIUM,
            source: FertilizerSource::Default,
            adjustments: None,
        };
    };

    let mut nitrogen = baseline.nitrogen;
    let mut phosphorus = baseline.phosphorus;
    // Potassium is never adjusted by soil type or pH.
    let potassium = baseline.potassium;

    match soil_type.trim().to_lowercase().as_str() {
        // Sandy soils leach nitrogen quickly.
        "sandy" => {
            nitrogen *= 1.2;
            phosphorus *= 1.1;
        }
        // Clay soils hold nutrients better.
        "clay" => {
            nitrogen *= 0.9;
            phosphorus *= 0.95;
        }
        _ => {}
    }

    if ph_level < 6.0 {
        // Acidic soils lock up phosphorus.
        phosphorus *= 1.3;
    } else if ph_level > 7.5 {
        phosphorus *= 1.1;
    }

    FertilizerPlan {
        nitrogen: nitrogen.round() as u32,
        phosphorus: phosphorus.round() as u32,
        potassium: potassium.round() as u32,
        source: FertilizerSource::MlDataset,
        adjustments: Some(AppliedAdjustments {
            soil_type: soil_type.to_string(),
            ph_level,
            adjustments_applied: true,
        }),
    }
}

/// Application guidance attached to single-crop fertilizer responses.
pub fn advice(plan: &FertilizerPlan) -> FertilizerAdvice {
    FertilizerAdvice {
        nitrogen: NutrientAdvice {
            amount: plan.nitrogen,
            form: "Urea (46% N)",
            application: "Split into 2-3 applications during growth season",
            timing: "Apply at planting and during vegetative growth",
        },
        phosphorus: NutrientAdvice {
            amount: plan.phosphorus,
            form: "DAP (18% N, 46% P) or SSP (16% P)",
            application: "Apply at planting time",
            timing: "Mix well with soil before planting",
        },
        potassium: NutrientAdvice {
            amount: plan.potassium,
            form: "MOP (60% K) or SOP (50% K)",
            application: "Apply at planting or early growth stage",
            timing: "Best applied with phosphorus at planting",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::NpkBaseline;

    fn table() -> FertilizerTable {
        FertilizerTable::from_rows(vec![
            ("rice".to_string(), NpkBaseline::new(80.0, 35.0, 45.0)),
            ("maize".to_string(), NpkBaseline::new(85.0, 40.0, 50.0)),
        ])
    }

    #[test]
    fn unknown_crop_yields_exact_defaults() {
        let plan = recommend(&table(), "dragonfruit", "loamy", 6.5);
        assert_eq!(plan.nitrogen, 80);
        assert_eq!(plan.phosphorus, 35);
        assert_eq!(plan.potassium, 45);
        assert_eq!(plan.source, FertilizerSource::Default);
        assert!(plan.adjustments.is_none());
    }

    #[test]
    fn lookup_normalizes_spacing_and_case() {
        let plan = recommend(&table(), " Rice ", "loamy", 6.5);
        assert_eq!(plan.source, FertilizerSource::MlDataset);
        assert_eq!(plan.nitrogen, 80);
        assert_eq!(plan.phosphorus, 35);
        assert_eq!(plan.potassium, 45);
    }

    #[test]
    fn sandy_soil_raises_nitrogen_and_phosphorus() {
        let plan = recommend(&table(), "rice", "sandy", 6.5);
        assert_eq!(plan.nitrogen, 96); // 80 * 1.2
        assert_eq!(plan.phosphorus, 39); // 35 * 1.1 = 38.5, rounds up
        assert_eq!(plan.potassium, 45);
    }

    #[test]
    fn clay_soil_lowers_nitrogen_and_phosphorus() {
        let plan = recommend(&table(), "rice", "clay", 6.5);
        assert_eq!(plan.nitrogen, 72); // 80 * 0.9
        assert_eq!(plan.phosphorus, 33); // 35 * 0.95 = 33.25
        assert_eq!(plan.potassium, 45);
    }

    #[test]
    fn soil_and_ph_adjustments_compound_on_phosphorus() {
        // sandy then acidic: 35 * 1.1 * 1.3 = 50.05 -> 50
        let plan = recommend(&table(), "rice", "sandy", 5.5);
        assert_eq!(plan.phosphorus, 50);
        assert_eq!(plan.nitrogen, 96);
    }

    #[test]
    fn alkaline_ph_raises_phosphorus_alone() {
        let plan = recommend(&table(), "rice", "loamy", 8.0);
        assert_eq!(plan.nitrogen, 80);
        assert_eq!(plan.phosphorus, 39); // 35 * 1.1 = 38.5
        assert_eq!(plan.potassium, 45);
    }

    #[test]
    fn neutral_ph_band_applies_no_adjustment() {
        for ph in [6.0, 6.5, 7.5] {
            let plan = recommend(&table(), "rice", "loamy", ph);
            assert_eq!(plan.phosphorus, 35, "ph {ph} should not adjust phosphorus");
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = recommend(&table(), "maize", "sandy", 5.0);
        let second = recommend(&table(), "maize", "sandy", 5.0);
        assert_eq!(first.nitrogen, second.nitrogen);
        assert_eq!(first.phosphorus, second.phosphorus);
        assert_eq!(first.potassium, second.potassium);
    }

    #[test]
    fn adjustments_echo_the_inputs_used() {
        let plan = recommend(&table(), "rice", "Sandy", 5.2);
        let adjustments = plan.adjustments.expect("match path should echo inputs");
        assert_eq!(adjustments.soil_type, "Sandy");
        assert_eq!(adjustments.ph_level, 5.2);
        assert!(adjustments.adjustments_applied);
    }

    #[test]
    fn unrecognized_soil_type_leaves_base_amounts() {
        let plan = recommend(&table(), "rice", "volcanic", 6.5);
        assert_eq!(plan.nitrogen, 80);
        assert_eq!(plan.phosphorus, 35);
    }
}
