use crate::types::report::{AdvisoryReport, FertilizerReport};

pub fn advisory_to_markdown(report: &AdvisoryReport) -> String {
    let mut output = String::new();
    output.push_str("# Crop Recommendations\n\n");
    output.push_str(&format!(
        "Location: {} (region: {}, {:.4}, {:.4})\n\n",
        report.location_analyzed,
        report.region_detected,
        report.coordinates.lat,
        report.coordinates.lon
    ));

    output.push_str("## Suggested Crops\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for suggestion in &report.recommendations {
            output.push_str(&format!(
                "- {} {} (score {}): yield {}, profit {}, sustainability {}\n",
                suggestion.emoji,
                suggestion.name,
                suggestion.score,
                suggestion.expected_yield,
                suggestion.profit,
                suggestion.sustainability
            ));
            output.push_str(&format!(
                "  fertilizer: N {} / P {} / K {} kg per acre\n",
                suggestion.fertilizer.nitrogen,
                suggestion.fertilizer.phosphorus,
                suggestion.fertilizer.potassium
            ));
        }
        output.push('\n');
    }

    output.push_str("## Land Use\n\n");
    output.push_str(&format!(
        "- agriculture: {:.0}%\n- forest: {:.0}%\n- water: {:.0}%\n- barren: {:.0}%\n- source: {}\n\n",
        report.land_use_data.agriculture,
        report.land_use_data.forest,
        report.land_use_data.water,
        report.land_use_data.barren,
        report.land_use_data.provenance.as_str()
    ));

    output.push_str("## Weather\n\n");
    match &report.weather_data.current {
        Some(current) => {
            output.push_str(&format!(
                "- {:.1}°C, {:.0}% humidity, {:.1} mm rain, wind {:.1} m/s\n",
                current.temperature, current.humidity, current.rain, current.wind_speed
            ));
            if let Some(analysis) = &report.weather_data.analysis {
                output.push_str(&format!(
                    "- conditions: {}\n",
                    analysis.farming_conditions
                ));
                for alert in &analysis.alerts {
                    output.push_str(&format!("- alert: {alert}\n"));
                }
            }
        }
        None => output.push_str("- no live reading\n"),
    }

    output
}

pub fn fertilizer_to_markdown(report: &FertilizerReport) -> String {
    let mut output = String::new();
    output.push_str("# Fertilizer Advice\n\n");
    output.push_str(&format!(
        "Crop: {} (soil {}, pH {:.1})\n\n",
        report.crop_name, report.soil_type, report.ph_level
    ));
    output.push_str(&format!(
        "- nitrogen: {} kg/acre via {}\n",
        report.recommendations.nitrogen, report.fertilizer_advice.nitrogen.form
    ));
    output.push_str(&format!(
        "- phosphorus: {} kg/acre via {}\n",
        report.recommendations.phosphorus, report.fertilizer_advice.phosphorus.form
    ));
    output.push_str(&format!(
        "- potassium: {} kg/acre via {}\n",
        report.recommendations.potassium, report.fertilizer_advice.potassium.form
    ));
    output.push_str(&format!("- source: {:?}\n", report.source));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{
        AdvisoryReport, Coordinates, CropSuggestion, DataSources, FertilizerPlan,
        FertilizerSource, WeatherBlock,
    };
    use crate::types::signals::{LandUseSignal, Provenance};

    #[test]
    fn markdown_report_contains_sections() {
        let report = AdvisoryReport {
            recommendations: vec![CropSuggestion {
                name: "Rice".to_string(),
                expected_yield: "28.4 q/acre".to_string(),
                profit: "₹45,000".to_string(),
                sustainability: "Medium".to_string(),
                score: 97,
                emoji: "🍚".to_string(),
                fertilizer: FertilizerPlan {
                    nitrogen: 80,
                    phosphorus: 35,
                    potassium: 45,
                    source: FertilizerSource::MlDataset,
                    adjustments: None,
                },
            }],
            location_analyzed: "Ludhiana, Punjab".to_string(),
            region_detected: "punjab".to_string(),
            coordinates: Coordinates {
                lat: 30.7333,
                lon: 76.7794,
            },
            land_use_data: LandUseSignal {
                agriculture: 50.0,
                forest: 20.0,
                water: 10.0,
                barren: 20.0,
                provenance: Provenance::Optimized,
            },
            weather_data: WeatherBlock {
                current: None,
                analysis: None,
                source: "optimized",
            },
            data_sources: DataSources {
                geocoding: "optimized",
                land_use: "optimized",
                soil_data: "estimated",
                weather: "optimized",
            },
        };

        let rendered = advisory_to_markdown(&report);
        assert!(rendered.contains("# Crop Recommendations"));
        assert!(rendered.contains("## Suggested Crops"));
        assert!(rendered.contains("Rice (score 97)"));
        assert!(rendered.contains("no live reading"));
    }
}
