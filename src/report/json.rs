use serde::Serialize;

pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{FertilizerPlan, FertilizerSource};

    #[test]
    fn json_plan_contains_source_tag() {
        let plan = FertilizerPlan {
            nitrogen: 80,
            phosphorus: 35,
            potassium: 45,
            source: FertilizerSource::Default,
            adjustments: None,
        };

        let rendered = to_json(&plan).expect("json should serialize");
        assert!(rendered.contains("\"source\": \"default\""));
        assert!(rendered.contains("\"nitrogen\": 80"));
    }
}
