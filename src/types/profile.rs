use serde::Serialize;

/// Categorical water requirement / availability. Ordered low < medium < high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterNeed {
    Low,
    Medium,
    High,
}

impl WaterNeed {
    /// Parses user-supplied text. Unknown or empty input yields `None`;
    /// callers fall back to documented neutral scores instead of failing.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sustainability {
    Low,
    Medium,
    High,
}

impl Sustainability {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Title-cased label used in rendered recommendations.
    pub fn display(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Kharif,
    Rabi,
}

/// Static reference record describing one crop's agronomic and economic
/// characteristics. Built once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct CropProfile {
    pub name: &'static str,
    pub soil_types: &'static [&'static str],
    pub water_requirement: WaterNeed,
    /// (min, max) in the crop's yield unit per acre.
    pub yield_range: (f64, f64),
    /// (min, max) in rupees per acre.
    pub profit_range: (f64, f64),
    pub sustainability: Sustainability,
    pub seasons: &'static [Season],
    /// Lower-cased canonical region keys where the crop is historically grown.
    pub regions: &'static [&'static str],
    pub glyph: &'static str,
    pub yield_unit: &'static str,
    pub yield_decimals: u8,
}

impl CropProfile {
    pub fn grown_in(&self, region: &str) -> bool {
        self.regions.iter().any(|known| *known == region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_need_parses_known_categories() {
        assert_eq!(WaterNeed::parse("High"), Some(WaterNeed::High));
        assert_eq!(WaterNeed::parse(" medium "), Some(WaterNeed::Medium));
        assert_eq!(WaterNeed::parse("low"), Some(WaterNeed::Low));
    }

    #[test]
    fn water_need_rejects_unknown_and_empty_input() {
        assert_eq!(WaterNeed::parse("moderate"), None);
        assert_eq!(WaterNeed::parse(""), None);
    }

    #[test]
    fn sustainability_display_is_title_cased() {
        assert_eq!(Sustainability::High.display(), "High");
        assert_eq!(Sustainability::parse("MEDIUM"), Some(Sustainability::Medium));
        assert_eq!(Sustainability::parse("n/a"), None);
    }
}
