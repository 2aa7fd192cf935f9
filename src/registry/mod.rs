pub mod crops;
pub mod regions;

use crate::types::profile::CropProfile;
use crate::types::report::Coordinates;

/// Process-wide read-only reference data: the crop table and region maps.
/// Built once at startup; no mutation path exists afterwards.
#[derive(Debug, Clone)]
pub struct AdvisoryRegistry {
    crops: &'static [CropProfile],
}

impl AdvisoryRegistry {
    pub fn builtin() -> Self {
        Self {
            crops: crops::CROPS,
        }
    }

    pub fn crops(&self) -> &[CropProfile] {
        self.crops
    }

    pub fn find_crop(&self, name: &str) -> Option<&CropProfile> {
        self.crops
            .iter()
            .find(|crop| crop.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn detect_region(&self, location: &str) -> &'static str {
        regions::detect_region(location)
    }

    pub fn region_coordinates(&self, region: &str) -> Coordinates {
        regions::region_coordinates(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_exposes_crop_table() {
        let registry = AdvisoryRegistry::builtin();
        assert_eq!(registry.crops().len(), 12);
    }

    #[test]
    fn find_crop_is_case_insensitive() {
        let registry = AdvisoryRegistry::builtin();
        assert!(registry.find_crop("rice").is_some());
        assert!(registry.find_crop(" SUGARCANE ").is_some());
        assert!(registry.find_crop("quinoa").is_none());
    }
}
