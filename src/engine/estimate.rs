use crate::types::profile::CropProfile;
use rand::Rng;

/// Interpolation denominator. Deliberately the historical reference of 100
/// rather than the scorer's ceiling of 140: scores above 100 extrapolate
/// past the crop's stated range.
pub const SCORE_REFERENCE: f64 = 100.0;

/// Spread of the realism perturbation applied to each interpolated value.
pub const JITTER_RANGE: (f64, f64) = (0.9, 1.1);

#[derive(Debug, Clone, Copy)]
pub struct YieldProfitEstimate {
    pub yield_value: f64,
    pub profit_value: f64,
}

/// Linear interpolation of a (min, max) range by score over
/// [`SCORE_REFERENCE`].
pub fn interpolate(range: (f64, f64), score: u32) -> f64 {
    let (min, max) = range;
    min + (max - min) * (f64::from(score) / SCORE_REFERENCE)
}

/// Maps a crop's reference ranges and its suitability score to a realistic
/// estimate. Yield and profit are perturbed by independent uniform draws so
/// identical scores do not present identical numbers; pass a seeded RNG for
/// reproducible output.
pub fn estimate<R: Rng + ?Sized>(
    crop: &CropProfile,
    score: u32,
    rng: &mut R,
) -> YieldProfitEstimate {
    let yield_value = interpolate(crop.yield_range, score) * rng.gen_range(JITTER_RANGE.0..=JITTER_RANGE.1);
    let profit_value =
        interpolate(crop.profit_range, score) * rng.gen_range(JITTER_RANGE.0..=JITTER_RANGE.1);
    YieldProfitEstimate {
        yield_value,
        profit_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rice() -> &'static CropProfile {
        crate::registry::crops::CROPS
            .iter()
            .find(|crop| crop.name == "Rice")
            .expect("rice should exist in the reference table")
    }

    #[test]
    fn score_zero_interpolates_to_range_minimum() {
        assert_eq!(interpolate((20.0, 35.0), 0), 20.0);
        assert_eq!(interpolate((35000.0, 55000.0), 0), 35000.0);
    }

    #[test]
    fn score_hundred_interpolates_to_range_maximum() {
        assert_eq!(interpolate((20.0, 35.0), 100), 35.0);
        assert_eq!(interpolate((35000.0, 55000.0), 100), 55000.0);
    }

    #[test]
    fn scores_above_hundred_extrapolate_past_the_range() {
        let value = interpolate((20.0, 35.0), 140);
        assert!(value > 35.0);
        assert!((value - 41.0).abs() < 1e-9);
    }

    #[test]
    fn estimate_stays_within_jitter_envelope() {
        let mut rng = StdRng::seed_from_u64(7);
        for score in [0, 40, 100, 140] {
            let estimate = estimate(rice(), score, &mut rng);
            let expected_yield = interpolate(rice().yield_range, score);
            let expected_profit = interpolate(rice().profit_range, score);
            assert!(estimate.yield_value >= expected_yield * JITTER_RANGE.0);
            assert!(estimate.yield_value <= expected_yield * JITTER_RANGE.1);
            assert!(estimate.profit_value >= expected_profit * JITTER_RANGE.0);
            assert!(estimate.profit_value <= expected_profit * JITTER_RANGE.1);
        }
    }

    #[test]
    fn identical_seeds_reproduce_identical_estimates() {
        let first = estimate(rice(), 97, &mut StdRng::seed_from_u64(42));
        let second = estimate(rice(), 97, &mut StdRng::seed_from_u64(42));
        assert_eq!(first.yield_value, second.yield_value);
        assert_eq!(first.profit_value, second.profit_value);
    }
}
