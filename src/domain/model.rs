//! NDLVC-5y risk model.
//!
//! Prognostic index → 5-year MAE probability → risk class. The whole
//! computation is total over its input domain and has no side effects.

use serde::{Deserialize, Serialize};

use super::factors::{RiskFactor, RiskFactors};

/// 5-year event-free survival at a prognostic index of zero.
pub const BASELINE_SURVIVAL: f64 = 0.99600731958437;

/// Highest percentage ever reported; the model never predicts certainty.
pub const MAX_REPORTED_PERCENT: f64 = 99.9;

/// Class thresholds on the percentage scale (lower bounds of classes 2..=4).
pub const CLASS_THRESHOLDS: [f64; 3] = [5.0, 20.0, 40.0];

/// Weighted sum of present risk factors (log relative hazard).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrognosticIndex(f64);

impl PrognosticIndex {
    #[must_use]
    pub fn from_factors(factors: &RiskFactors) -> Self {
        Self(
            factors
                .present()
                .fold(0.0, |acc, f| acc + f.coefficient()),
        )
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Probability of an event within 5 years, in [0, 1).
    #[must_use]
    pub fn five_year_probability(&self) -> f64 {
        1.0 - BASELINE_SURVIVAL.powf(self.0.exp())
    }
}

/// Risk band, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskClass {
    /// Class 1, below 5%
    Low,
    /// Class 2, 5% up to 20%
    MidLow,
    /// Class 3, 20% up to 40%
    MidHigh,
    /// Class 4, 40% and above
    High,
}

impl RiskClass {
    pub const ALL: [RiskClass; 4] = [Self::Low, Self::MidLow, Self::MidHigh, Self::High];

    /// Classify a percentage. Intervals are closed on the left.
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        let [mid_low, mid_high, high] = CLASS_THRESHOLDS;
        if percent < mid_low {
            Self::Low
        } else if percent < mid_high {
            Self::MidLow
        } else if percent < high {
            Self::MidHigh
        } else {
            Self::High
        }
    }

    /// Class number, 1 to 4.
    #[must_use]
    pub fn number(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::MidLow => 2,
            Self::MidHigh => 3,
            Self::High => 4,
        }
    }

    /// Full label including the band, e.g. "Class 2: Mid-low risk (5–20%)".
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Class 1: Low risk (<5%)",
            Self::MidLow => "Class 2: Mid-low risk (5–20%)",
            Self::MidHigh => "Class 3: Mid-high risk (20–40%)",
            Self::High => "Class 4: High risk (>40%)",
        }
    }

    /// Band name without the class number.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::MidLow => "Mid-low risk",
            Self::MidHigh => "Mid-high risk",
            Self::High => "High risk",
        }
    }

    /// Band range on the percentage scale.
    #[must_use]
    pub fn band(&self) -> &'static str {
        match self {
            Self::Low => "<5%",
            Self::MidLow => "5–20%",
            Self::MidHigh => "20–40%",
            Self::High => ">40%",
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (16, 185, 129),     // Emerald (#10B981)
            Self::MidLow => (251, 191, 36),  // Amber (#FBBF24)
            Self::MidHigh => (249, 115, 22), // Orange (#F97316)
            Self::High => (244, 63, 94),     // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for RiskClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Class {}", self.number())
    }
}

/// Scorer output for one set of factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    pub prognostic_index: PrognosticIndex,

    /// Unrounded 5-year probability (0.0 to 1.0)
    pub probability: f64,

    /// Percentage rounded to one decimal, capped below 100
    pub percent: f64,

    pub class: RiskClass,
}

impl RiskEstimate {
    /// Percentage formatted for display, e.g. "12.3%".
    #[must_use]
    pub fn percent_display(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

/// Score a set of risk factors.
#[must_use]
pub fn score(factors: &RiskFactors) -> RiskEstimate {
    let prognostic_index = PrognosticIndex::from_factors(factors);
    let probability = prognostic_index.five_year_probability();
    let percent = round_percent(probability);

    RiskEstimate {
        prognostic_index,
        probability,
        percent,
        class: RiskClass::from_percent(percent),
    }
}

/// Probability → percentage with one decimal, never reaching 100.
fn round_percent(probability: f64) -> f64 {
    let rounded = (probability * 1000.0).round() / 10.0;
    rounded.clamp(0.0, MAX_REPORTED_PERCENT)
}

/// Model coefficients, in form order.
#[must_use]
pub fn coefficient_table() -> [(RiskFactor, f64); 7] {
    RiskFactor::ALL.map(|f| (f, f.coefficient()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_combinations() -> impl Iterator<Item = RiskFactors> {
        (0u8..128).map(RiskFactors::from_bits)
    }

    #[test]
    fn test_no_factors() {
        let estimate = score(&RiskFactors::default());
        assert_eq!(estimate.prognostic_index.value(), 0.0);
        assert!((estimate.percent - 0.4).abs() < 1e-9);
        assert_eq!(estimate.class, RiskClass::Low);
        assert_eq!(estimate.percent_display(), "0.4%");
    }

    #[test]
    fn test_myocardial_inflammation_only() {
        let estimate = score(&RiskFactors::from_present(&[RiskFactor::Minfl]));
        assert!((estimate.prognostic_index.value() - 2.7535).abs() < 1e-12);
        assert!((estimate.percent - 6.1).abs() < 1e-9);
        assert_eq!(estimate.class, RiskClass::MidLow);
    }

    #[test]
    fn test_lvef_and_nsvt() {
        let estimate = score(&RiskFactors::from_present(&[
            RiskFactor::LvefLow,
            RiskFactor::Nsvt,
        ]));
        assert!((estimate.prognostic_index.value() - 2.8255).abs() < 1e-12);
        assert!((estimate.percent - 6.5).abs() < 1e-9);
        assert_eq!(estimate.class, RiskClass::MidLow);
    }

    #[test]
    fn test_all_factors() {
        let estimate = score(&RiskFactors::all());
        assert!((estimate.prognostic_index.value() - 8.8935).abs() < 1e-9);
        assert!(estimate.probability < 1.0);
        assert!(estimate.probability > 0.96);
        assert!((estimate.percent - MAX_REPORTED_PERCENT).abs() < 1e-9);
        assert_eq!(estimate.class, RiskClass::High);
    }

    #[test]
    fn test_higher_classes_reachable() {
        // LVEF + NSVT + septal + ring-like LGE: 15.6%
        let mid_low = score(&RiskFactors::from_present(&[
            RiskFactor::LvefLow,
            RiskFactor::Nsvt,
            RiskFactor::SeptalLge,
            RiskFactor::RingLge,
        ]));
        assert!((mid_low.percent - 15.6).abs() < 1e-9);
        assert_eq!(mid_low.class, RiskClass::MidLow);

        // inflammation + LVEF: 29.0%
        let mid_high = score(&RiskFactors::from_present(&[
            RiskFactor::Minfl,
            RiskFactor::LvefLow,
        ]));
        assert!((mid_high.percent - 29.0).abs() < 1e-9);
        assert_eq!(mid_high.class, RiskClass::MidHigh);

        // inflammation + LVEF + NSVT: 65.3%
        let high = score(&RiskFactors::from_present(&[
            RiskFactor::Minfl,
            RiskFactor::LvefLow,
            RiskFactor::Nsvt,
        ]));
        assert!((high.percent - 65.3).abs() < 1e-9);
        assert_eq!(high.class, RiskClass::High);
    }

    #[test]
    fn test_rounded_boundary_lands_in_upper_class() {
        // male + LVEF < 45%: 5.03% rounds to exactly 5.0
        let estimate = score(&RiskFactors::from_present(&[
            RiskFactor::Male,
            RiskFactor::LvefLow,
        ]));
        assert!((estimate.percent - 5.0).abs() < 1e-9);
        assert_eq!(estimate.class, RiskClass::MidLow);
    }

    #[test]
    fn test_class_boundaries_closed_open() {
        assert_eq!(RiskClass::from_percent(0.0), RiskClass::Low);
        assert_eq!(RiskClass::from_percent(4.9), RiskClass::Low);
        assert_eq!(RiskClass::from_percent(5.0), RiskClass::MidLow);
        assert_eq!(RiskClass::from_percent(19.9), RiskClass::MidLow);
        assert_eq!(RiskClass::from_percent(20.0), RiskClass::MidHigh);
        assert_eq!(RiskClass::from_percent(39.9), RiskClass::MidHigh);
        assert_eq!(RiskClass::from_percent(40.0), RiskClass::High);
        assert_eq!(RiskClass::from_percent(99.9), RiskClass::High);
    }

    #[test]
    fn test_every_combination_in_range_and_reproducible() {
        for factors in all_combinations() {
            let first = score(&factors);
            let second = score(&factors);
            assert_eq!(first, second);
            assert!(
                (0.0..100.0).contains(&first.percent),
                "{factors:?} gave {}",
                first.percent
            );
            assert!((0.0..1.0).contains(&first.probability));
            assert_eq!(first.class, RiskClass::from_percent(first.percent));

            // one decimal exactly
            let tenths = first.percent * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_monotonic_in_each_factor() {
        for factors in all_combinations() {
            let base = score(&factors);
            for factor in RiskFactor::ALL {
                if factors.get(factor) {
                    continue;
                }
                let mut raised = factors;
                raised.set(factor, true);
                let next = score(&raised);
                assert!(next.probability > base.probability);
                assert!(next.percent >= base.percent);
                assert!(next.class >= base.class);
            }
        }
    }

    #[test]
    fn test_class_labels() {
        let numbers: Vec<u8> = RiskClass::ALL.iter().map(RiskClass::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(RiskClass::MidHigh.label(), "Class 3: Mid-high risk (20–40%)");
        assert_eq!(RiskClass::High.to_string(), "Class 4");
    }

    #[test]
    fn test_coefficient_sum() {
        let total: f64 = coefficient_table().iter().map(|(_, c)| c).sum();
        assert!((total - 8.8935).abs() < 1e-9);
    }
}
