//! Assessment service: Runs the risk model for one set of inputs.
//!
//! This service coordinates:
//! - Scoring the current factors
//! - Stamping the result with the evaluation time
//! - Audit logging (class and percentage only)

use crate::domain::{RiskAssessment, RiskFactor, RiskFactors};
use crate::ports::ReportFormatter;

/// Service for evaluating the NDLVC-5y score.
///
/// Holds no state between calls; every call is a full re-evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentService;

impl AssessmentService {
    /// Create a new assessment service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `factors`.
    #[must_use]
    pub fn assess(&self, factors: RiskFactors) -> RiskAssessment {
        let assessment = RiskAssessment::new(factors);

        tracing::debug!(
            percent = assessment.estimate.percent,
            class = assessment.estimate.class.number(),
            factor_count = factors.count(),
            "Risk score evaluated"
        );

        assessment
    }

    /// Evaluate `factors` with one factor flipped.
    ///
    /// Returns the updated factors alongside the new assessment.
    #[must_use]
    pub fn toggle(&self, mut factors: RiskFactors, factor: RiskFactor) -> (RiskFactors, RiskAssessment) {
        let present = factors.toggle(factor);
        tracing::trace!(factor = factor.key(), present, "Risk factor toggled");
        (factors, self.assess(factors))
    }

    /// Evaluate `factors` and render the result with `formatter`.
    ///
    /// # Errors
    /// Returns error if the formatter fails.
    pub fn report(
        &self,
        factors: RiskFactors,
        formatter: &dyn ReportFormatter,
    ) -> crate::Result<String> {
        let assessment = self.assess(factors);
        tracing::debug!(format = formatter.name(), "Rendering report");
        Ok(formatter.format(&assessment)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{score, RiskClass};

    #[test]
    fn test_assess_defaults() {
        let service = AssessmentService::new();
        let assessment = service.assess(RiskFactors::default());

        assert_eq!(assessment.estimate, score(&RiskFactors::default()));
        assert_eq!(assessment.class(), RiskClass::Low);
    }

    #[test]
    fn test_toggle_reevaluates() {
        let service = AssessmentService::new();

        let (factors, assessment) = service.toggle(RiskFactors::default(), RiskFactor::Minfl);
        assert!(factors.minfl);
        assert_eq!(assessment.class(), RiskClass::MidLow);

        let (factors, assessment) = service.toggle(factors, RiskFactor::Minfl);
        assert_eq!(factors, RiskFactors::default());
        assert_eq!(assessment.class(), RiskClass::Low);
    }

    #[test]
    fn test_report_uses_formatter() {
        let service = AssessmentService::new();
        let factors = RiskFactors::from_present(&[RiskFactor::Minfl]);

        let text = service
            .report(factors, &crate::adapters::TextReport::new(false))
            .expect("Should render");
        assert!(text.contains("6.1%"));

        let json = service
            .report(factors, &crate::adapters::JsonReport::new(true))
            .expect("Should render");
        assert!(json.contains("\"class\":\"mid_low\""));
    }

    #[test]
    fn test_timestamps_advance() {
        let service = AssessmentService::new();
        let first = service.assess(RiskFactors::default());
        let second = service.assess(RiskFactors::default());
        assert!(second.evaluated_at >= first.evaluated_at);
        assert_eq!(first.estimate, second.estimate);
    }
}
