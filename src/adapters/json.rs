//! JSON report for scripting and integration.

use crate::domain::RiskAssessment;
use crate::ports::{ReportError, ReportFormatter};

#[derive(Debug, Clone, Default)]
pub struct JsonReport {
    compact: bool,
}

impl JsonReport {
    #[must_use]
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }
}

impl ReportFormatter for JsonReport {
    fn name(&self) -> &'static str {
        "json"
    }

    fn format(&self, assessment: &RiskAssessment) -> Result<String, ReportError> {
        let json = if self.compact {
            serde_json::to_string(assessment)?
        } else {
            serde_json::to_string_pretty(assessment)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskClass, RiskFactor, RiskFactors};

    #[test]
    fn test_json_parses_back() {
        let assessment = RiskAssessment::new(RiskFactors::from_present(&[
            RiskFactor::LvefLow,
            RiskFactor::Nsvt,
        ]));
        let json = JsonReport::default().format(&assessment).expect("Should format");
        let parsed: RiskAssessment = serde_json::from_str(&json).expect("Should parse");

        assert_eq!(parsed.factors, assessment.factors);
        assert_eq!(parsed.estimate.class, RiskClass::MidLow);
        assert!((parsed.estimate.percent - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_json_field_names() {
        let assessment = RiskAssessment::new(RiskFactors::default());
        let json = JsonReport::new(true).format(&assessment).expect("Should format");
        let value: serde_json::Value = serde_json::from_str(&json).expect("Should parse");

        assert_eq!(value["estimate"]["class"], "low");
        assert_eq!(value["estimate"]["percent"], 0.4);
        assert_eq!(value["estimate"]["prognostic_index"], 0.0);
        assert_eq!(value["factors"]["minfl"], false);
        assert!(!json.contains('\n'));
    }
}
