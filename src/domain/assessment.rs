//! Assessment record: one evaluation of the risk score.

use serde::{Deserialize, Serialize};

use super::chart::ReferenceChart;
use super::factors::RiskFactors;
use super::model::{score, RiskClass, RiskEstimate};

/// Scored factors plus evaluation metadata.
///
/// Lives for one interaction only and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Inputs as entered
    pub factors: RiskFactors,

    /// Scorer output
    pub estimate: RiskEstimate,

    /// Timestamp of evaluation
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
}

impl RiskAssessment {
    /// Score `factors` now.
    #[must_use]
    pub fn new(factors: RiskFactors) -> Self {
        Self::at(factors, chrono::Utc::now())
    }

    /// Score `factors` with an explicit timestamp.
    #[must_use]
    pub fn at(factors: RiskFactors, evaluated_at: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            factors,
            estimate: score(&factors),
            evaluated_at,
        }
    }

    #[must_use]
    pub fn class(&self) -> RiskClass {
        self.estimate.class
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.estimate.percent
    }

    #[must_use]
    pub fn chart(&self) -> ReferenceChart {
        ReferenceChart::for_estimate(&self.estimate)
    }
}
