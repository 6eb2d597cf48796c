//! Domain layer: Core business types and logic.
//!
//! Pure types with no I/O. Everything here is serializable and total over
//! its inputs.

mod assessment;
mod chart;
mod factors;
mod model;

pub use assessment::RiskAssessment;
pub use chart::{ReferenceBar, ReferenceChart, CHART_MAX_PERCENT};
pub use factors::{RiskFactor, RiskFactors};
pub use model::{
    coefficient_table, score, PrognosticIndex, RiskClass, RiskEstimate, BASELINE_SURVIVAL,
    CLASS_THRESHOLDS, MAX_REPORTED_PERCENT,
};
