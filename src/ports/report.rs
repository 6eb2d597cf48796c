//! Report port: Trait for rendering an assessment as text output.
//!
//! Keeps the scorer independent of how results are shown. The CLI picks
//! an implementation at runtime; the TUI draws the same data with widgets.

use crate::domain::RiskAssessment;

/// Errors that can occur while formatting a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Trait for report formatters.
///
/// Implementations must be pure: the same assessment yields the same output.
pub trait ReportFormatter: Send + Sync {
    /// Short name used on the command line (e.g. "text", "json").
    fn name(&self) -> &'static str;

    /// Render one assessment.
    ///
    /// # Errors
    /// Returns error if the output cannot be produced.
    fn format(&self, assessment: &RiskAssessment) -> Result<String, ReportError>;
}
