//! Plain-text report with an ASCII reference chart.

use std::fmt::Write;

use crate::domain::{ReferenceChart, RiskAssessment};
use crate::ports::{ReportError, ReportFormatter};

/// Columns used for the 0..y_max span of the ASCII chart.
const CHART_WIDTH: usize = 35;

/// Human-readable report for terminals and logs.
#[derive(Debug, Clone)]
pub struct TextReport {
    show_chart: bool,
}

impl Default for TextReport {
    fn default() -> Self {
        Self { show_chart: true }
    }
}

impl TextReport {
    #[must_use]
    pub fn new(show_chart: bool) -> Self {
        Self { show_chart }
    }
}

impl ReportFormatter for TextReport {
    fn name(&self) -> &'static str {
        "text"
    }

    fn format(&self, assessment: &RiskAssessment) -> Result<String, ReportError> {
        let mut out = String::new();
        let estimate = &assessment.estimate;

        writeln!(out, "NDLVC-5y Risk Score")?;
        writeln!(
            out,
            "Estimated 5-year risk of MAE: {}",
            estimate.percent_display()
        )?;
        writeln!(out, "Risk Class: {}", estimate.class.label())?;
        writeln!(out)?;

        let present: Vec<_> = assessment.factors.present().collect();
        if present.is_empty() {
            writeln!(out, "Risk factors present: none")?;
        } else {
            writeln!(out, "Risk factors present ({}):", present.len())?;
            for factor in present {
                writeln!(out, "  - {}", factor.label())?;
            }
        }
        writeln!(
            out,
            "Prognostic index: {:.4}",
            estimate.prognostic_index.value()
        )?;

        if self.show_chart {
            writeln!(out)?;
            write_chart(&mut out, &assessment.chart())?;
        }

        Ok(out)
    }
}

fn columns_for(percent: f64, y_max: f64) -> usize {
    let cols = (percent * CHART_WIDTH as f64 / y_max).round();
    (cols.max(0.0) as usize).min(CHART_WIDTH)
}

fn write_chart(out: &mut String, chart: &ReferenceChart) -> std::fmt::Result {
    writeln!(out, "Reference chart (0–{:.0}%):", chart.y_max)?;

    for bar in &chart.bars {
        let filled = columns_for(bar.height, chart.y_max);
        writeln!(
            out,
            "  {} |{}{}| {:>2.0}%",
            bar.class,
            "#".repeat(filled),
            " ".repeat(CHART_WIDTH - filled),
            bar.height
        )?;
    }

    let col = columns_for(chart.marker_on_scale(), chart.y_max).min(CHART_WIDTH - 1);
    write!(
        out,
        "  Patient |{}^{}| {:.1}%",
        "-".repeat(col),
        " ".repeat(CHART_WIDTH - col - 1),
        chart.marker
    )?;
    if chart.marker_off_scale() {
        write!(out, " (above scale)")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskFactor, RiskFactors};

    #[test]
    fn test_report_contains_result() {
        let assessment = RiskAssessment::new(RiskFactors::from_present(&[RiskFactor::Minfl]));
        let report = TextReport::default().format(&assessment).expect("Should format");

        assert!(report.contains("Estimated 5-year risk of MAE: 6.1%"));
        assert!(report.contains("Risk Class: Class 2: Mid-low risk (5–20%)"));
        assert!(report.contains("Myocardial inflammation"));
        assert!(report.contains("Prognostic index: 2.7535"));
    }

    #[test]
    fn test_chart_rows() {
        let assessment = RiskAssessment::new(RiskFactors::default());
        let report = TextReport::default().format(&assessment).expect("Should format");

        // 5% of 70% over 35 columns
        assert!(report.contains("  Class 1 |###"));
        assert!(report.contains(&format!("  Class 4 |{}", "#".repeat(30))));
        assert!(report.contains("  Patient |^"));
        assert!(report.contains("Risk factors present: none"));
        assert!(!report.contains("above scale"));
    }

    #[test]
    fn test_marker_above_scale() {
        let assessment = RiskAssessment::new(RiskFactors::all());
        let report = TextReport::default().format(&assessment).expect("Should format");

        assert!(report.contains("99.9% (above scale)"));
        assert!(report.contains("Risk factors present (7):"));
    }

    #[test]
    fn test_chart_disabled() {
        let assessment = RiskAssessment::new(RiskFactors::default());
        let report = TextReport::new(false).format(&assessment).expect("Should format");

        assert!(!report.contains("Reference chart"));
        assert!(report.contains("0.4%"));
    }
}
