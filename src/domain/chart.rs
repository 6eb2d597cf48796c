//! Reference bar chart model.
//!
//! Four bars, one per risk class, on a fixed 0–70% scale, plus a
//! horizontal marker at the patient's estimate. Presenters decide how to
//! draw it.

use serde::{Deserialize, Serialize};

use super::model::{RiskClass, RiskEstimate};

/// Upper bound of the chart's y axis, in percent.
pub const CHART_MAX_PERCENT: f64 = 70.0;

/// One reference bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceBar {
    pub class: RiskClass,
    /// Bar height in percent
    pub height: f64,
}

impl ReferenceBar {
    /// Reference height drawn for a class.
    #[must_use]
    pub fn height_for(class: RiskClass) -> f64 {
        match class {
            RiskClass::Low => 5.0,
            RiskClass::MidLow => 20.0,
            RiskClass::MidHigh => 40.0,
            RiskClass::High => 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceChart {
    pub bars: [ReferenceBar; 4],

    /// Patient estimate in percent (unclamped)
    pub marker: f64,

    /// Class of the patient estimate, for coloring the marker
    pub marker_class: RiskClass,

    pub y_max: f64,
}

impl ReferenceChart {
    #[must_use]
    pub fn for_estimate(estimate: &RiskEstimate) -> Self {
        Self {
            bars: RiskClass::ALL.map(|class| ReferenceBar {
                class,
                height: ReferenceBar::height_for(class),
            }),
            marker: estimate.percent,
            marker_class: estimate.class,
            y_max: CHART_MAX_PERCENT,
        }
    }

    /// Marker position clamped to the chart scale.
    #[must_use]
    pub fn marker_on_scale(&self) -> f64 {
        self.marker.clamp(0.0, self.y_max)
    }

    /// Whether the estimate lies above the drawn scale.
    #[must_use]
    pub fn marker_off_scale(&self) -> bool {
        self.marker > self.y_max
    }
}
