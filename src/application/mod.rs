//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic for the presenters (TUI and CLI).

mod assessment;

pub use assessment::AssessmentService;
