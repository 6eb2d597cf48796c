//! # NDLVC-5y Risk
//!
//! Calculator for the 5-year risk of major arrhythmic events (MAE) in
//! non-dilated left ventricular cardiomyopathy.
//!
//! This crate provides:
//! - The NDLVC-5y prognostic model (seven binary predictors)
//! - Text and JSON reports with a reference bar chart
//! - Terminal UI with an interactive risk-factor form
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types and the scorer (RiskFactors, RiskEstimate, RiskClass)
//! - `ports`: Trait definitions for result presenters
//! - `adapters`: Concrete report formatters (text, JSON)
//! - `application`: Use cases orchestrating the domain
//! - `config`: Environment configuration
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{score, RiskAssessment, RiskClass, RiskEstimate, RiskFactor, RiskFactors};

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, NdlvcError>;

/// Main error type
#[derive(Debug, thiserror::Error)]
pub enum NdlvcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report failed: {0}")]
    Report(#[from] ports::ReportError),
}
