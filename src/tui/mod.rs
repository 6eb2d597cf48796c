//! TUI module: Terminal User Interface using Ratatui.
//!
//! A single screen with:
//! - The seven risk-factor checkboxes
//! - The estimated 5-year risk and its class
//! - A reference bar chart with the patient marker

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::MedicalTheme;
