//! Adapters layer: Concrete implementations of ports.
//!
//! - `text`: plain-text report with an ASCII reference chart
//! - `json`: serde_json report

pub mod json;
pub mod text;

pub use json::JsonReport;
pub use text::TextReport;
