//! Ports layer: Trait definitions for external collaborators.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the scorer and whatever presents its results.

mod report;

pub use report::{ReportError, ReportFormatter};
