//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod metrics;

pub use metrics::{MetricsReport, MetricsService};
