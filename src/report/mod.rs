//! Report Module
//!
//! The executive-facing surfaces: animated count-up metrics, the
//! financial dashboard with its timeframe selector, and the annual
//! report narrative.
//!
//! # Structure
//!
//! - [`counter`]: Linear count-up animation and metric formatting
//! - [`dashboard`]: Key metrics + department breakdown
//! - [`narrative`]: The one-year retrospective prose
//! - [`roi`]: What-if calculator over the implementation list

pub mod counter;
pub mod dashboard;
pub mod narrative;
pub mod roi;

pub use counter::{AnimatedCounter, MetricFormat, COUNTER_TICKS};
pub use dashboard::{run_dashboard, KeyMetrics, Timeframe};
pub use narrative::render_report;
pub use roi::RoiCalculator;
