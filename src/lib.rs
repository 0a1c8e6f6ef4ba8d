//! Showreel - AI Transformation Annual Report
//!
//! A terminal rendition of the one-year AI transformation
//! retrospective: the narrative report, an animated executive
//! dashboard, and five scripted agent showcases replayed step by step.
//!
//! # Architecture
//!
//! The library is organized into five main modules:
//!
//! - [`player`]: The scripted step player and frame rendering
//! - [`catalog`]: Static agent, department and showcase data
//! - [`report`]: Animated metrics, dashboard and narrative
//! - [`session`]: Owned per-invocation UI state and persistence
//! - [`share`]: Clipboard sharing of the report link
//!
//! # Example
//!
//! ```rust,no_run
//! use showreel::catalog::showcases;
//! use showreel::player::{render_frame, StepPlayer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let showcase = showcases::find("high-value-job").unwrap().clone();
//!     let mut player = StepPlayer::new(showcase);
//!     player
//!         .run(|p| println!("{}", render_frame(p, false)))
//!         .await;
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod player;
pub mod report;
pub mod session;
pub mod share;

// Re-export commonly used types
pub use error::{Error, Result};
pub use player::{PlayerState, Showcase, ShowcaseStep, StepPlayer, StepStatus};
pub use report::{AnimatedCounter, KeyMetrics, Timeframe};
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "Showreel";
