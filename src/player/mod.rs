//! Step Player Module
//!
//! The scripted workflow player: an ordered step list, a current
//! index, and a play/pause state advanced on a timer.
//!
//! # Structure
//!
//! - [`model`]: Showcase and step data structures, derived status
//! - [`engine`]: The parameterized state machine and playback loop
//! - [`render`]: ASCII frame rendering
//! - [`script`]: YAML load/save for custom showcase definitions

pub mod engine;
pub mod model;
pub mod render;
pub mod script;

pub use engine::{PlayerState, StepPlayer};
pub use model::{
    ExampleResult, Fact, Icon, Showcase, ShowcaseStep, StatCard, StepStatus,
};
pub use render::render_frame;
pub use script::{load_showcase, save_showcase};
