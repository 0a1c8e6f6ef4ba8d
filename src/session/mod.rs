//! Session Module
//!
//! Per-invocation UI context. All of it lives in an owned [`Session`]
//! value constructed at startup and passed down explicitly; there is
//! no global singleton to mutate from a distance.
//!
//! # Structure
//!
//! - [`Session`]: view mode, selection, playback preferences, metrics
//! - [`persist`]: the first-visit marker written to disk

pub mod persist;

use std::collections::HashSet;

use chrono::{Local, Timelike};

pub use persist::IntroMarker;

/// Minimum and maximum animation speed multipliers.
const SPEED_RANGE: (f64, f64) = (0.25, 4.0);

/// What the user is currently looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Free browsing across the whole catalog
    Exploration,
    /// Zoomed in on a single catalog node
    Focused { node: String },
    /// Guided tour at a given stop
    Tour { step: usize },
}

/// Coarse time-of-day bucket for greeting copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Buckets an hour (0-23) into a time of day.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    /// Bucket for the current local time.
    pub fn now() -> Self {
        Self::from_hour(Local::now().hour())
    }
}

/// Snapshot of the headline metrics carried by a session.
#[derive(Debug, Clone, Copy)]
pub struct MetricsSnapshot {
    pub annual_savings: f64,
    pub fte_capacity: f64,
    pub hours_automated: f64,
    pub roi_percent: f64,
    pub payback_months: f64,
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            annual_savings: 1_500_000.0,
            fte_capacity: 16.28,
            hours_automated: 33_852.0,
            roi_percent: 293.0,
            payback_months: 4.1,
        }
    }
}

/// Owned per-invocation UI state.
///
/// # Example
///
/// ```
/// use showreel::session::{Session, ViewMode};
///
/// let mut session = Session::new();
/// session.focus("high-value-job-agent");
/// assert!(matches!(session.view_mode(), ViewMode::Focused { .. }));
/// assert!(session.is_discovered("high-value-job-agent"));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    view_mode: ViewMode,
    selected_agent: Option<String>,
    animation_speed: f64,
    paused: bool,
    sound_enabled: bool,
    discovered: HashSet<String>,
    metrics: MetricsSnapshot,
    time_of_day: TimeOfDay,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a fresh session with default metrics and the current
    /// local time of day.
    pub fn new() -> Self {
        Self {
            view_mode: ViewMode::Exploration,
            selected_agent: None,
            animation_speed: 1.0,
            paused: false,
            sound_enabled: true,
            discovered: HashSet::new(),
            metrics: MetricsSnapshot::default(),
            time_of_day: TimeOfDay::now(),
        }
    }

    pub fn view_mode(&self) -> &ViewMode {
        &self.view_mode
    }

    pub fn selected_agent(&self) -> Option<&str> {
        self.selected_agent.as_deref()
    }

    pub fn animation_speed(&self) -> f64 {
        self.animation_speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn metrics(&self) -> &MetricsSnapshot {
        &self.metrics
    }

    /// Replaces the metrics snapshot (e.g. with recomputed ROI totals).
    pub fn set_metrics(&mut self, metrics: MetricsSnapshot) {
        self.metrics = metrics;
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    /// Overrides the time of day (tests, forced greetings).
    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = time_of_day;
        self
    }

    /// Sets the animation speed, clamped to a sane range.
    pub fn set_animation_speed(&mut self, speed: f64) {
        self.animation_speed = speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    /// Focuses a catalog node, selecting it and marking it discovered.
    pub fn focus(&mut self, node: impl Into<String>) {
        let node = node.into();
        self.discovered.insert(node.clone());
        self.selected_agent = Some(node.clone());
        self.view_mode = ViewMode::Focused { node };
    }

    /// Returns to free exploration, clearing the selection.
    pub fn explore(&mut self) {
        self.selected_agent = None;
        self.view_mode = ViewMode::Exploration;
    }

    /// Enters (or advances) the guided tour.
    pub fn tour(&mut self, step: usize) {
        self.view_mode = ViewMode::Tour { step };
    }

    /// True if the node has been focused at least once this session.
    pub fn is_discovered(&self, node: &str) -> bool {
        self.discovered.contains(node)
    }

    /// Number of distinct nodes discovered this session.
    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    #[test]
    fn test_session_defaults() {
        let session = Session::new();
        assert_eq!(*session.view_mode(), ViewMode::Exploration);
        assert!(session.selected_agent().is_none());
        assert_eq!(session.animation_speed(), 1.0);
        assert!(!session.is_paused());
        assert_eq!(session.discovered_count(), 0);
        assert_eq!(session.metrics().roi_percent, 293.0);
    }

    #[test]
    fn test_focus_marks_discovered_and_selects() {
        let mut session = Session::new();
        session.focus("tier1-support");

        assert!(session.is_discovered("tier1-support"));
        assert_eq!(session.selected_agent(), Some("tier1-support"));
        assert_eq!(
            *session.view_mode(),
            ViewMode::Focused {
                node: "tier1-support".to_string()
            }
        );
    }

    #[test]
    fn test_explore_clears_selection_but_keeps_discoveries() {
        let mut session = Session::new();
        session.focus("tier1-support");
        session.focus("lead-qualification");
        session.explore();

        assert!(session.selected_agent().is_none());
        assert_eq!(*session.view_mode(), ViewMode::Exploration);
        assert_eq!(session.discovered_count(), 2);
    }

    #[test]
    fn test_animation_speed_is_clamped() {
        let mut session = Session::new();
        session.set_animation_speed(100.0);
        assert_eq!(session.animation_speed(), 4.0);
        session.set_animation_speed(0.0);
        assert_eq!(session.animation_speed(), 0.25);
    }

    #[test]
    fn test_tour_mode() {
        let mut session = Session::new();
        session.tour(2);
        assert_eq!(*session.view_mode(), ViewMode::Tour { step: 2 });
    }

    #[test]
    fn test_set_metrics_replaces_snapshot() {
        let mut session = Session::new();
        let custom = MetricsSnapshot {
            annual_savings: 1_220_000.0,
            ..MetricsSnapshot::default()
        };
        session.set_metrics(custom);
        assert_eq!(session.metrics().annual_savings, 1_220_000.0);
    }
}
