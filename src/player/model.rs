//! Showcase Data Model
//!
//! Core data structures for scripted workflow showcases: an ordered,
//! immutable list of steps plus the presentation metadata shown around
//! the player (stat cards, the closing example block).
//!
//! Step status is never stored. It is derived on every frame from the
//! position of a step relative to the player's current index, which
//! keeps the rendered state impossible to desynchronize from playback.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default tick interval for showcases that don't specify one.
pub const DEFAULT_INTERVAL_MS: u64 = 2500;

/// Visual status of a step, derived from index comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step comes after the current index
    Waiting,
    /// Step is at the current index
    Processing,
    /// Step comes before the current index
    Completed,
}

impl StepStatus {
    /// Derives the status of the step at `index` given the player's
    /// `current` index.
    pub fn of(index: usize, current: usize) -> Self {
        use std::cmp::Ordering;
        match index.cmp(&current) {
            Ordering::Less => StepStatus::Completed,
            Ordering::Equal => StepStatus::Processing,
            Ordering::Greater => StepStatus::Waiting,
        }
    }
}

/// Glyph tag attached to a step for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Clock,
    Database,
    Brain,
    Palette,
    Send,
    Chart,
    Users,
    Shield,
    Target,
    FileText,
    Message,
    Camera,
    Check,
    Bot,
}

impl Icon {
    /// Single-character glyph used in terminal frames.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Clock => "⏰",
            Icon::Database => "🗄",
            Icon::Brain => "🧠",
            Icon::Palette => "🎨",
            Icon::Send => "📤",
            Icon::Chart => "📊",
            Icon::Users => "👥",
            Icon::Shield => "🛡",
            Icon::Target => "🎯",
            Icon::FileText => "📄",
            Icon::Message => "💬",
            Icon::Camera => "📷",
            Icon::Check => "✔",
            Icon::Bot => "🤖",
        }
    }
}

impl Default for Icon {
    fn default() -> Self {
        Icon::Bot
    }
}

/// A single scripted step in a showcase.
///
/// Everything here is presentation flavor: the time label and output
/// string are hard-coded narrative, not measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseStep {
    /// Unique identifier within the showcase
    pub id: String,

    /// Short title shown on the step card
    pub title: String,

    /// One-line description of what the step simulates
    pub description: String,

    /// Display time label (e.g. "8:00 AM", "T+2s", "Continuous")
    #[serde(default)]
    pub time_label: String,

    /// Glyph tag for rendering
    #[serde(default)]
    pub icon: Icon,

    /// Detail bullets revealed while the step is active or done
    #[serde(default)]
    pub details: Vec<String>,

    /// Output string shown once the step has completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl ShowcaseStep {
    /// Creates a new step with the given id, title and description.
    ///
    /// # Example
    ///
    /// ```
    /// use showreel::player::{Icon, ShowcaseStep};
    ///
    /// let step = ShowcaseStep::new("scan", "Scan New Jobs", "Query the last 12 hours")
    ///     .at("8:00 AM")
    ///     .icon(Icon::Database)
    ///     .with_output("187 new jobs retrieved");
    /// assert_eq!(step.id, "scan");
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into().trim().to_string(),
            title: title.into().trim().to_string(),
            description: description.into().trim().to_string(),
            time_label: String::new(),
            icon: Icon::default(),
            details: Vec::new(),
            output: None,
        }
    }

    /// Sets the display time label.
    pub fn at(mut self, label: impl Into<String>) -> Self {
        self.time_label = label.into();
        self
    }

    /// Sets the icon tag.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Sets the detail bullets.
    pub fn with_details(mut self, details: &[&str]) -> Self {
        self.details = details.iter().map(|d| d.to_string()).collect();
        self
    }

    /// Sets the output string shown on completion.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// A headline stat card shown above the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub note: String,
}

impl StatCard {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            note: note.into(),
        }
    }
}

/// A labelled fact in the closing example block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

impl Fact {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The static "real example" summary revealed at the terminal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleResult {
    /// Heading, e.g. "Real Example: Toyota Commercial - Lead Actor"
    pub heading: String,
    /// Labelled facts rendered as a grid
    pub facts: Vec<Fact>,
    /// Optional closing note under the grid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A complete scripted showcase: ordered steps plus chrome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showcase {
    /// Unique identifier (used on the command line)
    pub id: String,

    /// Display name
    pub name: String,

    /// One-line tagline under the name
    #[serde(default)]
    pub tagline: String,

    /// Tick interval in milliseconds between step advances
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// The ordered, immutable step list
    pub steps: Vec<ShowcaseStep>,

    /// Headline stat cards
    #[serde(default)]
    pub stat_cards: Vec<StatCard>,

    /// Closing example block shown once playback completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<ExampleResult>,
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

impl Showcase {
    /// Creates a new showcase from a step list.
    pub fn new(id: impl Into<String>, name: impl Into<String>, steps: Vec<ShowcaseStep>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tagline: String::new(),
            interval_ms: DEFAULT_INTERVAL_MS,
            steps,
            stat_cards: Vec::new(),
            example: None,
        }
    }

    /// Sets the tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Sets the tick interval in milliseconds.
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Sets the headline stat cards.
    pub fn with_stat_cards(mut self, cards: Vec<StatCard>) -> Self {
        self.stat_cards = cards;
        self
    }

    /// Sets the closing example block.
    pub fn with_example(mut self, example: ExampleResult) -> Self {
        self.example = Some(example);
        self
    }

    /// Returns the tick interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the showcase has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_derivation_table() {
        // For all I, C in a small grid the derivation is exact.
        for current in 0..6 {
            for index in 0..6 {
                let status = StepStatus::of(index, current);
                if index < current {
                    assert_eq!(status, StepStatus::Completed);
                } else if index == current {
                    assert_eq!(status, StepStatus::Processing);
                } else {
                    assert_eq!(status, StepStatus::Waiting);
                }
            }
        }
    }

    #[test]
    fn test_step_builder() {
        let step = ShowcaseStep::new("scan", "Scan", "Scan new jobs")
            .at("8:00 AM")
            .icon(Icon::Database)
            .with_details(&["a", "b"])
            .with_output("187 new jobs retrieved");

        assert_eq!(step.id, "scan");
        assert_eq!(step.time_label, "8:00 AM");
        assert_eq!(step.icon, Icon::Database);
        assert_eq!(step.details.len(), 2);
        assert_eq!(step.output.as_deref(), Some("187 new jobs retrieved"));
    }

    #[test]
    fn test_step_trims_fields() {
        let step = ShowcaseStep::new("  id  ", " Title ", " desc ");
        assert_eq!(step.id, "id");
        assert_eq!(step.title, "Title");
        assert_eq!(step.description, "desc");
    }

    #[test]
    fn test_showcase_defaults() {
        let showcase = Showcase::new("demo", "Demo", vec![]);
        assert!(showcase.is_empty());
        assert_eq!(showcase.len(), 0);
        assert_eq!(showcase.interval(), Duration::from_millis(2500));
    }

    #[test]
    fn test_showcase_interval_override() {
        let showcase =
            Showcase::new("demo", "Demo", vec![ShowcaseStep::new("a", "A", "a")])
                .with_interval_ms(2000);
        assert_eq!(showcase.interval(), Duration::from_millis(2000));
        assert_eq!(showcase.len(), 1);
    }

    #[test]
    fn test_showcase_yaml_roundtrip_defaults() {
        // A minimal hand-written script should parse with defaults applied.
        let yaml = r#"
id: custom
name: Custom Flow
steps:
  - id: first
    title: First
    description: the only step
"#;
        let showcase: Showcase = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(showcase.id, "custom");
        assert_eq!(showcase.interval_ms, DEFAULT_INTERVAL_MS);
        assert_eq!(showcase.steps[0].icon, Icon::Bot);
        assert!(showcase.steps[0].output.is_none());
    }
}
