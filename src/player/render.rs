//! Showcase Frame Rendering
//!
//! Turns a player's current state into an ASCII frame: proportional
//! progress bar, per-step status markers, detail panel and output
//! lines, and the closing example block at the terminal state.
//!
//! Rendering is pure string building; the caller decides where the
//! frame goes.

use colored::Colorize;

use super::engine::StepPlayer;
use super::model::{ExampleResult, StatCard, StepStatus};

/// Width of the progress bar in characters.
const BAR_WIDTH: usize = 40;

/// Renders a complete frame for the player's current state.
pub fn render_frame(player: &StepPlayer, show_details: bool) -> String {
    let showcase = player.showcase();
    let mut out = String::new();

    out.push_str(&format!("{}\n", showcase.name.bold()));
    if !showcase.tagline.is_empty() {
        out.push_str(&format!("{}\n", showcase.tagline.dimmed()));
    }
    out.push('\n');

    if !showcase.stat_cards.is_empty() {
        out.push_str(&render_stat_cards(&showcase.stat_cards));
        out.push('\n');
    }

    out.push_str(&progress_bar(player.current_index(), showcase.len()));
    out.push('\n');

    for (index, step) in showcase.steps.iter().enumerate() {
        let status = player.status_of(index);

        let title = match status {
            StepStatus::Waiting => step.title.dimmed().to_string(),
            StepStatus::Processing => step.title.cyan().bold().to_string(),
            StepStatus::Completed => step.title.green().to_string(),
        };

        out.push_str(&format!(
            "  {} {} {}  {}\n",
            status_marker(status),
            step.icon.glyph(),
            title,
            step.time_label.dimmed()
        ));

        if status == StepStatus::Completed {
            if let Some(output) = &step.output {
                out.push_str(&format!("      {} {}\n", "✓".green(), output.green()));
            }
        }

        if show_details && status != StepStatus::Waiting {
            if !step.description.is_empty() {
                out.push_str(&format!("      {}\n", step.description.dimmed()));
            }
            for detail in &step.details {
                out.push_str(&format!("        - {}\n", detail.dimmed()));
            }
        }
    }

    if player.is_completed() {
        if let Some(example) = &showcase.example {
            out.push('\n');
            out.push_str(&render_example(example));
        }
    }

    out
}

/// Renders the headline stat cards as a single row.
fn render_stat_cards(cards: &[StatCard]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&format!(
            "  {:<16} {}  {}\n",
            card.label.dimmed(),
            card.value.bold(),
            card.note.dimmed()
        ));
    }
    out
}

/// Renders the closing "real example" block.
pub fn render_example(example: &ExampleResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", example.heading.yellow().bold()));
    for fact in &example.facts {
        out.push_str(&format!("  {:<22} {}\n", fact.label.dimmed(), fact.value));
    }
    if let Some(note) = &example.note {
        out.push_str(&format!("  {}\n", note.yellow()));
    }
    out
}

/// Proportional progress bar, scaled so a full run fills the width.
fn progress_bar(current: usize, total: usize) -> String {
    if total == 0 {
        return format!("  |{}| 0/0", " ".repeat(BAR_WIDTH));
    }

    let filled = ((current + 1) * BAR_WIDTH) / total;
    let filled = filled.min(BAR_WIDTH);

    format!(
        "  |{}{}| {}/{}",
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        current + 1,
        total
    )
}

/// Marker glyph for a derived status.
fn status_marker(status: StepStatus) -> String {
    match status {
        StepStatus::Waiting => "○".dimmed().to_string(),
        StepStatus::Processing => "▶".cyan().to_string(),
        StepStatus::Completed => "●".green().to_string(),
    }
}
