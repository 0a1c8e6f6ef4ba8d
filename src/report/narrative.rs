//! Report Narrative Rendering
//!
//! Renders the one-year retrospective: greeting, hero band, the four
//! quarterly chapters, department impact and the closing lines.

use colored::Colorize;

use crate::catalog::agents::{DEPARTMENTS, PLATFORM_INTEGRATIONS};
use crate::catalog::story::{
    CHAPTERS, CLOSING, DEPARTMENT_IMPACTS, HERO_STATS, KICKER, LEDE, TITLE,
};
use crate::session::TimeOfDay;

use super::counter::MetricFormat;

/// Greeting line for the reader, varying by time of day.
pub fn greeting(time_of_day: TimeOfDay) -> String {
    let opener = match time_of_day {
        TimeOfDay::Morning => "Good morning.",
        TimeOfDay::Afternoon => "Good afternoon.",
        TimeOfDay::Evening => "Good evening.",
        TimeOfDay::Night => "Burning the midnight oil?",
    };
    format!("{} Here's the year in review.", opener)
}

/// Renders the full report narrative.
pub fn render_report(time_of_day: TimeOfDay) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", greeting(time_of_day).dimmed()));
    out.push_str(&format!("{}\n", KICKER.dimmed()));
    out.push_str(&format!("{}\n\n", TITLE.bold()));
    out.push_str(&format!("{}\n\n", LEDE));

    for stat in HERO_STATS {
        out.push_str(&format!("  {:<8} {}\n", stat.value.bold(), stat.label.dimmed()));
    }
    out.push('\n');

    for chapter in CHAPTERS {
        out.push_str(&format!(
            "{} {}\n",
            chapter.quarter.cyan(),
            chapter.title.bold()
        ));
        out.push_str(&format!("{}\n\n", chapter.body));
    }

    out.push_str(&format!("{}\n", "Before and After".bold()));
    for dept in DEPARTMENTS {
        out.push_str(&format!(
            "  {:<22} {} → {}\n",
            dept.name,
            dept.before_state.dimmed(),
            dept.after_state
        ));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", "Impact by Department".bold()));
    for impact in DEPARTMENT_IMPACTS {
        out.push_str(&format!(
            "  {:<20} {:>10}  {}\n",
            impact.name,
            MetricFormat::dollars().render(impact.savings as f64),
            impact.highlight.dimmed()
        ));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", "The Ecosystem".bold()));
    for platform in PLATFORM_INTEGRATIONS {
        out.push_str(&format!(
            "  {:<20} {:<18} {}\n",
            platform.name,
            platform.users,
            platform.scale.dimmed()
        ));
    }
    out.push('\n');

    for line in CLOSING {
        out.push_str(&format!("{}\n", line.bold()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_varies_by_time_of_day() {
        assert!(greeting(TimeOfDay::Morning).contains("Good morning"));
        assert!(greeting(TimeOfDay::Night).contains("midnight"));
    }

    #[test]
    fn test_report_contains_all_chapters() {
        colored::control::set_override(false);
        let report = render_report(TimeOfDay::Afternoon);

        assert!(report.contains("The Year Everything Changed"));
        for chapter in CHAPTERS {
            assert!(report.contains(chapter.title));
            assert!(report.contains(chapter.quarter));
        }
        assert!(report.contains("We exceeded them by 17%"));
    }

    #[test]
    fn test_report_department_impact_figures() {
        colored::control::set_override(false);
        let report = render_report(TimeOfDay::Morning);
        assert!(report.contains("$486,000"));
        assert!(report.contains("Engineering"));
    }

    #[test]
    fn test_report_before_after_and_platforms() {
        colored::control::set_override(false);
        let report = render_report(TimeOfDay::Evening);

        assert!(report.contains("1-3 week data requests"));
        assert!(report.contains("Instant insights via natural language"));
        assert!(report.contains("Casting Networks"));
        assert!(report.contains("1.3M+ performers"));
    }
}
