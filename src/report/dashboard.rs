//! Executive Dashboard
//!
//! Renders the key financial metrics with the count-up animation, plus
//! the per-department breakdown drawn from the agent catalog. A
//! timeframe selector rescales the flow metrics; totals like ROI stay
//! annual.

use std::io::{self, Write};
use std::time::Duration;

use colored::Colorize;
use log::debug;

use crate::catalog::agents::{self, DEPARTMENTS};

use super::counter::{AnimatedCounter, MetricFormat, COUNTER_TICKS};

/// Duration of the metric count-up animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(2000);

/// Reporting window for flow metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    Month,
    Quarter,
    Year,
}

impl Timeframe {
    /// Divisor applied to annual flow figures.
    pub fn divisor(&self) -> f64 {
        match self {
            Timeframe::Month => 12.0,
            Timeframe::Quarter => 4.0,
            Timeframe::Year => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Month => "Monthly",
            Timeframe::Quarter => "Quarterly",
            Timeframe::Year => "Annual",
        }
    }

    /// Parses a timeframe name as typed on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "month" | "monthly" => Some(Timeframe::Month),
            "quarter" | "quarterly" => Some(Timeframe::Quarter),
            "year" | "annual" | "yearly" => Some(Timeframe::Year),
            _ => None,
        }
    }
}

/// The headline financial figures, all annual.
#[derive(Debug, Clone, Copy)]
pub struct KeyMetrics {
    pub annual_savings: f64,
    pub investment: f64,
    pub fte_capacity: f64,
    pub hours_automated: f64,
    pub roi_percent: f64,
    pub payback_months: f64,
}

impl Default for KeyMetrics {
    fn default() -> Self {
        Self {
            annual_savings: 1_480_750.0,
            investment: 405_500.0,
            fte_capacity: 16.28,
            hours_automated: 33_852.0,
            roi_percent: 293.0,
            payback_months: 4.1,
        }
    }
}

/// One metric row in the dashboard, with its counter and format.
struct MetricRow {
    label: &'static str,
    counter: AnimatedCounter,
    format: MetricFormat,
}

impl MetricRow {
    fn new(label: &'static str, target: f64, format: MetricFormat) -> Self {
        Self {
            label,
            counter: AnimatedCounter::new(target, ANIMATION_DURATION),
            format,
        }
    }

    fn line(&self) -> String {
        format!(
            "  {:<24} {}",
            self.label.dimmed(),
            self.format.render(self.counter.value()).bold()
        )
    }
}

/// Builds the dashboard rows for a timeframe.
///
/// Savings, hours and investment are flow figures and get rescaled;
/// ROI, payback and FTE capacity are rates and stay as-is.
fn metric_rows(metrics: &KeyMetrics, timeframe: Timeframe) -> Vec<MetricRow> {
    let div = timeframe.divisor();
    vec![
        MetricRow::new(
            "Value delivered",
            metrics.annual_savings / div,
            MetricFormat::dollars(),
        ),
        MetricRow::new(
            "Investment",
            metrics.investment / div,
            MetricFormat::dollars(),
        ),
        MetricRow::new(
            "Hours automated",
            metrics.hours_automated / div,
            MetricFormat::plain(0),
        ),
        MetricRow::new("First-year ROI", metrics.roi_percent, MetricFormat::percent()),
        MetricRow::new(
            "FTE capacity unlocked",
            metrics.fte_capacity,
            MetricFormat::plain(2),
        ),
        MetricRow::new(
            "Payback period",
            metrics.payback_months,
            MetricFormat::suffixed(" mo", 1),
        ),
    ]
}

/// Renders the per-department savings table from the catalog.
pub fn render_departments() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "By Department".bold()));

    let total = agents::total_savings();
    for dept in DEPARTMENTS {
        let savings = agents::department_savings(dept);
        let agents = agents::agents_in(dept);
        out.push_str(&format!(
            "  {:<22} {:>10}  {} agents  {}\n",
            dept.name,
            MetricFormat::dollars().render(savings as f64),
            agents.len(),
            dept.after_state.dimmed()
        ));
    }
    out.push_str(&format!(
        "  {:<22} {:>10}\n",
        "Total".bold(),
        MetricFormat::dollars().render(total as f64).bold()
    ));
    out
}

/// Renders one full dashboard frame (metrics at their current animated
/// values, then the department table).
fn render_metrics(rows: &[MetricRow], timeframe: Timeframe) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        "Executive Dashboard".bold(),
        format!("({})", timeframe.label()).dimmed()
    ));
    for row in rows {
        out.push_str(&row.line());
        out.push('\n');
    }
    out
}

/// Runs the animated dashboard to a writer.
///
/// With `animate` off every counter jumps straight to its target and a
/// single frame is written. Animated mode redraws the metric block in
/// place using cursor-up escapes.
pub async fn run_dashboard<W: Write>(
    out: &mut W,
    metrics: &KeyMetrics,
    timeframe: Timeframe,
    animate: bool,
) -> io::Result<()> {
    let mut rows = metric_rows(metrics, timeframe);
    debug!(
        "dashboard: {} rows, timeframe {}, animate={}",
        rows.len(),
        timeframe.label(),
        animate
    );

    if !animate {
        for row in &mut rows {
            row.counter.finish();
        }
        write!(out, "{}", render_metrics(&rows, timeframe))?;
        writeln!(out)?;
        write!(out, "{}", render_departments())?;
        return Ok(());
    }

    let interval = rows[0].counter.tick_interval();
    write!(out, "{}", render_metrics(&rows, timeframe))?;
    out.flush()?;

    for _ in 0..COUNTER_TICKS {
        tokio::time::sleep(interval).await;
        for row in &mut rows {
            row.counter.tick();
        }
        // Redraw the block in place: one line per row plus the header.
        write!(out, "\x1b[{}A", rows.len() + 1)?;
        write!(out, "{}", render_metrics(&rows, timeframe))?;
        out.flush()?;
    }

    writeln!(out)?;
    write!(out, "{}", render_departments())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_parse() {
        assert_eq!(Timeframe::parse("month"), Some(Timeframe::Month));
        assert_eq!(Timeframe::parse("QUARTERLY"), Some(Timeframe::Quarter));
        assert_eq!(Timeframe::parse("annual"), Some(Timeframe::Year));
        assert_eq!(Timeframe::parse("decade"), None);
    }

    #[test]
    fn test_flow_metrics_rescale_rates_do_not() {
        let metrics = KeyMetrics::default();
        let rows = metric_rows(&metrics, Timeframe::Month);

        // Value delivered is divided by 12; ROI is untouched.
        assert!((rows[0].counter.target() - 1_480_750.0 / 12.0).abs() < 1e-6);
        assert_eq!(rows[3].counter.target(), 293.0);
        assert_eq!(rows[5].counter.target(), 4.1);
    }

    #[test]
    fn test_department_table_includes_total() {
        colored::control::set_override(false);
        let table = render_departments();
        assert!(table.contains("Total"));
        assert!(table.contains("Customer Support"));
        // Catalog-wide savings sum.
        let expected = MetricFormat::dollars().render(agents::total_savings() as f64);
        assert!(table.contains(&expected));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dashboard_animated_run_lands_on_targets() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        let metrics = KeyMetrics::default();

        run_dashboard(&mut buf, &metrics, Timeframe::Year, true)
            .await
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        // Final frame shows the exact targets.
        assert!(text.contains("$1,480,750"));
        assert!(text.contains("293%"));
        assert!(text.contains("16.28"));
    }

    #[tokio::test]
    async fn test_dashboard_no_animate_single_frame() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        let metrics = KeyMetrics::default();

        run_dashboard(&mut buf, &metrics, Timeframe::Year, false)
            .await
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("$1,480,750"));
        // No in-place redraw escapes in the static path.
        assert!(!text.contains("\x1b["));
    }
}
