//! ROI Calculator
//!
//! What-if aggregation over the seven headline AI implementations.
//! Each implementation carries its annual savings, FTE capacity and
//! hours automated; toggling a subset off recomputes the flow totals
//! over what remains. ROI percentage and payback period are rate
//! figures tied to the overall investment and stay fixed.
//!
//! The recomputed totals feed the same metric types the dashboard and
//! session carry, so a custom selection can drive either view.

use std::collections::HashSet;

use colored::Colorize;

use crate::session::MetricsSnapshot;

use super::counter::MetricFormat;
use super::dashboard::KeyMetrics;

/// One toggleable AI implementation.
#[derive(Debug, Clone, Copy)]
pub struct Implementation {
    pub id: &'static str,
    pub name: &'static str,
    pub department: &'static str,
    pub annual_savings: u64,
    pub fte_impact: f64,
    pub hours_automated: u64,
}

/// The seven headline implementations.
pub const IMPLEMENTATIONS: &[Implementation] = &[
    Implementation {
        id: "high-value-job-agent",
        name: "High-Value Job Agent",
        department: "Marketing",
        annual_savings: 156_000,
        fte_impact: 1.5,
        hours_automated: 3_120,
    },
    Implementation {
        id: "support-deflection",
        name: "Tier 1 Support Deflection",
        department: "Support",
        annual_savings: 280_000,
        fte_impact: 3.5,
        hours_automated: 7_280,
    },
    Implementation {
        id: "lead-qualification",
        name: "Lead Qualification Bot",
        department: "Sales",
        annual_savings: 195_000,
        fte_impact: 2.25,
        hours_automated: 4_680,
    },
    Implementation {
        id: "test-automation",
        name: "AI Test Generation",
        department: "Engineering",
        annual_savings: 240_000,
        fte_impact: 2.0,
        hours_automated: 4_160,
    },
    Implementation {
        id: "content-generation",
        name: "Content Generation AI",
        department: "Marketing",
        annual_savings: 180_000,
        fte_impact: 2.2,
        hours_automated: 4_576,
    },
    Implementation {
        id: "data-insights",
        name: "Natural Language Queries",
        department: "Data",
        annual_savings: 210_000,
        fte_impact: 1.8,
        hours_automated: 3_744,
    },
    Implementation {
        id: "casting-matching",
        name: "AI Talent Matching",
        department: "Casting",
        annual_savings: 239_000,
        fte_impact: 2.48,
        hours_automated: 5_292,
    },
];

/// Fixed first-year ROI percentage for the overall investment.
const ROI_PERCENT: f64 = 293.0;

/// Fixed payback period in months.
const PAYBACK_MONTHS: f64 = 4.1;

/// Totals over the enabled subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiTotals {
    pub annual_savings: u64,
    pub fte_capacity: f64,
    pub hours_automated: u64,
    pub roi_percent: f64,
    pub payback_months: f64,
}

impl RoiTotals {
    /// The totals as a session metrics snapshot.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            annual_savings: self.annual_savings as f64,
            fte_capacity: self.fte_capacity,
            hours_automated: self.hours_automated as f64,
            roi_percent: self.roi_percent,
            payback_months: self.payback_months,
        }
    }

    /// The totals as dashboard key metrics, keeping the default
    /// investment figure.
    pub fn key_metrics(&self) -> KeyMetrics {
        KeyMetrics {
            annual_savings: self.annual_savings as f64,
            fte_capacity: self.fte_capacity,
            hours_automated: self.hours_automated as f64,
            roi_percent: self.roi_percent,
            payback_months: self.payback_months,
            ..KeyMetrics::default()
        }
    }
}

/// Selection state over the implementation list.
///
/// # Example
///
/// ```
/// use showreel::report::roi::RoiCalculator;
///
/// let mut calc = RoiCalculator::new();
/// assert!(calc.exclude("support-deflection"));
/// assert_eq!(calc.totals().annual_savings, 1_220_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoiCalculator {
    disabled: HashSet<&'static str>,
}

impl RoiCalculator {
    /// Creates a calculator with every implementation enabled.
    pub fn new() -> Self {
        Self::default()
    }

    fn known(id: &str) -> Option<&'static Implementation> {
        IMPLEMENTATIONS.iter().find(|i| i.id == id)
    }

    /// True if the implementation is part of the current selection.
    pub fn is_enabled(&self, id: &str) -> bool {
        !self.disabled.contains(id)
    }

    /// Removes an implementation from the selection. Returns false for
    /// an unknown id.
    pub fn exclude(&mut self, id: &str) -> bool {
        match Self::known(id) {
            Some(found) => {
                self.disabled.insert(found.id);
                true
            }
            None => false,
        }
    }

    /// Restores an implementation to the selection. Returns false for
    /// an unknown id.
    pub fn include(&mut self, id: &str) -> bool {
        match Self::known(id) {
            Some(found) => {
                self.disabled.remove(found.id);
                true
            }
            None => false,
        }
    }

    /// Flips one implementation in or out. Returns false for an
    /// unknown id.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_enabled(id) {
            self.exclude(id)
        } else {
            self.include(id)
        }
    }

    /// The implementations in the current selection, in table order.
    pub fn enabled(&self) -> impl Iterator<Item = &'static Implementation> + '_ {
        IMPLEMENTATIONS.iter().filter(|i| self.is_enabled(i.id))
    }

    /// Recomputes the totals over the current selection.
    pub fn totals(&self) -> RoiTotals {
        let mut totals = RoiTotals {
            annual_savings: 0,
            fte_capacity: 0.0,
            hours_automated: 0,
            roi_percent: ROI_PERCENT,
            payback_months: PAYBACK_MONTHS,
        };
        for implementation in self.enabled() {
            totals.annual_savings += implementation.annual_savings;
            totals.fte_capacity += implementation.fte_impact;
            totals.hours_automated += implementation.hours_automated;
        }
        totals
    }
}

/// Renders the implementation table and the recomputed totals.
pub fn render_roi(calc: &RoiCalculator) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "ROI Calculator".bold()));
    out.push_str(&format!(
        "{}\n\n",
        "Customize your AI transformation".dimmed()
    ));

    let dollars = MetricFormat::dollars();
    for implementation in IMPLEMENTATIONS {
        let marker = if calc.is_enabled(implementation.id) {
            "[x]".green().to_string()
        } else {
            "[ ]".dimmed().to_string()
        };
        out.push_str(&format!(
            "  {} {:<26} {:<12} {:>9}/yr  {:>5} FTE  {:>6} h\n",
            marker,
            implementation.name,
            implementation.department.dimmed(),
            dollars.render(implementation.annual_savings as f64),
            MetricFormat::plain(1).render(implementation.fte_impact),
            MetricFormat::plain(0).render(implementation.hours_automated as f64),
        ));
    }

    let totals = calc.totals();
    out.push('\n');
    out.push_str(&format!(
        "  {:<18} {}\n",
        "Total savings".dimmed(),
        dollars.render(totals.annual_savings as f64).bold()
    ));
    out.push_str(&format!(
        "  {:<18} {}\n",
        "FTE capacity".dimmed(),
        MetricFormat::plain(2).render(totals.fte_capacity).bold()
    ));
    out.push_str(&format!(
        "  {:<18} {}\n",
        "Hours automated".dimmed(),
        MetricFormat::plain(0)
            .render(totals.hours_automated as f64)
            .bold()
    ));
    out.push_str(&format!(
        "  {:<18} {}\n",
        "First-year ROI".dimmed(),
        MetricFormat::percent().render(totals.roi_percent).bold()
    ));
    out.push_str(&format!(
        "  {:<18} {}\n",
        "Payback period".dimmed(),
        MetricFormat::suffixed(" mo", 1)
            .render(totals.payback_months)
            .bold()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_selection_totals() {
        let calc = RoiCalculator::new();
        let totals = calc.totals();

        assert_eq!(totals.annual_savings, 1_500_000);
        assert_eq!(totals.hours_automated, 32_852);
        assert!((totals.fte_capacity - 15.73).abs() < 1e-9);
        assert_eq!(totals.roi_percent, 293.0);
        assert_eq!(totals.payback_months, 4.1);
    }

    #[test]
    fn test_exclude_recomputes_subset_sums() {
        let mut calc = RoiCalculator::new();
        assert!(calc.exclude("support-deflection"));

        let totals = calc.totals();
        assert_eq!(totals.annual_savings, 1_220_000);
        assert_eq!(totals.hours_automated, 25_572);
        assert!((totals.fte_capacity - 12.23).abs() < 1e-9);
        // Rate figures are unaffected by the selection.
        assert_eq!(totals.roi_percent, 293.0);
    }

    #[test]
    fn test_include_restores_full_totals() {
        let mut calc = RoiCalculator::new();
        calc.exclude("data-insights");
        calc.exclude("casting-matching");
        assert!(calc.include("data-insights"));
        assert!(calc.include("casting-matching"));

        assert_eq!(calc.totals().annual_savings, 1_500_000);
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut calc = RoiCalculator::new();
        assert!(calc.toggle("lead-qualification"));
        assert!(!calc.is_enabled("lead-qualification"));
        assert!(calc.toggle("lead-qualification"));
        assert!(calc.is_enabled("lead-qualification"));
    }

    #[test]
    fn test_unknown_id_is_rejected_and_harmless() {
        let mut calc = RoiCalculator::new();
        assert!(!calc.exclude("flying-cars"));
        assert!(!calc.include("flying-cars"));
        assert_eq!(calc.totals().annual_savings, 1_500_000);
    }

    #[test]
    fn test_totals_feed_metrics_types() {
        let mut calc = RoiCalculator::new();
        calc.exclude("content-generation");
        let totals = calc.totals();

        let snapshot = totals.snapshot();
        assert_eq!(snapshot.annual_savings, 1_320_000.0);
        assert_eq!(snapshot.roi_percent, 293.0);

        let key = totals.key_metrics();
        assert_eq!(key.annual_savings, 1_320_000.0);
        // Investment keeps the headline figure.
        assert_eq!(key.investment, 405_500.0);
    }

    #[test]
    fn test_render_marks_selection() {
        colored::control::set_override(false);
        let mut calc = RoiCalculator::new();
        calc.exclude("test-automation");

        let table = render_roi(&calc);
        assert!(table.contains("[ ] AI Test Generation"));
        assert!(table.contains("[x] High-Value Job Agent"));
        assert!(table.contains("$1,260,000"));
    }
}
