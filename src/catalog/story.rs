//! Annual Report Narrative
//!
//! The fixed prose of the one-year retrospective: hero stats, the four
//! quarterly chapters, department impact figures and the closing lines.

/// Kicker line above the report title.
pub const KICKER: &str = "October 2026 • One Year Later";

/// Report title.
pub const TITLE: &str = "The Year Everything Changed";

/// Opening paragraph under the title.
pub const LEDE: &str = "Twelve months ago, we made a bet: that AI agents could \
transform how the entertainment industry's infrastructure runs. This is what \
happened.";

/// A headline figure shown in the hero band.
#[derive(Debug, Clone, Copy)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// The four hero-band figures.
pub const HERO_STATS: &[HeroStat] = &[
    HeroStat {
        value: "$1.73M",
        label: "Annual value delivered (+17% vs target)",
    },
    HeroStat {
        value: "342%",
        label: "First-year ROI",
    },
    HeroStat {
        value: "16.28",
        label: "FTE capacity unlocked",
    },
    HeroStat {
        value: "17",
        label: "Agents in production",
    },
];

/// One quarterly chapter of the story.
#[derive(Debug, Clone, Copy)]
pub struct Chapter {
    pub quarter: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// The four chapters, in chronological order.
pub const CHAPTERS: &[Chapter] = &[
    Chapter {
        quarter: "Q4 2025",
        title: "The Foundation",
        body: "It started with a simple truth: our data was trapped. Seven \
platforms, millions of profiles, and every question took weeks to answer. \
The first quarter went to plumbing: Snowflake Cortex went live, and for the \
first time anyone could ask a question in plain English and get an answer \
in seconds.",
    },
    Chapter {
        quarter: "Q1 2026",
        title: "The Quick Wins",
        body: "With data flowing freely, the first agents went live. The \
High-Value Job Agent cut promotion lag from five days to minutes. Lead \
qualification dropped from fifteen minutes to three. Each win funded the \
next one.",
    },
    Chapter {
        quarter: "Q2 2026",
        title: "The Scale",
        body: "Success breeds ambition. Tier 1 support deflection crossed \
70%. Test generation turned a week of QA into three hours. By summer, \
every department had at least one agent in production.",
    },
    Chapter {
        quarter: "Q3 2026",
        title: "The Excellence",
        body: "The India sales team now handles 3x volume. AI \
recommendations serve 2M+ profiles daily. Customer NPS jumped 31 points. \
The question stopped being whether agents work and became what to automate \
next.",
    },
];

/// A department's claimed annual impact in the report.
#[derive(Debug, Clone, Copy)]
pub struct DepartmentImpact {
    pub name: &'static str,
    pub savings: u64,
    pub highlight: &'static str,
}

/// Department impact figures, largest first.
pub const DEPARTMENT_IMPACTS: &[DepartmentImpact] = &[
    DepartmentImpact {
        name: "Engineering",
        savings: 486_000,
        highlight: "Daily releases, 80% generated code",
    },
    DepartmentImpact {
        name: "Customer Support",
        savings: 412_000,
        highlight: "70% deflection, 24/7 coverage",
    },
    DepartmentImpact {
        name: "Sales & Success",
        savings: 345_000,
        highlight: "3x lead volume, same headcount",
    },
    DepartmentImpact {
        name: "Marketing",
        savings: 280_000,
        highlight: "Real-time campaign automation",
    },
];

/// Closing lines, in display order.
pub const CLOSING: &[&str] = &[
    "We didn't just meet our goals.",
    "We exceeded them by 17%",
    "And this is just the beginning.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_chapters_in_order() {
        assert_eq!(CHAPTERS.len(), 4);
        assert_eq!(CHAPTERS[0].quarter, "Q4 2025");
        assert_eq!(CHAPTERS[3].quarter, "Q3 2026");
    }

    #[test]
    fn test_hero_stats() {
        assert_eq!(HERO_STATS.len(), 4);
        assert_eq!(HERO_STATS[0].value, "$1.73M");
    }

    #[test]
    fn test_department_impacts_sorted_descending() {
        let savings: Vec<u64> = DEPARTMENT_IMPACTS.iter().map(|d| d.savings).collect();
        let mut sorted = savings.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(savings, sorted);
    }
}
