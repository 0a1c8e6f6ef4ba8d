//! Built-in Showcases
//!
//! The five scripted agent demonstrations, built once on first access.
//! Each showcase carries its ordered step list, headline stat cards
//! and a closing real-world example; the player module animates them.
//!
//! Agents without a dedicated showcase can still be played: any agent
//! carrying a scripted workflow summary gets a showcase derived from
//! it on the fly, on a faster 2 s cadence.

use once_cell::sync::Lazy;

use crate::catalog::agents::{self, Agent};
use crate::player::{ExampleResult, Fact, Icon, Showcase, ShowcaseStep, StatCard};
use crate::report::MetricFormat;

/// Tick interval for showcases derived from agent workflow summaries.
const AGENT_WORKFLOW_INTERVAL_MS: u64 = 2000;

/// All built-in showcases, in display order.
pub static SHOWCASES: Lazy<Vec<Showcase>> = Lazy::new(|| {
    vec![
        high_value_job(),
        lead_qualification(),
        test_generation(),
        support_deflection(),
        spotlight_compliance(),
    ]
});

/// Looks up a built-in showcase by id.
pub fn find(id: &str) -> Option<&'static Showcase> {
    SHOWCASES.iter().find(|s| s.id == id)
}

/// Ids of every built-in showcase, in display order.
pub fn ids() -> Vec<&'static str> {
    SHOWCASES.iter().map(|s| s.id.as_str()).collect()
}

/// Builds a playable showcase from an agent's workflow summary.
///
/// Returns `None` for agents without one. The derived showcase plays
/// the summary's steps with the agent's impact figures as stat cards.
pub fn from_agent(agent: &Agent) -> Option<Showcase> {
    let workflow = agent.workflow?;
    let steps = workflow
        .iter()
        .enumerate()
        .map(|(index, label)| ShowcaseStep::new(format!("step-{}", index + 1), *label, ""))
        .collect();

    Some(
        Showcase::new(agent.id, agent.name, steps)
            .with_interval_ms(AGENT_WORKFLOW_INTERVAL_MS)
            .with_tagline(agent.description)
            .with_stat_cards(vec![
                StatCard::new("Time impact", agent.impact.time_saved, ""),
                StatCard::new(
                    "Annual savings",
                    MetricFormat::dollars().render(agent.impact.cost_saved as f64),
                    "per year",
                ),
                StatCard::new("Efficiency gain", agent.impact.efficiency, ""),
            ]),
    )
}

/// Resolves any playable id: a built-in showcase, an agent with a
/// dedicated showcase, or an agent with a workflow summary.
pub fn resolve(id: &str) -> Option<Showcase> {
    if let Some(showcase) = find(id) {
        return Some(showcase.clone());
    }

    let agent = agents::find_agent(id)?;
    if let Some(dedicated) = agent.showcase.and_then(find) {
        return Some(dedicated.clone());
    }
    from_agent(agent)
}

fn high_value_job() -> Showcase {
    Showcase::new(
        "high-value-job",
        "High-Value Job Agent",
        vec![
            ShowcaseStep::new(
                "trigger",
                "Scheduled Scan",
                "Agent activates at 8AM and 2PM daily",
            )
            .at("8:00 AM")
            .icon(Icon::Clock)
            .with_details(&[
                "Cron trigger fires",
                "Agent wakes and authenticates",
                "Scan window: last 12 hours",
            ])
            .with_output("187 new jobs retrieved"),
            ShowcaseStep::new(
                "data-pull",
                "Data Collection",
                "Pulls new casting calls from Casting Networks",
            )
            .at("8:01 AM")
            .icon(Icon::Database)
            .with_details(&[
                "Query production database",
                "Filter by posting date",
                "Extract job metadata",
            ])
            .with_output("187 jobs collected"),
            ShowcaseStep::new(
                "analysis",
                "Brand Analysis",
                "AI identifies high-value brands and opportunities",
            )
            .at("8:03 AM")
            .icon(Icon::Brain)
            .with_details(&[
                "Brand recognition: Toyota, Amazon, MAX",
                "Compensation threshold: $10K+",
                "Union status verification",
            ])
            .with_output("3 high-value jobs identified"),
            ShowcaseStep::new(
                "creative",
                "Creative Generation",
                "Generates promotional materials via Canva API",
            )
            .at("8:05 AM")
            .icon(Icon::Palette)
            .with_details(&[
                "Template selection by brand",
                "Copy generation",
                "Asset export for each channel",
            ])
            .with_output("12 creatives generated"),
            ShowcaseStep::new(
                "distribution",
                "Multi-Channel Distribution",
                "Publishes to social and paid channels",
            )
            .at("8:08 AM")
            .icon(Icon::Send)
            .with_details(&[
                "Instagram, Facebook, TikTok",
                "Paid campaign activation",
                "Email segment targeting",
            ])
            .with_output("Live on 5 channels"),
            ShowcaseStep::new(
                "tracking",
                "Performance Tracking",
                "Monitors engagement and submission metrics",
            )
            .at("Ongoing")
            .icon(Icon::Chart)
            .with_details(&[
                "Click-through rates",
                "Submission velocity",
                "Conversion attribution",
            ])
            .with_output("Submissions: 0 → 847 in 4 hours"),
        ],
    )
    .with_tagline("From posting to promotion in minutes, not days")
    .with_stat_cards(vec![
        StatCard::new("Promotion lag", "5 days → instant", "10x faster"),
        StatCard::new("Annual savings", "$156,000", "marketing hours"),
        StatCard::new("Channels", "5", "automated"),
    ])
    .with_example(ExampleResult {
        heading: "Real Example: Toyota Commercial".to_string(),
        facts: vec![
            Fact::new("Job value", "$125,000"),
            Fact::new("Detected", "8:00 AM scan"),
            Fact::new("Promoted", "8:08 AM, all channels"),
            Fact::new("Submissions", "0 → 847 in 4 hours"),
        ],
        note: Some("Previously this promotion would have launched 5 days later".to_string()),
    })
}

fn lead_qualification() -> Showcase {
    Showcase::new(
        "lead-qualification",
        "Lead Qualification Agent",
        vec![
            ShowcaseStep::new(
                "receive",
                "Lead Received",
                "New lead arrives from India sales team",
            )
            .at("0:00")
            .icon(Icon::Users)
            .with_details(&[
                "Lead form submission",
                "Initial data capture",
                "Queue assignment",
            ])
            .with_output("Lead queued for verification"),
            ShowcaseStep::new(
                "clearbit",
                "Identity Enrichment",
                "Verifies company identity via Clearbit",
            )
            .at("0:15")
            .icon(Icon::Database)
            .with_details(&[
                "Company domain lookup",
                "Employee count and revenue",
                "Industry classification",
            ])
            .with_output("Company profile enriched"),
            ShowcaseStep::new(
                "verification",
                "Industry Verification",
                "Cross-checks entertainment industry databases",
            )
            .at("0:45")
            .icon(Icon::Shield)
            .with_details(&[
                "IMDb production credits",
                "Union affiliations",
                "Prior platform activity",
            ])
            .with_output("Industry presence confirmed"),
            ShowcaseStep::new(
                "scoring",
                "Lead Scoring",
                "Scores lead against conversion patterns",
            )
            .at("1:30")
            .icon(Icon::Target)
            .with_details(&[
                "Historical pattern matching",
                "Budget signal analysis",
                "Fit score calculation",
            ])
            .with_output("Score: 87/100, high intent"),
            ShowcaseStep::new(
                "routing",
                "Smart Routing",
                "Routes to the best-fit sales rep",
            )
            .at("2:00")
            .icon(Icon::Send)
            .with_details(&[
                "Territory matching",
                "Rep specialization",
                "Load balancing",
            ])
            .with_output("Assigned to enterprise team"),
            ShowcaseStep::new(
                "hubspot",
                "CRM Sync",
                "Writes the full qualification record to HubSpot",
            )
            .at("2:30")
            .icon(Icon::FileText)
            .with_details(&[
                "Contact record creation",
                "Qualification notes attached",
                "Follow-up task scheduled",
            ])
            .with_output("HubSpot record complete"),
        ],
    )
    .with_tagline("15 minutes of manual verification, done in 3")
    .with_stat_cards(vec![
        StatCard::new("Per-lead time", "15 min → 3 min", "5x faster"),
        StatCard::new("Annual savings", "$195,000", "sales capacity"),
        StatCard::new("Conversion rate", "23% → 68%", "qualified leads"),
    ])
    .with_example(ExampleResult {
        heading: "Real Example: ABC Productions".to_string(),
        facts: vec![
            Fact::new("Account value", "$125,000/year"),
            Fact::new("Qualification time", "2 min 30 sec"),
            Fact::new("Conversion rate", "23% → 68%"),
        ],
        note: Some("The India team now handles 3x the lead volume".to_string()),
    })
}

fn test_generation() -> Showcase {
    Showcase::new(
        "test-generation",
        "AI Test Case Generator",
        vec![
            ShowcaseStep::new(
                "requirement",
                "Requirement Intake",
                "Reads the JIRA ticket and PRD",
            )
            .at("0:00")
            .icon(Icon::FileText)
            .with_details(&[
                "Ticket: User Authentication Flow",
                "Acceptance criteria parsed",
                "Linked PRD sections loaded",
            ])
            .with_output("Requirements extracted"),
            ShowcaseStep::new(
                "analysis",
                "Coverage Analysis",
                "Maps requirements to test scenarios",
            )
            .at("0:30")
            .icon(Icon::Brain)
            .with_details(&[
                "Happy paths enumerated",
                "Edge cases derived",
                "Negative cases added",
            ])
            .with_output("84 test scenarios identified"),
            ShowcaseStep::new(
                "generation",
                "Test Case Generation",
                "Writes structured test cases for every scenario",
            )
            .at("1:00")
            .icon(Icon::Bot)
            .with_details(&[
                "Preconditions and fixtures",
                "Step-by-step actions",
                "Expected results",
            ])
            .with_output("84 test cases written"),
            ShowcaseStep::new(
                "playwright",
                "Playwright Code",
                "Converts cases to executable Playwright specs",
            )
            .at("2:00")
            .icon(Icon::FileText)
            .with_details(&[
                "Selector strategy applied",
                "Assertions generated",
                "Fixtures wired up",
            ])
            .with_output("84 specs compiled"),
            ShowcaseStep::new(
                "execution",
                "Parallel Execution",
                "Runs the suite across parallel workers",
            )
            .at("2:30")
            .icon(Icon::Clock)
            .with_details(&[
                "8 parallel workers",
                "Cross-browser matrix",
                "Flake retry policy",
            ])
            .with_output("84 tests in 75 seconds"),
            ShowcaseStep::new(
                "report",
                "Coverage Report",
                "Publishes results and coverage back to the ticket",
            )
            .at("3:00")
            .icon(Icon::Chart)
            .with_details(&[
                "Pass/fail summary",
                "Coverage breakdown",
                "JIRA ticket updated",
            ])
            .with_output("98% code, 100% critical paths"),
        ],
    )
    .with_tagline("From requirement to executed test suite in hours")
    .with_stat_cards(vec![
        StatCard::new("Cycle time", "3-5 days → 3 hours", "per feature"),
        StatCard::new("Annual savings", "$180,000", "QA capacity"),
        StatCard::new("Automation", "100%", "of regression suite"),
    ])
    .with_example(ExampleResult {
        heading: "Real Example: User Authentication Flow".to_string(),
        facts: vec![
            Fact::new("Tests generated", "84"),
            Fact::new("Execution time", "75 seconds"),
            Fact::new("Coverage", "98% code, 100% critical paths"),
        ],
        note: None,
    })
}

fn support_deflection() -> Showcase {
    Showcase::new(
        "support-deflection",
        "Tier 1 Support Agent",
        vec![
            ShowcaseStep::new(
                "ticket",
                "Ticket Received",
                "Customer inquiry arrives, any hour of the day",
            )
            .at("0:00")
            .icon(Icon::Message)
            .with_details(&[
                "Channel: chat, email, or form",
                "Language detection",
                "Customer context loaded",
            ])
            .with_output("Ticket ingested"),
            ShowcaseStep::new(
                "classification",
                "Issue Classification",
                "Identifies the issue type and urgency",
            )
            .at("0:02")
            .icon(Icon::Brain)
            .with_details(&[
                "Intent: password reset",
                "Urgency: routine",
                "Deflection candidate: yes",
            ])
            .with_output("Classified: account access"),
            ShowcaseStep::new(
                "knowledge",
                "Knowledge Retrieval",
                "Pulls the matching resolution from the knowledge base",
            )
            .at("0:05")
            .icon(Icon::Database)
            .with_details(&[
                "Article relevance ranking",
                "Account-state awareness",
                "Platform-specific steps",
            ])
            .with_output("Resolution article matched"),
            ShowcaseStep::new(
                "solution",
                "Solution Assembly",
                "Composes a personalized resolution",
            )
            .at("0:08")
            .icon(Icon::Bot)
            .with_details(&[
                "Steps tailored to the account",
                "Screenshots attached",
                "Tone matched to channel",
            ])
            .with_output("Response drafted"),
            ShowcaseStep::new(
                "delivery",
                "Instant Delivery",
                "Sends the resolution back on the original channel",
            )
            .at("0:12")
            .icon(Icon::Send)
            .with_details(&[
                "Same-channel reply",
                "Self-service link included",
                "Escalation path offered",
            ])
            .with_output("Delivered in 15 seconds"),
            ShowcaseStep::new(
                "resolution",
                "Resolution Confirmed",
                "Confirms the fix or escalates to a human",
            )
            .at("0:15")
            .icon(Icon::Check)
            .with_details(&[
                "Customer confirmation",
                "Satisfaction survey",
                "Ticket closed or escalated",
            ])
            .with_output("Resolved, no human needed"),
        ],
    )
    .with_tagline("70% of tickets never reach a human")
    .with_stat_cards(vec![
        StatCard::new("Deflected", "14,560/month", "tickets"),
        StatCard::new("Resolution time", "15 seconds", "average"),
        StatCard::new("Satisfaction", "4.7/5.0", "CSAT"),
        StatCard::new("Cost per ticket", "$0.02 vs $15", "750x cheaper"),
        StatCard::new("Availability", "24/7/365", "every timezone"),
    ])
    .with_example(ExampleResult {
        heading: "Every Month, At Scale".to_string(),
        facts: vec![
            Fact::new("Tickets deflected", "14,560/month"),
            Fact::new("Avg resolution", "15 seconds"),
            Fact::new("Annual savings", "$280,000"),
        ],
        note: Some("Human agents now focus entirely on complex cases".to_string()),
    })
}

fn spotlight_compliance() -> Showcase {
    Showcase::new(
        "spotlight-compliance",
        "Spotlight Compliance Agent",
        vec![
            ShowcaseStep::new(
                "submission",
                "Application Submitted",
                "Performer submits a Spotlight membership application",
            )
            .at("0:00")
            .icon(Icon::FileText)
            .with_details(&[
                "Profile details captured",
                "Photos uploaded",
                "Credits listed",
            ])
            .with_output("Application received"),
            ShowcaseStep::new(
                "photo-scan",
                "Photo Compliance Scan",
                "Checks headshots against Spotlight standards",
            )
            .at("0:02")
            .icon(Icon::Camera)
            .with_details(&[
                "Resolution and framing",
                "No filters or heavy edits",
                "Professional standard check",
            ])
            .with_output("Photos pass compliance"),
            ShowcaseStep::new(
                "credit-verify",
                "Credit Verification",
                "Verifies professional credits against industry sources",
            )
            .at("0:04")
            .icon(Icon::Shield)
            .with_details(&[
                "Production database lookup",
                "Credit role confirmation",
                "Eligibility threshold check",
            ])
            .with_output("8 verified credits"),
            ShowcaseStep::new(
                "tech-validation",
                "Technical Validation",
                "Validates media formats and profile completeness",
            )
            .at("0:06")
            .icon(Icon::Check)
            .with_details(&[
                "Media format checks",
                "Required fields complete",
                "Duplicate profile scan",
            ])
            .with_output("Profile technically valid"),
            ShowcaseStep::new(
                "feedback",
                "Instant Feedback",
                "Tells the applicant exactly what passed or needs fixing",
            )
            .at("0:08")
            .icon(Icon::Message)
            .with_details(&[
                "Itemized check results",
                "Fix-it guidance where needed",
                "No waiting on a queue",
            ])
            .with_output("Feedback delivered"),
            ShowcaseStep::new(
                "approval",
                "Approval Issued",
                "Membership approved and profile goes live",
            )
            .at("0:10")
            .icon(Icon::Check)
            .with_details(&[
                "Approval recorded",
                "Profile published",
                "Welcome sequence triggered",
            ])
            .with_output("Approved in 10 seconds"),
        ],
    )
    .with_interval_ms(2000)
    .with_tagline("A week of manual review, done in ten seconds")
    .with_stat_cards(vec![
        StatCard::new("Approval time", "1 week → 10 seconds", "per application"),
        StatCard::new("Annual savings", "$48,000", "review hours"),
        StatCard::new("Manual checking", "-90%", "reduction"),
    ])
    .with_example(ExampleResult {
        heading: "Real Example: Sarah Mitchell".to_string(),
        facts: vec![
            Fact::new("Verified credits", "8"),
            Fact::new("Approval time", "1 week → 10 seconds"),
        ],
        note: Some("Applicants get an answer before they close the tab".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::script::validate;

    #[test]
    fn test_five_builtin_showcases() {
        assert_eq!(SHOWCASES.len(), 5);
        assert_eq!(
            ids(),
            vec![
                "high-value-job",
                "lead-qualification",
                "test-generation",
                "support-deflection",
                "spotlight-compliance",
            ]
        );
    }

    #[test]
    fn test_every_builtin_has_six_steps() {
        for showcase in SHOWCASES.iter() {
            assert_eq!(showcase.len(), 6, "showcase '{}'", showcase.id);
        }
    }

    #[test]
    fn test_every_builtin_validates_clean() {
        for showcase in SHOWCASES.iter() {
            let issues = validate(showcase);
            assert!(issues.is_empty(), "showcase '{}': {:?}", showcase.id, issues);
        }
    }

    #[test]
    fn test_intervals() {
        for showcase in SHOWCASES.iter() {
            let expected = if showcase.id == "spotlight-compliance" {
                2000
            } else {
                2500
            };
            assert_eq!(showcase.interval_ms, expected, "showcase '{}'", showcase.id);
        }
    }

    #[test]
    fn test_find_hit_and_miss() {
        assert!(find("high-value-job").is_some());
        assert!(find("no-such-showcase").is_none());
    }

    #[test]
    fn test_every_builtin_has_example_and_cards() {
        for showcase in SHOWCASES.iter() {
            assert!(showcase.example.is_some(), "showcase '{}'", showcase.id);
            assert!(!showcase.stat_cards.is_empty(), "showcase '{}'", showcase.id);
        }
    }

    #[test]
    fn test_from_agent_derives_playable_showcase() {
        let agent = agents::find_agent("snowflake-cortex").unwrap();
        let showcase = from_agent(agent).unwrap();

        assert_eq!(showcase.id, "snowflake-cortex");
        assert_eq!(showcase.len(), 5);
        assert_eq!(showcase.interval_ms, 2000);
        assert_eq!(showcase.steps[0].title, "Receive natural language query");
        assert!(validate(&showcase).is_empty());

        let savings: Vec<&str> = showcase
            .stat_cards
            .iter()
            .map(|c| c.value.as_str())
            .collect();
        assert!(savings.contains(&"$250,000"));
    }

    #[test]
    fn test_from_agent_none_without_workflow() {
        let agent = agents::find_agent("executive-dashboard").unwrap();
        assert!(from_agent(agent).is_none());
    }

    #[test]
    fn test_resolve_builtin_id() {
        let showcase = resolve("high-value-job").unwrap();
        assert_eq!(showcase.id, "high-value-job");
    }

    #[test]
    fn test_resolve_agent_with_dedicated_showcase() {
        // The agent id maps to its full showcase, not a derived one.
        let showcase = resolve("high-value-job-agent").unwrap();
        assert_eq!(showcase.id, "high-value-job");
        assert!(showcase.example.is_some());
    }

    #[test]
    fn test_resolve_agent_workflow_fallback() {
        let showcase = resolve("lead-qualification").unwrap();
        // Built-in id wins over the agent record sharing the same id.
        assert_eq!(showcase.len(), 6);

        let derived = resolve("snowflake-cortex").unwrap();
        assert_eq!(derived.len(), 5);
        assert_eq!(derived.interval_ms, 2000);
    }

    #[test]
    fn test_resolve_miss() {
        assert!(resolve("no-such-id").is_none());
        // Agents with neither showcase nor workflow are not playable.
        assert!(resolve("aeo-geo-agent").is_none());
    }
}
