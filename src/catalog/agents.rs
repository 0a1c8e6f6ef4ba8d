//! Agent Catalog
//!
//! The fixed records behind the dashboard and organization views:
//! 17 AI agents, 6 departments and 7 platform integrations. All of it
//! is read-only presentation data; the only computation downstream is
//! filter/reduce aggregation.

use serde::Serialize;

/// Rollout category of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    QuickWin,
    BigSwing,
}

/// Deployment status of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentStatus {
    Active,
    Planned,
    InDevelopment,
}

/// Claimed impact figures for an agent.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Impact {
    /// Headline time delta, e.g. "5-day lag → instant"
    pub time_saved: &'static str,
    /// Claimed annual savings in dollars
    pub cost_saved: u64,
    /// Efficiency one-liner
    pub efficiency: &'static str,
}

/// A single AI agent record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Agent {
    pub id: &'static str,
    pub name: &'static str,
    pub department: &'static str,
    pub kind: AgentKind,
    pub status: AgentStatus,
    pub description: &'static str,
    pub impact: Impact,
    /// Short scripted workflow summary, where one exists
    pub workflow: Option<&'static [&'static str]>,
    /// Id of the detailed showcase backing this agent, if any
    pub showcase: Option<&'static str>,
}

/// A department record with its before/after framing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Department {
    pub id: &'static str,
    pub name: &'static str,
    pub before_state: &'static str,
    pub after_state: &'static str,
    /// Ids of the agents belonging to this department
    pub agents: &'static [&'static str],
}

/// A platform integration record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlatformIntegration {
    pub id: &'static str,
    pub name: &'static str,
    pub users: &'static str,
    pub scale: &'static str,
}

/// All 17 AI agents from the transformation initiative.
pub const AGENTS: &[Agent] = &[
    // Data & Analytics
    Agent {
        id: "snowflake-cortex",
        name: "Snowflake Cortex AI",
        department: "Data",
        kind: AgentKind::BigSwing,
        status: AgentStatus::Active,
        description: "Natural language querying across 7 platform databases",
        impact: Impact {
            time_saved: "1-3 weeks → instant",
            cost_saved: 250_000,
            efficiency: "100x faster data insights",
        },
        workflow: Some(&[
            "Receive natural language query",
            "Parse intent and entities",
            "Query across 7 platforms",
            "Generate insights",
            "Return visualization",
        ]),
        showcase: None,
    },
    Agent {
        id: "executive-dashboard",
        name: "AI Executive Dashboard",
        department: "Data",
        kind: AgentKind::BigSwing,
        status: AgentStatus::Active,
        description: "Autonomous data analysis with predictive insights",
        impact: Impact {
            time_saved: "20+ hrs/week",
            cost_saved: 180_000,
            efficiency: "Real-time decision making",
        },
        workflow: None,
        showcase: None,
    },
    // Marketing
    Agent {
        id: "high-value-job-agent",
        name: "High-Value Job Agent",
        department: "Marketing",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "Autonomously identifies and promotes premium casting calls",
        impact: Impact {
            time_saved: "5-day lag → instant",
            cost_saved: 156_000,
            efficiency: "10x promotion speed",
        },
        workflow: Some(&[
            "Scan new jobs at 8AM/2PM daily",
            "Identify brands (Toyota, Amazon, MAX)",
            "Generate creative via Canva API",
            "Distribute to social/paid channels",
            "Track performance metrics",
        ]),
        showcase: Some("high-value-job"),
    },
    Agent {
        id: "agentic-marketing-suite",
        name: "Agentic Marketing Suite",
        department: "Marketing",
        kind: AgentKind::BigSwing,
        status: AgentStatus::Active,
        description: "AI-powered content planning and campaign execution",
        impact: Impact {
            time_saved: "70% content creation time",
            cost_saved: 120_000,
            efficiency: "10x content velocity",
        },
        workflow: None,
        showcase: None,
    },
    Agent {
        id: "aeo-geo-agent",
        name: "AEO/GEO Strategy Agent",
        department: "Marketing",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "Optimizes content for AI search engines",
        impact: Impact {
            time_saved: "8 hrs/week",
            cost_saved: 45_000,
            efficiency: "New acquisition channel",
        },
        workflow: None,
        showcase: None,
    },
    // Sales & Customer Success
    Agent {
        id: "lead-qualification",
        name: "Lead Qualification Agent",
        department: "Sales",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "Automated lead verification and scoring",
        impact: Impact {
            time_saved: "15 min → 3 min per lead",
            cost_saved: 195_000,
            efficiency: "3x more leads processed",
        },
        workflow: Some(&[
            "Receive lead from India team",
            "Verify identity via Clearbit",
            "Check industry databases",
            "Score based on patterns",
            "Route to sales team",
        ]),
        showcase: Some("lead-qualification"),
    },
    Agent {
        id: "name-verification",
        name: "Stage Name Verification Agent",
        department: "Customer Success",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "Automated UK Spotlight name conflict resolution",
        impact: Impact {
            time_saved: "1 week → same day",
            cost_saved: 52_000,
            efficiency: "90% reduction in manual checking",
        },
        workflow: None,
        showcase: None,
    },
    Agent {
        id: "compliance-agent",
        name: "Compliance Checking Agent",
        department: "Customer Success",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "Automated photo and credit verification for Spotlight",
        impact: Impact {
            time_saved: "18 hrs/week",
            cost_saved: 48_000,
            efficiency: "Week → same day approval",
        },
        workflow: None,
        showcase: Some("spotlight-compliance"),
    },
    Agent {
        id: "hubspot-agent",
        name: "HubSpot Platform Data Agent",
        department: "Sales",
        kind: AgentKind::BigSwing,
        status: AgentStatus::Active,
        description: "Integrates platform usage data with CRM",
        impact: Impact {
            time_saved: "45 min → 5 min verification",
            cost_saved: 85_000,
            efficiency: "Predictive churn prevention",
        },
        workflow: None,
        showcase: None,
    },
    // Customer Support
    Agent {
        id: "tier1-support",
        name: "Tier 1 Support Agent",
        department: "Support",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "24/7 automated support for basic inquiries",
        impact: Impact {
            time_saved: "20 hrs/week",
            cost_saved: 280_000,
            efficiency: "70% ticket deflection",
        },
        workflow: Some(&[
            "Receive customer inquiry",
            "Identify issue type",
            "Access knowledge base",
            "Provide resolution",
            "Escalate if needed",
        ]),
        showcase: Some("support-deflection"),
    },
    Agent {
        id: "job-approval",
        name: "Job Approval Agent",
        department: "Support",
        kind: AgentKind::BigSwing,
        status: AgentStatus::Active,
        description: "Automated job posting verification and approval",
        impact: Impact {
            time_saved: "2-10 min → instant",
            cost_saved: 120_000,
            efficiency: "Most scalable process fixed",
        },
        workflow: None,
        showcase: None,
    },
    Agent {
        id: "cast-it-reach-forms",
        name: "Cast It Reach Forms Generator",
        department: "Support",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "Converts Word docs to EasyML forms automatically",
        impact: Impact {
            time_saved: "Days → hours per show",
            cost_saved: 65_000,
            efficiency: "200 shows/year automated",
        },
        workflow: None,
        showcase: None,
    },
    // Product & Development
    Agent {
        id: "ai-prd-templates",
        name: "AI PRD Assistant",
        department: "Product",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "Enhanced PRD templates with AI research",
        impact: Impact {
            time_saved: "3 hrs/sprint",
            cost_saved: 45_000,
            efficiency: "Fewer edge cases missed",
        },
        workflow: None,
        showcase: None,
    },
    Agent {
        id: "ai-dev-copilot",
        name: "AI Development Copilot",
        department: "Engineering",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "AI pair programming for 2-3x velocity",
        impact: Impact {
            time_saved: "80% code generation",
            cost_saved: 240_000,
            efficiency: "2-4 weeks → daily releases",
        },
        workflow: None,
        showcase: None,
    },
    Agent {
        id: "test-generation",
        name: "AI Test Case Generator",
        department: "QA",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "Converts requirements to Playwright tests",
        impact: Impact {
            time_saved: "3-5 days → 3 hours",
            cost_saved: 180_000,
            efficiency: "100% test automation",
        },
        workflow: Some(&[
            "Read JIRA ticket/PRD",
            "Generate test cases",
            "Create Playwright code",
            "Execute in parallel",
            "Report results",
        ]),
        showcase: Some("test-generation"),
    },
    // HR/IT/Operations
    Agent {
        id: "employee-bot",
        name: "Employee HR/IT Bot",
        department: "HR/IT",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "24/7 Slack-integrated employee support",
        impact: Impact {
            time_saved: "8 hrs/week",
            cost_saved: 35_000,
            efficiency: "Level 0 support automated",
        },
        workflow: None,
        showcase: None,
    },
    Agent {
        id: "vendor-management",
        name: "Vendor Management Agent",
        department: "IT",
        kind: AgentKind::QuickWin,
        status: AgentStatus::Active,
        description: "Automated vendor tracking and renewal alerts",
        impact: Impact {
            time_saved: "10 hrs/week",
            cost_saved: 42_000,
            efficiency: "Predictive cost management",
        },
        workflow: None,
        showcase: None,
    },
];

/// Department groupings with their before/after framing.
pub const DEPARTMENTS: &[Department] = &[
    Department {
        id: "data",
        name: "Data & Analytics",
        before_state: "1-3 week data requests",
        after_state: "Instant insights via natural language",
        agents: &["snowflake-cortex", "executive-dashboard"],
    },
    Department {
        id: "marketing",
        name: "Marketing",
        before_state: "5-day promotion lag",
        after_state: "Real-time campaign automation",
        agents: &[
            "high-value-job-agent",
            "agentic-marketing-suite",
            "aeo-geo-agent",
        ],
    },
    Department {
        id: "sales",
        name: "Sales & Success",
        before_state: "15 min manual verification",
        after_state: "3 min AI qualification",
        agents: &[
            "lead-qualification",
            "name-verification",
            "compliance-agent",
            "hubspot-agent",
        ],
    },
    Department {
        id: "support",
        name: "Customer Support",
        before_state: "Manual ticket handling",
        after_state: "70% deflection, 24/7 service",
        agents: &["tier1-support", "job-approval", "cast-it-reach-forms"],
    },
    Department {
        id: "product",
        name: "Product & Engineering",
        before_state: "2-4 week releases",
        after_state: "Daily deployments",
        agents: &["ai-prd-templates", "ai-dev-copilot", "test-generation"],
    },
    Department {
        id: "operations",
        name: "HR/IT/Operations",
        before_state: "Manual admin tasks",
        after_state: "24/7 self-service",
        agents: &["employee-bot", "vendor-management"],
    },
];

/// Platform integrations across the ecosystem.
pub const PLATFORM_INTEGRATIONS: &[PlatformIntegration] = &[
    PlatformIntegration {
        id: "casting-networks",
        name: "Casting Networks",
        users: "1.3M+ performers",
        scale: "1M+ auditions/year",
    },
    PlatformIntegration {
        id: "spotlight",
        name: "Spotlight UK",
        users: "60K+ performers",
        scale: "UK industry standard",
    },
    PlatformIntegration {
        id: "cast-it",
        name: "Cast It Systems",
        users: "12K+ studios",
        scale: "Every major studio",
    },
    PlatformIntegration {
        id: "cast-it-reach",
        name: "Cast It Reach",
        users: "8M+ candidates",
        scale: "200+ reality shows",
    },
    PlatformIntegration {
        id: "staff-me-up",
        name: "Staff Me Up",
        users: "350K+ crew",
        scale: "3K+ companies",
    },
    PlatformIntegration {
        id: "casting-frontier",
        name: "Casting Frontier",
        users: "LA/NYC/Pacific NW",
        scale: "Regional leader",
    },
    PlatformIntegration {
        id: "tagmin",
        name: "Tagmin",
        users: "UK agents",
        scale: "Agent management",
    },
];

/// Looks up an agent by id.
pub fn find_agent(id: &str) -> Option<&'static Agent> {
    AGENTS.iter().find(|a| a.id == id)
}

/// Looks up a department by id.
pub fn find_department(id: &str) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|d| d.id == id)
}

/// Number of active agents.
pub fn active_agents() -> usize {
    AGENTS
        .iter()
        .filter(|a| a.status == AgentStatus::Active)
        .count()
}

/// Number of quick-win agents.
pub fn quick_wins() -> usize {
    AGENTS.iter().filter(|a| a.kind == AgentKind::QuickWin).count()
}

/// Number of big-swing agents.
pub fn big_swings() -> usize {
    AGENTS.iter().filter(|a| a.kind == AgentKind::BigSwing).count()
}

/// Agents belonging to a department record.
pub fn agents_in(department: &Department) -> Vec<&'static Agent> {
    department
        .agents
        .iter()
        .filter_map(|id| find_agent(id))
        .collect()
}

/// Sum of claimed annual savings across a department's agents.
pub fn department_savings(department: &Department) -> u64 {
    agents_in(department)
        .iter()
        .map(|a| a.impact.cost_saved)
        .sum()
}

/// Sum of claimed annual savings across every agent.
pub fn total_savings() -> u64 {
    AGENTS.iter().map(|a| a.impact.cost_saved).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_counts() {
        assert_eq!(AGENTS.len(), 17);
        assert_eq!(DEPARTMENTS.len(), 6);
        assert_eq!(PLATFORM_INTEGRATIONS.len(), 7);
    }

    #[test]
    fn test_all_agents_active() {
        assert_eq!(active_agents(), 17);
        assert_eq!(quick_wins() + big_swings(), 17);
    }

    #[test]
    fn test_agent_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for agent in AGENTS {
            assert!(seen.insert(agent.id), "duplicate agent id: {}", agent.id);
        }
    }

    #[test]
    fn test_department_agent_references_resolve() {
        for dept in DEPARTMENTS {
            for id in dept.agents {
                assert!(
                    find_agent(id).is_some(),
                    "department '{}' references unknown agent '{}'",
                    dept.id,
                    id
                );
            }
        }
    }

    #[test]
    fn test_every_agent_belongs_to_one_department() {
        for agent in AGENTS {
            let memberships = DEPARTMENTS
                .iter()
                .filter(|d| d.agents.contains(&agent.id))
                .count();
            assert_eq!(memberships, 1, "agent '{}' in {} departments", agent.id, memberships);
        }
    }

    #[test]
    fn test_department_savings_sums_members() {
        let marketing = find_department("marketing").unwrap();
        // 156K + 120K + 45K
        assert_eq!(department_savings(marketing), 321_000);
    }

    #[test]
    fn test_total_savings_matches_department_sum() {
        let by_department: u64 = DEPARTMENTS.iter().map(department_savings).sum();
        assert_eq!(by_department, total_savings());
    }

    #[test]
    fn test_find_agent_miss() {
        assert!(find_agent("nonexistent").is_none());
    }
}
