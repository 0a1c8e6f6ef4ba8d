//! Showcase Scripts
//!
//! Load and save showcase definitions as YAML, so a custom scripted
//! sequence can be replayed with the same player as the built-ins.
//!
//! # Example Script
//!
//! ```yaml
//! id: onboarding
//! name: Customer Onboarding
//! interval_ms: 2000
//! steps:
//!   - id: signup
//!     title: Account Created
//!     description: Customer signs up
//!     output: Account provisioned
//!   - id: welcome
//!     title: Welcome Email
//!     description: Sequence kicks off
//! ```

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::{Error, Result};

use super::model::Showcase;

/// A single problem found while validating a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptIssue {
    EmptyShowcaseId,
    EmptyName(String),
    NoSteps(String),
    ZeroInterval(String),
    EmptyStepId(usize),
    EmptyStepTitle(String),
    DuplicateStepId(String),
}

impl fmt::Display for ScriptIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyShowcaseId => write!(f, "showcase has an empty id"),
            Self::EmptyName(id) => write!(f, "showcase '{}' has an empty name", id),
            Self::NoSteps(id) => write!(f, "showcase '{}' has no steps", id),
            Self::ZeroInterval(id) => {
                write!(f, "showcase '{}' has a zero tick interval", id)
            }
            Self::EmptyStepId(index) => {
                write!(f, "step at position {} has an empty id", index)
            }
            Self::EmptyStepTitle(id) => write!(f, "step '{}' has an empty title", id),
            Self::DuplicateStepId(id) => write!(f, "duplicate step id: '{}'", id),
        }
    }
}

/// Validates a showcase definition, returning every problem found.
pub fn validate(showcase: &Showcase) -> Vec<ScriptIssue> {
    let mut issues = Vec::new();

    if showcase.id.trim().is_empty() {
        issues.push(ScriptIssue::EmptyShowcaseId);
    }
    if showcase.name.trim().is_empty() {
        issues.push(ScriptIssue::EmptyName(showcase.id.clone()));
    }
    if showcase.steps.is_empty() {
        issues.push(ScriptIssue::NoSteps(showcase.id.clone()));
    }
    if showcase.interval_ms == 0 {
        issues.push(ScriptIssue::ZeroInterval(showcase.id.clone()));
    }

    let mut seen = HashSet::new();
    for (index, step) in showcase.steps.iter().enumerate() {
        if step.id.trim().is_empty() {
            issues.push(ScriptIssue::EmptyStepId(index));
            continue;
        }
        if step.title.trim().is_empty() {
            issues.push(ScriptIssue::EmptyStepTitle(step.id.clone()));
        }
        if !seen.insert(step.id.clone()) {
            issues.push(ScriptIssue::DuplicateStepId(step.id.clone()));
        }
    }

    issues
}

/// Loads and validates a showcase script from a YAML file.
pub fn load_showcase(path: impl AsRef<Path>) -> Result<Showcase> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let showcase: Showcase = serde_yaml::from_str(&content)?;

    let issues = validate(&showcase);
    if !issues.is_empty() {
        for issue in &issues {
            warn!("{}: {}", path.display(), issue);
        }
        let joined = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(Error::InvalidScript(joined));
    }

    info!(
        "Loaded showcase '{}' ({} steps) from {}",
        showcase.id,
        showcase.len(),
        path.display()
    );
    Ok(showcase)
}

/// Writes a showcase definition to a YAML file.
pub fn save_showcase(showcase: &Showcase, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let yaml = serde_yaml::to_string(showcase)?;
    fs::write(path, yaml)?;
    info!("Exported showcase '{}' to {}", showcase.id, path.display());
    Ok(())
}
