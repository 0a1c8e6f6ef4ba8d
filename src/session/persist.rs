//! First-Visit Marker
//!
//! A small JSON marker under the user's home directory records whether
//! the welcome panel has been dismissed, so it only shows on the first
//! run. Missing or unreadable markers are treated as "never seen" and
//! the file is simply rewritten on dismiss.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Directory (under the base dir) holding app state.
const STATE_DIR: &str = ".showreel";

/// Marker file name.
const MARKER_FILE: &str = "intro.json";

/// Persisted record of the welcome panel dismissal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntroMarker {
    /// True once the user has dismissed the welcome panel
    pub dismissed: bool,

    /// When the dismissal happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissed_at: Option<DateTime<Utc>>,
}

impl IntroMarker {
    /// Path of the marker file under `base`.
    pub fn path_under(base: impl AsRef<Path>) -> PathBuf {
        base.as_ref().join(STATE_DIR).join(MARKER_FILE)
    }

    /// Default base directory: the user's home, falling back to the
    /// current directory when HOME is unset.
    pub fn default_base() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Loads the marker from under `base`.
    ///
    /// A missing file means a first visit. A corrupt file is logged
    /// and treated the same way rather than failing the run.
    pub fn load_from(base: impl AsRef<Path>) -> Self {
        let path = Self::path_under(base);
        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(marker) => {
                    debug!("loaded intro marker from {}", path.display());
                    marker
                }
                Err(e) => {
                    warn!("ignoring corrupt intro marker {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Loads the marker from the default base directory.
    pub fn load() -> Self {
        Self::load_from(Self::default_base())
    }

    /// True if the welcome panel has already been dismissed.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Records the dismissal and writes the marker under `base`.
    pub fn dismiss_under(&mut self, base: impl AsRef<Path>) -> Result<()> {
        self.dismissed = true;
        self.dismissed_at = Some(Utc::now());

        let path = Self::path_under(base);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        debug!("wrote intro marker to {}", path.display());
        Ok(())
    }

    /// Records the dismissal under the default base directory.
    pub fn dismiss(&mut self) -> Result<()> {
        self.dismiss_under(Self::default_base())
    }
}
