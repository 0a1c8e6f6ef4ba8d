//! Share Module
//!
//! Sharing the report: a fixed payload copied to the system clipboard,
//! falling back to printing the link when no clipboard tool is
//! available. The downloadable ROI report is announced but not built
//! yet, and says so honestly.

pub mod clipboard;

use log::info;

use crate::error::{Error, Result};

/// The fixed share payload.
#[derive(Debug, Clone, Copy)]
pub struct SharePayload {
    pub title: &'static str,
    pub text: &'static str,
    pub url: &'static str,
}

/// What `share_link` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Link copied to the system clipboard
    Copied,
    /// No clipboard tool available; link printed for manual copy
    Printed,
}

/// The report's share payload.
pub const PAYLOAD: SharePayload = SharePayload {
    title: "Talent Systems AI Transformation",
    text: "Discover how AI is revolutionizing the entertainment industry infrastructure",
    url: "https://showreel.talentsystems.example/report",
};

/// Formats the payload as a single shareable blob.
pub fn format_payload(payload: &SharePayload) -> String {
    format!("{}\n{}\n{}", payload.title, payload.text, payload.url)
}

/// Shares the report link.
///
/// Tries the clipboard first; a missing clipboard is an expected
/// environment, not an error, so the link is printed instead and the
/// outcome reported to the caller.
pub fn share_link() -> Result<ShareOutcome> {
    let blob = format_payload(&PAYLOAD);
    match clipboard::copy(&blob) {
        Ok(()) => {
            info!("share link copied to clipboard");
            Ok(ShareOutcome::Copied)
        }
        Err(Error::ClipboardUnavailable) => {
            println!("{}", blob);
            Ok(ShareOutcome::Printed)
        }
        Err(e) => Err(e),
    }
}

/// Downloadable ROI report. Not built yet.
pub fn download_report() -> Result<()> {
    Err(Error::NotAvailable("ROI report download"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_format() {
        let blob = format_payload(&PAYLOAD);
        let lines: Vec<&str> = blob.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Talent Systems AI Transformation");
        assert!(lines[2].starts_with("https://"));
    }

    #[test]
    fn test_download_report_not_available() {
        let err = download_report().unwrap_err();
        assert!(matches!(err, Error::NotAvailable("ROI report download")));
        assert!(err.to_string().contains("ROI report download"));
    }
}
