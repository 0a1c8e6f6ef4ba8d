//! Clipboard Access
//!
//! Copies text by piping it to the first available system clipboard
//! tool. No clipboard library dependency; the probe is the same
//! `which` check used for any external tool.

use std::io::Write;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Clipboard tools tried in order, with their arguments.
const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Checks whether a command exists on PATH.
fn command_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Copies text via the first working tool from `candidates`.
pub fn copy_with(candidates: &[(&str, &[&str])], text: &str) -> Result<()> {
    for (name, args) in candidates {
        if !command_exists(name) {
            continue;
        }

        let mut child = Command::new(name)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if status.success() {
            debug!("copied {} bytes via {}", text.len(), name);
            return Ok(());
        }
        debug!("{} exited with {}; trying next tool", name, status);
    }

    Err(Error::ClipboardUnavailable)
}

/// Copies text to the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    copy_with(CANDIDATES, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_candidates_is_unavailable() {
        let err = copy_with(&[], "hello").unwrap_err();
        assert!(matches!(err, Error::ClipboardUnavailable));
    }

    #[test]
    fn test_missing_tools_fall_through() {
        let candidates: &[(&str, &[&str])] =
            &[("definitely-not-a-real-tool-9f3a", &[])];
        let err = copy_with(candidates, "hello").unwrap_err();
        assert!(matches!(err, Error::ClipboardUnavailable));
    }

    #[test]
    fn test_working_tool_receives_text() {
        // `cat` exists everywhere and consumes stdin successfully.
        let candidates: &[(&str, &[&str])] = &[("cat", &[])];
        assert!(copy_with(candidates, "hello").is_ok());
    }

    #[test]
    fn test_command_exists_probe() {
        assert!(command_exists("sh"));
        assert!(!command_exists("definitely-not-a-real-tool-9f3a"));
    }
}
