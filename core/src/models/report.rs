use std::fmt;

use crate::models::comparison::ComparisonResult;

pub const NO_CHANGES: &str = "No changes detected.";
pub const ABSENT_PIPE: &str = "<none>";
pub const EMAIL_SUBJECT: &str = "TVHeadend M3U Comparison Results";

const RULE: &str = "---------------------------------------------------------------------------------------------------------";

/// Plain-text rendering of a comparison, one line per change.
pub fn render_comparison(result: &ComparisonResult) -> String {
    if result.is_empty() {
        return NO_CHANGES.to_string();
    }

    let mut lines = Vec::new();

    if !result.added.is_empty() {
        lines.push("Added streams:".to_string());
        for (name, pipe) in &result.added {
            lines.push(format!("+ {}: {}", name, pipe.as_deref().unwrap_or(ABSENT_PIPE)));
        }
    }

    if !result.removed.is_empty() {
        lines.push("Removed streams:".to_string());
        for (name, url) in &result.removed {
            lines.push(format!("- {}: {}", name, url));
        }
    }

    if !result.modified.is_empty() {
        lines.push("Modified streams:".to_string());
        for entry in &result.modified {
            lines.push(format!(
                "* {} changed:\n  Playlist: {}\n  Backend: {}",
                entry.name,
                entry.playlist_pipe.as_deref().unwrap_or(ABSENT_PIPE),
                entry.backend_url
            ));
        }
    }

    lines.join("\n")
}

/// Result slot for one network's playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceReport {
    Checked {
        playlist_url: String,
        network_name: String,
        comparison: ComparisonResult,
    },
    Failed {
        playlist_url: String,
        network_name: String,
        message: String,
    },
}

impl SourceReport {
    pub fn playlist_url(&self) -> &str {
        match self {
            SourceReport::Checked { playlist_url, .. } => playlist_url,
            SourceReport::Failed { playlist_url, .. } => playlist_url,
        }
    }

    pub fn network_name(&self) -> &str {
        match self {
            SourceReport::Checked { network_name, .. } => network_name,
            SourceReport::Failed { network_name, .. } => network_name,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SourceReport::Failed { .. })
    }

    pub fn has_changes(&self) -> bool {
        match self {
            SourceReport::Checked { comparison, .. } => !comparison.is_empty(),
            SourceReport::Failed { .. } => false,
        }
    }
}

impl fmt::Display for SourceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceReport::Checked {
                playlist_url,
                comparison,
                ..
            } => write!(
                f,
                "Results for playlist {}:\n{}\n",
                playlist_url,
                render_comparison(comparison)
            ),
            SourceReport::Failed {
                playlist_url,
                message,
                ..
            } => write!(f, "Error fetching playlist {}: {}", playlist_url, message),
        }
    }
}

/// Summary of every changed name across all blocks, then the blocks verbatim.
pub fn notification_body(reports: &[SourceReport]) -> String {
    let blocks: Vec<String> = reports.iter().map(|r| r.to_string()).collect();

    let mut body = format!("Summary:\n{}\n", RULE);
    for block in &blocks {
        for line in block.lines() {
            if line.trim_start().starts_with(['+', '-', '*']) {
                let prefix = line.split(':').next().unwrap_or(line);
                body.push_str(prefix);
                body.push('\n');
            }
        }
    }
    body.push('\n');
    body.push_str(&format!("Details:\n{}\n", RULE));
    body.push_str(&blocks.join("\n"));

    body
}
