//! # Session Module
//!
//! Backs `--session <id>`: finds `<claude>/projects/<project>/<id>.jsonl` and
//! condenses the transcript into a [`SessionReport`].

use anyhow::{Context, Result, bail};
use chrono::DateTime;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::context::{
    DEFAULT_CONTEXT_WINDOW, UsageLevel, context_window_for_model, effective_window,
    usage_percent,
};
use crate::models::MessageUsage;
use crate::transcript::{TranscriptScan, scan_transcript_file};

/// Search the immediate subdirectories of `projects_dir` for `<session_id>.jsonl`.
///
/// The first hit in directory-listing order wins.
pub fn find_session_transcript(projects_dir: &Path, session_id: &str) -> Result<PathBuf> {
    let file_name = format!("{session_id}.jsonl");
    for entry in WalkDir::new(projects_dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| {
            format!("failed to read projects dir {}", projects_dir.display())
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let candidate = entry.path().join(&file_name);
        debug!(candidate = %candidate.display(), "checking session candidate");
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    bail!("Session {session_id} not found")
}

/// Token figures for the latest usage snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageBreakdown {
    /// Raw transcript timestamp.
    pub timestamp: Option<String>,
    pub usage: MessageUsage,
    pub current_tokens: u64,
    pub context_window: u64,
    pub effective_window: u64,
    pub percent_of_total: u64,
    pub percent_of_effective: u64,
    pub remaining_tokens: u64,
    pub remaining_percent: u64,
    pub level: UsageLevel,
}

impl UsageBreakdown {
    pub fn new(timestamp: Option<String>, usage: MessageUsage, context_window: u64) -> Self {
        let current_tokens = usage.context_tokens();
        let effective = effective_window(context_window);
        // a window no larger than the reserve leaves no room at all
        let percent_of_effective = if effective == 0 && current_tokens > 0 {
            100
        } else {
            usage_percent(current_tokens, effective)
        };
        Self {
            timestamp,
            usage,
            current_tokens,
            context_window,
            effective_window: effective,
            percent_of_total: usage_percent(current_tokens, context_window),
            percent_of_effective,
            remaining_tokens: effective.saturating_sub(current_tokens),
            remaining_percent: 100u64.saturating_sub(percent_of_effective),
            level: UsageLevel::from_percent(percent_of_effective),
        }
    }

    /// Timestamp as `YYYY-MM-DD HH:MM:SS` in its own offset; the raw string if it isn't RFC 3339.
    pub fn last_update(&self) -> String {
        let raw = self.timestamp.as_deref().unwrap_or_default();
        DateTime::parse_from_rfc3339(raw)
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| raw.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct SessionReport {
    pub session_id: String,
    pub transcript_path: PathBuf,
    pub line_count: usize,
    /// `None` when no line carried input or cache-read tokens.
    pub breakdown: Option<UsageBreakdown>,
}

impl SessionReport {
    /// Build the report from a finished scan. The window comes from
    /// `context_limit` if set, else from the model recorded on the entry.
    pub fn from_scan(
        session_id: &str,
        transcript_path: PathBuf,
        scan: TranscriptScan,
        context_limit: Option<u64>,
    ) -> Self {
        let breakdown = scan.last_usage.map(|entry| {
            let window = context_limit.unwrap_or_else(|| {
                entry
                    .model()
                    .map(context_window_for_model)
                    .unwrap_or(DEFAULT_CONTEXT_WINDOW)
            });
            let usage = entry.usage();
            UsageBreakdown::new(entry.timestamp, usage, window)
        });
        Self {
            session_id: session_id.to_string(),
            transcript_path,
            line_count: scan.line_count,
            breakdown,
        }
    }
}

/// Locate and scan the transcript for `session_id` under `claude_home/projects`.
pub fn load_session_report(
    claude_home: &Path,
    session_id: &str,
    context_limit: Option<u64>,
) -> Result<SessionReport> {
    let projects_dir = claude_home.join("projects");
    let transcript_path = find_session_transcript(&projects_dir, session_id)?;
    let scan = scan_transcript_file(&transcript_path).with_context(|| {
        format!("failed to open transcript {}", transcript_path.display())
    })?;
    debug!(lines = scan.line_count, "session transcript scanned");
    Ok(SessionReport::from_scan(
        session_id,
        transcript_path,
        scan,
        context_limit,
    ))
}
