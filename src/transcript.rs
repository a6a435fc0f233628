//! # Transcript Module
//!
//! Reads a session transcript (newline-delimited JSON) and keeps the most recent
//! entry whose usage has input or cache-read tokens. Lines are streamed, so a
//! single line may be arbitrarily large (tool output is often embedded inline).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::models::TranscriptEntry;

/// Result of reading one transcript.
#[derive(Debug, Default, Clone)]
pub struct TranscriptScan {
    /// Number of lines read, parsable or not.
    pub line_count: usize,
    /// Last entry with `input_tokens > 0 || cache_read_input_tokens > 0`.
    pub last_usage: Option<TranscriptEntry>,
}

impl TranscriptScan {
    /// Cache-read plus input tokens of the latest qualifying entry, 0 without one.
    pub fn context_tokens(&self) -> u64 {
        self.last_usage
            .as_ref()
            .map(|e| e.usage().context_tokens())
            .unwrap_or(0)
    }
}

/// Fold the lines of `reader` into a [`TranscriptScan`].
///
/// Unparsable lines are counted and skipped. A read error ends the scan with
/// whatever was gathered up to that point.
pub fn scan_transcript<R: BufRead>(reader: R) -> TranscriptScan {
    reader
        .split(b'\n')
        .map_while(|line| {
            line.map_err(|err| debug!(%err, "transcript read stopped"))
                .ok()
        })
        .fold(TranscriptScan::default(), |mut scan, line| {
            scan.line_count += 1;
            match serde_json::from_slice::<TranscriptEntry>(&line) {
                Ok(entry) if entry.usage().is_qualifying() => scan.last_usage = Some(entry),
                Ok(_) => {}
                Err(err) => trace!(line = scan.line_count, %err, "skipping transcript line"),
            }
            scan
        })
}

/// Open and scan the transcript at `path`.
pub fn scan_transcript_file(path: &Path) -> std::io::Result<TranscriptScan> {
    let file = File::open(path)?;
    Ok(scan_transcript(BufReader::new(file)))
}

/// Current context tokens for the status line. A blank path, or a transcript
/// that is missing or unreadable, counts as zero usage.
pub fn current_context_tokens(transcript_path: &str) -> u64 {
    if transcript_path.is_empty() {
        return 0;
    }
    match scan_transcript_file(Path::new(transcript_path)) {
        Ok(scan) => scan.context_tokens(),
        Err(err) => {
            debug!(path = transcript_path, %err, "transcript unavailable");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn usage_line(input: u64, cache_read: u64) -> String {
        format!(
            r#"{{"timestamp":"2025-08-01T12:00:00Z","message":{{"usage":{{"input_tokens":{input},"cache_creation_input_tokens":7,"cache_read_input_tokens":{cache_read},"output_tokens":3}}}}}}"#
        )
    }

    #[test]
    fn keeps_last_qualifying_entry() {
        let data = format!(
            "{}\n{}\n{}\n",
            usage_line(0, 0),
            usage_line(50, 100),
            r#"{"message":{"usage":{"input_tokens":0,"cache_read_input_tokens":0}}, garbage"#
        );
        let scan = scan_transcript(Cursor::new(data));
        assert_eq!(scan.line_count, 3);
        assert_eq!(scan.context_tokens(), 150);
    }

    #[test]
    fn later_zero_usage_does_not_overwrite() {
        let data = format!("{}\n{}\n", usage_line(10, 20), usage_line(0, 0));
        assert_eq!(scan_transcript(Cursor::new(data)).context_tokens(), 30);
    }

    #[test]
    fn newest_qualifying_entry_wins_over_larger_earlier_one() {
        let data = format!("{}\n{}", usage_line(5, 90_000), usage_line(2, 40_000));
        let scan = scan_transcript(Cursor::new(data));
        assert_eq!(scan.line_count, 2);
        assert_eq!(scan.context_tokens(), 40_002);
    }

    #[test]
    fn empty_input_has_no_usage() {
        let scan = scan_transcript(Cursor::new(Vec::<u8>::new()));
        assert_eq!(scan.line_count, 0);
        assert!(scan.last_usage.is_none());
        assert_eq!(scan.context_tokens(), 0);
    }

    #[test]
    fn tolerates_crlf_and_blank_lines() {
        let data = format!("\r\n{}\r\n\n", usage_line(1, 2));
        let scan = scan_transcript(Cursor::new(data));
        assert_eq!(scan.line_count, 3);
        assert_eq!(scan.context_tokens(), 3);
    }

    #[test]
    fn handles_lines_larger_than_one_megabyte() {
        let payload = "x".repeat(2 * 1024 * 1024);
        let big = format!(
            r#"{{"message":{{"content":"{payload}","usage":{{"input_tokens":4,"cache_read_input_tokens":1000}}}}}}"#
        );
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", usage_line(1, 1)).unwrap();
        writeln!(file, "{big}").unwrap();
        file.flush().unwrap();

        let scan = scan_transcript_file(file.path()).unwrap();
        assert_eq!(scan.line_count, 2);
        assert_eq!(scan.context_tokens(), 1004);
    }

    #[test]
    fn missing_or_blank_path_is_zero() {
        assert_eq!(current_context_tokens(""), 0);
        assert_eq!(current_context_tokens("/nonexistent/dir/session.jsonl"), 0);
    }

    #[test]
    fn reads_tokens_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", usage_line(200, 45_000)).unwrap();
        writeln!(file, "not json at all").unwrap();
        file.flush().unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert_eq!(current_context_tokens(&path), 45_200);
    }
}
