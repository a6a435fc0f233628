//! # Context Statusline
//!
//! A small statusline utility for Claude Code sessions that shows the active model,
//! the working directory, the Git branch and how much of the context window the
//! conversation currently occupies.
//!
//! ## Overview
//!
//! The normal path reads the statusLine hook JSON from stdin, tails the session
//! transcript for the most recent usage snapshot and prints one line:
//!
//! ```text
//! 🤖 Opus | 📁 proj | 🌿 main | 🧠 45K (22%)
//! ```
//!
//! With `--session <id>` the transcript is located under `~/.claude/projects`
//! instead, and a multi-line usage breakdown is printed.
//!
//! ## Features
//!
//! - `colors` (default): Enables terminal color output via owo-colors

/// Command-line argument parsing and configuration
pub mod cli;

/// Context window sizes, reserved space and usage levels
pub mod context;

/// Status line rendering and debug report output
pub mod display;

/// Git branch lookup via the `git` executable
pub mod git;

/// Data models for the hook input and transcript lines
pub mod models;

/// Debug-mode session lookup and reporting
pub mod session;

/// Transcript scanning for the latest usage snapshot
pub mod transcript;

/// Utility functions for paths, formatting and logging
pub mod utils;
