//! # Context Module
//!
//! Maps model identifiers to context window sizes and turns a token count into
//! the percentages and usage level shown to the user.

/// Window assumed when a model id matches nothing more specific.
pub const DEFAULT_CONTEXT_WINDOW: u64 = 200_000;
/// Window of the extended-context variants (model id tagged `[1m]`).
pub const EXTENDED_CONTEXT_WINDOW: u64 = 1_000_000;
/// Marker Claude Code appends to model ids running with the 1M window.
pub const EXTENDED_CONTEXT_MARKER: &str = "[1m]";

/// System prompt, tools and memory files.
pub const SYSTEM_OVERHEAD_TOKENS: u64 = 20_000;
/// Headroom kept free for the model's response.
pub const OUTPUT_BUFFER_TOKENS: u64 = 33_000;
pub const RESERVED_TOKENS: u64 = SYSTEM_OVERHEAD_TOKENS + OUTPUT_BUFFER_TOKENS;

pub const HIGH_USAGE_PERCENT: u64 = 80;
pub const MEDIUM_USAGE_PERCENT: u64 = 60;

// Known families – currently all 200k; kept separate so one can change alone
const FAMILY_WINDOWS: &[(&str, u64)] = &[
    ("sonnet-4", 200_000),
    ("opus-4", 200_000),
    ("haiku", 200_000),
    ("3-5-sonnet", 200_000),
    ("3-opus", 200_000),
    ("3-haiku", 200_000),
];

/// Context window for a model id. Matching is case-sensitive and the `[1m]`
/// marker wins over any family match.
pub fn context_window_for_model(model_id: &str) -> u64 {
    if model_id.contains(EXTENDED_CONTEXT_MARKER) {
        return EXTENDED_CONTEXT_WINDOW;
    }
    FAMILY_WINDOWS
        .iter()
        .find(|(family, _)| model_id.contains(family))
        .map(|&(_, window)| window)
        .unwrap_or(DEFAULT_CONTEXT_WINDOW)
}

/// Window left for conversation once the reserved space is taken out.
pub fn effective_window(window: u64) -> u64 {
    window.saturating_sub(RESERVED_TOKENS)
}

/// `floor(tokens / window * 100)`; a zero window reports 0.
pub fn usage_percent(tokens: u64, window: u64) -> u64 {
    if window == 0 {
        return 0;
    }
    ((tokens as u128 * 100) / window as u128) as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Low,
    Medium,
    High,
}

impl UsageLevel {
    pub fn from_percent(pct: u64) -> Self {
        if pct >= HIGH_USAGE_PERCENT {
            Self::High
        } else if pct >= MEDIUM_USAGE_PERCENT {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            Self::High => "🔴",
            Self::Medium => "🟡",
            Self::Low => "🟢",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "HIGH - Consider /compact",
            Self::Medium => "MEDIUM - Approaching limit",
            Self::Low => "LOW - Plenty of space",
        }
    }
}
