use std::io::{self, Write};

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

use crate::context::{
    OUTPUT_BUFFER_TOKENS, RESERVED_TOKENS, SYSTEM_OVERHEAD_TOKENS, usage_percent,
};
use crate::models::StatusInput;
use crate::session::SessionReport;
use crate::utils::{dir_basename, format_number};

pub const SEGMENT_SEPARATOR: &str = " | ";

/// Everything the status line needs besides the hook payload.
#[derive(Debug, Clone, Default)]
pub struct StatusContext {
    pub branch: Option<String>,
    pub current_tokens: u64,
    pub context_window: u64,
    pub color: bool,
}

fn colorize_usage(text: String, pct: u64, color: bool) -> String {
    if !color {
        return text;
    }
    #[cfg(feature = "colors")]
    {
        use crate::context::UsageLevel;
        match UsageLevel::from_percent(pct) {
            UsageLevel::High => text.red().to_string(),
            UsageLevel::Medium => text.yellow().to_string(),
            UsageLevel::Low => text,
        }
    }
    #[cfg(not(feature = "colors"))]
    {
        let _ = pct;
        text
    }
}

/// `🧠 45K (22%)`, colored by how full the window is.
pub fn token_segment(current_tokens: u64, context_window: u64, color: bool) -> String {
    let pct = usage_percent(current_tokens, context_window);
    let text = format!("{} ({}%)", format_number(current_tokens), pct);
    format!("🧠 {}", colorize_usage(text, pct, color))
}

/// Compose the one-line status: model, directory, then branch and token usage
/// when there is something to show.
pub fn render_status_line(input: &StatusInput, ctx: &StatusContext) -> String {
    let mut parts: Vec<String> = vec![
        format!("🤖 {}", input.model.display_name),
        format!("📁 {}", dir_basename(&input.workspace.current_dir)),
    ];

    if let Some(branch) = ctx.branch.as_deref().filter(|b| !b.is_empty()) {
        parts.push(format!("🌿 {branch}"));
    }

    if ctx.current_tokens > 0 {
        parts.push(token_segment(
            ctx.current_tokens,
            ctx.context_window,
            ctx.color,
        ));
    }

    parts.join(SEGMENT_SEPARATOR)
}

/// Write the multi-line `--session` report.
pub fn write_session_report<W: Write>(out: &mut W, report: &SessionReport) -> io::Result<()> {
    writeln!(out, "Session: {}", report.session_id)?;
    writeln!(out, "Transcript: {}", report.transcript_path.display())?;
    writeln!(out, "Total entries: {}", report.line_count)?;
    writeln!(out)?;

    let Some(b) = report.breakdown.as_ref() else {
        writeln!(out, "No usage data found")?;
        return Ok(());
    };

    writeln!(out, "Last update: {}", b.last_update())?;
    writeln!(out)?;

    writeln!(out, "Token Usage:")?;
    writeln!(out, "  Cache read:     {}", format_number(b.usage.cache_read()))?;
    writeln!(out, "  Input:          {}", format_number(b.usage.input()))?;
    writeln!(out, "  Cache creation: {}", format_number(b.usage.cache_create()))?;
    writeln!(out, "  Output:         {}", format_number(b.usage.output()))?;
    writeln!(out, "  ───────────────────────")?;
    writeln!(
        out,
        "  Current context: {} ({}% of total, {}% of effective)",
        format_number(b.current_tokens),
        b.percent_of_total,
        b.percent_of_effective
    )?;
    writeln!(out, "  Total window:    {}", format_number(b.context_window))?;
    writeln!(
        out,
        "  Reserved space:  {} (system ~{} + output ~{})",
        format_number(RESERVED_TOKENS),
        format_number(SYSTEM_OVERHEAD_TOKENS),
        format_number(OUTPUT_BUFFER_TOKENS)
    )?;
    writeln!(out, "  Effective window: {}", format_number(b.effective_window))?;
    writeln!(
        out,
        "  Remaining:       {} ({}%)",
        format_number(b.remaining_tokens),
        b.remaining_percent
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "Status: {} {}",
        b.level.indicator(),
        b.level.description()
    )?;
    Ok(())
}
