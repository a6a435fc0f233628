use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use context_statusline::cli::Args;
use context_statusline::context::context_window_for_model;
use context_statusline::display::{StatusContext, render_status_line, write_session_report};
use context_statusline::git::read_git_branch;
use context_statusline::models::StatusInput;
use context_statusline::session::load_session_report;
use context_statusline::transcript::current_context_tokens;
use context_statusline::utils::{claude_home, read_stdin, setup_tracing};

fn main() -> Result<()> {
    setup_tracing();
    let args = Args::parse();

    if let Some(session_id) = args.session.as_deref().filter(|id| !id.is_empty()) {
        return run_session_report(&args, session_id);
    }

    let stdin = read_stdin().context("read stdin")?;
    let input: StatusInput = serde_json::from_slice(&stdin).context("Failed to parse input")?;

    let current_tokens = current_context_tokens(&input.transcript_path);
    let context_window = args
        .context_limit
        .unwrap_or_else(|| context_window_for_model(&input.model.id));
    debug!(
        model = %input.model.id,
        context_window,
        current_tokens,
        "resolved context usage"
    );

    let ctx = StatusContext {
        branch: read_git_branch(Path::new(&input.workspace.current_dir)),
        current_tokens,
        context_window,
        color: args.use_color(),
    };
    println!("{}", render_status_line(&input, &ctx));
    Ok(())
}

fn run_session_report(args: &Args, session_id: &str) -> Result<()> {
    let home = claude_home(args.claude_config_dir.as_deref())
        .context("Failed to get user home")?;
    let report = load_session_report(&home, session_id, args.context_limit)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_session_report(&mut out, &report).context("write report")?;
    out.flush()?;
    Ok(())
}
