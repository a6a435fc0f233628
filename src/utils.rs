use std::io::Read;
use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, fmt};

/// Env var holding the tracing filter (EnvFilter syntax).
pub const LOG_ENV: &str = "CLAUDE_STATUSLINE_LOG";

/// Install a stderr-only subscriber; stdout belongs to the status line.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

pub fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Claude data root: the explicit override if given, otherwise `~/.claude`.
/// Returns `None` only when no home directory can be determined.
pub fn claude_home(override_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.to_path_buf());
    }
    directories::BaseDirs::new().map(|b| b.home_dir().join(".claude"))
}

/// Last path element, ignoring trailing separators. `""` becomes `.` and a
/// root-only path stays `/`.
pub fn dir_basename(dir: &str) -> String {
    if dir.is_empty() {
        return ".".to_string();
    }
    let trimmed = dir.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    match Path::new(trimmed).file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => trimmed.rsplit('/').next().unwrap_or(trimmed).to_string(),
    }
}

/// Abbreviate a token count: `999`, `1.2K`, `45K`, `1.2M`, `12M`.
///
/// Below ten of a unit one decimal is shown; from ten upward the value is
/// truncated to a whole number.
pub fn format_number(n: u64) -> String {
    if n < 1_000 {
        n.to_string()
    } else if n < 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else if n < 1_000_000 {
        format!("{}K", n / 1_000)
    } else if n < 10_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else {
        format!("{}M", n / 1_000_000)
    }
}
