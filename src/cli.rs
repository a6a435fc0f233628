use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(about = "Claude Code status line with context window usage")]
pub struct Args {
    /// Debug mode: show usage for a specific session ID instead of reading stdin
    #[arg(long, value_name = "ID")]
    pub session: Option<String>,

    /// Claude data directory searched in debug mode. Defaults to ~/.claude
    #[arg(long, env = "CLAUDE_CONFIG_DIR", value_name = "DIR")]
    pub claude_config_dir: Option<PathBuf>,

    /// Override the context window size in tokens
    #[arg(
        long,
        env = "CLAUDE_CONTEXT_LIMIT",
        value_name = "TOKENS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub context_limit: Option<u64>,

    /// Disable ANSI colors in the token segment
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }

    /// Whether the token segment should carry color escapes.
    pub fn use_color(&self) -> bool {
        cfg!(feature = "colors") && !self.no_color
    }
}
