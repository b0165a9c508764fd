use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use validation_hook::commands::inject;
use validation_hook::HookConfig;

#[derive(Parser)]
#[command(name = "validation-hook")]
#[command(about = "Inject validation loop state into validator Task calls", long_about = None)]
#[command(version)]
struct Cli {
    /// Validation loop state file (default: ~/.claude/validation-loop.local.md)
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Validation framework log (default: ~/.claude/logs/validation-framework.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Maximum characters of context before truncation
    #[arg(long, default_value_t = validation_hook::config::DEFAULT_MAX_CONTEXT_CHARS)]
    max_chars: usize,

    /// Number of trailing log lines to include
    #[arg(
        long,
        default_value_t = validation_hook::config::DEFAULT_MAX_LOG_LINES,
        value_parser = clap::value_parser!(u64).range(1..).map(|n: u64| n as usize)
    )]
    tail_lines: usize,

    /// Log pipeline decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<HookConfig> {
        let mut config = HookConfig::from_home()?;
        if let Some(state_file) = self.state_file {
            config.state_file = state_file;
        }
        if let Some(log_file) = self.log_file {
            config.log_file = log_file;
        }
        config.max_context_chars = self.max_chars;
        config.max_log_lines = self.tail_lines;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .without_time()
        .init();

    let config = cli.into_config()?;
    inject::execute(io::stdin().lock(), io::stdout().lock(), io::stderr().lock(), &config)
}
