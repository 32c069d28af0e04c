use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

/// Fetch adblock rule lists, merge and deduplicate them, and split the result
/// into three labelled parts.
#[derive(Debug, Parser)]
#[command(name = "rulesplit", version, about, long_about = None)]
pub struct Cli {
    /// RON config file; built-in defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source URL; repeat to replace the configured list.
    #[arg(long = "source", value_name = "URL")]
    pub sources: Vec<String>,

    /// Output file prefix; parts are named `<BASE>_1.txt` to `<BASE>_3.txt`.
    #[arg(short, long)]
    pub base_name: Option<String>,

    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Pause between source downloads, in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Also write the log to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the status summary.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the effective configuration and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn apply(&self, config: &mut AppConfig) {
        if !self.sources.is_empty() {
            config.sources = self.sources.clone();
        }
        if let Some(base) = &self.base_name {
            config.base_name = base.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(dir) = &self.cache_dir {
            config.cache_dir = dir.clone();
        }
        if let Some(delay) = self.delay_ms {
            config.courtesy_delay_ms = delay;
        }
    }
}
