//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for chatline
#[derive(Parser, Debug)]
#[command(name = "chatline")]
#[command(author, version, about = "Interactive chat client for chat-completions models")]
#[command(long_about = r#"
chatline is an interactive chat client for Mistral-compatible chat-completions APIs.

Queries may contain placeholders written as $0<name>. You are asked for each
value; a value starting with `/for` lists comma-separated variants and sends
one query per variant. Every exchange is saved and can be reloaded with /load.

Configuration files are loaded from (in priority order):
1. CHATLINE_* environment variables (e.g. CHATLINE_PROVIDER__BASE_URL)
2. --config <path>     Explicit config file
3. ./chatline.toml     Project-level config
4. ~/.config/chatline/config.toml   Global config

Example:
  chatline
  chatline --model mistral-small
  chatline --data-dir ./conversations -vv
"#)]
pub struct Cli {
    /// Model to use (skips the model prompt)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Directory for stored conversations and logs
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write diagnostic logs to <data_dir>/logs/chatline.log instead of stderr
    #[arg(long)]
    pub log_file: bool,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
