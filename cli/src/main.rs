//! CLI entrypoint for chatline
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use chatline_application::{ChatSession, CommandHandler, ConversationLogger, LlmGateway};
use chatline_domain::Model;
use chatline_infrastructure::{
    ChatCompletionsConfig, ConfigLoader, FileConfig, HttpChatGateway, JsonConversationRepository,
    JsonlConversationLogger,
};
use chatline_presentation::{ChatRepl, Cli, ConsoleView, OutputConfig, ReplConfig};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "chatline.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.storage.resolve_data_dir())
        .context("No data directory available; pass --data-dir")?;

    let log_dir = (cli.log_file || config.logging.file).then(|| data_dir.join("logs"));
    let _log_guard = init_logging(cli.verbose, log_dir.as_deref());

    info!("Starting chatline (data dir {})", data_dir.display());

    // === Dependency Injection ===
    let provider = ChatCompletionsConfig::from_file_config(&config.provider)?;
    let gateway = Arc::new(
        HttpChatGateway::new(provider)?.with_models(config.models.parse_available()),
    );
    let models = gateway
        .available_models()
        .await
        .context("Failed to list available models")?;
    info!("{} models available", models.len());

    let repository = Arc::new(JsonConversationRepository::new(
        data_dir.join("conversations"),
    ));

    let view = Arc::new(ConsoleView::new(&OutputConfig {
        color: config.output.color,
        show_progress: !cli.quiet,
    })?);

    let mut handler = CommandHandler::new(
        gateway,
        repository,
        view.clone(),
        models,
        config.behavior.to_behavior_config(),
    );
    if let Some(logger) = conversation_logger(&config, &data_dir) {
        handler = handler.with_conversation_logger(logger);
    }

    let mut session = ChatSession::new(Model::default());
    match initial_model(&cli, &config) {
        Some(model) => session.set_model(model),
        None => handler.prompt_to_select_model(&mut session)?,
    }
    info!("Using model {}", session.model());

    let repl_config = ReplConfig::default().with_history_file(
        config.repl.history_file.as_deref().map(expand_home),
    );

    ChatRepl::new(handler, view)
        .with_config(repl_config)
        .run(&mut session)
        .await?;

    Ok(())
}

/// Install the tracing subscriber: stderr, or a file under `log_dir`.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    // Initialize logging based on verbosity level
    let filter = || match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if let Some(dir) = log_dir {
        match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                tracing_subscriber::fmt()
                    .with_env_filter(filter())
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(writer)
                    .init();
                return Some(guard);
            }
            Err(e) => eprintln!("Cannot create log directory {}: {}", dir.display(), e),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    None
}

fn conversation_logger(config: &FileConfig, data_dir: &Path) -> Option<Arc<dyn ConversationLogger>> {
    if !config.logging.conversation_log {
        return None;
    }
    let logger = JsonlConversationLogger::in_dir(data_dir.join("logs"))?;
    info!("Conversation log: {}", logger.path().display());
    Some(Arc::new(logger))
}

/// `--model`, then `models.default`; `None` means ask the user.
fn initial_model(cli: &Cli, config: &FileConfig) -> Option<Model> {
    if let Some(name) = cli.model.as_deref().filter(|name| !name.trim().is_empty()) {
        let Ok(model) = name.trim().parse::<Model>();
        if model.platform().is_none() {
            warn!("Model {} belongs to no known platform; sending it as is", model);
        }
        return Some(model);
    }
    config.models.parse_default()
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
