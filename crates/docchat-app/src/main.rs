mod cli;
mod repl;

use std::path::Path;

use tracing_subscriber::EnvFilter;

use docchat_ai::{AnswerStyle, GeminiClient, GeminiConfig};
use docchat_extract::UploadedDocument;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    // Try common locations for .env relative to the workspace
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Rust workspace root — two levels up from crates/docchat-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file before anything else
    load_dotenv();

    // Parse CLI arguments
    let args = cli::parse();

    // Load config (logging is not up yet, so remember the outcome and log it after init)
    let config_result = match &args.config {
        Some(path) => docchat_config::load_from_path(Path::new(path)),
        None => docchat_config::load_config(),
    };
    let (config, config_err) = match config_result {
        Ok(config) => (config, None),
        Err(e) => (docchat_config::DocChatConfig::default(), Some(e)),
    };

    // Initialize logging
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.directive.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "docchat=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("docchat v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_err {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }

    // Resolve the API credential; absence is a warning, not an abort.
    // Calls made with an empty key fail through the normal error path.
    let api_key = docchat_config::resolve_api_key().unwrap_or_else(|| {
        tracing::warn!(
            "{} not set — answers will fail until a key is configured",
            docchat_config::API_KEY_VAR
        );
        String::new()
    });

    let gemini_config = GeminiConfig::new(api_key)
        .with_model(args.model.clone().unwrap_or_else(|| config.api.model.clone()))
        .with_max_tokens(config.api.max_tokens)
        .with_temperature(config.api.temperature);
    let client = GeminiClient::new(gemini_config);

    let style = match args.style.as_deref() {
        Some(name) => AnswerStyle::parse(name).unwrap_or_else(|| {
            tracing::warn!("unknown answer style '{name}', using default");
            AnswerStyle::default()
        }),
        None => AnswerStyle::default(),
    };

    // Stage documents passed on the command line; the REPL processes them
    // before reading the first line.
    let mut staged = Vec::new();
    for path in &args.documents {
        match UploadedDocument::from_path(path) {
            Ok(doc) => staged.push(doc),
            Err(e) => tracing::warn!("failed to read {}: {e}", path.display()),
        }
    }

    if let Err(e) = repl::run(&client, style, staged).await {
        tracing::error!("terminal i/o error: {e}");
        std::process::exit(1);
    }
    tracing::info!("session ended");
}
