mod chat_loop;
mod cli;

use neurobuddy_ai::SessionOptions;
use neurobuddy_chat::{render_transcript_html, TurnCoordinator};
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    // Try common locations for .env relative to the workspace
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/neurobuddy-app/
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
    // Load .env before anything reads the credential
    load_dotenv();

    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("neurobuddy=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "neurobuddy=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("NeuroBuddy v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args).await {
        tracing::error!("{e}");
    }
}

async fn run(args: cli::Args) -> neurobuddy_common::Result<()> {
    // An explicitly requested config file must load; the default path
    // falls back to defaults with a warning.
    let config = match args.config {
        Some(ref path) => neurobuddy_config::load_from_path(std::path::Path::new(path))?,
        None => neurobuddy_config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            neurobuddy_config::NeuroBuddyConfig::default()
        }),
    };

    let session = neurobuddy_ai::create_session(SessionOptions {
        model: config.model.name.clone(),
        system_instruction: config.chat.system_instruction.clone(),
        max_output_tokens: config.model.max_output_tokens,
        temperature: config.model.temperature,
        search_grounding: config.model.search_grounding,
    });
    let mut coordinator = TurnCoordinator::new(session, config.chat.apology.clone());

    match args.ask {
        Some(ref question) => chat_loop::ask_once(&mut coordinator, question).await,
        None => chat_loop::run(&mut coordinator).await,
    }

    if let Some(usage) = coordinator.usage() {
        tracing::info!(
            input_tokens = usage.total().input_tokens,
            output_tokens = usage.total().output_tokens,
            calls = usage.call_count(),
            "session token usage"
        );
    }

    if let Some(ref path) = args.transcript {
        let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let html = render_transcript_html(coordinator.turns(), &generated_at);
        std::fs::write(path, html)?;
        tracing::info!("transcript written to {path}");
    }

    Ok(())
}
