//! Skeledle - terminal entry point.
//!
//! Usage: `skeledle [daily|endless]` (defaults to `daily`).

use std::io;

use anyhow::Context;
use skeledle_domain::GameMode;
use skeledle_engine::api::TerminalSession;
use skeledle_engine::infrastructure::config::EngineConfig;
use skeledle_engine::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Logs go to stderr so they never interleave with the game on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skeledle_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mode = parse_mode(std::env::args().nth(1).as_deref())?;

    let config = EngineConfig::from_env().context("reading configuration")?;
    tracing::info!(
        mode = %mode,
        daily_epoch = %config.daily_epoch,
        catalog = ?config.catalog_path,
        "Starting Skeledle"
    );

    let app = App::from_config(config).context("loading part catalog")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    TerminalSession::new(&app, mode)
        .run(stdin.lock(), stdout.lock())
        .context("terminal session")?;

    Ok(())
}

fn parse_mode(arg: Option<&str>) -> anyhow::Result<GameMode> {
    match arg {
        None => Ok(GameMode::Daily),
        Some(value) => value
            .parse::<GameMode>()
            .map_err(|_| anyhow::anyhow!("Usage: skeledle [daily|endless], got '{value}'")),
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
