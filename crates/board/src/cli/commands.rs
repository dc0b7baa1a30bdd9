use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use boardapp::{PostController, SqliteStore, DEFAULT_DB_PATH};

use super::render;
use super::setup::{Cli, Commands};

pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let db_path = cli
        .db
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    let mut controller = PostController::new(store);

    let outcome = match cli.command {
        Commands::List => controller.load_all(),
        Commands::View { id } => controller.load_one(id),
        Commands::Create {
            title,
            content,
            author,
        } => controller.create(&title, &content, &author),
        Commands::Edit { id, title, content } => controller.update(id, &title, &content),
        Commands::Delete { id } => controller.delete(id),
    };

    finish(render::outcome(outcome), controller.close())
}

/// Combine the rendered outcome with the shutdown close. The outcome error
/// is the one the user cares about; a close failure is only surfaced when
/// the operation itself succeeded, and logged otherwise.
fn finish(result: anyhow::Result<()>, close: boardapp::Result<()>) -> anyhow::Result<()> {
    match close {
        Ok(()) => result,
        Err(e) if result.is_ok() => Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to close the post store");
            result
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // Logs go to stderr so they never mix with rendered output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
