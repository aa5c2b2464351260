use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tolk_config::Config;
use tolk_translator::{LibreTranslator, Translator};

pub mod cli;
pub mod commands;
pub mod controller;
pub mod debounce;
pub mod events;
pub mod io;
pub mod logging;
pub mod oneshot;
pub mod state;
pub mod status;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init_tracing(cli.json_logs);

    let config = load_config(&cli)?;
    let translator: Arc<dyn Translator> = Arc::new(
        LibreTranslator::from_config(&config.network, &config.translator)
            .context("Failed to build translator")?,
    );
    tracing::info!(
        "Using {} with {} endpoint(s)",
        translator.metadata().name,
        translator.metadata().endpoints.len()
    );

    match &cli.command {
        None | Some(Command::Interactive) => run(Arc::new(AppState::new(config)), translator).await,
        Some(Command::Translate { text }) => {
            let text = oneshot::resolve_text(text).await?;
            let translated = oneshot::run_translate(
                translator.as_ref(),
                &text,
                &config.translator.from_lang,
                &config.translator.to_lang,
                config.translator.max_chars,
            )
            .await?;
            println!("{translated}");
            Ok(())
        }
        Some(Command::Detect { text }) => {
            let text = oneshot::resolve_text(text).await?;
            println!("{}", oneshot::run_detect(translator.as_ref(), &text).await?);
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            Config::load(path)?
        }
        None => Config::new(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Interactive mode: runs until `:quit`, end of input or Ctrl+C
pub async fn run(state: Arc<AppState>, translator: Arc<dyn Translator>) -> anyhow::Result<()> {
    let hints = atty::is(atty::Stream::Stdin);
    let input_lines = tolk_io::stdin::spawn_stdin_reader(64);

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(translator, input_lines, hints);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        _ = async {
            while let Some(result) = tasks.join_next().await {
                match result {
                    // Input stops here; the event loop tells the UI when it is done
                    Ok(Ok(())) => controller.shutdown(),
                    Ok(Err(e)) => {
                        tracing::error!("Task failed: {e:#}");
                        tasks.abort_all();
                    }
                    Err(e) if e.is_cancelled() => {}
                    Err(e) => {
                        tracing::error!("Task panicked: {e}");
                        tasks.abort_all();
                    }
                }
            }
        } => {}
    }

    controller.shutdown();
    tasks.abort_all();
    Ok(())
}
