use std::time::Duration;

use tolk_types::StatusUpdate;

use crate::events::EventContext;

pub const NOTHING_TO_COPY: &str = "Nothing to copy";
pub const NOTHING_TO_SAVE: &str = "Nothing to save";
pub const COPIED: &str = "Copied to clipboard";

pub async fn handle_copy(ctx: &mut EventContext) -> anyhow::Result<()> {
    let text = ctx.state.session.read().await.output.trim().to_string();
    if text.is_empty() {
        ctx.sink.status(StatusUpdate::error(NOTHING_TO_COPY)).await?;
        return Ok(());
    }

    // arboard talks to the display server synchronously
    let result = tokio::task::spawn_blocking(move || tolk_io::clipboard::copy_to_clipboard(&text)).await?;

    if let Err(e) = result {
        tracing::error!("Copy failed: {e}");
        ctx.sink
            .status(StatusUpdate::error(format!("Copy failed: {e}")))
            .await?;
        return Ok(());
    }

    ctx.sink.status(StatusUpdate::info(COPIED)).await?;

    let clear_after = {
        let config = ctx.state.config.read().await;
        Duration::from_millis(config.ui.status_clear_ms)
    };
    let generation = ctx.state.current_generation();
    let state = ctx.state.clone();
    let sink = ctx.sink.clone();
    tokio::spawn(async move {
        tokio::time::sleep(clear_after).await;
        // A translation started since then owns the status line
        if state.is_current(generation) {
            let _ = sink.status(StatusUpdate::cleared()).await;
        }
    });

    Ok(())
}

pub async fn handle_save(ctx: &mut EventContext) -> anyhow::Result<()> {
    let (text, target) = {
        let session = ctx.state.session.read().await;
        (session.output.trim().to_string(), session.target.clone())
    };
    if text.is_empty() {
        ctx.sink.status(StatusUpdate::error(NOTHING_TO_SAVE)).await?;
        return Ok(());
    }

    let dir = ctx.state.config.read().await.ui.export_dir.clone();

    match tolk_io::export::save_translation(&dir, &target, &text).await {
        Ok(path) => {
            ctx.sink
                .status(StatusUpdate::info(format!("Saved to {}", path.display())))
                .await?;
        }
        Err(e) => {
            tracing::error!("Save failed: {e:#}");
            ctx.sink
                .status(StatusUpdate::error(format!("Save failed: {e}")))
                .await?;
        }
    }

    Ok(())
}
