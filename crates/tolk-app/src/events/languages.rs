use tolk_translator::AUTO;
use tolk_translator::text::{char_count, truncate_chars};
use tolk_types::StatusUpdate;

use crate::events::EventContext;

pub const SWAP_REFUSED: &str = "Cannot swap while the source language is auto-detected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

pub async fn handle_set_language(
    ctx: &mut EventContext,
    side: Side,
    code: String,
) -> anyhow::Result<()> {
    let (source, target) = {
        let mut session = ctx.state.session.write().await;
        match side {
            Side::Source => session.source = code,
            Side::Target => session.target = code,
        }
        (session.source.clone(), session.target.clone())
    };

    tracing::info!("Languages: {source} -> {target}");
    ctx.sink.languages(&source, &target).await?;
    ctx.spawn_translation();

    Ok(())
}

/// Swap languages together with input and output text
pub async fn handle_swap(ctx: &mut EventContext) -> anyhow::Result<()> {
    let max = {
        let config = ctx.state.config.read().await;
        config.translator.max_chars
    };

    let swapped = {
        let mut session = ctx.state.session.write().await;
        if session.source == AUTO {
            None
        } else {
            let session = &mut *session;
            std::mem::swap(&mut session.source, &mut session.target);
            std::mem::swap(&mut session.input, &mut session.output);
            session.input = truncate_chars(&session.input, max).to_string();
            session.detected = None;
            Some((
                session.source.clone(),
                session.target.clone(),
                session.input.clone(),
                session.output.clone(),
            ))
        }
    };

    let Some((source, target, input, output)) = swapped else {
        tracing::debug!("Swap refused, source is {AUTO}");
        ctx.sink.status(StatusUpdate::error(SWAP_REFUSED)).await?;
        return Ok(());
    };

    ctx.sink.languages(&source, &target).await?;
    ctx.sink.input(input.clone()).await?;
    ctx.sink.output(output).await?;
    ctx.sink.char_count(char_count(&input), max).await?;
    ctx.spawn_translation();

    Ok(())
}
