use tolk_types::StatusUpdate;

use crate::events::EventContext;

pub async fn handle_clear(ctx: &mut EventContext) -> anyhow::Result<()> {
    ctx.debouncer.cancel();
    // Results of anything still in flight are no longer wanted
    ctx.state.next_generation();

    let max = ctx.state.config.read().await.translator.max_chars;
    {
        let mut session = ctx.state.session.write().await;
        session.input.clear();
        session.output.clear();
        session.detected = None;
    }

    ctx.sink.input("").await?;
    ctx.sink.output("").await?;
    ctx.sink.detected(None).await?;
    ctx.sink.char_count(0, max).await?;
    ctx.sink.status(StatusUpdate::cleared()).await?;

    Ok(())
}
