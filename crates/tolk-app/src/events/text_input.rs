use tolk_translator::text::{char_count, truncate_chars};

use crate::events::EventContext;

pub async fn handle_text_input(ctx: &mut EventContext, text: String) -> anyhow::Result<()> {
    let max = {
        let config = ctx.state.config.read().await;
        config.translator.max_chars
    };

    let text = truncate_chars(&text, max).to_string();
    let used = char_count(&text);
    tracing::debug!("TextInput received: {used} chars");

    ctx.state.session.write().await.input = text;
    ctx.sink.char_count(used, max).await?;

    ctx.schedule_translation();

    Ok(())
}
