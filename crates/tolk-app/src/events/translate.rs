use std::sync::Arc;

use tolk_translator::{AUTO, TranslateError, Translator};
use tolk_types::StatusUpdate;

use crate::state::AppState;
use crate::status::HostSink;

pub const PLACEHOLDER: &str = "Translating...";
pub const SAME_LANGUAGE: &str = "Source and target are the same, copied.";
pub const UNEXPECTED_OUTPUT: &str = "Unexpected response from translation server.";
pub const UNEXPECTED_STATUS: &str = "Unexpected response format";
pub const FAILED_OUTPUT: &str = "Translation failed. See log.";
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Translate the current input and publish the outcome, unless a newer run
/// started in the meantime.
pub async fn translate_now(
    state: Arc<AppState>,
    translator: Arc<dyn Translator>,
    sink: HostSink,
) -> anyhow::Result<()> {
    let generation = state.next_generation();

    let (text, source, target) = {
        let session = state.session.read().await;
        (
            session.input.trim().to_string(),
            session.source.clone(),
            session.target.clone(),
        )
    };

    if text.is_empty() {
        {
            let mut session = state.session.write().await;
            session.output.clear();
            session.detected = None;
        }
        sink.output("").await?;
        sink.detected(None).await?;
        sink.status(StatusUpdate::cleared()).await?;
        return Ok(());
    }

    sink.output(PLACEHOLDER).await?;
    sink.status(StatusUpdate::progress(PLACEHOLDER)).await?;

    let result = translator.translate(&text, source.clone(), target).await;

    if !state.is_current(generation) {
        tracing::debug!("Dropping stale translation #{generation}");
        return Ok(());
    }

    match result {
        Ok(translation) => {
            let detected = (source == AUTO).then(|| {
                translation
                    .detected
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string())
            });

            {
                let mut session = state.session.write().await;
                session.output = translation.text.clone();
                session.detected = detected.clone();
            }

            sink.detected(detected).await?;
            sink.output(translation.text).await?;
            if translation.passthrough {
                sink.status(StatusUpdate::info(SAME_LANGUAGE)).await?;
            } else {
                sink.status(StatusUpdate::cleared()).await?;
            }
        }
        Err(e) => {
            {
                let mut session = state.session.write().await;
                session.output.clear();
                session.detected = None;
            }
            sink.detected(None).await?;

            if let TranslateError::UnexpectedResponse(body) = &e {
                tracing::warn!("Unexpected translate response: {body}");
                sink.output(UNEXPECTED_OUTPUT).await?;
                sink.status(StatusUpdate::error(UNEXPECTED_STATUS)).await?;
            } else {
                tracing::error!("{e}");
                sink.output(FAILED_OUTPUT).await?;
                sink.status(StatusUpdate::error(format!("Translation failed: {e}")))
                    .await?;
            }
        }
    }

    Ok(())
}
