use anyhow::{Context, bail};
use tokio::io::AsyncReadExt;
use tolk_translator::Translator;
use tolk_translator::text::{char_count, prepare_input};

/// Text from the command line, or all of stdin when none was given
pub async fn resolve_text(words: &[String]) -> anyhow::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("Failed to read stdin")?;
    Ok(text)
}

pub async fn run_translate(
    translator: &dyn Translator,
    text: &str,
    from: &str,
    to: &str,
    max_chars: usize,
) -> anyhow::Result<String> {
    let prepared = prepare_input(text, max_chars);
    if prepared.is_empty() {
        bail!("Nothing to translate");
    }
    if char_count(text.trim()) > max_chars {
        tracing::warn!("Input truncated to {max_chars} characters");
    }

    let translation = translator
        .translate(prepared, from.to_string(), to.to_string())
        .await?;

    tracing::info!("Translated by {}", translation.provider);
    if let Some(language) = &translation.detected {
        tracing::info!("Detected: {language}");
    }

    Ok(translation.text)
}

pub async fn run_detect(translator: &dyn Translator, text: &str) -> anyhow::Result<String> {
    if text.trim().is_empty() {
        bail!("Nothing to detect");
    }

    Ok(translator
        .detect_language(text)
        .await
        .unwrap_or_else(|| "unknown".to_string()))
}
