use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tolk_config::network::NetworkConfig;
use tolk_config::translator::TranslatorConfig;

use crate::dispatcher::Dispatcher;
use crate::text::prepare_input;
use crate::transport::{HttpTransport, Transport};
use crate::{AUTO, LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

const DETECT_PATH: &str = "/detect";
const TRANSLATE_PATH: &str = "/translate";
const PROVIDER: &str = "libretranslate";

#[derive(Deserialize)]
struct Detection {
    language: Option<String>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// LibreTranslate-compatible client on top of a failover pool
pub struct LibreTranslator {
    dispatcher: Dispatcher,
    max_chars: usize,
}

impl LibreTranslator {
    pub fn new(dispatcher: Dispatcher, max_chars: usize) -> Self {
        Self {
            dispatcher,
            max_chars,
        }
    }

    /// Build the reqwest-backed client from config
    pub fn from_config(
        network: &NetworkConfig,
        translator: &TranslatorConfig,
    ) -> Result<Self, TranslateError> {
        let timeout = (network.timeout_seconds > 0)
            .then(|| Duration::from_secs(network.timeout_seconds));
        let transport: Arc<dyn Transport> =
            Arc::new(HttpTransport::new(timeout, &network.user_agent)?);
        let dispatcher = Dispatcher::new(network.endpoints.iter().cloned(), transport)?;

        Ok(Self::new(dispatcher, translator.max_chars))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// First detected language, `None` on any failure or odd payload
    pub async fn detect(&self, text: &str) -> Option<LanguageCode> {
        let text = prepare_input(text, self.max_chars);

        let value = match self.dispatcher.dispatch(DETECT_PATH, &json!({ "q": text })).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Detect failed: {e}");
                return None;
            }
        };

        // Only the first entry counts, whatever follows it
        let Some(first) = value.as_array().and_then(|entries| entries.first()) else {
            tracing::warn!("Unexpected detect response: {value}");
            return None;
        };

        let detection: Detection = match serde_json::from_value(first.clone()) {
            Ok(detection) => detection,
            Err(e) => {
                tracing::warn!("Unexpected detect entry {first}: {e}");
                return None;
            }
        };

        detection.language.filter(|language| !language.is_empty())
    }

    pub async fn translate_text(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, TranslateError> {
        let text = prepare_input(text, self.max_chars);

        if source == target {
            return Ok(self.passthrough(text, source, target, None));
        }

        let mut detected = None;
        let mut effective_source = source.to_string();

        if source == AUTO {
            detected = self.detect(text).await;
            match &detected {
                Some(language) => {
                    tracing::debug!("Detected source language: {language}");
                    effective_source = language.clone();
                }
                None => tracing::debug!("No detection, passing {AUTO} through"),
            }

            if effective_source == target {
                return Ok(self.passthrough(text, &effective_source, target, detected));
            }
        }

        let body = json!({
            "q": text,
            "source": effective_source,
            "target": target,
            "format": "text",
        });
        let value = self.dispatcher.dispatch(TRANSLATE_PATH, &body).await?;

        let response: TranslateResponse = serde_json::from_value(value.clone()).map_err(|e| {
            tracing::warn!("Unexpected translate response: {value}");
            TranslateError::UnexpectedResponse(format!("{e}: {value}"))
        })?;

        Ok(Translation {
            text: response.translated_text,
            from: effective_source,
            to: target.to_string(),
            provider: PROVIDER.to_string(),
            detected,
            passthrough: false,
        })
    }

    fn passthrough(
        &self,
        text: &str,
        from: &str,
        to: &str,
        detected: Option<LanguageCode>,
    ) -> Translation {
        Translation {
            text: text.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            provider: PROVIDER.to_string(),
            detected,
            passthrough: true,
        }
    }
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.translate_text(text, &from, &to).await
    }

    async fn detect_language(&self, text: &str) -> Option<LanguageCode> {
        self.detect(text).await
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "LibreTranslate".to_string(),
            endpoints: self.dispatcher.endpoints().to_vec(),
        }
    }
}
