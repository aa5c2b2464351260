pub mod dispatcher;
pub mod libre;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod text;
pub mod transport;

pub use dispatcher::{Attempt, AttemptFailure, Dispatcher};
pub use libre::LibreTranslator;
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};

pub type LanguageCode = String;

/// Sentinel source language asking the service to guess
pub use tolk_config::translator::AUTO_LANGUAGE as AUTO;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Detect language of text, `None` when nothing usable came back
    async fn detect_language(&self, text: &str) -> Option<LanguageCode>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    /// Effective source language sent to the service
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
    /// Result of auto detection, if it ran and found something
    pub detected: Option<LanguageCode>,
    /// Source and target matched, text returned without a network call
    pub passthrough: bool,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("no translation endpoints configured")]
    NoEndpoints,

    #[error("all translation servers failed: {}", dispatcher::attempts_json(.attempts))]
    AllEndpointsFailed { attempts: Vec<Attempt> },

    #[error("unexpected response format: {0}")]
    UnexpectedResponse(String),

    #[error("transport setup failed: {0}")]
    Transport(#[from] TransportError),
}
