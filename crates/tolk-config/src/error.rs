use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("at least one translation endpoint must be configured")]
    NoEndpoints,

    #[error("endpoint is not an http(s) url: {0}")]
    InvalidEndpoint(String),

    #[error("max_chars must be greater than 0")]
    ZeroMaxChars,

    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
