//! Failover over a pool of interchangeable endpoints.
//!
//! Every call walks the whole pool once, starting at the endpoint that last
//! answered successfully. Failed endpoints are only skipped for the current
//! call, so a recovered mirror is picked up again as soon as the preferred one
//! starts failing.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;
use serde_json::Value;

use crate::TranslateError;
use crate::transport::Transport;

/// Diagnostic for one failed call to one endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attempt {
    pub url: String,
    #[serde(flatten)]
    pub failure: AttemptFailure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttemptFailure {
    /// Endpoint answered with a non-2xx status
    Status { status: u16, body: String },
    /// Endpoint could not be reached
    Transport { error: String },
    /// Endpoint answered 2xx with a body that is not JSON
    Decode { error: String },
}

pub(crate) fn attempts_json(attempts: &[Attempt]) -> String {
    serde_json::to_string(attempts).unwrap_or_else(|_| format!("{attempts:?}"))
}

pub struct Dispatcher {
    endpoints: Vec<String>,
    preferred: AtomicUsize,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(
        endpoints: impl IntoIterator<Item = impl Into<String>>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, TranslateError> {
        let endpoints: Vec<String> = endpoints
            .into_iter()
            .map(|e| e.into().trim_end_matches('/').to_string())
            .collect();

        if endpoints.is_empty() {
            return Err(TranslateError::NoEndpoints);
        }

        Ok(Self {
            endpoints,
            preferred: AtomicUsize::new(0),
            transport,
        })
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Index of the endpoint the next call starts with
    pub fn preferred(&self) -> usize {
        self.preferred.load(Ordering::Relaxed)
    }

    /// Round robin over the whole pool starting at the preferred endpoint
    pub fn trial_order(&self) -> Vec<usize> {
        let start = self.preferred();
        let n = self.endpoints.len();
        (0..n).map(|i| (start + i) % n).collect()
    }

    /// POST `body` to `path` on each endpoint until one succeeds
    pub async fn dispatch(&self, path: &str, body: &Value) -> Result<Value, TranslateError> {
        let mut attempts = Vec::with_capacity(self.endpoints.len());

        for index in self.trial_order() {
            let url = format!("{}{}", self.endpoints[index], path);
            tracing::debug!("Trying {url}");

            let response = match self.transport.post_json(&url, body).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!("Network error for {url}: {e}");
                    attempts.push(Attempt {
                        url,
                        failure: AttemptFailure::Transport {
                            error: e.to_string(),
                        },
                    });
                    continue;
                }
            };

            if !response.is_success() {
                tracing::warn!("Server {url} returned status {}", response.status);
                attempts.push(Attempt {
                    url,
                    failure: AttemptFailure::Status {
                        status: response.status,
                        body: response.body,
                    },
                });
                continue;
            }

            self.preferred.store(index, Ordering::Relaxed);

            match serde_json::from_str::<Value>(&response.body) {
                Ok(json) => {
                    tracing::info!("Success from {url}");
                    return Ok(json);
                }
                Err(e) => {
                    tracing::warn!("Invalid JSON from {url}: {e}");
                    attempts.push(Attempt {
                        url,
                        failure: AttemptFailure::Decode {
                            error: e.to_string(),
                        },
                    });
                }
            }
        }

        Err(TranslateError::AllEndpointsFailed { attempts })
    }
}
