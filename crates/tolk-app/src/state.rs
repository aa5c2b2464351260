use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tolk_config::Config;
use tokio::sync::RwLock;

/// What the host currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub input: String,
    /// Last translation result, never a placeholder or error text
    pub output: String,
    pub source: String,
    pub target: String,
    pub detected: Option<String>,
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub session: RwLock<Session>,
    /// Id of the newest translation run, older runs drop their results
    generation: AtomicU64,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session = Session {
            source: config.translator.from_lang.clone(),
            target: config.translator.to_lang.clone(),
            ..Default::default()
        };

        Self {
            config: Arc::new(RwLock::new(config)),
            session: RwLock::new(session),
            generation: AtomicU64::new(0),
        }
    }

    /// Start a new run, making every earlier one stale
    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current_generation() == generation
    }
}
