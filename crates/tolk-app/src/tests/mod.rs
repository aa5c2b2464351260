use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tolk_config::Config;
use tolk_translator::mock::MockTransport;
use tolk_translator::{Dispatcher, LibreTranslator, Translator};
use tolk_types::{AppEvent, StatusKind};

use crate::events::{READY, event_loop};
use crate::state::AppState;

mod debounce_tests;
mod input_channel_tests;

const WAIT: Duration = Duration::from_secs(2);

/// Event loop wired to a scripted transport, seen from the host side
pub struct Harness {
    pub to_app: AsyncSender<AppEvent>,
    pub from_app: AsyncReceiver<AppEvent>,
    pub mock: Arc<MockTransport>,
    pub state: Arc<AppState>,
    pub task: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    pub async fn start(config: Config, mock: MockTransport) -> Self {
        let mock = Arc::new(mock);
        let dispatcher = Dispatcher::new(config.network.endpoints.iter().cloned(), mock.clone())
            .expect("endpoints");
        let translator: Arc<dyn Translator> =
            Arc::new(LibreTranslator::new(dispatcher, config.translator.max_chars));

        let state = Arc::new(AppState::new(config));
        let (to_app, app_rx) = kanal::unbounded_async();
        let (app_tx, from_app) = kanal::unbounded_async();
        let task = tokio::spawn(event_loop(state.clone(), translator, app_rx, app_tx));

        let harness = Self {
            to_app,
            from_app,
            mock,
            state,
            task,
        };
        assert!(matches!(harness.next().await, AppEvent::LanguagesChanged { .. }));
        assert!(matches!(harness.next().await, AppEvent::BackendReady));
        match harness.next().await {
            AppEvent::StatusUpdate(update) => {
                assert_eq!(update.kind, StatusKind::Info);
                assert_eq!(update.message, READY);
            }
            other => panic!("Wrong event type: {other:?}"),
        }
        harness
    }

    pub async fn send(&self, event: AppEvent) {
        self.to_app.send(event).await.expect("event loop gone");
    }

    pub async fn next(&self) -> AppEvent {
        match timeout(WAIT, self.from_app.recv()).await {
            Ok(Ok(event)) => event,
            Ok(Err(e)) => panic!("Channel error: {e}"),
            Err(_) => panic!("Timeout waiting for app event"),
        }
    }

    /// Skip events until one matches
    pub async fn wait_for(&self, pred: impl Fn(&AppEvent) -> bool) -> AppEvent {
        loop {
            let event = self.next().await;
            if pred(&event) {
                return event;
            }
        }
    }

    /// Next status line that is not the progress placeholder
    pub async fn final_status(&self) -> (StatusKind, String) {
        loop {
            if let AppEvent::StatusUpdate(update) = self.next().await
                && update.kind != StatusKind::Progress
            {
                return (update.kind, update.message);
            }
        }
    }

    /// Output texts up to and including the next settled status
    pub async fn outputs_until_status(&self) -> (Vec<String>, StatusKind, String) {
        let mut outputs = Vec::new();
        loop {
            match self.next().await {
                AppEvent::ShowOutput(text) => outputs.push(text),
                AppEvent::StatusUpdate(update) if update.kind != StatusKind::Progress => {
                    return (outputs, update.kind, update.message);
                }
                _ => {}
            }
        }
    }

    pub async fn wait_calls(&self, count: usize) {
        timeout(WAIT, async {
            while self.mock.call_count() < count {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("transport never called");
    }

    /// Nothing else arrives within `window`
    pub async fn assert_quiet(&self, window: Duration) {
        if let Ok(Ok(event)) = timeout(window, self.from_app.recv()).await {
            panic!("Unexpected event {event:?}");
        }
    }
}

pub fn config(from: &str, to: &str, debounce_ms: u64) -> Config {
    let mut config = Config::default();
    config.network.endpoints = vec!["http://a.test".to_string(), "http://b.test".to_string()];
    config.translator.from_lang = from.to_string();
    config.translator.to_lang = to.to_string();
    config.ui.debounce_ms = debounce_ms;
    config
}
