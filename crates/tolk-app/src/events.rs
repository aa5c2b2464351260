use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tolk_translator::Translator;
use tolk_types::{AppEvent, StatusUpdate};

use crate::debounce::Debouncer;
use crate::state::AppState;
use crate::status::HostSink;

pub const READY: &str = "Ready";

pub mod clear;
pub mod export;
pub mod languages;
pub mod text_input;
pub mod translate;

use clear::handle_clear;
use export::{handle_copy, handle_save};
use languages::{Side, handle_set_language, handle_swap};
use text_input::handle_text_input;
use translate::translate_now;

/// Everything an event handler needs
pub struct EventContext {
    pub state: Arc<AppState>,
    pub translator: Arc<dyn Translator>,
    pub sink: HostSink,
    pub debouncer: Debouncer,
    pub in_flight: JoinSet<()>,
}

impl EventContext {
    pub fn new(
        state: Arc<AppState>,
        translator: Arc<dyn Translator>,
        sink: HostSink,
        debounce: Duration,
    ) -> Self {
        Self {
            state,
            translator,
            sink,
            debouncer: Debouncer::new(debounce),
            in_flight: JoinSet::new(),
        }
    }

    /// Translate right away, superseding any pending debounced run
    pub fn spawn_translation(&mut self) {
        self.debouncer.cancel();
        while self.in_flight.try_join_next().is_some() {}
        self.in_flight.spawn(run_translation(
            self.state.clone(),
            self.translator.clone(),
            self.sink.clone(),
        ));
    }

    /// Wait for the debounced run, fired now if still pending, and all others
    pub async fn finish_pending(&mut self) {
        if let Some(handle) = self.debouncer.flush() {
            let _ = handle.await;
        }
        while self.in_flight.join_next().await.is_some() {}
    }

    /// Translate once input has been quiet for the debounce period
    pub fn schedule_translation(&mut self) {
        self.debouncer.schedule(run_translation(
            self.state.clone(),
            self.translator.clone(),
            self.sink.clone(),
        ));
    }
}

async fn run_translation(state: Arc<AppState>, translator: Arc<dyn Translator>, sink: HostSink) {
    if let Err(e) = translate_now(state, translator, sink).await {
        tracing::error!("Translation task failed: {e}");
    }
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    translator: Arc<dyn Translator>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let debounce = {
        let config = state.config.read().await;
        Duration::from_millis(config.ui.debounce_ms)
    };

    let mut ctx = EventContext::new(state, translator, HostSink::new(app_to_ui_tx), debounce);
    let result = run_events(&mut ctx, &ui_to_app_rx).await;

    // The UI stops on Quit, so it goes out even when the loop failed
    ctx.finish_pending().await;
    ctx.sink.send(AppEvent::Quit).await?;

    result
}

async fn run_events(
    ctx: &mut EventContext,
    ui_to_app_rx: &AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    {
        let session = ctx.state.session.read().await;
        ctx.sink.languages(&session.source, &session.target).await?;
    }
    ctx.sink.send(AppEvent::BackendReady).await?;
    ctx.sink.status(StatusUpdate::info(READY)).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;
        tracing::debug!("[EVENT_LOOP] Event received: {:?}", std::mem::discriminant(&event));

        if handle_events(ctx, event).await?.is_break() {
            tracing::info!("[EVENT_LOOP] Quit requested");
            return Ok(());
        }
    }
}

pub async fn handle_events(
    ctx: &mut EventContext,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    match event {
        AppEvent::TextInput(text) => {
            handle_text_input(ctx, text).await?;
        }
        AppEvent::SetSourceLanguage(code) => {
            handle_set_language(ctx, Side::Source, code).await?;
        }
        AppEvent::SetTargetLanguage(code) => {
            handle_set_language(ctx, Side::Target, code).await?;
        }
        AppEvent::SwapLanguages => {
            handle_swap(ctx).await?;
        }
        AppEvent::TranslateNow => {
            ctx.spawn_translation();
        }
        AppEvent::CopyOutput => {
            handle_copy(ctx).await?;
        }
        AppEvent::SaveOutput => {
            handle_save(ctx).await?;
        }
        AppEvent::Clear => {
            handle_clear(ctx).await?;
        }
        AppEvent::Quit => {
            return Ok(ControlFlow::Break(()));
        }
        AppEvent::StatusUpdate(_)
        | AppEvent::ShowOutput(_)
        | AppEvent::ShowDetected(_)
        | AppEvent::ShowInput(_)
        | AppEvent::CharCount { .. }
        | AppEvent::LanguagesChanged { .. }
        | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(ControlFlow::Continue(()))
}
