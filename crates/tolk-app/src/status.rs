use kanal::AsyncSender;
use tolk_types::{AppEvent, StatusUpdate};

/// Typed sender for everything the host renders
#[derive(Clone)]
pub struct HostSink {
    tx: AsyncSender<AppEvent>,
}

impl HostSink {
    pub fn new(tx: AsyncSender<AppEvent>) -> Self {
        Self { tx }
    }

    pub async fn status(&self, update: StatusUpdate) -> anyhow::Result<()> {
        self.send(AppEvent::StatusUpdate(update)).await
    }

    pub async fn output(&self, text: impl Into<String>) -> anyhow::Result<()> {
        self.send(AppEvent::ShowOutput(text.into())).await
    }

    pub async fn input(&self, text: impl Into<String>) -> anyhow::Result<()> {
        self.send(AppEvent::ShowInput(text.into())).await
    }

    pub async fn detected(&self, language: Option<String>) -> anyhow::Result<()> {
        self.send(AppEvent::ShowDetected(language)).await
    }

    pub async fn char_count(&self, used: usize, max: usize) -> anyhow::Result<()> {
        self.send(AppEvent::CharCount { used, max }).await
    }

    pub async fn languages(&self, source: &str, target: &str) -> anyhow::Result<()> {
        self.send(AppEvent::LanguagesChanged {
            source: source.to_string(),
            target: target.to_string(),
        })
        .await
    }

    pub async fn send(&self, event: AppEvent) -> anyhow::Result<()> {
        self.tx.send(event).await?;
        Ok(())
    }
}
