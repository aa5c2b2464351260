use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use tolk_types::AppEvent;

use crate::commands::{self, Command, HELP};

/// Turn terminal lines into app events until input closes or we are cancelled
pub async fn watcher_io(
    lines: AsyncReceiver<String>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Input watcher stopping");
                break;
            }
            line = lines.recv() => line,
        };

        let Ok(line) = line else {
            tracing::info!("Input closed");
            ui_to_app_tx.send(AppEvent::Quit).await?;
            break;
        };

        match commands::parse(&line) {
            Command::Event(event) => ui_to_app_tx.send(event).await?,
            Command::Help => eprintln!("{HELP}"),
            Command::Unknown(command) => eprintln!("Unknown command {command}, try :help"),
            Command::Empty => {}
        }
    }

    Ok(())
}
