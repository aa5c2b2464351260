use std::io::{self, Write};

use kanal::AsyncReceiver;
use tolk_types::{AppEvent, StatusKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One rendered line of terminal output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub stream: Stream,
    pub text: String,
}

impl Line {
    fn out(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Stdout,
            text: text.into(),
        }
    }

    fn err(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Stderr,
            text: text.into(),
        }
    }
}

/// Translations go to stdout, everything else to stderr
pub fn render(event: &AppEvent, hints: bool) -> Option<Line> {
    match event {
        AppEvent::StatusUpdate(update) if update.is_cleared() => None,
        AppEvent::StatusUpdate(update) => {
            let prefix = match update.kind {
                StatusKind::Info => "·",
                StatusKind::Progress => "…",
                StatusKind::Error => "!",
            };
            Some(Line::err(format!("{prefix} {}", update.message)))
        }
        AppEvent::ShowOutput(text) if text.is_empty() => None,
        AppEvent::ShowOutput(text) => Some(Line::out(text.clone())),
        AppEvent::ShowDetected(Some(language)) => Some(Line::err(format!("Detected: {language}"))),
        AppEvent::ShowInput(text) => Some(Line::err(format!("Input: {text}"))),
        AppEvent::CharCount { used, max } if hints => Some(Line::err(format!("{used} / {max}"))),
        AppEvent::LanguagesChanged { source, target } => {
            Some(Line::err(format!("Languages: {source} -> {target}")))
        }
        AppEvent::BackendReady if hints => {
            Some(Line::err("Type text to translate, :help for commands."))
        }
        _ => None,
    }
}

/// Print what the app sends until it says quit
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>, hints: bool) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        if matches!(event, AppEvent::Quit) {
            break;
        }

        let Some(line) = render(&event, hints) else {
            continue;
        };

        match line.stream {
            Stream::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", line.text)?;
                stdout.flush()?;
            }
            Stream::Stderr => {
                let mut stderr = io::stderr().lock();
                writeln!(stderr, "{}", line.text)?;
            }
        }
    }

    tracing::debug!("UI loop stopping");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tolk_types::StatusUpdate;

    use super::*;

    #[test]
    fn translation_goes_to_stdout() {
        assert_eq!(
            render(&AppEvent::ShowOutput("Hello".into()), false),
            Some(Line::out("Hello"))
        );
    }

    #[test]
    fn cleared_status_and_empty_output_print_nothing() {
        assert_eq!(render(&AppEvent::StatusUpdate(StatusUpdate::cleared()), true), None);
        assert_eq!(render(&AppEvent::ShowOutput(String::new()), true), None);
        assert_eq!(render(&AppEvent::ShowDetected(None), true), None);
    }

    #[test]
    fn errors_are_marked() {
        assert_eq!(
            render(&AppEvent::StatusUpdate(StatusUpdate::error("Nothing to copy")), false),
            Some(Line::err("! Nothing to copy"))
        );
    }

    #[test]
    fn hints_only_when_interactive() {
        let count = AppEvent::CharCount { used: 3, max: 5000 };
        assert_eq!(render(&count, false), None);
        assert_eq!(render(&count, true), Some(Line::err("3 / 5000")));
        assert_eq!(render(&AppEvent::BackendReady, false), None);
    }

    #[test]
    fn ready_status_prints_without_hints() {
        assert_eq!(
            render(&AppEvent::StatusUpdate(StatusUpdate::info("Ready")), false),
            Some(Line::err("· Ready"))
        );
    }

    #[test]
    fn host_to_app_events_are_not_rendered() {
        assert_eq!(render(&AppEvent::TextInput("x".into()), true), None);
        assert_eq!(render(&AppEvent::Quit, true), None);
    }
}
