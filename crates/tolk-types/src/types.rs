#[derive(Debug, Clone)]
pub enum AppEvent {
    // Host -> app
    TextInput(String),
    SetSourceLanguage(String),
    SetTargetLanguage(String),
    SwapLanguages,
    TranslateNow,
    CopyOutput,
    SaveOutput,
    Clear,
    Quit,

    // App -> host
    StatusUpdate(StatusUpdate),
    ShowOutput(String),
    ShowDetected(Option<String>),
    ShowInput(String),
    CharCount {
        used: usize,
        max: usize,
    },
    LanguagesChanged {
        source: String,
        target: String,
    },
    BackendReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Progress,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub message: String,
    pub kind: StatusKind,
}

impl StatusUpdate {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn progress(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Progress,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }

    /// Empty status line
    pub fn cleared() -> Self {
        Self::info("")
    }

    pub fn is_cleared(&self) -> bool {
        self.message.is_empty()
    }
}

