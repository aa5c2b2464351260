use tolk_types::AppEvent;

pub const HELP: &str = "\
Type text to translate it. Commands:
  :from <code>   source language (`auto` to detect)
  :to <code>     target language
  :swap          swap languages and texts
  :now           translate immediately
  :copy          copy the translation to the clipboard
  :save          save the translation to a file
  :clear         clear input and output
  :help          show this help
  :quit          exit
Start a line with `::` to translate text beginning with `:`.";

#[derive(Debug)]
pub enum Command {
    Event(AppEvent),
    Help,
    Unknown(String),
    Empty,
}

/// Turn one line of terminal input into a command
pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    if let Some(literal) = trimmed.strip_prefix("::") {
        return Command::Event(AppEvent::TextInput(format!(":{literal}")));
    }

    let Some(rest) = trimmed.strip_prefix(':') else {
        return Command::Event(AppEvent::TextInput(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let event = match (name, arg) {
        ("from", code) if !code.is_empty() => AppEvent::SetSourceLanguage(code.to_lowercase()),
        ("to", code) if !code.is_empty() => AppEvent::SetTargetLanguage(code.to_lowercase()),
        ("swap", "") => AppEvent::SwapLanguages,
        ("now" | "translate", "") => AppEvent::TranslateNow,
        ("copy", "") => AppEvent::CopyOutput,
        ("save", "") => AppEvent::SaveOutput,
        ("clear", "") => AppEvent::Clear,
        ("quit" | "q" | "exit", "") => AppEvent::Quit,
        ("help" | "h" | "?", "") => return Command::Help,
        _ => return Command::Unknown(trimmed.to_string()),
    };

    Command::Event(event)
}
