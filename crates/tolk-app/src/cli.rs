use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tolk_config::Config;

#[derive(Debug, Parser)]
#[command(name = "tolk", version, about = "Translate text through a pool of LibreTranslate mirrors")]
pub struct Cli {
    /// JSON config file, defaults plus `TOLK_*` variables otherwise
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Endpoint base url, repeat to build the failover pool
    #[arg(short = 'e', long = "endpoint", value_name = "URL")]
    pub endpoints: Vec<String>,

    /// Source language code or `auto`
    #[arg(short, long)]
    pub from: Option<String>,

    /// Target language code
    #[arg(short, long)]
    pub to: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive terminal translator (default)
    Interactive,
    /// Translate once and print the result, reads stdin when no text is given
    Translate { text: Vec<String> },
    /// Detect the language of the text
    Detect { text: Vec<String> },
}

impl Cli {
    /// Flags win over the config file and the environment
    pub fn apply_overrides(&self, config: &mut Config) {
        if !self.endpoints.is_empty() {
            config.network.endpoints = self.endpoints.clone();
        }
        if let Some(from) = &self.from {
            config.translator.from_lang = from.to_lowercase();
        }
        if let Some(to) = &self.to {
            config.translator.to_lang = to.to_lowercase();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pool_and_subcommand() {
        let cli = Cli::try_parse_from([
            "tolk", "-e", "http://a.local", "--endpoint", "http://b.local", "--to", "DE",
            "translate", "guten", "tag",
        ])
        .unwrap();

        assert_eq!(cli.endpoints, vec!["http://a.local", "http://b.local"]);
        assert!(matches!(&cli.command, Some(Command::Translate { text }) if text.join(" ") == "guten tag"));

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.network.endpoints, vec!["http://a.local", "http://b.local"]);
        assert_eq!(config.translator.to_lang, "de");
        assert_eq!(config.translator.from_lang, "auto");
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["tolk"]).unwrap();
        assert!(cli.command.is_none());

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }
}
