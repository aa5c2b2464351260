use serde::{Deserialize, Serialize};

pub const AUTO_LANGUAGE: &str = "auto";
pub const DEFAULT_MAX_CHARS: usize = 5000;

fn default_from_lang() -> String {
    AUTO_LANGUAGE.to_string()
}

fn default_to_lang() -> String {
    "en".to_string()
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    /// Input is cut to this many characters before it is sent
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            max_chars: default_max_chars(),
        }
    }
}

impl TranslatorConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let from_lang = lookup("TOLK_FROM").unwrap_or_else(default_from_lang);
        let to_lang = lookup("TOLK_TO").unwrap_or_else(default_to_lang);
        let max_chars = lookup("TOLK_MAX_CHARS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_chars);

        Self {
            from_lang,
            to_lang,
            max_chars,
        }
    }
}
