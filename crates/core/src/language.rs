//! Site languages and the handful of server-rendered strings that depend on them.

use serde::{Deserialize, Serialize};

/// A display language supported by the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// Parse a language code loosely (`"hi"`, `"HI"`, `"hi-IN"`). Anything
    /// unrecognised falls back to English.
    pub fn from_code(code: &str) -> Self {
        let primary = code.split(['-', '_']).next().unwrap_or("");
        if primary.eq_ignore_ascii_case("hi") {
            Language::Hi
        } else {
            Language::En
        }
    }

    /// Text shown in place of a price the owner does not want published.
    pub fn contact_for_price(self) -> &'static str {
        match self {
            Language::En => "Contact for Price",
            Language::Hi => "मूल्य के लिए संपर्क करें",
        }
    }
}
