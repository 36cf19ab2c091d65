//! Shared query parameter types for API handlers.

use apnaghar_core::language::Language;
use serde::Deserialize;

/// `?lang=en|hi` selecting the language of server-rendered strings.
#[derive(Debug, Default, Deserialize)]
pub struct LangParams {
    pub lang: Option<String>,
}

impl LangParams {
    pub fn language(&self) -> Language {
        self.lang
            .as_deref()
            .map(Language::from_code)
            .unwrap_or_default()
    }
}

/// `?show_all=true` to include inactive rows on public listings.
#[derive(Debug, Deserialize)]
pub struct ShowAllParams {
    #[serde(default)]
    pub show_all: bool,
}
