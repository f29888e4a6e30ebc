//! Viewer configuration.
//!
//! Builder-style configuration for a render run, usable from the library
//! without any CLI framework involved.
//!
//! # Example
//!
//! ```rust
//! use chatview::config::ViewerConfig;
//!
//! let config = ViewerConfig::new()
//!     .with_me("Ana")
//!     .with_title("Family chat");
//! assert_eq!(config.me.as_deref(), Some("Ana"));
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for assembling a conversation page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// The viewer's own sender name; `None` selects positional inference.
    pub me: Option<String>,

    /// Page header and document title prefix.
    pub title: String,

    /// `lang` attribute on the document element.
    pub page_lang: String,

    /// Language code used when detection fails or yields too little sample.
    pub fallback_language: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            me: None,
            title: "WhatsApp chat".to_string(),
            page_lang: "pt-BR".to_string(),
            fallback_language: "pt".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the viewer's own sender name (exact, case-sensitive match).
    #[must_use]
    pub fn with_me(mut self, me: impl Into<String>) -> Self {
        self.me = Some(me.into());
        self
    }

    /// Sets the page header / title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the document `lang` attribute.
    #[must_use]
    pub fn with_page_lang(mut self, lang: impl Into<String>) -> Self {
        self.page_lang = lang.into();
        self
    }

    /// Sets the fallback language code for transcription.
    #[must_use]
    pub fn with_fallback_language(mut self, code: impl Into<String>) -> Self {
        self.fallback_language = code.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::new();
        assert!(config.me.is_none());
        assert_eq!(config.title, "WhatsApp chat");
        assert_eq!(config.fallback_language, "pt");
    }

    #[test]
    fn test_builder() {
        let config = ViewerConfig::new()
            .with_me("Ana")
            .with_title("Trip planning")
            .with_page_lang("en")
            .with_fallback_language("en");
        assert_eq!(config.me.as_deref(), Some("Ana"));
        assert_eq!(config.title, "Trip planning");
        assert_eq!(config.page_lang, "en");
        assert_eq!(config.fallback_language, "en");
    }
}
