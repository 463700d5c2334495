//! TOML-backed [`Localizer`].
//!
//! A catalog file maps message ids to translated text:
//!
//! ```toml
//! locale = "fr"
//!
//! [messages]
//! "automation.section.run_starts" = "Quand un run démarre"
//! ```
//!
//! Ids missing from the catalog fall back to the English default.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use playbooks_app::messages::{self, MessageDescriptor};
use playbooks_app::ports::Localizer;

use crate::error::MemoryAdapterError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    messages: HashMap<String, String>,
}

/// Localizer reading translations from a TOML message catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogLocalizer {
    locale: Option<String>,
    messages: HashMap<String, String>,
}

impl CatalogLocalizer {
    /// Parse a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryAdapterError::Parse`] when the document is not a
    /// valid catalog.
    pub fn from_toml_str(raw: &str) -> Result<Self, MemoryAdapterError> {
        let file: CatalogFile = toml::from_str(raw)?;
        for id in file.messages.keys() {
            if messages::find(id).is_none() {
                tracing::warn!(message_id = %id, "catalog entry matches no known message");
            }
        }
        Ok(Self {
            locale: file.locale,
            messages: file.messages,
        })
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryAdapterError::Read`] when the file cannot be read,
    /// or [`MemoryAdapterError::Parse`] when it is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self, MemoryAdapterError> {
        let raw = std::fs::read_to_string(path).map_err(|source| MemoryAdapterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            locale = catalog.locale().unwrap_or("-"),
            entries = catalog.messages.len(),
            "message catalog loaded"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

impl Localizer for CatalogLocalizer {
    fn format(&self, message: &MessageDescriptor) -> String {
        self.messages
            .get(message.id)
            .cloned()
            .unwrap_or_else(|| message.default_message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRENCH: &str = r#"
locale = "fr"

[messages]
"automation.section.run_starts" = "Quand un run démarre"
"automation.webhook.invalid" = "URLs de webhook invalides"
"#;

    #[test]
    fn should_translate_known_entries() {
        let catalog = CatalogLocalizer::from_toml_str(FRENCH).unwrap();
        assert_eq!(catalog.locale(), Some("fr"));
        assert_eq!(catalog.format(&messages::RUN_STARTS), "Quand un run démarre");
        assert_eq!(
            catalog.format(&messages::WEBHOOK_INVALID),
            "URLs de webhook invalides"
        );
    }

    #[test]
    fn should_fall_back_to_default_text() {
        let catalog = CatalogLocalizer::from_toml_str(FRENCH).unwrap();
        assert_eq!(
            catalog.format(&messages::MEMBER_JOINS),
            "When a new member joins the channel"
        );
    }

    #[test]
    fn should_accept_empty_catalog() {
        let catalog = CatalogLocalizer::from_toml_str("").unwrap();
        assert_eq!(catalog.locale(), None);
        assert_eq!(catalog.format(&messages::RUN_STARTS), "When a run starts");
    }

    #[test]
    fn should_reject_malformed_catalog() {
        let result = CatalogLocalizer::from_toml_str("[messages]\nkey = 42");
        assert!(matches!(result, Err(MemoryAdapterError::Parse(_))));
    }

    #[test]
    fn should_report_missing_file() {
        let result = CatalogLocalizer::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(MemoryAdapterError::Read { .. })));
    }
}
