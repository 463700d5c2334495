//! Webhook rules — validation for the outgoing webhook URL list.
//!
//! The list is edited as newline-delimited text and persisted as an ordered
//! sequence. Blank lines are not entries: they are ignored by validation
//! but kept when splitting, so the persisted sequence mirrors the text.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern every non-blank entry must fully match.
pub const DEFAULT_PATTERN: &str = "https?://.*";

/// Maximum number of non-blank entries.
pub const MAX_ENTRIES: usize = 64;

/// Maximum length of the encoded (newline-joined) text, in characters.
pub const MAX_LENGTH: usize = 1000;

/// Separator between entries in the encoded text.
pub const DELIMITER: char = '\n';

static DEFAULT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&anchored(DEFAULT_PATTERN)).expect("default webhook pattern is a valid regex")
});

fn anchored(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

/// Why a webhook list was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook text exceeds {max} characters")]
    TooLong { max: usize },

    #[error("more than {max} webhooks")]
    TooManyEntries { max: usize },

    #[error("invalid webhook URL: {url}")]
    InvalidUrl { url: String },
}

/// Join the persisted sequence into the text edited by the widget.
#[must_use]
pub fn join_urls(urls: &[String]) -> String {
    urls.join("\n")
}

/// Split widget text into the persisted sequence.
///
/// Plain split: no trimming, no deduplication, `""` yields `[""]`.
#[must_use]
pub fn split_urls(text: &str) -> Vec<String> {
    text.split(DELIMITER).map(str::to_string).collect()
}

/// Limits applied to a webhook list.
#[derive(Debug, Clone)]
pub struct WebhookRules {
    pattern: Regex,
    source: String,
    pub max_entries: usize,
    pub max_length: usize,
}

impl Default for WebhookRules {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_REGEX.clone(),
            source: DEFAULT_PATTERN.to_string(),
            max_entries: MAX_ENTRIES,
            max_length: MAX_LENGTH,
        }
    }
}

impl WebhookRules {
    /// Build rules with a custom URL pattern. The pattern must match an
    /// entry in full.
    ///
    /// # Errors
    ///
    /// Returns the regex compile error when `pattern` is invalid.
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(&anchored(pattern))?,
            source: pattern.to_string(),
            ..Self::default()
        })
    }

    #[must_use]
    pub fn max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }

    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// The unanchored pattern as configured.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Whether a single entry matches the URL pattern.
    #[must_use]
    pub fn is_valid_url(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }

    /// Validate newline-delimited text.
    ///
    /// # Errors
    ///
    /// Length is checked first, then the entry count, then each entry.
    pub fn check_text(&self, text: &str) -> Result<(), WebhookError> {
        if text.chars().count() > self.max_length {
            return Err(WebhookError::TooLong {
                max: self.max_length,
            });
        }
        let entries: Vec<&str> = text
            .split(DELIMITER)
            .filter(|line| !line.trim().is_empty())
            .collect();
        if entries.len() > self.max_entries {
            return Err(WebhookError::TooManyEntries {
                max: self.max_entries,
            });
        }
        if let Some(bad) = entries.iter().find(|line| !self.is_valid_url(line)) {
            return Err(WebhookError::InvalidUrl {
                url: (*bad).to_string(),
            });
        }
        Ok(())
    }

    /// Validate a persisted sequence (checked in its encoded form).
    ///
    /// # Errors
    ///
    /// See [`check_text`](Self::check_text).
    pub fn check_urls(&self, urls: &[String]) -> Result<(), WebhookError> {
        self.check_text(&join_urls(urls))
    }
}
