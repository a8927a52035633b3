//! Controller configuration.

use std::time::Duration;

use crate::color::Rgba;
use crate::error::Result;
use crate::names::KnownNames;
use crate::style::Style;

/// Configuration for an [`EditController`](crate::EditController).
#[derive(Clone, Debug)]
pub struct EditorOptions {
    /// Names whose bracketed form renders as a token.
    pub known_names: KnownNames,
    /// Style applied to token segments.
    pub token_style: Style,
    /// How long a caret cached on blur stays usable by an insert trigger.
    pub caret_cache_ttl: Duration,
    /// Text rendered once when the controller is mounted.
    pub initial_text: String,
}

impl EditorOptions {
    /// Default lifetime of a cached caret.
    pub const DEFAULT_CARET_CACHE_TTL: Duration = Duration::from_secs(1);
    /// Default mounted text.
    pub const DEFAULT_INITIAL_TEXT: &'static str =
        "[Alice] went to Litang, [Bob] went to Lijiang.";
    /// Default known names.
    pub const DEFAULT_NAMES: [&'static str; 3] = ["Alice", "Bob", "Charlie"];

    /// Replace the known names.
    #[must_use]
    pub fn with_known_names(mut self, names: KnownNames) -> Self {
        self.known_names = names;
        self
    }

    /// Replace the token style.
    #[must_use]
    pub fn with_token_style(mut self, style: Style) -> Self {
        self.token_style = style;
        self
    }

    /// Set the token foreground from a hex string such as `#1E90FF`.
    pub fn with_token_color_hex(mut self, hex: &str) -> Result<Self> {
        let color: Rgba = hex.parse()?;
        self.token_style = self.token_style.with_fg(color);
        Ok(self)
    }

    /// Replace the caret cache lifetime.
    #[must_use]
    pub fn with_caret_cache_ttl(mut self, ttl: Duration) -> Self {
        self.caret_cache_ttl = ttl;
        self
    }

    /// Replace the mounted text.
    #[must_use]
    pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            known_names: KnownNames::from_names(Self::DEFAULT_NAMES),
            token_style: Style::fg(Rgba::DODGER_BLUE),
            caret_cache_ttl: Self::DEFAULT_CARET_CACHE_TTL,
            initial_text: Self::DEFAULT_INITIAL_TEXT.to_string(),
        }
    }
}
