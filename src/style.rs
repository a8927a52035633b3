//! Token styling.
//!
//! Plain segments render unstyled. A token segment carries one foreground
//! color, optionally emphasized with bold or underline in the terminal.
//!
//! ```
//! use mention_input::{Rgba, Style, TextAttributes};
//!
//! let token = Style::fg(Rgba::DODGER_BLUE).with_underline();
//! assert!(token.attributes.contains(TextAttributes::UNDERLINE));
//! assert!(!token.is_empty());
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

bitflags! {
    /// Emphasis applied on top of the token color.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD      = 0x01;
        /// Underlined text.
        const UNDERLINE = 0x08;
    }
}

/// Style of a token span: a single color plus emphasis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Foreground color (None = terminal default).
    pub fg: Option<Rgba>,
    /// Emphasis attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// No color, no emphasis. Plain segments use this.
    pub const NONE: Self = Self {
        fg: None,
        attributes: TextAttributes::empty(),
    };

    /// Color-only style.
    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    /// Bold style in the terminal's default color.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            fg: None,
            attributes: TextAttributes::BOLD,
        }
    }

    /// Same emphasis, different color.
    #[must_use]
    pub const fn with_fg(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Add bold.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::BOLD),
            ..self
        }
    }

    /// Add underline.
    #[must_use]
    pub const fn with_underline(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::UNDERLINE),
            ..self
        }
    }

    /// True when rendering with this style emits no escape sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.attributes.is_empty()
    }
}
