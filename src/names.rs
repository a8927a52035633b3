//! Known names and token recognition.
//!
//! A token is a bracketed span such as `[Alice]` whose inner text is a
//! recognized name. Names map to a weight; a weight of zero keeps the name
//! in the set but disables its recognition.
//!
//! # Examples
//!
//! ```
//! use mention_input::{KnownNames, is_token};
//!
//! let names = KnownNames::from_names(["Alice"]);
//! assert!(is_token("[Alice]", &names));
//! assert!(!is_token("[Bob]", &names));
//! assert!(!is_token("no brackets", &names));
//! ```

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Set of names that render as mention tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnownNames {
    weights: HashMap<String, u32>,
}

impl KnownNames {
    /// Create an empty name set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a name set where every name has weight 1.
    ///
    /// Names that could never appear inside a token (empty, or containing
    /// brackets or line breaks) are skipped.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            let _ = set.insert(name.as_ref(), 1);
        }
        set
    }

    /// Parse a comma separated list such as `"Alice, Bob"`.
    ///
    /// Surrounding whitespace is trimmed and empty entries are ignored.
    pub fn parse_list(list: &str) -> Result<Self> {
        let mut set = Self::new();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            set.insert(name, 1)?;
        }
        Ok(set)
    }

    /// Insert or update a name with the given weight.
    pub fn insert(&mut self, name: &str, weight: u32) -> Result<()> {
        validate_name(name)?;
        self.weights.insert(name.to_string(), weight);
        Ok(())
    }

    /// Weight of a name, if present.
    #[must_use]
    pub fn weight(&self, name: &str) -> Option<u32> {
        self.weights.get(name).copied()
    }

    /// Check if a name is present (regardless of weight).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.weights.contains_key(name)
    }

    /// Check if a name is present and enabled.
    #[must_use]
    pub fn is_recognized(&self, name: &str) -> bool {
        self.weights.get(name).is_some_and(|&w| w > 0)
    }

    /// Number of names in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Names in lexical order, for building one insert trigger per name.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.weights.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Characters that end a bracket match: `\n`, `\r` and the Unicode line
/// and paragraph separators.
const LINE_BREAKS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "names must not be empty"
    } else if name.contains(['[', ']']) {
        "names must not contain brackets"
    } else if name.contains(LINE_BREAKS) {
        "names must not contain line breaks"
    } else {
        return Ok(());
    };
    Err(Error::InvalidName {
        name: name.to_string(),
        reason,
    })
}

/// Inner text of the first `[...]` pair in `candidate`.
///
/// Matches lazily: the capture ends at the first `]` after its `[`. A line
/// break before the closing bracket abandons that `[` and the search moves
/// on to the next one.
fn first_bracket_capture(candidate: &str) -> Option<&str> {
    let mut rest = candidate;
    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        match after.find(|c: char| c == ']' || LINE_BREAKS.contains(&c)) {
            Some(end) if after[end..].starts_with(']') => return Some(&after[..end]),
            Some(_) => rest = after,
            None => return None,
        }
    }
    None
}

/// Decide whether `candidate` holds a recognized token.
///
/// Only the first bracket pair is evaluated. The renderer always passes a
/// single `[...]` run, so later pairs never matter in practice.
#[must_use]
pub fn is_token(candidate: &str, names: &KnownNames) -> bool {
    match first_bracket_capture(candidate) {
        Some(inner) if !inner.is_empty() => names.is_recognized(inner),
        _ => false,
    }
}
