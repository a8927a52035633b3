//! `mention_input` - editable text with inline name tokens
//!
//! A single-line editable surface whose text is re-rendered on every edit.
//! Bracketed names such as `[Alice]` render as styled token segments when
//! the name is known; everything else stays plain text. The
//! [`EditController`] keeps the caret in place across re-renders and
//! splices names from external insert triggers at the caret the user left.
//!
//! # Quick Start
//!
//! ```
//! use mention_input::{EditController, EditorOptions, KnownNames};
//! use mention_input::timer::ManualClock;
//!
//! let options = EditorOptions::default()
//!     .with_known_names(KnownNames::from_names(["Alice", "Bob"]))
//!     .with_initial_text("Hi ");
//! let mut editor = EditController::with_clock(options, ManualClock::new());
//!
//! editor.move_to_end();
//! editor.type_text("[Bob]");
//! assert_eq!(editor.markup().token_count(), 1);
//! assert_eq!(editor.caret_index(), 8);
//! ```
//!
//! Rendering and caret mapping can also be used on their own:
//!
//! ```
//! use mention_input::{KnownNames, Style, is_token};
//! use mention_input::caret::{locate, rehome};
//! use mention_input::markup::render;
//!
//! let names = KnownNames::from_names(["Alice"]);
//! assert!(is_token("[Alice]", &names));
//!
//! let markup = render("x [Alice] y", &names, Style::bold());
//! assert_eq!(markup.len(), 3);
//! let caret = rehome(4, &markup);
//! assert_eq!(locate(&markup, Some(caret)), 4);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Color channel casts
#![allow(clippy::cast_sign_loss)] // Color channel conversions
#![allow(clippy::cast_precision_loss)] // Intentional for color math
#![allow(clippy::module_name_repetitions)] // Allow markup::MarkupSegment style names
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod ansi;
pub mod caret;
pub mod color;
pub mod controller;
pub mod error;
pub mod event;
pub mod markup;
pub mod names;
pub mod options;
pub mod style;
pub mod surface;
pub mod text;
pub mod timer;
pub mod unicode;

// Re-export core types at crate root
pub use ansi::ColorMode;
pub use caret::{Caret, NodeRef};
pub use color::Rgba;
pub use controller::{CaretCache, ControllerState, EditController};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use markup::{Markup, Segment, TokenSpan};
pub use names::{KnownNames, is_token};
pub use options::EditorOptions;
pub use style::{Style, TextAttributes};
pub use surface::{Direction, Surface};
pub use text::LogicalText;
pub use timer::{Clock, ManualClock, OneShotTimer, SystemClock};
