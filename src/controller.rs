//! Edit controller: keeps markup and caret in sync across re-renders.
//!
//! Every user edit re-renders the whole surface from its flattened text.
//! The controller flattens the caret to an anchor index before the
//! re-render and rehomes it afterwards, so the user sees no caret jump.
//!
//! Insert triggers (one per known name) live outside the surface, and
//! activating one blurs the surface first. On blur the caret is cached for
//! a short window; an insert within that window splices the token at the
//! cached position, anything later appends it to the end.
//!
//! # State machine
//!
//! ```text
//!  Idle ── input ──▶ EditingViaUserInput ──▶ Idle
//!  Idle ── blur ───▶ PendingExternalInsert
//!  PendingExternalInsert ── insert / ttl elapsed ──▶ Idle
//! ```
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use mention_input::{EditController, EditorOptions};
//! use mention_input::timer::ManualClock;
//!
//! let clock = ManualClock::new();
//! let options = EditorOptions::default().with_initial_text("Hello world");
//! let mut editor = EditController::with_clock(options, clock.clone());
//!
//! editor.set_caret_index(5);
//! editor.on_blur();
//! clock.advance(Duration::from_millis(300));
//! editor.insert_name("Alice");
//! assert_eq!(editor.text(), "Hello[Alice] world");
//! ```

use std::time::{Duration, Instant};

use crate::caret;
use crate::event::{self, LogLevel};
use crate::markup::{self, Markup};
use crate::names::KnownNames;
use crate::options::EditorOptions;
use crate::surface::{Direction, Surface};
use crate::text::LogicalText;
use crate::timer::{Clock, OneShotTimer, SystemClock};

/// Controller lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControllerState {
    /// Nothing pending.
    #[default]
    Idle,
    /// An input event is being processed.
    EditingViaUserInput,
    /// The surface blurred and a cached caret awaits an insert trigger.
    PendingExternalInsert,
}

/// Single-slot caret cache with an expiry deadline.
///
/// An expired value is never returned, whether or not the expiry timer has
/// been polled yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaretCache {
    slot: Option<usize>,
    expiry: OneShotTimer,
}

impl CaretCache {
    /// Store an anchor index, replacing any previous one and its deadline.
    pub fn store(&mut self, anchor: usize, now: Instant, ttl: Duration) {
        self.slot = Some(anchor);
        self.expiry.arm(now, ttl);
    }

    /// Cached anchor index, if still fresh.
    #[must_use]
    pub fn peek(&self, now: Instant) -> Option<usize> {
        if self.expiry.has_elapsed(now) {
            None
        } else {
            self.slot
        }
    }

    /// Consume the cached anchor index, if still fresh.
    pub fn take(&mut self, now: Instant) -> Option<usize> {
        let anchor = self.peek(now);
        self.clear();
        anchor
    }

    /// Clear the slot if its deadline has passed. Returns `true` if a
    /// value expired.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.expiry.fire(now) {
            self.slot.take().is_some()
        } else {
            false
        }
    }

    /// Clear the slot and cancel its deadline.
    pub fn clear(&mut self) {
        self.slot = None;
        self.expiry.cancel();
    }
}

/// Drives a [`Surface`] through input, blur and insert events.
#[derive(Debug)]
pub struct EditController<C: Clock = SystemClock> {
    surface: Surface,
    options: EditorOptions,
    cache: CaretCache,
    state: ControllerState,
    clock: C,
}

impl EditController<SystemClock> {
    /// Mount a controller on the wall clock.
    #[must_use]
    pub fn new(options: EditorOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl Default for EditController<SystemClock> {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl<C: Clock> EditController<C> {
    /// Mount a controller, rendering the initial text once.
    #[must_use]
    pub fn with_clock(options: EditorOptions, clock: C) -> Self {
        let mut controller = Self {
            surface: Surface::new(),
            options,
            cache: CaretCache::default(),
            state: ControllerState::Idle,
            clock,
        };
        let initial = controller.options.initial_text.clone();
        controller.set_text(&initial);
        controller
    }

    /// Current logical text.
    #[must_use]
    pub fn text(&self) -> String {
        self.surface.text()
    }

    /// Current rendered structure.
    #[must_use]
    pub fn markup(&self) -> &Markup {
        self.surface.markup()
    }

    /// The surface being driven.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable access to the surface, for edits applied by the host before
    /// it reports them through [`on_input`](Self::on_input).
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Configuration in use.
    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Names that have an insert trigger.
    #[must_use]
    pub fn names(&self) -> &KnownNames {
        &self.options.known_names
    }

    /// Current state. A pending insert whose cache has lapsed reads as idle.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        match self.state {
            ControllerState::PendingExternalInsert if self.cached_caret().is_none() => {
                ControllerState::Idle
            }
            state => state,
        }
    }

    /// Cached caret, if a blur stored one that is still fresh.
    #[must_use]
    pub fn cached_caret(&self) -> Option<usize> {
        self.cache.peek(self.clock.now())
    }

    /// Anchor index of the live caret (end of text without a selection).
    #[must_use]
    pub fn caret_index(&self) -> usize {
        self.surface.caret_index()
    }

    /// Replace the logical text and re-render. The selection is dropped.
    pub fn set_text(&mut self, text: &str) {
        let markup = self.render(text);
        self.surface.replace_contents(markup);
    }

    /// Handle an input event: the surface has already been edited in place.
    ///
    /// Returns the anchor index the caret was restored to.
    pub fn on_input(&mut self) -> usize {
        self.state = ControllerState::EditingViaUserInput;

        let anchor = caret::locate(self.surface.markup(), self.surface.selection());
        let text = self.surface.text();
        let markup = self.render(&text);
        self.surface.replace_contents(markup);
        let restored = caret::rehome(anchor, self.surface.markup());
        self.surface.set_selection(restored);

        event::emit_log(
            LogLevel::Debug,
            &format!(
                "re-rendered {} segments, caret {anchor} -> {:?}+{}",
                self.surface.markup().len(),
                restored.node,
                restored.offset
            ),
        );

        self.state = if self.cached_caret().is_some() {
            ControllerState::PendingExternalInsert
        } else {
            ControllerState::Idle
        };
        anchor
    }

    /// Handle the surface gaining focus.
    ///
    /// The cached caret is kept: an insert trigger may still be on its way.
    pub fn on_focus(&mut self) {
        self.surface.set_focused(true);
    }

    /// Handle the surface losing focus: cache the caret for a pending
    /// insert. Returns the cached anchor index.
    pub fn on_blur(&mut self) -> usize {
        let anchor = self.surface.caret_index();
        self.surface.set_focused(false);
        self.cache
            .store(anchor, self.clock.now(), self.options.caret_cache_ttl);
        self.state = ControllerState::PendingExternalInsert;

        event::emit_event(event::CARET_CACHED, &format!("offset={anchor}"));
        anchor
    }

    /// Run due timers. Returns `true` if the cached caret expired.
    pub fn poll_timers(&mut self) -> bool {
        if !self.cache.expire(self.clock.now()) {
            return false;
        }
        if self.state == ControllerState::PendingExternalInsert {
            self.state = ControllerState::Idle;
        }
        event::emit_event(event::CARET_CACHE_EXPIRED, "");
        event::emit_log(LogLevel::Debug, "cached caret expired");
        true
    }

    /// Insert trigger: splice `[name]` at the cached caret, or at the end
    /// of the text when nothing fresh is cached.
    ///
    /// The live caret is not restored. Returns the insertion offset.
    pub fn insert_name(&mut self, name: &str) -> usize {
        let now = self.clock.now();
        self.poll_timers();

        let mut text = LogicalText::from(self.surface.text());
        let end = text.len_chars();
        let position = text.insert(self.cache.take(now).unwrap_or(end), &format!("[{name}]"));
        self.set_text(&text.to_string());
        self.state = ControllerState::Idle;

        if !self.options.known_names.is_recognized(name) {
            event::emit_log(
                LogLevel::Warn,
                &format!("inserted {name:?}, which is not a recognized name"),
            );
        }
        event::emit_event(
            event::NAME_INSERTED,
            &format!("name={name} offset={position}"),
        );
        position
    }

    /// Type text at the caret and re-render.
    pub fn type_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.surface.insert_at_selection(text);
        self.on_input();
    }

    /// Delete before the caret and re-render. Returns `false` at the start.
    pub fn backspace(&mut self) -> bool {
        let deleted = self.surface.delete_backward();
        if deleted {
            self.on_input();
        }
        deleted
    }

    /// Delete after the caret and re-render. Returns `false` at the end.
    pub fn delete_forward(&mut self) -> bool {
        let deleted = self.surface.delete_forward();
        if deleted {
            self.on_input();
        }
        deleted
    }

    /// Move the caret one grapheme cluster left.
    pub fn move_left(&mut self) {
        self.surface.move_caret(Direction::Left);
    }

    /// Move the caret one grapheme cluster right.
    pub fn move_right(&mut self) {
        self.surface.move_caret(Direction::Right);
    }

    /// Move the caret to the start of the text.
    pub fn move_to_start(&mut self) {
        self.surface.move_caret(Direction::Start);
    }

    /// Move the caret to the end of the text.
    pub fn move_to_end(&mut self) {
        self.surface.move_caret(Direction::End);
    }

    /// Place the caret at an anchor index (clamped).
    pub fn set_caret_index(&mut self, anchor: usize) {
        self.surface.set_caret_index(anchor);
    }

    fn render(&self, text: &str) -> Markup {
        markup::render(text, &self.options.known_names, self.options.token_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caret::{Caret, NodeRef};
    use crate::timer::ManualClock;

    fn editor(text: &str) -> (EditController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let options = EditorOptions::default().with_initial_text(text);
        (EditController::with_clock(options, clock.clone()), clock)
    }

    #[test]
    fn test_mount_renders_initial_text() {
        let (editor, _) = editor(EditorOptions::DEFAULT_INITIAL_TEXT);
        assert_eq!(editor.markup().token_count(), 2);
        assert_eq!(editor.state(), ControllerState::Idle);
        assert_eq!(editor.cached_caret(), None);
    }

    #[test]
    fn test_typing_completes_token() {
        let (mut editor, _) = editor("Hi [Alic");
        editor.move_to_end();
        editor.type_text("e]");
        assert_eq!(editor.text(), "Hi [Alice]");
        assert_eq!(editor.markup().token_count(), 1);
        assert_eq!(editor.caret_index(), 10);
        assert_eq!(editor.surface().selection(), Some(Caret::new(NodeRef::Leaf(1), 7)));
        assert_eq!(editor.state(), ControllerState::Idle);
    }

    #[test]
    fn test_typing_inside_token_breaks_it() {
        let (mut editor, _) = editor("[Alice] went");
        editor.set_caret_index(3);
        editor.type_text("x");
        assert_eq!(editor.text(), "[Alxice] went");
        assert_eq!(editor.markup().token_count(), 0);
        assert_eq!(editor.caret_index(), 4);
    }

    #[test]
    fn test_backspace_into_token() {
        let (mut editor, _) = editor("[Bob]!");
        editor.set_caret_index(5);
        assert!(editor.backspace());
        assert_eq!(editor.text(), "[Bob!");
        assert_eq!(editor.markup().token_count(), 0);
        assert_eq!(editor.caret_index(), 4);

        editor.move_to_start();
        assert!(!editor.backspace());
    }

    #[test]
    fn test_delete_forward_rejoins_token() {
        let (mut editor, _) = editor("[Bob]x]");
        editor.set_caret_index(4);
        assert!(editor.delete_forward());
        assert_eq!(editor.text(), "[Bobx]");
        editor.set_caret_index(4);
        assert!(editor.delete_forward());
        assert_eq!(editor.text(), "[Bob]");
        assert_eq!(editor.markup().token_count(), 1);
        assert_eq!(editor.caret_index(), 4);
    }

    #[test]
    fn test_insert_at_cached_caret() {
        let (mut editor, clock) = editor("Hello world");
        editor.set_caret_index(5);
        assert_eq!(editor.on_blur(), 5);
        assert_eq!(editor.state(), ControllerState::PendingExternalInsert);

        clock.advance(Duration::from_millis(500));
        assert_eq!(editor.insert_name("Alice"), 5);
        assert_eq!(editor.text(), "Hello[Alice] world");
        assert_eq!(editor.state(), ControllerState::Idle);
        assert_eq!(editor.cached_caret(), None);
    }

    #[test]
    fn test_insert_after_expiry_appends() {
        let (mut editor, clock) = editor("Hello world");
        editor.set_caret_index(5);
        editor.on_blur();

        clock.advance(Duration::from_millis(1500));
        assert_eq!(editor.state(), ControllerState::Idle);
        assert_eq!(editor.insert_name("Alice"), 11);
        assert_eq!(editor.text(), "Hello world[Alice]");
    }

    #[test]
    fn test_poll_timers_clears_cache() {
        let (mut editor, clock) = editor("abc");
        editor.on_blur();
        assert!(!editor.poll_timers());

        clock.advance(Duration::from_secs(1));
        assert!(editor.poll_timers());
        assert!(!editor.poll_timers());
        assert_eq!(editor.state(), ControllerState::Idle);
    }

    #[test]
    fn test_reblur_rearms_cache() {
        let (mut editor, clock) = editor("Hello world");
        editor.set_caret_index(2);
        editor.on_blur();
        clock.advance(Duration::from_millis(800));

        editor.on_focus();
        editor.set_caret_index(7);
        editor.on_blur();
        clock.advance(Duration::from_millis(800));

        assert!(!editor.poll_timers());
        assert_eq!(editor.cached_caret(), Some(7));
        editor.insert_name("Bob");
        assert_eq!(editor.text(), "Hello w[Bob]orld");
    }

    #[test]
    fn test_cached_zero_is_a_position_not_a_missing_cache() {
        let (mut editor, _) = editor("world");
        editor.move_to_start();
        editor.on_blur();
        assert_eq!(editor.insert_name("Alice"), 0);
        assert_eq!(editor.text(), "[Alice]world");
    }

    #[test]
    fn test_blur_without_selection_caches_end() {
        let (mut editor, _) = editor("abc");
        assert_eq!(editor.surface().selection(), None);
        assert_eq!(editor.on_blur(), 3);
    }

    #[test]
    fn test_insert_into_empty_text() {
        let (mut editor, _) = editor("");
        assert_eq!(editor.insert_name("Charlie"), 0);
        assert_eq!(editor.text(), "[Charlie]");
        assert_eq!(editor.markup().token_count(), 1);
    }

    #[test]
    fn test_insert_drops_live_selection() {
        let (mut editor, _) = editor("ab");
        editor.set_caret_index(1);
        editor.insert_name("Bob");
        assert_eq!(editor.surface().selection(), None);
        assert_eq!(editor.text(), "ab[Bob]");
    }

    #[test]
    fn test_input_keeps_pending_state() {
        let (mut editor, _) = editor("ab");
        editor.on_blur();
        editor.on_focus();
        editor.type_text("c");
        assert_eq!(editor.state(), ControllerState::PendingExternalInsert);
        assert!(editor.surface().is_focused());
    }

    #[test]
    fn test_host_edit_then_on_input() {
        let (mut editor, _) = editor("Hi [Bob]");
        editor.set_caret_index(8);
        editor.surface_mut().insert_at_selection(" and [Alice]");
        assert_eq!(editor.markup().token_count(), 1);
        assert_eq!(editor.on_input(), 20);
        assert_eq!(editor.markup().token_count(), 2);
        assert_eq!(editor.caret_index(), 20);
    }
}
