// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The OTP field controller: slot ownership and the input/focus state machine.
//!
//! ## Usage
//!
//! 1) Build an [`OtpField`] from an [`OtpConfig`], a [`SlotFactory`], and
//!    optionally an [`OtpDelegate`].
//! 2) Call [`OtpField::initialize`] with the container size. Slots are
//!    created, laid out, and slot 0 is asked to take focus.
//! 3) Forward platform events: focus requests to [`OtpField::request_focus`],
//!    typed or pasted text to [`OtpField::insert`], and deletions to
//!    [`OtpField::backspace`].
//!
//! The state is fully described by the [`EntryState`] and the focused slot.
//! Every transition completes synchronously inside the call that triggers it.
//!
//! ## Example
//!
//! ```
//! use kurbo::Size;
//! use understory_otp_field::recording::RecordingFactory;
//! use understory_otp_field::{InputOutcome, OtpConfig, OtpDelegate, OtpField, SlotVisual};
//!
//! #[derive(Default)]
//! struct Verifier {
//!     expected: &'static str,
//!     last: Option<String>,
//! }
//!
//! impl OtpDelegate for Verifier {
//!     fn did_enter_code(&mut self, code: &str) {
//!         self.last = Some(code.to_owned());
//!     }
//!
//!     fn input_completed(&mut self, all_entered: bool) -> bool {
//!         all_entered && self.last.as_deref() == Some(self.expected)
//!     }
//! }
//!
//! let delegate = Verifier { expected: "9125", last: None };
//! let mut field = OtpField::with_delegate(OtpConfig::default(), RecordingFactory::default(), delegate);
//! field.initialize(Size::new(320.0, 80.0)).unwrap();
//!
//! for digit in ["9", "1", "2"] {
//!     assert_eq!(field.insert_at_focus(digit), InputOutcome::Filled);
//! }
//! assert_eq!(field.insert_at_focus("5"), InputOutcome::Completed { valid: true });
//! assert_eq!(field.entered_code(), "9125");
//! assert!(field.slots().iter().all(|slot| slot.visual() == SlotVisual::Filled));
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect, Size};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::{ConfigError, OtpConfig, PasteBehavior};
use crate::delegate::OtpDelegate;
use crate::entry::EntryState;
use crate::layout::SlotLayout;
use crate::renderer::{SlotFactory, SlotRenderer, SlotSpec};
use crate::style::{SlotDecoration, SlotStyler, SlotVisual};

/// One slot owned by the field.
#[derive(Clone, Debug)]
pub struct Slot<S> {
    renderer: S,
    frame: Rect,
    focused: bool,
    visual: SlotVisual,
}

impl<S> Slot<S> {
    /// The host widget.
    pub fn renderer(&self) -> &S {
        &self.renderer
    }

    /// Frame in container coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Whether this slot is the active input target.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Displayed state.
    pub fn visual(&self) -> SlotVisual {
        self.visual
    }
}

/// Result of an input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Text was stored and the field is still incomplete.
    Filled,
    /// Text was stored and every slot is now filled.
    ///
    /// `valid` is the delegate's verdict for the run of typing that
    /// completed the field. Retyping a slot of an already complete code
    /// does not ask the delegate again and reports the stored verdict; a
    /// correction has to go through a deletion to be re-verified.
    Completed {
        /// Whether the delegate accepted the code.
        valid: bool,
    },
    /// A slot was cleared.
    Deleted,
    /// Nothing changed.
    Rejected(Rejection),
}

/// Why an input event was refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The slot index does not exist (or the field is not initialized).
    IndexOutOfRange,
    /// An alphabetic field received text without letters.
    KeyboardMismatch,
    /// A focus-relative event arrived while no slot was focused.
    NoFocus,
    /// The slot may not be edited now (see [`OtpField::can_activate`]).
    FocusDenied,
}

/// A one-time-password entry field.
///
/// Owns the slot widgets (through the [`SlotFactory`]), the [`EntryState`],
/// and the delegate. See the [module docs](self) for the event flow.
pub struct OtpField<F: SlotFactory, D = ()> {
    config: OtpConfig,
    layout: SlotLayout,
    styler: SlotStyler,
    factory: F,
    delegate: D,
    slots: Vec<Slot<F::Slot>>,
    entry: EntryState,
    focused: Option<usize>,
    container: Size,
    // Verdict reported for the current complete run; cleared by deletions.
    verdict: Option<bool>,
}

impl<F: SlotFactory, D> fmt::Debug for OtpField<F, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpField")
            .field("config", &self.config)
            .field("entry", &self.entry)
            .field("focused", &self.focused)
            .field("container", &self.container)
            .field("verdict", &self.verdict)
            .field("slots", &self.slots.len())
            .finish_non_exhaustive()
    }
}

impl<F: SlotFactory> OtpField<F, ()> {
    /// Create a field without a delegate.
    ///
    /// No slots exist until [`OtpField::initialize`] is called.
    pub fn new(config: OtpConfig, factory: F) -> Self {
        Self::with_delegate(config, factory, ())
    }
}

impl<F: SlotFactory, D: OtpDelegate> OtpField<F, D> {
    /// Create a field reporting to `delegate`.
    ///
    /// No slots exist until [`OtpField::initialize`] is called.
    pub fn with_delegate(config: OtpConfig, factory: F, delegate: D) -> Self {
        Self {
            layout: SlotLayout::from_config(&config),
            styler: SlotStyler::from_config(&config),
            entry: EntryState::new(config.field_count),
            config,
            factory,
            delegate,
            slots: Vec::new(),
            focused: None,
            container: Size::ZERO,
            verdict: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &OtpConfig {
        &self.config
    }

    /// Layout in effect.
    pub fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    /// The entry buffer.
    pub fn entry(&self) -> &EntryState {
        &self.entry
    }

    /// Concatenation of all entered characters.
    pub fn entered_code(&self) -> String {
        self.entry.entered_code()
    }

    /// Returns `true` once every slot is filled.
    pub fn is_complete(&self) -> bool {
        self.entry.is_complete()
    }

    /// Index of the active slot, if any.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Slots in index order.
    pub fn slots(&self) -> &[Slot<F::Slot>] {
        &self.slots
    }

    /// Slot `index`, if it exists.
    pub fn slot(&self, index: usize) -> Option<&Slot<F::Slot>> {
        self.slots.get(index)
    }

    /// Container size used for the current layout.
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// The slot factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// The delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Mutable access to the delegate, for example to update a cached verdict.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Build (or rebuild) every slot for a container of the given size.
    ///
    /// Existing slots are destroyed, the entry buffer is reset to all empty,
    /// new slots are created through the factory, and slot 0 is asked to
    /// take focus. This is the only operation that creates or destroys slots.
    ///
    /// On error nothing is changed.
    pub fn initialize(&mut self, container: Size) -> Result<(), ConfigError> {
        self.config.validate()?;
        self.teardown();

        self.layout = SlotLayout::from_config(&self.config);
        self.styler = SlotStyler::from_config(&self.config);
        if self.entry.len() == self.config.field_count {
            self.entry.reset();
        } else {
            self.entry = EntryState::new(self.config.field_count);
        }
        self.container = container;
        self.verdict = None;

        for index in 0..self.config.field_count {
            let frame = self.layout.frame(index, container);
            let spec = SlotSpec {
                index,
                frame,
                decoration: SlotDecoration::for_style(
                    self.config.style,
                    frame.size(),
                    self.config.border_width,
                ),
                keyboard: self.config.keyboard,
                text_color: self.config.palette.text,
                cursor: self.config.cursor,
                font_size: self.config.font_size,
                background: self.config.palette.default_background,
                border: self.config.palette.default_border,
            };
            let mut renderer = self.factory.create(&spec);
            self.styler.apply(&mut renderer, SlotVisual::Empty);
            self.slots.push(Slot {
                renderer,
                frame,
                focused: false,
                visual: SlotVisual::Empty,
            });
        }
        tracing::debug!(
            field_count = self.config.field_count,
            width = container.width,
            height = container.height,
            "initialized otp field"
        );

        self.request_focus(0);
        Ok(())
    }

    /// Replace the configuration and rebuild.
    ///
    /// On error the previous configuration and slots are kept.
    pub fn reconfigure(&mut self, config: OtpConfig, container: Size) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.initialize(container)
    }

    /// Move existing slots to fit a new container size.
    ///
    /// Content, focus, and styling are untouched.
    pub fn resize(&mut self, container: Size) {
        self.container = container;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let frame = self.layout.frame(index, container);
            slot.frame = frame;
            slot.renderer.set_frame(frame);
        }
    }

    /// Index of the slot under `point` (container coordinates), if any.
    pub fn slot_at(&self, point: Point) -> Option<usize> {
        self.layout
            .slot_at(point, self.container)
            .filter(|&index| index < self.slots.len())
    }

    /// Would a focus request for slot `index` be granted?
    ///
    /// Asks the delegate first; then, with intermediate editing disabled,
    /// only the first empty slot and the slot right before it qualify (any
    /// slot once the field is complete).
    pub fn can_activate(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        if !self.delegate.can_activate(index) {
            tracing::debug!(index, "focus refused by delegate");
            return false;
        }
        if self.config.allow_intermediate_editing {
            return true;
        }
        match self.entry.first_empty() {
            Some(first_empty) => {
                let allowed = index == first_empty || index + 1 == first_empty;
                if !allowed {
                    tracing::debug!(index, first_empty, "focus refused: intermediate editing");
                }
                allowed
            }
            None => true,
        }
    }

    /// Ask slot `index` to become the active input target.
    ///
    /// Returns `false` (leaving focus where it was) when refused.
    pub fn request_focus(&mut self, index: usize) -> bool {
        if !self.can_activate(index) {
            return false;
        }
        if let Some(previous) = self.focused.filter(|&previous| previous != index) {
            let slot = &mut self.slots[previous];
            slot.renderer.unfocus();
            slot.focused = false;
        }
        let slot = &mut self.slots[index];
        slot.renderer.focus();
        slot.focused = true;
        self.focused = Some(index);
        tracing::trace!(index, "slot focused");
        true
    }

    /// Drop focus from whichever slot has it.
    pub fn resign_focus(&mut self) {
        if let Some(index) = self.focused.take() {
            let slot = &mut self.slots[index];
            slot.renderer.unfocus();
            slot.focused = false;
            tracing::trace!(index, "slot resigned focus");
        }
    }

    /// Text typed (or pasted) into slot `index`.
    ///
    /// Empty text is a deletion and behaves like [`OtpField::backspace`].
    /// Multi-grapheme text is handled per [`OtpConfig::paste`]. With
    /// intermediate editing disabled, only slots that could take focus
    /// accept input.
    pub fn insert(&mut self, index: usize, text: &str) -> InputOutcome {
        if let Err(rejection) = self.check_editable(index) {
            return InputOutcome::Rejected(rejection);
        }
        if text.is_empty() {
            return self.backspace(index);
        }
        let keyboard = self.config.keyboard;
        if !keyboard.accepts(text) {
            tracing::debug!(index, ?keyboard, "input refused by keyboard class");
            return InputOutcome::Rejected(Rejection::KeyboardMismatch);
        }

        let mut accepted = text.graphemes(true).filter(|g| keyboard.accepts(g));
        let last = match self.config.paste {
            PasteBehavior::SingleSlot => {
                let Some(grapheme) = accepted.next() else {
                    return InputOutcome::Rejected(Rejection::KeyboardMismatch);
                };
                self.fill_slot(index, grapheme);
                index
            }
            PasteBehavior::Distribute => {
                let mut last = None;
                for (slot, grapheme) in (index..self.slots.len()).zip(accepted) {
                    self.fill_slot(slot, grapheme);
                    last = Some(slot);
                }
                let Some(last) = last else {
                    return InputOutcome::Rejected(Rejection::KeyboardMismatch);
                };
                last
            }
        };

        if last + 1 < self.slots.len() {
            self.request_focus(last + 1);
        } else if self.focused.is_some_and(|focused| (index..=last).contains(&focused)) {
            self.resign_focus();
        }
        self.check_completion()
    }

    /// Deletion at slot `index`.
    ///
    /// An empty slot (other than the first) forwards the deletion to its
    /// predecessor, which is cleared and focused. Otherwise the slot itself
    /// is cleared and focus steps one slot to the left.
    pub fn backspace(&mut self, index: usize) -> InputOutcome {
        if let Err(rejection) = self.check_editable(index) {
            return InputOutcome::Rejected(rejection);
        }
        if index > 0 && !self.entry.is_filled(index) {
            self.delete_in(index - 1);
        } else {
            self.delete_in(index);
            if index > 0 {
                self.request_focus(index - 1);
            }
        }
        InputOutcome::Deleted
    }

    /// [`OtpField::insert`] at the focused slot.
    pub fn insert_at_focus(&mut self, text: &str) -> InputOutcome {
        match self.focused {
            Some(index) => self.insert(index, text),
            None => InputOutcome::Rejected(Rejection::NoFocus),
        }
    }

    /// [`OtpField::backspace`] at the focused slot.
    pub fn backspace_at_focus(&mut self) -> InputOutcome {
        match self.focused {
            Some(index) => self.backspace(index),
            None => InputOutcome::Rejected(Rejection::NoFocus),
        }
    }

    fn check_editable(&mut self, index: usize) -> Result<(), Rejection> {
        if index >= self.slots.len() {
            return Err(Rejection::IndexOutOfRange);
        }
        if !self.config.allow_intermediate_editing && !self.can_activate(index) {
            return Err(Rejection::FocusDenied);
        }
        Ok(())
    }

    fn teardown(&mut self) {
        self.focused = None;
        for slot in self.slots.drain(..) {
            self.factory.destroy(slot.renderer);
        }
    }

    fn fill_slot(&mut self, index: usize, grapheme: &str) {
        let stored = self.entry.set(index, grapheme);
        debug_assert!(stored.is_ok(), "graphemes are stored into live slots");
        let shown = self.config.text_mask().display(grapheme);
        let slot = &mut self.slots[index];
        if slot.renderer.current_text() != shown {
            slot.renderer.set_display_text(&shown);
        }
        self.styler.apply(&mut slot.renderer, SlotVisual::Filled);
        slot.visual = SlotVisual::Filled;
        tracing::trace!(index, "slot filled");
    }

    fn delete_in(&mut self, index: usize) {
        let cleared = self.entry.clear(index);
        debug_assert!(cleared.is_ok(), "deletions target live slots");
        let slot = &mut self.slots[index];
        if !slot.renderer.current_text().is_empty() {
            slot.renderer.set_display_text("");
        }
        self.styler.apply(&mut slot.renderer, SlotVisual::Empty);
        slot.visual = SlotVisual::Empty;
        tracing::trace!(index, "slot cleared");

        self.request_focus(index);

        self.verdict = None;
        self.delegate.input_completed(false);
        self.restyle_by_content();
    }

    fn restyle_by_content(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let visual = if self.entry.is_filled(index) {
                SlotVisual::Filled
            } else {
                SlotVisual::Empty
            };
            self.styler.apply(&mut slot.renderer, visual);
            slot.visual = visual;
        }
    }

    fn restyle_all(&mut self, visual: SlotVisual) {
        for slot in &mut self.slots {
            self.styler.apply(&mut slot.renderer, visual);
            slot.visual = visual;
        }
    }

    fn check_completion(&mut self) -> InputOutcome {
        if !self.entry.is_complete() {
            self.delegate.input_completed(false);
            return InputOutcome::Filled;
        }
        let valid = match self.verdict {
            Some(valid) => valid,
            None => {
                let code = self.entry.entered_code();
                self.delegate.did_enter_code(&code);
                let valid = self.delegate.input_completed(true);
                tracing::debug!(valid, "otp entry completed");
                self.verdict = Some(valid);
                valid
            }
        };
        self.restyle_all(if valid {
            SlotVisual::Filled
        } else {
            SlotVisual::Error
        });
        InputOutcome::Completed { valid }
    }
}
