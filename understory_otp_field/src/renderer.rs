// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side slot rendering traits.
//!
//! The field never draws anything itself. Each slot is a host widget that
//! implements [`SlotRenderer`]; a [`SlotFactory`] creates those widgets from
//! a [`SlotSpec`] when the field is (re)initialized and destroys them when
//! it is rebuilt.
//!
//! Any `FnMut(&SlotSpec) -> S` closure is a factory:
//!
//! ```
//! use understory_otp_field::recording::RecordingSlot;
//! use understory_otp_field::{OtpConfig, OtpField, SlotSpec};
//!
//! let field = OtpField::new(OtpConfig::default(), |spec: &SlotSpec| {
//!     RecordingSlot::from_spec(spec)
//! });
//! assert!(field.slots().is_empty());
//! ```

use kurbo::Rect;
use peniko::Color;

use crate::config::{CursorStyle, KeyboardClass};
use crate::style::SlotDecoration;

/// One slot widget as seen by the field.
///
/// All calls are synchronous; the field expects each to take effect (or be
/// scheduled for the next frame) before it returns.
pub trait SlotRenderer {
    /// Move the slot to `frame`, in container coordinates.
    fn set_frame(&mut self, frame: Rect);

    /// Replace the displayed text.
    fn set_display_text(&mut self, text: &str);

    /// Currently displayed text.
    fn current_text(&self) -> &str;

    /// Set the slot background ([`StyleFamily::Bordered`](crate::StyleFamily::Bordered) only).
    fn set_background(&mut self, color: Color);

    /// Set the slot border ([`StyleFamily::Bordered`](crate::StyleFamily::Bordered) only).
    fn set_border(&mut self, color: Color, width: f64);

    /// Set the overlay path fill ([`StyleFamily::OutlinePath`](crate::StyleFamily::OutlinePath) only).
    fn set_path_fill(&mut self, color: Color);

    /// Set the overlay path stroke ([`StyleFamily::OutlinePath`](crate::StyleFamily::OutlinePath) only).
    fn set_path_stroke(&mut self, color: Color);

    /// Make this slot the platform's active input target.
    fn focus(&mut self);

    /// Stop being the active input target.
    fn unfocus(&mut self);
}

/// Everything a factory needs to build one slot.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotSpec {
    /// Position of the slot in the row.
    pub index: usize,
    /// Frame in container coordinates.
    pub frame: Rect,
    /// Shape to draw.
    pub decoration: SlotDecoration,
    /// Keyboard to request from the platform.
    pub keyboard: KeyboardClass,
    /// Text color.
    pub text_color: Color,
    /// Caret appearance.
    pub cursor: CursorStyle,
    /// Point size of the slot text.
    pub font_size: f32,
    /// Initial background (or path fill).
    pub background: Color,
    /// Initial border (or path stroke).
    pub border: Color,
}

/// Creates and destroys slot widgets.
pub trait SlotFactory {
    /// The widget type produced.
    type Slot: SlotRenderer;

    /// Build the widget for one slot.
    fn create(&mut self, spec: &SlotSpec) -> Self::Slot;

    /// Tear down a widget created by [`SlotFactory::create`].
    ///
    /// The default simply drops it.
    fn destroy(&mut self, slot: Self::Slot) {
        drop(slot);
    }
}

impl<S, F> SlotFactory for F
where
    S: SlotRenderer,
    F: FnMut(&SlotSpec) -> S,
{
    type Slot = S;

    fn create(&mut self, spec: &SlotSpec) -> S {
        self(spec)
    }
}
