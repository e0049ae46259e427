// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless reference renderer.
//!
//! [`RecordingSlot`] stores whatever the field pushes to it in plain public
//! fields, and [`RecordingFactory`] counts creations and destructions. They
//! are useful for tests, for server-side previews, and as a template for a
//! real widget binding.
//!
//! ```
//! use kurbo::Size;
//! use understory_otp_field::recording::RecordingFactory;
//! use understory_otp_field::{OtpConfig, OtpField};
//!
//! let mut field = OtpField::new(OtpConfig::default(), RecordingFactory::default());
//! field.initialize(Size::new(320.0, 80.0)).unwrap();
//! field.insert(0, "4");
//!
//! let slot = field.slots()[0].renderer();
//! assert_eq!(slot.text, "4");
//! assert!(!slot.focused);
//! assert!(field.slots()[1].renderer().focused);
//! assert_eq!(field.factory().created, 4);
//! ```

use alloc::string::String;

use kurbo::Rect;
use peniko::Color;

use crate::config::{CursorStyle, KeyboardClass};
use crate::renderer::{SlotFactory, SlotRenderer, SlotSpec};
use crate::style::SlotDecoration;

/// A slot that records the last value of every property.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingSlot {
    /// Construction parameters.
    pub spec: SlotSpec,
    /// Current frame.
    pub frame: Rect,
    /// Current display text.
    pub text: String,
    /// Last background color.
    pub background: Color,
    /// Last border color and width.
    pub border: (Color, f64),
    /// Last overlay fill; `None` for bordered decorations until set.
    pub path_fill: Option<Color>,
    /// Last overlay stroke; `None` for bordered decorations until set.
    pub path_stroke: Option<Color>,
    /// Whether the slot is the active input target.
    pub focused: bool,
    /// Number of [`SlotRenderer::focus`] calls received.
    pub focus_calls: usize,
}

impl RecordingSlot {
    /// Build a slot in the state described by `spec`.
    #[must_use]
    pub fn from_spec(spec: &SlotSpec) -> Self {
        let (border_width, outlined) = match &spec.decoration {
            SlotDecoration::Bordered { border_width, .. } => (*border_width, false),
            SlotDecoration::Outline { .. } => (0.0, true),
        };
        Self {
            spec: spec.clone(),
            frame: spec.frame,
            text: String::new(),
            background: spec.background,
            border: (spec.border, border_width),
            path_fill: outlined.then_some(spec.background),
            path_stroke: outlined.then_some(spec.border),
            focused: false,
            focus_calls: 0,
        }
    }

    /// A slot with transparent colors and default text settings.
    #[must_use]
    pub fn blank(index: usize, frame: Rect, decoration: SlotDecoration) -> Self {
        Self::from_spec(&SlotSpec {
            index,
            frame,
            decoration,
            keyboard: KeyboardClass::default(),
            text_color: Color::BLACK,
            cursor: CursorStyle::default(),
            font_size: 20.0,
            background: Color::TRANSPARENT,
            border: Color::TRANSPARENT,
        })
    }
}

impl SlotRenderer for RecordingSlot {
    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn set_display_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn current_text(&self) -> &str {
        &self.text
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn set_border(&mut self, color: Color, width: f64) {
        self.border = (color, width);
    }

    fn set_path_fill(&mut self, color: Color) {
        self.path_fill = Some(color);
    }

    fn set_path_stroke(&mut self, color: Color) {
        self.path_stroke = Some(color);
    }

    fn focus(&mut self) {
        self.focused = true;
        self.focus_calls += 1;
    }

    fn unfocus(&mut self) {
        self.focused = false;
    }
}

/// Factory producing [`RecordingSlot`]s and counting their lifetimes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingFactory {
    /// Slots created so far.
    pub created: usize,
    /// Slots destroyed so far.
    pub destroyed: usize,
}

impl RecordingFactory {
    /// Slots currently alive.
    #[must_use]
    pub fn live(&self) -> usize {
        self.created - self.destroyed
    }
}

impl SlotFactory for RecordingFactory {
    type Slot = RecordingSlot;

    fn create(&mut self, spec: &SlotSpec) -> RecordingSlot {
        self.created += 1;
        RecordingSlot::from_spec(spec)
    }

    fn destroy(&mut self, slot: RecordingSlot) {
        self.destroyed += 1;
        drop(slot);
    }
}
