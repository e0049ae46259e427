// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style application: slot decoration geometry and state-driven coloring.
//!
//! Slot styles fall into two families with different feedback channels:
//!
//! - [`StyleFamily::Bordered`] (round, rounded-corner, rectangle) color the
//!   slot's own background and border.
//! - [`StyleFamily::OutlinePath`] (diamond, underline) leave the slot's
//!   background and border alone and color a path overlay instead.
//!
//! [`SlotDecoration`] describes what a renderer draws when a slot is
//! created; [`SlotStyler`] pushes the colors for a [`SlotVisual`] state to a
//! [`SlotRenderer`].

use alloc::borrow::Cow;
use alloc::string::ToString;

use kurbo::{BezPath, Point, Size};

use crate::config::{FieldStyle, OtpConfig, Palette};
use crate::renderer::SlotRenderer;

/// Corner radius of [`FieldStyle::RoundedCorner`] slots.
pub const ROUNDED_CORNER_RADIUS: f64 = 4.0;

/// Rendering family of a [`FieldStyle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleFamily {
    /// Feedback through background and border.
    Bordered,
    /// Feedback through a path overlay's fill and stroke.
    OutlinePath,
}

/// Displayed state of one slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlotVisual {
    /// No character entered.
    #[default]
    Empty,
    /// Holds a character (or belongs to an accepted complete code).
    Filled,
    /// Belongs to a complete code the delegate rejected.
    Error,
}

/// How an entered character is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextMask {
    /// The character itself.
    Literal,
    /// A masking glyph in place of every character.
    Glyph(char),
    /// A single space, so nothing is visible.
    Blank,
}

impl TextMask {
    /// Text to display for an entered grapheme.
    #[must_use]
    pub fn display<'a>(&self, grapheme: &'a str) -> Cow<'a, str> {
        match self {
            Self::Literal => Cow::Borrowed(grapheme),
            Self::Glyph(glyph) => Cow::Owned(glyph.to_string()),
            Self::Blank => Cow::Borrowed(" "),
        }
    }
}

/// Shape a renderer draws for a slot, fixed at construction.
///
/// Outline paths are in slot-local coordinates: `(0, 0)` is the top-left
/// corner of the slot frame.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotDecoration {
    /// A bordered box with rounded corners.
    Bordered {
        /// Corner radius; `0` for sharp corners.
        corner_radius: f64,
        /// Border width.
        border_width: f64,
    },
    /// A stroked (and possibly filled) path overlay.
    Outline {
        /// The overlay path.
        path: BezPath,
        /// Stroke width of the overlay.
        line_width: f64,
        /// Clip the slot's content to the path.
        clip: bool,
    },
}

impl SlotDecoration {
    /// Decoration for `style` on a slot of the given size.
    #[must_use]
    pub fn for_style(style: FieldStyle, size: Size, border_width: f64) -> Self {
        match style {
            FieldStyle::RoundShape => Self::Bordered {
                corner_radius: size.width / 2.0,
                border_width,
            },
            FieldStyle::RoundedCorner => Self::Bordered {
                corner_radius: ROUNDED_CORNER_RADIUS,
                border_width,
            },
            FieldStyle::Rectangle => Self::Bordered {
                corner_radius: 0.0,
                border_width,
            },
            FieldStyle::Diamond => Self::Outline {
                path: diamond_path(size),
                line_width: border_width,
                clip: true,
            },
            FieldStyle::Underlined => Self::Outline {
                path: underline_path(size),
                line_width: border_width,
                clip: false,
            },
        }
    }

    /// Rendering family of this decoration.
    #[must_use]
    pub fn family(&self) -> StyleFamily {
        match self {
            Self::Bordered { .. } => StyleFamily::Bordered,
            Self::Outline { .. } => StyleFamily::OutlinePath,
        }
    }
}

/// Closed diamond through the midpoints of the four edges of `size`.
#[must_use]
pub fn diamond_path(size: Size) -> BezPath {
    let (w, h) = (size.width, size.height);
    let mut path = BezPath::new();
    path.move_to(Point::new(w / 2.0, 0.0));
    path.line_to(Point::new(w, h / 2.0));
    path.line_to(Point::new(w / 2.0, h));
    path.line_to(Point::new(0.0, h / 2.0));
    path.close_path();
    path
}

/// Line along the bottom edge of `size`.
#[must_use]
pub fn underline_path(size: Size) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(Point::new(0.0, size.height));
    path.line_to(Point::new(size.width, size.height));
    path
}

/// Applies [`SlotVisual`] states to renderers for one style and palette.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotStyler {
    /// Which channel carries the feedback.
    pub family: StyleFamily,
    /// Colors per state.
    pub palette: Palette,
    /// Border width pushed with bordered colors.
    pub border_width: f64,
}

impl SlotStyler {
    /// Styler matching a field configuration.
    #[must_use]
    pub fn from_config(config: &OtpConfig) -> Self {
        Self {
            family: config.style.family(),
            palette: config.palette,
            border_width: config.border_width,
        }
    }

    /// Push the colors for `visual` to `slot`.
    pub fn apply<S: SlotRenderer + ?Sized>(&self, slot: &mut S, visual: SlotVisual) {
        let palette = &self.palette;
        let (fill, stroke) = match visual {
            SlotVisual::Empty => (palette.default_background, palette.default_border),
            SlotVisual::Filled => (palette.filled_background, palette.filled_border),
            SlotVisual::Error => (palette.filled_background, palette.rejected_border()),
        };
        match self.family {
            StyleFamily::Bordered => {
                slot.set_background(fill);
                slot.set_border(stroke, self.border_width);
            }
            StyleFamily::OutlinePath => {
                slot.set_path_fill(fill);
                slot.set_path_stroke(stroke);
            }
        }
    }
}
