// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field configuration: slot count, visual style, keyboard class, and colors.
//!
//! [`OtpConfig`] is a plain value. Hosts build one (usually from
//! [`OtpConfig::default`] plus a few `with_*` calls), hand it to
//! [`OtpField`](crate::OtpField), and call
//! [`OtpField::initialize`](crate::OtpField::initialize). Changing the
//! configuration later goes through
//! [`OtpField::reconfigure`](crate::OtpField::reconfigure), which rebuilds
//! every slot.
//!
//! ```
//! use understory_otp_field::{FieldStyle, KeyboardClass, OtpConfig};
//!
//! let config = OtpConfig::default()
//!     .with_field_count(6)
//!     .with_style(FieldStyle::Underlined)
//!     .with_keyboard(KeyboardClass::AlphaNumeric)
//!     .with_secure_entry(true);
//!
//! assert!(config.validate().is_ok());
//! assert!(OtpConfig::default().with_field_count(0).validate().is_err());
//! ```

use peniko::Color;
use peniko::color::palette::css;

use crate::style::{StyleFamily, TextMask};

/// Visual style of every slot in the field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldStyle {
    /// Circular slots (corner radius is half the slot size).
    #[default]
    RoundShape,
    /// Square slots with a small corner radius.
    RoundedCorner,
    /// Square slots with sharp corners.
    Rectangle,
    /// Diamond outline drawn through the edge midpoints of the slot.
    Diamond,
    /// A single line along the bottom edge of the slot.
    Underlined,
}

impl FieldStyle {
    /// Which rendering family this style belongs to.
    #[must_use]
    pub const fn family(self) -> StyleFamily {
        match self {
            Self::RoundShape | Self::RoundedCorner | Self::Rectangle => StyleFamily::Bordered,
            Self::Diamond | Self::Underlined => StyleFamily::OutlinePath,
        }
    }
}

/// Class of characters the host keyboard should offer.
///
/// Only [`KeyboardClass::Alphabetic`] is enforced by the field itself; the
/// other classes are hints for the platform keyboard.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardClass {
    /// Digits.
    #[default]
    Numeric,
    /// Letters only.
    Alphabetic,
    /// Letters and digits.
    AlphaNumeric,
}

impl KeyboardClass {
    /// Returns `true` if `text` may be entered under this class.
    ///
    /// An alphabetic field refuses text that contains no letter at all.
    #[must_use]
    pub fn accepts(self, text: &str) -> bool {
        match self {
            Self::Alphabetic => text.chars().any(char::is_alphabetic),
            Self::Numeric | Self::AlphaNumeric => !text.is_empty(),
        }
    }
}

/// How a replacement of more than one grapheme is applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PasteBehavior {
    /// The targeted slot takes the first acceptable grapheme; nothing spills
    /// into the following slots.
    #[default]
    SingleSlot,
    /// Acceptable graphemes fill the targeted slot and the slots after it.
    Distribute,
}

/// Text cursor shown inside the focused slot.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorStyle {
    /// No visible caret.
    Hidden,
    /// A caret tinted with the given color.
    Visible(Color),
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self::Visible(css::BLUE)
    }
}

/// Colors used to paint slots in their empty, filled, and error states.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// Background (or path fill) of an empty slot.
    pub default_background: Color,
    /// Background (or path fill) of a filled slot.
    pub filled_background: Color,
    /// Border (or path stroke) of an empty slot.
    pub default_border: Color,
    /// Border (or path stroke) of a filled slot, and of every slot once a
    /// complete code is accepted.
    pub filled_border: Color,
    /// Border of every slot once a complete code is rejected.
    ///
    /// Falls back to [`Palette::filled_border`] when unset.
    pub error_border: Option<Color>,
    /// Color of the entered text.
    pub text: Color,
}

impl Palette {
    /// Border color shown after a rejected code.
    #[must_use]
    pub fn rejected_border(&self) -> Color {
        self.error_border.unwrap_or(self.filled_border)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default_background: Color::TRANSPARENT,
            filled_background: Color::TRANSPARENT,
            default_border: css::GRAY,
            filled_border: Color::TRANSPARENT,
            error_border: None,
            text: Color::BLACK,
        }
    }
}

/// Complete configuration of an OTP field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OtpConfig {
    /// Number of single-character slots. Must be at least one.
    pub field_count: usize,
    /// Visual style shared by all slots.
    pub style: FieldStyle,
    /// Keyboard hint and input filter.
    pub keyboard: KeyboardClass,
    /// Show [`OtpConfig::masking_glyph`] instead of the entered character.
    pub secure_entry: bool,
    /// Show nothing (a single space) for entered characters.
    ///
    /// Takes precedence over [`OtpConfig::secure_entry`].
    pub hide_entered_text: bool,
    /// Allow focusing any slot, not only the first empty one and its predecessor.
    pub allow_intermediate_editing: bool,
    /// Edge length of each square slot.
    pub slot_size: f64,
    /// Horizontal gap between neighboring slots.
    pub spacing: f64,
    /// Border width for bordered styles, line width for outline styles.
    pub border_width: f64,
    /// Slot colors.
    pub palette: Palette,
    /// Caret appearance.
    pub cursor: CursorStyle,
    /// Point size of the slot text.
    pub font_size: f32,
    /// Glyph displayed for each entered character in secure entry mode.
    pub masking_glyph: char,
    /// Handling of multi-grapheme replacements (for example a paste).
    pub paste: PasteBehavior,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            field_count: 4,
            style: FieldStyle::default(),
            keyboard: KeyboardClass::default(),
            secure_entry: false,
            hide_entered_text: false,
            allow_intermediate_editing: true,
            slot_size: 60.0,
            spacing: 16.0,
            border_width: 1.0,
            palette: Palette::default(),
            cursor: CursorStyle::default(),
            font_size: 20.0,
            masking_glyph: '\u{2022}',
            paste: PasteBehavior::default(),
        }
    }
}

impl OtpConfig {
    /// Set the number of slots.
    #[must_use]
    pub fn with_field_count(mut self, field_count: usize) -> Self {
        self.field_count = field_count;
        self
    }

    /// Set the slot style.
    #[must_use]
    pub fn with_style(mut self, style: FieldStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the keyboard class.
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: KeyboardClass) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Enable or disable secure entry.
    #[must_use]
    pub fn with_secure_entry(mut self, secure_entry: bool) -> Self {
        self.secure_entry = secure_entry;
        self
    }

    /// Enable or disable hiding entered text entirely.
    #[must_use]
    pub fn with_hidden_text(mut self, hide_entered_text: bool) -> Self {
        self.hide_entered_text = hide_entered_text;
        self
    }

    /// Allow or forbid focusing slots past the first empty one.
    #[must_use]
    pub fn with_intermediate_editing(mut self, allow: bool) -> Self {
        self.allow_intermediate_editing = allow;
        self
    }

    /// Set slot size, spacing, and border width in one go.
    #[must_use]
    pub fn with_metrics(mut self, slot_size: f64, spacing: f64, border_width: f64) -> Self {
        self.slot_size = slot_size;
        self.spacing = spacing;
        self.border_width = border_width;
        self
    }

    /// Set the color palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the caret appearance.
    #[must_use]
    pub fn with_cursor(mut self, cursor: CursorStyle) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set the paste behavior.
    #[must_use]
    pub fn with_paste(mut self, paste: PasteBehavior) -> Self {
        self.paste = paste;
        self
    }

    /// How entered characters are displayed.
    #[must_use]
    pub fn text_mask(&self) -> TextMask {
        if self.hide_entered_text {
            TextMask::Blank
        } else if self.secure_entry {
            TextMask::Glyph(self.masking_glyph)
        } else {
            TextMask::Literal
        }
    }

    /// Check that the configuration can produce a usable field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_count == 0 {
            return Err(ConfigError::NoFields);
        }
        for (name, value) in [
            ("slot_size", self.slot_size),
            ("spacing", self.spacing),
            ("border_width", self.border_width),
        ] {
            if !value.is_finite() || value.is_sign_negative() {
                return Err(ConfigError::InvalidMetric { name, value });
            }
        }
        Ok(())
    }
}

/// Reasons a configuration is refused by [`OtpConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `field_count` is zero.
    #[error("an OTP field needs at least one slot")]
    NoFields,
    /// A size metric is negative, infinite, or NaN.
    #[error("`{name}` must be finite and non-negative, got {value}")]
    InvalidMetric {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
