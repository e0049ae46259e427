// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_otp_field --heading-base-level=0

//! Understory OTP Field: a headless one-time-password entry field.
//!
//! An OTP field is a row of single-character slots. Typing into a slot stores
//! one character and moves focus to the next slot; deleting clears a slot and
//! moves focus back. Once every slot is filled the entered code is handed to a
//! delegate, which answers synchronously whether the code is valid, and the
//! slots are restyled accordingly.
//!
//! This crate owns the _state machine_ and the _geometry_ of such a field. It
//! does not draw anything or talk to a platform text-input system; instead:
//!
//! - A [`SlotFactory`] creates host widgets implementing [`SlotRenderer`], one
//!   per slot, from a [`SlotSpec`] (frame, decoration, keyboard, colors).
//! - The host forwards focus requests, typed text, and deletions to
//!   [`OtpField`], which updates its [`EntryState`] and pushes text, colors,
//!   and focus changes back to the slots.
//! - An optional [`OtpDelegate`] can veto focus changes, receives the entered
//!   code, and decides whether it is valid.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_otp_field::recording::RecordingFactory;
//! use understory_otp_field::{InputOutcome, OtpConfig, OtpField};
//!
//! let mut field = OtpField::new(OtpConfig::default(), RecordingFactory::default());
//! field.initialize(Size::new(320.0, 80.0)).unwrap();
//!
//! for digit in ["9", "1", "2", "5"] {
//!     field.insert_at_focus(digit);
//! }
//! assert_eq!(field.entered_code(), "9125");
//! assert!(field.is_complete());
//!
//! // Deleting from the (now unfocused) last slot clears it and steps back.
//! assert_eq!(field.backspace(3), InputOutcome::Deleted);
//! assert_eq!(field.entered_code(), "912");
//! assert_eq!(field.focused(), Some(2));
//! ```
//!
//! ## Pieces
//!
//! - [`OtpConfig`]: slot count, [`FieldStyle`], [`KeyboardClass`], secure or
//!   hidden entry, metrics, [`Palette`], and paste handling.
//! - [`SlotLayout`]: frames of the slots, centered in the container.
//! - [`EntryState`]: one grapheme cluster (or nothing) per slot.
//! - [`SlotStyler`]: maps a [`SlotVisual`] state to renderer colors, on the
//!   slot border or on a path overlay depending on the [`StyleFamily`].
//! - [`recording`]: a headless renderer that records what it was told.
//!
//! ## Features
//!
//! - `std` (default): forwards to `std` in dependencies.
//! - `libm`: float math for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for the configuration types.
//!
//! Diagnostics are emitted through [`tracing`] at `debug` and `trace` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod delegate;
mod entry;
mod field;
mod layout;
pub mod recording;
mod renderer;
mod style;

pub use config::{
    ConfigError, CursorStyle, FieldStyle, KeyboardClass, OtpConfig, Palette, PasteBehavior,
};
pub use delegate::OtpDelegate;
pub use entry::{EntryError, EntryState};
pub use field::{InputOutcome, OtpField, Rejection, Slot};
pub use layout::SlotLayout;
pub use renderer::{SlotFactory, SlotRenderer, SlotSpec};
pub use style::{
    ROUNDED_CORNER_RADIUS, SlotDecoration, SlotStyler, SlotVisual, StyleFamily, TextMask,
    diamond_path, underline_path,
};
