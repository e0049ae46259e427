// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host callbacks for focus permission, completion, and validity.
//!
//! Every method has a default, and `()` implements the trait with those
//! defaults, so a field works without any delegate at all: focus is always
//! allowed and a complete code is reported as not valid.
//!
//! ## Synchronous verdicts
//!
//! [`OtpDelegate::input_completed`] returns the validity of a complete code
//! before the triggering keystroke finishes. The field never waits, so a
//! host that verifies codes with a server must answer from a verdict it has
//! already computed (or answer `true` and restyle on its own schedule).
//!
//! The delegate is owned by the [`OtpField`](crate::OtpField) and only gets
//! `&mut self`, so it cannot reconfigure the field from inside a callback.

/// Callbacks fired by [`OtpField`](crate::OtpField) during transitions.
pub trait OtpDelegate {
    /// May slot `index` become the active input target now?
    ///
    /// Asked on every focus request, before the field's own
    /// intermediate-editing rule. Defaults to `true`.
    fn can_activate(&mut self, index: usize) -> bool {
        let _ = index;
        true
    }

    /// Every slot has been filled; `code` is the entered code.
    ///
    /// Fired once per run of typing that completes the field. It is armed
    /// again only after a deletion makes the field incomplete. Retyping a
    /// slot of a complete code in place is not reported here and keeps the
    /// verdict already given, so a corrected code is only seen after the
    /// user deletes and retypes.
    fn did_enter_code(&mut self, code: &str) {
        let _ = code;
    }

    /// Completion status changed.
    ///
    /// Called with `false` after every keystroke that leaves the field
    /// incomplete and after every deletion; the return value is ignored
    /// then. Called with `true` right after
    /// [`did_enter_code`](Self::did_enter_code); the return value is the
    /// validity of the code and drives error styling. Defaults to `false`.
    fn input_completed(&mut self, all_entered: bool) -> bool {
        let _ = all_entered;
        false
    }
}

impl OtpDelegate for () {}
