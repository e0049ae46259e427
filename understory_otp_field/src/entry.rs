// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry buffer: one grapheme (or nothing) per slot.
//!
//! [`EntryState`] is the authoritative record of what has been typed. Its
//! length is fixed at construction, and [`EntryState::set`] refuses anything
//! longer than one grapheme cluster, so the buffer can never hold more
//! characters than the field has slots.
//!
//! ```
//! use understory_otp_field::EntryState;
//!
//! let mut entry = EntryState::new(4);
//! entry.set(0, "9").unwrap();
//! entry.set(1, "1").unwrap();
//! assert_eq!(entry.entered_code(), "91");
//! assert_eq!(entry.first_empty(), Some(2));
//! assert!(!entry.is_complete());
//!
//! // Whole strings are refused; a slot holds a single grapheme.
//! assert!(entry.set(2, "25").is_err());
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use unicode_segmentation::UnicodeSegmentation;

/// Errors from [`EntryState::set`] and [`EntryState::clear`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    /// The slot index is past the end of the buffer.
    #[error("slot index {index} is out of range for {len} slots")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of slots in the buffer.
        len: usize,
    },
    /// The value is neither empty nor exactly one grapheme cluster.
    #[error("a slot holds at most one grapheme cluster")]
    NotSingleGrapheme,
}

/// Fixed-length buffer of per-slot graphemes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryState {
    slots: Vec<String>,
}

impl EntryState {
    /// Create a buffer of `len` empty slots.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: core::iter::repeat_with(String::new).take(len).collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the buffer has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Replace the value of slot `index`.
    ///
    /// `value` must be empty or exactly one grapheme cluster. On error the
    /// buffer is left untouched.
    pub fn set(&mut self, index: usize, value: &str) -> Result<(), EntryError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(EntryError::IndexOutOfRange { index, len })?;
        if !value.is_empty() && !is_single_grapheme(value) {
            return Err(EntryError::NotSingleGrapheme);
        }
        slot.clear();
        slot.push_str(value);
        Ok(())
    }

    /// Empty slot `index`.
    pub fn clear(&mut self, index: usize) -> Result<(), EntryError> {
        self.set(index, "")
    }

    /// Empty every slot, keeping the length.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(String::clear);
    }

    /// Value of slot `index`; `None` when out of range, `Some("")` when empty.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// Returns `true` if slot `index` holds a grapheme.
    #[must_use]
    pub fn is_filled(&self, index: usize) -> bool {
        self.get(index).is_some_and(|value| !value.is_empty())
    }

    /// Iterate over slot values in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(String::as_str)
    }

    /// Number of filled slots.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|value| !value.is_empty()).count()
    }

    /// Lowest empty slot, or `None` when every slot is filled.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(String::is_empty)
    }

    /// Slot that should receive the next keystroke: the first empty slot,
    /// else the last slot. `None` only for a zero-length buffer.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.first_empty().or_else(|| self.slots.len().checked_sub(1))
    }

    /// Concatenation of all filled slots in index order.
    #[must_use]
    pub fn entered_code(&self) -> String {
        self.slots.concat()
    }

    /// Returns `true` when every slot is filled.
    ///
    /// Equivalent to `filled_count() == len()`. This is tracked per slot
    /// rather than by counting graphemes of [`EntryState::entered_code`],
    /// since adjacent graphemes (regional indicators, for example) can merge
    /// once concatenated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|value| !value.is_empty())
    }
}

fn is_single_grapheme(value: &str) -> bool {
    let mut graphemes = value.graphemes(true);
    graphemes.next().is_some() && graphemes.next().is_none()
}
