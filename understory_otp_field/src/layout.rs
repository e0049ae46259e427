// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot layout: place N square slots in a row, centered in a container.
//!
//! The row is centered horizontally and vertically. For an odd count the
//! middle slot sits on the vertical center line; for an even count the gap
//! between the two middle slots does. Every other slot steps outward by
//! `slot_size + spacing`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_otp_field::SlotLayout;
//!
//! let layout = SlotLayout::new(3, 40.0, 10.0);
//! let container = Size::new(200.0, 60.0);
//!
//! // The middle slot of an odd row is centered.
//! assert_eq!(layout.frame(1, container), Rect::new(80.0, 10.0, 120.0, 50.0));
//! assert_eq!(layout.content_width(), 140.0);
//! ```

use kurbo::{Point, Rect, Size};

use crate::config::OtpConfig;

/// Frame computation for a centered row of square slots.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotLayout {
    /// Number of slots in the row.
    pub field_count: usize,
    /// Edge length of every slot.
    pub slot_size: f64,
    /// Gap between neighboring slots.
    pub spacing: f64,
}

impl SlotLayout {
    /// Create a layout for `field_count` slots.
    #[must_use]
    pub const fn new(field_count: usize, slot_size: f64, spacing: f64) -> Self {
        Self {
            field_count,
            slot_size,
            spacing,
        }
    }

    /// Create a layout from the metrics of a field configuration.
    #[must_use]
    pub fn from_config(config: &OtpConfig) -> Self {
        Self::new(config.field_count, config.slot_size, config.spacing)
    }

    /// Frame of slot `index` inside a container of the given size.
    ///
    /// Indices past `field_count` are not rejected; they continue the row to
    /// the right.
    #[must_use]
    pub fn frame(&self, index: usize, container: Size) -> Rect {
        let mid = (self.field_count / 2) as f64;
        // Signed distance (in slots) from the center; negative right of center.
        let steps = mid - index as f64;
        let half_width = container.width / 2.0;
        let x = if self.field_count % 2 == 1 {
            half_width - (steps * (self.slot_size + self.spacing) + self.slot_size / 2.0)
        } else {
            half_width
                - (steps * self.slot_size + (steps - 1.0) * self.spacing + self.spacing / 2.0)
        };
        let y = (container.height - self.slot_size) / 2.0;
        Rect::from_origin_size((x, y), (self.slot_size, self.slot_size))
    }

    /// Frames of every slot, in index order.
    pub fn frames(&self, container: Size) -> impl Iterator<Item = Rect> + '_ {
        (0..self.field_count).map(move |index| self.frame(index, container))
    }

    /// Width of the row from the left edge of the first slot to the right edge of the last.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        match self.field_count {
            0 => 0.0,
            n => n as f64 * self.slot_size + (n - 1) as f64 * self.spacing,
        }
    }

    /// Union of all slot frames, or `None` for an empty row.
    #[must_use]
    pub fn content_bounds(&self, container: Size) -> Option<Rect> {
        self.frames(container).reduce(|acc, frame| acc.union(frame))
    }

    /// Index of the slot containing `point`, if any.
    ///
    /// Gaps between slots belong to no slot.
    #[must_use]
    pub fn slot_at(&self, point: Point, container: Size) -> Option<usize> {
        self.frames(container).position(|frame| frame.contains(point))
    }
}
