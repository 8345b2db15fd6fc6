// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor-relative placement of a fitted block.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::measure::BlockMeasurement;
use crate::style::HorizontalAlign;

/// Where the block is anchored, in percent of the canvas side.
///
/// Both coordinates are clamped to `[0, 100]` on construction; `NaN` maps to
/// the center (50).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPosition {
    x_percent: f64,
    y_percent: f64,
}

impl AnchorPosition {
    /// Creates an anchor from percentages.
    pub fn new(x_percent: f64, y_percent: f64) -> Self {
        Self {
            x_percent: clamp_percent(x_percent),
            y_percent: clamp_percent(y_percent),
        }
    }

    /// The canvas center.
    pub fn centered() -> Self {
        Self::new(50.0, 50.0)
    }

    /// Horizontal position in percent.
    pub fn x_percent(&self) -> f64 {
        self.x_percent
    }

    /// Vertical position in percent.
    pub fn y_percent(&self) -> f64 {
        self.y_percent
    }

    /// Returns a copy with a new horizontal position.
    #[must_use]
    pub fn with_x(self, x_percent: f64) -> Self {
        Self::new(x_percent, self.y_percent)
    }

    /// Returns a copy with a new vertical position.
    #[must_use]
    pub fn with_y(self, y_percent: f64) -> Self {
        Self::new(self.x_percent, y_percent)
    }

    /// Maps the anchor to pixels on a square canvas with side `canvas_size`.
    pub fn to_point(&self, canvas_size: f64) -> Point {
        Point::new(
            self.x_percent / 100.0 * canvas_size,
            self.y_percent / 100.0 * canvas_size,
        )
    }
}

impl Default for AnchorPosition {
    fn default() -> Self {
        Self::centered()
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        50.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Absolute draw origins for every line of a block.
///
/// Every origin shares the anchor's x; how a line sits around that x is up to
/// the paint surface's alignment mode. The block is centered vertically on the
/// anchor regardless of how many lines it has.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockPlacement {
    /// The anchor in pixels (`x`, `center_y`).
    pub anchor: Point,
    /// Top of the first line box.
    pub first_line_y: f64,
    /// Distance between consecutive line origins.
    pub line_advance: f64,
    /// Alignment the origins are meant to be painted with.
    pub align: HorizontalAlign,
    /// One origin per line, in order.
    pub lines: Vec<Point>,
}

impl BlockPlacement {
    /// Places `line_count` lines of a block measured as `measurement`.
    pub fn arrange(
        anchor: AnchorPosition,
        canvas_size: f64,
        measurement: &BlockMeasurement,
        line_count: usize,
        align: HorizontalAlign,
    ) -> Self {
        let anchor = anchor.to_point(canvas_size);
        let first_line_y = anchor.y - 0.5 * measurement.total_height;
        let line_advance = measurement.line_advance;
        let lines = (0..line_count)
            .map(|i| Point::new(anchor.x, first_line_y + i as f64 * line_advance))
            .collect();
        Self {
            anchor,
            first_line_y,
            line_advance,
            align,
            lines,
        }
    }

    /// Vertical center of the block.
    pub fn center_y(&self) -> f64 {
        self.anchor.y
    }
}
