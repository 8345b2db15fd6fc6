// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font size fitting.
//!
//! The fitter starts at the requested size and steps down one pixel at a time
//! until the measured block fits the safe area or the floor is reached, for
//! at most `requested - min + 1` block measurements.

use icontxt_text::TextMeasurer;
use log::{debug, trace};

use crate::measure::{BlockMeasurement, SafeArea};
use crate::normalize::ContentLines;
use crate::style::{MIN_FONT_SIZE, StyleSpec};

/// Outcome of fitting a text block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    /// The chosen font size.
    pub font_size: u32,
    /// The block measured at `font_size`.
    pub measurement: BlockMeasurement,
    /// `true` when the fitter ended at the minimum size because it had to: it
    /// shrank all the way down, or the block does not fit even there.
    pub hit_floor: bool,
}

impl FitResult {
    /// Returns `true` if the fitted block still exceeds `area`.
    pub fn overflows(&self, area: &SafeArea) -> bool {
        !area.contains(&self.measurement)
    }
}

/// Shrinks a text block until it fits a [`SafeArea`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontFitter {
    safe_area: SafeArea,
    min_font_size: u32,
}

impl FontFitter {
    /// Creates a fitter for `safe_area` with the default minimum size.
    pub fn new(safe_area: SafeArea) -> Self {
        Self {
            safe_area,
            min_font_size: MIN_FONT_SIZE,
        }
    }

    /// The area blocks are fitted into.
    pub fn safe_area(&self) -> &SafeArea {
        &self.safe_area
    }

    /// Fits `lines` starting from `requested`.
    ///
    /// A request below the minimum is raised to the minimum. `lines` should
    /// not be empty; an empty block trivially fits at the requested size.
    pub fn fit(
        &self,
        measurer: &dyn TextMeasurer,
        style: &StyleSpec,
        lines: &ContentLines,
        requested: u32,
    ) -> FitResult {
        let requested = requested.max(self.min_font_size);
        let mut font_size = requested;
        let mut measurement = BlockMeasurement::measure(measurer, style, font_size, lines);

        while font_size > self.min_font_size && !self.safe_area.contains(&measurement) {
            trace!(
                "{font_size}px does not fit: {:.1}x{:.1} in {:.1}",
                measurement.max_line_width,
                measurement.total_height,
                self.safe_area.side()
            );
            font_size -= 1;
            measurement = BlockMeasurement::measure(measurer, style, font_size, lines);
        }

        let fits = self.safe_area.contains(&measurement);
        let hit_floor = font_size == self.min_font_size && (font_size < requested || !fits);
        debug!(
            "fitted {} line(s) at {font_size}px (requested {requested}px, fits: {fits})",
            lines.len()
        );

        FitResult {
            font_size,
            measurement,
            hit_floor,
        }
    }
}

impl Default for FontFitter {
    fn default() -> Self {
        Self::new(SafeArea::default())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::cell::Cell;

    use icontxt_text::{HeuristicTextMeasurer, TextMetrics, TextStyle};

    use super::*;
    use crate::style::MAX_FONT_SIZE;

    #[derive(Debug, Default)]
    struct CountingMeasurer {
        calls: Cell<usize>,
    }

    impl TextMeasurer for CountingMeasurer {
        fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
            self.calls.set(self.calls.get() + 1);
            HeuristicTextMeasurer.measure(text, style)
        }
    }

    fn fit(text: &str, requested: u32) -> FitResult {
        FontFitter::default().fit(
            &HeuristicTextMeasurer,
            &StyleSpec::default(),
            &ContentLines::from_text(text),
            requested,
        )
    }

    #[test]
    fn fitting_text_keeps_the_requested_size() {
        let result = fit("A", 300);
        assert_eq!(result.font_size, 300);
        assert!(!result.hit_floor);
    }

    #[test]
    fn wide_line_is_shrunk_to_the_largest_fitting_size() {
        // 26 glyphs at 0.6em must fit in 880.64px: 26 * 0.6 * s <= 880.64.
        let result = fit("ABCDEFGHIJKLMNOPQRSTUVWXYZ", MAX_FONT_SIZE);
        assert_eq!(result.font_size, 56);
        assert!(!result.hit_floor);
        assert!(!result.overflows(&SafeArea::default()));
    }

    #[test]
    fn tall_block_is_shrunk_by_height() {
        // 4 lines * 1.2 * s <= 880.64 gives s = 183.
        let result = fit("a\nb\nc\nd", MAX_FONT_SIZE);
        assert_eq!(result.font_size, 183);
    }

    #[test]
    fn overlong_line_stops_at_the_floor() {
        let text: std::string::String = core::iter::repeat_n('x', 100).collect();
        let result = fit(&text, MAX_FONT_SIZE);
        assert_eq!(result.font_size, MIN_FONT_SIZE);
        assert!(result.hit_floor);
        assert!(result.overflows(&SafeArea::default()));
    }

    #[test]
    fn request_at_the_floor_that_fits_has_not_hit_it() {
        let result = fit("A", MIN_FONT_SIZE);
        assert_eq!(result.font_size, MIN_FONT_SIZE);
        assert!(!result.hit_floor);
    }

    #[test]
    fn measurement_calls_are_bounded() {
        let measurer = CountingMeasurer::default();
        let text: std::string::String = core::iter::repeat_n('x', 100).collect();
        let lines = ContentLines::from_text(&text);
        let result = FontFitter::default().fit(&measurer, &StyleSpec::default(), &lines, 300);
        assert_eq!(result.font_size, MIN_FONT_SIZE);
        // One line, so one measurement per candidate size.
        assert_eq!(
            measurer.calls.get(),
            (300 - MIN_FONT_SIZE + 1) as usize,
            "fitter measured more sizes than the range allows"
        );
    }

    #[test]
    fn fitted_size_is_monotonic_in_the_request() {
        let lines = "HELLO WORLD\nicon";
        let mut previous = 0;
        for requested in (MIN_FONT_SIZE..=MAX_FONT_SIZE).step_by(7) {
            let result = fit(lines, requested);
            assert!(result.font_size <= requested);
            assert!(result.font_size >= MIN_FONT_SIZE);
            assert!(
                result.font_size >= previous,
                "request {requested} fitted {} after {previous}",
                result.font_size
            );
            previous = result.font_size;
        }
    }

    #[test]
    fn fitting_is_idempotent() {
        assert_eq!(fit("one\n\ntwo", 650), fit("one\n\ntwo", 650));
    }
}
