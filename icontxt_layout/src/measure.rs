// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Block measurement and the safe area it must fit in.

use icontxt_text::TextMeasurer;

use crate::normalize::ContentLines;
use crate::style::{CANVAS_SIZE, MAX_TEXT_WIDTH_RATIO, StyleSpec};

/// Bounding box of a laid-out text block at one candidate font size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockMeasurement {
    /// Width of the widest line.
    pub max_line_width: f64,
    /// Distance between consecutive line origins (`font_size × line_height`).
    pub line_advance: f64,
    /// `line_advance × line_count`.
    pub total_height: f64,
}

impl BlockMeasurement {
    /// Measures `lines` set in `style` at `font_size`.
    ///
    /// Empty lines contribute no width and are never sent to the measurer. The
    /// requested size stored in `style` is not consulted.
    pub fn measure(
        measurer: &dyn TextMeasurer,
        style: &StyleSpec,
        font_size: u32,
        lines: &ContentLines,
    ) -> Self {
        let text_style = style.text_style(font_size);
        let max_line_width = lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| measurer.measure_width(line, &text_style))
            .fold(0.0_f64, f64::max);
        let line_advance = style.line_advance(font_size);
        Self {
            max_line_width,
            line_advance,
            total_height: line_advance * lines.len() as f64,
        }
    }
}

/// The square region a text block must fit in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafeArea {
    side: f64,
}

impl SafeArea {
    /// A safe area with an explicit side length.
    pub fn new(side: f64) -> Self {
        Self {
            side: side.max(0.0),
        }
    }

    /// The safe area of a square canvas with side `canvas_size`.
    pub fn for_canvas(canvas_size: f64) -> Self {
        Self::new(canvas_size * MAX_TEXT_WIDTH_RATIO)
    }

    /// Side length in pixels.
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Returns `true` if neither dimension of the block exceeds the side.
    pub fn contains(&self, block: &BlockMeasurement) -> bool {
        block.max_line_width <= self.side && block.total_height <= self.side
    }
}

impl Default for SafeArea {
    fn default() -> Self {
        Self::for_canvas(f64::from(CANVAS_SIZE))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use icontxt_text::HeuristicTextMeasurer;

    use super::*;

    #[test]
    fn block_height_counts_blank_lines() {
        let style = StyleSpec::default().with_line_height(1.0);
        let lines = ContentLines::from_text("Line1\n\nLine3");
        let m = BlockMeasurement::measure(&HeuristicTextMeasurer, &style, 100, &lines);
        assert_eq!(m.line_advance, 100.0);
        assert_eq!(m.total_height, 300.0);
        assert!((m.max_line_width - 0.6 * 100.0 * 5.0).abs() < 1e-9);
    }

    #[test]
    fn no_lines_measure_zero() {
        let m = BlockMeasurement::measure(
            &HeuristicTextMeasurer,
            &StyleSpec::default(),
            100,
            &ContentLines::default(),
        );
        assert_eq!(m.max_line_width, 0.0);
        assert_eq!(m.total_height, 0.0);
    }

    #[test]
    fn safe_area_scales_with_the_canvas() {
        assert!((SafeArea::default().side() - 1024.0 * 0.86).abs() < 1e-9);
        assert!((SafeArea::for_canvas(100.0).side() - 86.0).abs() < 1e-9);
    }

    #[test]
    fn containment_checks_both_dimensions() {
        let area = SafeArea::new(100.0);
        let fits = BlockMeasurement {
            max_line_width: 100.0,
            line_advance: 50.0,
            total_height: 100.0,
        };
        assert!(area.contains(&fits));
        assert!(!area.contains(&BlockMeasurement {
            total_height: 100.5,
            ..fits
        }));
        assert!(!area.contains(&BlockMeasurement {
            max_line_width: 101.0,
            ..fits
        }));
    }
}
