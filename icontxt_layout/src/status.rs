// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single status message produced by a render pass.

use core::fmt;

use crate::fit::FitResult;
use crate::measure::SafeArea;

/// User-facing outcome of one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Everything fit at the requested size.
    #[default]
    Clear,
    /// The text had no content lines; only the background was painted.
    EmptyText,
    /// The font size was reduced to make the block fit.
    AutoScaled,
    /// The block was shrunk to the minimum size and still does not fit.
    MinimumSize,
}

impl Status {
    /// Chooses the status for a fitted block.
    ///
    /// Overflow at the floor wins over auto-scaling.
    pub fn resolve(fit: &FitResult, requested: u32, area: &SafeArea) -> Self {
        if fit.hit_floor && fit.overflows(area) {
            Self::MinimumSize
        } else if fit.font_size < requested {
            Self::AutoScaled
        } else {
            Self::Clear
        }
    }

    /// The message shown to the user; empty for [`Status::Clear`].
    pub fn message(self) -> &'static str {
        match self {
            Self::Clear => "",
            Self::EmptyText => "Text is empty. Export will include only the background color.",
            Self::AutoScaled => "Text was auto-scaled to fit the icon.",
            Self::MinimumSize => {
                "Text is very long and may still overflow at the minimum font size."
            }
        }
    }

    /// Returns `true` for anything but [`Status::Clear`].
    pub fn is_warning(self) -> bool {
        self != Self::Clear
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::measure::BlockMeasurement;

    fn fit(font_size: u32, width: f64, hit_floor: bool) -> FitResult {
        FitResult {
            font_size,
            measurement: BlockMeasurement {
                max_line_width: width,
                line_advance: 10.0,
                total_height: 10.0,
            },
            hit_floor,
        }
    }

    #[test]
    fn priority_order() {
        let area = SafeArea::new(100.0);
        assert_eq!(
            Status::resolve(&fit(40, 150.0, true), 300, &area),
            Status::MinimumSize
        );
        assert_eq!(
            Status::resolve(&fit(40, 90.0, true), 300, &area),
            Status::AutoScaled
        );
        assert_eq!(
            Status::resolve(&fit(120, 90.0, false), 300, &area),
            Status::AutoScaled
        );
        assert_eq!(
            Status::resolve(&fit(300, 90.0, false), 300, &area),
            Status::Clear
        );
    }

    #[test]
    fn only_clear_is_silent() {
        assert_eq!(Status::Clear.message(), "");
        assert!(!Status::Clear.is_warning());
        for status in [Status::EmptyText, Status::AutoScaled, Status::MinimumSize] {
            assert!(status.is_warning());
            assert!(!status.message().is_empty());
        }
    }
}
