// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text fitting and layout for square text icons.
//!
//! Given raw text, a requested font size and a square canvas, this crate
//! decides how large the text can be drawn and where each line goes:
//! - **Normalize**: split the text into [`ContentLines`], dropping blank
//!   lines at either end.
//! - **Measure**: compute the [`BlockMeasurement`] of the lines at a
//!   candidate size through an [`icontxt_text::TextMeasurer`].
//! - **Fit**: shrink the size until the block fits the [`SafeArea`]
//!   ([`FontFitter`]).
//! - **Place**: turn a percentage [`AnchorPosition`] into per-line origins
//!   ([`BlockPlacement`]).
//! - **Paint**: fill the background and draw every line into a
//!   [`PaintSurface`], reporting one [`Status`] ([`Renderer`]).
//!
//! Rasterization and image encoding are out of scope; surfaces receive
//! unshaped line strings.

#![no_std]

extern crate alloc;

mod editor;
mod fit;
mod measure;
mod normalize;
mod paint;
mod place;
mod render;
mod status;
mod style;

pub use editor::{Editor, InputChange};
pub use fit::{FitResult, FontFitter};
pub use measure::{BlockMeasurement, SafeArea};
pub use normalize::ContentLines;
pub use paint::{CommandList, PaintCommand, PaintStyle, PaintSurface, VerticalAnchor};
pub use place::{AnchorPosition, BlockPlacement};
pub use render::{IconInput, RenderReport, Renderer};
pub use status::Status;
pub use style::{
    CANVAS_SIZE, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT, HorizontalAlign, MAX_FONT_SIZE,
    MAX_LINE_HEIGHT, MAX_TEXT_WIDTH_RATIO, MIN_FONT_SIZE, MIN_LINE_HEIGHT, StyleSpec,
    clamp_font_size, clamp_line_height,
};
