// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed glyph metrics adapter.
//!
//! This crate implements [`icontxt_text::TextMeasurer`] using Parley, giving the
//! icon fitter shaping-aware line widths on native targets.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::vec;
use core::cell::RefCell;

use icontxt_text::{FontFamily, FontStyle, TextMeasurer, TextMetrics, TextStyle};
use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontStyle as ParleyFontStyle, FontWeight};

/// A [`TextMeasurer`] backed by Parley.
///
/// Each call measures a single unwrapped line.
pub struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
    display_scale: f32,
    quantize: bool,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a new Parley-backed text measurer using the system font
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
            display_scale: 1.0,
            quantize: true,
        }
    }

    /// Sets the display scale passed to Parley.
    ///
    /// Measurements returned by this measurer are scaled back into logical
    /// coordinates (divide by scale).
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    /// Sets whether Parley should quantize layout coordinates to pixel boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    /// Named families fall back to sans-serif, like the CSS descriptor does.
    fn parley_font_stack(family: &FontFamily) -> FontStack<'_> {
        let sans = ParleyFontFamily::Generic(GenericFamily::SansSerif);
        match family {
            FontFamily::Serif => FontStack::from(ParleyFontFamily::Generic(GenericFamily::Serif)),
            FontFamily::SansSerif => FontStack::from(sans),
            FontFamily::Monospace => {
                FontStack::from(ParleyFontFamily::Generic(GenericFamily::Monospace))
            }
            FontFamily::Named(name) => FontStack::List(Cow::Owned(vec![
                ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
                sans,
            ])),
        }
    }

    fn parley_font_style(style: FontStyle) -> ParleyFontStyle {
        match style {
            FontStyle::Normal => ParleyFontStyle::Normal,
            FontStyle::Italic => ParleyFontStyle::Italic,
            FontStyle::Oblique => ParleyFontStyle::Oblique(None),
        }
    }

    fn font_size_f32(font_size: f64) -> f32 {
        if !font_size.is_finite() {
            return 0.0;
        }
        let font_size = font_size.max(0.0);
        if font_size >= f64::from(f32::MAX) {
            f32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped to f32::MAX above"
            )]
            {
                font_size as f32
            }
        }
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let text = text.split('\n').next().unwrap_or("");
        if text.is_empty() {
            return TextMetrics::ZERO;
        }

        let scale = self.display_scale.max(1.0e-6);

        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(Self::font_size_f32(
            style.font_size,
        )));
        builder.push_default(StyleProperty::FontStack(Self::parley_font_stack(
            &style.font_family,
        )));
        builder.push_default(StyleProperty::FontStyle(Self::parley_font_style(
            style.font_style,
        )));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(f32::from(
            style.font_weight.0,
        ))));

        let mut layout: parley::Layout<()> = builder.build(text);
        // No max advance: a line never wraps, it only shrinks.
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let Some(line) = layout.lines().next() else {
            return TextMetrics::ZERO;
        };

        let m = line.metrics();
        let scale = f64::from(scale);
        TextMetrics {
            advance_width: f64::from(m.advance) / scale,
            ascent: f64::from(m.ascent) / scale,
            descent: f64::from(m.descent) / scale,
            leading: f64::from(m.leading) / scale,
        }
    }
}
