// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph metrics hooks for icon text layout.
//!
//! The icon layout core needs exactly one thing from a text engine: the
//! rendered width of a single line in a given font. Shaping and rasterization
//! stay downstream, so layout code depends on a tiny measurement interface.
//!
//! This crate is intentionally:
//! - small and dependency-free,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - engine-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

/// A minimal glyph metrics interface used by the block measurer.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine (e.g. Parley or cosmic-text), or
/// - backed by web platform text measurement (e.g. HTML canvas).
///
/// Implementations must be deterministic: measuring the same text with the
/// same style twice returns the same metrics.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers split multi-line input
    /// before measuring.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Returns the rendered advance width of `text`.
    fn measure_width(&self, text: &str, style: &TextStyle) -> f64 {
        self.measure(text, style).advance_width
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement and painting.
///
/// This is the "font descriptor" of the icon pipeline: family, weight, style
/// and pixel size. Line spacing is a layout concern and lives elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (`400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }

    /// Returns a CSS `font` shorthand for this style.
    ///
    /// Named families are quoted and followed by a `sans-serif` fallback, e.g.
    /// `italic 700 120px "Inter", sans-serif`.
    #[must_use]
    pub fn css_font(&self) -> String {
        let style = self.font_style.as_css();
        let weight = self.font_weight.0;
        let size = self.font_size;
        match &self.font_family {
            FontFamily::Named(name) => {
                format!("{style} {weight} {size}px \"{name}\", sans-serif")
            }
            generic => format!("{style} {weight} {size}px {}", generic.as_css_family()),
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    #[default]
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Resolves a user-supplied family name.
    ///
    /// The CSS generic keywords map to the generic variants (case-insensitive),
    /// an empty name falls back to sans-serif, and anything else is a named
    /// family.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("sans-serif") {
            Self::SansSerif
        } else if name.eq_ignore_ascii_case("serif") {
            Self::Serif
        } else if name.eq_ignore_ascii_case("monospace") {
            Self::Monospace
        } else {
            Self::Named(Arc::from(name))
        }
    }

    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);

    /// Returns [`Self::BOLD`] when `bold` is set, otherwise [`Self::NORMAL`].
    #[must_use]
    pub fn from_bold(bold: bool) -> Self {
        if bold { Self::BOLD } else { Self::NORMAL }
    }
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    #[default]
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

impl FontStyle {
    /// Returns [`Self::Italic`] when `italic` is set, otherwise [`Self::Normal`].
    #[must_use]
    pub fn from_italic(italic: bool) -> Self {
        if italic { Self::Italic } else { Self::Normal }
    }

    /// Returns the CSS keyword for this style.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        }
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// The advance width (useful for horizontal layout).
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Metrics of an empty line.
    pub const ZERO: Self = Self {
        advance_width: 0.0,
        ascent: 0.0,
        descent: 0.0,
        leading: 0.0,
    };

    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A tiny heuristic text measurer suitable for tests and early layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
/// Empty text measures as [`TextMetrics::ZERO`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::ZERO;
        }
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        let ascent = 0.8 * style.font_size;
        let descent = 0.2 * style.font_size;
        TextMetrics {
            advance_width,
            ascent,
            descent,
            leading: 0.0,
        }
    }
}
