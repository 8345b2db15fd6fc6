// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icon constants and the clamped text style.

use icontxt_text::{FontFamily, FontStyle, FontWeight, TextStyle};

/// Side length of the square icon canvas, in pixels.
pub const CANVAS_SIZE: u32 = 1024;

/// Side of the safe area as a fraction of [`CANVAS_SIZE`].
pub const MAX_TEXT_WIDTH_RATIO: f64 = 0.86;

/// Smallest font size the fitter will shrink to.
pub const MIN_FONT_SIZE: u32 = 40;

/// Largest accepted font size.
pub const MAX_FONT_SIZE: u32 = 700;

/// Font size used when nothing else is configured.
pub const DEFAULT_FONT_SIZE: u32 = 320;

/// Smallest line-height multiplier.
pub const MIN_LINE_HEIGHT: f64 = 0.8;

/// Largest line-height multiplier.
pub const MAX_LINE_HEIGHT: f64 = 2.0;

/// Line-height multiplier used when nothing else is configured.
pub const DEFAULT_LINE_HEIGHT: f64 = 1.2;

/// Clamps a requested font size into `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
#[must_use]
pub fn clamp_font_size(font_size: i64) -> u32 {
    let clamped = font_size.clamp(i64::from(MIN_FONT_SIZE), i64::from(MAX_FONT_SIZE));
    u32::try_from(clamped).unwrap_or(MIN_FONT_SIZE)
}

/// Clamps a line-height multiplier into `[MIN_LINE_HEIGHT, MAX_LINE_HEIGHT]`.
///
/// `NaN` maps to [`DEFAULT_LINE_HEIGHT`]; infinities clamp to the bounds.
#[must_use]
pub fn clamp_line_height(line_height: f64) -> f64 {
    if line_height.is_nan() {
        DEFAULT_LINE_HEIGHT
    } else {
        line_height.clamp(MIN_LINE_HEIGHT, MAX_LINE_HEIGHT)
    }
}

/// Horizontal alignment of each line relative to the anchor x coordinate.
///
/// The layout never offsets lines itself; the paint surface interprets the
/// anchor according to this mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    /// The anchor is the start (left) edge of each line.
    Start,
    /// The anchor is the horizontal center of each line.
    #[default]
    Center,
    /// The anchor is the end (right) edge of each line.
    End,
}

impl HorizontalAlign {
    /// Parses a canvas `textAlign`-style keyword.
    ///
    /// Accepts `start`/`left`, `center`/`middle` and `end`/`right`,
    /// case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        [
            ("start", Self::Start),
            ("left", Self::Start),
            ("center", Self::Center),
            ("middle", Self::Center),
            ("end", Self::End),
            ("right", Self::End),
        ]
        .into_iter()
        .find_map(|(key, align)| name.eq_ignore_ascii_case(key).then_some(align))
    }

    /// Returns the canonical keyword for this alignment.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

/// The user-facing text style of an icon.
///
/// Font size and line height are clamped on every write, so a `StyleSpec` can
/// never hold an out-of-range value.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSpec {
    font_family: FontFamily,
    font_size: u32,
    bold: bool,
    italic: bool,
    line_height: f64,
    align: HorizontalAlign,
}

impl StyleSpec {
    /// Creates a style with the given family and default settings.
    #[must_use]
    pub fn new(font_family: FontFamily) -> Self {
        Self {
            font_family,
            font_size: DEFAULT_FONT_SIZE,
            bold: false,
            italic: false,
            line_height: DEFAULT_LINE_HEIGHT,
            align: HorizontalAlign::Center,
        }
    }

    /// The preferred font family.
    pub fn font_family(&self) -> &FontFamily {
        &self.font_family
    }

    /// The requested (clamped) font size in pixels.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Whether the bold weight is requested.
    pub fn bold(&self) -> bool {
        self.bold
    }

    /// Whether the italic style is requested.
    pub fn italic(&self) -> bool {
        self.italic
    }

    /// The clamped line-height multiplier.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// Horizontal alignment of every line.
    pub fn align(&self) -> HorizontalAlign {
        self.align
    }

    /// Sets the font family.
    pub fn set_font_family(&mut self, font_family: FontFamily) {
        self.font_family = font_family;
    }

    /// Sets the requested font size, clamped with [`clamp_font_size`].
    pub fn set_font_size(&mut self, font_size: i64) {
        self.font_size = clamp_font_size(font_size);
    }

    /// Sets the bold flag.
    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    /// Sets the italic flag.
    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    /// Sets the line-height multiplier, clamped with [`clamp_line_height`].
    pub fn set_line_height(&mut self, line_height: f64) {
        self.line_height = clamp_line_height(line_height);
    }

    /// Sets the horizontal alignment.
    pub fn set_align(&mut self, align: HorizontalAlign) {
        self.align = align;
    }

    /// Sets the requested font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: i64) -> Self {
        self.set_font_size(font_size);
        self
    }

    /// Sets the bold flag.
    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the italic flag.
    #[must_use]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Sets the line-height multiplier.
    #[must_use]
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.set_line_height(line_height);
        self
    }

    /// Sets the horizontal alignment.
    #[must_use]
    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    /// Distance between consecutive line origins at `font_size`.
    pub fn line_advance(&self, font_size: u32) -> f64 {
        f64::from(font_size) * self.line_height
    }

    /// Builds the font descriptor for a candidate size.
    ///
    /// The requested size stored in this style is ignored; the fitter decides
    /// which size is actually used.
    pub fn text_style(&self, font_size: u32) -> TextStyle {
        TextStyle::new(f64::from(font_size))
            .with_family(self.font_family.clone())
            .with_weight(FontWeight::from_bold(self.bold))
            .with_style(FontStyle::from_italic(self.italic))
    }
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn font_size_is_clamped_on_write() {
        let style = StyleSpec::default().with_font_size(5);
        assert_eq!(style.font_size(), MIN_FONT_SIZE);
        let style = style.with_font_size(10_000);
        assert_eq!(style.font_size(), MAX_FONT_SIZE);
        let style = style.with_font_size(i64::MIN);
        assert_eq!(style.font_size(), MIN_FONT_SIZE);
    }

    #[test]
    fn line_height_is_clamped_and_nan_resets() {
        assert_eq!(clamp_line_height(0.1), MIN_LINE_HEIGHT);
        assert_eq!(clamp_line_height(f64::INFINITY), MAX_LINE_HEIGHT);
        assert_eq!(clamp_line_height(f64::NAN), DEFAULT_LINE_HEIGHT);
        assert_eq!(clamp_line_height(1.5), 1.5);
    }

    #[test]
    fn text_style_reflects_flags() {
        let style = StyleSpec::new(FontFamily::from_name("Inter"))
            .with_bold(true)
            .with_italic(true);
        let text = style.text_style(100);
        assert_eq!(text.font_size, 100.0);
        assert_eq!(text.font_weight, FontWeight::BOLD);
        assert_eq!(text.font_style, FontStyle::Italic);
        assert_eq!(text.css_font(), "italic 700 100px \"Inter\", sans-serif");
    }

    #[test]
    fn align_keywords() {
        assert_eq!(HorizontalAlign::from_name("LEFT"), Some(HorizontalAlign::Start));
        assert_eq!(HorizontalAlign::from_name(" center "), Some(HorizontalAlign::Center));
        assert_eq!(HorizontalAlign::from_name("right"), Some(HorizontalAlign::End));
        assert_eq!(HorizontalAlign::from_name("justify"), None);
    }
}
