// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One render pass: background, fit, placement, status, paint.

extern crate alloc;

use alloc::string::String;

use icontxt_text::TextMeasurer;
use kurbo::Rect;
use log::debug;
use peniko::Color;

use crate::fit::{FitResult, FontFitter};
use crate::measure::SafeArea;
use crate::normalize::ContentLines;
use crate::paint::{PaintStyle, PaintSurface, VerticalAnchor};
use crate::place::{AnchorPosition, BlockPlacement};
use crate::status::Status;
use crate::style::{CANVAS_SIZE, StyleSpec};

/// Everything the input layer provides for one render pass.
#[derive(Clone, Debug)]
pub struct IconInput {
    /// Raw, possibly multi-line text.
    pub text: String,
    /// Background color; always painted fully opaque.
    pub background: Color,
    /// Text color.
    pub font_color: Color,
    /// Text style with the requested font size.
    pub style: StyleSpec,
    /// Where the block is centered.
    pub anchor: AnchorPosition,
}

impl IconInput {
    /// Creates an input with default colors, style and a centered anchor.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl Default for IconInput {
    fn default() -> Self {
        Self {
            text: String::new(),
            background: Color::from_rgba8(0x1f, 0x29, 0x37, 0xff),
            font_color: Color::from_rgba8(0xff, 0xff, 0xff, 0xff),
            style: StyleSpec::default(),
            anchor: AnchorPosition::centered(),
        }
    }
}

/// What a render pass computed.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderReport {
    /// The status message for this pass.
    pub status: Status,
    /// The normalized lines.
    pub lines: ContentLines,
    /// The fit, absent when there was nothing to draw.
    pub fit: Option<FitResult>,
    /// Line origins, absent when there was nothing to draw.
    pub placement: Option<BlockPlacement>,
}

/// Owns a paint surface and a measurer and renders icons into the surface.
///
/// The surface is reused across passes; every pass starts by filling it
/// completely with the background color.
#[derive(Debug)]
pub struct Renderer<S, M> {
    surface: S,
    measurer: M,
    canvas_size: f64,
    fitter: FontFitter,
}

impl<S: PaintSurface, M: TextMeasurer> Renderer<S, M> {
    /// Creates a renderer for the standard [`CANVAS_SIZE`] canvas.
    pub fn new(surface: S, measurer: M) -> Self {
        Self::with_canvas_size(surface, measurer, f64::from(CANVAS_SIZE))
    }

    /// Creates a renderer for a square canvas of side `canvas_size`.
    ///
    /// The safe area scales with the canvas.
    pub fn with_canvas_size(surface: S, measurer: M, canvas_size: f64) -> Self {
        Self {
            surface,
            measurer,
            canvas_size,
            fitter: FontFitter::new(SafeArea::for_canvas(canvas_size)),
        }
    }

    /// Runs one render pass over `input`.
    pub fn render(&mut self, input: &IconInput) -> RenderReport {
        let extent = Rect::new(0.0, 0.0, self.canvas_size, self.canvas_size);
        self.surface.fill_rect(extent, input.background.with_alpha(1.0));

        let lines = ContentLines::from_text(&input.text);
        if lines.is_empty() {
            debug!("empty text, painted background only");
            return RenderReport {
                status: Status::EmptyText,
                lines,
                fit: None,
                placement: None,
            };
        }

        let requested = input.style.font_size();
        let fit = self
            .fitter
            .fit(&self.measurer, &input.style, &lines, requested);
        let placement = BlockPlacement::arrange(
            input.anchor,
            self.canvas_size,
            &fit.measurement,
            lines.len(),
            input.style.align(),
        );
        let status = Status::resolve(&fit, requested, self.fitter.safe_area());

        self.surface.set_paint_style(&PaintStyle {
            fill: input.font_color,
            align: input.style.align(),
            anchor: VerticalAnchor::Top,
            line_advance: fit.measurement.line_advance,
            text: input.style.text_style(fit.font_size),
        });
        for (line, origin) in lines.iter().zip(&placement.lines) {
            if !line.is_empty() {
                self.surface.draw_text(line, *origin);
            }
        }

        RenderReport {
            status,
            lines,
            fit: Some(fit),
            placement: Some(placement),
        }
    }

    /// The paint surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The glyph metrics provider.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use icontxt_text::HeuristicTextMeasurer;
    use kurbo::{Point, Size};

    use super::*;
    use crate::paint::{CommandList, PaintCommand};
    use crate::style::{MAX_FONT_SIZE, MIN_FONT_SIZE};

    fn renderer() -> Renderer<CommandList, HeuristicTextMeasurer> {
        let side = f64::from(CANVAS_SIZE);
        Renderer::new(CommandList::new(Size::new(side, side)), HeuristicTextMeasurer)
    }

    fn input(text: &str, font_size: i64) -> IconInput {
        let mut input = IconInput::new(text);
        input.style.set_font_size(font_size);
        input
    }

    #[test]
    fn empty_text_paints_only_an_opaque_background() {
        let mut r = renderer();
        let mut input = input("", 300);
        input.background = Color::from_rgba8(10, 20, 30, 0);
        let report = r.render(&input);
        assert_eq!(report.status, Status::EmptyText);
        assert!(report.fit.is_none());
        let commands = r.surface().commands();
        assert_eq!(commands.len(), 1);
        let PaintCommand::FillRect { rect, color } = &commands[0] else {
            panic!("expected a background fill, got {commands:?}");
        };
        assert_eq!(*rect, Rect::new(0.0, 0.0, 1024.0, 1024.0));
        assert_eq!(color.to_rgba8().a, 255);
    }

    #[test]
    fn fitting_text_is_drawn_at_the_requested_size() {
        let mut r = renderer();
        let report = r.render(&input("A", 300));
        assert_eq!(report.status, Status::Clear);
        assert_eq!(report.fit.map(|f| f.font_size), Some(300));
        let drawn: Vec<_> = r.surface().drawn_text().collect();
        // 1 line of 360px centered on 512.
        assert_eq!(drawn, [("A", Point::new(512.0, 332.0))]);
    }

    #[test]
    fn long_line_is_auto_scaled() {
        let mut r = renderer();
        let report = r.render(&input("ABCDEFGHIJKLMNOPQRSTUVWXYZ", i64::from(MAX_FONT_SIZE)));
        let fit = report.fit.expect("fit");
        assert!(fit.font_size < MAX_FONT_SIZE && fit.font_size >= MIN_FONT_SIZE);
        assert_eq!(report.status, Status::AutoScaled);
    }

    #[test]
    fn hopeless_line_reports_minimum_size() {
        let mut r = renderer();
        let text: String = core::iter::repeat_n('W', 120).collect();
        let report = r.render(&input(&text, 500));
        assert_eq!(report.fit.map(|f| f.font_size), Some(MIN_FONT_SIZE));
        assert_eq!(report.status, Status::MinimumSize);
        // Still drawn; overflow is advisory.
        assert_eq!(r.surface().drawn_text().count(), 1);
    }

    #[test]
    fn blank_interior_lines_take_space_but_are_not_drawn() {
        let mut r = renderer();
        let mut input = input("\n\nLine1\n\nLine3\n \n", 100);
        input.style.set_line_height(1.0);
        let report = r.render(&input);
        assert_eq!(report.lines.len(), 3);
        let fit = report.fit.expect("fit");
        assert_eq!(fit.measurement.total_height, 3.0 * fit.measurement.line_advance);
        let drawn: Vec<_> = r.surface().drawn_text().collect();
        assert_eq!(
            drawn,
            [
                ("Line1", Point::new(512.0, 362.0)),
                ("Line3", Point::new(512.0, 562.0)),
            ]
        );
    }

    #[test]
    fn paint_style_uses_the_fitted_size_and_top_anchor() {
        let mut r = renderer();
        let report = r.render(&input("ABCDEFGHIJKLMNOPQRSTUVWXYZ", 700));
        let fitted = report.fit.expect("fit").font_size;
        let style = r
            .surface()
            .commands()
            .iter()
            .find_map(|c| match c {
                PaintCommand::SetStyle(style) => Some(style.clone()),
                _ => None,
            })
            .expect("a paint style");
        assert_eq!(style.text.font_size, f64::from(fitted));
        assert_eq!(style.anchor, VerticalAnchor::Top);
    }

    #[test]
    fn repeated_passes_are_identical_and_replace_the_frame() {
        let mut r = renderer();
        let input = input("one\ntwo", 650);
        let first = r.render(&input);
        let first_len = r.surface().commands().len();
        let second = r.render(&input);
        assert_eq!(first, second);
        assert_eq!(r.surface().commands().len(), first_len);
    }
}
