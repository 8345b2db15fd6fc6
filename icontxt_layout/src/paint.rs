// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paint surface a render pass draws into.
//!
//! Surfaces follow the canvas 2D model: a rectangle fill, a current paint
//! style, and single-line text drawn at an origin interpreted through that
//! style's alignment and vertical anchor.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use icontxt_text::TextStyle;
use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::style::HorizontalAlign;

/// How the y coordinate of a text origin relates to the drawn line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    /// `y` is the top of the line box (`line_advance` tall).
    #[default]
    Top,
    /// `y` is the vertical middle of the line box.
    Middle,
    /// `y` is the alphabetic baseline.
    Alphabetic,
}

/// Paint state applied to subsequent [`PaintSurface::draw_text`] calls.
#[derive(Clone, Debug)]
pub struct PaintStyle {
    /// Text fill color.
    pub fill: Color,
    /// Horizontal alignment around the origin x.
    pub align: HorizontalAlign,
    /// Vertical anchoring of the origin y.
    pub anchor: VerticalAnchor,
    /// Distance between line origins, i.e. the height of a line box.
    pub line_advance: f64,
    /// Font descriptor.
    pub text: TextStyle,
}

/// A drawing target for render passes.
pub trait PaintSurface {
    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Replaces the current paint style.
    fn set_paint_style(&mut self, style: &PaintStyle);

    /// Draws one line of text at `origin` using the current paint style.
    fn draw_text(&mut self, text: &str, origin: Point);
}

impl<T: PaintSurface + ?Sized> PaintSurface for &mut T {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color);
    }

    fn set_paint_style(&mut self, style: &PaintStyle) {
        (**self).set_paint_style(style);
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        (**self).draw_text(text, origin);
    }
}

/// One recorded paint operation.
#[derive(Clone, Debug)]
pub enum PaintCommand {
    /// A rectangle fill.
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A paint style change.
    SetStyle(PaintStyle),
    /// A line of text.
    DrawText {
        /// The line.
        text: String,
        /// Its origin.
        origin: Point,
    },
}

/// A [`PaintSurface`] that records commands instead of rasterizing them.
///
/// An opaque fill covering the whole surface discards everything recorded
/// before it, so the list always describes exactly one visible frame.
#[derive(Clone, Debug)]
pub struct CommandList {
    size: Size,
    commands: Vec<PaintCommand>,
}

impl CommandList {
    /// Creates an empty recording surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Surface size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The recorded commands, oldest first.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Iterates over the drawn text lines and their origins.
    pub fn drawn_text(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::DrawText { text, origin } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }

    fn covers_surface(&self, rect: Rect, color: Color) -> bool {
        color.components[3] >= 1.0
            && rect.x0 <= 0.0
            && rect.y0 <= 0.0
            && rect.x1 >= self.size.width
            && rect.y1 >= self.size.height
    }
}

impl PaintSurface for CommandList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if self.covers_surface(rect, color) {
            self.commands.clear();
        }
        self.commands.push(PaintCommand::FillRect { rect, color });
    }

    fn set_paint_style(&mut self, style: &PaintStyle) {
        self.commands.push(PaintCommand::SetStyle(style.clone()));
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        self.commands.push(PaintCommand::DrawText {
            text: String::from(text),
            origin,
        });
    }
}
