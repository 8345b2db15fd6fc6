// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-on-demand editing.
//!
//! An [`Editor`] holds the current [`IconInput`] next to a [`Renderer`]. Every
//! mutation goes through [`Editor::apply`], which changes one field and then
//! performs exactly one render pass, replacing the previous report (and with
//! it the status message).

extern crate alloc;

use alloc::string::String;

use icontxt_text::{FontFamily, TextMeasurer};
use peniko::Color;

use crate::paint::PaintSurface;
use crate::render::{IconInput, RenderReport, Renderer};
use crate::status::Status;
use crate::style::HorizontalAlign;

/// A single change coming from the input layer.
#[derive(Clone, Debug)]
pub enum InputChange {
    /// Replace the whole text.
    Text(String),
    /// Append one line to the text.
    AppendLine(String),
    /// Set the background color.
    Background(Color),
    /// Set the text color.
    FontColor(Color),
    /// Set the font family.
    FontFamily(FontFamily),
    /// Set the requested font size (clamped).
    FontSize(i64),
    /// Set the line-height multiplier (clamped).
    LineHeight(f64),
    /// Toggle bold.
    Bold(bool),
    /// Toggle italic.
    Italic(bool),
    /// Set the horizontal alignment.
    Align(HorizontalAlign),
    /// Set the anchor x in percent (clamped).
    PositionX(f64),
    /// Set the anchor y in percent (clamped).
    PositionY(f64),
}

impl InputChange {
    /// Applies the change to `input`.
    pub fn apply_to(self, input: &mut IconInput) {
        match self {
            Self::Text(text) => input.text = text,
            Self::AppendLine(line) => {
                if !input.text.is_empty() {
                    input.text.push('\n');
                }
                input.text.push_str(&line);
            }
            Self::Background(color) => input.background = color,
            Self::FontColor(color) => input.font_color = color,
            Self::FontFamily(family) => input.style.set_font_family(family),
            Self::FontSize(size) => input.style.set_font_size(size),
            Self::LineHeight(line_height) => input.style.set_line_height(line_height),
            Self::Bold(bold) => input.style.set_bold(bold),
            Self::Italic(italic) => input.style.set_italic(italic),
            Self::Align(align) => input.style.set_align(align),
            Self::PositionX(x) => input.anchor = input.anchor.with_x(x),
            Self::PositionY(y) => input.anchor = input.anchor.with_y(y),
        }
    }
}

/// Keeps an icon's input state and re-renders it on every change.
#[derive(Debug)]
pub struct Editor<S, M> {
    renderer: Renderer<S, M>,
    input: IconInput,
    report: RenderReport,
    passes: u64,
}

impl<S: PaintSurface, M: TextMeasurer> Editor<S, M> {
    /// Creates an editor and performs the initial render pass.
    pub fn new(mut renderer: Renderer<S, M>, input: IconInput) -> Self {
        let report = renderer.render(&input);
        Self {
            renderer,
            input,
            report,
            passes: 1,
        }
    }

    /// Applies `change` and re-renders.
    pub fn apply(&mut self, change: InputChange) -> &RenderReport {
        change.apply_to(&mut self.input);
        self.render()
    }

    /// Replaces the text and re-renders.
    pub fn set_text(&mut self, text: impl Into<String>) -> &RenderReport {
        self.apply(InputChange::Text(text.into()))
    }

    /// Renders once more and returns the surface, ready to be serialized.
    pub fn export(&mut self) -> &S {
        self.render();
        self.renderer.surface()
    }

    /// The current input state.
    pub fn input(&self) -> &IconInput {
        &self.input
    }

    /// The report of the latest pass.
    pub fn report(&self) -> &RenderReport {
        &self.report
    }

    /// The status of the latest pass.
    pub fn status(&self) -> Status {
        self.report.status
    }

    /// Number of render passes performed so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// The underlying renderer.
    pub fn renderer(&self) -> &Renderer<S, M> {
        &self.renderer
    }

    fn render(&mut self) -> &RenderReport {
        self.report = self.renderer.render(&self.input);
        self.passes += 1;
        &self.report
    }
}
