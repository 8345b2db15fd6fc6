// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of a recorded paint frame.

use std::fmt::Write as _;

use icontxt_layout::{CommandList, HorizontalAlign, PaintCommand, PaintStyle, VerticalAnchor};
use peniko::Color;

pub(crate) fn to_svg_string(list: &CommandList) -> String {
    let size = list.size();
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = writeln!(
        out,
        r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = size.width,
        h = size.height,
    );

    let mut style: Option<&PaintStyle> = None;
    for command in list.commands() {
        match command {
            PaintCommand::FillRect { rect, color } => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                );
                write_color_attr(&mut out, "fill", *color);
                out.push_str("/>\n");
            }
            PaintCommand::SetStyle(next) => style = Some(next),
            PaintCommand::DrawText { text, origin } => {
                let Some(style) = style else {
                    continue;
                };
                let (y, baseline) = match style.anchor {
                    // The line box is `line_advance` tall; split the leading evenly.
                    VerticalAnchor::Top => (
                        origin.y + 0.5 * (style.line_advance - style.text.font_size).max(0.0),
                        "text-before-edge",
                    ),
                    VerticalAnchor::Middle => (origin.y, "central"),
                    VerticalAnchor::Alphabetic => (origin.y, "alphabetic"),
                };
                let anchor = match style.align {
                    HorizontalAlign::Start => "start",
                    HorizontalAlign::Center => "middle",
                    HorizontalAlign::End => "end",
                };
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" style="font: {}" text-anchor="{}" dominant-baseline="{}""#,
                    origin.x,
                    y,
                    escape_xml(&style.text.css_font()),
                    anchor,
                    baseline,
                );
                write_color_attr(&mut out, "fill", style.fill);
                out.push_str(r#" xml:space="preserve">"#);
                out.push_str(&escape_xml(text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_color_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a < u8::MAX {
        let _ = write!(out, r#" {name}-opacity="{}""#, f32::from(rgba.a) / 255.0);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
