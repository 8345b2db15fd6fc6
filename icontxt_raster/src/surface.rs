// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An opaque RGBA pixel surface.

use std::io::Cursor;
use std::path::Path;

use icontxt_layout::{HorizontalAlign, PaintStyle, PaintSurface, VerticalAnchor};
use image::{ImageFormat, Rgba, RgbaImage};
use kurbo::{Point, Rect};
use log::{info, warn};
use peniko::Color;

use crate::RasterError;
use crate::fonts::{FontKit, Fonts, shape_line};

/// A square CPU raster implementing [`PaintSurface`].
///
/// The surface starts out opaque black and every operation keeps the alpha
/// channel at 255: fills and glyph coverage are composited over the existing
/// pixels, never written through. Exports therefore never contain
/// transparent pixels.
#[derive(Debug)]
pub struct PixelSurface {
    fonts: FontKit,
    image: RgbaImage,
    style: Option<PaintStyle>,
}

impl PixelSurface {
    /// Creates a `side × side` surface that paints text with `fonts`.
    pub fn new(side: u32, fonts: FontKit) -> Self {
        Self {
            fonts,
            image: RgbaImage::from_pixel(side, side, Rgba([0, 0, 0, u8::MAX])),
            style: None,
        }
    }

    /// The pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Returns `true` if no pixel has any transparency.
    pub fn is_opaque(&self) -> bool {
        self.image.pixels().all(|p| p[3] == u8::MAX)
    }

    /// Encodes the surface as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Writes the surface to `path` as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), RasterError> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        info!(
            "wrote {}x{} PNG to {}",
            self.image.width(),
            self.image.height(),
            path.display()
        );
        Ok(())
    }
}

impl PaintSurface for PixelSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (width, height) = self.image.dimensions();
        let x0 = to_pixel(rect.x0, width);
        let x1 = to_pixel(rect.x1, width);
        let y0 = to_pixel(rect.y0, height);
        let y1 = to_pixel(rect.y1, height);
        let rgba = color.to_rgba8();
        let src = [rgba.r, rgba.g, rgba.b, rgba.a];
        for y in y0..y1 {
            for x in x0..x1 {
                blend_pixel(self.image.get_pixel_mut(x, y), src);
            }
        }
    }

    fn set_paint_style(&mut self, style: &PaintStyle) {
        self.style = Some(style.clone());
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        let Some(style) = &self.style else {
            warn!("draw_text without a paint style, skipping {text:?}");
            return;
        };
        if text.is_empty() {
            return;
        }

        let mut fonts = self.fonts.borrow_mut();
        let Fonts { system, cache } = &mut *fonts;
        let mut line = shape_line(system, text, &style.text, style.line_advance);

        let width = f64::from(line.width);
        let left = match style.align {
            HorizontalAlign::Start => origin.x,
            HorizontalAlign::Center => origin.x - 0.5 * width,
            HorizontalAlign::End => origin.x - width,
        };
        let top = match style.anchor {
            VerticalAnchor::Top => origin.y,
            VerticalAnchor::Middle => origin.y - 0.5 * f64::from(line.line_height),
            VerticalAnchor::Alphabetic => origin.y - f64::from(line.baseline),
        };
        let (dx, dy) = (round_to_i32(left), round_to_i32(top));

        let rgba = style.fill.to_rgba8();
        let fill = cosmic_text::Color::rgba(rgba.r, rgba.g, rgba.b, rgba.a);
        let image = &mut self.image;
        let (width, height) = image.dimensions();
        line.buffer
            .borrow_with(system)
            .draw(cache, fill, |x, y, w, h, color| {
                let src = color.as_rgba();
                for gy in 0..h {
                    for gx in 0..w {
                        let Some(px) = offset(x, gx, dx, width) else {
                            continue;
                        };
                        let Some(py) = offset(y, gy, dy, height) else {
                            continue;
                        };
                        blend_pixel(image.get_pixel_mut(px, py), src);
                    }
                }
            });
    }
}

/// Composites `src` over an opaque pixel, keeping it opaque.
fn blend_pixel(pixel: &mut Rgba<u8>, src: [u8; 4]) {
    let alpha = u32::from(src[3]);
    for (dst, src) in pixel.0.iter_mut().zip(src).take(3) {
        let blended = (u32::from(src) * alpha + u32::from(*dst) * (255 - alpha) + 127) / 255;
        *dst = u8::try_from(blended).unwrap_or(u8::MAX);
    }
    pixel.0[3] = u8::MAX;
}

/// Maps a coordinate to a pixel boundary in `[0, max]`.
fn to_pixel(value: f64, max: u32) -> u32 {
    if value.is_nan() {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Value is clamped to [0, max] above"
    )]
    {
        value.round().clamp(0.0, f64::from(max)) as u32
    }
}

fn round_to_i32(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Saturating float to int conversion is intended"
    )]
    {
        value.round() as i32
    }
}

/// Glyph pixel `base + step` shifted by `shift`, if it lands inside `[0, max)`.
fn offset(base: i32, step: u32, shift: i32, max: u32) -> Option<u32> {
    let pos = i64::from(base) + i64::from(step) + i64::from(shift);
    u32::try_from(pos).ok().filter(|&p| p < max)
}

#[cfg(test)]
mod tests {
    use icontxt_layout::{CANVAS_SIZE, IconInput, Renderer, SafeArea, Status};

    use super::*;
    use crate::CosmicTextMeasurer;

    fn renderer(side: u32) -> Renderer<PixelSurface, CosmicTextMeasurer> {
        let fonts = FontKit::bundled();
        Renderer::with_canvas_size(
            PixelSurface::new(side, fonts.clone()),
            CosmicTextMeasurer::new(fonts),
            f64::from(side),
        )
    }

    #[test]
    fn empty_text_exports_a_solid_opaque_background() {
        let mut r = renderer(32);
        let mut input = IconInput::new("\n  \n");
        input.background = Color::from_rgba8(10, 200, 30, 0);
        let report = r.render(&input);
        assert_eq!(report.status, Status::EmptyText);
        assert!(
            r.surface()
                .image()
                .pixels()
                .all(|p| p.0 == [10, 200, 30, 255])
        );
    }

    #[test]
    fn text_keeps_every_pixel_opaque() {
        let mut r = renderer(128);
        let mut input = IconInput::new("Hi\nthere");
        input.font_color = Color::from_rgba8(255, 255, 255, 128);
        input.style.set_font_size(700);
        r.render(&input);
        assert!(r.surface().is_opaque());
    }

    #[test]
    fn translucent_fill_blends_over_existing_pixels() {
        let mut surface = PixelSurface::new(2, FontKit::bundled());
        surface.fill_rect(
            Rect::new(0.0, 0.0, 2.0, 2.0),
            Color::from_rgba8(255, 255, 255, 255),
        );
        surface.fill_rect(
            Rect::new(0.0, 0.0, 1.0, 2.0),
            Color::from_rgba8(0, 0, 0, 128),
        );
        assert_eq!(surface.image().get_pixel(0, 0).0, [127, 127, 127, 255]);
        assert_eq!(surface.image().get_pixel(1, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn png_round_trips_dimensions() {
        let mut r = renderer(16);
        r.render(&IconInput::new(""));
        let bytes = r.surface().encode_png().expect("encode");
        let decoded = image::load_from_memory(&bytes).expect("decode");
        assert_eq!((decoded.width(), decoded.height()), (16, 16));
    }

    /// Bounds `(x0, y0, x1, y1)`, inclusive, of pixels differing from the
    /// top-left corner.
    fn ink_bounds(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
        let background = image.get_pixel(0, 0).0;
        image
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 != background)
            .fold(None, |bounds, (x, y, _)| {
                Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                })
            })
    }

    #[test]
    fn single_line_ink_is_centered_on_the_anchor() {
        for y_percent in [25.0, 50.0, 75.0] {
            let mut r = renderer(CANVAS_SIZE);
            let mut input = IconInput::new("H");
            input.style.set_font_size(200);
            input.anchor = input.anchor.with_y(y_percent);
            let report = r.render(&input);
            assert_eq!(report.status, Status::Clear);

            let (x0, y0, x1, y1) = ink_bounds(r.surface().image()).expect("text was painted");
            let center_x = 0.5 * f64::from(x0 + x1);
            let center_y = 0.5 * f64::from(y0 + y1);
            let anchor_y = y_percent / 100.0 * f64::from(CANVAS_SIZE);
            // Within a tenth of the 240px line box.
            assert!((center_x - 512.0).abs() < 24.0, "ink centered at x {center_x}");
            assert!(
                (center_y - anchor_y).abs() < 24.0,
                "ink centered at y {center_y}, anchor at {anchor_y}"
            );
        }
    }

    #[test]
    fn fitted_ink_stays_inside_the_safe_area() {
        let side = SafeArea::default().side();
        let inset = 0.5 * (f64::from(CANVAS_SIZE) - side);
        let (lo, hi) = (inset - 1.0, inset + side + 1.0);
        for (text, size, status) in [
            ("Icon", 320, Status::Clear),
            ("ABCDEFGHIJKLMNOP", 700, Status::AutoScaled),
            ("Two\nlines", 700, Status::AutoScaled),
        ] {
            let mut r = renderer(CANVAS_SIZE);
            let mut input = IconInput::new(text);
            input.style.set_font_size(size);
            let report = r.render(&input);
            assert_eq!(report.status, status, "status for {text:?}");

            let (x0, y0, x1, y1) = ink_bounds(r.surface().image()).expect("text was painted");
            for edge in [x0, y0, x1, y1] {
                let edge = f64::from(edge);
                assert!(
                    (lo..=hi).contains(&edge),
                    "{text:?} ink edge {edge} outside [{lo}, {hi}]"
                );
            }
        }
    }

    #[test]
    fn wide_text_is_shrunk_by_measured_widths() {
        let mut r = renderer(CANVAS_SIZE);
        let mut input = IconInput::new("Icon");
        input.style.set_font_size(700);
        let report = r.render(&input);
        let fit = report.fit.expect("fit");
        assert_eq!(report.status, Status::AutoScaled);
        assert!(fit.font_size < 700, "kept {}px", fit.font_size);
        assert!(fit.measurement.max_line_width > 0.0);
    }

    #[test]
    fn glyph_offsets_outside_the_surface_are_dropped() {
        assert_eq!(offset(-3, 1, 0, 10), None);
        assert_eq!(offset(8, 1, 0, 10), Some(9));
        assert_eq!(offset(8, 1, 1, 10), None);
    }
}
