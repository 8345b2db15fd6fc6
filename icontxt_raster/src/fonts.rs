// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared cosmic-text state and the matching glyph metrics provider.

use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use cosmic_text::{
    Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, SwashCache, Weight, Wrap, fontdb,
};
use icontxt_text::{FontFamily, FontStyle, TextMeasurer, TextMetrics, TextStyle};
use log::{debug, info, warn};

use crate::RasterError;

/// Family name of the bundled faces.
const BUNDLED_FAMILY: &str = "DejaVu Sans";

/// Embedded faces, always loaded so text renders on hosts without fonts.
static BUNDLED_FONTS: [&[u8]; 2] = [
    include_bytes!("../assets/DejaVuSans.ttf"),
    include_bytes!("../assets/DejaVuSans-Bold.ttf"),
];

pub(crate) struct Fonts {
    pub(crate) system: FontSystem,
    pub(crate) cache: SwashCache,
}

/// A font database and glyph cache shared by a measurer and a surface.
///
/// Cloning is cheap and yields a handle to the same fonts, so text measured
/// through [`CosmicTextMeasurer`] is shaped exactly like the text painted by
/// [`crate::PixelSurface`].
#[derive(Clone)]
pub struct FontKit {
    inner: Rc<RefCell<Fonts>>,
}

impl fmt::Debug for FontKit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontKit")
            .field("faces", &self.inner.borrow().system.db().len())
            .finish_non_exhaustive()
    }
}

impl FontKit {
    /// Loads the system fonts plus the bundled faces.
    ///
    /// The generic sans-serif family resolves to the bundled faces, so the
    /// default style renders identically on every host.
    pub fn system() -> Self {
        let system = FontSystem::new();
        debug!("loaded {} system font faces", system.db().len());
        Self::from_font_system(system)
    }

    /// Loads only the bundled faces.
    pub fn bundled() -> Self {
        let system = FontSystem::new_with_locale_and_db("en-US".into(), fontdb::Database::new());
        Self::from_font_system(system)
    }

    /// Wraps an existing font system, adding the bundled faces to it.
    pub fn from_font_system(mut system: FontSystem) -> Self {
        let db = system.db_mut();
        for data in BUNDLED_FONTS {
            db.load_font_data(data.to_vec());
        }
        db.set_sans_serif_family(BUNDLED_FAMILY);
        Self {
            inner: Rc::new(RefCell::new(Fonts {
                system,
                cache: SwashCache::new(),
            })),
        }
    }

    /// Adds font data (TTF/OTF/collection bytes) to the database.
    pub fn load_font_data(&self, data: Vec<u8>) {
        self.inner
            .borrow_mut()
            .system
            .db_mut()
            .load_font_data(data);
    }

    /// Reads a font file and adds it to the database.
    pub fn load_font_file(&self, path: &Path) -> Result<(), RasterError> {
        let data = std::fs::read(path)?;
        self.load_font_data(data);
        info!("loaded font file {}", path.display());
        Ok(())
    }

    pub(crate) fn borrow_mut(&self) -> std::cell::RefMut<'_, Fonts> {
        self.inner.borrow_mut()
    }
}

/// A single shaped, unwrapped line.
pub(crate) struct ShapedLine {
    pub(crate) buffer: Buffer,
    /// Advance width of the line.
    pub(crate) width: f32,
    /// Baseline offset from the top of the line box.
    pub(crate) baseline: f32,
    /// Height of the line box.
    pub(crate) line_height: f32,
}

pub(crate) fn to_f32(value: f64) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Pixel sizes are far below f32::MAX"
    )]
    {
        value.clamp(0.0, f64::from(f32::MAX)) as f32
    }
}

/// Shapes `text` as one line set in `style`, with a line box `line_height` tall.
pub(crate) fn shape_line(
    system: &mut FontSystem,
    text: &str,
    style: &TextStyle,
    line_height: f64,
) -> ShapedLine {
    let font_size = to_f32(style.font_size).max(1.0);
    let line_height = to_f32(line_height).max(1.0);

    let mut buffer = Buffer::new(system, Metrics::new(font_size, line_height));
    {
        let mut buffer = buffer.borrow_with(system);
        buffer.set_size(None, None);
        buffer.set_wrap(Wrap::None);
        let attrs = Attrs::new()
            .family(cosmic_family(&style.font_family))
            .weight(Weight(style.font_weight.0))
            .style(cosmic_style(style.font_style));
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(false);
    }

    let (width, baseline) = buffer
        .layout_runs()
        .next()
        .map_or((0.0, 0.8 * line_height), |run| {
            (run.line_w, run.line_y - run.line_top)
        });
    ShapedLine {
        buffer,
        width,
        baseline,
        line_height,
    }
}

fn cosmic_family(family: &FontFamily) -> Family<'_> {
    match family {
        FontFamily::Serif => Family::Serif,
        FontFamily::SansSerif => Family::SansSerif,
        FontFamily::Monospace => Family::Monospace,
        FontFamily::Named(name) => Family::Name(name.as_ref()),
    }
}

fn cosmic_style(style: FontStyle) -> Style {
    match style {
        FontStyle::Normal => Style::Normal,
        FontStyle::Italic => Style::Italic,
        FontStyle::Oblique => Style::Oblique,
    }
}

/// A [`TextMeasurer`] backed by cosmic-text.
///
/// Pair it with a [`crate::PixelSurface`] built from the same [`FontKit`].
#[derive(Clone, Debug)]
pub struct CosmicTextMeasurer {
    fonts: FontKit,
}

impl CosmicTextMeasurer {
    /// Creates a measurer that shapes with `fonts`.
    pub fn new(fonts: FontKit) -> Self {
        Self { fonts }
    }
}

impl TextMeasurer for CosmicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let text = text.split('\n').next().unwrap_or("");
        if text.is_empty() {
            return TextMetrics::ZERO;
        }

        let mut fonts = self.fonts.borrow_mut();
        let line = shape_line(&mut fonts.system, text, style, style.font_size);
        if line.width <= 0.0 && !text.trim().is_empty() {
            warn!(
                "no font shaped {text:?} in {}",
                style.font_family.as_css_family()
            );
        }
        let ascent = f64::from(line.baseline);
        TextMetrics {
            advance_width: f64::from(line.width),
            ascent,
            descent: (f64::from(line.line_height) - ascent).max(0.0),
            leading: 0.0,
        }
    }
}
