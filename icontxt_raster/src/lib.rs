// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CPU rasterization and PNG export for icontxt icons.
//!
//! [`PixelSurface`] implements [`icontxt_layout::PaintSurface`] on top of an
//! [`image::RgbaImage`], drawing glyphs with cosmic-text. A
//! [`CosmicTextMeasurer`] built from the same [`FontKit`] gives the fitter
//! widths that match the painted glyphs.
//!
//! DejaVu Sans (regular and bold) is embedded and serves as the generic
//! sans-serif family, so output does not depend on the host's fonts. The
//! faces are covered by `assets/DejaVu-LICENSE.txt`.

mod error;
mod fonts;
mod surface;

pub use error::RasterError;
pub use fonts::{CosmicTextMeasurer, FontKit};
pub use surface::PixelSurface;

/// File name used when exporting without an explicit path.
pub const DEFAULT_EXPORT_NAME: &str = "app-icon-1024.png";
