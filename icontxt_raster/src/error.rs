// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors from loading fonts or exporting a raster.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Reading a font file or writing an image failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
