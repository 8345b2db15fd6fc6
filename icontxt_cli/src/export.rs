// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building the render pipeline and writing icons to disk.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use icontxt_layout::{CANVAS_SIZE, CommandList, Editor, IconInput, Renderer};
use icontxt_raster::{CosmicTextMeasurer, DEFAULT_EXPORT_NAME, FontKit, PixelSurface};
use icontxt_text::{HeuristicTextMeasurer, TextMeasurer};
use icontxt_text_parley::ParleyTextMeasurer;
use kurbo::Size;
use log::info;

use crate::cli::{FontArgs, MeasurerKind};
use crate::config::Config;
use crate::svg;

/// The editor every command drives: a pixel surface plus a boxed measurer.
pub(crate) type IconEditor = Editor<PixelSurface, Box<dyn TextMeasurer>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    /// `.svg` (any case) selects SVG; everything else is PNG.
    pub(crate) fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Png,
        }
    }
}

/// Loads fonts, picks the measurer and performs the initial render pass.
pub(crate) fn build_editor(
    config: &Config,
    fonts_args: &FontArgs,
    input: IconInput,
) -> anyhow::Result<IconEditor> {
    let fonts = FontKit::system();
    for path in config.font_files.iter().chain(&fonts_args.font_files) {
        fonts
            .load_font_file(path)
            .with_context(|| format!("loading font file {}", path.display()))?;
    }
    let measurer: Box<dyn TextMeasurer> = match fonts_args.measurer {
        MeasurerKind::Cosmic => Box::new(CosmicTextMeasurer::new(fonts.clone())),
        MeasurerKind::Parley => Box::new(ParleyTextMeasurer::new()),
        MeasurerKind::Heuristic => Box::new(HeuristicTextMeasurer),
    };
    let surface = PixelSurface::new(CANVAS_SIZE, fonts);
    Ok(Editor::new(Renderer::new(surface, measurer), input))
}

/// Resolves the output path: flag, then config, then the default name.
pub(crate) fn output_path(flag: Option<&Path>, config: &Config) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_NAME))
}

/// Renders the editor's current input once more and writes it to `path`.
pub(crate) fn export(editor: &mut IconEditor, path: &Path) -> anyhow::Result<()> {
    match ExportFormat::from_path(path) {
        ExportFormat::Png => editor
            .export()
            .save_png(path)
            .with_context(|| format!("writing {}", path.display()))?,
        ExportFormat::Svg => {
            let svg = render_svg(editor.renderer().measurer(), editor.input());
            std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote SVG to {}", path.display());
        }
    }
    Ok(())
}

/// Renders `input` into a paint-command recording and serializes it as SVG.
pub(crate) fn render_svg(measurer: &dyn TextMeasurer, input: &IconInput) -> String {
    let side = f64::from(CANVAS_SIZE);
    let mut renderer = Renderer::new(CommandList::new(Size::new(side, side)), measurer);
    renderer.render(input);
    svg::to_svg_string(renderer.surface())
}
