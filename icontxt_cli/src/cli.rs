// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Fit text into a square app icon and export it.
#[derive(Debug, Parser)]
#[command(name = "icontxt", version, about)]
pub(crate) struct Cli {
    /// Configuration file (defaults to `icontxt.toml` if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Increase log verbosity (`-v` debug, `-vv` trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Render one icon and write it to disk.
    Render(RenderArgs),
    /// Apply `key=value` edits read from stdin, re-rendering after each.
    Edit(EditArgs),
    /// Show or change the stored UI theme.
    Theme(ThemeArgs),
    /// Write the effective configuration to a file.
    Init(InitArgs),
}

/// Overrides for the configured input values.
#[derive(Clone, Debug, Default, Args)]
pub(crate) struct StyleArgs {
    /// Icon text; `\n` separates lines.
    #[arg(short, long, conflicts_with = "text_file")]
    pub(crate) text: Option<String>,

    /// Read the icon text from a file (`-` for stdin).
    #[arg(long, value_name = "PATH")]
    pub(crate) text_file: Option<PathBuf>,

    /// Background color (CSS syntax, always painted opaque).
    #[arg(long, value_name = "COLOR")]
    pub(crate) background: Option<String>,

    /// Text color (CSS syntax).
    #[arg(long, value_name = "COLOR")]
    pub(crate) font_color: Option<String>,

    /// Font family name or a generic family.
    #[arg(long, value_name = "NAME")]
    pub(crate) font_family: Option<String>,

    /// Requested font size in pixels (clamped to 40..=700).
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    pub(crate) font_size: Option<i64>,

    /// Line-height multiplier (clamped to 0.8..=2.0).
    #[arg(long, value_name = "FACTOR", allow_negative_numbers = true)]
    pub(crate) line_height: Option<f64>,

    /// Bold weight.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub(crate) bold: Option<bool>,

    /// Italic style.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub(crate) italic: Option<bool>,

    /// Horizontal alignment: start, center or end.
    #[arg(long, value_name = "ALIGN")]
    pub(crate) align: Option<String>,

    /// Anchor x in percent of the canvas (clamped to 0..=100).
    #[arg(short, long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub(crate) x: Option<f64>,

    /// Anchor y in percent of the canvas (clamped to 0..=100).
    #[arg(short, long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub(crate) y: Option<f64>,
}

/// Which glyph metrics provider drives the fit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum MeasurerKind {
    /// cosmic-text, the same shaper that paints the PNG.
    #[default]
    Cosmic,
    /// Parley.
    Parley,
    /// Fixed 0.6 em per character; needs no fonts.
    Heuristic,
}

#[derive(Clone, Debug, Default, Args)]
pub(crate) struct FontArgs {
    /// Glyph metrics provider used for fitting.
    #[arg(long, value_enum, default_value_t)]
    pub(crate) measurer: MeasurerKind,

    /// Extra font files to load (repeatable).
    #[arg(long = "font-file", value_name = "PATH")]
    pub(crate) font_files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub(crate) style: StyleArgs,

    #[command(flatten)]
    pub(crate) fonts: FontArgs,

    /// Output file; `.svg` writes SVG, anything else PNG.
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub(crate) struct EditArgs {
    #[command(flatten)]
    pub(crate) style: StyleArgs,

    #[command(flatten)]
    pub(crate) fonts: FontArgs,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeAction {
    /// Print the stored theme.
    #[default]
    Show,
    /// Switch to the light theme.
    Light,
    /// Switch to the dark theme.
    Dark,
    /// Switch to the other theme.
    Toggle,
}

#[derive(Debug, Args)]
pub(crate) struct ThemeArgs {
    #[arg(value_enum, default_value_t)]
    pub(crate) action: ThemeAction,

    /// Preferences file holding the theme.
    #[arg(long, value_name = "PATH", default_value = "icontxt-prefs.toml")]
    pub(crate) prefs: PathBuf,
}

#[derive(Debug, Args)]
pub(crate) struct InitArgs {
    /// Destination file.
    #[arg(default_value = "icontxt.toml", value_name = "PATH")]
    pub(crate) path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub(crate) force: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_flags_parse() {
        let cli = Cli::try_parse_from([
            "icontxt",
            "-v",
            "render",
            "--text",
            "Hi",
            "--font-size",
            "-20",
            "--bold",
            "--italic",
            "false",
            "-x",
            "25",
            "--measurer",
            "heuristic",
            "-o",
            "icon.svg",
        ])
        .expect("valid arguments");
        assert_eq!(cli.verbose, 1);
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.style.text.as_deref(), Some("Hi"));
        assert_eq!(args.style.font_size, Some(-20));
        assert_eq!(args.style.bold, Some(true));
        assert_eq!(args.style.italic, Some(false));
        assert_eq!(args.style.x, Some(25.0));
        assert_eq!(args.fonts.measurer, MeasurerKind::Heuristic);
        assert_eq!(args.output, Some(PathBuf::from("icon.svg")));
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        assert!(Cli::try_parse_from(["icontxt", "render", "--font-size", "big"]).is_err());
    }

    #[test]
    fn theme_defaults_to_show() {
        let cli = Cli::try_parse_from(["icontxt", "theme"]).expect("valid arguments");
        let Command::Theme(args) = cli.command else {
            panic!("expected theme");
        };
        assert_eq!(args.action, ThemeAction::Show);
    }
}
