// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning flags, config values and edit-script lines into icon input.

use std::io::Read;
use std::path::{Path, PathBuf};

use icontxt_layout::{AnchorPosition, HorizontalAlign, IconInput, InputChange, StyleSpec};
use icontxt_text::FontFamily;
use peniko::Color;
use peniko::color::{Srgb, parse_color as parse_css_color};
use thiserror::Error;

use crate::cli::StyleArgs;
use crate::config::InputDefaults;

/// Rejected input values.
#[derive(Debug, Error)]
pub(crate) enum InputError {
    #[error("invalid color {value:?}: {reason}")]
    Color { value: String, reason: String },

    #[error("unknown alignment {0:?} (expected start, center or end)")]
    Align(String),

    #[error("invalid number {value:?} for `{key}`")]
    Number { key: String, value: String },

    #[error("invalid boolean {value:?} for `{key}`")]
    Bool { key: String, value: String },

    #[error("unknown key `{0}`")]
    UnknownKey(String),

    #[error("expected `key=value`, got {0:?}")]
    Malformed(String),

    #[error("could not read text from {path}: {source}")]
    TextFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Parses a CSS color string (`#rgb`, `#rrggbb`, `rgb(...)`, named colors).
pub(crate) fn parse_color(value: &str) -> Result<Color, InputError> {
    parse_css_color(value.trim())
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|err| InputError::Color {
            value: value.to_owned(),
            reason: err.to_string(),
        })
}

pub(crate) fn parse_align(value: &str) -> Result<HorizontalAlign, InputError> {
    HorizontalAlign::from_name(value).ok_or_else(|| InputError::Align(value.to_owned()))
}

/// Builds the initial input from config defaults overridden by flags.
pub(crate) fn build_input(
    defaults: &InputDefaults,
    args: &StyleArgs,
) -> Result<IconInput, InputError> {
    let text = match (&args.text, &args.text_file) {
        (Some(text), _) => unescape_newlines(text),
        (None, Some(path)) => read_text(path)?,
        (None, None) => defaults.text.clone(),
    };
    let background = parse_color(args.background.as_deref().unwrap_or(&defaults.background))?;
    let font_color = parse_color(args.font_color.as_deref().unwrap_or(&defaults.font_color))?;
    let align = parse_align(args.align.as_deref().unwrap_or(&defaults.align))?;
    let family = FontFamily::from_name(
        args.font_family
            .as_deref()
            .unwrap_or(&defaults.font_family),
    );

    let style = StyleSpec::new(family)
        .with_font_size(args.font_size.unwrap_or(defaults.font_size))
        .with_line_height(args.line_height.unwrap_or(defaults.line_height))
        .with_bold(args.bold.unwrap_or(defaults.bold))
        .with_italic(args.italic.unwrap_or(defaults.italic))
        .with_align(align);

    Ok(IconInput {
        text,
        background,
        font_color,
        style,
        anchor: AnchorPosition::new(
            args.x.unwrap_or(defaults.x),
            args.y.unwrap_or(defaults.y),
        ),
    })
}

fn read_text(path: &Path) -> Result<String, InputError> {
    let to_error = |source| InputError::TextFile {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(to_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(to_error)
    }
}

/// Replaces literal `\n` escapes with newlines.
pub(crate) fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// One line of an edit script.
#[derive(Debug)]
pub(crate) enum ScriptLine {
    /// Change one input field.
    Change(InputChange),
    /// Export the current icon, optionally to a specific path.
    Export(Option<PathBuf>),
    /// Blank line or `#` comment.
    Comment,
}

/// Parses one `key=value` edit-script line.
pub(crate) fn parse_script_line(line: &str) -> Result<ScriptLine, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ScriptLine::Comment);
    }
    if trimmed == "export" {
        return Ok(ScriptLine::Export(None));
    }
    if let Some(path) = trimmed.strip_prefix("export ") {
        let path = path.trim();
        return Ok(ScriptLine::Export(
            (!path.is_empty()).then(|| PathBuf::from(path)),
        ));
    }

    let (key, value) = trimmed
        .split_once('=')
        .ok_or_else(|| InputError::Malformed(trimmed.to_owned()))?;
    let key = key.trim();
    // Text keeps its surrounding spaces; trimming is the normalizer's job.
    let raw = line
        .split_once('=')
        .map_or("", |(_, value)| value.trim_end_matches(['\r', '\n']));
    let value = value.trim();

    let change = match key {
        "text" => InputChange::Text(unescape_newlines(raw)),
        "text+" => InputChange::AppendLine(unescape_newlines(raw)),
        "background" => InputChange::Background(parse_color(value)?),
        "color" | "font-color" => InputChange::FontColor(parse_color(value)?),
        "family" | "font-family" => InputChange::FontFamily(FontFamily::from_name(value)),
        "size" | "font-size" => InputChange::FontSize(parse_number(key, value)?),
        "line-height" => InputChange::LineHeight(parse_number(key, value)?),
        "bold" => InputChange::Bold(parse_bool(key, value)?),
        "italic" => InputChange::Italic(parse_bool(key, value)?),
        "align" => InputChange::Align(parse_align(value)?),
        "x" => InputChange::PositionX(parse_number(key, value)?),
        "y" => InputChange::PositionY(parse_number(key, value)?),
        _ => return Err(InputError::UnknownKey(key.to_owned())),
    };
    Ok(ScriptLine::Change(change))
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, InputError> {
    value.parse().map_err(|_| InputError::Number {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, InputError> {
    match value.to_ascii_lowercase().as_str() {
        "" | "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(InputError::Bool {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}
