// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `icontxt`: fit text into a square app icon and export it as PNG or SVG.
//!
//! Run with `icontxt render --text "Hi"` to write `app-icon-1024.png`, or feed
//! `key=value` lines to `icontxt edit` to re-render after every change.

mod cli;
mod config;
mod export;
mod input;
mod svg;
mod theme;

use std::io::{BufRead, Write};

use anyhow::Context as _;
use clap::Parser;
use icontxt_layout::Status;
use log::{debug, error};

use crate::cli::{Cli, Command, EditArgs, InitArgs, RenderArgs, ThemeAction, ThemeArgs};
use crate::config::Config;
use crate::export::{IconEditor, build_editor, export, output_path};
use crate::input::{ScriptLine, build_input, parse_script_line};
use crate::theme::{Theme, ThemeStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(cli.config.as_deref()).context("loading configuration")?;
    match cli.command {
        Command::Render(args) => run_render(&config, &args),
        Command::Edit(args) => run_edit(&config, &args),
        Command::Theme(args) => run_theme(&args),
        Command::Init(args) => run_init(&config, &args),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// The line printed after each render pass.
fn status_line(status: Status) -> &'static str {
    if status.is_warning() {
        status.message()
    } else {
        "ok"
    }
}

fn run_render(config: &Config, args: &RenderArgs) -> anyhow::Result<()> {
    let input = build_input(&config.defaults, &args.style).context("invalid input")?;
    let mut editor = build_editor(config, &args.fonts, input)?;
    let status = editor.status();
    if status.is_warning() {
        println!("{status}");
    }
    let path = output_path(args.output.as_deref(), config);
    export(&mut editor, &path)?;
    println!("{}", path.display());
    Ok(())
}

fn run_edit(config: &Config, args: &EditArgs) -> anyhow::Result<()> {
    let input = build_input(&config.defaults, &args.style).context("invalid input")?;
    let mut editor = build_editor(config, &args.fonts, input)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", status_line(editor.status()))?;
    run_script(&mut editor, config, stdin.lock(), &mut stdout)?;
    debug!("edit session finished after {} render passes", editor.passes());
    Ok(())
}

/// Applies every script line in order; bad lines are reported and skipped.
fn run_script(
    editor: &mut IconEditor,
    config: &Config,
    script: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for (index, line) in script.lines().enumerate() {
        let line = line.context("reading edit script")?;
        let number = index + 1;
        match parse_script_line(&line) {
            Ok(ScriptLine::Comment) => {}
            Ok(ScriptLine::Change(change)) => {
                let status = editor.apply(change).status;
                writeln!(out, "{}", status_line(status))?;
            }
            Ok(ScriptLine::Export(path)) => {
                let path = output_path(path.as_deref(), config);
                match export(editor, &path) {
                    Ok(()) => writeln!(out, "exported {}", path.display())?,
                    Err(err) => {
                        error!("line {number}: {err:#}");
                        writeln!(out, "error: line {number}: {err:#}")?;
                    }
                }
            }
            Err(err) => {
                error!("line {number}: {err}");
                writeln!(out, "error: line {number}: {err}")?;
            }
        }
    }
    Ok(())
}

fn run_theme(args: &ThemeArgs) -> anyhow::Result<()> {
    let store = ThemeStore::new(&args.prefs);
    let context = || format!("updating theme preferences in {}", store.path().display());
    let current = store.init().with_context(context)?;
    let theme = match args.action {
        ThemeAction::Show => current,
        ThemeAction::Light => Theme::Light,
        ThemeAction::Dark => Theme::Dark,
        ThemeAction::Toggle => current.toggled(),
    };
    let label = store.update(theme).with_context(context)?;
    println!("{theme} ({label})");
    Ok(())
}

fn run_init(config: &Config, args: &InitArgs) -> anyhow::Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (pass --force to overwrite)",
            args.path.display()
        );
    }
    config
        .save(&args.path)
        .with_context(|| format!("writing {}", args.path.display()))?;
    println!("{}", args.path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use icontxt_layout::IconInput;

    use super::*;
    use crate::cli::{FontArgs, MeasurerKind};

    fn heuristic_editor(text: &str) -> IconEditor {
        let args = FontArgs {
            measurer: MeasurerKind::Heuristic,
            font_files: Vec::new(),
        };
        build_editor(&Config::default(), &args, IconInput::new(text)).expect("editor")
    }

    fn run(editor: &mut IconEditor, script: &str) -> Vec<String> {
        let mut out = Vec::new();
        run_script(editor, &Config::default(), script.as_bytes(), &mut out).expect("script");
        String::from_utf8(out)
            .expect("utf-8 output")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn each_accepted_line_renders_and_reports() {
        let mut editor = heuristic_editor("");
        let out = run(
            &mut editor,
            "# comment\ntext=A\nsize=700\ntext+=ABCDEFGHIJKLMNOPQRSTUVWXYZ\nsize=abc\ntext=\n",
        );
        assert_eq!(
            out,
            [
                "ok",
                "ok",
                "Text was auto-scaled to fit the icon.",
                "error: line 5: invalid number \"abc\" for `size`",
                "Text is empty. Export will include only the background color.",
            ]
        );
        // Initial pass plus four accepted changes.
        assert_eq!(editor.passes(), 5);
        assert_eq!(editor.input().style.font_size(), 700);
    }

    #[test]
    fn script_export_writes_the_requested_file() {
        let mut editor = heuristic_editor("Hi");
        let path = std::env::temp_dir().join(format!("icontxt-script-{}.svg", std::process::id()));
        let out = run(&mut editor, &format!("export {}\n", path.display()));
        let svg = std::fs::read_to_string(&path).expect("svg written");
        std::fs::remove_file(&path).ok();
        assert_eq!(out, [format!("exported {}", path.display())]);
        assert!(svg.contains(">Hi</text>"), "{svg}");
    }

    #[test]
    fn status_line_is_ok_when_clear() {
        assert_eq!(status_line(Status::Clear), "ok");
        assert_eq!(
            status_line(Status::MinimumSize),
            "Text is very long and may still overflow at the minimum font size."
        );
    }
}
