// Copyright 2025 the icontxt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw text to content lines.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// The ordered lines of an icon's text block.
///
/// Leading and trailing blank (empty or whitespace-only) lines are removed;
/// interior lines, blank or not, are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentLines {
    lines: Vec<String>,
}

impl ContentLines {
    /// Splits raw input into content lines.
    ///
    /// `\r\n`, `\r` and `\n` are all accepted as line separators. Input that
    /// contains only blank lines yields an empty set of lines.
    pub fn from_text(raw: &str) -> Self {
        let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = unified.split('\n').collect();

        let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
            return Self::default();
        };
        let last = lines
            .iter()
            .rposition(|line| !is_blank(line))
            .unwrap_or(first);

        Self {
            lines: lines[first..=last]
                .iter()
                .map(|line| String::from(*line))
                .collect(),
        }
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Returns the lines as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;

    use super::*;

    fn lines(raw: &str) -> Vec<String> {
        ContentLines::from_text(raw).as_slice().to_vec()
    }

    #[test]
    fn empty_and_blank_input_yields_nothing() {
        for raw in ["", "\n", "\r\n\r\n", "   \n\t\n", "\r \r\n \n"] {
            assert!(
                ContentLines::from_text(raw).is_empty(),
                "expected no lines for {raw:?}"
            );
        }
    }

    #[test]
    fn interior_blank_lines_are_preserved() {
        assert_eq!(lines("Line1\n\nLine3"), ["Line1", "", "Line3"]);
    }

    #[test]
    fn outer_blank_lines_are_trimmed_for_any_count() {
        for leading in 0..4 {
            for trailing in 0..4 {
                let raw = format!(
                    "{}A\n  \nB{}",
                    " \r\n".repeat(leading),
                    "\n\t".repeat(trailing)
                );
                assert_eq!(lines(&raw), ["A", "  ", "B"], "input {raw:?}");
            }
        }
    }

    #[test]
    fn all_separator_kinds_split_lines() {
        assert_eq!(lines("a\r\nb\rc\nd"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn content_lines_keep_their_own_whitespace() {
        assert_eq!(lines("\n  indented  \n"), ["  indented  "]);
    }
}
