//! Line-oriented input readers and result rendering.

use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use serde::Serialize;

use crate::index::{Origin, OriginSet};
use crate::puzzle::{Puzzle, PuzzleError};
use crate::settings::{OutputFormat, OutputSettings};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

/// Trimmed, non-blank lines of `reader`, in order.
pub fn read_lines_from<R: BufRead>(reader: R) -> Result<Vec<String>, ReportError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

pub fn read_lines(path: &Path) -> Result<Vec<String>, ReportError> {
    read_lines_from(BufReader::new(fs::File::open(path)?))
}

/// `{0_0_R, 0_0_D}`, in origin order.
pub fn render_origins(origins: &OriginSet) -> String {
    let tokens: Vec<String> = origins.iter().map(Origin::to_string).collect();
    format!("{{{}}}", tokens.join(", "))
}

pub fn render_text(word: &str, found: Option<&OriginSet>, not_found: &str) -> String {
    match found {
        Some(origins) => format!("{word} {}", render_origins(origins)),
        None => format!("{word} {not_found}"),
    }
}

/// One JSON line per searched word.
#[derive(Debug, Serialize)]
pub struct SearchRecord<'a> {
    pub word: &'a str,
    pub found: bool,
    pub origins: Vec<String>,
}

impl<'a> SearchRecord<'a> {
    pub fn new(word: &'a str, found: Option<&OriginSet>) -> Self {
        Self {
            word,
            found: found.is_some(),
            origins: found
                .map(|o| o.iter().map(Origin::to_string).collect())
                .unwrap_or_default(),
        }
    }
}

/// Search every word in order and write one result line per word.
pub fn write_report<W: Write>(
    puzzle: &Puzzle,
    words: &[String],
    output: &OutputSettings,
    out: &mut W,
) -> Result<(), ReportError> {
    for word in words {
        let found = puzzle.search(word)?;
        match output.format {
            OutputFormat::Text => {
                writeln!(out, "{}", render_text(word, found, &output.not_found))?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &SearchRecord::new(word, found))?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
