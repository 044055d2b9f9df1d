use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use wordgrid::report::{read_lines, write_report};
use wordgrid::settings::{OutputFormat, Settings};
use wordgrid::trace_init::init_tracing;
use wordgrid::Puzzle;

/// Given a rectangular letter grid and a list of words, print each word with
/// its origins, or "False" if it does not occur. Each origin is
/// {row}_{column}_{direction}, e.g. "12_5_UL" for the up-left diagonal
/// starting at (12, 5); single letters use the direction "X".
#[derive(Parser)]
#[command(name = "wordgrid", about = "Find words in a letter grid")]
struct Cli {
    /// Path to the word list (one word per line)
    #[arg(long)]
    words: PathBuf,
    /// Path to the puzzle grid (one row per line)
    #[arg(long)]
    puzzle: PathBuf,
    /// Log indexing progress
    #[arg(short, long)]
    verbose: bool,
    /// Output as JSON lines instead of text
    #[arg(long)]
    json: bool,
    /// Path to a settings TOML file (optional)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write JSON trace logs to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path).unwrap_or_else(|e| {
            eprintln!("Failed to load settings from {}: {}", path.display(), e);
            process::exit(1);
        }),
        None => Settings::default(),
    };
    settings.search.verbose |= cli.verbose;
    if cli.json {
        settings.output.format = OutputFormat::Json;
    }

    init_tracing(settings.search.verbose, cli.log_dir.as_deref());

    let rows = read_lines(&cli.puzzle).unwrap_or_else(|e| {
        eprintln!("Failed to read puzzle {}: {}", cli.puzzle.display(), e);
        process::exit(1);
    });
    let words = read_lines(&cli.words).unwrap_or_else(|e| {
        eprintln!("Failed to read word list {}: {}", cli.words.display(), e);
        process::exit(1);
    });

    let puzzle = Puzzle::from_rows(&rows, settings.puzzle_config()).unwrap_or_else(|e| {
        eprintln!("Failed to build puzzle from {}: {}", cli.puzzle.display(), e);
        process::exit(1);
    });

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = write_report(&puzzle, &words, &settings.output, &mut out).and_then(|()| {
        out.flush()?;
        Ok(())
    }) {
        eprintln!("Failed to write results: {}", e);
        process::exit(1);
    }
}
