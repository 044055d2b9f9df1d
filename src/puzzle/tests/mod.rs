
use super::{Puzzle, PuzzleConfig};

pub(super) fn puzzle(rows: &[&str]) -> Puzzle {
    Puzzle::from_rows(rows, PuzzleConfig::default()).unwrap()
}
