mod direction;

pub use direction::Direction;

use std::fmt;

/// Why a set of rows was rejected as a puzzle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Empty,
    ZeroWidth,
    Ragged,
    ControlCharacter,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationKind::Empty => "empty grid",
            ValidationKind::ZeroWidth => "zero-width rows",
            ValidationKind::Ragged => "non-rectangular grid",
            ValidationKind::ControlCharacter => "control character in grid",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct ValidationError {
    pub kind: ValidationKind,
    pub detail: String,
}

impl ValidationError {
    fn new(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// A rectangular letter grid. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl Grid {
    /// Validate `rows` and build a grid. Letters are kept as given, with no
    /// case folding.
    pub fn new<I, S>(rows: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells: Vec<Vec<char>> = Vec::new();
        let mut cols = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let row: Vec<char> = row.as_ref().chars().collect();
            if i == 0 {
                if row.is_empty() {
                    return Err(ValidationError::new(
                        ValidationKind::ZeroWidth,
                        "row 1 has no letters",
                    ));
                }
                cols = row.len();
            } else if row.len() != cols {
                return Err(ValidationError::new(
                    ValidationKind::Ragged,
                    format!("expected {cols} columns, but row {} has {}", i + 1, row.len()),
                ));
            }
            if let Some(c) = row.iter().position(|ch| ch.is_control()) {
                return Err(ValidationError::new(
                    ValidationKind::ControlCharacter,
                    format!("row {}, column {} holds {:?}", i + 1, c + 1, row[c]),
                ));
            }
            cells.push(row);
        }
        if cells.is_empty() {
            return Err(ValidationError::new(
                ValidationKind::Empty,
                "input cannot be empty",
            ));
        }
        Ok(Self { cells, cols })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Letter at signed coordinates; `None` once a walk leaves the grid.
    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    /// Iterate the letters of the run starting at (`row`, `col`) and stepping
    /// in `direction` until the walk leaves the grid. `Spot` yields only the
    /// start letter.
    pub fn run(&self, row: usize, col: usize, direction: Direction) -> Run<'_> {
        Run {
            grid: self,
            row: row as isize,
            col: col as isize,
            step: direction.step(),
            done: false,
        }
    }
}

pub struct Run<'a> {
    grid: &'a Grid,
    row: isize,
    col: isize,
    step: Option<(isize, isize)>,
    done: bool,
}

impl Iterator for Run<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.done {
            return None;
        }
        let letter = self.grid.get(self.row, self.col);
        match (letter, self.step) {
            (Some(_), Some((dr, dc))) => {
                self.row += dr;
                self.col += dc;
            }
            _ => self.done = true,
        }
        letter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_grid() {
        let grid = Grid::new(["CAT", "ABC", "TCA"]).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(0, 0), Some('C'));
        assert_eq!(grid.get(2, 2), Some('A'));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_empty_rejected() {
        let err = Grid::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.kind, ValidationKind::Empty);
    }

    #[test]
    fn test_ragged_rejected() {
        let err = Grid::new(["ABC", "AB"]).unwrap_err();
        assert_eq!(err.kind, ValidationKind::Ragged);
        assert_eq!(err.to_string(), "non-rectangular grid: expected 3 columns, but row 2 has 2");
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = Grid::new(["", ""]).unwrap_err();
        assert_eq!(err.kind, ValidationKind::ZeroWidth);
    }

    #[test]
    fn test_control_character_rejected() {
        let err = Grid::new(["AB", "A\t"]).unwrap_err();
        assert_eq!(err.kind, ValidationKind::ControlCharacter);
    }

    #[test]
    fn test_case_preserved() {
        let grid = Grid::new(["aB"]).unwrap();
        assert_eq!(grid.get(0, 0), Some('a'));
        assert_eq!(grid.get(0, 1), Some('B'));
    }

    #[test]
    fn test_multibyte_letters_count_as_one_column() {
        let grid = Grid::new(["ねこ", "いぬ"]).unwrap();
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(1, 1), Some('ぬ'));
    }

    #[test]
    fn test_run_stops_at_edge() {
        let grid = Grid::new(["CAT", "ABC", "TCA"]).unwrap();
        let s: String = grid.run(0, 0, Direction::DownRight).collect();
        assert_eq!(s, "CBA");
        let s: String = grid.run(2, 0, Direction::UpRight).collect();
        assert_eq!(s, "TBT");
        let s: String = grid.run(0, 2, Direction::Up).collect();
        assert_eq!(s, "T");
        let s: String = grid.run(1, 1, Direction::Spot).collect();
        assert_eq!(s, "B");
    }
}
