//! The word-search facade: owns one validated grid and its prefix index.

#[cfg(test)]
mod tests;

use tracing::debug_span;

use crate::grid::{Grid, ValidationError};
use crate::index::{IndexError, OriginSet, PrefixIndex, RunIndexer};

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("invalid grid: {0}")]
    Validation(#[from] ValidationError),

    #[error("this puzzle has already been initialized")]
    AlreadyInitialized,

    #[error("this puzzle has not been initialized")]
    NotInitialized,
}

impl From<IndexError> for PuzzleError {
    fn from(e: IndexError) -> Self {
        match e {
            IndexError::AlreadyPopulated => PuzzleError::AlreadyInitialized,
        }
    }
}

/// Core-facing configuration. Diagnostic only: never changes results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub verbose: bool,
}

#[derive(Debug, Default)]
pub struct Puzzle {
    grid: Option<Grid>,
    index: PrefixIndex,
    config: PuzzleConfig,
}

impl Puzzle {
    /// An empty puzzle; call [`Puzzle::ingest`] before searching.
    pub fn new(config: PuzzleConfig) -> Self {
        Self {
            grid: None,
            index: PrefixIndex::new(),
            config,
        }
    }

    pub fn from_rows<I, S>(rows: I, config: PuzzleConfig) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut puzzle = Self::new(config);
        puzzle.ingest(rows)?;
        Ok(puzzle)
    }

    /// Validate `rows` and index every run. A puzzle ingests exactly once;
    /// on error nothing is retained.
    pub fn ingest<I, S>(&mut self, rows: I) -> Result<(), PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.grid.is_some() {
            return Err(PuzzleError::AlreadyInitialized);
        }
        let grid = Grid::new(rows)?;
        let _span = debug_span!("ingest", rows = grid.rows(), cols = grid.cols()).entered();
        RunIndexer::new(&grid, self.config.verbose).populate(&mut self.index)?;
        self.grid = Some(grid);
        Ok(())
    }

    /// Every origin where `word` begins, or `Ok(None)` if it does not occur.
    pub fn search(&self, word: &str) -> Result<Option<&OriginSet>, PuzzleError> {
        if self.grid.is_none() {
            return Err(PuzzleError::NotInitialized);
        }
        Ok(self.index.lookup(word))
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }
}
