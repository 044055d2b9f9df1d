use tracing::{debug, debug_span, trace};

use super::{IndexError, Origin, PrefixIndex};
use crate::grid::{Direction, Grid};

/// Scans every (start cell, direction) run of a grid into a `PrefixIndex`.
pub struct RunIndexer<'a> {
    grid: &'a Grid,
    verbose: bool,
}

impl<'a> RunIndexer<'a> {
    pub fn new(grid: &'a Grid, verbose: bool) -> Self {
        Self { grid, verbose }
    }

    /// Build a fresh index over the whole grid.
    pub fn build(&self) -> PrefixIndex {
        let mut index = PrefixIndex::new();
        self.index_rows(&mut index, 0..self.grid.rows());
        index
    }

    /// Populate `index`, which must not hold any runs yet.
    pub fn populate(&self, index: &mut PrefixIndex) -> Result<(), IndexError> {
        if !index.is_empty() {
            return Err(IndexError::AlreadyPopulated);
        }
        self.index_rows(index, 0..self.grid.rows());
        Ok(())
    }

    /// Index the runs starting in `rows` only. Indices built over disjoint
    /// row ranges combine with `PrefixIndex::merge`.
    pub fn index_rows(&self, index: &mut PrefixIndex, rows: std::ops::Range<usize>) {
        let _span = debug_span!("index_runs", rows = self.grid.rows(), cols = self.grid.cols())
            .entered();
        for row in rows.start..rows.end.min(self.grid.rows()) {
            for col in 0..self.grid.cols() {
                for direction in Direction::SCAN {
                    self.index_run(index, row, col, direction);
                }
            }
            debug!(row, "row indexed");
        }
        debug!(node_count = index.node_count());
    }

    fn index_run(&self, index: &mut PrefixIndex, row: usize, col: usize, direction: Direction) {
        let mut node = index.root_mut();
        for (depth, letter) in self.grid.run(row, col, direction).enumerate() {
            // A single letter has no direction: every scan through this
            // start cell records the same `Spot` origin.
            let origin = if depth == 0 {
                Origin::new(row, col, Direction::Spot)
            } else {
                Origin::new(row, col, direction)
            };
            node = node.child_or_insert(letter);
            node.record(origin);
            if self.verbose {
                trace!(%letter, depth, %origin, "recorded");
            }
        }
    }
}
