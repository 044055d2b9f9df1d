//! Word-search over a rectangular letter grid.
//!
//! Every straight run in eight directions is indexed once into a shared
//! prefix tree; each query then walks the tree one character at a time.

pub mod grid;
pub mod index;
pub mod puzzle;
pub mod report;
pub mod settings;
pub mod trace_init;

pub use grid::{Direction, Grid, ValidationError, ValidationKind};
pub use index::{Origin, OriginSet, PrefixIndex, RunIndexer};
pub use puzzle::{Puzzle, PuzzleConfig, PuzzleError};
