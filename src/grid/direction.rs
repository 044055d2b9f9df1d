use std::fmt;

/// A scan direction within the letter grid, plus the `X` marker used for
/// single-letter matches, which have no direction.
///
/// Variant order is the rendering order of origins sharing a start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    /// Origin direction of a one-letter match; renders as `X`.
    Spot,
}

impl Direction {
    /// The eight directions a run is scanned in. `Spot` never advances a scan.
    pub const SCAN: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// (row, column) increment to the next letter, or `None` for `Spot`.
    pub fn step(self) -> Option<(isize, isize)> {
        match self {
            Direction::Up => Some((-1, 0)),
            Direction::UpRight => Some((-1, 1)),
            Direction::Right => Some((0, 1)),
            Direction::DownRight => Some((1, 1)),
            Direction::Down => Some((1, 0)),
            Direction::DownLeft => Some((1, -1)),
            Direction::Left => Some((0, -1)),
            Direction::UpLeft => Some((-1, -1)),
            Direction::Spot => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Direction::Up => "U",
            Direction::UpRight => "UR",
            Direction::Right => "R",
            Direction::DownRight => "DR",
            Direction::Down => "D",
            Direction::DownLeft => "DL",
            Direction::Left => "L",
            Direction::UpLeft => "UL",
            Direction::Spot => "X",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::SCAN
            .into_iter()
            .chain(std::iter::once(Direction::Spot))
            .find(|d| d.token() == token)
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::UpRight => Direction::DownLeft,
            Direction::Right => Direction::Left,
            Direction::DownRight => Direction::UpLeft,
            Direction::Down => Direction::Up,
            Direction::DownLeft => Direction::UpRight,
            Direction::Left => Direction::Right,
            Direction::UpLeft => Direction::DownRight,
            Direction::Spot => Direction::Spot,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
