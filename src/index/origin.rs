use std::fmt;
use std::str::FromStr;

use crate::grid::Direction;

/// Where a matched word begins and which way it reads.
///
/// Ordered by row, then column, then direction, which is the order origins
/// are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Origin {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Origin {
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }
}

/// Renders as `{row}_{col}_{direction}`, e.g. `12_5_UL`.
impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.row, self.col, self.direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed origin {0:?} (expected row_col_direction)")]
pub struct ParseOriginError(String);

impl FromStr for Origin {
    type Err = ParseOriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseOriginError(s.to_string());
        let mut parts = s.splitn(3, '_');
        let row = parts.next().and_then(parse_coordinate).ok_or_else(err)?;
        let col = parts.next().and_then(parse_coordinate).ok_or_else(err)?;
        let direction = parts
            .next()
            .and_then(Direction::from_token)
            .ok_or_else(err)?;
        Ok(Self::new(row, col, direction))
    }
}

/// Plain decimal as `Display` writes it: no sign, no leading zeros.
fn parse_coordinate(s: &str) -> Option<usize> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s.len() == 1 || !s.starts_with('0'));
    if !canonical {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Origin::new(12, 5, Direction::UpLeft).to_string(), "12_5_UL");
        assert_eq!(Origin::new(0, 0, Direction::Spot).to_string(), "0_0_X");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "3_6_DR".parse::<Origin>(),
            Ok(Origin::new(3, 6, Direction::DownRight))
        );
        assert!("3_6".parse::<Origin>().is_err());
        assert!("3_x_R".parse::<Origin>().is_err());
        assert!("3_6_NE".parse::<Origin>().is_err());
        assert_eq!("0_10_X".parse::<Origin>(), Ok(Origin::new(0, 10, Direction::Spot)));
    }

    #[test]
    fn test_parse_rejects_non_canonical_numbers() {
        for s in ["+3_6_R", "03_6_R", "3_06_R", "3_+6_R", "_6_R", "3__R"] {
            assert!(s.parse::<Origin>().is_err(), "{s}");
        }
    }

    #[test]
    fn test_ordering() {
        let mut v = vec![
            Origin::new(1, 0, Direction::Up),
            Origin::new(0, 2, Direction::Left),
            Origin::new(0, 2, Direction::Right),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Origin::new(0, 2, Direction::Right),
                Origin::new(0, 2, Direction::Left),
                Origin::new(1, 0, Direction::Up),
            ]
        );
    }
}
