//! Board coordinates and dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the board, addressed by 1-indexed rank and file.
///
/// Positions are plain coordinates: they carry no board and do no offset
/// arithmetic of their own. Ordering is rank-major, so sets of positions
/// iterate from the first rank upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub rank: u8,
    pub file: u8,
}

impl Position {
    /// Creates a position from rank and file.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Self {
        Position { rank, file }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rank, self.file)
    }
}

/// The dimensions of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub ranks: u8,
    pub files: u8,
}

impl Size {
    /// The standard 8x8 chessboard.
    pub const STANDARD: Size = Size { ranks: 8, files: 8 };

    /// Creates a size from rank and file counts.
    #[inline]
    pub const fn new(ranks: u8, files: u8) -> Self {
        Size { ranks, files }
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::STANDARD
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.ranks, self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(Position::new(2, 5), Position { rank: 2, file: 5 });
        assert_ne!(Position::new(2, 5), Position::new(5, 2));
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(4, 5).to_string(), "(4, 5)");
        assert_eq!(Size::STANDARD.to_string(), "8x8");
    }

    #[test]
    fn standard_size() {
        assert_eq!(Size::default(), Size::new(8, 8));
    }

    proptest! {
        #[test]
        fn ordering_is_rank_major(a in (0u8..16, 0u8..16), b in (0u8..16, 0u8..16)) {
            let pa = Position::new(a.0, a.1);
            let pb = Position::new(b.0, b.1);
            prop_assert_eq!(pa.cmp(&pb), a.cmp(&b));
        }
    }
}
