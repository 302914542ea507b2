//! Board representation for Bagh-Chal

pub mod adjacency;
pub mod board;


// Re-exports
pub use adjacency::{is_adjacent, neighbors};
pub use board::Board;

use std::fmt;
use std::str::FromStr;

/// Board size (5x5 intersections)
pub const BOARD_SIZE: usize = 5;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 25

/// Content of a single intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Tiger,
    Goat,
}

/// The two sides of the hunt game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Tiger,
    Goat,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Tiger => Side::Goat,
            Side::Goat => Side::Tiger,
        }
    }

    /// Cell content owned by this side
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Side::Tiger => Cell::Tiger,
            Side::Goat => Cell::Goat,
        }
    }
}

impl Cell {
    /// Owning side, `None` for an empty cell
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Tiger => Some(Side::Tiger),
            Cell::Goat => Some(Side::Goat),
        }
    }

    /// Single-character glyph used by the text rendering
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Tiger => 'T',
            Cell::Goat => 'G',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Tiger => write!(f, "Tiger"),
            Side::Goat => write!(f, "Goat"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tiger" | "t" => Ok(Side::Tiger),
            "goat" | "sheep" | "g" => Ok(Side::Goat),
            other => Err(format!("unknown side '{other}'")),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// False for positions built directly from out-of-range fields
    #[inline]
    pub fn on_board(self) -> bool {
        Self::is_valid(self.row as i32, self.col as i32)
    }

    /// Position shifted by (dr, dc), or `None` if it falls off the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Chebyshev (king-move) distance between two positions
    #[inline]
    pub fn distance(self, other: Pos) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Iterate over every position in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
