//! Fixed 5x5 board value

use std::fmt;

use super::{Cell, Pos, Side, BOARD_SIZE, TOTAL_CELLS};

/// Starting squares of the four tigers
pub const TIGER_CORNERS: [Pos; 4] = [
    Pos { row: 0, col: 0 },
    Pos { row: 0, col: 4 },
    Pos { row: 4, col: 0 },
    Pos { row: 4, col: 4 },
];

/// Game board.
///
/// A plain `Copy` value: applying a move produces a new board, so no two
/// search nodes or history snapshots can ever share cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    /// Completely empty board (used to build test positions)
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Opening position: tigers on the four corners, no goats
    pub fn new() -> Self {
        let mut board = Self::empty();
        for pos in TIGER_CORNERS {
            board.set(pos, Cell::Tiger);
        }
        board
    }

    /// Build a board from five text rows of `T`, `G` and `.`
    ///
    /// Returns `None` on a malformed layout.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != BOARD_SIZE {
                return None;
            }
            for (c, ch) in chars.into_iter().enumerate() {
                let cell = match ch {
                    'T' | 't' => Cell::Tiger,
                    'G' | 'g' => Cell::Goat,
                    '.' => Cell::Empty,
                    _ => return None,
                };
                board.set(Pos::new(r as u8, c as u8), cell);
            }
        }
        Some(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Does `side` own the piece at `pos`?
    #[inline]
    pub fn is_owned_by(&self, pos: Pos, side: Side) -> bool {
        self.get(pos) == side.cell()
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Positions holding a piece of `side`, in row-major order
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Pos> + '_ {
        let cell = side.cell();
        Pos::all().filter(move |&p| self.get(p) == cell)
    }

    /// Empty positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&p| self.is_empty(p))
    }

    #[inline]
    pub fn tiger_count(&self) -> usize {
        self.count(Cell::Tiger)
    }

    #[inline]
    pub fn goat_count(&self) -> usize {
        self.count(Cell::Goat)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(Pos::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
