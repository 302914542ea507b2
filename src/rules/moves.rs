//! Legal move generation
//!
//! Generation order is fixed (row-major over the mover's pieces, then the
//! neighbour table order), and the search relies on it for tie-breaking.

use std::fmt;

use crate::board::{neighbors, Board, Cell, Pos, Side};

use super::capture::capture_landing;
use super::Phase;

/// A single move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Goat enters the board on an empty cell (placement phase only)
    Place(Pos),
    /// Piece moves to an adjacent empty cell, or a tiger jumps over a goat
    Step { from: Pos, to: Pos },
}

impl Move {
    /// Destination cell
    #[inline]
    pub fn to(self) -> Pos {
        match self {
            Move::Place(to) | Move::Step { to, .. } => to,
        }
    }

    /// Origin cell, `None` for a placement
    #[inline]
    pub fn from(self) -> Option<Pos> {
        match self {
            Move::Place(_) => None,
            Move::Step { from, .. } => Some(from),
        }
    }

    /// True for a two-cell move, which only a tiger capture can produce
    #[inline]
    pub fn is_jump(self) -> bool {
        match self {
            Move::Place(_) => false,
            Move::Step { from, to } => from.distance(to) == 2,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(to) => write!(f, "place {to}"),
            Move::Step { from, to } if from.distance(*to) == 2 => write!(f, "{from} x {to}"),
            Move::Step { from, to } => write!(f, "{from} -> {to}"),
        }
    }
}

/// All legal moves for `side` on `board` in `phase`.
///
/// Goats in the placement phase may only place; every other case moves an
/// existing piece. Tigers additionally get a capture jump for each adjacent
/// goat whose mirrored landing cell is empty. An empty result means the side
/// has no move; it is never an error.
pub fn legal_moves(board: &Board, side: Side, phase: Phase) -> Vec<Move> {
    if side == Side::Goat && phase == Phase::Placement {
        return board.empty_cells().map(Move::Place).collect();
    }

    let mut moves = Vec::with_capacity(32);
    for from in board.pieces(side) {
        push_piece_moves(board, from, side, &mut moves);
    }
    moves
}

/// Legal moves of the single piece at `from`.
///
/// Empty if the cell is empty, or if it holds a goat during placement.
pub fn moves_from(board: &Board, from: Pos, phase: Phase) -> Vec<Move> {
    let Some(side) = board.get(from).side() else {
        return Vec::new();
    };
    if side == Side::Goat && phase == Phase::Placement {
        return Vec::new();
    }

    let mut moves = Vec::with_capacity(8);
    push_piece_moves(board, from, side, &mut moves);
    moves
}

fn push_piece_moves(board: &Board, from: Pos, side: Side, out: &mut Vec<Move>) {
    for &n in neighbors(from) {
        match board.get(n) {
            Cell::Empty => out.push(Move::Step { from, to: n }),
            Cell::Goat if side == Side::Tiger => {
                if let Some(landing) = capture_landing(board, from, n) {
                    out.push(Move::Step { from, to: landing });
                }
            }
            _ => {}
        }
    }
}
