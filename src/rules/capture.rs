//! Capture jumps and pure move application
//!
//! Capture pattern: T-G-_ along any of the eight lines, where the tiger jumps
//! over the adjacent goat to the mirrored empty cell and removes the goat.

use crate::board::{Board, Cell, Pos, Side};

use super::moves::Move;

/// Landing cell for a tiger at `tiger` jumping the goat at `goat`.
///
/// The landing cell is `goat` mirrored away from `tiger`. Returns `None` if
/// it falls off the board or is not empty. Callers are responsible for
/// `goat` actually holding a goat adjacent to `tiger`.
#[inline]
pub fn capture_landing(board: &Board, tiger: Pos, goat: Pos) -> Option<Pos> {
    let dr = goat.row as i32 - tiger.row as i32;
    let dc = goat.col as i32 - tiger.col as i32;
    goat.offset(dr, dc).filter(|&landing| board.is_empty(landing))
}

/// Midpoint of a straight two-cell move, `None` for anything else.
///
/// "Straight" means each coordinate delta is 0 or ±2, so the midpoint lies on
/// the line between the cells.
#[inline]
pub fn jump_midpoint(from: Pos, to: Pos) -> Option<Pos> {
    let dr = to.row as i32 - from.row as i32;
    let dc = to.col as i32 - from.col as i32;
    let straight = matches!(dr, -2 | 0 | 2) && matches!(dc, -2 | 0 | 2);
    if from.distance(to) == 2 && straight {
        from.offset(dr / 2, dc / 2)
    } else {
        None
    }
}

/// Apply `mv` for `side`, returning the new board and whether a goat was
/// captured.
///
/// Pure: `board` is taken by reference and never modified. A tiger step of
/// Chebyshev distance 2 along a straight line is a capture when the midpoint
/// holds a goat, which is removed; otherwise it is treated as a plain step.
/// Legality is not checked here; validate against
/// [`legal_moves`](super::legal_moves) first.
#[must_use]
pub fn apply_move(board: &Board, mv: Move, side: Side) -> (Board, bool) {
    let mut next = *board;
    let mut captured = false;

    if let Move::Step { from, to } = mv {
        next.set(from, Cell::Empty);

        if side == Side::Tiger {
            if let Some(mid) = jump_midpoint(from, to) {
                if next.get(mid) == Cell::Goat {
                    next.set(mid, Cell::Empty);
                    captured = true;
                }
            }
        }
    }

    next.set(mv.to(), side.cell());
    (next, captured)
}
