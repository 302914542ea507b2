//! Win conditions: tiger trapping and capture threshold
//!
//! - Goats win when at least one tiger exists and every tiger is trapped
//! - Tigers win once the capture count reaches the configured threshold

use crate::board::{neighbors, Board, Cell, Pos, Side};

use super::capture::capture_landing;

/// Is the tiger at `pos` unable to move?
///
/// A tiger is trapped when no neighbour is empty and no adjacent goat can be
/// jumped. Returns `false` if `pos` does not hold a tiger.
pub fn is_tiger_trapped(board: &Board, pos: Pos) -> bool {
    if board.get(pos) != Cell::Tiger {
        return false;
    }
    neighbors(pos).iter().all(|&n| match board.get(n) {
        Cell::Empty => false,
        Cell::Goat => capture_landing(board, pos, n).is_none(),
        Cell::Tiger => true,
    })
}

/// Goat-win condition: at least one tiger on the board and all are trapped
pub fn all_tigers_trapped(board: &Board) -> bool {
    let mut tigers = 0;
    for pos in board.pieces(Side::Tiger) {
        if !is_tiger_trapped(board, pos) {
            return false;
        }
        tigers += 1;
    }
    tigers > 0
}

/// Mobility of the tiger at `pos`: empty neighbours count 1, capture jumps 2
pub fn tiger_mobility(board: &Board, pos: Pos) -> u32 {
    neighbors(pos)
        .iter()
        .map(|&n| match board.get(n) {
            Cell::Empty => 1,
            Cell::Goat if capture_landing(board, pos, n).is_some() => 2,
            _ => 0,
        })
        .sum()
}

/// Decide the winner of a position, if any.
///
/// The capture threshold is checked first, then trapping.
pub fn check_winner(board: &Board, goats_captured: u8, win_capture_count: u8) -> Option<Side> {
    if goats_captured >= win_capture_count {
        Some(Side::Tiger)
    } else if all_tigers_trapped(board) {
        Some(Side::Goat)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tigers in the corners, goats everywhere else except (1,2) and (2,1),
    /// neither of which any corner tiger can reach.
    fn trapped_board() -> Board {
        Board::from_rows(["TGGGT", "GG.GG", "G.GGG", "GGGGG", "TGGGT"]).unwrap()
    }

    #[test]
    fn test_opening_not_trapped() {
        let board = Board::new();
        assert!(!all_tigers_trapped(&board));
        assert!(!is_tiger_trapped(&board, Pos::new(0, 0)));
    }

    #[test]
    fn test_all_corners_trapped() {
        let board = trapped_board();
        for pos in board.pieces(Side::Tiger) {
            assert!(is_tiger_trapped(&board, pos), "{pos} should be trapped");
        }
        assert!(all_tigers_trapped(&board));
        assert_eq!(check_winner(&board, 0, 5), Some(Side::Goat));
    }

    #[test]
    fn test_fully_filled_board_trapped() {
        let board = Board::from_rows(["TGGGT", "GGGGG", "GGGGG", "GGGGG", "TGGGT"]).unwrap();
        assert!(all_tigers_trapped(&board));
    }

    #[test]
    fn test_capture_escape_not_trapped() {
        // (1,1) goat can be jumped to the empty centre
        let board = Board::from_rows(["TGGGT", "GGGGG", "GG.GG", "GGGGG", "TGGGT"]).unwrap();
        assert!(!is_tiger_trapped(&board, Pos::new(0, 0)));
        assert!(!all_tigers_trapped(&board));
    }

    #[test]
    fn test_one_free_tiger_blocks_goat_win() {
        let board = Board::from_rows(["TGGGT", "GG.GG", "G.GGG", "GGGG.", "TGGGT"]).unwrap();
        // (3,4) is a neighbour of the (4,4) tiger
        assert!(!is_tiger_trapped(&board, Pos::new(4, 4)));
        assert!(!all_tigers_trapped(&board));
    }

    #[test]
    fn test_no_tigers_is_not_a_goat_win() {
        let board = Board::empty();
        assert!(!all_tigers_trapped(&board));
    }

    #[test]
    fn test_trapped_requires_tiger() {
        let board = trapped_board();
        assert!(!is_tiger_trapped(&board, Pos::new(1, 1)));
    }

    #[test]
    fn test_tiger_mobility() {
        let board = Board::from_rows(["T....", ".G...", ".....", ".....", "....."]).unwrap();
        // two empty neighbours + one capture
        assert_eq!(tiger_mobility(&board, Pos::new(0, 0)), 4);
        assert_eq!(tiger_mobility(&trapped_board(), Pos::new(0, 0)), 0);
    }

    #[test]
    fn test_capture_threshold_wins_first() {
        let board = trapped_board();
        assert_eq!(check_winner(&board, 5, 5), Some(Side::Tiger));
        assert_eq!(check_winner(&Board::new(), 2, 3), None);
        assert_eq!(check_winner(&Board::new(), 3, 3), Some(Side::Tiger));
    }
}
