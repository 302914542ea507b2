//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Bagh-Chal AI.
//! It is a plain depth-limited minimax: the root side maximizes, the
//! opponent minimizes, and branches are cut as soon as `beta <= alpha`.
//!
//! # Features
//!
//! - Every node is an immutable [`Node`] value; children are fresh copies,
//!   so no two nodes in the tree share a board
//! - Moves are searched in generation order, and the first of several
//!   equally scored root moves wins
//! - Phase advances inside the tree when the 20th goat is placed
//!
//! # Example
//!
//! ```
//! use baghchal::board::{Board, Side};
//! use baghchal::eval::NoJitter;
//! use baghchal::rules::Phase;
//! use baghchal::search::{Node, Searcher};
//!
//! let mut searcher = Searcher::new();
//! let root = Node::new(Board::new(), Side::Goat, Phase::Placement, 0);
//!
//! let result = searcher.search(&root, 2, &mut NoJitter);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {best_move}");
//! }
//! ```

use crate::board::{Board, Side};
use crate::eval::{evaluate, Jitter, Score, Weights};
use crate::rules::{all_tigers_trapped, apply_move, legal_moves, Move, Phase};

/// Captures at which the search treats a line as won by the tigers.
///
/// Fixed regardless of the match's configured threshold.
pub const SEARCH_CAPTURE_WIN: u8 = 5;

/// One position in the search tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub board: Board,
    pub to_move: Side,
    pub phase: Phase,
    pub goats_captured: u8,
}

impl Node {
    pub fn new(board: Board, to_move: Side, phase: Phase, goats_captured: u8) -> Self {
        Self {
            board,
            to_move,
            phase,
            goats_captured,
        }
    }

    /// Goats that have entered the board so far (on board plus captured)
    #[inline]
    pub fn goats_placed(&self) -> u8 {
        self.board.goat_count() as u8 + self.goats_captured
    }

    /// Legal moves for the side to move
    #[inline]
    pub fn moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.to_move, self.phase)
    }

    /// Position after `mv`, with the opponent to move
    pub fn child(&self, mv: Move) -> Node {
        let (board, captured) = apply_move(&self.board, mv, self.to_move);
        let goats_captured = self.goats_captured + u8::from(captured);
        let goats_placed = board.goat_count() as u8 + goats_captured;
        Node {
            board,
            to_move: self.to_move.opponent(),
            phase: self.phase.after_placements(goats_placed),
            goats_captured,
        }
    }

    /// Winner decided inside the search, if any.
    ///
    /// Trapping is checked before the capture cutoff.
    pub fn terminal_winner(&self) -> Option<Side> {
        if all_tigers_trapped(&self.board) {
            Some(Side::Goat)
        } else if self.goats_captured >= SEARCH_CAPTURE_WIN {
            Some(Side::Tiger)
        } else {
            None
        }
    }
}

/// Score of a decided game from `root`'s perspective
#[inline]
pub(crate) fn win_score(winner: Side, root: Side) -> Score {
    if winner == root {
        Weights::WIN
    } else {
        -Weights::WIN
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Branches cut by `beta <= alpha`
    pub cutoffs: u64,
    /// Static evaluations at depth 0
    pub leaves: u64,
    /// Nodes resolved by a win/trap cutoff
    pub terminals: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` only if the root has no legal move
    pub best_move: Option<Move>,
    /// Minimax score of the best move
    pub score: Score,
    /// Depth searched, in plies
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `root` to `depth` plies, maximizing for `root.to_move`.
    ///
    /// A depth of 0 is treated as 1: the root always expands its moves.
    pub fn search(&mut self, root: &Node, depth: u8, jitter: &mut dyn Jitter) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let depth = depth.max(1);
        let me = root.to_move;
        let mut alpha = Score::NEG_INFINITY;
        let beta = Score::INFINITY;
        let mut best_move = None;
        let mut best_score = Score::NEG_INFINITY;

        for mv in root.moves() {
            let child = root.child(mv);
            let score = self.alpha_beta(&child, depth - 1, alpha, beta, me, jitter);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        if best_move.is_none() {
            best_score = 0.0;
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    fn alpha_beta(
        &mut self,
        node: &Node,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        root: Side,
        jitter: &mut dyn Jitter,
    ) -> Score {
        self.nodes += 1;

        if let Some(winner) = node.terminal_winner() {
            self.stats.terminals += 1;
            return win_score(winner, root);
        }

        if depth == 0 {
            self.stats.leaves += 1;
            return evaluate(&node.board, root, node.goats_captured, jitter);
        }

        let moves = node.moves();
        if moves.is_empty() {
            // A stuck tiger side loses; a stuck goat side is scored neutral.
            // With tigers on the board a stuck tiger side is already caught
            // by `terminal_winner`, so the tiger arm only sees tigerless boards.
            return match node.to_move {
                Side::Tiger => win_score(Side::Goat, root),
                Side::Goat => 0.0,
            };
        }

        if node.to_move == root {
            let mut best = Score::NEG_INFINITY;
            for mv in moves {
                let score = self.alpha_beta(&node.child(mv), depth - 1, alpha, beta, root, jitter);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = Score::INFINITY;
            for mv in moves {
                let score = self.alpha_beta(&node.child(mv), depth - 1, alpha, beta, root, jitter);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};
    use crate::eval::NoJitter;
    use crate::rules::TOTAL_GOATS;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    /// Unpruned reference minimax with the same terminal rules
    fn full_minimax(node: &Node, depth: u8, root: Side) -> Score {
        if let Some(winner) = node.terminal_winner() {
            return win_score(winner, root);
        }
        if depth == 0 {
            return evaluate(&node.board, root, node.goats_captured, &mut NoJitter);
        }
        let moves = node.moves();
        if moves.is_empty() {
            return match node.to_move {
                Side::Tiger => win_score(Side::Goat, root),
                Side::Goat => 0.0,
            };
        }
        let scores = moves
            .into_iter()
            .map(|mv| full_minimax(&node.child(mv), depth - 1, root));
        if node.to_move == root {
            scores.fold(Score::NEG_INFINITY, Score::max)
        } else {
            scores.fold(Score::INFINITY, Score::min)
        }
    }

    /// Root scores per move, in generation order
    fn root_scores(root: &Node, depth: u8) -> Vec<(Move, Score)> {
        root.moves()
            .into_iter()
            .map(|mv| (mv, full_minimax(&root.child(mv), depth - 1, root.to_move)))
            .collect()
    }

    /// Play `plies` random legal moves from the opening
    fn random_node(rng: &mut StdRng, plies: usize) -> Node {
        let mut node = Node::new(Board::new(), Side::Goat, Phase::Placement, 0);
        for _ in 0..plies {
            if node.terminal_winner().is_some() {
                break;
            }
            let moves = node.moves();
            let Some(&mv) = moves.choose(rng) else {
                break;
            };
            node = node.child(mv);
        }
        node
    }

    #[test]
    fn test_search_finds_a_move() {
        let mut searcher = Searcher::new();
        let root = Node::new(Board::new(), Side::Goat, Phase::Placement, 0);
        let result = searcher.search(&root, 2, &mut NoJitter);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_pruned_matches_full_minimax() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut searcher = Searcher::new();

        for sample in 0..12 {
            let node = random_node(&mut rng, 4 + sample * 3);
            if node.terminal_winner().is_some() || node.moves().is_empty() {
                continue;
            }
            for depth in 1..=3 {
                let expected = root_scores(&node, depth)
                    .into_iter()
                    .map(|(_, s)| s)
                    .fold(Score::NEG_INFINITY, Score::max);
                let result = searcher.search(&node, depth, &mut NoJitter);
                assert_eq!(
                    result.score, expected,
                    "depth {depth} mismatch on\n{}",
                    node.board
                );
            }
        }
    }

    #[test]
    fn test_first_best_move_wins_ties() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut searcher = Searcher::new();

        for plies in [0, 3, 8, 15] {
            let node = random_node(&mut rng, plies);
            if node.moves().is_empty() {
                continue;
            }
            let scores = root_scores(&node, 2);
            let best = scores
                .iter()
                .map(|&(_, s)| s)
                .fold(Score::NEG_INFINITY, Score::max);
            let first_best = scores.iter().find(|&&(_, s)| s == best).map(|&(m, _)| m);

            let result = searcher.search(&node, 2, &mut NoJitter);
            assert_eq!(result.best_move, first_best);
        }
    }

    #[test]
    fn test_deterministic_without_jitter() {
        let board = Board::from_rows(["T.G.T", ".G...", "..G..", ".....", "T...T"]).unwrap();
        let root = Node::new(board, Side::Tiger, Phase::Placement, 0);

        let a = Searcher::new().search(&root, 3, &mut NoJitter);
        let b = Searcher::new().search(&root, 3, &mut NoJitter);
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn test_tiger_takes_winning_capture() {
        // One capture short of the search cutoff, capture available at (0,0)x(2,2)
        let board = Board::from_rows(["T...T", ".G...", ".....", ".....", "T...T"]).unwrap();
        let root = Node::new(board, Side::Tiger, Phase::Movement, SEARCH_CAPTURE_WIN - 1);
        let result = Searcher::new().search(&root, 2, &mut NoJitter);

        assert_eq!(
            result.best_move,
            Some(Move::Step {
                from: Pos::new(0, 0),
                to: Pos::new(2, 2)
            })
        );
        assert_eq!(result.score, Weights::WIN);
    }

    #[test]
    fn test_goat_completes_trap() {
        // (2,4) is the only landing left; (1,2) is out of every tiger's reach
        let board = Board::from_rows(["TGGGT", "GG.GG", "GGGG.", "GGGGG", "TGGGT"]).unwrap();
        let root = Node::new(board, Side::Goat, Phase::Placement, 0);
        assert_eq!(root.terminal_winner(), None);
        let result = Searcher::new().search(&root, 2, &mut NoJitter);

        assert_eq!(result.best_move, Some(Move::Place(Pos::new(2, 4))));
        assert_eq!(result.score, Weights::WIN);
    }

    #[test]
    fn test_no_moves_returns_none() {
        // Tigers already trapped and it is their move
        let board = Board::from_rows(["TGGGT", "GGGGG", "GGGGG", "GGGGG", "TGGGT"]).unwrap();
        let root = Node::new(board, Side::Tiger, Phase::Movement, 0);
        let result = Searcher::new().search(&root, 2, &mut NoJitter);
        assert_eq!(result.best_move, None);
    }

    /// Goat in the corner walled in by three tigers, fourth tiger free
    fn boxed_goat() -> Board {
        Board::from_rows(["GT...", "TT...", ".....", ".....", "....T"]).unwrap()
    }

    #[test]
    fn test_stuck_goat_inside_tree_scores_zero() {
        let root = Node::new(boxed_goat(), Side::Tiger, Phase::Movement, 0);
        let quiet = Move::Step {
            from: Pos::new(4, 4),
            to: Pos::new(3, 3),
        };
        let child = root.child(quiet);
        assert_eq!(child.to_move, Side::Goat);
        assert!(child.moves().is_empty());
        assert_eq!(child.terminal_winner(), None);

        let mut searcher = Searcher::new();
        let score = searcher.alpha_beta(
            &child,
            1,
            Score::NEG_INFINITY,
            Score::INFINITY,
            Side::Tiger,
            &mut NoJitter,
        );
        assert_eq!(score, 0.0);
        assert_eq!(searcher.stats.leaves, 0);

        // Same value through the full root search
        let scores = root_scores(&root, 2);
        let (_, quiet_score) = scores.iter().find(|(mv, _)| *mv == quiet).unwrap();
        assert_eq!(*quiet_score, 0.0);
        let result = Searcher::new().search(&root, 2, &mut NoJitter);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_stuck_tiger_inside_tree_is_terminal() {
        // Goat to move; (2,3) -> (2,4) closes the last landing cell
        let board = Board::from_rows(["TGGGT", "GG.GG", "GGGG.", "GGGGG", "TGGGT"]).unwrap();
        let root = Node::new(board, Side::Goat, Phase::Movement, 1);
        assert_eq!(root.terminal_winner(), None);
        let child = root.child(Move::Step {
            from: Pos::new(2, 3),
            to: Pos::new(2, 4),
        });
        assert_eq!(child.terminal_winner(), Some(Side::Goat));
        assert!(child.moves().is_empty());

        let mut searcher = Searcher::new();
        let score = searcher.alpha_beta(
            &child,
            3,
            Score::NEG_INFINITY,
            Score::INFINITY,
            Side::Goat,
            &mut NoJitter,
        );
        assert_eq!(score, Weights::WIN);
        assert_eq!(searcher.stats.terminals, 1);
    }

    #[test]
    fn test_tigerless_tiger_side_loses_inside_tree() {
        let board = Board::from_rows(["G....", ".....", ".....", ".....", "....."]).unwrap();
        let node = Node::new(board, Side::Tiger, Phase::Movement, 0);
        assert_eq!(node.terminal_winner(), None);

        let mut searcher = Searcher::new();
        let score = searcher.alpha_beta(
            &node,
            2,
            Score::NEG_INFINITY,
            Score::INFINITY,
            Side::Tiger,
            &mut NoJitter,
        );
        assert_eq!(score, -Weights::WIN);
        assert_eq!(searcher.stats.terminals, 0);
    }

    #[test]
    fn test_child_advances_phase_on_twentieth_goat() {
        let mut board = Board::new();
        let mut placed = 0;
        for pos in Pos::all() {
            if placed == TOTAL_GOATS - 1 {
                break;
            }
            if board.is_empty(pos) && pos != Pos::new(2, 2) {
                board.set(pos, Cell::Goat);
                placed += 1;
            }
        }
        let node = Node::new(board, Side::Goat, Phase::Placement, 0);
        assert_eq!(node.goats_placed(), TOTAL_GOATS - 1);

        let child = node.child(Move::Place(Pos::new(2, 2)));
        assert_eq!(child.phase, Phase::Movement);
        assert_eq!(child.to_move, Side::Tiger);
    }

    #[test]
    fn test_child_does_not_alias_parent() {
        let node = Node::new(Board::new(), Side::Goat, Phase::Placement, 0);
        let child = node.child(Move::Place(Pos::new(2, 2)));
        assert!(node.board.is_empty(Pos::new(2, 2)));
        assert_eq!(child.board.get(Pos::new(2, 2)), Cell::Goat);
    }
}
