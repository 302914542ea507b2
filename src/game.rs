//! Match controller: turn and phase state machine with bounded undo
//!
//! [`Match`] exclusively owns the live state of one game. Moves from either a
//! human or the AI go through [`Match::apply`], which validates them against
//! the rule engine, updates counters, decides the winner and flips the turn.
//! Before every applied move a [`Snapshot`] is pushed onto a fixed-capacity
//! [`History`] so a limited number of moves can be taken back.

use std::collections::VecDeque;

use log::{debug, info, trace};
use thiserror::Error;

use crate::board::{Board, Pos, Side};
use crate::config::{GameMode, MatchConfig};
use crate::rules::{apply_move, check_winner, legal_moves, moves_from, Move, Phase, TOTAL_GOATS};

/// Reasons a requested action is refused. State is never modified on error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,
    #[error("it is {0}'s turn")]
    NotYourTurn(Side),
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}

/// Restorable copy of the match state taken before a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Side,
    pub phase: Phase,
    pub goats_placed: u8,
    pub goats_captured: u8,
}

/// Fixed-capacity snapshot stack; pushing onto a full stack drops the oldest
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Snapshot>,
    capacity: usize,
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// What happened when a move was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub side: Side,
    pub captured: bool,
    /// Set if this move ended the match
    pub winner: Option<Side>,
}

/// Final result handed to outside consumers (rewards, sound, UI text)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: Side,
    pub goats_captured: u8,
    /// Whether the human won; `None` in a two-player match
    pub human_won: Option<bool>,
}

/// One game of Bagh-Chal
#[derive(Debug, Clone)]
pub struct Match {
    config: MatchConfig,
    board: Board,
    turn: Side,
    phase: Phase,
    goats_placed: u8,
    goats_captured: u8,
    winner: Option<Side>,
    history: History,
    undo_remaining: u8,
}

impl Match {
    /// Fresh match: tigers in the corners, goat to move, placement phase
    pub fn new(config: MatchConfig) -> Self {
        info!(
            "new match: {:?}, human {}, {} (tiger wins at {} captures)",
            config.mode,
            config.side,
            config.difficulty,
            config.win_capture_count()
        );
        Self {
            config,
            board: Board::new(),
            turn: Side::Goat,
            phase: Phase::Placement,
            goats_placed: 0,
            goats_captured: 0,
            winner: None,
            history: History::with_capacity(config.undo_limit() as usize),
            undo_remaining: config.undo_limit(),
        }
    }

    /// Match starting from an arbitrary position.
    ///
    /// The position must have exactly 4 tigers, at most 20 placed goats,
    /// `goats_placed - goats_captured` goats on the board, and a phase that
    /// agrees with `goats_placed`. A position that is already decided starts
    /// finished.
    pub fn with_position(
        config: MatchConfig,
        board: Board,
        turn: Side,
        goats_placed: u8,
        goats_captured: u8,
    ) -> Result<Self, GameError> {
        if board.tiger_count() != 4 {
            return Err(GameError::InvalidSetup(format!(
                "expected 4 tigers, found {}",
                board.tiger_count()
            )));
        }
        if goats_placed > TOTAL_GOATS || goats_captured > goats_placed {
            return Err(GameError::InvalidSetup(format!(
                "impossible counts: {goats_placed} placed, {goats_captured} captured"
            )));
        }
        let on_board = (goats_placed - goats_captured) as usize;
        if board.goat_count() != on_board {
            return Err(GameError::InvalidSetup(format!(
                "expected {on_board} goats on board, found {}",
                board.goat_count()
            )));
        }

        let mut game = Self::new(config);
        game.board = board;
        game.turn = turn;
        game.phase = Phase::Placement.after_placements(goats_placed);
        game.goats_placed = goats_placed;
        game.goats_captured = goats_captured;
        game.winner = check_winner(&board, goats_captured, config.win_capture_count());
        Ok(game)
    }

    /// Start over with the same configuration
    pub fn restart(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn goats_placed(&self) -> u8 {
        self.goats_placed
    }

    pub fn goats_captured(&self) -> u8 {
        self.goats_captured
    }

    /// Goats currently on the board ("herd size")
    pub fn goats_on_board(&self) -> u8 {
        self.goats_placed - self.goats_captured
    }

    pub fn win_capture_count(&self) -> u8 {
        self.config.win_capture_count()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn undo_remaining(&self) -> u8 {
        self.undo_remaining
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Is it the AI's turn to move?
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.config.is_ai_side(self.turn)
    }

    /// Current state as a snapshot value
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            phase: self.phase,
            goats_placed: self.goats_placed,
            goats_captured: self.goats_captured,
        }
    }

    /// Final result, once the match is decided
    pub fn outcome(&self) -> Option<MatchOutcome> {
        let winner = self.winner?;
        let human_won = match self.config.mode {
            GameMode::Ai => Some(winner == self.config.side),
            GameMode::Pvp => None,
        };
        Some(MatchOutcome {
            winner,
            goats_captured: self.goats_captured,
            human_won,
        })
    }

    /// Legal moves for the side to move; empty once the match is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.turn, self.phase)
    }

    /// Destinations reachable by the piece at `from`.
    ///
    /// Empty unless `from` holds a piece of the side to move that may move now.
    pub fn targets_from(&self, from: Pos) -> Vec<Pos> {
        if self.is_over() || !from.on_board() || !self.board.is_owned_by(from, self.turn) {
            return Vec::new();
        }
        moves_from(&self.board, from, self.phase)
            .into_iter()
            .map(Move::to)
            .collect()
    }

    /// Resolve a selection (`None` = placement) and a target into a legal
    /// move and apply it.
    pub fn play(&mut self, from: Option<Pos>, to: Pos) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let requested = match from {
            Some(from) if !from.on_board() || !to.on_board() => {
                return Err(GameError::IllegalMove(Move::Step { from, to }));
            }
            None if !to.on_board() => return Err(GameError::IllegalMove(Move::Place(to))),
            Some(from) => {
                if self.board.is_owned_by(from, self.turn.opponent()) {
                    return Err(GameError::NotYourTurn(self.turn));
                }
                Move::Step { from, to }
            }
            None => Move::Place(to),
        };
        self.apply(requested)
    }

    /// Apply `mv` for the side to move.
    ///
    /// The move must be one of [`Match::legal_moves`]; otherwise nothing
    /// changes and `IllegalMove` is returned.
    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.legal_moves().contains(&mv) {
            return Err(GameError::IllegalMove(mv));
        }

        let side = self.turn;
        let before = self.snapshot();
        self.history.push(before);

        let (board, captured) = apply_move(&self.board, mv, side);
        self.board = board;
        if matches!(mv, Move::Place(_)) {
            self.goats_placed += 1;
        }
        if captured {
            self.goats_captured += 1;
        }

        self.winner = check_winner(&self.board, self.goats_captured, self.win_capture_count());
        self.phase = self.phase.after_placements(self.goats_placed);

        debug!(
            "{side} plays {mv}{} ({} placed, {} captured)",
            if captured { ", goat captured" } else { "" },
            self.goats_placed,
            self.goats_captured
        );

        match self.winner {
            Some(winner) => info!(
                "match over: {winner} wins with {} goats captured",
                self.goats_captured
            ),
            None => self.turn = side.opponent(),
        }

        Ok(MoveOutcome {
            mv,
            side,
            captured,
            winner: self.winner,
        })
    }

    /// Can the last move be taken back right now?
    pub fn can_undo(&self) -> bool {
        self.config.undo_allowed()
            && !self.is_over()
            && self.undo_remaining > 0
            && !self.history.is_empty()
    }

    /// Restore the state before the last move.
    ///
    /// Returns `false` and changes nothing when undo is not available. A
    /// decided match cannot be undone, so the winner is never cleared here.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        let Some(snapshot) = self.history.pop() else {
            return false;
        };

        self.board = snapshot.board;
        self.turn = snapshot.turn;
        self.phase = snapshot.phase;
        self.goats_placed = snapshot.goats_placed;
        self.goats_captured = snapshot.goats_captured;
        self.undo_remaining -= 1;

        trace!("undo: {} left, {} snapshots", self.undo_remaining, self.history.len());
        true
    }
}
