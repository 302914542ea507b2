//! Session state for the Bagh-Chal GUI
//!
//! Wraps a [`Match`] with everything the window needs between frames: the
//! selected piece, transient messages, and the background AI worker.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::game::{GameError, MoveOutcome, Snapshot};
use crate::{AIEngine, GameMode, Match, MatchConfig, Move, MoveResult, Phase, Pos, Side};

/// Pause before an AI move is shown, so it does not land instantly
pub const AI_MOVE_DELAY: Duration = Duration::from_millis(800);

const INVALID_POSITION: &str = "Invalid position";
const UNDO_SUCCESSFUL: &str = "Undo successful";

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
    /// The AI found no move in this position; not retried until it changes
    Stuck(Snapshot),
}

/// Everything the GUI keeps about the current match
pub struct GameSession {
    pub game: Match,
    pub selected: Option<Pos>,
    pub last_move: Option<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    ai_delay: Duration,
}

impl GameSession {
    pub fn new(config: MatchConfig) -> Self {
        Self::with_ai_delay(config, AI_MOVE_DELAY)
    }

    /// Session whose AI moves are held back for `ai_delay`
    pub fn with_ai_delay(config: MatchConfig, ai_delay: Duration) -> Self {
        Self {
            game: Match::new(config),
            selected: None,
            last_move: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            ai_delay,
        }
    }

    /// Replace the match with a fresh one under `config`.
    ///
    /// An AI search still running is abandoned; its result is never applied.
    pub fn new_game(&mut self, config: MatchConfig) {
        let ai_delay = self.ai_delay;
        *self = Self::with_ai_delay(config, ai_delay);
    }

    /// Restart with the current configuration
    pub fn reset(&mut self) {
        let config = *self.game.config();
        self.new_game(config);
    }

    pub fn config(&self) -> &MatchConfig {
        self.game.config()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.game.is_over() && !self.game.config().is_ai_side(self.game.turn())
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Destinations of the selected piece
    pub fn targets(&self) -> Vec<Pos> {
        self.selected
            .map(|from| self.game.targets_from(from))
            .unwrap_or_default()
    }

    /// Handle a click on `pos` by the human to move.
    ///
    /// During goat placement a click places. Otherwise the first click
    /// selects one of the mover's pieces and a second click on one of its
    /// targets moves it.
    pub fn click(&mut self, pos: Pos) {
        if !self.is_human_turn() || self.is_ai_thinking() {
            return;
        }
        let turn = self.game.turn();

        if turn == Side::Goat && self.game.phase() == Phase::Placement {
            let result = self.game.play(None, pos);
            self.finish_move(result);
            return;
        }

        if let Some(from) = self.selected {
            if from == pos {
                self.selected = None;
                return;
            }
            if self.game.targets_from(from).contains(&pos) {
                let result = self.game.play(Some(from), pos);
                self.finish_move(result);
                return;
            }
        }

        if self.game.board().is_owned_by(pos, turn) {
            self.selected = Some(pos);
            self.message = None;
        } else {
            self.selected = None;
            self.message = Some(INVALID_POSITION.to_string());
        }
    }

    fn finish_move(&mut self, result: Result<MoveOutcome, GameError>) {
        match result {
            Ok(outcome) => {
                self.last_move = Some(outcome.mv);
                self.selected = None;
                self.message = None;
            }
            Err(err) => {
                debug!("move rejected: {err}");
                self.message = Some(INVALID_POSITION.to_string());
            }
        }
    }

    /// Launch the AI search on a worker thread if the AI is to move
    pub fn start_ai_thinking(&mut self) {
        if !self.game.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        if let AiState::Stuck(position) = &self.ai_state {
            if *position == self.game.snapshot() {
                return;
            }
        }

        let board = *self.game.board();
        let side = self.game.turn();
        let phase = self.game.phase();
        let captured = self.game.goats_captured();
        let difficulty = self.game.config().difficulty;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::new();
            let result = engine.select_move_with_stats(&board, side, phase, difficulty, captured);
            let _ = tx.send(result);
        });

        self.selected = None;
        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI's move once it is ready and the delay has passed
    pub fn check_ai_result(&mut self) {
        let move_result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => {
                if start_time.elapsed() < self.ai_delay {
                    return;
                }
                match receiver.try_recv() {
                    Ok(result) => result,
                    Err(TryRecvError::Empty) => return,
                    Err(TryRecvError::Disconnected) => {
                        warn!("AI worker exited without a result");
                        self.ai_state = AiState::Idle;
                        self.message = Some("AI error".to_string());
                        return;
                    }
                }
            }
            AiState::Idle | AiState::Stuck(_) => return,
        };

        self.ai_state = AiState::Idle;
        self.last_ai_result = Some(move_result.clone());

        match move_result.best_move {
            Some(mv) => {
                let result = self.game.apply(mv);
                if let Err(err) = &result {
                    warn!("AI produced a rejected move: {err}");
                }
                self.finish_move(result);
            }
            None => {
                debug!("AI has no move, waiting for the position to change");
                self.ai_state = AiState::Stuck(self.game.snapshot());
                self.message = Some("CPU has no move".to_string());
            }
        }
    }

    /// Time the AI has been thinking, if it is
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle | AiState::Stuck(_) => None,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.is_ai_thinking() && self.game.can_undo()
    }

    pub fn undo(&mut self) {
        if !self.can_undo() {
            return;
        }
        if self.game.undo() {
            self.selected = None;
            self.last_move = None;
            self.message = Some(UNDO_SUCCESSFUL.to_string());
        }
    }

    /// Headline for the status panel
    pub fn status_text(&self) -> String {
        if let Some(winner) = self.game.winner() {
            return match winner {
                Side::Tiger => format!("Tigers Win! {} eaten.", self.game.goats_captured()),
                Side::Goat => "Goats Win! Tigers trapped.".to_string(),
            };
        }

        if self.game.goats_placed() == 0 && self.is_human_turn() {
            return "Place a Goat to start".to_string();
        }

        match self.game.config().mode {
            GameMode::Pvp => match self.game.turn() {
                Side::Goat => "Goat's Turn".to_string(),
                Side::Tiger => "Tiger's Turn".to_string(),
            },
            GameMode::Ai if self.is_human_turn() => "Your Turn".to_string(),
            GameMode::Ai => "CPU Thinking...".to_string(),
        }
    }
}
