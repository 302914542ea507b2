//! Match configuration
//!
//! A match is configured by who plays against whom, which side the human
//! takes, and the difficulty. Everything else (capture threshold, undo
//! budget, search depth) is derived from those three values.

use std::fmt;
use std::str::FromStr;

use crate::board::Side;

/// AI strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Minimax depth in plies; 0 means no search (random play)
    #[inline]
    pub fn search_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 2,
            Difficulty::Hard => 4,
        }
    }

    /// Undo budget granted at match start
    #[inline]
    pub fn undo_limit(self) -> u8 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 3,
            Difficulty::Hard => 1,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// Who plays the non-human side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Human vs scripted opponent
    #[default]
    Ai,
    /// Two humans on one device
    Pvp,
}

/// Complete match configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchConfig {
    pub mode: GameMode,
    /// Side played by the human (the first human in PvP)
    pub side: Side,
    pub difficulty: Difficulty,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Ai,
            side: Side::Goat,
            difficulty: Difficulty::Medium,
        }
    }
}

impl MatchConfig {
    pub fn new(mode: GameMode, side: Side, difficulty: Difficulty) -> Self {
        Self {
            mode,
            side,
            difficulty,
        }
    }

    /// Human vs AI with the human on `side`
    pub fn vs_ai(side: Side, difficulty: Difficulty) -> Self {
        Self::new(GameMode::Ai, side, difficulty)
    }

    /// Local two-player match
    pub fn pvp(difficulty: Difficulty) -> Self {
        Self::new(GameMode::Pvp, Side::Goat, difficulty)
    }

    /// Captures needed for a tiger win.
    ///
    /// Harder difficulty makes the human's task harder: a human goat loses
    /// sooner, a human tiger must capture more. PvP always uses 5.
    pub fn win_capture_count(&self) -> u8 {
        match (self.mode, self.side, self.difficulty) {
            (GameMode::Pvp, _, _) => 5,
            (GameMode::Ai, Side::Goat, Difficulty::Easy) => 7,
            (GameMode::Ai, Side::Goat, Difficulty::Medium) => 5,
            (GameMode::Ai, Side::Goat, Difficulty::Hard) => 3,
            (GameMode::Ai, Side::Tiger, Difficulty::Easy) => 3,
            (GameMode::Ai, Side::Tiger, Difficulty::Medium) => 5,
            (GameMode::Ai, Side::Tiger, Difficulty::Hard) => 7,
        }
    }

    #[inline]
    pub fn undo_limit(&self) -> u8 {
        self.difficulty.undo_limit()
    }

    /// Undo is offered in local two-player matches only
    #[inline]
    pub fn undo_allowed(&self) -> bool {
        self.mode == GameMode::Pvp
    }

    /// Is `side` driven by the AI?
    #[inline]
    pub fn is_ai_side(&self, side: Side) -> bool {
        self.mode == GameMode::Ai && side != self.side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_depths() {
        assert_eq!(Difficulty::Easy.search_depth(), 0);
        assert_eq!(Difficulty::Medium.search_depth(), 2);
        assert_eq!(Difficulty::Hard.search_depth(), 4);
    }

    #[test]
    fn test_undo_limits() {
        assert_eq!(Difficulty::Easy.undo_limit(), 5);
        assert_eq!(Difficulty::Medium.undo_limit(), 3);
        assert_eq!(Difficulty::Hard.undo_limit(), 1);
    }

    #[test]
    fn test_win_capture_table() {
        use Difficulty::*;
        let goat = |d| MatchConfig::vs_ai(Side::Goat, d).win_capture_count();
        let tiger = |d| MatchConfig::vs_ai(Side::Tiger, d).win_capture_count();
        assert_eq!([goat(Easy), goat(Medium), goat(Hard)], [7, 5, 3]);
        assert_eq!([tiger(Easy), tiger(Medium), tiger(Hard)], [3, 5, 7]);
        for d in Difficulty::ALL {
            assert_eq!(MatchConfig::pvp(d).win_capture_count(), 5);
        }
    }

    #[test]
    fn test_ai_side() {
        let cfg = MatchConfig::vs_ai(Side::Goat, Difficulty::Hard);
        assert!(cfg.is_ai_side(Side::Tiger));
        assert!(!cfg.is_ai_side(Side::Goat));
        assert!(!MatchConfig::pvp(Difficulty::Easy).is_ai_side(Side::Tiger));
    }

    #[test]
    fn test_undo_only_in_pvp() {
        assert!(MatchConfig::pvp(Difficulty::Medium).undo_allowed());
        assert!(!MatchConfig::default().undo_allowed());
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("insane".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
    }
}
