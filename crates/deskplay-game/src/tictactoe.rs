//! The tic-tac-toe match session driven by the game widget.

use deskplay_core::{Board, Mark, Outcome};
use deskplay_opponent::MinimaxOpponent;

use crate::GameError;

/// Running totals across matches in one widget session.
///
/// The counters live here, in the session, and are bumped from the
/// outcomes the core reports back; neither the board nor the search ever
/// touches them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Matches won by the human player.
    pub player_wins: u32,
    /// Matches won by the automated opponent.
    pub opponent_wins: u32,
    /// Matches that ended in a draw.
    pub ties: u32,
}

/// One tic-tac-toe match between the human player and the automated
/// opponent, plus the session scoreboard that survives resets.
///
/// The human plays `X` and moves first; the opponent plays `O`, answering
/// with perfect minimax play.
///
/// # Examples
///
/// ```
/// use deskplay_core::Outcome;
/// use deskplay_game::TicTacToeMatch;
///
/// let mut game = TicTacToeMatch::new();
/// assert_eq!(game.play_human(4).unwrap(), Outcome::InProgress);
///
/// let (cell, outcome) = game.play_opponent().unwrap();
/// assert!(game.board().cell(cell).is_some());
/// assert_eq!(outcome, Outcome::InProgress);
/// ```
#[derive(Debug, Clone)]
pub struct TicTacToeMatch {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    opponent: MinimaxOpponent,
    scoreboard: Scoreboard,
}

impl Default for TicTacToeMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeMatch {
    /// Starts a fresh match with an empty board, the human to move, and a
    /// zeroed scoreboard.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
            opponent: MinimaxOpponent::new(Mark::O),
            scoreboard: Scoreboard::default(),
        }
    }

    /// Restores a match from persisted state.
    ///
    /// The outcome is recomputed from the board; the scoreboard is taken
    /// as-is and not re-bumped for an already-finished board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InconsistentTurn`] when the mark counts cannot
    /// arise from alternating play with X first, or disagree with
    /// `to_move`.
    pub fn restore(
        board: Board,
        to_move: Mark,
        scoreboard: Scoreboard,
    ) -> Result<Self, GameError> {
        let x = board.mark_count(Mark::X);
        let o = board.mark_count(Mark::O);
        let consistent = match to_move {
            Mark::X => x == o,
            Mark::O => x == o + 1,
        };
        if !consistent {
            return Err(GameError::InconsistentTurn);
        }
        Ok(Self {
            outcome: board.outcome(),
            board,
            to_move,
            opponent: MinimaxOpponent::new(Mark::O),
            scoreboard,
        })
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the match outcome as of the last move.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the mark whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the human player's mark.
    #[must_use]
    pub fn human_mark(&self) -> Mark {
        self.opponent.mark().opponent()
    }

    /// Returns the automated opponent's mark.
    #[must_use]
    pub fn opponent_mark(&self) -> Mark {
        self.opponent.mark()
    }

    /// Returns the session scoreboard.
    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Plays the human player's mark at `cell` and reports the resulting
    /// outcome, bumping the scoreboard when the move ends the match.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MatchOver`] after the match is decided,
    /// [`GameError::NotHumanTurn`] out of turn,
    /// [`GameError::CellOutOfRange`] for an index above 8, and
    /// [`GameError::CellOccupied`] for an occupied cell.
    pub fn play_human(&mut self, cell: usize) -> Result<Outcome, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::MatchOver);
        }
        if self.to_move != self.human_mark() {
            return Err(GameError::NotHumanTurn);
        }
        self.play(cell)
    }

    /// Asks the automated opponent for its move, applies it, and reports
    /// the chosen cell together with the resulting outcome.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MatchOver`] after the match is decided and
    /// [`GameError::NotOpponentTurn`] out of turn.
    pub fn play_opponent(&mut self) -> Result<(usize, Outcome), GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::MatchOver);
        }
        if self.to_move != self.opponent_mark() {
            return Err(GameError::NotOpponentTurn);
        }
        let Some(cell) = self.opponent.choose_move(&self.board) else {
            return Err(GameError::MatchOver);
        };
        let outcome = self.play(cell)?;
        Ok((cell, outcome))
    }

    /// Replaces the board wholesale for a new match, keeping the
    /// scoreboard.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = self.human_mark();
        self.outcome = Outcome::InProgress;
    }

    fn play(&mut self, cell: usize) -> Result<Outcome, GameError> {
        if cell >= Board::CELL_COUNT {
            return Err(GameError::CellOutOfRange { index: cell });
        }
        if !self.board.is_cell_empty(cell) {
            return Err(GameError::CellOccupied { index: cell });
        }
        self.board = self.board.with_mark(cell, self.to_move);
        self.to_move = self.to_move.opponent();
        self.outcome = self.board.outcome();
        self.record_outcome();
        Ok(self.outcome)
    }

    fn record_outcome(&mut self) {
        match self.outcome {
            Outcome::InProgress => {}
            Outcome::Draw => self.scoreboard.ties += 1,
            Outcome::Win(mark) => {
                if mark == self.human_mark() {
                    self.scoreboard.player_wins += 1;
                } else {
                    self.scoreboard.opponent_wins += 1;
                }
            }
        }
    }
}
