//! The game engine: one tic-tac-toe session with running scores.

use super::position::{Position, WinLine};
use super::rules::{check_winner, is_full};
use super::types::{Board, Player, Scoreboard, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of a round.
///
/// Carrying the winner and the completed line inside `Won` makes the
/// phase exclusive by construction: a state is exactly one of in
/// progress, won, or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing; moves are accepted.
    InProgress,
    /// Round ended with a winner on the given line.
    Won {
        /// The winning player.
        winner: Player,
        /// The canonical line they completed.
        line: WinLine,
    },
    /// Round ended with a full board and no winner.
    Draw,
}

/// Event emitted by a successful engine operation.
///
/// Invalid moves emit nothing. The UI collaborator forwards these to the
/// sound dispatcher; beyond that they carry no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A non-terminal move was placed.
    Move,
    /// The move completed a line.
    Win,
    /// The move filled the board with no winner.
    Draw,
    /// The round was reset (scores kept).
    Reset,
    /// A new game started (scores cleared).
    Start,
}

/// A tic-tac-toe session: board, turn, status, history, and scores.
///
/// The engine is a synchronous state machine. Moves are applied in place;
/// invalid moves (out-of-range index, occupied square, or any move once a
/// round is over) are silently rejected and leave the state untouched.
/// Scores accumulate across rounds within the session: [`reset`] keeps
/// them, [`new_game`] clears them.
///
/// [`reset`]: GameEngine::reset
/// [`new_game`]: GameEngine::new_game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Position>,
    scores: Scoreboard,
}

impl GameEngine {
    /// Creates a fresh session: empty board, X to move, zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            scores: Scoreboard::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Meaningful only while the round is active.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the positions played this round, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the session scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Whether the round is still accepting moves.
    pub fn active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Returns the winner, if the round was won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Returns the completed line, if the round was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Applies a move at the given board index (0-8).
    ///
    /// On success the current player's mark is placed and the round is
    /// re-evaluated:
    /// - a completed line ends the round, credits the winner's score, and
    ///   returns `Some(GameEvent::Win)`;
    /// - a full board with no winner ends the round, credits the draw
    ///   count, and returns `Some(GameEvent::Draw)`;
    /// - otherwise the turn passes and `Some(GameEvent::Move)` is returned.
    ///
    /// Invalid moves (index out of range, square occupied, or round
    /// already over) are rejected: the state is left unchanged and
    /// `None` is returned. Rejection is silent by design; the engine
    /// surfaces no error for a click that simply does nothing.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Option<GameEvent> {
        if !self.active() {
            debug!(index, "move rejected: round is over");
            return None;
        }
        let Some(pos) = Position::from_index(index) else {
            debug!(index, "move rejected: index out of range");
            return None;
        };
        if !self.board.is_empty(pos) {
            debug!(index, "move rejected: square occupied");
            return None;
        }

        self.board.set(pos, Square::Occupied(self.current_player));
        self.history.push(pos);

        if let Some((winner, line)) = check_winner(&self.board) {
            self.status = GameStatus::Won { winner, line };
            self.scores.record_win(winner);
            debug!(%winner, "round won");
            return Some(GameEvent::Win);
        }

        if is_full(&self.board) {
            self.status = GameStatus::Draw;
            self.scores.record_draw();
            debug!("round drawn");
            return Some(GameEvent::Draw);
        }

        self.current_player = self.current_player.opponent();
        Some(GameEvent::Move)
    }

    /// Starts the next round: clears the board, history, and status, with
    /// X to move. Scores are preserved.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameEvent {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
        GameEvent::Reset
    }

    /// Starts a completely fresh session, scores included.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> GameEvent {
        *self = Self::new();
        GameEvent::Start
    }

    /// Builds a session by applying a sequence of board indices in order.
    ///
    /// Each entry goes through [`apply_move`], so invalid entries are
    /// skipped with the same silent-rejection semantics.
    ///
    /// [`apply_move`]: GameEngine::apply_move
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut engine = Self::new();
        for &index in indices {
            engine.apply_move(index);
        }
        engine
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
