use super::board::DropError;
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("game is over")]
    GameOver,
}

impl From<DropError> for MoveError {
    fn from(err: DropError) -> Self {
        match err {
            DropError::ColumnFull => MoveError::ColumnFull,
            DropError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

/// One game: the board, whose turn it is, and how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    first_player: Player,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a game on the standard board with `first` to move
    pub fn new(first: Player) -> Self {
        Self::with_board(Board::new(), first)
    }

    fn with_board(board: Board, first: Player) -> Self {
        GameState {
            board,
            first_player: first,
            current_player: first,
            outcome: None,
        }
    }

    /// Create initial game state; player one starts
    pub fn initial() -> Self {
        Self::new(Player::One)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Start over on an empty board of the same size
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = self.first_player;
        self.outcome = None;
    }

    /// Drop the current player's token in `column`.
    ///
    /// The mover's win is checked before a full board, so a last-cell win is
    /// never reported as a draw. The turn passes only while the game goes on.
    pub fn play(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        let row = self.board.try_drop_piece(column, mover)?;
        log::debug!("{} dropped into column {column}, row {row}", mover.name());

        if self.board.wins_through(row, column) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = mover.other();
        }

        if let Some(outcome) = self.outcome {
            log::info!("game over after {} moves: {outcome:?}", self.board.move_count());
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
