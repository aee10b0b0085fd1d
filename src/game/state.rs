use super::board::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::{Board, PlayerId};
use crate::error::{MoveError, SetupError};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active(PlayerId),
    Won(PlayerId),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active(_))
    }
}

/// What a successful move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    Win(PlayerId),
    Draw,
}

/// A piece that was just placed, with the resulting outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: PlayerId,
    pub outcome: MoveOutcome,
}

/// Connect Four rules engine: owns the board and whose turn it is.
///
/// The engine is a plain state machine with no knowledge of how the board is
/// displayed. Callers drive it with [`GameEngine::apply_move`] and read it back
/// through the query methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    players: [PlayerId; 2],
    current: PlayerId,
    over: bool,
}

impl GameEngine {
    /// Create a game on the standard 6x7 board. `first` moves first.
    pub fn new(first: PlayerId, second: PlayerId) -> Result<Self, SetupError> {
        Self::with_dimensions(first, second, DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }

    /// Create a game on a `height` x `width` board.
    pub fn with_dimensions(
        first: PlayerId,
        second: PlayerId,
        height: usize,
        width: usize,
    ) -> Result<Self, SetupError> {
        if height == 0 || width == 0 || height.checked_mul(width).is_none() {
            return Err(SetupError::InvalidDimensions { height, width });
        }
        if first == second {
            return Err(SetupError::DuplicatePlayer(first));
        }

        Ok(GameEngine {
            board: Board::new(height, width),
            players: [first, second],
            current: first,
            over: false,
        })
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The two players, in turn order
    pub fn players(&self) -> [PlayerId; 2] {
        self.players
    }

    /// Player whose turn it is. Once the game is over this is the player who
    /// made the final move.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn cell_owner(&self, row: usize, column: usize) -> Option<PlayerId> {
        self.board.get(row, column)
    }

    pub fn status(&self) -> GameStatus {
        if !self.over {
            GameStatus::Active(self.current)
        } else if self.board.has_run(self.current) {
            GameStatus::Won(self.current)
        } else {
            GameStatus::Drawn
        }
    }

    /// Row a piece dropped into `column` would land in, or `None` if the
    /// column is full.
    pub fn legal_move_column(&self, column: usize) -> Result<Option<usize>, MoveError> {
        self.check_column(column)?;
        Ok(self.board.drop_row(column))
    }

    /// Columns that still accept a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.over {
            return Vec::new();
        }

        (0..self.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On error nothing changes. A win is checked before a draw, so a move
    /// that both fills the board and completes a run is a win.
    pub fn apply_move(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.over {
            return Err(MoveError::AlreadyOver);
        }

        let row = self
            .legal_move_column(column)?
            .ok_or(MoveError::ColumnFull(column))?;

        let player = self.current;
        self.board.place(row, column, player);
        log::debug!("player {player} placed at ({row}, {column})");

        let outcome = if self.board.has_run(player) {
            self.over = true;
            log::info!("player {player} won");
            MoveOutcome::Win(player)
        } else if self.board.is_full() {
            self.over = true;
            log::info!("game drawn");
            MoveOutcome::Draw
        } else {
            self.current = self.other(player);
            MoveOutcome::Continue
        };

        Ok(Placement {
            row,
            column,
            player,
            outcome,
        })
    }

    fn other(&self, player: PlayerId) -> PlayerId {
        if player == self.players[0] {
            self.players[1]
        } else {
            self.players[0]
        }
    }

    fn check_column(&self, column: usize) -> Result<(), MoveError> {
        if column >= self.width() {
            return Err(MoveError::InvalidColumn {
                column,
                width: self.width(),
            });
        }
        Ok(())
    }
}
