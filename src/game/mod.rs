//! Core Connect Four game logic: board, player ids, and the rules engine
//! state machine.

mod board;
mod player;
mod state;

pub use board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, RUN_LENGTH};
pub use player::{Player, PlayerId};
pub use state::{GameEngine, GameStatus, MoveOutcome, Placement};
pub use crate::error::{MoveError, SetupError};
