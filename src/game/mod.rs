//! Core Connect Four game logic: the board engine, player types, column
//! notation, and the turn-by-turn game state machine.

mod board;
pub mod notation;
mod player;
mod state;

pub use board::{Board, Cell, DropError, COLS, CONNECT, MAX_COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
