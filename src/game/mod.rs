//! Core Connect-N game logic: a gravity-drop board with run detection, the
//! two players, and the per-session state machine.

mod board;
mod player;
mod state;

pub use board::{
    Board, Cell, MoveOutcome, PlacementError, DEFAULT_HEIGHT, DEFAULT_RUN_LENGTH, DEFAULT_WIDTH,
    MAX_CELLS,
};
pub use player::Player;
pub use state::{GameState, GameStatus, MoveError};
