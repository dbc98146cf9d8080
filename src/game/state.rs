use tracing::info;

use super::board::{MoveOutcome, PlacementError};
use super::{Board, Player};
use crate::config::GameConfig;
use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0..{width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

impl From<PlacementError> for MoveError {
    fn from(err: PlacementError) -> Self {
        match err {
            PlacementError::InvalidColumn { column, width } => {
                MoveError::InvalidColumn { column, width }
            }
            PlacementError::ColumnFull(column) => MoveError::ColumnFull(column),
        }
    }
}

/// One game session: a board, whose turn it is, and how the game stands.
///
/// `Won` and `Tied` are terminal. A rematch starts from a fresh `GameState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state for the configured board
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        let board = Board::new(config.width, config.height, config.n)?;
        Ok(Self::from_board(board))
    }

    /// Start a game on an existing board, Red to move.
    ///
    /// A board that already holds a run starts out `Won`, and a full one
    /// starts out `Tied`.
    pub fn from_board(board: Board) -> Self {
        let status = match board.winner() {
            Some(player) => GameStatus::Won(player),
            None if board.is_full() => GameStatus::Tied,
            None => GameStatus::InProgress,
        };
        GameState {
            board,
            current_player: Player::Red, // Red starts
            status,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Play the current player's piece into `column`.
    ///
    /// A win takes precedence over a full board. The turn only passes when
    /// the game continues; rejected moves change nothing.
    pub fn apply_move(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        match self.board.play_move(column, player) {
            MoveOutcome::Invalid(err) => return Err(err.into()),
            MoveOutcome::Win => {
                info!(player = player.name(), "game won");
                self.status = GameStatus::Won(player);
            }
            MoveOutcome::Continue if self.board.is_full() => {
                info!("game tied");
                self.status = GameStatus::Tied;
            }
            MoveOutcome::Continue => {
                self.current_player = player.other();
            }
        }

        Ok(self.status)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_terminal());
        assert_eq!(state.board().legal_columns().len(), 7);
    }

    #[test]
    fn test_invalid_config() {
        let config = GameConfig {
            width: 3,
            height: 3,
            n: 4,
        };
        assert!(matches!(
            GameState::new(&config),
            Err(BoardError::RunTooLong { .. })
        ));
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::default();
        assert_eq!(state.apply_move(3), Ok(GameStatus::InProgress));

        assert_eq!(state.current_player(), Player::Yellow);
        assert_eq!(state.board().get(5, 3), Some(Cell::Occupied(Player::Red)));
    }

    #[test]
    fn test_invalid_move_keeps_turn() {
        let mut state = GameState::default();
        assert_eq!(
            state.apply_move(9),
            Err(MoveError::InvalidColumn {
                column: 9,
                width: 7
            })
        );
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::default();

        // Red wins with horizontal line
        for col in 0..4 {
            state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.status(), GameStatus::Won(Player::Red));
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_tie() {
        let config = GameConfig {
            width: 4,
            height: 1,
            n: 2,
        };
        let mut state = GameState::new(&config).unwrap();
        for col in 0..3 {
            assert_eq!(state.apply_move(col), Ok(GameStatus::InProgress));
        }
        assert_eq!(state.apply_move(3), Ok(GameStatus::Tied));
        assert_eq!(state.board().empty_cell_count(), 0);
        assert_eq!(state.apply_move(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_from_board_derives_status() {
        let mut full = Board::new(1, 1, 1).unwrap();
        full.drop_piece(0, Player::Yellow).unwrap();
        let mut state = GameState::from_board(full);
        assert_eq!(state.status(), GameStatus::Won(Player::Yellow));
        assert_eq!(state.apply_move(0), Err(MoveError::GameOver));

        let mut full = Board::new(2, 1, 2).unwrap();
        full.drop_piece(0, Player::Red).unwrap();
        full.drop_piece(1, Player::Yellow).unwrap();
        let mut state = GameState::from_board(full);
        assert_eq!(state.status(), GameStatus::Tied);
        assert!(state.is_terminal());
        assert_eq!(state.apply_move(0), Err(MoveError::GameOver));

        let mut partial = Board::default();
        partial.drop_piece(3, Player::Red).unwrap();
        let state = GameState::from_board(partial);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        let config = GameConfig {
            width: 3,
            height: 1,
            n: 2,
        };
        let mut state = GameState::new(&config).unwrap();
        state.apply_move(0).unwrap(); // Red
        state.apply_move(1).unwrap(); // Yellow
        state.apply_move(2).unwrap(); // Red, no run
        assert_eq!(state.status(), GameStatus::Tied);

        let mut state = GameState::new(&config).unwrap();
        state.apply_move(0).unwrap(); // Red
        state.apply_move(2).unwrap(); // Yellow
        assert_eq!(state.apply_move(1), Ok(GameStatus::Won(Player::Red)));
        assert_eq!(state.board().empty_cell_count(), 0);
    }
}
