//! Movement engine: slide/merge resolution, loss detection and turns.
//!
//! The engine keeps no state between turns. Every operation takes a board
//! by reference and returns a new one.
//!
//! ```
//! use tile_merge::board::Board;
//! use tile_merge::core::{Direction, GameConfig};
//! use tile_merge::engine::advance;
//!
//! let config = GameConfig::default();
//! let board = Board::from_grid(&config, &[[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let outcome = advance(&board, Direction::Left);
//! assert_eq!(outcome.board.to_grid()[0], vec![4, 4, 0, 0]);
//! ```

pub mod loss;
pub mod movement;
pub mod turn;

pub use loss::has_moves;
pub use movement::{advance, can_move, legal_directions, MoveOutcome, Slide};
pub use turn::{apply_move, TurnOutcome};
