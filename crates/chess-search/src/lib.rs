//! Fixed-depth adversarial search for chess.
//!
//! This crate provides:
//! - [`Rules`] and [`Occupancy`] - the seams through which the search talks to a rules engine
//! - [`Board`] - a [`shakmaty`]-backed implementation of both traits with an undo stack
//! - [`evaluate`] - static material + piece-square evaluation (positive favours White)
//! - [`Searcher`] - minimax with alpha-beta pruning and null-move pruning
//! - [`select_best_move`] - root move selection at a fixed depth
//!
//! # Score convention
//!
//! Scores are always from White's point of view. The side that wants a higher
//! score is the *maximizing* side; the search branches on it explicitly rather
//! than negating scores per ply.
//!
//! # Example
//!
//! ```
//! use chess_search::{evaluate, select_best_move, Board};
//!
//! let mut board = Board::new();
//! assert_eq!(evaluate(&board), 0);
//!
//! let best = select_best_move(&mut board, true, 2).unwrap();
//! println!("{} scores {}", board.san(&best.mv), best.score);
//! ```

mod board;
mod config;
mod error;
mod eval;
mod guard;
pub mod rules;
mod search;
mod select;
pub mod tables;

pub use board::Board;
pub use config::{NullMovePolicy, SearchConfig, MAX_DEPTH};
pub use error::{RulesError, SearchError};
pub use eval::{evaluate, material, Evaluator, PieceSquareEvaluator, Score, INFINITY};
pub use rules::{Occupancy, Rules};
pub use search::{SearchStats, Searcher};
pub use select::{select_best_move, ScoredMove};
