//! Error types for the rules adapter and the search.

use thiserror::Error;

/// Errors reported by the rules collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The FEN string could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    /// The FEN parsed but does not describe a legal chess position.
    #[error("illegal position: {0}")]
    IllegalPosition(String),
    /// The move text is not a legal move in the current position.
    #[error("invalid move: {0}")]
    InvalidMove(String),
    /// A null move cannot be made while the side to move is in check.
    #[error("cannot pass while in check")]
    NullMoveInCheck,
}

/// Errors returned by root move selection.
///
/// None of these are transient: each one is a caller precondition that was
/// not met.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The position has no legal moves. Ask whether the game is over first.
    #[error("no legal moves in this position")]
    NoLegalMoves,
    /// A depth of zero performs no search, so no move can be chosen.
    #[error("search depth must be at least 1")]
    ZeroDepth,
    /// The requested depth exceeds the recursion limit.
    #[error("search depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: u32, max: u32 },
    /// A null-move parameter exceeds the recursion limit.
    #[error("{setting} = {value} exceeds the maximum of {max}")]
    NullMoveSettingTooLarge {
        setting: &'static str,
        value: u32,
        max: u32,
    },
}
