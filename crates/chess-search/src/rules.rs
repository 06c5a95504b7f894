//! Rules collaborator abstraction.
//!
//! The search never decides legality or termination itself. It enumerates,
//! applies and undoes moves through [`Rules`], and the evaluator reads piece
//! placement through [`Occupancy`]. [`Board`](crate::Board) implements both
//! on top of shakmaty; tests implement [`Rules`] on synthetic game trees.

use std::fmt;

use shakmaty::{Bitboard, Color, Role, Square};

use crate::RulesError;

/// Move generation and stack-disciplined mutation of a position.
///
/// Every [`apply`](Rules::apply) must be matched by exactly one
/// [`undo`](Rules::undo), and every successful
/// [`apply_null`](Rules::apply_null) by one [`undo_null`](Rules::undo_null),
/// in last-in first-out order.
pub trait Rules {
    /// Move type produced by [`legal_moves`](Rules::legal_moves).
    type Move: Clone + fmt::Debug;

    /// Returns every legal move in the current position, in generation order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays a legal move.
    fn apply(&mut self, mv: &Self::Move);

    /// Takes back the most recently applied move.
    fn undo(&mut self);

    /// Passes the turn without moving a piece.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::NullMoveInCheck`] when the side to move is in
    /// check. The position is unchanged on error.
    fn apply_null(&mut self) -> Result<(), RulesError>;

    /// Takes back the most recent null move.
    fn undo_null(&mut self);

    /// Returns true on checkmate, stalemate or any other game-ending rule.
    fn is_game_over(&self) -> bool;

    /// Returns true if the side to move is in check.
    fn is_check(&self) -> bool;

    /// Returns the side to move.
    fn turn(&self) -> Color;
}

/// Read-only view of piece placement used by the evaluator.
pub trait Occupancy {
    /// Returns the squares occupied by pieces of the given kind and color.
    fn pieces_of(&self, role: Role, color: Color) -> Bitboard;

    /// Reflects a square across the rank axis (a1 <-> a8).
    fn mirror(square: Square) -> Square
    where
        Self: Sized,
    {
        square.flip_vertical()
    }
}
