//! Scoped application of moves.
//!
//! [`Applied`] plays a move (or a null move) when it is created and takes it
//! back when it is dropped. Holding the only `&mut` to the position while the
//! move is on the board means the search cannot forget an undo on an early
//! return, and unwinding restores the position too.

use std::ops::{Deref, DerefMut};

use crate::rules::Rules;
use crate::RulesError;

pub(crate) struct Applied<'a, R: Rules> {
    position: &'a mut R,
    null: bool,
}

impl<'a, R: Rules> Applied<'a, R> {
    /// Plays `mv` until the guard is dropped.
    pub(crate) fn play(position: &'a mut R, mv: &R::Move) -> Self {
        position.apply(mv);
        Applied {
            position,
            null: false,
        }
    }

    /// Passes the turn until the guard is dropped.
    pub(crate) fn pass(position: &'a mut R) -> Result<Self, RulesError> {
        position.apply_null()?;
        Ok(Applied {
            position,
            null: true,
        })
    }
}

impl<R: Rules> Deref for Applied<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.position
    }
}

impl<R: Rules> DerefMut for Applied<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.position
    }
}

impl<R: Rules> Drop for Applied<'_, R> {
    fn drop(&mut self) {
        if self.null {
            self.position.undo_null();
        } else {
            self.position.undo();
        }
    }
}
