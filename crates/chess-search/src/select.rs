//! Root move selection.

use tracing::{debug, info};

use crate::guard::Applied;
use crate::rules::Rules;
use crate::{Evaluator, Score, SearchConfig, SearchError, Searcher, INFINITY};

/// A root move and the score its subtree searched to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMove<M> {
    pub mv: M,
    pub score: Score,
}

impl<E> Searcher<E> {
    /// Picks the best move for `maximizing_side` at the configured depth.
    ///
    /// Each root move is searched with the full window at `depth - 1`. A later
    /// move replaces the current best only if it is strictly better, so the
    /// first of several equally scored moves wins.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoLegalMoves`] if the position has no moves, and
    /// the errors of [`SearchConfig::validate`] for an unusable depth.
    pub fn select_best_move<R>(
        &mut self,
        position: &mut R,
        maximizing_side: bool,
    ) -> Result<ScoredMove<R::Move>, SearchError>
    where
        R: Rules,
        E: Evaluator<R>,
    {
        self.config().validate()?;
        let depth = self.config().depth as i32;
        self.reset_stats();

        let mut best: Option<ScoredMove<R::Move>> = None;
        for mv in position.legal_moves() {
            let score = {
                let mut child = Applied::play(&mut *position, &mv);
                self.minimax(&mut *child, depth - 1, -INFINITY, INFINITY, !maximizing_side)
            };
            debug!(?mv, score, "root move searched");

            let improves = match &best {
                None => true,
                Some(current) if maximizing_side => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(ScoredMove { mv, score });
            }
        }

        let best = best.ok_or(SearchError::NoLegalMoves)?;
        let stats = self.stats();
        info!(
            mv = ?best.mv,
            score = best.score,
            depth,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            null_move_cutoffs = stats.null_move_cutoffs,
            "best move selected"
        );
        Ok(best)
    }

    /// Picks the best move for whichever side is to move; White maximizes.
    ///
    /// # Errors
    ///
    /// See [`select_best_move`](Searcher::select_best_move).
    pub fn best_move_for_side_to_move<R>(
        &mut self,
        position: &mut R,
    ) -> Result<ScoredMove<R::Move>, SearchError>
    where
        R: Rules,
        E: Evaluator<R>,
    {
        let maximizing = position.turn().is_white();
        self.select_best_move(position, maximizing)
    }
}

/// Picks the best move at `depth` with the default search configuration.
///
/// # Errors
///
/// See [`Searcher::select_best_move`].
pub fn select_best_move<R>(
    position: &mut R,
    maximizing_side: bool,
    depth: u32,
) -> Result<ScoredMove<R::Move>, SearchError>
where
    R: Rules + crate::Occupancy,
{
    Searcher::new(SearchConfig::new().with_depth(depth)).select_best_move(position, maximizing_side)
}
