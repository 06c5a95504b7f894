//! Minimax search with alpha-beta and null-move pruning.

use tracing::trace;

use crate::guard::Applied;
use crate::rules::Rules;
use crate::{Evaluator, PieceSquareEvaluator, Score, SearchConfig, INFINITY};

/// Counters collected during one root search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, including leaves and null-move probes.
    pub nodes: u64,
    /// Move loops cut short by alpha-beta.
    pub cutoffs: u64,
    /// Nodes answered by a null-move probe.
    pub null_move_cutoffs: u64,
}

/// Depth-limited minimax searcher.
///
/// Scores are White-positive at every node; `maximizing` says whether the
/// side to move at a node wants the score to go up.
#[derive(Debug, Clone)]
pub struct Searcher<E = PieceSquareEvaluator> {
    config: SearchConfig,
    evaluator: E,
    stats: SearchStats,
}

impl Searcher<PieceSquareEvaluator> {
    /// Creates a searcher using the piece-square evaluator.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, PieceSquareEvaluator)
    }
}

impl<E> Searcher<E> {
    /// Creates a searcher with a custom leaf evaluator.
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        Searcher {
            config,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the counters accumulated since the last reset.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Clears the counters.
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Searches `position` to `depth` plies inside the window `(alpha, beta)`.
    ///
    /// Returns the static evaluation when `depth <= 0` or the game is over.
    /// Every move applied while searching is taken back before this returns,
    /// so the position is unchanged afterwards.
    pub fn minimax<R>(
        &mut self,
        position: &mut R,
        depth: i32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score
    where
        R: Rules,
        E: Evaluator<R>,
    {
        self.stats.nodes += 1;

        if depth <= 0 || position.is_game_over() {
            return self.evaluator.evaluate(position);
        }

        if let Some(bound) = self.null_move_cutoff(position, depth, alpha, beta, maximizing) {
            return bound;
        }

        if maximizing {
            let mut best = -INFINITY;
            for mv in position.legal_moves() {
                let value = {
                    let mut child = Applied::play(&mut *position, &mv);
                    self.minimax(&mut *child, depth - 1, alpha, beta, false)
                };
                best = best.max(value);
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in position.legal_moves() {
                let value = {
                    let mut child = Applied::play(&mut *position, &mv);
                    self.minimax(&mut *child, depth - 1, alpha, beta, true)
                };
                best = best.min(value);
                beta = beta.min(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Lets the side to move pass and searches the opponent's reply at reduced
    /// depth with a null window on the bound this node could cut at.
    ///
    /// A maximizing node cuts with `beta` if the pass still scores `>= beta`;
    /// a minimizing node cuts with `alpha` if the pass still scores `<= alpha`.
    /// No probe is made in check, where the rules refuse to pass. The probe is
    /// always at least one ply shallower than the node, whatever the reduction.
    fn null_move_cutoff<R>(
        &mut self,
        position: &mut R,
        depth: i32,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Option<Score>
    where
        R: Rules,
        E: Evaluator<R>,
    {
        let min_depth = i32::try_from(self.config.null_move_min_depth).unwrap_or(i32::MAX);
        if !self.config.null_move.applies_to(maximizing)
            || depth < min_depth
            || position.is_check()
        {
            return None;
        }

        let reduction = i32::try_from(self.config.null_move_reduction).unwrap_or(i32::MAX);
        let probe_depth = depth.saturating_sub(1).saturating_sub(reduction);
        let mut passed = Applied::pass(&mut *position).ok()?;

        let bound = if maximizing {
            let window = beta.saturating_sub(1);
            let value = self.minimax(&mut *passed, probe_depth, window, beta, false);
            (value >= beta).then_some(beta)
        } else {
            let window = alpha.saturating_add(1);
            let value = self.minimax(&mut *passed, probe_depth, alpha, window, true);
            (value <= alpha).then_some(alpha)
        };

        if bound.is_some() {
            self.stats.null_move_cutoffs += 1;
            trace!(depth, maximizing, "null-move cutoff");
        }
        bound
    }
}
