//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::SearchError;

/// Deepest search accepted at the root. Recursion is native, so this bounds
/// stack usage.
pub const MAX_DEPTH: u32 = 64;

/// Which nodes may try a null-move cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NullMovePolicy {
    /// Never pass.
    Disabled,
    /// Only nodes where the minimizing side (Black) is to move.
    MinimizerOnly,
    /// Nodes for either side.
    #[default]
    Both,
}

impl NullMovePolicy {
    /// Returns true if a node for the given side may try a null move.
    pub fn applies_to(self, maximizing: bool) -> bool {
        match self {
            NullMovePolicy::Disabled => false,
            NullMovePolicy::MinimizerOnly => !maximizing,
            NullMovePolicy::Both => true,
        }
    }
}

/// Parameters for [`Searcher`](crate::Searcher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search depth in plies, counting the root move.
    pub depth: u32,
    /// Where null-move pruning is tried.
    pub null_move: NullMovePolicy,
    /// Minimum remaining depth for a null-move probe.
    pub null_move_min_depth: u32,
    /// Extra plies removed from a null-move probe, on top of the pass itself.
    pub null_move_reduction: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            null_move: NullMovePolicy::Both,
            null_move_min_depth: 2,
            null_move_reduction: 2,
        }
    }
}

impl SearchConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the null-move policy.
    pub fn with_null_move(mut self, policy: NullMovePolicy) -> Self {
        self.null_move = policy;
        self
    }

    /// Sets the minimum depth for a null-move probe.
    pub fn with_null_move_min_depth(mut self, depth: u32) -> Self {
        self.null_move_min_depth = depth;
        self
    }

    /// Sets the null-move depth reduction.
    pub fn with_null_move_reduction(mut self, reduction: u32) -> Self {
        self.null_move_reduction = reduction;
        self
    }

    /// Checks that the depth can be searched from the root and that the
    /// null-move parameters stay within [`MAX_DEPTH`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::ZeroDepth`] for a depth of zero,
    /// [`SearchError::DepthTooLarge`] above [`MAX_DEPTH`] and
    /// [`SearchError::NullMoveSettingTooLarge`] for an out-of-range null-move
    /// minimum depth or reduction.
    pub fn validate(&self) -> Result<(), SearchError> {
        match self.depth {
            0 => return Err(SearchError::ZeroDepth),
            depth if depth > MAX_DEPTH => {
                return Err(SearchError::DepthTooLarge {
                    depth,
                    max: MAX_DEPTH,
                })
            }
            _ => {}
        }
        for (setting, value) in [
            ("null_move_min_depth", self.null_move_min_depth),
            ("null_move_reduction", self.null_move_reduction),
        ] {
            if value > MAX_DEPTH {
                return Err(SearchError::NullMoveSettingTooLarge {
                    setting,
                    value,
                    max: MAX_DEPTH,
                });
            }
        }
        Ok(())
    }
}
