use std::time::Duration;

use arrayvec::ArrayVec;

use crate::error::{SearchError, SearchOutcome};

pub type Score = i32;

/// Largest material swing a legal chess position can produce, rounded up.
pub const MAX_MATERIAL: Score = 2_000;
/// Search bounds must lie at or beyond this distance from zero so that no
/// evaluation can ever reach them.
pub const MIN_BOUND: Score = 2 * MAX_MATERIAL;
/// Default bound sentinels.
pub const SCORE_INFINITY: Score = 1_000_000;
pub const MAX_PLY: usize = 64;
pub const DEFAULT_DEPTH: u8 = 5;
pub const DEFAULT_EXPAND_DEPTH: u8 = 1;

/// Moves from the searched root down to the chosen leaf.
pub type Line<M> = ArrayVec<M, MAX_PLY>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Total lookahead in plies.
    pub depth: u8,
    /// Plies materialized eagerly before searching. Deeper plies are expanded
    /// on demand, so this never changes the chosen move.
    pub expand_depth: u8,
    pub alpha: Score,
    pub beta: Score,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            expand_depth: DEFAULT_EXPAND_DEPTH,
            alpha: -SCORE_INFINITY,
            beta: SCORE_INFINITY,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            expand_depth: DEFAULT_EXPAND_DEPTH.min(depth.saturating_sub(1)),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SearchOutcome<()> {
        if self.depth == 0 {
            return Err(SearchError::invalid_config("depth must be at least 1"));
        }
        if self.depth as usize > MAX_PLY {
            return Err(SearchError::invalid_config(format!(
                "depth {} exceeds the maximum of {} plies",
                self.depth, MAX_PLY
            )));
        }
        // expand(node, d) materializes d + 1 plies
        if self.expand_depth >= self.depth {
            return Err(SearchError::invalid_config(format!(
                "expand_depth {} must be below depth {}",
                self.expand_depth, self.depth
            )));
        }
        if self.alpha > -MIN_BOUND || self.beta < MIN_BOUND {
            return Err(SearchError::invalid_config(format!(
                "bounds [{}, {}] must enclose [{}, {}]",
                self.alpha, self.beta, -MIN_BOUND, MIN_BOUND
            )));
        }
        Ok(())
    }
}

/// Per-search counters: nodes visited, lines ended, nodes built on demand,
/// and cutoffs taken on each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited by alpha-beta.
    pub nodes: u64,
    /// Nodes returned as line ends (depth exhausted or terminal).
    pub leaves: u64,
    /// Nodes created by on-demand expansion during the search.
    pub expanded: u64,
    pub beta_cutoffs: u64,
    pub alpha_cutoffs: u64,
}

#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    pub best_move: M,
    /// Static evaluation of the leaf the chosen line ends in.
    pub score: Score,
    pub line: Line<M>,
    pub depth: u8,
    /// Nodes built before the search started.
    pub tree_nodes: usize,
    pub stats: SearchStats,
    pub build_time: Duration,
    pub search_time: Duration,
}
