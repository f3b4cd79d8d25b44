//! Fixed-depth minimax game-tree search with alpha-beta pruning.
//!
//! A root [`SearchNode`] is built for the current position, expanded by the
//! tree builder, scored by [`alpha_beta`] against a static [`Evaluate`]
//! implementation, and the first move of the winning line is read back from
//! the chosen leaf's move history. [`Engine`] wires those steps together for
//! a driver that plays one move per turn.

pub mod builder;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod search;
pub mod tree;
pub mod types;

pub use builder::{build_tree, expand};
pub use engine::Engine;
pub use error::{SearchError, SearchOutcome};
pub use evaluation::{material_balance, Evaluate, MaterialEvaluator};
pub use game::{ChessGame, GameState};
pub use search::{alpha_beta, alpha_beta_with_stats, minimax};
pub use tree::SearchNode;
pub use types::{SearchConfig, SearchResult, SearchStats, Score};
