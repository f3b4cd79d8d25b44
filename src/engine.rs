use std::time::Instant;

use log::{debug, trace};
use shakmaty::{Color, Move};

use crate::builder::build_tree;
use crate::error::{SearchError, SearchOutcome};
use crate::evaluation::{Evaluate, MaterialEvaluator};
use crate::game::{ChessGame, GameState};
use crate::search::alpha_beta_with_stats;
use crate::types::{Line, SearchConfig, SearchResult, SearchStats, MAX_PLY};

/// Picks a move for one turn: builds the tree for the current position,
/// searches it, and reads the root move back out of the chosen line.
///
/// Nothing carries over between calls; every decision starts from a fresh tree.
#[derive(Debug, Clone)]
pub struct Engine<E> {
    config: SearchConfig,
    evaluator: E,
}

impl<E> Engine<E> {
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Searches `position` with the side to move maximizing or minimizing the
    /// evaluator's score.
    pub fn choose_move<G>(
        &self,
        position: &G,
        maximizing: bool,
    ) -> SearchOutcome<SearchResult<G::Move>>
    where
        G: GameState,
        E: Evaluate<G>,
    {
        self.config.validate()?;
        let SearchConfig {
            depth,
            expand_depth,
            alpha,
            beta,
        } = self.config;

        let root_ply = position.move_history().len();

        let build_start = Instant::now();
        let mut root = build_tree(position.clone(), expand_depth, &self.evaluator);
        let build_time = build_start.elapsed();
        let tree_nodes = root.node_count();

        if root.is_terminal() {
            return Err(SearchError::NoLegalMoves);
        }

        for child in root.children() {
            trace!(
                "root move {:?} static eval {}",
                child.position.move_history().get(root_ply),
                child.evaluation
            );
        }

        let search_start = Instant::now();
        let mut stats = SearchStats::default();
        let leaf = alpha_beta_with_stats(
            &mut root,
            depth,
            alpha,
            beta,
            maximizing,
            &self.evaluator,
            &mut stats,
        )
        .ok_or(SearchError::EmptySearchResult)?;
        let search_time = search_start.elapsed();

        let moves = leaf.position.move_history().get(root_ply..).unwrap_or_default();
        let best_move = moves
            .first()
            .cloned()
            .ok_or(SearchError::MissingRootMove { ply: root_ply })?;
        let line: Line<G::Move> = moves.iter().take(MAX_PLY).cloned().collect();

        debug!(
            "search done: depth {} eval {} line {} nodes {} leaves {} expanded {} cutoffs {}/{} build {:?} search {:?}",
            depth,
            leaf.evaluation,
            line.len(),
            stats.nodes,
            stats.leaves,
            stats.expanded,
            stats.beta_cutoffs,
            stats.alpha_cutoffs,
            build_time,
            search_time
        );

        Ok(SearchResult {
            best_move,
            score: leaf.evaluation,
            line,
            depth,
            tree_nodes,
            stats,
            build_time,
            search_time,
        })
    }
}

impl Engine<MaterialEvaluator> {
    /// An engine playing `side`, scoring material from that side's view.
    pub fn for_side(side: Color) -> Self {
        Self::new(SearchConfig::default(), MaterialEvaluator::for_side(side))
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn side(&self) -> Color {
        self.evaluator.perspective
    }

    /// Chooses a move for whoever is to move in `game`. The engine's own side
    /// maximizes; the opponent minimizes.
    pub fn best_move(&self, game: &ChessGame) -> SearchOutcome<SearchResult<Move>> {
        let maximizing = game.turn() == self.side();
        self.choose_move(game, maximizing)
    }
}

impl Default for Engine<MaterialEvaluator> {
    fn default() -> Self {
        Self::for_side(Color::White)
    }
}
