use crate::evaluation::Evaluate;
use crate::game::GameState;
use crate::types::Score;

/// One position in the search tree.
///
/// `evaluation` is the static score of `position`, fixed at construction and
/// never backed up from children. A parent owns its children outright and
/// the whole tree is dropped once a move has been chosen.
#[derive(Debug, Clone)]
pub struct SearchNode<G> {
    pub position: G,
    pub evaluation: Score,
    /// `None` until expanded; `Some(empty)` for a terminal position.
    pub(crate) children: Option<Vec<SearchNode<G>>>,
}

impl<G: GameState> SearchNode<G> {
    pub fn new<E: Evaluate<G>>(position: G, evaluator: &E) -> Self {
        let evaluation = evaluator.evaluate(&position);
        Self::with_evaluation(position, evaluation)
    }

    pub fn with_evaluation(position: G, evaluation: Score) -> Self {
        Self {
            position,
            evaluation,
            children: None,
        }
    }

    /// Children in move generation order. Empty when unexpanded or terminal.
    pub fn children(&self) -> &[SearchNode<G>] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    /// Expanded and found to have no legal moves.
    pub fn is_terminal(&self) -> bool {
        self.children.as_ref().is_some_and(Vec::is_empty)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(SearchNode::node_count).sum::<usize>()
    }

    /// Height of the materialized subtree. A lone node has height 0.
    pub fn height(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }
}
