use std::time::Instant;

use log::debug;

use crate::evaluation::Evaluate;
use crate::game::GameState;
use crate::tree::SearchNode;

/// Populates `node` with one child per legal move, then recurses `depth` more
/// plies. `expand(node, 0)` materializes exactly one ply.
///
/// Each child owns a fresh copy of the parent position with its move played,
/// so siblings never share state. Children follow move generation order. A
/// position without legal moves gets an empty child list. Any existing
/// children are replaced, never edited in place.
///
/// Returns the number of nodes created.
pub fn expand<G, E>(node: &mut SearchNode<G>, depth: u8, evaluator: &E) -> usize
where
    G: GameState,
    E: Evaluate<G>,
{
    let moves = node.position.legal_moves();
    let mut created = moves.len();
    let mut children = Vec::with_capacity(moves.len());

    for mv in &moves {
        let mut position = node.position.clone();
        position.play(mv);
        let mut child = SearchNode::new(position, evaluator);
        if depth > 0 {
            created += expand(&mut child, depth - 1, evaluator);
        }
        children.push(child);
    }

    node.children = Some(children);
    created
}

/// Creates a root for `position` and expands it to `depth`.
pub fn build_tree<G, E>(position: G, depth: u8, evaluator: &E) -> SearchNode<G>
where
    G: GameState,
    E: Evaluate<G>,
{
    let start = Instant::now();
    let mut root = SearchNode::new(position, evaluator);
    let created = expand(&mut root, depth, evaluator);
    debug!(
        "built game tree: depth {} nodes {} root moves {} time {:?}",
        depth,
        created + 1,
        root.children().len(),
        start.elapsed()
    );
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::MaterialEvaluator;
    use crate::game::ChessGame;

    #[test]
    fn test_expand_zero_builds_one_ply() {
        let eval = MaterialEvaluator::default();
        let game = ChessGame::new();
        let mut root = SearchNode::new(game.clone(), &eval);
        let created = expand(&mut root, 0, &eval);

        assert_eq!(created, 20);
        assert_eq!(root.children().len(), 20);
        for (child, mv) in root.children().iter().zip(game.legal_moves()) {
            assert!(!child.is_expanded());
            assert_eq!(child.position.move_history(), &[mv]);
            assert_eq!(child.evaluation, eval.evaluate(&child.position));
        }
    }

    #[test]
    fn test_depth_one_from_startpos() {
        let root = build_tree(ChessGame::new(), 1, &MaterialEvaluator::default());
        assert_eq!(root.children().len(), 20);
        // perft(1) + perft(2) + root
        assert_eq!(root.node_count(), 1 + 20 + 400);
        assert_eq!(root.height(), 2);
        assert!(root.children().iter().all(|c| c.children().len() == 20));
    }

    #[test]
    fn test_terminal_position_gets_empty_children() {
        let game =
            ChessGame::from_fen("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        let root = build_tree(game, 3, &MaterialEvaluator::default());
        assert!(root.is_terminal());
        assert_eq!(root.node_count(), 1);
    }

    #[test]
    fn test_root_position_untouched() {
        let game = ChessGame::new();
        let root = build_tree(game, 1, &MaterialEvaluator::default());
        assert!(root.position.move_history().is_empty());
        for child in root.children() {
            assert_eq!(child.position.move_history().len(), 1);
            for grandchild in child.children() {
                assert_eq!(grandchild.position.move_history().len(), 2);
                assert_eq!(grandchild.position.move_history()[0], child.position.move_history()[0]);
            }
        }
    }

    #[test]
    fn test_reexpanding_rebuilds_children() {
        let eval = MaterialEvaluator::default();
        let mut root = build_tree(ChessGame::new(), 1, &eval);
        let created = expand(&mut root, 0, &eval);
        assert_eq!(created, 20);
        assert_eq!(root.node_count(), 21);
    }
}
