use crate::builder::expand;
use crate::evaluation::Evaluate;
use crate::game::GameState;
use crate::tree::SearchNode;
use crate::types::{Score, SearchStats};

/// Minimax with alpha-beta pruning over a search tree.
///
/// Returns the leaf that ends the chosen line: a node `depth` plies down (or
/// a terminal node above that), not the root's child. The value of a line is
/// the static evaluation of its leaf. Ties keep the line found first.
///
/// Nodes reached with depth left that have not been expanded yet are expanded
/// one ply on the spot, so a shallow pre-built tree is searched to the full
/// `depth`. A depth of 0 returns `node` itself.
pub fn alpha_beta<'a, G, E>(
    node: &'a mut SearchNode<G>,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    evaluator: &E,
) -> Option<&'a SearchNode<G>>
where
    G: GameState,
    E: Evaluate<G>,
{
    let mut stats = SearchStats::default();
    alpha_beta_with_stats(node, depth, alpha, beta, maximizing, evaluator, &mut stats)
}

/// [`alpha_beta`], accumulating node and cutoff counts into `stats`.
pub fn alpha_beta_with_stats<'a, G, E>(
    node: &'a mut SearchNode<G>,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    evaluator: &E,
    stats: &mut SearchStats,
) -> Option<&'a SearchNode<G>>
where
    G: GameState,
    E: Evaluate<G>,
{
    stats.nodes += 1;

    if depth > 0 && !node.is_expanded() {
        stats.expanded += expand(node, 0, evaluator) as u64;
    }

    if depth == 0 || node.children().is_empty() {
        stats.leaves += 1;
        return Some(&*node);
    }

    let children = node.children.as_mut()?;
    let mut best: Option<&'a SearchNode<G>> = None;

    if maximizing {
        for child in children.iter_mut() {
            let value =
                alpha_beta_with_stats(child, depth - 1, alpha, beta, false, evaluator, stats);
            best = max_node(best, value);
            if let Some(best) = best {
                // Beta cutoff: the minimizing side already has a better option elsewhere
                if best.evaluation >= beta {
                    stats.beta_cutoffs += 1;
                    break;
                }
                alpha = alpha.max(best.evaluation);
            }
        }
    } else {
        for child in children.iter_mut() {
            let value =
                alpha_beta_with_stats(child, depth - 1, alpha, beta, true, evaluator, stats);
            best = min_node(best, value);
            if let Some(best) = best {
                // Alpha cutoff
                if best.evaluation <= alpha {
                    stats.alpha_cutoffs += 1;
                    break;
                }
                beta = beta.min(best.evaluation);
            }
        }
    }

    best
}

/// Exhaustive minimax with the same leaf semantics and tie-breaking as
/// [`alpha_beta`]. Visits every node down to `depth`.
pub fn minimax<'a, G, E>(
    node: &'a mut SearchNode<G>,
    depth: u8,
    maximizing: bool,
    evaluator: &E,
) -> Option<&'a SearchNode<G>>
where
    G: GameState,
    E: Evaluate<G>,
{
    if depth > 0 && !node.is_expanded() {
        expand(node, 0, evaluator);
    }

    if depth == 0 || node.children().is_empty() {
        return Some(&*node);
    }

    let children = node.children.as_mut()?;
    let mut best: Option<&'a SearchNode<G>> = None;
    for child in children.iter_mut() {
        let value = minimax(child, depth - 1, !maximizing, evaluator);
        best = if maximizing {
            max_node(best, value)
        } else {
            min_node(best, value)
        };
    }
    best
}

/// Higher evaluation wins; on equal evaluations `best` is kept.
fn max_node<'a, G>(
    best: Option<&'a SearchNode<G>>,
    candidate: Option<&'a SearchNode<G>>,
) -> Option<&'a SearchNode<G>> {
    match (best, candidate) {
        (Some(b), Some(c)) if c.evaluation > b.evaluation => Some(c),
        (None, c) => c,
        (b, _) => b,
    }
}

/// Lower evaluation wins; on equal evaluations `best` is kept.
fn min_node<'a, G>(
    best: Option<&'a SearchNode<G>>,
    candidate: Option<&'a SearchNode<G>>,
) -> Option<&'a SearchNode<G>> {
    match (best, candidate) {
        (Some(b), Some(c)) if c.evaluation < b.evaluation => Some(c),
        (None, c) => c,
        (b, _) => b,
    }
}
