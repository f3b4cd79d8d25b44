use shakmaty::{Board, Color, Position, Role};

use crate::game::{ChessGame, GameState};
use crate::types::Score;

pub const KING_VALUE: Score = 900;
pub const QUEEN_VALUE: Score = 90;
pub const ROOK_VALUE: Score = 50;
pub const BISHOP_VALUE: Score = 30;
pub const KNIGHT_VALUE: Score = 30;
pub const PAWN_VALUE: Score = 10;

const PIECE_WEIGHTS: [(Role, Score); 6] = [
    (Role::King, KING_VALUE),
    (Role::Queen, QUEEN_VALUE),
    (Role::Rook, ROOK_VALUE),
    (Role::Bishop, BISHOP_VALUE),
    (Role::Knight, KNIGHT_VALUE),
    (Role::Pawn, PAWN_VALUE),
];

/// Static scoring of a position. Positive favors the maximizing side.
pub trait Evaluate<G: GameState> {
    fn evaluate(&self, position: &G) -> Score;
}

impl<G: GameState, F: Fn(&G) -> Score> Evaluate<G> for F {
    fn evaluate(&self, position: &G) -> Score {
        self(position)
    }
}

/// Sum of piece weights on the board, counted for `perspective` and against
/// the other side. No positional, mobility or king safety terms.
pub fn material_balance(board: &Board, perspective: Color) -> Score {
    let ours = board.by_color(perspective);
    let theirs = board.by_color(perspective.other());

    PIECE_WEIGHTS
        .iter()
        .map(|&(role, weight)| {
            let pieces = board.by_role(role);
            let diff = (ours & pieces).count() as Score - (theirs & pieces).count() as Score;
            diff * weight
        })
        .sum()
}

/// Material evaluator for chess. Side to move is ignored; the score is always
/// from `perspective`'s point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialEvaluator {
    pub perspective: Color,
}

impl MaterialEvaluator {
    pub fn for_side(perspective: Color) -> Self {
        Self { perspective }
    }
}

impl Default for MaterialEvaluator {
    fn default() -> Self {
        Self::for_side(Color::White)
    }
}

impl Evaluate<ChessGame> for MaterialEvaluator {
    fn evaluate(&self, game: &ChessGame) -> Score {
        material_balance(game.position().board(), self.perspective)
    }
}
