//! The game-state capability the search consumes, and a standard chess
//! implementation of it backed by `shakmaty`.

use std::fmt;

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, Color, Move, Outcome, Position};

use crate::error::{SearchError, SearchOutcome};

/// What the search needs from a game position.
///
/// `Clone` must produce an independent deep copy: the tree builder clones the
/// parent position once per branch and mutates each copy separately.
pub trait GameState: Clone {
    type Move: Clone + fmt::Debug;

    /// Legal moves in a deterministic order, possibly empty.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays a move obtained from `legal_moves` on this position.
    fn play(&mut self, mv: &Self::Move);

    /// Every move played to reach this position, oldest first.
    fn move_history(&self) -> &[Self::Move];

    /// Returns the position after `mv`, leaving `self` untouched.
    fn apply(&self, mv: &Self::Move) -> Self {
        let mut next = self.clone();
        next.play(mv);
        next
    }
}

/// A chess game: the current position plus the moves that led to it.
#[derive(Clone, Debug, Default)]
pub struct ChessGame {
    position: Chess,
    history: Vec<Move>,
}

impl ChessGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> SearchOutcome<Self> {
        let invalid = |message: String| SearchError::InvalidFen {
            fen: fen.to_string(),
            message,
        };
        let parsed: Fen = fen.parse().map_err(|e| invalid(format!("{e}")))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;
        Ok(Self::from_position(position))
    }

    pub fn from_position(position: Chess) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.position.outcome()
    }

    /// Standard algebraic notation of `mv` in the current position.
    pub fn san(&self, mv: &Move) -> String {
        San::from_move(&self.position, mv).to_string()
    }
}

impl GameState for ChessGame {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn play(&mut self, mv: &Move) {
        self.position.play_unchecked(mv);
        self.history.push(mv.clone());
    }

    fn move_history(&self) -> &[Move] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_has_twenty_moves() {
        let game = ChessGame::new();
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.turn(), Color::White);
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_apply_does_not_alias_source() {
        let game = ChessGame::new();
        let mv = game.legal_moves()[0].clone();
        let next = game.apply(&mv);

        assert!(game.move_history().is_empty());
        assert_eq!(game.turn(), Color::White);
        assert_eq!(next.move_history(), &[mv]);
        assert_eq!(next.turn(), Color::Black);
    }

    #[test]
    fn test_legal_move_order_is_deterministic() {
        let a = ChessGame::new().legal_moves();
        let b = ChessGame::new().legal_moves();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_fen_checkmate_has_no_moves() {
        // Fool's mate, white to move
        let game =
            ChessGame::from_fen("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert!(game.legal_moves().is_empty());
        assert!(game.is_game_over());
        assert!(game.outcome().is_some());
    }

    #[test]
    fn test_from_fen_rejects_garbage() {
        let err = ChessGame::from_fen("not a fen").unwrap_err();
        assert!(matches!(err, SearchError::InvalidFen { .. }));
    }

    #[test]
    fn test_san_formatting() {
        let game = ChessGame::new();
        let sans: Vec<String> = game.legal_moves().iter().map(|m| game.san(m)).collect();
        assert!(sans.iter().any(|s| s == "e4"));
        assert!(sans.iter().any(|s| s == "Nf3"));
    }
}
