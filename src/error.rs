//! Errors reported by the search core.
//!
//! None of these are retried internally. Falling back to a random or human
//! move is a decision for whoever drives the game.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The root position has no legal moves (checkmate, stalemate or equivalent).
    #[error("no legal moves available from the root position")]
    NoLegalMoves,

    /// Alpha-beta produced no node to choose from.
    #[error("search produced no result")]
    EmptySearchResult,

    /// The chosen leaf does not carry a move at the root's ply.
    #[error("chosen line has no move at ply {ply}")]
    MissingRootMove { ply: usize },

    #[error("invalid search configuration: {message}")]
    InvalidConfig { message: String },

    #[error("invalid FEN '{fen}': {message}")]
    InvalidFen { fen: String, message: String },
}

impl SearchError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig { message: message.into() }
    }

    /// Whether the error means the game cannot continue for the side to move.
    pub fn is_game_over(&self) -> bool {
        matches!(self, Self::NoLegalMoves | Self::EmptySearchResult)
    }
}

pub type SearchOutcome<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SearchError::NoLegalMoves.to_string(),
            "no legal moves available from the root position"
        );
        assert_eq!(
            SearchError::MissingRootMove { ply: 3 }.to_string(),
            "chosen line has no move at ply 3"
        );
        assert_eq!(
            SearchError::invalid_config("depth must be at least 1").to_string(),
            "invalid search configuration: depth must be at least 1"
        );
    }

    #[test]
    fn test_game_over_classification() {
        assert!(SearchError::NoLegalMoves.is_game_over());
        assert!(SearchError::EmptySearchResult.is_game_over());
        assert!(!SearchError::MissingRootMove { ply: 0 }.is_game_over());
    }
}
