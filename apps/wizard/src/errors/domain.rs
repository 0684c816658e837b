//! Domain-level error type used by the rules engine, strategies and drivers.
//!
//! Every rejected operation leaves `Game`/`Board` untouched; callers inspect
//! [`DomainError::kind`] to decide whether to re-prompt or abort.

use core::fmt;

use thiserror::Error;

/// Machine-readable classification of a rule or construction violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    // Construction
    /// Non-positive player/wizard/jester/round count, or a deck too small for the deal
    InvalidConfig,

    // Lookup
    /// Rank token outside the fixed rank sequence
    InvalidRank,
    /// Token that maps to no registered card
    InvalidCardName,
    /// Alias registered twice while building a card registry
    DuplicateCardName,

    // Sequencing
    /// `predict` called a second time
    AlreadyPredicted,
    /// `play` called before `predict`
    PredictionsNotSet,
    /// `play` called after the last round closed
    GameFinished,
    /// `score` called before every round closed
    GameNotFinished,

    // Legality
    /// Prediction list length differs from the player count
    WrongPlayerCount,
    /// A prediction below zero
    NegativePrediction,
    /// Play from a player who is not the current player
    NotPlayersTurn,
    /// Card absent from the player's remaining hand
    CardNotInHand,
    /// Card violates the follow-suit rule
    IllegalSuit,
}

impl ValidationKind {
    /// Stable SCREAMING_SNAKE_CASE code for logs and match records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidConfig => "INVALID_CONFIG",
            Self::InvalidRank => "INVALID_RANK",
            Self::InvalidCardName => "INVALID_CARD_NAME",
            Self::DuplicateCardName => "DUPLICATE_CARD_NAME",
            Self::AlreadyPredicted => "ALREADY_PREDICTED",
            Self::PredictionsNotSet => "PREDICTIONS_NOT_SET",
            Self::GameFinished => "GAME_FINISHED",
            Self::GameNotFinished => "GAME_NOT_FINISHED",
            Self::WrongPlayerCount => "WRONG_PLAYER_COUNT",
            Self::NegativePrediction => "NEGATIVE_PREDICTION",
            Self::NotPlayersTurn => "NOT_PLAYERS_TURN",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::IllegalSuit => "ILLEGAL_SUIT",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or game rule violation
    #[error("{0}: {1}")]
    Validation(ValidationKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn kind(&self) -> ValidationKind {
        match self {
            Self::Validation(kind, _) => *kind,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(_, detail) => detail,
        }
    }
}

/// Fails with `kind` unless `condition` holds.
pub(crate) fn ensure(
    condition: bool,
    kind: ValidationKind,
    detail: impl FnOnce() -> String,
) -> Result<(), DomainError> {
    if condition {
        Ok(())
    } else {
        Err(DomainError::validation(kind, detail()))
    }
}
