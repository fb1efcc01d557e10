//! Error type shared by the catalog, codec, draw engine and session.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum TarotError {
    /// Numeric card index outside `0..=77`.
    #[error("invalid card index {index}: expected 0..=77")]
    InvalidIndex { index: i64 },

    /// Structured ID matching neither the major nor the minor shape.
    #[error("unrecognized card id {id:?}")]
    UnrecognizedId { id: String },

    /// Serialized card whose fields disagree with the card its ID names.
    #[error("card record {id:?} does not match the catalog card")]
    InconsistentCard { id: String },

    /// Draw request larger than the sequence it samples from.
    #[error("cannot draw {requested} cards from {available}")]
    InvalidDrawCount { requested: usize, available: usize },

    /// The remaining draw counter is exhausted.
    #[error("no draws remaining")]
    NoDrawsRemaining,

    /// A spread is already on the table.
    #[error("a game is already in progress")]
    GameInProgress,

    /// Flip requested with no spread on the table.
    #[error("no game in progress")]
    NoActiveGame,

    /// Flip addressed a card outside the spread.
    #[error("card position {position} out of range for a spread of {len}")]
    InvalidPosition { position: usize, len: usize },

    /// Reading or writing the draw counter failed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The stored counter or a config document could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias using [`TarotError`].
pub type Result<T> = std::result::Result<T, TarotError>;
