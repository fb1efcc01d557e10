//! # tarot-draw
//!
//! Tarot card catalog, card ID codec, and a shuffle/draw engine.
//!
//! ## Design Principles
//!
//! 1. **Derived, Not Authored**: The 78-card catalog is generated from rule
//!    tables on construction and never mutated afterwards.
//!
//! 2. **Explicit Identity**: A card's numeric index comes from a formula over
//!    its suit and rank, checked independently of the order cards are built.
//!
//! 3. **Injected, Not Global**: The catalog is an ordinary value handed to
//!    sessions and renderers.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, seeded RNG
//! - `cards`: Suits, ranks, card records, the catalog, suit styling
//! - `codec`: Index ↔ structured ID ↔ image filename
//! - `draw`: Fisher–Yates shuffle and draw-without-replacement
//! - `session`: Dealing, flipping, the persisted draw counter

pub mod core;
pub mod cards;
pub mod codec;
pub mod draw;
pub mod session;

// Re-export commonly used types
pub use crate::core::{DrawRng, DrawRngState, Result, TarotConfig, TarotError};

pub use crate::cards::{
    Arcana, Card, CardCatalog, CardIndex, CatalogStats, Rank, Suit, SuitKey, CARD_COUNT,
};

pub use crate::codec::{
    index_to_structured_id, structured_id_to_asset_filename, structured_id_to_index,
    AssetResolver, StructuredId,
};

pub use crate::draw::{draw, shuffle};

pub use crate::session::{
    CardView, DrawStore, GameCard, GameSession, JsonFileStore, MemoryStore, RemainingDraws,
};
