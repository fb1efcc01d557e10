//! Card model: suits, ranks, card records and the catalog.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Arcana`: card classification
//! - `CardIndex`: checked numeric index (0..=77)
//! - `Card`: immutable card record
//! - `CardCatalog`: the 78-card deck, built from rule tables
//! - `SuitKey`: presentation tables (color, icon, label)

pub mod catalog;
pub mod definition;
pub mod rank;
pub mod style;
pub mod suit;
pub(crate) mod tables;

pub use catalog::{CardCatalog, CatalogStats};
pub use definition::{Card, CardIndex, CARD_COUNT};
pub use rank::Rank;
pub use style::{CardBack, SuitKey};
pub use suit::{Arcana, Suit};
