//! Game session: dealing a spread, flipping cards, the draw counter.
//!
//! ## Key Types
//!
//! - `GameSession`: one player's table over a shared `CardCatalog`
//! - `GameCard`: a dealt card with its flip state
//! - `DrawStore`: where the remaining-draws counter is persisted
//! - `CardView`: display data for a renderer

pub mod game;
pub mod store;
pub mod view;

pub use game::{GameCard, GameSession, RemainingDraws};
pub use store::{DrawStore, JsonFileStore, MemoryStore};
pub use view::{CardView, VISIBLE_KEYWORDS};
