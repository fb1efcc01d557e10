//! Presentation adapter: what a renderer needs to show one card.

use serde::Serialize;

use crate::cards::{Card, SuitKey};
use crate::codec::AssetResolver;

/// Keywords shown per card.
pub const VISIBLE_KEYWORDS: usize = 3;

/// Display data for a single card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView<'a> {
    pub structured_id: String,
    pub image: String,
    pub display_name: &'a str,
    pub localized_name: &'a str,
    pub keywords: &'a [String],
    pub upright_meaning: &'a str,
    pub has_complete_meaning: bool,
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl<'a> CardView<'a> {
    /// Build the view of `card`, resolving its image through `resolver`.
    #[must_use]
    pub fn new(card: &'a Card, resolver: &AssetResolver) -> Self {
        let key = SuitKey::of(card);
        let keywords = card.keywords();

        Self {
            structured_id: card.structured_id().to_string(),
            image: resolver.card_path(card),
            display_name: card.display_name(),
            localized_name: card.localized_name(),
            keywords: &keywords[..keywords.len().min(VISIBLE_KEYWORDS)],
            upright_meaning: card.upright_meaning(),
            has_complete_meaning: card.has_complete_meaning(),
            color: key.color(),
            icon: key.icon(),
            label: key.label(),
        }
    }
}
