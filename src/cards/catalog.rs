//! The 78-card catalog.
//!
//! `CardCatalog` is built deterministically from the rule tables every time
//! it is constructed and is read-only afterwards. It is a plain value: build
//! it once and hand it (or an `Arc` of it) to whatever needs it.
//!
//! Cards are kept in canonical generation order (majors, then wands, cups,
//! swords, pentacles). A card's numeric index comes from the ID codec, not
//! from that position, so lookup by index goes through a separate table.

use serde::Serialize;
use tracing::debug;

use super::definition::{Card, CardIndex, CARD_COUNT};
use super::rank::Rank;
use super::suit::{Arcana, Suit};
use super::tables::MAJOR_ARCANA;
use crate::codec::StructuredId;
use crate::core::{DrawRng, Result};
use crate::draw;

/// Card counts shown alongside the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub major: usize,
    pub minor: usize,
}

/// Immutable catalog of every tarot card.
///
/// ## Example
///
/// ```
/// use tarot_draw::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
/// assert_eq!(catalog.len(), 78);
///
/// let fool = catalog.find("00-fool").unwrap();
/// assert_eq!(fool.display_name(), "The Fool");
///
/// // Zero-padded pip ranks resolve to the canonical card
/// assert_eq!(catalog.find("wands-07").unwrap().structured_id().to_string(), "wands-7");
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    cards: Vec<Card>,
    /// Position in `cards` of each index.
    positions: Vec<usize>,
}

impl CardCatalog {
    /// Build the standard 78-card deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(CARD_COUNT);

        cards.extend(
            MAJOR_ARCANA
                .iter()
                .enumerate()
                .map(|(number, entry)| Card::from_major_entry(number as u8, entry)),
        );
        for suit in Suit::ALL {
            cards.extend(Rank::ALL.into_iter().map(|rank| Card::minor(suit, rank)));
        }

        let mut positions = vec![usize::MAX; CARD_COUNT];
        for (position, card) in cards.iter().enumerate() {
            positions[usize::from(card.index().raw())] = position;
        }
        debug_assert!(positions.iter().all(|&p| p != usize::MAX), "index table has gaps");

        let catalog = Self { cards, positions };
        debug!(
            total = catalog.len(),
            incomplete = catalog.incomplete_cards().count(),
            "built card catalog"
        );
        catalog
    }

    /// Card at a numeric index.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> &Card {
        &self.cards[self.positions[usize::from(index.raw())]]
    }

    /// Card at an unchecked numeric index.
    pub fn get_raw(&self, index: i64) -> Result<&Card> {
        Ok(self.get(CardIndex::new(index)?))
    }

    /// Card for a structured ID, accepting the same spellings as the parser.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Card> {
        let index = StructuredId::parse(id).and_then(|id| id.index()).ok()?;
        Some(self.get(index))
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a built catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in generation order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate in numeric index order.
    pub fn iter_by_index(&self) -> impl Iterator<Item = &Card> {
        CardIndex::all().map(move |index| self.get(index))
    }

    /// The 22 major arcana.
    pub fn major_arcana(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.arcana() == Arcana::Major)
    }

    /// The 56 minor arcana.
    pub fn minor_arcana(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.arcana() == Arcana::Minor)
    }

    /// The 14 cards of one suit.
    pub fn suit(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.suit() == Some(suit))
    }

    /// Cards whose meanings are still placeholder text.
    pub fn incomplete_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| !c.has_complete_meaning())
    }

    /// Find cards matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    /// Card counts.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let major = self.major_arcana().count();
        CatalogStats {
            total: self.len(),
            major,
            minor: self.len() - major,
        }
    }

    /// Draw `count` distinct cards.
    ///
    /// Fails with `InvalidDrawCount` when `count` exceeds the deck.
    pub fn draw(&self, count: usize, rng: &mut DrawRng) -> Result<Vec<&Card>> {
        let drawn = draw::draw(&self.cards, count, rng)?;
        debug!(
            count,
            cards = ?drawn.iter().map(|c| c.structured_id().to_string()).collect::<Vec<_>>(),
            "drew cards"
        );
        Ok(drawn)
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a CardCatalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
