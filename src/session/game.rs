//! One player's drawing session.
//!
//! Flow: `start` deals a spread face down and spends a draw, `flip` turns
//! cards over one at a time, and once every card is up the spread can be
//! read with `interpretation`. `restart` clears the table for the next
//! spread.
//!
//! All methods take `&mut self`, so at most one draw is ever in flight.

use std::sync::Arc;

use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, info};

use super::store::DrawStore;
use super::view::CardView;
use crate::cards::{Card, CardCatalog};
use crate::codec::AssetResolver;
use crate::core::{DrawRng, Result, TarotConfig, TarotError};

/// A card dealt into a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameCard {
    card: Card,
    is_flipped: bool,
    is_selected: bool,
}

impl GameCard {
    fn face_down(card: Card) -> Self {
        Self {
            card,
            is_flipped: false,
            is_selected: false,
        }
    }

    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }
}

/// How the remaining-draws counter is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemainingDraws {
    Unlimited,
    Exhausted,
    Count(i64),
}

impl RemainingDraws {
    /// Classify a raw counter under `config`'s unlimited threshold.
    #[must_use]
    pub fn classify(remaining: i64, config: &TarotConfig) -> Self {
        if config.is_unlimited(remaining) {
            RemainingDraws::Unlimited
        } else if remaining <= 0 {
            RemainingDraws::Exhausted
        } else {
            RemainingDraws::Count(remaining)
        }
    }
}

impl std::fmt::Display for RemainingDraws {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemainingDraws::Unlimited => f.write_str("無限"),
            RemainingDraws::Exhausted => f.write_str("0"),
            RemainingDraws::Count(n) => write!(f, "{n}"),
        }
    }
}

/// Drawing session over a shared catalog.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use tarot_draw::cards::CardCatalog;
/// use tarot_draw::core::{DrawRng, TarotConfig};
/// use tarot_draw::session::{GameSession, MemoryStore};
///
/// let catalog = Arc::new(CardCatalog::standard());
/// let mut session = GameSession::new(
///     catalog,
///     TarotConfig::default(),
///     MemoryStore::new(),
///     DrawRng::new(42),
/// ).unwrap();
///
/// session.start().unwrap();
/// assert_eq!(session.remaining_draws(), 2);
///
/// for position in 0..3 {
///     session.flip(position).unwrap();
/// }
/// assert_eq!(session.interpretation().unwrap().len(), 3);
/// ```
pub struct GameSession<S: DrawStore> {
    catalog: Arc<CardCatalog>,
    config: TarotConfig,
    rng: DrawRng,
    store: S,
    remaining: i64,
    started: bool,
    cards: SmallVec<[GameCard; 3]>,
}

impl<S: DrawStore> GameSession<S> {
    /// Open a session, reading the counter from `store`.
    ///
    /// A store with no saved counter starts at `config.initial_draws`.
    pub fn new(
        catalog: Arc<CardCatalog>,
        config: TarotConfig,
        store: S,
        rng: DrawRng,
    ) -> Result<Self> {
        config.validate()?;
        let remaining = store.load(&config.storage_key)?.unwrap_or(config.initial_draws);
        debug!(remaining, seed = rng.seed(), "opened session");

        Ok(Self {
            catalog,
            config,
            rng,
            store,
            remaining,
            started: false,
            cards: SmallVec::new(),
        })
    }

    /// Raw counter value.
    #[must_use]
    pub fn remaining_draws(&self) -> i64 {
        self.remaining
    }

    /// Counter as displayed.
    #[must_use]
    pub fn remaining_display(&self) -> RemainingDraws {
        RemainingDraws::classify(self.remaining, &self.config)
    }

    /// Is a spread on the table?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// The current spread.
    #[must_use]
    pub fn cards(&self) -> &[GameCard] {
        &self.cards
    }

    #[must_use]
    pub fn config(&self) -> &TarotConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Deal a new spread and spend one draw.
    ///
    /// Unlimited counters are not decremented. Fails with `GameInProgress`
    /// while a spread is on the table and `NoDrawsRemaining` when the
    /// counter is exhausted; neither consumes a draw.
    pub fn start(&mut self) -> Result<&[GameCard]> {
        if self.started {
            return Err(TarotError::GameInProgress);
        }
        if self.remaining <= 0 {
            return Err(TarotError::NoDrawsRemaining);
        }

        let dealt: SmallVec<[GameCard; 3]> = self
            .catalog
            .draw(self.config.cards_per_draw, &mut self.rng)?
            .into_iter()
            .map(|card| GameCard::face_down(card.clone()))
            .collect();

        let remaining = if self.config.is_unlimited(self.remaining) {
            self.remaining
        } else {
            self.remaining - 1
        };
        self.store.save(&self.config.storage_key, remaining)?;

        self.remaining = remaining;
        self.cards = dealt;
        self.started = true;
        let ids: Vec<String> =
            self.cards.iter().map(|c| c.card.structured_id().to_string()).collect();
        info!(remaining, cards = ?ids, "dealt spread");
        Ok(self.cards.as_slice())
    }

    /// Turn over the card at `position`.
    ///
    /// Returns `false` if it was already face up.
    pub fn flip(&mut self, position: usize) -> Result<bool> {
        if !self.started {
            return Err(TarotError::NoActiveGame);
        }
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(position)
            .ok_or(TarotError::InvalidPosition { position, len })?;

        if card.is_flipped {
            return Ok(false);
        }
        card.is_flipped = true;
        card.is_selected = true;
        debug!(position, card = %card.card.structured_id(), "flipped card");
        Ok(true)
    }

    /// Is every dealt card face up?
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.started && self.cards.iter().all(GameCard::is_flipped)
    }

    /// The spread's cards, once all of them are revealed.
    #[must_use]
    pub fn interpretation(&self) -> Option<Vec<&Card>> {
        self.all_revealed()
            .then(|| self.cards.iter().map(GameCard::card).collect())
    }

    /// Views of the dealt cards for rendering.
    #[must_use]
    pub fn card_views(&self, resolver: &AssetResolver) -> Vec<CardView<'_>> {
        self.cards.iter().map(|c| CardView::new(&c.card, resolver)).collect()
    }

    /// Clear the table. The counter is untouched.
    pub fn restart(&mut self) {
        self.cards.clear();
        self.started = false;
    }

    /// Overwrite and persist the counter.
    pub fn set_remaining_draws(&mut self, remaining: i64) -> Result<()> {
        self.store.save(&self.config.storage_key, remaining)?;
        self.remaining = remaining;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    fn session(store: MemoryStore) -> GameSession<MemoryStore> {
        GameSession::new(
            Arc::new(CardCatalog::standard()),
            TarotConfig::default(),
            store,
            DrawRng::new(42),
        )
        .unwrap()
    }

    #[test]
    fn test_new_uses_initial_draws() {
        let s = session(MemoryStore::new());
        assert_eq!(s.remaining_draws(), 3);
        assert!(!s.is_started());
        assert!(s.cards().is_empty());
    }

    #[test]
    fn test_new_reads_stored_counter() {
        let s = session(MemoryStore::with_value("tarot_remaining_draws", 1));
        assert_eq!(s.remaining_draws(), 1);
    }

    #[test]
    fn test_start_deals_face_down_and_persists() {
        let mut s = session(MemoryStore::new());
        let dealt = s.start().unwrap();

        assert_eq!(dealt.len(), 3);
        assert!(dealt.iter().all(|c| !c.is_flipped() && !c.is_selected()));
        assert_eq!(s.remaining_draws(), 2);
        assert_eq!(s.store().load("tarot_remaining_draws").unwrap(), Some(2));
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut s = session(MemoryStore::new());
        s.start().unwrap();

        assert!(matches!(s.start(), Err(TarotError::GameInProgress)));
        assert_eq!(s.remaining_draws(), 2);
    }

    #[test]
    fn test_flip() {
        let mut s = session(MemoryStore::new());
        assert!(matches!(s.flip(0), Err(TarotError::NoActiveGame)));

        s.start().unwrap();
        assert!(s.flip(1).unwrap());
        assert!(!s.flip(1).unwrap());
        assert!(s.cards()[1].is_flipped());
        assert!(s.cards()[1].is_selected());
        assert!(!s.cards()[0].is_flipped());
        assert!(matches!(
            s.flip(3),
            Err(TarotError::InvalidPosition { position: 3, len: 3 })
        ));
    }

    #[test]
    fn test_reveal_and_interpret() {
        let mut s = session(MemoryStore::new());
        s.start().unwrap();
        assert!(s.interpretation().is_none());

        s.flip(0).unwrap();
        s.flip(2).unwrap();
        assert!(!s.all_revealed());

        s.flip(1).unwrap();
        assert!(s.all_revealed());
        let cards = s.interpretation().unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0], s.cards()[0].card());
    }

    #[test]
    fn test_restart_keeps_counter() {
        let mut s = session(MemoryStore::new());
        s.start().unwrap();
        s.restart();

        assert!(!s.is_started());
        assert!(!s.all_revealed());
        assert_eq!(s.remaining_draws(), 2);
        assert!(s.start().is_ok());
    }

    #[test]
    fn test_exhausted_counter() {
        let mut s = session(MemoryStore::with_value("tarot_remaining_draws", 0));
        assert!(matches!(s.start(), Err(TarotError::NoDrawsRemaining)));
        assert_eq!(s.remaining_display(), RemainingDraws::Exhausted);
    }

    #[test]
    fn test_unlimited_counter_not_spent() {
        let mut s = session(MemoryStore::new());
        s.set_remaining_draws(999).unwrap();

        s.start().unwrap();
        assert_eq!(s.remaining_draws(), 999);
        assert_eq!(s.remaining_display(), RemainingDraws::Unlimited);
    }

    #[test]
    fn test_remaining_display() {
        let config = TarotConfig::default();
        assert_eq!(RemainingDraws::classify(999, &config).to_string(), "無限");
        assert_eq!(RemainingDraws::classify(0, &config).to_string(), "0");
        assert_eq!(RemainingDraws::classify(-4, &config).to_string(), "0");
        assert_eq!(RemainingDraws::classify(2, &config).to_string(), "2");
        assert_eq!(RemainingDraws::classify(900, &config).to_string(), "900");
    }

    #[test]
    fn test_card_views() {
        let mut s = session(MemoryStore::new());
        s.start().unwrap();

        let views = s.card_views(&AssetResolver::default());
        assert_eq!(views.len(), 3);
        assert!(views.iter().all(|v| v.image.starts_with("/images/tarot/")));
    }
}
