//! Runtime configuration.
//!
//! `TarotConfig` holds everything the session and asset resolver need that
//! is not part of the card data itself: where images live, the placeholder
//! image, how many cards a spread has, and the draw counter policy.
//!
//! Every field has a default, so a partial JSON document is a valid config.

use serde::{Deserialize, Serialize};

use super::error::{Result, TarotError};
use crate::cards::CARD_COUNT;

/// Crate configuration.
///
/// ## Example
///
/// ```
/// use tarot_draw::core::TarotConfig;
///
/// let config = TarotConfig::default()
///     .with_asset_base("/tarot-game/images/tarot")
///     .with_cards_per_draw(1);
///
/// assert_eq!(config.cards_per_draw, 1);
/// assert_eq!(config.fallback_asset, "/images/card-back.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TarotConfig {
    /// Base path card image filenames are joined onto.
    pub asset_base: String,

    /// Image shown when a card ID cannot be resolved.
    pub fallback_asset: String,

    /// Cards dealt per spread.
    pub cards_per_draw: usize,

    /// Draw counter for a player with nothing stored yet.
    pub initial_draws: i64,

    /// Counters above this are treated as unlimited.
    pub unlimited_threshold: i64,

    /// Storage key the counter is persisted under.
    pub storage_key: String,
}

impl Default for TarotConfig {
    fn default() -> Self {
        Self {
            asset_base: "/images/tarot".to_string(),
            fallback_asset: "/images/card-back.png".to_string(),
            cards_per_draw: 3,
            initial_draws: 3,
            unlimited_threshold: 900,
            storage_key: "tarot_remaining_draws".to_string(),
        }
    }
}

impl TarotConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config against the catalog size.
    pub fn validate(&self) -> Result<()> {
        if self.cards_per_draw > CARD_COUNT {
            return Err(TarotError::InvalidDrawCount {
                requested: self.cards_per_draw,
                available: CARD_COUNT,
            });
        }
        Ok(())
    }

    /// Set the image base path.
    #[must_use]
    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = base.into();
        self
    }

    /// Set the placeholder image.
    #[must_use]
    pub fn with_fallback_asset(mut self, fallback: impl Into<String>) -> Self {
        self.fallback_asset = fallback.into();
        self
    }

    /// Set the spread size.
    #[must_use]
    pub fn with_cards_per_draw(mut self, count: usize) -> Self {
        self.cards_per_draw = count;
        self
    }

    /// Set the starting draw counter.
    #[must_use]
    pub fn with_initial_draws(mut self, draws: i64) -> Self {
        self.initial_draws = draws;
        self
    }

    /// Set the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Is this counter value in the unlimited range?
    #[must_use]
    pub fn is_unlimited(&self, remaining: i64) -> bool {
        remaining > self.unlimited_threshold
    }
}
