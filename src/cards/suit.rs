//! Arcana kinds and the four minor-arcana suits.

use serde::{Deserialize, Serialize};

/// Major (22 trump cards) or minor (56 suited cards).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

/// Minor-arcana suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    /// All suits in catalog generation order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// Lowercase identifier used in structured IDs and filenames.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Suit::Wands => "wands",
            Suit::Cups => "cups",
            Suit::Swords => "swords",
            Suit::Pentacles => "pentacles",
        }
    }

    /// Parse a suit slug. Case-sensitive.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// English suit name.
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }

    /// Chinese suit name.
    #[must_use]
    pub const fn localized_name(self) -> &'static str {
        match self {
            Suit::Wands => "權杖",
            Suit::Cups => "聖杯",
            Suit::Swords => "寶劍",
            Suit::Pentacles => "錢幣",
        }
    }

    /// Classical element: fire, water, air, earth.
    #[must_use]
    pub const fn element(self) -> &'static str {
        match self {
            Suit::Wands => "火",
            Suit::Cups => "水",
            Suit::Swords => "風",
            Suit::Pentacles => "土",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
