//! Minor-arcana ranks: ace, pips 2 through 10, and the four court cards.
//!
//! The declaration order is the rank's offset within its suit (0..=13),
//! which the card ID codec relies on.

use serde::{Deserialize, Serialize};

/// Rank of a minor-arcana card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Page,
    Knight,
    Queen,
    King,
}

impl Rank {
    /// Ranks in suit offset order.
    pub const ALL: [Rank; 14] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Page,
        Rank::Knight,
        Rank::Queen,
        Rank::King,
    ];

    /// The four court ranks.
    pub const COURTS: [Rank; 4] = [Rank::Page, Rank::Knight, Rank::Queen, Rank::King];

    /// Offset within a suit: ace 0, pips 1..=9, courts 10..=13.
    #[must_use]
    pub const fn offset(self) -> u8 {
        self as u8
    }

    /// Rank at a suit offset.
    #[must_use]
    pub fn from_offset(offset: u8) -> Option<Self> {
        Self::ALL.get(usize::from(offset)).copied()
    }

    /// Pip rank with the given face value (2..=10).
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            2..=10 => Self::from_offset((number - 1) as u8),
            _ => None,
        }
    }

    /// Face value: 1 for the ace, 2..=10 for pips, `None` for courts.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        if self.is_court() {
            None
        } else {
            Some(self.offset() + 1)
        }
    }

    /// Page, knight, queen or king.
    #[must_use]
    pub const fn is_court(self) -> bool {
        matches!(self, Rank::Page | Rank::Knight | Rank::Queen | Rank::King)
    }

    /// Numbered card 2 through 10.
    #[must_use]
    pub const fn is_pip(self) -> bool {
        !self.is_court() && !matches!(self, Rank::Ace)
    }

    /// Parse a rank segment of a structured ID.
    ///
    /// Pip ranks may be zero-padded (`"07"`); `"ace"` and court names are
    /// matched exactly.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "ace" => Some(Rank::Ace),
            "page" => Some(Rank::Page),
            "knight" => Some(Rank::Knight),
            "queen" => Some(Rank::Queen),
            "king" => Some(Rank::King),
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                let trimmed = digits.trim_start_matches('0');
                // Anything longer than two significant digits is out of range
                if trimmed.len() > 2 {
                    return None;
                }
                trimmed.parse().ok().and_then(Self::from_number)
            }
            _ => None,
        }
    }

    /// English rank name as used in card titles.
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Page => "Page",
            Rank::Knight => "Knight",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    /// Chinese court title. `None` for ace and pips.
    #[must_use]
    pub const fn court_localized_name(self) -> Option<&'static str> {
        match self {
            Rank::Page => Some("侍者"),
            Rank::Knight => Some("騎士"),
            Rank::Queen => Some("王后"),
            Rank::King => Some("國王"),
            _ => None,
        }
    }
}

/// Canonical slug: `ace`, unpadded `2`..`10`, or the court name.
impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Ace => f.write_str("ace"),
            Rank::Page => f.write_str("page"),
            Rank::Knight => f.write_str("knight"),
            Rank::Queen => f.write_str("queen"),
            Rank::King => f.write_str("king"),
            pip => write!(f, "{}", pip.offset() + 1),
        }
    }
}
