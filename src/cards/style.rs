//! Suit presentation tables: color, icon, label and card-back design.
//!
//! Each table has five entries, one for the major arcana and one per suit.

use serde::Serialize;

use super::definition::Card;
use super::suit::Suit;

/// Presentation key: the major arcana or one of the suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitKey {
    Major,
    Suit(Suit),
}

/// Card-back artwork description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardBack {
    pub icon: &'static str,
    pub primary_icon: &'static str,
    pub secondary_icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl SuitKey {
    /// All five keys.
    pub const ALL: [SuitKey; 5] = [
        SuitKey::Major,
        SuitKey::Suit(Suit::Swords),
        SuitKey::Suit(Suit::Cups),
        SuitKey::Suit(Suit::Wands),
        SuitKey::Suit(Suit::Pentacles),
    ];

    /// Key for a card.
    #[must_use]
    pub fn of(card: &Card) -> Self {
        card.suit().map_or(SuitKey::Major, SuitKey::Suit)
    }

    /// Hex accent color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            SuitKey::Major => "#8b5cf6",
            SuitKey::Suit(Suit::Swords) => "#06b6d4",
            SuitKey::Suit(Suit::Cups) => "#10b981",
            SuitKey::Suit(Suit::Wands) => "#f59e0b",
            SuitKey::Suit(Suit::Pentacles) => "#ef4444",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            SuitKey::Major => "🔮",
            SuitKey::Suit(Suit::Swords) => "⚔️",
            SuitKey::Suit(Suit::Cups) => "🍷",
            SuitKey::Suit(Suit::Wands) => "🔥",
            SuitKey::Suit(Suit::Pentacles) => "💰",
        }
    }

    /// Short Chinese label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SuitKey::Major => "大牌",
            SuitKey::Suit(suit) => suit.localized_name(),
        }
    }

    /// Background gradient built from the accent color.
    #[must_use]
    pub fn gradient(self) -> String {
        let color = self.color();
        format!("linear-gradient(145deg, {color}20 0%, {color}05 100%)")
    }

    #[must_use]
    pub const fn card_back(self) -> CardBack {
        match self {
            SuitKey::Major => CardBack {
                icon: "🔮",
                primary_icon: "✨",
                secondary_icon: "🌟",
                title: "神秘大牌",
                subtitle: "揭開命運之謎",
            },
            SuitKey::Suit(Suit::Swords) => CardBack {
                icon: "⚔️",
                primary_icon: "⚔️",
                secondary_icon: "☁️",
                title: "寶劍之刃",
                subtitle: "真相與智慧",
            },
            SuitKey::Suit(Suit::Cups) => CardBack {
                icon: "🍷",
                primary_icon: "💧",
                secondary_icon: "🌊",
                title: "聖杯之愛",
                subtitle: "情感與直覺",
            },
            SuitKey::Suit(Suit::Wands) => CardBack {
                icon: "🔥",
                primary_icon: "🔥",
                secondary_icon: "⚡",
                title: "權杖之火",
                subtitle: "熱情與行動",
            },
            SuitKey::Suit(Suit::Pentacles) => CardBack {
                icon: "💰",
                primary_icon: "⭐",
                secondary_icon: "💎",
                title: "錢幣之富",
                subtitle: "豐盛與實現",
            },
        }
    }
}
