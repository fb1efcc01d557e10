//! Structured card identifiers.
//!
//! A structured ID is the stable public identity of a card:
//!
//! - Major arcana: `"{NN}-{slug}"`, e.g. `"00-fool"`, `"21-world"`
//! - Minor arcana: `"{suit}-{rank}"`, e.g. `"wands-ace"`, `"cups-7"`
//!
//! Parsing is lenient in two ways the asset naming relies on: pip ranks may
//! be zero-padded (`"wands-07"`) and card 2 may be spelled
//! `"02-high-priestess"`. Display always emits the canonical form.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::tables::MAJOR_ARCANA;
use crate::cards::{Arcana, CardIndex, Rank, Suit};
use crate::core::{Result, TarotError};

/// Number of major-arcana cards; minor indices start here.
pub const MAJOR_COUNT: u8 = 22;

/// Cards per suit.
pub const SUIT_SIZE: u8 = 14;

/// Suit blocks in numeric index order: swords 22..=35, cups 36..=49,
/// wands 50..=63, pentacles 64..=77.
pub const INDEX_SUIT_ORDER: [Suit; 4] = [Suit::Swords, Suit::Cups, Suit::Wands, Suit::Pentacles];

/// Alternate spelling accepted for card 2.
pub const PRIESTESS_ALIAS: &str = "high-priestess";

/// Parsed structured card ID.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StructuredId {
    /// `"{NN}-{slug}"`
    Major { number: u8, slug: String },
    /// `"{suit}-{rank}"`
    Minor { suit: Suit, rank: Rank },
}

impl StructuredId {
    /// Canonical ID of a major-arcana card, `None` past 21.
    #[must_use]
    pub fn major(number: u8) -> Option<Self> {
        MAJOR_ARCANA.get(usize::from(number)).map(|entry| StructuredId::Major {
            number,
            slug: entry.slug.to_string(),
        })
    }

    /// ID of a minor-arcana card.
    #[must_use]
    pub const fn minor(suit: Suit, rank: Rank) -> Self {
        StructuredId::Minor { suit, rank }
    }

    /// Parse either accepted shape.
    pub fn parse(id: &str) -> Result<Self> {
        Self::parse_major(id)
            .or_else(|| Self::parse_minor(id))
            .ok_or_else(|| TarotError::UnrecognizedId { id: id.to_string() })
    }

    fn parse_major(id: &str) -> Option<Self> {
        let bytes = id.as_bytes();
        if bytes.len() < 4
            || !bytes[0].is_ascii_digit()
            || !bytes[1].is_ascii_digit()
            || bytes[2] != b'-'
        {
            return None;
        }

        let number = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        if number >= MAJOR_COUNT {
            return None;
        }

        let slug = &id[3..];
        let well_formed = slug.bytes().all(|b| b.is_ascii_lowercase() || b == b'-')
            && !slug.starts_with('-')
            && !slug.ends_with('-');
        if !well_formed {
            return None;
        }

        Some(StructuredId::Major {
            number,
            slug: slug.to_string(),
        })
    }

    fn parse_minor(id: &str) -> Option<Self> {
        let (suit, rank) = id.split_once('-')?;
        Some(StructuredId::Minor {
            suit: Suit::from_slug(suit)?,
            rank: Rank::from_slug(rank)?,
        })
    }

    /// ID for a numeric index. Total over valid indices.
    #[must_use]
    pub fn from_index(index: CardIndex) -> Self {
        let raw = index.raw();
        if raw < MAJOR_COUNT {
            return StructuredId::Major {
                number: raw,
                slug: MAJOR_ARCANA[usize::from(raw)].slug.to_string(),
            };
        }

        let minor = raw - MAJOR_COUNT;
        let suit = INDEX_SUIT_ORDER[usize::from(minor / SUIT_SIZE)];
        let rank = Rank::ALL[usize::from(minor % SUIT_SIZE)];
        StructuredId::Minor { suit, rank }
    }

    /// Numeric index of this card.
    ///
    /// Major IDs must carry the card's own slug (or the priestess alias);
    /// `"02-fool"` is well-formed but names no card.
    pub fn index(&self) -> Result<CardIndex> {
        match self {
            StructuredId::Major { number, slug } => {
                let known = MAJOR_ARCANA[usize::from(*number)].slug == slug
                    || (*number == 2 && slug == PRIESTESS_ALIAS);
                if known {
                    Ok(CardIndex::from_raw(*number))
                } else {
                    Err(TarotError::UnrecognizedId { id: self.to_string() })
                }
            }
            StructuredId::Minor { suit, rank } => Ok(minor_index(*suit, *rank)),
        }
    }

    /// Image filename under the asset repository's naming convention.
    #[must_use]
    pub fn asset_filename(&self) -> String {
        match self {
            StructuredId::Major { slug, .. } => {
                let name = if slug == PRIESTESS_ALIAS { "priestess" } else { slug.as_str() };
                format!("major_arcana_{name}.png")
            }
            StructuredId::Minor { suit, rank } => format!("minor_arcana_{suit}_{rank}.png"),
        }
    }

    /// Which arcana this ID belongs to.
    #[must_use]
    pub const fn arcana(&self) -> Arcana {
        match self {
            StructuredId::Major { .. } => Arcana::Major,
            StructuredId::Minor { .. } => Arcana::Minor,
        }
    }
}

/// Index of a minor-arcana card from its suit block and rank offset.
#[must_use]
pub const fn minor_index(suit: Suit, rank: Rank) -> CardIndex {
    let block = match suit {
        Suit::Swords => 0,
        Suit::Cups => 1,
        Suit::Wands => 2,
        Suit::Pentacles => 3,
    };
    CardIndex::from_raw(MAJOR_COUNT + block * SUIT_SIZE + rank.offset())
}

impl std::fmt::Display for StructuredId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StructuredId::Major { number, slug } => write!(f, "{number:02}-{slug}"),
            StructuredId::Minor { suit, rank } => write!(f, "{suit}-{rank}"),
        }
    }
}

impl FromStr for StructuredId {
    type Err = TarotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StructuredId {
    type Error = TarotError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<StructuredId> for String {
    fn from(id: StructuredId) -> Self {
        id.to_string()
    }
}
