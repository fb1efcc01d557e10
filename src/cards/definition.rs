//! Card records.
//!
//! A `Card` is fully populated by one of two constructors, one per arcana
//! kind, and exposes read-only accessors. There is no way to change a card
//! after it is built. Deserialized cards are rebuilt from their structured ID
//! and must match the record field for field.

use serde::{Deserialize, Serialize};

use super::rank::Rank;
use super::suit::{Arcana, Suit};
use super::tables::{self, MajorEntry, MAJOR_ARCANA};
use crate::codec::{minor_index, StructuredId};
use crate::core::{Result, TarotError};

/// Total number of cards in a deck.
pub const CARD_COUNT: usize = 78;

/// Numeric card index, always in `0..=77`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct CardIndex(u8);

impl CardIndex {
    /// Checked construction from any integer.
    pub fn new(index: i64) -> Result<Self> {
        u8::try_from(index)
            .ok()
            .filter(|raw| usize::from(*raw) < CARD_COUNT)
            .map(Self)
            .ok_or(TarotError::InvalidIndex { index })
    }

    pub(crate) const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// All 78 indices in ascending order.
    pub fn all() -> impl Iterator<Item = CardIndex> {
        (0..CARD_COUNT as u8).map(Self)
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl TryFrom<i64> for CardIndex {
    type Error = TarotError;

    fn try_from(index: i64) -> Result<Self> {
        Self::new(index)
    }
}

impl From<CardIndex> for u8 {
    fn from(index: CardIndex) -> Self {
        index.0
    }
}

/// An immutable tarot card.
///
/// ## Example
///
/// ```
/// use tarot_draw::cards::{Card, Rank, Suit};
///
/// let fool = Card::major(0).unwrap();
/// assert_eq!(fool.structured_id().to_string(), "00-fool");
/// assert_eq!(fool.asset_path(), "major_arcana_fool.png");
///
/// let seven = Card::minor(Suit::Cups, Rank::Seven);
/// assert_eq!(seven.display_name(), "7 of Cups");
/// assert!(!seven.has_complete_meaning());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CardRecord")]
pub struct Card {
    index: CardIndex,
    structured_id: StructuredId,
    arcana: Arcana,
    suit: Option<Suit>,
    rank: Option<Rank>,
    number: Option<u8>,
    display_name: String,
    localized_name: String,
    keywords: Vec<String>,
    upright_meaning: String,
    reversed_meaning: String,
    element: Option<String>,
    astrology: Option<String>,
    asset_path: String,
    has_complete_meaning: bool,
}

impl Card {
    /// Major-arcana card by number, `None` past 21.
    #[must_use]
    pub fn major(number: u8) -> Option<Self> {
        MAJOR_ARCANA
            .get(usize::from(number))
            .map(|entry| Self::from_major_entry(number, entry))
    }

    pub(crate) fn from_major_entry(number: u8, entry: &MajorEntry) -> Self {
        let structured_id = StructuredId::Major {
            number,
            slug: entry.slug.to_string(),
        };

        Self {
            index: CardIndex::from_raw(number),
            asset_path: structured_id.asset_filename(),
            structured_id,
            arcana: Arcana::Major,
            suit: None,
            rank: None,
            number: Some(number),
            display_name: entry.name.to_string(),
            localized_name: entry.localized_name.to_string(),
            keywords: to_strings(entry.keywords),
            upright_meaning: entry.upright.to_string(),
            reversed_meaning: entry.reversed.to_string(),
            element: Some(entry.element.to_string()),
            astrology: Some(entry.astrology.to_string()),
            has_complete_meaning: true,
        }
    }

    /// Minor-arcana card.
    ///
    /// Aces carry the suit's authored template text. Pip and court meanings
    /// are placeholders and the card reports `has_complete_meaning() == false`.
    #[must_use]
    pub fn minor(suit: Suit, rank: Rank) -> Self {
        let suit_en = suit.english_name();
        let suit_zh = suit.localized_name();

        let (localized_name, keywords, upright, reversed, complete) = match rank {
            Rank::Ace => (
                format!("{suit_zh} Ace"),
                tables::ACE_KEYWORDS,
                format!("新的{suit_zh}能量開始、潛力、種子"),
                "錯失機會、能量受阻、延遲開始".to_string(),
                true,
            ),
            court if court.is_court() => {
                let court_zh = court.court_localized_name().unwrap_or_default();
                (
                    format!("{suit_zh}{court_zh}"),
                    tables::court_keywords(court).unwrap_or(tables::PLACEHOLDER_KEYWORDS),
                    format!("{court_zh}的正位意義（需補充）"),
                    format!("{court_zh}的逆位意義（需補充）"),
                    false,
                )
            }
            pip => {
                let n = pip.number().unwrap_or_default();
                (
                    format!("{suit_zh} {n}"),
                    tables::pip_keywords(n),
                    format!("{n} 號牌的正位意義（需補充）"),
                    format!("{n} 號牌的逆位意義（需補充）"),
                    false,
                )
            }
        };

        let structured_id = StructuredId::minor(suit, rank);

        Self {
            index: minor_index(suit, rank),
            asset_path: structured_id.asset_filename(),
            structured_id,
            arcana: Arcana::Minor,
            suit: Some(suit),
            rank: Some(rank),
            number: rank.number(),
            display_name: format!("{} of {suit_en}", rank.english_name()),
            localized_name,
            keywords: to_strings(keywords),
            upright_meaning: upright,
            reversed_meaning: reversed,
            element: Some(suit.element().to_string()),
            astrology: None,
            has_complete_meaning: complete,
        }
    }

    /// Card named by a structured ID, built by the matching constructor.
    pub fn from_structured_id(id: &StructuredId) -> Result<Self> {
        id.index()?;
        let card = match id {
            StructuredId::Major { number, .. } => {
                Self::from_major_entry(*number, &MAJOR_ARCANA[usize::from(*number)])
            }
            StructuredId::Minor { suit, rank } => Self::minor(*suit, *rank),
        };
        Ok(card)
    }

    /// Numeric index.
    #[must_use]
    pub fn index(&self) -> CardIndex {
        self.index
    }

    /// Structured ID.
    #[must_use]
    pub fn structured_id(&self) -> &StructuredId {
        &self.structured_id
    }

    #[must_use]
    pub fn arcana(&self) -> Arcana {
        self.arcana
    }

    /// Suit, present for minor arcana only.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Rank, present for minor arcana only.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }

    /// Card number: 0..=21 for majors, 1..=10 for aces and pips.
    #[must_use]
    pub fn number(&self) -> Option<u8> {
        self.number
    }

    /// English name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Chinese name.
    #[must_use]
    pub fn localized_name(&self) -> &str {
        &self.localized_name
    }

    /// Ordered keywords.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn upright_meaning(&self) -> &str {
        &self.upright_meaning
    }

    #[must_use]
    pub fn reversed_meaning(&self) -> &str {
        &self.reversed_meaning
    }

    /// Upright meaning, or `None` when it is placeholder text.
    #[must_use]
    pub fn authored_upright_meaning(&self) -> Option<&str> {
        self.has_complete_meaning.then_some(self.upright_meaning.as_str())
    }

    /// Symbolic element (火/水/風/土).
    #[must_use]
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// Astrological correspondence, majors only.
    #[must_use]
    pub fn astrology(&self) -> Option<&str> {
        self.astrology.as_deref()
    }

    /// Image filename, relative to the asset base path.
    #[must_use]
    pub fn asset_path(&self) -> &str {
        &self.asset_path
    }

    /// False when the meaning texts are generated placeholders.
    #[must_use]
    pub fn has_complete_meaning(&self) -> bool {
        self.has_complete_meaning
    }
}

impl TryFrom<StructuredId> for Card {
    type Error = TarotError;

    fn try_from(id: StructuredId) -> Result<Self> {
        Self::from_structured_id(&id)
    }
}

/// Wire shape of a serialized [`Card`]. Only accepted when it equals the
/// card its structured ID names.
#[derive(Deserialize)]
struct CardRecord {
    index: CardIndex,
    structured_id: StructuredId,
    arcana: Arcana,
    suit: Option<Suit>,
    rank: Option<Rank>,
    number: Option<u8>,
    display_name: String,
    localized_name: String,
    keywords: Vec<String>,
    upright_meaning: String,
    reversed_meaning: String,
    element: Option<String>,
    astrology: Option<String>,
    asset_path: String,
    has_complete_meaning: bool,
}

impl TryFrom<CardRecord> for Card {
    type Error = TarotError;

    fn try_from(record: CardRecord) -> Result<Self> {
        let canonical = Self::from_structured_id(&record.structured_id)?;
        let received = Self {
            index: record.index,
            structured_id: record.structured_id,
            arcana: record.arcana,
            suit: record.suit,
            rank: record.rank,
            number: record.number,
            display_name: record.display_name,
            localized_name: record.localized_name,
            keywords: record.keywords,
            upright_meaning: record.upright_meaning,
            reversed_meaning: record.reversed_meaning,
            element: record.element,
            astrology: record.astrology,
            asset_path: record.asset_path,
            has_complete_meaning: record.has_complete_meaning,
        };

        if received != canonical {
            return Err(TarotError::InconsistentCard {
                id: canonical.structured_id.to_string(),
            });
        }
        Ok(canonical)
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_index_bounds() {
        assert_eq!(CardIndex::new(0).unwrap().raw(), 0);
        assert_eq!(CardIndex::new(77).unwrap().raw(), 77);
        assert!(matches!(CardIndex::new(78), Err(TarotError::InvalidIndex { index: 78 })));
        assert!(matches!(CardIndex::new(-1), Err(TarotError::InvalidIndex { index: -1 })));
        assert!(matches!(CardIndex::new(300), Err(TarotError::InvalidIndex { index: 300 })));
        assert_eq!(format!("{}", CardIndex::new(5).unwrap()), "Card(5)");
    }

    #[test]
    fn test_card_index_all() {
        let all: Vec<_> = CardIndex::all().collect();
        assert_eq!(all.len(), CARD_COUNT);
        assert_eq!(all[0].raw(), 0);
        assert_eq!(all[77].raw(), 77);
    }

    #[test]
    fn test_card_index_serde_is_checked() {
        let index: CardIndex = serde_json::from_str("12").unwrap();
        assert_eq!(index.raw(), 12);
        assert_eq!(serde_json::to_string(&index).unwrap(), "12");
        assert!(serde_json::from_str::<CardIndex>("78").is_err());
    }

    #[test]
    fn test_major_card() {
        let priestess = Card::major(2).unwrap();
        assert_eq!(priestess.index().raw(), 2);
        assert_eq!(priestess.arcana(), Arcana::Major);
        assert_eq!(priestess.suit(), None);
        assert_eq!(priestess.display_name(), "The High Priestess");
        assert_eq!(priestess.localized_name(), "女祭司");
        assert_eq!(priestess.element(), Some("水"));
        assert_eq!(priestess.astrology(), Some("月亮"));
        assert_eq!(priestess.asset_path(), "major_arcana_priestess.png");
        assert!(priestess.has_complete_meaning());
        assert!(priestess.authored_upright_meaning().is_some());

        assert!(Card::major(22).is_none());
    }

    #[test]
    fn test_ace_card() {
        let ace = Card::minor(Suit::Wands, Rank::Ace);
        assert_eq!(ace.index().raw(), 50);
        assert_eq!(ace.structured_id().to_string(), "wands-ace");
        assert_eq!(ace.display_name(), "Ace of Wands");
        assert_eq!(ace.localized_name(), "權杖 Ace");
        assert_eq!(ace.number(), Some(1));
        assert_eq!(ace.keywords(), ["開始", "潛力", "機會"]);
        assert_eq!(ace.upright_meaning(), "新的權杖能量開始、潛力、種子");
        assert_eq!(ace.element(), Some("火"));
        assert!(ace.has_complete_meaning());
    }

    #[test]
    fn test_pip_card() {
        let ten = Card::minor(Suit::Swords, Rank::Ten);
        assert_eq!(ten.index().raw(), 31);
        assert_eq!(ten.structured_id().to_string(), "swords-10");
        assert_eq!(ten.display_name(), "10 of Swords");
        assert_eq!(ten.localized_name(), "寶劍 10");
        assert_eq!(ten.keywords(), ["完成", "結束", "重擔"]);
        assert_eq!(ten.upright_meaning(), "10 號牌的正位意義（需補充）");
        assert_eq!(ten.asset_path(), "minor_arcana_swords_10.png");
        assert!(!ten.has_complete_meaning());
        assert_eq!(ten.authored_upright_meaning(), None);
    }

    #[test]
    fn test_court_card() {
        let queen = Card::minor(Suit::Cups, Rank::Queen);
        assert_eq!(queen.display_name(), "Queen of Cups");
        assert_eq!(queen.localized_name(), "聖杯王后");
        assert_eq!(queen.number(), None);
        assert_eq!(queen.keywords(), ["內在", "滋養", "直覺"]);
        assert_eq!(queen.reversed_meaning(), "王后的逆位意義（需補充）");
        assert!(!queen.has_complete_meaning());
        assert_eq!(queen.astrology(), None);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::minor(Suit::Pentacles, Rank::Knight);
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"structured_id\":\"pentacles-knight\""));

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);

        let fool = Card::major(0).unwrap();
        let back: Card = serde_json::from_value(serde_json::to_value(&fool).unwrap()).unwrap();
        assert_eq!(back, fool);
    }

    #[test]
    fn test_forged_card_rejected() {
        let ace = serde_json::to_value(Card::minor(Suit::Wands, Rank::Ace)).unwrap();

        let mut wrong_index = ace.clone();
        wrong_index["index"] = serde_json::json!(0);
        assert!(serde_json::from_value::<Card>(wrong_index).is_err());

        let mut wrong_text = ace.clone();
        wrong_text["keywords"] = serde_json::json!([]);
        wrong_text["upright_meaning"] = serde_json::json!("");
        assert!(serde_json::from_value::<Card>(wrong_text).is_err());

        let mut wrong_arcana = ace.clone();
        wrong_arcana["arcana"] = serde_json::json!("major");
        wrong_arcana["suit"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<Card>(wrong_arcana).is_err());

        let mut placeholder = serde_json::to_value(Card::minor(Suit::Cups, Rank::Five)).unwrap();
        placeholder["has_complete_meaning"] = serde_json::json!(true);
        assert!(serde_json::from_value::<Card>(placeholder).is_err());

        let mut unknown_slug = serde_json::to_value(Card::major(3).unwrap()).unwrap();
        unknown_slug["structured_id"] = serde_json::json!("03-queen");
        assert!(serde_json::from_value::<Card>(unknown_slug).is_err());
    }

    #[test]
    fn test_from_structured_id() {
        let id = StructuredId::parse("02-high-priestess").unwrap();
        assert_eq!(Card::from_structured_id(&id).unwrap(), Card::major(2).unwrap());

        let id = StructuredId::minor(Suit::Swords, Rank::Ten);
        assert_eq!(Card::try_from(id).unwrap(), Card::minor(Suit::Swords, Rank::Ten));

        let id = StructuredId::parse("02-fool").unwrap();
        assert!(matches!(Card::from_structured_id(&id), Err(TarotError::UnrecognizedId { .. })));
    }
}
