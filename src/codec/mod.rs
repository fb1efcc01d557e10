//! Card ID codec.
//!
//! Two independent layers:
//!
//! - numeric index (0..=77) ↔ structured ID (`"00-fool"`, `"swords-10"`)
//! - structured ID → image filename (`"major_arcana_fool.png"`)
//!
//! The structured ID is the stable identity; the filename follows an
//! external asset convention and can change without renumbering cards.

pub mod asset;
pub mod structured_id;

pub use asset::AssetResolver;
pub use structured_id::{minor_index, StructuredId, INDEX_SUIT_ORDER, MAJOR_COUNT, SUIT_SIZE};

use crate::cards::CardIndex;
use crate::core::Result;

/// Structured ID for a numeric index.
///
/// Fails with `InvalidIndex` outside `0..=77`.
///
/// ```
/// use tarot_draw::codec::index_to_structured_id;
///
/// assert_eq!(index_to_structured_id(0).unwrap().to_string(), "00-fool");
/// assert_eq!(index_to_structured_id(22).unwrap().to_string(), "swords-ace");
/// assert!(index_to_structured_id(78).is_err());
/// ```
pub fn index_to_structured_id(index: i64) -> Result<StructuredId> {
    Ok(StructuredId::from_index(CardIndex::new(index)?))
}

/// Numeric index for a structured ID.
pub fn structured_id_to_index(id: &str) -> Result<CardIndex> {
    StructuredId::parse(id)?.index()
}

/// Image filename for a structured ID.
///
/// Fails with `UnrecognizedId` when the ID matches neither shape. Callers
/// that render should prefer [`AssetResolver::resolve`], which masks the
/// failure with a placeholder.
pub fn structured_id_to_asset_filename(id: &str) -> Result<String> {
    Ok(StructuredId::parse(id)?.asset_filename())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TarotError;

    #[test]
    fn test_index_bounds() {
        assert!(matches!(index_to_structured_id(78), Err(TarotError::InvalidIndex { index: 78 })));
        assert!(matches!(index_to_structured_id(-1), Err(TarotError::InvalidIndex { index: -1 })));
        assert!(index_to_structured_id(77).is_ok());
    }

    #[test]
    fn test_every_index_has_a_filename() {
        for i in 0..78 {
            let id = index_to_structured_id(i).unwrap();
            let file = structured_id_to_asset_filename(&id.to_string()).unwrap();
            assert!(file.ends_with(".png"), "{file}");
            assert!(file.len() > ".png".len());
        }
    }

    #[test]
    fn test_structured_id_to_index() {
        assert_eq!(structured_id_to_index("00-fool").unwrap().raw(), 0);
        assert_eq!(structured_id_to_index("cups-02").unwrap().raw(), 37);
        assert!(structured_id_to_index("cups-two").is_err());
    }

    #[test]
    fn test_unrecognized_filename() {
        let err = structured_id_to_asset_filename("the-fool").unwrap_err();
        assert!(matches!(err, TarotError::UnrecognizedId { ref id } if id == "the-fool"));
    }
}
