//! Card image resolution.
//!
//! `AssetResolver` turns card identifiers into displayable image paths.
//! It never fails: an identifier that cannot be resolved is logged and
//! replaced by the configured placeholder, so rendering always has an image.

use tracing::{debug, warn};

use super::structured_id::StructuredId;
use super::index_to_structured_id;
use crate::cards::Card;
use crate::core::{Result, TarotConfig};

/// Resolves card IDs to image paths under a base path.
///
/// ## Example
///
/// ```
/// use tarot_draw::codec::AssetResolver;
///
/// let resolver = AssetResolver::new("/images/tarot/", "/images/card-back.png");
///
/// assert_eq!(resolver.resolve("00-fool"), "/images/tarot/major_arcana_fool.png");
/// assert_eq!(resolver.resolve("not-a-card"), "/images/card-back.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetResolver {
    base: String,
    fallback: String,
}

impl AssetResolver {
    /// Create a resolver for a base path and a placeholder image.
    pub fn new(base: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            fallback: fallback.into(),
        }
    }

    /// Create a resolver from the crate config.
    #[must_use]
    pub fn from_config(config: &TarotConfig) -> Self {
        Self::new(config.asset_base.clone(), config.fallback_asset.clone())
    }

    /// The base path.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The placeholder image path.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Join a filename onto the base path.
    #[must_use]
    pub fn path_for_filename(&self, filename: &str) -> String {
        join_path(&self.base, filename)
    }

    /// Resolve a structured ID, reporting failure to the caller.
    pub fn try_resolve(&self, id: &str) -> Result<String> {
        let filename = StructuredId::parse(id)?.asset_filename();
        Ok(self.path_for_filename(&filename))
    }

    /// Resolve a structured ID, falling back to the placeholder.
    #[must_use]
    pub fn resolve(&self, id: &str) -> String {
        match self.try_resolve(id) {
            Ok(path) => {
                debug!(card_id = id, path = %path, "resolved card image");
                path
            }
            Err(err) => {
                warn!(
                    card_id = id,
                    error = %err,
                    fallback = %self.fallback,
                    "card image unresolved, using placeholder"
                );
                self.fallback.clone()
            }
        }
    }

    /// Resolve a numeric card index, falling back to the placeholder.
    #[must_use]
    pub fn resolve_index(&self, index: i64) -> String {
        match index_to_structured_id(index) {
            Ok(id) => self.path_for_filename(&id.asset_filename()),
            Err(err) => {
                warn!(
                    card_index = index,
                    error = %err,
                    fallback = %self.fallback,
                    "card image unresolved, using placeholder"
                );
                self.fallback.clone()
            }
        }
    }

    /// Full image path of a catalog card.
    #[must_use]
    pub fn card_path(&self, card: &Card) -> String {
        self.path_for_filename(card.asset_path())
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::from_config(&TarotConfig::default())
    }
}

/// Join `base` and `filename` with a single `/`, collapsing repeated
/// slashes. A `scheme://` prefix on the base is left intact.
fn join_path(base: &str, filename: &str) -> String {
    let (scheme, rest) = match base.find("://") {
        Some(pos) => base.split_at(pos + 3),
        None => ("", base),
    };

    let mut joined = String::with_capacity(base.len() + filename.len() + 1);
    joined.push_str(scheme);

    let mut after_slash = false;
    for ch in rest.chars().chain(std::iter::once('/')).chain(filename.chars()) {
        if ch == '/' {
            if after_slash {
                continue;
            }
            after_slash = true;
        } else {
            after_slash = false;
        }
        joined.push(ch);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/images/tarot", "a.png"), "/images/tarot/a.png");
        assert_eq!(join_path("/images/tarot/", "a.png"), "/images/tarot/a.png");
        assert_eq!(join_path("/base//images///tarot", "/a.png"), "/base/images/tarot/a.png");
        assert_eq!(join_path("", "a.png"), "/a.png");
        assert_eq!(
            join_path("https://archive.org/download/rider-waite-tarot/", "a.png"),
            "https://archive.org/download/rider-waite-tarot/a.png"
        );
    }

    #[test]
    fn test_try_resolve() {
        let resolver = AssetResolver::new("/images/tarot", "/back.png");

        assert_eq!(
            resolver.try_resolve("wands-07").unwrap(),
            "/images/tarot/minor_arcana_wands_7.png"
        );
        assert!(resolver.try_resolve("wands-77").is_err());
    }

    #[test]
    fn test_resolve_falls_back() {
        let resolver = AssetResolver::new("/images/tarot", "/back.png");

        assert_eq!(
            resolver.resolve("02-high-priestess"),
            "/images/tarot/major_arcana_priestess.png"
        );
        assert_eq!(resolver.resolve(""), "/back.png");
        assert_eq!(resolver.resolve("joker"), "/back.png");
    }

    #[test]
    fn test_resolve_index() {
        let resolver = AssetResolver::default();

        assert_eq!(resolver.resolve_index(0), "/images/tarot/major_arcana_fool.png");
        assert_eq!(resolver.resolve_index(31), "/images/tarot/minor_arcana_swords_10.png");
        assert_eq!(resolver.resolve_index(78), "/images/card-back.png");
        assert_eq!(resolver.resolve_index(-1), "/images/card-back.png");
    }

    #[test]
    fn test_from_config() {
        let config = TarotConfig::default()
            .with_asset_base("/tarot-game-OPT/images/tarot")
            .with_fallback_asset("/tarot-game-OPT/images/card-back.png");
        let resolver = AssetResolver::from_config(&config);

        assert_eq!(resolver.base(), "/tarot-game-OPT/images/tarot");
        assert_eq!(resolver.fallback(), "/tarot-game-OPT/images/card-back.png");
    }
}
