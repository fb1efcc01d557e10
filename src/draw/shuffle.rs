//! Fisher–Yates shuffle and draw-without-replacement.

use crate::core::{DrawRng, Result, TarotError};

/// Uniformly random permutation of `items` as a new vector.
///
/// The input is not modified. Sequences of length 0 or 1 come back
/// unchanged.
///
/// ```
/// use tarot_draw::core::DrawRng;
/// use tarot_draw::draw::shuffle;
///
/// let deck = [1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&deck, &mut DrawRng::new(42));
///
/// shuffled.sort();
/// assert_eq!(shuffled, deck);
/// ```
#[must_use]
pub fn shuffle<T: Clone>(items: &[T], rng: &mut DrawRng) -> Vec<T> {
    let mut shuffled = items.to_vec();
    rng.shuffle_in_place(&mut shuffled);
    shuffled
}

/// Draw `count` distinct elements of `items`.
///
/// Shuffles references to the whole sequence and keeps the first `count`.
/// The count is checked before any shuffling.
pub fn draw<'a, T>(items: &'a [T], count: usize, rng: &mut DrawRng) -> Result<Vec<&'a T>> {
    if count > items.len() {
        return Err(TarotError::InvalidDrawCount {
            requested: count,
            available: items.len(),
        });
    }

    let mut refs: Vec<&T> = items.iter().collect();
    rng.shuffle_in_place(&mut refs);
    refs.truncate(count);
    Ok(refs)
}
