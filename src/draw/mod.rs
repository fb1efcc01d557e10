//! Shuffle/draw engine.
//!
//! Both operations are pure apart from advancing the supplied [`DrawRng`].
//! Drawing shuffles the whole sequence and takes a prefix; at 78 cards a
//! partial shuffle buys nothing.
//!
//! [`DrawRng`]: crate::core::DrawRng

mod shuffle;

pub use shuffle::{draw, shuffle};
