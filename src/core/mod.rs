//! Core types: errors, configuration, and the shuffle RNG.

pub mod config;
pub mod error;
pub mod rng;

pub use config::TarotConfig;
pub use error::{Result, TarotError};
pub use rng::{DrawRng, DrawRngState};
