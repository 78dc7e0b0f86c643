//! Cards, the deck, and board sampling.
//!
//! - [`Card`]: a 4-feature tuple over {0, 1, 2}
//! - [`DECK`]: the fixed 81-card universe
//! - [`Board`]: an ordered duplicate-free sample with a cached flight set

mod board;
mod card;

pub use board::{Board, BoardError};
pub use card::{Card, DECK, DECK_SIZE, FEATURE_COUNT, FEATURE_VALUES};
