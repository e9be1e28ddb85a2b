//! Numwords Domain Layer
//!
//! This crate contains the vocabulary and value objects for turning integers
//! into English words. It has ZERO runtime dependencies and holds no logic
//! beyond reading tables and splitting digit strings, so every other layer
//! can depend on it freely.
//!
//! ## Key Concepts
//!
//! - **Lexicon**: Static words for 0-19, the tens and the magnitude names
//! - **Numeral**: A parsed, optionally negative integer of any length
//! - **Chunk**: One base-1000 digit group paired with its magnitude index
//! - **Outcome**: A word phrase, or one of two classified failures
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Immutable, `'static` lookup tables
//! - Conversion grammar lives in `numwords-converter`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod lexicon;
pub mod numeral;
pub mod outcome;

// Re-exports for convenience
pub use chunk::Chunk;
pub use lexicon::Lexicon;
pub use numeral::{IntoNumeral, Numeral};
pub use outcome::{render, ConversionError, Outcome, INVALID_MESSAGE, TOO_LARGE_MESSAGE};
