//! METAR decoder for raw aviation weather report text
//!
//! This module provides a best-effort decoder for the terse METAR token
//! language. Each field decoder scans the whole token sequence on its own,
//! because the underlying report format does not guarantee strict field
//! ordering beyond the leading station and time groups. A decoder that
//! finds no structurally matching token yields an absent field, never an
//! error; a whole report is never rejected for being malformed.
//!
//! ## Architecture
//!
//! The decoder is organized into logical components:
//! - [`decoder`] - Decode orchestration over one raw report
//! - [`tokenizer`] - Report tokenization and token utilities
//! - [`wind`] - Wind group decoding (direction, speed, gust)
//! - [`visibility`] - Visibility decoding, including compound fractions
//! - [`ceiling`] - Lowest ceiling-defining layer selection
//! - [`weather`] - Significant-weather phenomenon matching
//!
//! ## Usage
//!
//! ```rust
//! use metar_analyzer::app::services::metar_decoder;
//!
//! let decoded = metar_decoder::decode("KJFK 011651Z 18012G18KT 10SM BKN025");
//! assert_eq!(decoded.station, "KJFK");
//! assert_eq!(decoded.visibility_sm, Some(10.0));
//! ```

pub mod ceiling;
pub mod decoder;
pub mod tokenizer;
pub mod visibility;
pub mod weather;
pub mod wind;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use decoder::decode;
pub use tokenizer::tokenize;
