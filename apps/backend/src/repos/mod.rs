//! Repository layer: domain models over the SeaORM adapters.

pub mod daily_words;
pub mod scores;
