//! SeaORM adapters: the only code that touches entity ActiveModels.

pub mod daily_words_sea;
pub mod scores_sea;
