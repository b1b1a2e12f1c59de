//! Service layer: orchestration between domain logic and the stores.

pub mod rounds;
pub mod scores;
pub mod words;
