//! Session carrier: opaque per-session persistence of round state.

pub mod store;

pub use store::SessionStore;
