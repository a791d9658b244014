//! Shared test utilities for hn: an in-memory store, row builders and a
//! step logger for longer scenarios.

pub mod fake_store;
pub mod logging;
pub mod rows;

pub use fake_store::InMemoryStore;
pub use logging::TestLogger;
