pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod query;
pub mod roster;
pub mod server;
pub mod store;
pub mod test_utils;
pub mod utils;

pub use error::{HnError, Result};
