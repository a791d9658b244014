//! Access to the remote roster store.
//!
//! The pipeline depends only on [`StoreGateway`]; [`notion::NotionGateway`]
//! is the production implementation and `test_utils::InMemoryStore` the fake.

pub mod notion;
pub mod row;
pub mod schema;

use std::fmt;

use crate::error::Result;
use crate::query::FilterExpression;

pub use notion::NotionGateway;
pub use row::{QueryPage, Row};

/// The three logical tables of the roster store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Roster,
    Skills,
    Contacts,
}

impl Table {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Roster => "roster",
            Self::Skills => "skills",
            Self::Contacts => "contacts",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Executes filter expressions against a table.
///
/// Implementors provide [`StoreGateway::execute`], which is only ever called
/// with a non-empty filter. Callers go through [`StoreGateway::query`].
pub trait StoreGateway: Send + Sync {
    /// Issue exactly one remote call for `filter` and return the matching rows.
    fn execute(&self, table: Table, filter: &FilterExpression) -> Result<Vec<Row>>;

    /// Rows of `table` matching `filter`. An absent or empty filter returns no
    /// rows without contacting the store.
    fn query(&self, table: Table, filter: Option<&FilterExpression>) -> Result<Vec<Row>> {
        match filter {
            Some(filter) if !filter.is_empty() => self.execute(table, filter),
            _ => {
                tracing::debug!(%table, "empty filter, skipping remote query");
                Ok(Vec::new())
            }
        }
    }
}
