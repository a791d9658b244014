//! In-memory [`StoreGateway`] that evaluates filters against fixed rows.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::{HnError, Result};
use crate::query::{FilterExpression, Operator, PropertyCondition, PropertyKind};
use crate::store::{Row, StoreGateway, Table};

/// One recorded `execute` call.
#[derive(Debug, Clone)]
pub struct RecordedQuery {
    pub table: Table,
    pub filter: FilterExpression,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: HashMap<Table, Vec<Row>>,
    failing: Vec<Table>,
    log: Mutex<Vec<RecordedQuery>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_row(mut self, table: Table, row: Row) -> Self {
        self.tables.entry(table).or_default().push(row);
        self
    }

    #[must_use]
    pub fn with_person(self, row: Row) -> Self {
        self.with_row(Table::Roster, row)
    }

    #[must_use]
    pub fn with_skill(self, row: Row) -> Self {
        self.with_row(Table::Skills, row)
    }

    #[must_use]
    pub fn with_contact(self, row: Row) -> Self {
        self.with_row(Table::Contacts, row)
    }

    /// Every query against `table` fails with a remote error.
    #[must_use]
    pub fn failing_on(mut self, table: Table) -> Self {
        self.failing.push(table);
        self
    }

    #[must_use]
    pub fn calls(&self, table: Table) -> usize {
        self.log.lock().iter().filter(|q| q.table == table).count()
    }

    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.log.lock().len()
    }

    #[must_use]
    pub fn recorded(&self) -> Vec<RecordedQuery> {
        self.log.lock().clone()
    }
}

impl StoreGateway for InMemoryStore {
    fn execute(&self, table: Table, filter: &FilterExpression) -> Result<Vec<Row>> {
        self.log.lock().push(RecordedQuery {
            table,
            filter: filter.clone(),
        });

        if self.failing.contains(&table) {
            return Err(HnError::Remote {
                status: 503,
                code: "service_unavailable".to_string(),
                message: format!("{table} table unavailable"),
            });
        }

        Ok(self
            .tables
            .get(&table)
            .map(|rows| rows.iter().filter(|row| matches(row, filter)).cloned().collect())
            .unwrap_or_default())
    }
}

/// Evaluate `filter` against `row` the way the remote store would.
#[must_use]
pub fn matches(row: &Row, filter: &FilterExpression) -> bool {
    match filter {
        FilterExpression::Condition(condition) => matches_condition(row, condition),
        FilterExpression::Or { or } => or.iter().any(|child| matches(row, child)),
        FilterExpression::And { and } => and.iter().all(|child| matches(row, child)),
    }
}

fn matches_condition(row: &Row, condition: &PropertyCondition) -> bool {
    let value = condition.value.as_str();
    match condition.kind {
        PropertyKind::Title | PropertyKind::RichText => {
            let text = row.text(&condition.property);
            match condition.operator {
                Operator::Equals => text == value,
                Operator::Contains => text.to_lowercase().contains(&value.to_lowercase()),
            }
        }
        PropertyKind::Select => {
            let selected = row.select(&condition.property);
            match condition.operator {
                Operator::Equals => selected == value,
                Operator::Contains => selected.contains(value),
            }
        }
        PropertyKind::MultiSelect => row
            .multi_select(&condition.property)
            .iter()
            .any(|option| option == value),
    }
}
