//! Two-hop hard-skill resolution: skill names to skill rows to person ids.

use std::collections::HashSet;

use crate::error::Result;
use crate::query::{self, FilterExpression, PropertyCondition};
use crate::store::{StoreGateway, Table};

use super::normalize::owner_id;

/// Filter against the skills table for the requested skills, or `None` when
/// no non-blank skill was requested.
#[must_use]
pub fn skills_filter(hard_skills: &[String]) -> Option<FilterExpression> {
    FilterExpression::any_of(query::from_hard_skills(hard_skills))
}

/// Distinct ids of people owning at least one matching skill row, in the
/// order the rows were returned. Rows without a parseable owner id are
/// dropped.
pub fn resolve_person_ids(gateway: &dyn StoreGateway, hard_skills: &[String]) -> Result<Vec<i64>> {
    let filter = skills_filter(hard_skills);
    let rows = gateway.query(Table::Skills, filter.as_ref())?;

    let mut seen = HashSet::new();
    let ids: Vec<i64> = rows
        .iter()
        .filter_map(owner_id)
        .filter(|id| seen.insert(*id))
        .collect();

    tracing::debug!(
        skill_rows = rows.len(),
        people = ids.len(),
        "resolved hard skills"
    );
    Ok(ids)
}

/// Roster conditions selecting the resolved people.
pub fn resolve_conditions(
    gateway: &dyn StoreGateway,
    hard_skills: &[String],
) -> Result<Vec<PropertyCondition>> {
    let ids = resolve_person_ids(gateway, hard_skills)?;
    Ok(query::from_student_ids(&ids))
}
