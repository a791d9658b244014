//! End-to-end search: criteria to filters, roster query, composition and
//! projection.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::error::Result;
use crate::query::{self, CombineMode, FilterExpression, PropertyCondition, SearchQuery};
use crate::store::{StoreGateway, Table};

use super::compose::compose_all;
use super::model::PersonView;
use super::normalize::person_record;
use super::resolver;
use super::view::project_all;

/// Filters a query translates to, without any remote call. The roster filter
/// omits the ids the skills filter would resolve to.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub combine: CombineMode,
    pub skills_filter: Option<FilterExpression>,
    pub roster_filter: Option<FilterExpression>,
}

#[derive(Clone)]
pub struct SearchPipeline {
    gateway: Arc<dyn StoreGateway>,
    combine: CombineMode,
}

impl std::fmt::Debug for SearchPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchPipeline")
            .field("combine", &self.combine)
            .finish_non_exhaustive()
    }
}

fn direct_groups(query: &SearchQuery) -> Vec<Vec<PropertyCondition>> {
    vec![
        query::from_name(query.name.as_deref()),
        query::from_programs(&query.programs),
        query::from_languages(&query.languages),
    ]
}

impl SearchPipeline {
    pub fn new(gateway: Arc<dyn StoreGateway>, combine: CombineMode) -> Self {
        Self { gateway, combine }
    }

    #[must_use]
    pub const fn combine(&self) -> CombineMode {
        self.combine
    }

    /// Run `query` and return one view per matching person.
    ///
    /// Returns no people, and never queries the roster, when the query
    /// constrains nothing or when requested hard skills match nobody.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<PersonView>> {
        let started = Instant::now();
        let gateway = self.gateway.as_ref();
        let mut groups = direct_groups(query);

        if query.wants_hard_skills() {
            let skill_conditions = resolver::resolve_conditions(gateway, &query.hard_skills)?;
            if skill_conditions.is_empty() {
                tracing::info!("no one has the requested hard skills");
                return Ok(Vec::new());
            }
            groups.push(skill_conditions);
        }

        let Some(filter) = query::combine(groups, self.combine) else {
            tracing::debug!("query has no criteria");
            return Ok(Vec::new());
        };

        let rows = gateway.query(Table::Roster, Some(&filter))?;
        tracing::debug!(rows = rows.len(), "roster rows matched");

        let records = rows.iter().map(person_record).collect();
        let people = project_all(compose_all(gateway, records)?);

        tracing::info!(
            people = people.len(),
            combine = self.combine.as_str(),
            elapsed_ms = started.elapsed().as_millis(),
            "search complete"
        );
        Ok(people)
    }

    #[must_use]
    pub fn explain(&self, query: &SearchQuery) -> Explanation {
        Explanation {
            combine: self.combine,
            skills_filter: resolver::skills_filter(&query.hard_skills),
            roster_filter: query::combine(direct_groups(query), self.combine),
        }
    }
}
