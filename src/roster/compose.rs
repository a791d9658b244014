//! Merging related skills and contact rows onto person records.
//!
//! Every lookup of a batch gets its own worker thread, so a batch takes as
//! long as its slowest lookup. The first failing lookup fails the whole batch.

use rayon::prelude::*;

use crate::error::{HnError, Result};
use crate::query::{self, FilterExpression};
use crate::store::{Row, StoreGateway, Table};

use super::model::{ComposedPerson, ContactEntry, PersonRecord, SkillEntry};
use super::normalize::{contact_entry, skill_entry};

/// Two lookups for each person of a full roster page.
const MAX_LOOKUP_THREADS: usize = 200;

fn rows_for_person(gateway: &dyn StoreGateway, table: Table, id: i64) -> Result<Vec<Row>> {
    let filter = FilterExpression::any_of(query::from_student_ids(&[id]));
    gateway.query(table, filter.as_ref())
}

/// Skill entries owned by `id`.
pub fn lookup_skills(gateway: &dyn StoreGateway, id: i64) -> Result<Vec<SkillEntry>> {
    Ok(rows_for_person(gateway, Table::Skills, id)?
        .iter()
        .map(skill_entry)
        .collect())
}

/// Contact of `id`. The first matching row wins.
pub fn lookup_contact(gateway: &dyn StoreGateway, id: i64) -> Result<Option<ContactEntry>> {
    let rows = rows_for_person(gateway, Table::Contacts, id)?;
    if rows.len() > 1 {
        tracing::warn!(id, rows = rows.len(), "several contact rows for one person; using the first");
    }
    Ok(rows.first().map(contact_entry))
}

/// Compose one person. Lookups are skipped for a person without an id, and
/// for each relation the person has no links in.
pub fn compose_person(gateway: &dyn StoreGateway, record: PersonRecord) -> Result<ComposedPerson> {
    let Some(id) = record.id else {
        return Ok(ComposedPerson {
            record,
            ..ComposedPerson::default()
        });
    };

    let wants_skills = !record.hard_skills_relation.is_empty();
    let wants_contact = !record.contact_relation.is_empty();

    let (hard_skills, contact) = rayon::join(
        || {
            if wants_skills {
                lookup_skills(gateway, id)
            } else {
                Ok(Vec::new())
            }
        },
        || {
            if wants_contact {
                lookup_contact(gateway, id)
            } else {
                Ok(None)
            }
        },
    );

    Ok(ComposedPerson {
        record,
        hard_skills: hard_skills?,
        contact: contact?,
    })
}

/// Remote lookups `compose_person` will issue for `record`.
fn lookup_count(record: &PersonRecord) -> usize {
    if record.id.is_none() {
        return 0;
    }
    usize::from(!record.hard_skills_relation.is_empty()) + usize::from(!record.contact_relation.is_empty())
}

/// Compose every person, preserving input order.
///
/// Lookups block on the network, so they run on a pool sized to the batch
/// rather than the global pool, which only has one thread per core.
pub fn compose_all(
    gateway: &dyn StoreGateway,
    records: Vec<PersonRecord>,
) -> Result<Vec<ComposedPerson>> {
    let lookups: usize = records.iter().map(lookup_count).sum();
    if lookups == 0 {
        return records
            .into_iter()
            .map(|record| compose_person(gateway, record))
            .collect();
    }

    let threads = lookups.min(MAX_LOOKUP_THREADS);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("hn-lookup-{index}"))
        .build()
        .map_err(|err| HnError::Server(format!("lookup pool: {err}")))?;
    tracing::debug!(people = records.len(), lookups, threads, "composing people");

    pool.install(|| {
        records
            .into_par_iter()
            .with_max_len(1)
            .map(|record| compose_person(gateway, record))
            .collect()
    })
}
