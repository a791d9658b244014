//! Per-criterion filter builders.
//!
//! Builders are pure and total: absent or blank input yields an empty list,
//! never an error. How the resulting conditions are joined is decided by
//! [`combine`].

use crate::store::schema::{roster, skills};

use super::filter::{FilterExpression, Operator, PropertyCondition, PropertyKind};
use super::CombineMode;

fn non_blank(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// One `equals` condition on the roster's program column per program.
#[must_use]
pub fn from_programs(programs: &[String]) -> Vec<PropertyCondition> {
    non_blank(programs)
        .map(|program| {
            PropertyCondition::new(roster::PROGRAM, PropertyKind::Select, Operator::Equals, program)
        })
        .collect()
}

/// One `contains` condition on the roster's multi-value languages column per
/// language.
#[must_use]
pub fn from_languages(languages: &[String]) -> Vec<PropertyCondition> {
    non_blank(languages)
        .map(|language| {
            PropertyCondition::new(
                roster::LANGUAGES,
                PropertyKind::MultiSelect,
                Operator::Contains,
                language,
            )
        })
        .collect()
}

/// Two `contains` conditions (first name, last name) per whitespace-separated
/// token of `name`.
#[must_use]
pub fn from_name(name: Option<&str>) -> Vec<PropertyCondition> {
    let Some(name) = name else {
        return Vec::new();
    };
    name.split_whitespace()
        .flat_map(|token| {
            [
                PropertyCondition::new(
                    roster::FIRST_NAME,
                    PropertyKind::RichText,
                    Operator::Contains,
                    token,
                ),
                PropertyCondition::new(
                    roster::LAST_NAME,
                    PropertyKind::RichText,
                    Operator::Contains,
                    token,
                ),
            ]
        })
        .collect()
}

/// One exact-match condition per skill against the skills table's select
/// column. This is the only representation of skills used for filtering: the
/// roster table is never filtered on skills directly, it is reached through
/// the ids of matching skill rows.
#[must_use]
pub fn from_hard_skills(hard_skills: &[String]) -> Vec<PropertyCondition> {
    non_blank(hard_skills)
        .map(|skill| {
            PropertyCondition::new(skills::SKILL, PropertyKind::Select, Operator::Equals, skill)
        })
        .collect()
}

/// One `equals` condition on a table's title identifier column per id.
/// The skills and contacts tables share the roster's `Student ID` title.
#[must_use]
pub fn from_student_ids(ids: &[i64]) -> Vec<PropertyCondition> {
    ids.iter()
        .map(|id| {
            PropertyCondition::new(
                roster::STUDENT_ID,
                PropertyKind::Title,
                Operator::Equals,
                id.to_string(),
            )
        })
        .collect()
}

/// Join per-dimension condition groups into one roster filter.
///
/// Returns `None` when no group contributes a condition, so callers cannot
/// accidentally send a match-everything filter.
#[must_use]
pub fn combine(groups: Vec<Vec<PropertyCondition>>, mode: CombineMode) -> Option<FilterExpression> {
    match mode {
        CombineMode::Any => FilterExpression::any_of(groups.into_iter().flatten().collect()),
        CombineMode::All => FilterExpression::all_of(
            groups
                .into_iter()
                .filter_map(FilterExpression::any_of)
                .collect(),
        ),
    }
}
