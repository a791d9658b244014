//! Decoding of raw rows into roster entities. Missing or mistyped columns
//! decode to empty values; nothing here fails.

use crate::store::Row;
use crate::store::schema::{contacts, roster, skills};

use super::model::{ContactEntry, PersonRecord, SkillEntry, SlackStatus};

#[must_use]
pub fn person_record(row: &Row) -> PersonRecord {
    PersonRecord {
        id: row.numeric_id(roster::STUDENT_ID),
        first_name: row.text(roster::FIRST_NAME),
        last_name: row.text(roster::LAST_NAME),
        program: row.select(roster::PROGRAM),
        languages: row.multi_select(roster::LANGUAGES),
        availability: row.select(roster::AVAILABILITY),
        portfolio: row.url(roster::PORTFOLIO),
        hyper_email: row.email(roster::HYPER_EMAIL),
        hard_skills_relation: row.relation_ids(roster::HARD_SKILLS),
        contact_relation: row.relation_ids(roster::CONTACT),
    }
}

#[must_use]
pub fn skill_entry(row: &Row) -> SkillEntry {
    SkillEntry {
        skill: row.select(skills::SKILL),
        comment: row.text(skills::COMMENT),
    }
}

#[must_use]
pub fn contact_entry(row: &Row) -> ContactEntry {
    ContactEntry {
        email: row.email(contacts::EMAIL),
        linkedin: row.url(contacts::LINKEDIN),
        slack: SlackStatus::from_member_id(&row.text(contacts::SLACK_MEMBER_ID)),
    }
}

/// Owning person id of a skills or contacts row.
#[must_use]
pub fn owner_id(row: &Row) -> Option<i64> {
    row.numeric_id(skills::STUDENT_ID)
}
