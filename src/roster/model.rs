//! Typed roster entities.

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// One roster row after decoding.
///
/// The relation-link id sets are internal: they gate the follow-up lookups
/// but are never part of the public view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    pub languages: Vec<String>,
    pub availability: String,
    pub portfolio: String,
    pub hyper_email: String,
    pub hard_skills_relation: Vec<String>,
    pub contact_relation: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub skill: String,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackStatus {
    pub checked: bool,
    #[serde(
        rename = "memberId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub member_id: Option<String>,
}

impl SlackStatus {
    /// `checked` with the id when one is recorded, unchecked otherwise.
    #[must_use]
    pub fn from_member_id(member_id: &str) -> Self {
        let member_id = member_id.trim();
        if member_id.is_empty() {
            Self::default()
        } else {
            Self {
                checked: true,
                member_id: Some(member_id.to_string()),
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub email: String,
    pub linkedin: String,
    pub slack: SlackStatus,
}

/// A person record with its related skills and contact merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedPerson {
    pub record: PersonRecord,
    pub hard_skills: Vec<SkillEntry>,
    pub contact: Option<ContactEntry>,
}

/// Public response shape for one person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonView {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    pub languages: Vec<String>,
    pub availability: String,
    pub portfolio: String,
    pub hyper_email: String,
    pub hard_skills: Vec<SkillEntry>,
    /// Serialized as `{}` when no contact row exists.
    #[serde(
        serialize_with = "contact_or_empty",
        deserialize_with = "contact_from_object",
        default
    )]
    pub contact: Option<ContactEntry>,
}

fn contact_or_empty<S: Serializer>(
    contact: &Option<ContactEntry>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match contact {
        Some(contact) => contact.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

fn contact_from_object<'de, D>(deserializer: D) -> std::result::Result<Option<ContactEntry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
