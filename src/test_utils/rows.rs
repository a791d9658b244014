//! Builders for remote-shaped rows.
//!
//! Each builder renders the JSON the remote store would return (`json()`),
//! or the decoded [`Row`] (`row()`).

use serde_json::{Map, Value, json};

use crate::store::Row;
use crate::store::schema::{contacts, roster, skills};

fn title(text: &str) -> Value {
    json!({"type": "title", "title": [{"type": "text", "plain_text": text}]})
}

fn rich_text(text: &str) -> Value {
    json!({"type": "rich_text", "rich_text": [{"type": "text", "plain_text": text}]})
}

fn select(name: &str) -> Value {
    json!({"type": "select", "select": {"name": name}})
}

fn multi_select(names: &[&str]) -> Value {
    let options: Vec<Value> = names.iter().map(|name| json!({"name": name})).collect();
    json!({"type": "multi_select", "multi_select": options})
}

fn url(value: &str) -> Value {
    json!({"type": "url", "url": value})
}

fn email(value: &str) -> Value {
    json!({"type": "email", "email": value})
}

fn relation(ids: &[&str]) -> Value {
    let links: Vec<Value> = ids.iter().map(|id| json!({"id": id})).collect();
    json!({"type": "relation", "relation": links, "has_more": false})
}

#[derive(Debug, Clone)]
struct RowBuilder {
    id: String,
    properties: Map<String, Value>,
}

impl RowBuilder {
    fn new(prefix: &str, owner: &str) -> Self {
        Self {
            id: format!("{prefix}-{owner}"),
            properties: Map::new(),
        }
    }

    fn set(&mut self, name: &str, value: Value) {
        self.properties.insert(name.to_string(), value);
    }

    fn json(&self) -> Value {
        json!({"object": "page", "id": self.id, "properties": self.properties})
    }

    fn row(&self) -> Row {
        Row::from_value(self.json()).unwrap_or_default()
    }
}

/// A roster row.
#[derive(Debug, Clone)]
pub struct PersonRow(RowBuilder);

impl PersonRow {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self::with_raw_id(&id.to_string())
    }

    /// Row whose `Student ID` title holds arbitrary text.
    #[must_use]
    pub fn with_raw_id(raw: &str) -> Self {
        let mut builder = RowBuilder::new("person", raw);
        builder.set(roster::STUDENT_ID, title(raw));
        Self(builder)
    }

    #[must_use]
    pub fn first_name(mut self, value: &str) -> Self {
        self.0.set(roster::FIRST_NAME, rich_text(value));
        self
    }

    #[must_use]
    pub fn last_name(mut self, value: &str) -> Self {
        self.0.set(roster::LAST_NAME, rich_text(value));
        self
    }

    #[must_use]
    pub fn program(mut self, value: &str) -> Self {
        self.0.set(roster::PROGRAM, select(value));
        self
    }

    #[must_use]
    pub fn languages(mut self, values: &[&str]) -> Self {
        self.0.set(roster::LANGUAGES, multi_select(values));
        self
    }

    #[must_use]
    pub fn availability(mut self, value: &str) -> Self {
        self.0.set(roster::AVAILABILITY, select(value));
        self
    }

    #[must_use]
    pub fn portfolio(mut self, value: &str) -> Self {
        self.0.set(roster::PORTFOLIO, url(value));
        self
    }

    #[must_use]
    pub fn hyper_email(mut self, value: &str) -> Self {
        self.0.set(roster::HYPER_EMAIL, email(value));
        self
    }

    #[must_use]
    pub fn skill_links(mut self, ids: &[&str]) -> Self {
        self.0.set(roster::HARD_SKILLS, relation(ids));
        self
    }

    #[must_use]
    pub fn contact_link(mut self, id: &str) -> Self {
        self.0.set(roster::CONTACT, relation(&[id]));
        self
    }

    #[must_use]
    pub fn json(&self) -> Value {
        self.0.json()
    }

    #[must_use]
    pub fn row(&self) -> Row {
        self.0.row()
    }
}

/// A skills-table row.
#[derive(Debug, Clone)]
pub struct SkillRow(RowBuilder);

impl SkillRow {
    #[must_use]
    pub fn new(owner: i64, skill: &str) -> Self {
        Self::with_raw_owner(&owner.to_string(), skill)
    }

    #[must_use]
    pub fn with_raw_owner(owner: &str, skill: &str) -> Self {
        let mut builder = RowBuilder::new("skill", &format!("{owner}-{skill}"));
        builder.set(skills::STUDENT_ID, title(owner));
        builder.set(skills::SKILL, select(skill));
        Self(builder)
    }

    #[must_use]
    pub fn comment(mut self, value: &str) -> Self {
        self.0.set(skills::COMMENT, rich_text(value));
        self
    }

    #[must_use]
    pub fn json(&self) -> Value {
        self.0.json()
    }

    #[must_use]
    pub fn row(&self) -> Row {
        self.0.row()
    }
}

/// A contacts-table row.
#[derive(Debug, Clone)]
pub struct ContactRow(RowBuilder);

impl ContactRow {
    #[must_use]
    pub fn new(owner: i64) -> Self {
        let mut builder = RowBuilder::new("contact", &owner.to_string());
        builder.set(contacts::STUDENT_ID, title(&owner.to_string()));
        Self(builder)
    }

    #[must_use]
    pub fn email(mut self, value: &str) -> Self {
        self.0.set(contacts::EMAIL, email(value));
        self
    }

    #[must_use]
    pub fn linkedin(mut self, value: &str) -> Self {
        self.0.set(contacts::LINKEDIN, url(value));
        self
    }

    #[must_use]
    pub fn slack(mut self, member_id: &str) -> Self {
        self.0.set(contacts::SLACK_MEMBER_ID, rich_text(member_id));
        self
    }

    #[must_use]
    pub fn json(&self) -> Value {
        self.0.json()
    }

    #[must_use]
    pub fn row(&self) -> Row {
        self.0.row()
    }
}

/// A query response page holding `rows`.
#[must_use]
pub fn page(rows: &[Value]) -> Value {
    json!({"object": "list", "results": rows, "has_more": false, "next_cursor": null})
}
