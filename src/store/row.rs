//! Raw rows as returned by the remote store, and typed field extractors.
//!
//! Decoding never fails because of a single odd property: a value whose
//! shape does not match its declared type is kept as
//! [`PropertyValue::Unsupported`] and every extractor falls back to an empty
//! default.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::utils::de::null_as_default;

/// One page of a remote query response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Row>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: HashMap<String, PropertyValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RichTextSegment {
    #[serde(default)]
    pub plain_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RelationLink {
    #[serde(default)]
    pub id: String,
}

/// A typed property value, tagged by the `type` field of the remote payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default, deserialize_with = "null_as_default")]
        title: Vec<RichTextSegment>,
    },
    RichText {
        #[serde(default, deserialize_with = "null_as_default")]
        rich_text: Vec<RichTextSegment>,
    },
    Select {
        #[serde(default)]
        select: Option<SelectOption>,
    },
    MultiSelect {
        #[serde(default, deserialize_with = "null_as_default")]
        multi_select: Vec<SelectOption>,
    },
    Url {
        #[serde(default)]
        url: Option<String>,
    },
    Email {
        #[serde(default)]
        email: Option<String>,
    },
    Relation {
        #[serde(default, deserialize_with = "null_as_default")]
        relation: Vec<RelationLink>,
    },
    #[serde(other)]
    Unsupported,
}

fn lenient_properties<'de, D>(
    deserializer: D,
) -> std::result::Result<HashMap<String, PropertyValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<String, Value> = null_as_default(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| {
            let decoded = PropertyValue::deserialize(value).unwrap_or_else(|err| {
                tracing::trace!(property = %name, "undecodable property: {err}");
                PropertyValue::Unsupported
            });
            (name, decoded)
        })
        .collect())
}

fn concat(segments: &[RichTextSegment]) -> String {
    segments.iter().map(|s| s.plain_text.as_str()).collect()
}

impl Row {
    /// Decode a single row from JSON.
    pub fn from_value(value: Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Plain text of a title or rich-text column.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        match self.property(name) {
            Some(PropertyValue::Title { title: segments })
            | Some(PropertyValue::RichText {
                rich_text: segments,
            }) => concat(segments),
            _ => String::new(),
        }
    }

    /// Name of the selected option of a select column.
    #[must_use]
    pub fn select(&self, name: &str) -> String {
        match self.property(name) {
            Some(PropertyValue::Select {
                select: Some(option),
            }) => option.name.clone(),
            _ => String::new(),
        }
    }

    /// Names of the selected options of a multi-select column.
    #[must_use]
    pub fn multi_select(&self, name: &str) -> Vec<String> {
        match self.property(name) {
            Some(PropertyValue::MultiSelect { multi_select }) => {
                multi_select.iter().map(|o| o.name.clone()).collect()
            }
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn url(&self, name: &str) -> String {
        match self.property(name) {
            Some(PropertyValue::Url { url: Some(url) }) => url.clone(),
            _ => String::new(),
        }
    }

    #[must_use]
    pub fn email(&self, name: &str) -> String {
        match self.property(name) {
            Some(PropertyValue::Email { email: Some(email) }) => email.clone(),
            _ => String::new(),
        }
    }

    /// Ids of the rows a relation column links to.
    #[must_use]
    pub fn relation_ids(&self, name: &str) -> Vec<String> {
        match self.property(name) {
            Some(PropertyValue::Relation { relation }) => relation
                .iter()
                .filter(|link| !link.id.is_empty())
                .map(|link| link.id.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Numeric identifier parsed from a text column. `None` when the column
    /// is absent, blank, or not an integral number.
    #[must_use]
    pub fn numeric_id(&self, name: &str) -> Option<i64> {
        parse_identifier(&self.text(name))
    }
}

/// Parse a student identifier. Accepts integral values written as floats
/// (`"42.0"`) since the title column is free text.
#[must_use]
pub fn parse_identifier(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }
    let float = raw.parse::<f64>().ok()?;
    #[allow(clippy::cast_possible_truncation)]
    let id = float as i64;
    #[allow(clippy::cast_precision_loss)]
    let exact = float.is_finite() && float.fract() == 0.0 && id as f64 == float;
    exact.then_some(id)
}
