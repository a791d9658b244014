//! Boolean filter expressions in the remote store's grammar.
//!
//! A leaf is a [`PropertyCondition`] and serializes as
//! `{"property": "Program", "select": {"equals": "Design"}}`. Compound nodes
//! serialize as `{"or": [...]}` / `{"and": [...]}`.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Column type the condition is evaluated against. Each kind has its own
/// key in the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Title,
    RichText,
    Select,
    MultiSelect,
}

impl PropertyKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::RichText => "rich_text",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    Contains,
}

impl Operator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::Contains => "contains",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyCondition {
    pub property: String,
    pub kind: PropertyKind,
    pub operator: Operator,
    pub value: String,
}

impl PropertyCondition {
    pub fn new(
        property: impl Into<String>,
        kind: PropertyKind,
        operator: Operator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            property: property.into(),
            kind,
            operator,
            value: value.into(),
        }
    }
}

impl Serialize for PropertyCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("property", &self.property)?;
        map.serialize_entry(
            self.kind.as_str(),
            &Clause {
                operator: self.operator,
                value: &self.value,
            },
        )?;
        map.end()
    }
}

struct Clause<'a> {
    operator: Operator,
    value: &'a str,
}

impl Serialize for Clause<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.operator.as_str(), self.value)?;
        map.end()
    }
}

/// Recursive boolean expression over property conditions.
///
/// An `Or`/`And` node with no (non-empty) children places no constraint at
/// all; such an expression must never reach the remote store. Use
/// [`FilterExpression::is_empty`] before sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterExpression {
    Condition(PropertyCondition),
    Or { or: Vec<FilterExpression> },
    And { and: Vec<FilterExpression> },
}

impl FilterExpression {
    /// OR of the given conditions, or `None` when there are none.
    #[must_use]
    pub fn any_of(conditions: Vec<PropertyCondition>) -> Option<Self> {
        if conditions.is_empty() {
            return None;
        }
        Some(Self::Or {
            or: conditions.into_iter().map(Self::Condition).collect(),
        })
    }

    /// AND of the given expressions, dropping empty ones. `None` when nothing
    /// is left.
    #[must_use]
    pub fn all_of(children: Vec<Self>) -> Option<Self> {
        let children: Vec<Self> = children.into_iter().filter(|c| !c.is_empty()).collect();
        if children.is_empty() {
            return None;
        }
        Some(Self::And { and: children })
    }

    /// True when the expression constrains nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Condition(_) => false,
            Self::Or { or: children } | Self::And { and: children } => {
                children.iter().all(Self::is_empty)
            }
        }
    }

    /// All leaf conditions in depth-first order.
    #[must_use]
    pub fn conditions(&self) -> Vec<&PropertyCondition> {
        let mut out = Vec::new();
        self.collect_conditions(&mut out);
        out
    }

    fn collect_conditions<'a>(&'a self, out: &mut Vec<&'a PropertyCondition>) {
        match self {
            Self::Condition(condition) => out.push(condition),
            Self::Or { or: children } | Self::And { and: children } => {
                for child in children {
                    child.collect_conditions(out);
                }
            }
        }
    }
}

impl From<PropertyCondition> for FilterExpression {
    fn from(condition: PropertyCondition) -> Self {
        Self::Condition(condition)
    }
}
