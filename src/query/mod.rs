//! Search request model and translation into remote filter expressions.

pub mod builder;
pub mod filter;

use serde::{Deserialize, Serialize};

use crate::utils::de::null_as_default;

pub use builder::{
    combine, from_hard_skills, from_languages, from_name, from_programs, from_student_ids,
};
pub use filter::{FilterExpression, Operator, PropertyCondition, PropertyKind};

/// Inbound search request. Every field is optional; an absent field, `null`,
/// or an empty list places no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub programs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hard_skills: Vec<String>,
}

impl SearchQuery {
    /// Parse a request body. Anything that is not a JSON object of the
    /// expected shape is an input error.
    pub fn from_json(body: &[u8]) -> crate::Result<Self> {
        serde_json::from_slice(body).map_err(|err| crate::HnError::InvalidQuery(err.to_string()))
    }

    /// True when at least one hard skill was requested.
    #[must_use]
    pub fn wants_hard_skills(&self) -> bool {
        self.hard_skills.iter().any(|skill| !skill.trim().is_empty())
    }
}

/// How conditions from different criteria are joined into the roster filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CombineMode {
    /// Any single condition may match (one flat OR).
    #[default]
    Any,
    /// Every requested dimension must match (AND of per-dimension ORs).
    All,
}

impl CombineMode {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "any" | "or" => Some(Self::Any),
            "all" | "and" => Some(Self::All),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }
}
