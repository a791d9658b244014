use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HnError, Result};
use crate::query::CombineMode;

pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";
const REDACTED: &str = "<redacted>";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notion: NotionConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Defaults, then the global and project files (or only `explicit_path`),
    /// then environment overrides.
    pub fn load(explicit_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env_string("HN_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            let Some(patch) = Self::load_patch(&path)? else {
                return Err(HnError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            };
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(cwd)? {
                config.merge_patch(project);
            }
        }

        config.apply_overrides(env_string)?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            tracing::debug!("no platform config directory; skipping global config");
            return Ok(None);
        };
        Self::load_patch(&dir.join("hn/config.toml"))
    }

    fn load_project(cwd: &Path) -> Result<Option<ConfigPatch>> {
        match find_project_config(cwd) {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| HnError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = Self::parse_patch(&raw)
            .map_err(|err| HnError::Config(format!("parse config {}: {err}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config layer");
        Ok(Some(patch))
    }

    fn parse_patch(raw: &str) -> std::result::Result<ConfigPatch, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Merge a TOML document over the current values.
    pub fn merge_toml(&mut self, raw: &str) -> Result<()> {
        let patch = Self::parse_patch(raw).map_err(|err| HnError::Config(err.to_string()))?;
        self.merge_patch(patch);
        Ok(())
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.notion {
            self.notion.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.server {
            self.server.merge(patch);
        }
    }

    /// Apply `HN_*` overrides (and the legacy worker names as fallbacks)
    /// read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |keys: &[&str]| keys.iter().find_map(|key| lookup(key));

        if let Some(value) = first(&["HN_NOTION_KEY", "NOTION_KEY"]) {
            self.notion.api_key = value;
        }
        if let Some(value) = lookup("HN_NOTION_BASE_URL") {
            self.notion.base_url = value;
        }
        if let Some(value) = lookup("HN_NOTION_VERSION") {
            self.notion.notion_version = value;
        }
        if let Some(value) = parse_number::<u64>("HN_NOTION_TIMEOUT_SECS", lookup("HN_NOTION_TIMEOUT_SECS"))? {
            self.notion.timeout_secs = value;
        }
        if let Some(value) = parse_number::<u32>("HN_NOTION_PAGE_SIZE", lookup("HN_NOTION_PAGE_SIZE"))? {
            self.notion.page_size = value;
        }
        if let Some(value) = first(&["HN_ROSTER_DATABASE_ID", "HYPER_NETWORK_DATABASE_ID"]) {
            self.notion.roster_database_id = value;
        }
        if let Some(value) = first(&[
            "HN_SKILLS_DATABASE_ID",
            "HYPER_NETWORK_HARD_SKILLS_DATABASE_ID",
        ]) {
            self.notion.skills_database_id = value;
        }
        if let Some(value) = first(&[
            "HN_CONTACTS_DATABASE_ID",
            "HYPER_NETWORK_CONTACTS_DATABASE_ID",
        ]) {
            self.notion.contacts_database_id = value;
        }
        if let Some(value) = lookup("HN_SEARCH_COMBINE") {
            self.search.combine = CombineMode::parse(&value).ok_or_else(|| {
                HnError::Config(format!(
                    "invalid HN_SEARCH_COMBINE value {value} (expected any|all)"
                ))
            })?;
        }
        if let Some(value) = lookup("HN_SERVER_BIND") {
            self.server.bind = value;
        }

        self.notion.page_size = self.notion.page_size.clamp(1, 100);
        Ok(())
    }

    /// Copy safe to print: the API key is masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.notion.api_key.is_empty() {
            copy.notion.api_key = REDACTED.to_string();
        }
        copy
    }
}

/// Nearest `.hn/config.toml` walking up from `start`.
#[must_use]
pub fn find_project_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".hn").join("config.toml"))
        .find(|candidate| candidate.is_file())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub notion_version: String,
    #[serde(default)]
    pub timeout_secs: u64,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub roster_database_id: String,
    #[serde(default)]
    pub skills_database_id: String,
    #[serde(default)]
    pub contacts_database_id: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_NOTION_BASE_URL.to_string(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            timeout_secs: 30,
            page_size: 100,
            roster_database_id: String::new(),
            skills_database_id: String::new(),
            contacts_database_id: String::new(),
        }
    }
}

impl NotionConfig {
    fn merge(&mut self, patch: NotionPatch) {
        if let Some(value) = patch.api_key {
            self.api_key = value;
        }
        if let Some(value) = patch.base_url {
            self.base_url = value;
        }
        if let Some(value) = patch.notion_version {
            self.notion_version = value;
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
        if let Some(value) = patch.page_size {
            self.page_size = value.clamp(1, 100);
        }
        if let Some(value) = patch.roster_database_id {
            self.roster_database_id = value;
        }
        if let Some(value) = patch.skills_database_id {
            self.skills_database_id = value;
        }
        if let Some(value) = patch.contacts_database_id {
            self.contacts_database_id = value;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub combine: CombineMode,
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.combine {
            self.combine = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl ServerConfig {
    fn merge(&mut self, patch: ServerPatch) {
        if let Some(value) = patch.bind {
            self.bind = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub notion: Option<NotionPatch>,
    pub search: Option<SearchPatch>,
    pub server: Option<ServerPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct NotionPatch {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub notion_version: Option<String>,
    pub timeout_secs: Option<u64>,
    pub page_size: Option<u32>,
    pub roster_database_id: Option<String>,
    pub skills_database_id: Option<String>,
    pub contacts_database_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub combine: Option<CombineMode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ServerPatch {
    pub bind: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_number<T>(key: &str, raw: Option<String>) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| HnError::Config(format!("invalid {key} value {value}: {err}"))),
        None => Ok(None),
    }
}
