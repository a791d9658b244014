use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::NotionConfig;
use crate::error::{HnError, Result};
use crate::query::FilterExpression;

use super::row::{QueryPage, Row};
use super::{StoreGateway, Table};

/// Blocking client for the Notion database query endpoint.
pub struct NotionGateway {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    notion_version: String,
    page_size: u32,
    roster_database_id: String,
    skills_database_id: String,
    contacts_database_id: String,
}

impl std::fmt::Debug for NotionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionGateway")
            .field("base_url", &self.base_url)
            .field("notion_version", &self.notion_version)
            .field("page_size", &self.page_size)
            .field("roster_database_id", &self.roster_database_id)
            .field("skills_database_id", &self.skills_database_id)
            .field("contacts_database_id", &self.contacts_database_id)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct QueryBody<'a> {
    filter: &'a FilterExpression,
    page_size: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

fn require(value: &str, key: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HnError::MissingConfig(key.to_string()));
    }
    Ok(())
}

impl NotionGateway {
    pub fn from_config(config: &NotionConfig) -> Result<Self> {
        require(&config.api_key, "notion.api_key")?;
        require(&config.roster_database_id, "notion.roster_database_id")?;
        require(&config.skills_database_id, "notion.skills_database_id")?;
        require(&config.contacts_database_id, "notion.contacts_database_id")?;
        if config.base_url.trim().is_empty() {
            return Err(HnError::Config(
                "notion base_url is empty; set [notion].base_url".to_string(),
            ));
        }
        if config.base_url.starts_with("http://") {
            tracing::warn!("Notion base_url uses unencrypted HTTP. The API key will be sent in plain text.");
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(concat!("hn/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| HnError::Config(format!("notion http client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            notion_version: config.notion_version.clone(),
            page_size: config.page_size.clamp(1, 100),
            roster_database_id: config.roster_database_id.clone(),
            skills_database_id: config.skills_database_id.clone(),
            contacts_database_id: config.contacts_database_id.clone(),
        })
    }

    fn database_id(&self, table: Table) -> &str {
        match table {
            Table::Roster => &self.roster_database_id,
            Table::Skills => &self.skills_database_id,
            Table::Contacts => &self.contacts_database_id,
        }
    }

    fn query_url(&self, table: Table) -> String {
        format!(
            "{}/databases/{}/query",
            self.base_url,
            urlencoding::encode(self.database_id(table))
        )
    }
}

impl StoreGateway for NotionGateway {
    fn execute(&self, table: Table, filter: &FilterExpression) -> Result<Vec<Row>> {
        let url = self.query_url(table);
        tracing::debug!(%table, conditions = filter.conditions().len(), "querying notion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", &self.notion_version)
            .json(&QueryBody {
                filter,
                page_size: self.page_size,
            })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let envelope: ErrorEnvelope =
                serde_json::from_str(&body).unwrap_or_else(|_| ErrorEnvelope {
                    code: "http_error".to_string(),
                    message: status.canonical_reason().unwrap_or("request failed").to_string(),
                });
            tracing::debug!(%table, status = status.as_u16(), code = %envelope.code, "notion rejected query");
            return Err(HnError::Remote {
                status: status.as_u16(),
                code: envelope.code,
                message: envelope.message,
            });
        }

        let page: QueryPage = response.json()?;
        if page.has_more {
            tracing::warn!(
                %table,
                returned = page.results.len(),
                next_cursor = page.next_cursor.as_deref().unwrap_or_default(),
                "more rows match than one page holds; only the first page is used"
            );
        }
        Ok(page.results)
    }
}
