//! Per-invocation context shared by all commands.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::query::CombineMode;
use crate::roster::SearchPipeline;
use crate::store::{NotionGateway, StoreGateway};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub robot_mode: bool,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;
        Ok(Self {
            config,
            config_path: cli.config.clone(),
            robot_mode: cli.robot,
            output_format: cli.output_format(),
        })
    }

    /// Gateway to the configured Notion databases.
    pub fn gateway(&self) -> Result<Arc<dyn StoreGateway>> {
        Ok(Arc::new(NotionGateway::from_config(&self.config.notion)?))
    }

    /// Pipeline over the configured gateway. `combine` overrides the
    /// configured combination mode.
    pub fn pipeline(&self, combine: Option<CombineMode>) -> Result<SearchPipeline> {
        Ok(SearchPipeline::new(
            self.gateway()?,
            combine.unwrap_or(self.config.search.combine),
        ))
    }
}
