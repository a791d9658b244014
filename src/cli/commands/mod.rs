//! Command implementations and the criteria flags they share.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::{HnError, Result};
use crate::query::{CombineMode, SearchQuery};

pub mod config;
pub mod explain;
pub mod search;
pub mod serve;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Search(args) => search::run(ctx, args),
        Commands::Explain(args) => explain::run(ctx, args),
        Commands::Serve(args) => serve::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}

/// Search criteria accepted by `search` and `explain`.
#[derive(Args, Debug, Clone, Default)]
pub struct CriteriaArgs {
    /// Free-text name; each word matches first or last name
    #[arg(long)]
    pub name: Option<String>,

    /// Program to match (repeatable)
    #[arg(long, value_name = "PROGRAM")]
    pub program: Vec<String>,

    /// Spoken language to match (repeatable)
    #[arg(long, value_name = "LANGUAGE")]
    pub language: Vec<String>,

    /// Hard skill to match (repeatable)
    #[arg(long, value_name = "SKILL")]
    pub skill: Vec<String>,

    /// Read a JSON query from a file, or `-` for stdin. Flags add to it.
    #[arg(long, value_name = "PATH")]
    pub query_file: Option<PathBuf>,

    /// How criteria are combined (overrides config)
    #[arg(long, value_enum)]
    pub combine: Option<CombineMode>,
}

impl CriteriaArgs {
    /// The query described by the file (if any) and the flags.
    pub fn to_query(&self) -> Result<SearchQuery> {
        let mut query = match &self.query_file {
            Some(path) => SearchQuery::from_json(&read_query_source(path)?)?,
            None => SearchQuery::default(),
        };
        if let Some(name) = &self.name {
            query.name = Some(name.clone());
        }
        query.programs.extend(self.program.iter().cloned());
        query.languages.extend(self.language.iter().cloned());
        query.hard_skills.extend(self.skill.iter().cloned());
        Ok(query)
    }
}

fn read_query_source(path: &PathBuf) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read(path)
        .map_err(|err| HnError::InvalidQuery(format!("read query file {}: {err}", path.display())))
}
