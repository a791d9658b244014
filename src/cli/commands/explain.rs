//! hn explain - Show the filters a search would send

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{self, HumanLayout, OutputFormat};
use crate::error::Result;
use crate::query::{CombineMode, FilterExpression};
use crate::roster::{Explanation, SearchPipeline};
use crate::store::StoreGateway;

use super::CriteriaArgs;

#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub criteria: CriteriaArgs,
}

/// Stands in for the remote store; explaining never queries.
struct Offline;

impl StoreGateway for Offline {
    fn execute(
        &self,
        table: crate::store::Table,
        _filter: &FilterExpression,
    ) -> Result<Vec<crate::store::Row>> {
        Err(crate::error::HnError::Server(format!(
            "explain does not query the {table} table"
        )))
    }
}

pub fn run(ctx: &AppContext, args: &ExplainArgs) -> Result<()> {
    let query = args.criteria.to_query()?;
    let combine = args.criteria.combine.unwrap_or(ctx.config.search.combine);
    let explanation = explain(&query, combine);

    match ctx.output_format {
        OutputFormat::Human => {
            output::emit_human(human_layout(&explanation)?);
            Ok(())
        }
        _ => output::emit_json(&explanation),
    }
}

#[must_use]
pub fn explain(query: &crate::query::SearchQuery, combine: CombineMode) -> Explanation {
    SearchPipeline::new(std::sync::Arc::new(Offline), combine).explain(query)
}

fn render(filter: Option<&FilterExpression>) -> Result<String> {
    match filter {
        Some(filter) => output::render_json(filter),
        None => Ok("(none)".to_string()),
    }
}

fn human_layout(explanation: &Explanation) -> Result<HumanLayout> {
    let mut layout = HumanLayout::new();
    layout.kv("combine", explanation.combine.as_str());
    layout.blank();
    layout.section("skills table filter");
    layout.push_line(render(explanation.skills_filter.as_ref())?);
    layout.blank();
    layout.section("roster filter");
    layout.push_line(render(explanation.roster_filter.as_ref())?);
    if explanation.skills_filter.is_some() {
        layout.push_line("(plus one Student ID condition per person the skills filter resolves to)");
    }
    Ok(layout)
}
