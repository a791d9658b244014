//! hn serve - Serve the search endpoint over HTTP

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::query::CombineMode;
use crate::server::{self, ServerState};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides [server].bind)
    #[arg(long)]
    pub bind: Option<String>,

    /// How criteria are combined (overrides config)
    #[arg(long, value_enum)]
    pub combine: Option<CombineMode>,
}

pub fn run(ctx: &AppContext, args: &ServeArgs) -> Result<()> {
    // The blocking HTTP client must be built outside the async runtime.
    let state = ServerState {
        pipeline: ctx.pipeline(args.combine)?,
    };
    let bind = args
        .bind
        .clone()
        .unwrap_or_else(|| ctx.config.server.bind.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(state, &bind))
}
