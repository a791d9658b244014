//! hn config - Show the effective configuration

use clap::Args;
use serde_json::Value;

use crate::app::AppContext;
use crate::cli::output::{self, OutputFormat};
use crate::config::Config;
use crate::error::{HnError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Dotted key to print (e.g. notion.base_url); everything when omitted
    pub key: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    let shown = ctx.config.redacted();

    if let Some(key) = &args.key {
        let value = config_value_at(&shown, key)?;
        return match ctx.output_format {
            OutputFormat::Human => {
                println!("{}", format_value(&value));
                Ok(())
            }
            _ => output::emit_json(&value),
        };
    }

    match ctx.output_format {
        OutputFormat::Human => {
            let rendered = toml::to_string_pretty(&shown)
                .map_err(|err| HnError::Config(format!("render config: {err}")))?;
            println!("{rendered}");
            Ok(())
        }
        _ => output::emit_json(&shown),
    }
}

fn config_value_at(config: &Config, key: &str) -> Result<Value> {
    let root = serde_json::to_value(config)?;
    key.split('.')
        .try_fold(&root, |node, part| node.get(part))
        .cloned()
        .ok_or_else(|| HnError::Config(format!("unknown config key: {key}")))
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
