//! hn search - Search the roster

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{self, HumanLayout, OutputFormat, tsv_cell};
use crate::error::Result;
use crate::roster::{PersonView, SkillEntry};
use crate::utils::format::{join_cell, truncate_string};

use super::CriteriaArgs;

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub criteria: CriteriaArgs,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let query = args.criteria.to_query()?;
    let pipeline = ctx.pipeline(args.criteria.combine)?;
    let people = pipeline.search(&query)?;
    emit_people(&people, ctx.output_format)
}

pub fn emit_people(people: &[PersonView], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => output::emit_json(&people),
        OutputFormat::Jsonl => output::emit_jsonl(people),
        OutputFormat::Tsv => {
            output::emit_tsv(TSV_HEADERS, people, tsv_row);
            Ok(())
        }
        OutputFormat::Human => {
            output::emit_human(human_layout(people));
            Ok(())
        }
    }
}

const TSV_HEADERS: &[&str] = &[
    "id",
    "first_name",
    "last_name",
    "program",
    "languages",
    "availability",
    "hard_skills",
    "email",
    "hyper_email",
    "portfolio",
];

fn skill_names(skills: &[SkillEntry]) -> Vec<String> {
    skills.iter().map(|entry| entry.skill.clone()).collect()
}

#[must_use]
pub fn tsv_row(person: &PersonView) -> Vec<String> {
    let email = person
        .contact
        .as_ref()
        .map(|contact| contact.email.as_str())
        .unwrap_or_default();
    [
        person.id.map(|id| id.to_string()).unwrap_or_default(),
        person.first_name.clone(),
        person.last_name.clone(),
        person.program.clone(),
        person.languages.join(","),
        person.availability.clone(),
        skill_names(&person.hard_skills).join(","),
        email.to_string(),
        person.hyper_email.clone(),
        person.portfolio.clone(),
    ]
    .iter()
    .map(|cell| tsv_cell(cell))
    .collect()
}

fn display_name(person: &PersonView) -> String {
    let name = format!("{} {}", person.first_name, person.last_name);
    let name = name.trim();
    if name.is_empty() {
        "(unnamed)".to_string()
    } else {
        name.to_string()
    }
}

fn human_layout(people: &[PersonView]) -> HumanLayout {
    let mut layout = HumanLayout::new();
    if people.is_empty() {
        layout.push_line("No matching students.".dimmed().to_string());
        return layout;
    }

    layout.section(&format!("{} matching students", people.len()));
    for person in people {
        let id = person
            .id
            .map_or_else(|| "-".to_string(), |id| format!("#{id}"));
        layout.push_line(format!("{} {}", id.as_str().cyan(), display_name(person).as_str().bold()));
        layout.kv("program", &person.program);
        layout.kv("languages", &join_cell(&person.languages));
        if !person.availability.is_empty() {
            layout.kv("availability", &person.availability);
        }
        if !person.portfolio.is_empty() {
            layout.kv("portfolio", &person.portfolio);
        }
        if let Some(contact) = &person.contact {
            if !contact.email.is_empty() {
                layout.kv("email", &contact.email);
            }
            if !contact.linkedin.is_empty() {
                layout.kv("linkedin", &contact.linkedin);
            }
            if let Some(member_id) = &contact.slack.member_id {
                layout.kv("slack", member_id);
            }
        }
        for entry in &person.hard_skills {
            if entry.comment.is_empty() {
                layout.bullet(&entry.skill);
            } else {
                layout.bullet(&format!(
                    "{} {}",
                    entry.skill,
                    truncate_string(&entry.comment, 60).as_str().dimmed()
                ));
            }
        }
        layout.blank();
    }
    layout
}
