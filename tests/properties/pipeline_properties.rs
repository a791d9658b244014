use std::sync::Arc;

use proptest::prelude::*;

use hn::query::{CombineMode, SearchQuery};
use hn::roster::{ComposedPerson, PersonRecord, PersonView, Project, SearchPipeline, SkillEntry};
use hn::store::Table;
use hn::test_utils::InMemoryStore;
use hn::test_utils::rows::{PersonRow, SkillRow};

fn blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,4}"
}

fn blank_query() -> impl Strategy<Value = SearchQuery> {
    (
        prop::option::of(blank()),
        prop::collection::vec(blank(), 0..3),
        prop::collection::vec(blank(), 0..3),
        prop::collection::vec(blank(), 0..3),
    )
        .prop_map(|(name, programs, languages, hard_skills)| SearchQuery {
            name,
            programs,
            languages,
            hard_skills,
        })
}

fn seeded_store() -> Arc<InMemoryStore> {
    Arc::new(
        InMemoryStore::new()
            .with_person(PersonRow::new(1).program("Design").languages(&["French"]).row())
            .with_skill(SkillRow::new(1, "Figma").row()),
    )
}

fn composed() -> impl Strategy<Value = ComposedPerson> {
    (
        prop::option::of(any::<i64>()),
        "[A-Za-z]{0,8}",
        prop::collection::vec("[a-z0-9-]{1,8}", 0..3),
        prop::collection::vec("[A-Za-z]{1,8}", 0..3),
    )
        .prop_map(|(id, first_name, links, skills)| ComposedPerson {
            record: PersonRecord {
                id,
                first_name,
                hard_skills_relation: links.clone(),
                contact_relation: links,
                ..PersonRecord::default()
            },
            hard_skills: skills
                .into_iter()
                .map(|skill| SkillEntry {
                    skill,
                    comment: String::new(),
                })
                .collect(),
            contact: None,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn blank_queries_return_nothing_without_remote_calls(query in blank_query(), all in any::<bool>()) {
        let store = seeded_store();
        let mode = if all { CombineMode::All } else { CombineMode::Any };
        let people = SearchPipeline::new(store.clone(), mode).search(&query).unwrap();
        prop_assert!(people.is_empty());
        prop_assert_eq!(store.total_calls(), 0);
    }

    #[test]
    fn unmatched_skills_never_leak_roster_rows(
        skill in "[A-Z][a-z]{2,8}",
        program in prop_oneof![Just("Design".to_string()), Just("Data".to_string())],
        all in any::<bool>(),
    ) {
        prop_assume!(skill != "Figma");
        let store = seeded_store();
        let mode = if all { CombineMode::All } else { CombineMode::Any };
        let query = SearchQuery {
            programs: vec![program],
            languages: vec!["French".into()],
            hard_skills: vec![skill],
            ..SearchQuery::default()
        };
        let people = SearchPipeline::new(store.clone(), mode).search(&query).unwrap();
        prop_assert!(people.is_empty());
        prop_assert_eq!(store.calls(Table::Roster), 0);
    }

    #[test]
    fn projection_is_idempotent_and_hides_links(person in composed()) {
        let once: PersonView = person.project();
        let twice = once.clone().project();
        prop_assert_eq!(&once, &twice);

        let value = serde_json::to_value(&once).unwrap();
        let object = value.as_object().unwrap();
        prop_assert!(!object.contains_key("hardSkillsRelation"));
        prop_assert!(!object.contains_key("contactRelation"));
    }
}
