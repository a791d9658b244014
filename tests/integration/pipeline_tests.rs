use hn::query::{CombineMode, SearchQuery};
use hn::roster::SearchPipeline;
use hn::roster::compose::{lookup_contact, lookup_skills};
use hn::store::{StoreGateway, Table};

use crate::fixture::{cohort, strings};

#[test]
fn empty_query_never_reaches_the_roster() {
    let store = cohort();
    let pipeline = SearchPipeline::new(store.clone(), CombineMode::Any);
    let query = SearchQuery::from_json(br#"{"name":"  ","programs":[],"hardSkills":null}"#).unwrap();
    assert!(pipeline.search(&query).unwrap().is_empty());
    assert_eq!(store.total_calls(), 0);
}

#[test]
fn name_search_matches_either_name_field() {
    let store = cohort();
    let pipeline = SearchPipeline::new(store.clone(), CombineMode::Any);
    let query = SearchQuery {
        name: Some("hopper ada".into()),
        ..SearchQuery::default()
    };
    let people = pipeline.search(&query).unwrap();
    let ids: Vec<Option<i64>> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![Some(42), Some(9)]);
}

#[test]
fn any_mode_unions_skill_owners_with_other_criteria() {
    let store = cohort();
    let pipeline = SearchPipeline::new(store.clone(), CombineMode::Any);
    let query = SearchQuery {
        languages: strings(&["Spanish"]),
        hard_skills: strings(&["Figma"]),
        ..SearchQuery::default()
    };
    let people = pipeline.search(&query).unwrap();
    let ids: Vec<Option<i64>> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![Some(42), Some(9)]);
}

#[test]
fn all_mode_intersects_skill_owners_with_program() {
    let store = cohort();
    let pipeline = SearchPipeline::new(store.clone(), CombineMode::All);
    let query = SearchQuery {
        programs: strings(&["Data"]),
        hard_skills: strings(&["Rust"]),
        ..SearchQuery::default()
    };
    let people = pipeline.search(&query).unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].first_name, "Alan");
    assert_eq!(people[0].hard_skills[0].skill, "Rust");
    assert!(people[0].contact.is_none());
}

#[test]
fn composed_views_match_direct_lookups() {
    let store = cohort();
    let pipeline = SearchPipeline::new(store.clone(), CombineMode::Any);
    let query = SearchQuery {
        programs: strings(&["Design", "Data"]),
        ..SearchQuery::default()
    };
    let people = pipeline.search(&query).unwrap();
    assert_eq!(people.len(), 3);

    let gateway: &dyn StoreGateway = store.as_ref();
    for person in &people {
        let id = person.id.unwrap();
        let skills = lookup_skills(gateway, id).unwrap();
        let contact = lookup_contact(gateway, id).unwrap();
        assert_eq!(person.hard_skills, skills, "skills of {id}");
        assert_eq!(person.contact, contact, "contact of {id}");
    }
}

#[test]
fn lookups_follow_relation_links() {
    let store = cohort();
    let pipeline = SearchPipeline::new(store.clone(), CombineMode::Any);
    let query = SearchQuery {
        programs: strings(&["Design", "Data"]),
        ..SearchQuery::default()
    };
    pipeline.search(&query).unwrap();

    // 42 has both links, 7 only skills, 9 only a contact.
    assert_eq!(store.calls(Table::Roster), 1);
    assert_eq!(store.calls(Table::Skills), 2);
    assert_eq!(store.calls(Table::Contacts), 2);
}

#[test]
fn slack_member_id_marks_contact_checked() {
    let store = cohort();
    let pipeline = SearchPipeline::new(store.clone(), CombineMode::Any);
    let query = SearchQuery {
        name: Some("Ada".into()),
        ..SearchQuery::default()
    };
    let people = pipeline.search(&query).unwrap();
    let value = serde_json::to_value(&people[0]).unwrap();
    assert_eq!(value["contact"]["slack"], serde_json::json!({"checked": true, "memberId": "U042"}));
    assert_eq!(value["hardSkills"][1]["comment"], "side projects");
}
