use httpmock::prelude::*;
use serde_json::json;

use hn::HnError;
use hn::query::{CombineMode, SearchQuery};
use hn::test_utils::TestLogger;
use hn::test_utils::rows::{ContactRow, PersonRow, SkillRow, page};

use crate::fixture::{CONTACTS_DB, ROSTER_DB, SKILLS_DB, notion_pipeline};

fn query_path(db: &str) -> String {
    format!("/databases/{db}/query")
}

#[test]
fn program_search_against_mock_notion() {
    let log = TestLogger::new("program_search_against_mock_notion");
    let server = MockServer::start();

    log.step("mock roster, skills and contacts databases");
    let roster = server.mock(|when, then| {
        when.method(POST)
            .path(query_path(ROSTER_DB))
            .header("authorization", "Bearer secret_integration")
            .json_body(json!({
                "filter": {"or": [{"property": "Program", "select": {"equals": "Design"}}]},
                "page_size": 100
            }));
        then.status(200).json_body(page(&[PersonRow::new(42)
            .program("Design")
            .skill_links(&["s1"])
            .contact_link("c1")
            .json()]));
    });
    let skills = server.mock(|when, then| {
        when.method(POST).path(query_path(SKILLS_DB)).json_body(json!({
            "filter": {"or": [{"property": "Student ID", "title": {"equals": "42"}}]},
            "page_size": 100
        }));
        then.status(200)
            .json_body(page(&[SkillRow::new(42, "Figma").json()]));
    });
    let contacts = server.mock(|when, then| {
        when.method(POST).path(query_path(CONTACTS_DB));
        then.status(200)
            .json_body(page(&[ContactRow::new(42).email("a@b.com").json()]));
    });

    log.step("run the search");
    let pipeline = notion_pipeline(&server.base_url(), CombineMode::Any);
    let query = SearchQuery::from_json(br#"{"programs":["Design"]}"#).unwrap();
    let people = pipeline.search(&query).unwrap();
    log.log_query("people", &people);

    roster.assert();
    skills.assert();
    contacts.assert();

    let value = serde_json::to_value(&people).unwrap();
    assert_eq!(
        value,
        json!([{
            "id": 42,
            "firstName": "",
            "lastName": "",
            "program": "Design",
            "languages": [],
            "availability": "",
            "portfolio": "",
            "hyperEmail": "",
            "hardSkills": [{"skill": "Figma", "comment": ""}],
            "contact": {"email": "a@b.com", "linkedin": "", "slack": {"checked": false}}
        }])
    );
    log.pass();
}

#[test]
fn unknown_skill_returns_empty_without_roster_query() {
    let server = MockServer::start();
    let skills = server.mock(|when, then| {
        when.method(POST).path(query_path(SKILLS_DB)).json_body(json!({
            "filter": {"or": [{"property": "Skill", "select": {"equals": "Rust"}}]},
            "page_size": 100
        }));
        then.status(200).json_body(page(&[]));
    });

    let pipeline = notion_pipeline(&server.base_url(), CombineMode::Any);
    let query = SearchQuery::from_json(br#"{"hardSkills":["Rust"],"programs":["Design"]}"#).unwrap();
    let people = pipeline.search(&query).unwrap();

    skills.assert();
    assert!(people.is_empty());
}

#[test]
fn resolved_skill_ids_reach_the_roster_filter() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(query_path(SKILLS_DB)).json_body(json!({
            "filter": {"or": [{"property": "Skill", "select": {"equals": "Rust"}}]},
            "page_size": 100
        }));
        then.status(200).json_body(page(&[
            SkillRow::new(7, "Rust").json(),
            SkillRow::new(7, "Rust").comment("again").json(),
        ]));
    });
    let roster = server.mock(|when, then| {
        when.method(POST).path(query_path(ROSTER_DB)).json_body(json!({
            "filter": {"and": [
                {"or": [{"property": "Program", "select": {"equals": "Data"}}]},
                {"or": [{"property": "Student ID", "title": {"equals": "7"}}]}
            ]},
            "page_size": 100
        }));
        then.status(200)
            .json_body(page(&[PersonRow::new(7).program("Data").json()]));
    });

    let pipeline = notion_pipeline(&server.base_url(), CombineMode::All);
    let query = SearchQuery::from_json(br#"{"hardSkills":["Rust"],"programs":["Data"]}"#).unwrap();
    let people = pipeline.search(&query).unwrap();

    roster.assert();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].id, Some(7));
    assert!(people[0].hard_skills.is_empty());
    assert!(people[0].contact.is_none());
}

#[test]
fn remote_rejection_fails_the_whole_search() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(query_path(ROSTER_DB));
        then.status(200).json_body(page(&[
            PersonRow::new(1).program("Design").contact_link("c1").json(),
            PersonRow::new(2).program("Design").contact_link("c2").json(),
        ]));
    });
    server.mock(|when, then| {
        when.method(POST).path(query_path(CONTACTS_DB));
        then.status(429).json_body(json!({
            "object": "error",
            "status": 429,
            "code": "rate_limited",
            "message": "You have been rate limited."
        }));
    });

    let pipeline = notion_pipeline(&server.base_url(), CombineMode::Any);
    let query = SearchQuery::from_json(br#"{"programs":["Design"]}"#).unwrap();
    let err = pipeline.search(&query).unwrap_err();

    match &err {
        HnError::Remote { status, code, .. } => {
            assert_eq!(*status, 429);
            assert_eq!(code, "rate_limited");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
    assert_eq!(err.http_status(), 502);
}

#[test]
fn unreachable_store_is_a_network_error() {
    // Port 9 (discard) on localhost is closed in test environments.
    let pipeline = notion_pipeline("http://127.0.0.1:9", CombineMode::Any);
    let query = SearchQuery::from_json(br#"{"programs":["Design"]}"#).unwrap();
    let err = pipeline.search(&query).unwrap_err();
    assert!(matches!(err, HnError::Http(_)));
    assert_eq!(err.http_status(), 502);
}
