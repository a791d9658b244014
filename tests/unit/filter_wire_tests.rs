use hn::query::{self, CombineMode, FilterExpression, SearchQuery};
use serde_json::json;

fn roster_filter(query: &SearchQuery, mode: CombineMode) -> Option<FilterExpression> {
    query::combine(
        vec![
            query::from_name(query.name.as_deref()),
            query::from_programs(&query.programs),
            query::from_languages(&query.languages),
        ],
        mode,
    )
}

#[test]
fn any_mode_matches_worker_wire_format() {
    let query = SearchQuery::from_json(
        br#"{"name":"Ada","programs":["Design"],"languages":["French"]}"#,
    )
    .unwrap();
    let filter = roster_filter(&query, CombineMode::Any).unwrap();
    assert_eq!(
        serde_json::to_value(&filter).unwrap(),
        json!({"or": [
            {"property": "First Name", "rich_text": {"contains": "Ada"}},
            {"property": "Last Name", "rich_text": {"contains": "Ada"}},
            {"property": "Program", "select": {"equals": "Design"}},
            {"property": "Languages", "multi_select": {"contains": "French"}}
        ]})
    );
}

#[test]
fn all_mode_nests_per_dimension() {
    let query = SearchQuery {
        programs: vec!["Design".into(), "Data".into()],
        languages: vec!["French".into()],
        ..SearchQuery::default()
    };
    let filter = roster_filter(&query, CombineMode::All).unwrap();
    assert_eq!(
        serde_json::to_value(&filter).unwrap(),
        json!({"and": [
            {"or": [
                {"property": "Program", "select": {"equals": "Design"}},
                {"property": "Program", "select": {"equals": "Data"}}
            ]},
            {"or": [
                {"property": "Languages", "multi_select": {"contains": "French"}}
            ]}
        ]})
    );
}

#[test]
fn blank_query_has_no_filter_in_either_mode() {
    let query = SearchQuery {
        name: Some("   ".into()),
        programs: vec![String::new()],
        ..SearchQuery::default()
    };
    assert!(roster_filter(&query, CombineMode::Any).is_none());
    assert!(roster_filter(&query, CombineMode::All).is_none());
}

#[test]
fn student_id_filter_matches_worker_shape() {
    let filter = FilterExpression::any_of(query::from_student_ids(&[42])).unwrap();
    assert_eq!(
        serde_json::to_value(&filter).unwrap(),
        json!({"or": [{"property": "Student ID", "title": {"equals": "42"}}]})
    );
}
