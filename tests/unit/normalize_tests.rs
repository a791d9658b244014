use hn::roster::normalize::{contact_entry, person_record, skill_entry};
use hn::store::Row;
use serde_json::json;

#[test]
fn worker_shaped_rows_decode() {
    let row = Row::from_value(json!({
        "object": "page",
        "id": "2c1f-person",
        "properties": {
            "Student ID": {"id": "title", "type": "title", "title": [
                {"type": "text", "text": {"content": "42", "link": null}, "plain_text": "42", "href": null}
            ]},
            "First Name": {"type": "rich_text", "rich_text": [{"plain_text": "Ada"}]},
            "Last Name": {"type": "rich_text", "rich_text": []},
            "Program": {"type": "select", "select": {"id": "p1", "name": "Design", "color": "blue"}},
            "Languages": {"type": "multi_select", "multi_select": []},
            "Hard Skills": {"type": "relation", "relation": [{"id": "s-1"}]},
            "Contact": {"type": "relation", "relation": []},
            "Availability": {"type": "select", "select": null},
            "Portfolio": {"type": "url", "url": "https://ada.dev"},
            "Hyper Email": {"type": "email", "email": null},
            "Last edited": {"type": "last_edited_time", "last_edited_time": "2024-01-01T00:00:00.000Z"}
        }
    }))
    .unwrap();

    let record = person_record(&row);
    assert_eq!(record.id, Some(42));
    assert_eq!(record.first_name, "Ada");
    assert_eq!(record.last_name, "");
    assert!(record.languages.is_empty());
    assert_eq!(record.hard_skills_relation, vec!["s-1"]);
    assert!(record.contact_relation.is_empty());
    assert_eq!(record.availability, "");
    assert_eq!(record.portfolio, "https://ada.dev");
    assert_eq!(record.hyper_email, "");
}

#[test]
fn multi_segment_text_is_joined() {
    let row = Row::from_value(json!({
        "id": "skill",
        "properties": {
            "Skill": {"type": "select", "select": {"name": "Rust"}},
            "Comment": {"type": "rich_text", "rich_text": [
                {"plain_text": "async "}, {"plain_text": "and embedded"}
            ]}
        }
    }))
    .unwrap();
    let entry = skill_entry(&row);
    assert_eq!(entry.skill, "Rust");
    assert_eq!(entry.comment, "async and embedded");
}

#[test]
fn contact_without_slack_is_unchecked() {
    let row = Row::from_value(json!({
        "id": "contact",
        "properties": {
            "Email": {"type": "email", "email": "a@b.com"},
            "LinkedIn": {"type": "url", "url": "https://linkedin.com/in/ada"},
            "Slack Member ID": {"type": "rich_text", "rich_text": []}
        }
    }))
    .unwrap();
    let contact = contact_entry(&row);
    assert_eq!(
        serde_json::to_value(&contact).unwrap(),
        json!({"email": "a@b.com", "linkedin": "https://linkedin.com/in/ada", "slack": {"checked": false}})
    );
}
