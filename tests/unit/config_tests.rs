use std::collections::HashMap;

use hn::config::Config;
use hn::query::CombineMode;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn legacy_worker_variables_configure_the_gateway() {
    let mut config = Config::default();
    config
        .apply_overrides(env(&[
            ("NOTION_KEY", "secret_legacy"),
            ("HYPER_NETWORK_DATABASE_ID", "roster"),
            ("HYPER_NETWORK_HARD_SKILLS_DATABASE_ID", "skills"),
            ("HYPER_NETWORK_CONTACTS_DATABASE_ID", "contacts"),
        ]))
        .unwrap();

    assert_eq!(config.notion.api_key, "secret_legacy");
    assert_eq!(config.notion.roster_database_id, "roster");
    assert_eq!(config.notion.skills_database_id, "skills");
    assert_eq!(config.notion.contacts_database_id, "contacts");
    assert!(hn::store::NotionGateway::from_config(&config.notion).is_ok());
}

#[test]
fn file_layer_then_env_layer() {
    let mut config = Config::default();
    config
        .merge_toml(
            r#"
[notion]
base_url = "https://notion.internal/v1"
timeout_secs = 5

[server]
bind = "0.0.0.0:8080"
"#,
        )
        .unwrap();
    config
        .apply_overrides(env(&[("HN_SERVER_BIND", "127.0.0.1:9999"), ("HN_SEARCH_COMBINE", "all")]))
        .unwrap();

    assert_eq!(config.notion.base_url, "https://notion.internal/v1");
    assert_eq!(config.notion.timeout_secs, 5);
    assert_eq!(config.server.bind, "127.0.0.1:9999");
    assert_eq!(config.search.combine, CombineMode::All);
}

#[test]
fn invalid_combine_override_is_rejected() {
    let mut config = Config::default();
    let err = config
        .apply_overrides(env(&[("HN_SEARCH_COMBINE", "sometimes")]))
        .unwrap_err();
    assert!(err.to_string().contains("HN_SEARCH_COMBINE"));
}

#[test]
fn redacted_config_renders_as_toml() {
    let mut config = Config::default();
    config.notion.api_key = "secret_value".into();
    let rendered = toml::to_string_pretty(&config.redacted()).unwrap();
    assert!(rendered.contains("[notion]"));
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("secret_value"));
}
