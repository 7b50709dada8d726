use std::{collections::HashMap, time::Duration};

use notion_map_api::config::app_config::{AppConfig, AppConfigError};

fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect::<HashMap<_, _>>();
    move |key| values.get(key).cloned()
}

#[test]
fn requires_notion_key() {
    let result = AppConfig::from_source(source(&[("PORT", "9000")]));

    match result {
        Err(error @ AppConfigError::MissingVariable("NOTION_KEY")) => {
            assert_eq!(error.to_string(), "environment variable $NOTION_KEY not set");
        }
        other => panic!("expected missing NOTION_KEY, got {other:?}"),
    }
}

#[test]
fn blank_notion_key_counts_as_missing() {
    let result = AppConfig::from_source(source(&[("NOTION_KEY", "  ")]));

    assert!(matches!(result, Err(AppConfigError::MissingVariable(_))));
}

#[test]
fn applies_defaults() {
    let config =
        AppConfig::from_source(source(&[("NOTION_KEY", "secret_abc")])).expect("config loads");

    assert_eq!(config.port, 8000);
    assert_eq!(config.notion_api_key, "secret_abc");
    assert_eq!(config.notion_api_base_url, "https://api.notion.com");
    assert_eq!(config.notion_version, "2022-06-28");
    assert_eq!(config.notion_timeout(), Duration::from_secs(30));
    assert_eq!(config.notion_max_retries, 2);
    assert_eq!(config.notion_query_max_pages, 1);
    assert!(config.notion_verify_on_startup);
}

#[test]
fn reads_overrides() {
    let config = AppConfig::from_source(source(&[
        ("NOTION_KEY", "secret_abc"),
        ("PORT", "9090"),
        ("NOTION_API_BASE_URL", "http://localhost:4010/"),
        ("NOTION_VERSION", "2025-09-03"),
        ("NOTION_TIMEOUT_SECS", "5"),
        ("NOTION_MAX_RETRIES", "0"),
        ("NOTION_QUERY_MAX_PAGES", "4"),
        ("NOTION_VERIFY_ON_STARTUP", "false"),
    ]))
    .expect("config loads");

    assert_eq!(config.port, 9090);
    assert_eq!(config.notion_api_base_url, "http://localhost:4010");
    assert_eq!(config.notion_version, "2025-09-03");
    assert_eq!(config.notion_timeout(), Duration::from_secs(5));
    assert_eq!(config.notion_max_retries, 0);
    assert_eq!(config.notion_query_max_pages, 4);
    assert!(!config.notion_verify_on_startup);
}

#[test]
fn falls_back_on_unparsable_numbers() {
    let config = AppConfig::from_source(source(&[
        ("NOTION_KEY", "secret_abc"),
        ("PORT", "eighty"),
        ("NOTION_QUERY_MAX_PAGES", "0"),
    ]))
    .expect("config loads");

    assert_eq!(config.port, 8000);
    assert_eq!(config.notion_query_max_pages, 1);
}
