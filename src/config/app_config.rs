use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("environment variable ${0} not set")]
    MissingVariable(&'static str),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub notion_api_key: String,
    pub notion_api_base_url: String,
    pub notion_version: String,
    pub notion_timeout_secs: u64,
    pub notion_max_retries: usize,
    pub notion_query_max_pages: usize,
    pub notion_verify_on_startup: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    pub fn from_source<F>(lookup: F) -> Result<Self, AppConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let notion_api_key = lookup("NOTION_KEY")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(AppConfigError::MissingVariable("NOTION_KEY"))?;

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            notion_api_key,
            notion_api_base_url: lookup("NOTION_API_BASE_URL")
                .unwrap_or_else(|| "https://api.notion.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            notion_version: lookup("NOTION_VERSION")
                .unwrap_or_else(|| "2022-06-28".to_string()),
            notion_timeout_secs: lookup("NOTION_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .unwrap_or(30),
            notion_max_retries: lookup("NOTION_MAX_RETRIES")
                .unwrap_or_else(|| "2".to_string())
                .parse()
                .unwrap_or(2),
            notion_query_max_pages: lookup("NOTION_QUERY_MAX_PAGES")
                .unwrap_or_else(|| "1".to_string())
                .parse::<usize>()
                .unwrap_or(1)
                .max(1),
            notion_verify_on_startup: lookup("NOTION_VERIFY_ON_STARTUP")
                .map(|raw| !matches!(raw.trim(), "0" | "false" | "no"))
                .unwrap_or(true),
        })
    }

    pub fn notion_timeout(&self) -> Duration {
        Duration::from_secs(self.notion_timeout_secs)
    }
}
