use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, Method,
    header::{AUTHORIZATION, HeaderMap, RETRY_AFTER},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tokio_retry2::{
    Retry, RetryError,
    strategy::{ExponentialBackoff, jitter},
};
use tracing::{debug, instrument, warn};

use crate::notion_integration::{
    domain::model::{
        entities::{
            notion_database::NotionDatabase, notion_page::NotionQueryResult,
            notion_user::NotionUser,
        },
        value_objects::notion_api_key::NotionApiKey,
    },
    interfaces::acl::notion_database_facade::{NotionDatabaseFacade, NotionIntegrationError},
};

const NOTION_VERSION_HEADER: &str = "Notion-Version";
const MAX_RETRY_DELAY: Duration = Duration::from_secs(8);

#[derive(Clone, Debug)]
pub struct NotionClientSettings {
    pub base_url: String,
    pub api_key: NotionApiKey,
    pub notion_version: String,
    pub timeout: Duration,
    pub max_retries: usize,
    pub retry_initial_delay_ms: u64,
}

#[derive(Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub struct HttpNotionDatabaseFacadeImpl {
    client: Client,
    base_url: String,
    api_key: NotionApiKey,
    notion_version: String,
    max_retries: usize,
    retry_initial_delay_ms: u64,
}

impl HttpNotionDatabaseFacadeImpl {
    pub fn new(settings: NotionClientSettings) -> Result<Self, NotionIntegrationError> {
        let client = Client::builder()
            .connect_timeout(settings.timeout)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| NotionIntegrationError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
            notion_version: settings.notion_version,
            max_retries: settings.max_retries,
            retry_initial_delay_ms: settings.retry_initial_delay_ms,
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, NotionIntegrationError> {
        let url = format!("{}{}", self.base_url, path);
        let strategy = ExponentialBackoff::from_millis(self.retry_initial_delay_ms)
            .factor(2)
            .max_delay(MAX_RETRY_DELAY)
            .map(jitter)
            .take(self.max_retries);

        let text = Retry::spawn(strategy, || self.attempt(&method, &url, body.as_ref())).await?;

        serde_json::from_str(&text)
            .map_err(|e| NotionIntegrationError::InvalidResponse(e.to_string()))
    }

    async fn attempt(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<String, RetryError<NotionIntegrationError>> {
        let mut request = self
            .client
            .request(method.clone(), url)
            .header(AUTHORIZATION, self.api_key.bearer())
            .header(NOTION_VERSION_HEADER, &self.notion_version);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, %url, "notion request failed, will retry");
            RetryError::Transient {
                err: NotionIntegrationError::Unavailable(e.to_string()),
                retry_after: None,
            }
        })?;

        let status = response.status();
        let retry_after = retry_after(response.headers());
        let text = response.text().await.map_err(|e| RetryError::Transient {
            err: NotionIntegrationError::Unavailable(e.to_string()),
            retry_after: None,
        })?;

        if status.is_success() {
            debug!(status = status.as_u16(), %url, "notion request succeeded");
            return Ok(text);
        }

        let error = api_error(status.as_u16(), &text);
        if error.is_retryable() {
            warn!(error = %error, %url, "transient notion error, will retry");
            Err(RetryError::Transient {
                err: error,
                retry_after,
            })
        } else {
            Err(RetryError::Permanent(error))
        }
    }
}

#[async_trait]
impl NotionDatabaseFacade for HttpNotionDatabaseFacadeImpl {
    #[instrument(skip(self))]
    async fn retrieve_database(
        &self,
        database_id: &str,
    ) -> Result<NotionDatabase, NotionIntegrationError> {
        self.execute(Method::GET, &format!("/v1/databases/{database_id}"), None)
            .await
    }

    #[instrument(skip(self))]
    async fn query_database(
        &self,
        database_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<NotionQueryResult, NotionIntegrationError> {
        let mut body = Map::new();
        if let Some(cursor) = start_cursor {
            body.insert("start_cursor".to_string(), Value::String(cursor.to_string()));
        }

        self.execute(
            Method::POST,
            &format!("/v1/databases/{database_id}/query"),
            Some(Value::Object(body)),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn verify_credentials(&self) -> Result<NotionUser, NotionIntegrationError> {
        self.execute(Method::GET, "/v1/users/me", None).await
    }
}

fn api_error(status: u16, body: &str) -> NotionIntegrationError {
    let parsed = serde_json::from_str::<NotionErrorBody>(body).ok();
    let (code, message) = match parsed {
        Some(parsed) => (parsed.code, parsed.message),
        None => (None, None),
    };

    NotionIntegrationError::Api {
        status,
        code: code.unwrap_or_else(|| "unknown".to_string()),
        message: message.unwrap_or_else(|| body.trim().to_string()),
    }
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
