use async_trait::async_trait;

use crate::notion_integration::domain::model::entities::{
    notion_database::NotionDatabase, notion_page::NotionQueryResult, notion_user::NotionUser,
};

#[derive(Debug, thiserror::Error)]
pub enum NotionIntegrationError {
    #[error("Notion API error {status} {code} '{message}'")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("notion unavailable: {0}")]
    Unavailable(String),

    #[error("unexpected notion response: {0}")]
    InvalidResponse(String),
}

impl NotionIntegrationError {
    /// Rate limiting, server-side failures and transport errors are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::Unavailable(_) => true,
            Self::InvalidResponse(_) => false,
        }
    }
}

#[async_trait]
pub trait NotionDatabaseFacade: Send + Sync {
    async fn retrieve_database(
        &self,
        database_id: &str,
    ) -> Result<NotionDatabase, NotionIntegrationError>;

    async fn query_database(
        &self,
        database_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<NotionQueryResult, NotionIntegrationError>;

    async fn verify_credentials(&self) -> Result<NotionUser, NotionIntegrationError>;
}
