use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, instrument, warn};

use crate::{
    geojson_export::{
        domain::model::{
            entities::{
                database_row::{DatabaseRow, PropertyValue},
                database_schema::{DatabaseSchema, SchemaColumn},
            },
            enums::{
                column_type::ColumnType, geojson_export_domain_error::GeoJsonExportDomainError,
            },
            value_objects::{database_id::DatabaseId, rich_text_span::RichTextSpan},
        },
        interfaces::acl::database_source_facade::DatabaseSourceFacade,
    },
    notion_integration::{
        domain::model::{
            entities::notion_page::{NotionPage, NotionPropertyValue},
            value_objects::notion_rich_text::NotionRichText,
        },
        interfaces::acl::notion_database_facade::{NotionDatabaseFacade, NotionIntegrationError},
    },
};

/// Reads databases through the Notion integration. Only the first page of rows
/// is read unless `max_pages` allows more.
pub struct DatabaseSourceFacadeNotionImpl {
    facade: Arc<dyn NotionDatabaseFacade>,
    max_pages: usize,
}

impl DatabaseSourceFacadeNotionImpl {
    pub fn new(facade: Arc<dyn NotionDatabaseFacade>, max_pages: usize) -> Self {
        Self {
            facade,
            max_pages: max_pages.max(1),
        }
    }
}

#[async_trait]
impl DatabaseSourceFacade for DatabaseSourceFacadeNotionImpl {
    #[instrument(skip(self), fields(database_id = %database_id))]
    async fn retrieve_schema(
        &self,
        database_id: &DatabaseId,
    ) -> Result<DatabaseSchema, GeoJsonExportDomainError> {
        let database = self
            .facade
            .retrieve_database(&database_id.as_string())
            .await
            .map_err(|e| map_integration_error(database_id, e))?;

        Ok(DatabaseSchema {
            title: to_spans(database.title),
            url: database.url,
            columns: database
                .properties
                .into_iter()
                .map(|property| SchemaColumn {
                    column_type: ColumnType::from_type_name(&property.property_type),
                    name: property.name,
                })
                .collect(),
        })
    }

    #[instrument(skip(self), fields(database_id = %database_id))]
    async fn query_rows(
        &self,
        database_id: &DatabaseId,
    ) -> Result<Vec<DatabaseRow>, GeoJsonExportDomainError> {
        let id = database_id.as_string();
        let mut rows = Vec::new();
        let mut cursor: Option<String> = None;

        for page_number in 1..=self.max_pages {
            let page = self
                .facade
                .query_database(&id, cursor.as_deref())
                .await
                .map_err(|e| map_integration_error(database_id, e))?;

            rows.extend(page.results.into_iter().map(to_row));

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) if page_number < self.max_pages => cursor = Some(next),
                (true, _) => {
                    warn!(
                        pages_read = page_number,
                        rows_read = rows.len(),
                        "database has more rows than were read"
                    );
                    break;
                }
                (false, _) => break,
            }
        }

        Ok(rows)
    }
}

fn to_row(page: NotionPage) -> DatabaseRow {
    DatabaseRow {
        id: page.id,
        properties: page
            .properties
            .into_iter()
            .map(|(name, value)| (name, to_property_value(value)))
            .collect(),
    }
}

fn to_property_value(value: NotionPropertyValue) -> PropertyValue {
    match value {
        NotionPropertyValue::RichText { rich_text } => PropertyValue::LongText(to_spans(rich_text)),
        NotionPropertyValue::Title { title } => PropertyValue::Title(to_spans(title)),
        NotionPropertyValue::Url { url } => PropertyValue::Link(url),
        NotionPropertyValue::Unsupported => PropertyValue::Unsupported,
    }
}

fn to_spans(rich_text: Vec<NotionRichText>) -> Vec<RichTextSpan> {
    rich_text
        .into_iter()
        .map(|span| RichTextSpan::new(span.plain_text))
        .collect()
}

pub fn map_integration_error(
    database_id: &DatabaseId,
    error: NotionIntegrationError,
) -> GeoJsonExportDomainError {
    let database_id = database_id.as_string();
    match error {
        NotionIntegrationError::Api {
            status: 403,
            code,
            message,
        } => GeoJsonExportDomainError::UpstreamAccessDenied {
            database_id,
            status: 403,
            code,
            message,
        },
        NotionIntegrationError::Api {
            status: 404,
            code,
            message,
        } => GeoJsonExportDomainError::UpstreamNotFound {
            database_id,
            status: 404,
            code,
            message,
        },
        NotionIntegrationError::Api {
            status,
            code,
            message,
        } => {
            error!(%database_id, status, %code, %message, "notion api error");
            GeoJsonExportDomainError::UpstreamOther {
                database_id,
                status,
                code,
                message,
            }
        }
        NotionIntegrationError::Unavailable(reason) => {
            error!(%database_id, %reason, "notion unavailable");
            GeoJsonExportDomainError::UpstreamUnavailable {
                database_id,
                reason,
            }
        }
        NotionIntegrationError::InvalidResponse(reason) => {
            error!(%database_id, %reason, "undecodable notion response");
            GeoJsonExportDomainError::UpstreamMalformedResponse {
                database_id,
                reason,
            }
        }
    }
}
