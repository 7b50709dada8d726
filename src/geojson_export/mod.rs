use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::{
    config::app_config::AppConfig,
    geojson_export::{
        application::{
            acl::database_source_facade_notion_impl::DatabaseSourceFacadeNotionImpl,
            query_services::geojson_export_query_service_impl::GeoJsonExportQueryServiceImpl,
        },
        interfaces::rest::controllers::geojson_export_rest_controller::{
            GeoJsonExportRestControllerState, router,
        },
    },
    notion_integration::{
        application::acl::http_notion_database_facade_impl::{
            HttpNotionDatabaseFacadeImpl, NotionClientSettings,
        },
        domain::model::value_objects::notion_api_key::NotionApiKey,
        interfaces::acl::notion_database_facade::NotionDatabaseFacade,
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

const RETRY_INITIAL_DELAY_MS: u64 = 500;

pub async fn build_geojson_export_router(config: &AppConfig) -> Result<Router, String> {
    let notion_facade: Arc<dyn NotionDatabaseFacade> =
        Arc::new(HttpNotionDatabaseFacadeImpl::new(NotionClientSettings {
            base_url: config.notion_api_base_url.clone(),
            api_key: NotionApiKey::new(&config.notion_api_key)?,
            notion_version: config.notion_version.clone(),
            timeout: config.notion_timeout(),
            max_retries: config.notion_max_retries,
            retry_initial_delay_ms: RETRY_INITIAL_DELAY_MS,
        })
        .map_err(|e| e.to_string())?);

    if config.notion_verify_on_startup {
        let user = notion_facade
            .verify_credentials()
            .await
            .map_err(|e| format!("tried to test Notion API key, got API error: {e}"))?;
        info!("Authenticated to Notion as '{}'", user.display_name());
    }

    Ok(build_router_with_facade(notion_facade, config.notion_query_max_pages))
}

pub fn build_router_with_facade(
    notion_facade: Arc<dyn NotionDatabaseFacade>,
    max_pages: usize,
) -> Router {
    let database_source = Arc::new(DatabaseSourceFacadeNotionImpl::new(notion_facade, max_pages));
    let query_service = Arc::new(GeoJsonExportQueryServiceImpl::new(database_source));

    router(GeoJsonExportRestControllerState { query_service })
}
