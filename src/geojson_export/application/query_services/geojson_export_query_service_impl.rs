use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::geojson_export::{
    domain::{
        model::{
            entities::feature_collection::FeatureCollection,
            enums::geojson_export_domain_error::GeoJsonExportDomainError,
            queries::build_feature_collection_query::BuildFeatureCollectionQuery,
        },
        services::{
            geojson_export_query_service::GeoJsonExportQueryService,
            row_feature_transformer::transform_rows, schema_column_validator::validate_columns,
        },
    },
    interfaces::acl::database_source_facade::DatabaseSourceFacade,
};

pub struct GeoJsonExportQueryServiceImpl {
    database_source: Arc<dyn DatabaseSourceFacade>,
}

impl GeoJsonExportQueryServiceImpl {
    pub fn new(database_source: Arc<dyn DatabaseSourceFacade>) -> Self {
        Self { database_source }
    }
}

#[async_trait]
impl GeoJsonExportQueryService for GeoJsonExportQueryServiceImpl {
    #[instrument(skip(self, query), fields(database_id = %query.database_id()))]
    async fn handle_build_feature_collection(
        &self,
        query: BuildFeatureCollectionQuery,
    ) -> Result<FeatureCollection, GeoJsonExportDomainError> {
        let schema = self
            .database_source
            .retrieve_schema(query.database_id())
            .await?;

        let columns = validate_columns(
            &schema,
            query.coordinate_column(),
            query.name_column(),
            query.url_column(),
        )?;

        let rows = self.database_source.query_rows(query.database_id()).await?;
        let outcome = transform_rows(&rows, &columns);

        info!(
            coordinate_column = %columns.coordinate.name,
            name_column = %columns.name.name,
            name_column_type = %columns.name.column_type,
            url_column_type = columns.url.as_ref().map(|c| c.column_type.as_str()),
            rows = rows.len(),
            features = outcome.features.len(),
            omitted = outcome.warnings.len(),
            "built feature collection"
        );

        Ok(FeatureCollection {
            database_name: schema.display_name(),
            database_url: schema.url,
            features: outcome.features,
            warnings: outcome
                .warnings
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
    }
}
