use async_trait::async_trait;

use crate::geojson_export::domain::model::{
    entities::feature_collection::FeatureCollection,
    enums::geojson_export_domain_error::GeoJsonExportDomainError,
    queries::build_feature_collection_query::BuildFeatureCollectionQuery,
};

#[async_trait]
pub trait GeoJsonExportQueryService: Send + Sync {
    async fn handle_build_feature_collection(
        &self,
        query: BuildFeatureCollectionQuery,
    ) -> Result<FeatureCollection, GeoJsonExportDomainError>;
}
