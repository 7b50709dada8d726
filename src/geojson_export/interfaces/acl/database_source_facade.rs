use async_trait::async_trait;

use crate::geojson_export::domain::model::{
    entities::{database_row::DatabaseRow, database_schema::DatabaseSchema},
    enums::geojson_export_domain_error::GeoJsonExportDomainError,
    value_objects::database_id::DatabaseId,
};

#[async_trait]
pub trait DatabaseSourceFacade: Send + Sync {
    async fn retrieve_schema(
        &self,
        database_id: &DatabaseId,
    ) -> Result<DatabaseSchema, GeoJsonExportDomainError>;

    async fn query_rows(
        &self,
        database_id: &DatabaseId,
    ) -> Result<Vec<DatabaseRow>, GeoJsonExportDomainError>;
}
