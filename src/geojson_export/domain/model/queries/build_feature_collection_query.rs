use crate::geojson_export::domain::model::{
    enums::{column_role::ColumnRole, geojson_export_domain_error::GeoJsonExportDomainError},
    value_objects::{column_name::ColumnName, database_id::DatabaseId},
};

#[derive(Clone, Debug)]
pub struct BuildFeatureCollectionQuery {
    database_id: DatabaseId,
    coordinate_column: ColumnName,
    name_column: Option<ColumnName>,
    url_column: Option<ColumnName>,
}

pub struct BuildFeatureCollectionQueryParts {
    pub database_id: String,
    pub coordinate_column: String,
    pub name_column: Option<String>,
    pub url_column: Option<String>,
}

impl BuildFeatureCollectionQuery {
    pub fn new(parts: BuildFeatureCollectionQueryParts) -> Result<Self, GeoJsonExportDomainError> {
        Ok(Self {
            database_id: DatabaseId::new(parts.database_id)?,
            coordinate_column: ColumnName::new(parts.coordinate_column, ColumnRole::Coordinate)?,
            name_column: parts
                .name_column
                .map(|name| ColumnName::new(name, ColumnRole::Name))
                .transpose()?,
            url_column: parts
                .url_column
                .map(|name| ColumnName::new(name, ColumnRole::Url))
                .transpose()?,
        })
    }

    pub fn database_id(&self) -> &DatabaseId {
        &self.database_id
    }
    pub fn coordinate_column(&self) -> &ColumnName {
        &self.coordinate_column
    }
    pub fn name_column(&self) -> Option<&ColumnName> {
        self.name_column.as_ref()
    }
    pub fn url_column(&self) -> Option<&ColumnName> {
        self.url_column.as_ref()
    }
}
