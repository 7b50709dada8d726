use crate::geojson_export::domain::model::enums::{
    column_role::ColumnRole, geojson_export_domain_error::GeoJsonExportDomainError,
};

/// Column names are matched verbatim; Notion allows spaces and punctuation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ColumnName(String);

impl ColumnName {
    pub fn new(value: String, role: ColumnRole) -> Result<Self, GeoJsonExportDomainError> {
        if value.trim().is_empty() {
            return Err(GeoJsonExportDomainError::InvalidColumnName(role));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
