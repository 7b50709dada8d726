use std::fmt;

use uuid::Uuid;

use crate::geojson_export::domain::model::enums::geojson_export_domain_error::GeoJsonExportDomainError;

/// Notion database id. Accepts both the dashed form and the 32 hex digit form
/// found in share URLs.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DatabaseId(Uuid);

impl DatabaseId {
    pub fn new(value: String) -> Result<Self, GeoJsonExportDomainError> {
        let uuid = Uuid::parse_str(value.trim())
            .map_err(|_| GeoJsonExportDomainError::InvalidDatabaseId)?;
        Ok(Self(uuid))
    }

    pub fn as_string(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
