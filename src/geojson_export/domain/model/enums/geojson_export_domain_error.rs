use thiserror::Error;

use crate::geojson_export::domain::model::enums::column_role::ColumnRole;

#[derive(Debug, Error)]
pub enum GeoJsonExportDomainError {
    #[error("database id is invalid; expected a Notion database UUID")]
    InvalidDatabaseId,

    #[error("{0} column name must not be empty")]
    InvalidColumnName(ColumnRole),

    #[error("{role} column '{column}' not found")]
    ColumnNotFound { role: ColumnRole, column: String },

    #[error("Invalid type '{actual}' for {role} column '{column}'; expected {expected}")]
    ColumnTypeMismatch {
        role: ColumnRole,
        column: String,
        actual: String,
        expected: String,
    },

    #[error("Could not find a title column and no name column specified")]
    NoDefaultNameColumn,

    #[error(
        "Notion API error {status} {code} '{message}'. Does the integration have access to database '{database_id}'?"
    )]
    UpstreamAccessDenied {
        database_id: String,
        status: u16,
        code: String,
        message: String,
    },

    #[error("Notion API error {status} {code} '{message}' (database '{database_id}')")]
    UpstreamNotFound {
        database_id: String,
        status: u16,
        code: String,
        message: String,
    },

    #[error("Notion API error {status} {code} '{message}' (database '{database_id}')")]
    UpstreamOther {
        database_id: String,
        status: u16,
        code: String,
        message: String,
    },

    #[error("Notion API unavailable for database '{database_id}': {reason}")]
    UpstreamUnavailable { database_id: String, reason: String },

    #[error("unexpected Notion API response for database '{database_id}': {reason}")]
    UpstreamMalformedResponse { database_id: String, reason: String },
}
