use tracing::warn;

use crate::geojson_export::domain::model::{
    entities::{
        database_schema::DatabaseSchema,
        resolved_columns::{ColumnReference, ResolvedColumns},
    },
    enums::{
        column_role::ColumnRole, column_type::ColumnType,
        geojson_export_domain_error::GeoJsonExportDomainError,
    },
    value_objects::column_name::ColumnName,
};

/// Checks that the requested columns exist with usable types and resolves the
/// name column, defaulting to the title column.
pub fn validate_columns(
    schema: &DatabaseSchema,
    coordinate_column: &ColumnName,
    name_column: Option<&ColumnName>,
    url_column: Option<&ColumnName>,
) -> Result<ResolvedColumns, GeoJsonExportDomainError> {
    let coordinate = require_column(
        schema,
        ColumnRole::Coordinate,
        coordinate_column,
        &[ColumnType::LongText],
    )?;

    let name = match name_column {
        Some(column) => require_column(
            schema,
            ColumnRole::Name,
            column,
            &[ColumnType::LongText, ColumnType::Title],
        )?,
        None => default_name_column(schema)?,
    };

    let url = url_column
        .map(|column| require_column(schema, ColumnRole::Url, column, &[ColumnType::Link]))
        .transpose()?;

    Ok(ResolvedColumns {
        coordinate,
        name,
        url,
    })
}

fn require_column(
    schema: &DatabaseSchema,
    role: ColumnRole,
    column: &ColumnName,
    accepted: &[ColumnType],
) -> Result<ColumnReference, GeoJsonExportDomainError> {
    let found = schema
        .column(column.value())
        .ok_or_else(|| GeoJsonExportDomainError::ColumnNotFound {
            role,
            column: column.value().to_string(),
        })?;

    if !accepted.contains(&found.column_type) {
        return Err(GeoJsonExportDomainError::ColumnTypeMismatch {
            role,
            column: column.value().to_string(),
            actual: found.column_type.to_string(),
            expected: accepted
                .iter()
                .map(|t| format!("'{t}'"))
                .collect::<Vec<_>>()
                .join(" or "),
        });
    }

    Ok(ColumnReference {
        name: found.name.clone(),
        column_type: found.column_type.clone(),
    })
}

// First title column in schema order wins.
fn default_name_column(
    schema: &DatabaseSchema,
) -> Result<ColumnReference, GeoJsonExportDomainError> {
    let mut titles = schema.title_columns();
    let first = titles
        .next()
        .ok_or(GeoJsonExportDomainError::NoDefaultNameColumn)?;

    let ignored = titles.map(|c| c.name.as_str()).collect::<Vec<_>>();
    if !ignored.is_empty() {
        warn!(
            selected = %first.name,
            ignored = ?ignored,
            "schema has more than one title column"
        );
    }

    Ok(ColumnReference {
        name: first.name.clone(),
        column_type: first.column_type.clone(),
    })
}
