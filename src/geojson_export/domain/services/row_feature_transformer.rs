use tracing::debug;

use crate::geojson_export::domain::model::{
    entities::{database_row::DatabaseRow, feature_collection::Feature, resolved_columns::ResolvedColumns},
    enums::row_warning::RowWarning,
    value_objects::geo_point::{GeoPoint, GeoPointParseError},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowTransformOutcome {
    pub features: Vec<Feature>,
    pub warnings: Vec<RowWarning>,
}

/// Turns every row into a point feature, or a warning when the row cannot be placed.
/// Rows are independent; a bad row never stops the batch.
pub fn transform_rows(rows: &[DatabaseRow], columns: &ResolvedColumns) -> RowTransformOutcome {
    let mut outcome = RowTransformOutcome::default();

    for row in rows {
        match transform_row(row, columns) {
            Ok(feature) => outcome.features.push(feature),
            Err(warning) => {
                debug!(row_id = %row.id, %warning, "omitting row");
                outcome.warnings.push(warning);
            }
        }
    }

    outcome
}

pub fn transform_row(row: &DatabaseRow, columns: &ResolvedColumns) -> Result<Feature, RowWarning> {
    let name = row
        .property(&columns.name.name)
        .and_then(|value| value.plain_text());
    let raw_coordinates = row
        .property(&columns.coordinate.name)
        .and_then(|value| value.plain_text());

    let (name, raw) = match (name, raw_coordinates) {
        (Some(name), Some(raw)) => (name, raw),
        (name, _) => {
            return Err(RowWarning::MissingProperty {
                name: name.unwrap_or_default(),
            });
        }
    };

    let point = match GeoPoint::parse(&raw) {
        Ok(point) => point,
        Err(GeoPointParseError::WrongPartCount) => {
            return Err(RowWarning::InvalidCoordinates { name, raw });
        }
        Err(GeoPointParseError::NotANumber) => {
            return Err(RowWarning::UnparsableCoordinates { name, raw });
        }
        Err(GeoPointParseError::OutOfRange {
            latitude,
            longitude,
        }) => {
            return Err(RowWarning::CoordinatesOutOfRange {
                name,
                latitude,
                longitude,
            });
        }
    };

    let url = columns
        .url
        .as_ref()
        .and_then(|column| row.property(&column.name))
        .and_then(|value| value.link())
        .map(str::to_string);

    Ok(Feature { point, name, url })
}
