use notion_map_api::geojson_export::domain::{
    model::enums::{
        column_role::ColumnRole, column_type::ColumnType,
        geojson_export_domain_error::GeoJsonExportDomainError,
    },
    services::schema_column_validator::validate_columns,
};

use crate::support::{column, fixtures::schema, sample_schema};

#[test]
fn resolves_title_column_when_name_column_is_omitted() {
    let resolved = validate_columns(
        &sample_schema(),
        &column("Coords", ColumnRole::Coordinate),
        None,
        None,
    )
    .expect("columns should validate");

    assert_eq!(resolved.coordinate.name, "Coords");
    assert_eq!(resolved.coordinate.column_type, ColumnType::LongText);
    assert_eq!(resolved.name.name, "Label");
    assert_eq!(resolved.name.column_type, ColumnType::Title);
    assert!(resolved.url.is_none());
}

#[test]
fn accepts_rich_text_name_and_url_columns() {
    let resolved = validate_columns(
        &sample_schema(),
        &column("Coords", ColumnRole::Coordinate),
        Some(&column("Notes", ColumnRole::Name)),
        Some(&column("Link", ColumnRole::Url)),
    )
    .expect("columns should validate");

    assert_eq!(resolved.name.name, "Notes");
    assert_eq!(resolved.name.column_type, ColumnType::LongText);
    let url = resolved.url.expect("url column should resolve");
    assert_eq!(url.name, "Link");
    assert_eq!(url.column_type, ColumnType::Link);
}

#[test]
fn fails_when_coordinate_column_is_missing() {
    let result = validate_columns(
        &sample_schema(),
        &column("Location", ColumnRole::Coordinate),
        None,
        None,
    );

    match result {
        Err(GeoJsonExportDomainError::ColumnNotFound { role, column }) => {
            assert_eq!(role, ColumnRole::Coordinate);
            assert_eq!(column, "Location");
        }
        other => panic!("expected ColumnNotFound, got {other:?}"),
    }
}

#[test]
fn fails_when_coordinate_column_is_a_title() {
    let result = validate_columns(
        &sample_schema(),
        &column("Label", ColumnRole::Coordinate),
        None,
        None,
    );

    let error = result.expect_err("title column must not be accepted for coordinates");
    assert!(matches!(
        error,
        GeoJsonExportDomainError::ColumnTypeMismatch {
            role: ColumnRole::Coordinate,
            ..
        }
    ));
    assert_eq!(
        error.to_string(),
        "Invalid type 'title' for Coordinate column 'Label'; expected 'rich_text'"
    );
}

#[test]
fn column_names_are_case_sensitive() {
    let result = validate_columns(
        &sample_schema(),
        &column("coords", ColumnRole::Coordinate),
        None,
        None,
    );

    assert!(matches!(
        result,
        Err(GeoJsonExportDomainError::ColumnNotFound { .. })
    ));
}

#[test]
fn fails_when_name_column_is_missing() {
    let result = validate_columns(
        &sample_schema(),
        &column("Coords", ColumnRole::Coordinate),
        Some(&column("Title", ColumnRole::Name)),
        None,
    );

    assert!(matches!(
        result,
        Err(GeoJsonExportDomainError::ColumnNotFound {
            role: ColumnRole::Name,
            ..
        })
    ));
}

#[test]
fn fails_when_name_column_is_not_text() {
    let result = validate_columns(
        &sample_schema(),
        &column("Coords", ColumnRole::Coordinate),
        Some(&column("Count", ColumnRole::Name)),
        None,
    );

    let error = result.expect_err("number column must not be accepted as name");
    assert_eq!(
        error.to_string(),
        "Invalid type 'number' for Name column 'Count'; expected 'rich_text' or 'title'"
    );
}

#[test]
fn fails_without_title_column_when_name_column_is_omitted() {
    let schema = schema(&[
        ("Coords", ColumnType::LongText),
        ("Notes", ColumnType::LongText),
    ]);

    let result = validate_columns(
        &schema,
        &column("Coords", ColumnRole::Coordinate),
        None,
        None,
    );

    assert!(matches!(
        result,
        Err(GeoJsonExportDomainError::NoDefaultNameColumn)
    ));
}

#[test]
fn explicit_name_column_does_not_need_a_title_column() {
    let schema = schema(&[
        ("Coords", ColumnType::LongText),
        ("Notes", ColumnType::LongText),
    ]);

    let resolved = validate_columns(
        &schema,
        &column("Coords", ColumnRole::Coordinate),
        Some(&column("Notes", ColumnRole::Name)),
        None,
    )
    .expect("explicit rich_text name column should validate");

    assert_eq!(resolved.name.name, "Notes");
}

#[test]
fn first_title_column_wins_when_several_exist() {
    let schema = schema(&[
        ("Coords", ColumnType::LongText),
        ("Primary", ColumnType::Title),
        ("Secondary", ColumnType::Title),
    ]);

    let resolved = validate_columns(
        &schema,
        &column("Coords", ColumnRole::Coordinate),
        None,
        None,
    )
    .expect("columns should validate");

    assert_eq!(resolved.name.name, "Primary");
}

#[test]
fn fails_when_url_column_is_missing() {
    let result = validate_columns(
        &sample_schema(),
        &column("Coords", ColumnRole::Coordinate),
        None,
        Some(&column("Website", ColumnRole::Url)),
    );

    let error = result.expect_err("missing url column must fail");
    assert_eq!(error.to_string(), "URL column 'Website' not found");
}

#[test]
fn fails_when_url_column_is_not_a_link() {
    let result = validate_columns(
        &sample_schema(),
        &column("Coords", ColumnRole::Coordinate),
        None,
        Some(&column("Notes", ColumnRole::Url)),
    );

    assert!(matches!(
        result,
        Err(GeoJsonExportDomainError::ColumnTypeMismatch {
            role: ColumnRole::Url,
            ..
        })
    ));
}

#[test]
fn coordinate_column_is_checked_before_name_column() {
    let schema = schema(&[("Notes", ColumnType::LongText)]);

    let result = validate_columns(
        &schema,
        &column("Coords", ColumnRole::Coordinate),
        None,
        None,
    );

    assert!(matches!(
        result,
        Err(GeoJsonExportDomainError::ColumnNotFound {
            role: ColumnRole::Coordinate,
            ..
        })
    ));
}
