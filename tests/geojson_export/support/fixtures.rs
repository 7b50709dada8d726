use notion_map_api::geojson_export::domain::model::{
    entities::{
        database_row::{DatabaseRow, PropertyValue},
        database_schema::{DatabaseSchema, SchemaColumn},
    },
    enums::{column_role::ColumnRole, column_type::ColumnType},
    queries::build_feature_collection_query::{
        BuildFeatureCollectionQuery, BuildFeatureCollectionQueryParts,
    },
    value_objects::{column_name::ColumnName, rich_text_span::RichTextSpan},
};

pub const DATABASE_ID: &str = "0b6a7a2e-1c3d-4e5f-8a9b-0c1d2e3f4a5b";

pub fn schema(columns: &[(&str, ColumnType)]) -> DatabaseSchema {
    DatabaseSchema {
        title: vec![RichTextSpan::new("Field "), RichTextSpan::new("Sites")],
        url: "https://www.notion.so/0b6a7a2e1c3d4e5f8a9b0c1d2e3f4a5b".to_string(),
        columns: columns
            .iter()
            .map(|(name, column_type)| SchemaColumn {
                name: name.to_string(),
                column_type: column_type.clone(),
            })
            .collect(),
    }
}

/// `Coords` (rich_text), `Label` (title), `Link` (url), `Notes` (rich_text), `Count` (number).
pub fn sample_schema() -> DatabaseSchema {
    schema(&[
        ("Coords", ColumnType::LongText),
        ("Label", ColumnType::Title),
        ("Link", ColumnType::Link),
        ("Notes", ColumnType::LongText),
        ("Count", ColumnType::Other("number".to_string())),
    ])
}

pub fn long_text(value: &str) -> PropertyValue {
    PropertyValue::LongText(vec![RichTextSpan::new(value)])
}

pub fn title(value: &str) -> PropertyValue {
    PropertyValue::Title(vec![RichTextSpan::new(value)])
}

pub fn link(value: Option<&str>) -> PropertyValue {
    PropertyValue::Link(value.map(str::to_string))
}

pub fn row(id: &str, properties: Vec<(&str, PropertyValue)>) -> DatabaseRow {
    DatabaseRow {
        id: id.to_string(),
        properties: properties
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    }
}

pub fn sample_row(label: &str, coords: &str, url: Option<&str>) -> DatabaseRow {
    row(
        &format!("page-{label}"),
        vec![
            ("Label", title(label)),
            ("Coords", long_text(coords)),
            ("Link", link(url)),
            ("Notes", long_text("")),
        ],
    )
}

pub fn column(name: &str, role: ColumnRole) -> ColumnName {
    ColumnName::new(name.to_string(), role).expect("valid column name")
}

pub fn query(
    coordinate_column: &str,
    name_column: Option<&str>,
    url_column: Option<&str>,
) -> BuildFeatureCollectionQuery {
    BuildFeatureCollectionQuery::new(BuildFeatureCollectionQueryParts {
        database_id: DATABASE_ID.to_string(),
        coordinate_column: coordinate_column.to_string(),
        name_column: name_column.map(str::to_string),
        url_column: url_column.map(str::to_string),
    })
    .expect("valid query")
}
