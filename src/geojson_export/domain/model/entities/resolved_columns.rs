use crate::geojson_export::domain::model::enums::column_type::ColumnType;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnReference {
    pub name: String,
    pub column_type: ColumnType,
}

/// Columns that passed schema validation, one per role.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedColumns {
    pub coordinate: ColumnReference,
    pub name: ColumnReference,
    pub url: Option<ColumnReference>,
}
