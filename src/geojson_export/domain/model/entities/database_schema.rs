use crate::geojson_export::domain::model::{
    enums::column_type::ColumnType,
    value_objects::rich_text_span::{RichTextSpan, to_plain_text},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemaColumn {
    pub name: String,
    pub column_type: ColumnType,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatabaseSchema {
    pub title: Vec<RichTextSpan>,
    pub url: String,
    /// Columns in the order the source listed them.
    pub columns: Vec<SchemaColumn>,
}

impl DatabaseSchema {
    pub fn column(&self, name: &str) -> Option<&SchemaColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn title_columns(&self) -> impl Iterator<Item = &SchemaColumn> {
        self.columns
            .iter()
            .filter(|c| c.column_type == ColumnType::Title)
    }

    pub fn display_name(&self) -> String {
        to_plain_text(&self.title)
    }
}
