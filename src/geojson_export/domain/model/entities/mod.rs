pub mod database_row;
pub mod database_schema;
pub mod feature_collection;
pub mod resolved_columns;
