pub mod column_name;
pub mod database_id;
pub mod geo_point;
pub mod rich_text_span;
