pub mod geojson_export_query_service;
pub mod row_feature_transformer;
pub mod schema_column_validator;
