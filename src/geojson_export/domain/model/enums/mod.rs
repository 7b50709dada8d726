pub mod column_role;
pub mod column_type;
pub mod geojson_export_domain_error;
pub mod row_warning;
