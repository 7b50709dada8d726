pub mod config;
pub mod geojson_export;
pub mod notion_integration;
