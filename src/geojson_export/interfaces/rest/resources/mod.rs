pub mod feature_collection_resource;
pub mod geojson_error_response_resource;
pub mod geojson_query_resource;
