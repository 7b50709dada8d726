pub mod geojson_export_query_service_impl;
