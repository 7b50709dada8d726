pub mod geojson_export_rest_controller;
