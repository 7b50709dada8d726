use std::sync::Arc;

use notion_map_api::geojson_export::{
    application::query_services::geojson_export_query_service_impl::GeoJsonExportQueryServiceImpl,
    interfaces::rest::controllers::geojson_export_rest_controller::GeoJsonExportRestControllerState,
};

use super::fakes::FakeDatabaseSourceFacade;

pub struct GeoJsonExportQueryHarness {
    pub database_source: Arc<FakeDatabaseSourceFacade>,
    pub service: GeoJsonExportQueryServiceImpl,
}

pub struct GeoJsonExportControllerHarness {
    pub database_source: Arc<FakeDatabaseSourceFacade>,
    pub state: GeoJsonExportRestControllerState,
}

pub fn create_query_harness() -> GeoJsonExportQueryHarness {
    let database_source = Arc::new(FakeDatabaseSourceFacade::new());
    let service = GeoJsonExportQueryServiceImpl::new(database_source.clone());

    GeoJsonExportQueryHarness {
        database_source,
        service,
    }
}

pub fn create_controller_harness() -> GeoJsonExportControllerHarness {
    let database_source = Arc::new(FakeDatabaseSourceFacade::new());
    let query_service = Arc::new(GeoJsonExportQueryServiceImpl::new(database_source.clone()));

    GeoJsonExportControllerHarness {
        database_source,
        state: GeoJsonExportRestControllerState { query_service },
    }
}
