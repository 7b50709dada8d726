use dotenvy::dotenv;
use notion_map_api::{
    config::app_config::AppConfig,
    geojson_export::{
        build_geojson_export_router,
        interfaces::rest::resources::{
            feature_collection_resource::{
                FeatureCollectionResource, FeaturePropertiesResource, FeatureResource,
                GeometryResource,
            },
            geojson_error_response_resource::GeoJsonErrorResponseResource,
        },
    },
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        notion_map_api::geojson_export::interfaces::rest::controllers::geojson_export_rest_controller::get_geojson
    ),
    components(
        schemas(
            FeatureCollectionResource,
            FeatureResource,
            GeometryResource,
            FeaturePropertiesResource,
            GeoJsonErrorResponseResource
        )
    ),
    tags(
        (name = "geojson", description = "GeoJSON export of Notion databases")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().expect("failed to load configuration");

    let geojson_router = build_geojson_export_router(&config)
        .await
        .expect("failed to build geojson export router");

    let app = geojson_router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("Serving on http://localhost:{}", config.port);
    info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
