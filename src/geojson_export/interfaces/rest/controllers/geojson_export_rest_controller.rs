use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use validator::Validate;

use crate::geojson_export::{
    domain::{
        model::{
            enums::geojson_export_domain_error::GeoJsonExportDomainError,
            queries::build_feature_collection_query::{
                BuildFeatureCollectionQuery, BuildFeatureCollectionQueryParts,
            },
        },
        services::geojson_export_query_service::GeoJsonExportQueryService,
    },
    interfaces::rest::resources::{
        feature_collection_resource::FeatureCollectionResource,
        geojson_error_response_resource::GeoJsonErrorResponseResource,
        geojson_query_resource::GeoJsonQueryResource,
    },
};

const INDEX_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));

#[derive(Clone)]
pub struct GeoJsonExportRestControllerState {
    pub query_service: Arc<dyn GeoJsonExportQueryService>,
}

pub fn router(state: GeoJsonExportRestControllerState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/geojson", get(get_geojson))
        .with_state(state)
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[utoipa::path(
    get,
    path = "/api/geojson",
    tag = "geojson",
    params(GeoJsonQueryResource),
    responses(
        (status = 200, description = "GeoJSON FeatureCollection built from the database rows", body = FeatureCollectionResource),
        (status = 400, description = "Invalid database id or column name", body = GeoJsonErrorResponseResource),
        (status = 403, description = "Integration has no access to the database", body = GeoJsonErrorResponseResource),
        (status = 404, description = "Database not found", body = GeoJsonErrorResponseResource),
        (status = 422, description = "Missing parameter or unusable column", body = GeoJsonErrorResponseResource),
        (status = 502, description = "Notion API error", body = GeoJsonErrorResponseResource),
        (status = 503, description = "Notion API unreachable", body = GeoJsonErrorResponseResource)
    )
)]
pub async fn get_geojson(
    State(state): State<GeoJsonExportRestControllerState>,
    Query(resource): Query<GeoJsonQueryResource>,
) -> Result<Json<FeatureCollectionResource>, (StatusCode, Json<GeoJsonErrorResponseResource>)> {
    if let Err(validation_error) = resource.validate() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(GeoJsonErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let query = BuildFeatureCollectionQuery::new(BuildFeatureCollectionQueryParts {
        database_id: resource.database_id.unwrap_or_default(),
        coordinate_column: resource.coord_col.unwrap_or_default(),
        name_column: non_blank(resource.name_col),
        url_column: non_blank(resource.url_col),
    })
    .map_err(map_domain_error)?;

    let collection = state
        .query_service
        .handle_build_feature_collection(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(collection.into()))
}

// Forms submit empty optional fields as `name_col=`.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn map_domain_error(
    error: GeoJsonExportDomainError,
) -> (StatusCode, Json<GeoJsonErrorResponseResource>) {
    let status = match error {
        GeoJsonExportDomainError::InvalidDatabaseId
        | GeoJsonExportDomainError::InvalidColumnName(_) => StatusCode::BAD_REQUEST,
        GeoJsonExportDomainError::ColumnNotFound { .. }
        | GeoJsonExportDomainError::ColumnTypeMismatch { .. }
        | GeoJsonExportDomainError::NoDefaultNameColumn => StatusCode::UNPROCESSABLE_ENTITY,
        GeoJsonExportDomainError::UpstreamAccessDenied { .. } => StatusCode::FORBIDDEN,
        GeoJsonExportDomainError::UpstreamNotFound { .. } => StatusCode::NOT_FOUND,
        GeoJsonExportDomainError::UpstreamOther { .. }
        | GeoJsonExportDomainError::UpstreamMalformedResponse { .. } => StatusCode::BAD_GATEWAY,
        GeoJsonExportDomainError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status,
        Json(GeoJsonErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
