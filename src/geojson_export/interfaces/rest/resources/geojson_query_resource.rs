use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct GeoJsonQueryResource {
    /// Notion database id (dashed or 32 hex digits)
    #[validate(required(message = "Missing parameter 'database_id'"))]
    pub database_id: Option<String>,
    /// Text column holding "latitude,longitude"
    #[validate(required(message = "Missing parameter 'coord_col'"))]
    pub coord_col: Option<String>,
    /// Text or title column used as feature name; defaults to the title column
    pub name_col: Option<String>,
    /// URL column attached to each feature
    pub url_col: Option<String>,
}
