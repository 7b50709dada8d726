use crate::geojson_export::domain::model::value_objects::geo_point::GeoPoint;

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub point: GeoPoint,
    pub name: String,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureCollection {
    pub database_name: String,
    pub database_url: String,
    pub features: Vec<Feature>,
    /// One entry per omitted row, in row order.
    pub warnings: Vec<String>,
}
