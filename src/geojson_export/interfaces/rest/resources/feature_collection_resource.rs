use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::geojson_export::domain::model::entities::feature_collection::{
    Feature, FeatureCollection,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(tag = "type")]
pub enum GeometryResource {
    Point {
        /// `[longitude, latitude]`
        coordinates: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct FeaturePropertiesResource {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(tag = "type")]
pub enum FeatureResource {
    Feature {
        geometry: GeometryResource,
        properties: FeaturePropertiesResource,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(tag = "type")]
pub enum FeatureCollectionResource {
    FeatureCollection {
        features: Vec<FeatureResource>,
        database_name: String,
        database_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        warnings: Option<Vec<String>>,
    },
}

impl From<Feature> for FeatureResource {
    fn from(feature: Feature) -> Self {
        Self::Feature {
            geometry: GeometryResource::Point {
                coordinates: feature.point.position().to_vec(),
            },
            properties: FeaturePropertiesResource {
                name: feature.name,
                url: feature.url,
            },
        }
    }
}

impl From<FeatureCollection> for FeatureCollectionResource {
    fn from(collection: FeatureCollection) -> Self {
        Self::FeatureCollection {
            features: collection.features.into_iter().map(Into::into).collect(),
            database_name: collection.database_name,
            database_url: collection.database_url,
            warnings: (!collection.warnings.is_empty()).then_some(collection.warnings),
        }
    }
}
