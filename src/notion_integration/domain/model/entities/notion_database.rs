use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};

use crate::notion_integration::domain::model::value_objects::notion_rich_text::NotionRichText;

/// Database object returned by `GET /v1/databases/{id}`.
#[derive(Clone, Debug, Deserialize)]
pub struct NotionDatabase {
    pub id: String,
    #[serde(default)]
    pub title: Vec<NotionRichText>,
    #[serde(default)]
    pub url: String,
    /// Property schemas in the order the API listed them.
    #[serde(deserialize_with = "deserialize_property_schemas")]
    pub properties: Vec<NotionPropertySchema>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotionPropertySchema {
    pub name: String,
    pub property_type: String,
}

#[derive(Deserialize)]
struct NotionPropertyDescriptor {
    #[serde(rename = "type")]
    property_type: String,
}

fn deserialize_property_schemas<'de, D>(deserializer: D) -> Result<Vec<NotionPropertySchema>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PropertySchemaVisitor;

    impl<'de> Visitor<'de> for PropertySchemaVisitor {
        type Value = Vec<NotionPropertySchema>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of property name to property schema")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut schemas = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, descriptor)) =
                map.next_entry::<String, NotionPropertyDescriptor>()?
            {
                schemas.push(NotionPropertySchema {
                    name,
                    property_type: descriptor.property_type,
                });
            }
            Ok(schemas)
        }
    }

    deserializer.deserialize_map(PropertySchemaVisitor)
}
