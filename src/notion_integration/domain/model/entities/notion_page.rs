use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::notion_integration::domain::model::value_objects::notion_rich_text::NotionRichText;

/// A database row, as returned in the `results` of a database query.
#[derive(Clone, Debug, Deserialize)]
pub struct NotionPage {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_property_values")]
    pub properties: BTreeMap<String, NotionPropertyValue>,
}

/// Property value of a page. Only the kinds the map export reads are decoded;
/// everything else collapses to `Unsupported`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotionPropertyValue {
    RichText { rich_text: Vec<NotionRichText> },
    Title { title: Vec<NotionRichText> },
    Url { url: Option<String> },
    #[serde(other)]
    Unsupported,
}

/// One page of `POST /v1/databases/{id}/query`.
#[derive(Clone, Debug, Deserialize)]
pub struct NotionQueryResult {
    pub results: Vec<NotionPage>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

// A single malformed property must not fail the whole page.
fn deserialize_property_values<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, NotionPropertyValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;

    Ok(raw
        .into_iter()
        .map(|(name, value)| {
            let decoded = serde_json::from_value(value).unwrap_or_else(|error| {
                warn!(property = %name, error = %error, "undecodable notion property value");
                NotionPropertyValue::Unsupported
            });
            (name, decoded)
        })
        .collect())
}
