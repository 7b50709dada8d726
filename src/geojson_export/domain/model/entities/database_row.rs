use std::collections::BTreeMap;

use crate::geojson_export::domain::model::value_objects::rich_text_span::{
    RichTextSpan, to_plain_text,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PropertyValue {
    LongText(Vec<RichTextSpan>),
    Title(Vec<RichTextSpan>),
    Link(Option<String>),
    Unsupported,
}

impl PropertyValue {
    /// Text rendering of the text-like kinds. `None` for links and unsupported values.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Self::LongText(spans) | Self::Title(spans) => Some(to_plain_text(spans)),
            Self::Link(_) | Self::Unsupported => None,
        }
    }

    /// Non-empty link target, if this is a link value.
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Link(Some(url)) if !url.is_empty() => Some(url),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DatabaseRow {
    pub id: String,
    pub properties: BTreeMap<String, PropertyValue>,
}

impl DatabaseRow {
    pub fn property(&self, column_name: &str) -> Option<&PropertyValue> {
        self.properties.get(column_name)
    }
}
