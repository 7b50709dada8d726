use serde::Deserialize;

/// One rich text object as returned by the Notion API. Only the plain text
/// rendering is kept; annotations and links are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NotionRichText {
    pub plain_text: String,
}
