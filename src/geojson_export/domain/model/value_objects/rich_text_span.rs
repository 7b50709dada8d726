#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RichTextSpan {
    pub plain_text: String,
}

impl RichTextSpan {
    pub fn new(plain_text: impl Into<String>) -> Self {
        Self {
            plain_text: plain_text.into(),
        }
    }
}

/// Concatenates the plain text of every span, in order.
pub fn to_plain_text(spans: &[RichTextSpan]) -> String {
    spans.iter().map(|span| span.plain_text.as_str()).collect()
}
