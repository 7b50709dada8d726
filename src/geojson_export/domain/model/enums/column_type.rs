use std::fmt;

/// Declared type of a database column, as far as the export cares.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColumnType {
    LongText,
    Title,
    Link,
    Other(String),
}

impl ColumnType {
    pub fn from_type_name(value: &str) -> Self {
        match value {
            "rich_text" => Self::LongText,
            "title" => Self::Title,
            "url" => Self::Link,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::LongText => "rich_text",
            Self::Title => "title",
            Self::Link => "url",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
