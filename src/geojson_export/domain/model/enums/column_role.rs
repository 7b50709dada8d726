use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ColumnRole {
    Coordinate,
    Name,
    Url,
}

impl ColumnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coordinate => "Coordinate",
            Self::Name => "Name",
            Self::Url => "URL",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
