use thiserror::Error;

/// Reason a row was left out of the collection. The display text is what ends
/// up in the `warnings` list of the response.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RowWarning {
    #[error("Could not get coordinates for '{name}'. Omitting row.")]
    MissingProperty { name: String },

    #[error("Invalid coordinates for '{name}': '{raw}'. Omitting row.")]
    InvalidCoordinates { name: String, raw: String },

    #[error("Could not parse coordinates for '{name}': '{raw}'. Omitting row.")]
    UnparsableCoordinates { name: String, raw: String },

    #[error("Coordinates out-of-range for '{name}': {latitude:?},{longitude:?}. Omitting row.")]
    CoordinatesOutOfRange {
        name: String,
        latitude: f64,
        longitude: f64,
    },
}
