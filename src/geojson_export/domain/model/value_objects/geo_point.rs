use std::ops::RangeInclusive;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeoPointParseError {
    WrongPartCount,
    NotANumber,
    OutOfRange { latitude: f64, longitude: f64 },
}

/// WGS84 position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Parses `"<latitude>,<longitude>"`.
    pub fn parse(raw: &str) -> Result<Self, GeoPointParseError> {
        let parts = raw.split(',').collect::<Vec<_>>();
        let [latitude, longitude] = parts.as_slice() else {
            return Err(GeoPointParseError::WrongPartCount);
        };

        let latitude = latitude
            .trim()
            .parse::<f64>()
            .map_err(|_| GeoPointParseError::NotANumber)?;
        let longitude = longitude
            .trim()
            .parse::<f64>()
            .map_err(|_| GeoPointParseError::NotANumber)?;

        Self::new(latitude, longitude)
    }

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointParseError> {
        if !LATITUDE_RANGE.contains(&latitude) || !LONGITUDE_RANGE.contains(&longitude) {
            return Err(GeoPointParseError::OutOfRange {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// GeoJSON position: longitude first (RFC 7946 section 3.1.1).
    pub fn position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}
