use std::fmt::Display;
use thiserror::Error;

/// A WGS84 position, stored as (latitude, longitude) in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum PointError {
    #[error("Invalid coordinate format. Expected 'latitude,longitude' (e.g., '44.4949,11.3426')")]
    InvalidFormat,

    #[error("Invalid latitude: {0}. Must be between -90 and 90")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0}. Must be between -180 and 180")]
    InvalidLongitude(f64),
}

impl Point {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a point, rejecting latitudes outside [-90, 90] and longitudes
    /// outside [-180, 180]. NaN fails both range checks.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, PointError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PointError::InvalidLatitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PointError::InvalidLongitude(longitude));
        }

        Ok(Self::new(latitude, longitude))
    }

    /// Parse from "latitude,longitude" string format
    ///
    /// Whitespace around either component is ignored.
    pub fn parse(s: &str) -> Result<Self, PointError> {
        let parts: Vec<&str> = s.split(',').collect();

        if parts.len() != 2 {
            return Err(PointError::InvalidFormat);
        }

        let lat = parts[0]
            .trim()
            .parse::<f64>()
            .map_err(|_| PointError::InvalidFormat)?;

        let lon = parts[1]
            .trim()
            .parse::<f64>()
            .map_err(|_| PointError::InvalidFormat)?;

        Self::try_new(lat, lon)
    }

    pub fn is_valid(&self) -> bool {
        Self::try_new(self.latitude, self.longitude).is_ok()
    }

    /// Convert to "latitude,longitude" string format (for API responses)
    pub fn to_string_format(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

// `geo` works in (x, y) = (longitude, latitude)
impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        geo::Point::new(point.longitude, point.latitude)
    }
}

impl serde::Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string_format())
    }
}

impl<'de> serde::Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Point::parse(&s).map_err(serde::de::Error::custom)
    }
}
