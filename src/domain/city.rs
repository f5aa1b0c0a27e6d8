use crate::domain::Point;
use std::fmt::Display;

/// One of the cities offered by the selector on the analysis page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum City {
    #[default]
    ReggioEmilia,
    Ferrara,
    Cesena,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CityError {
    #[error("Unknown city: {0}. Must be one of 'Reggio Emilia', 'Ferrara', 'Cesena'.")]
    UnknownCity(String),

    #[error("City cannot be empty.")]
    EmptyCity,
}

impl City {
    /// Selector order.
    pub const ALL: [City; 3] = [City::ReggioEmilia, City::Ferrara, City::Cesena];

    pub fn parse(s: &str) -> Result<Self, CityError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(CityError::EmptyCity);
        }

        Self::ALL
            .into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CityError::UnknownCity(s.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ReggioEmilia => "Reggio Emilia",
            Self::Ferrara => "Ferrara",
            Self::Cesena => "Cesena",
        }
    }

    pub fn location(&self) -> Point {
        match self {
            Self::ReggioEmilia => Point::new(44.7167, 10.6007),
            Self::Ferrara => Point::new(44.5968, 11.2186),
            Self::Cesena => Point::new(44.3090, 12.3285),
        }
    }
}

impl Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for City {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for City {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        City::parse(&s).map_err(serde::de::Error::custom)
    }
}
