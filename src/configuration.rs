use crate::domain::{MockRangeError, Point, UniformMock};
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub mock: MockSettings,
    pub map: MapSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Range of the mocked "chosen branch" distance, in kilometers.
#[derive(serde::Deserialize, Clone)]
pub struct MockSettings {
    #[serde(default = "default_mock_settings_min_km")]
    pub min_km: f64,
    #[serde(default = "default_mock_settings_max_km")]
    pub max_km: f64,
}

#[derive(serde::Deserialize, Clone)]
pub struct MapSettings {
    pub center: Point,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub zoom: u8,
    pub tile_url: String,
}

fn default_mock_settings_min_km() -> f64 {
    10.0
}

fn default_mock_settings_max_km() -> f64 {
    100.0
}

impl MockSettings {
    pub fn validate(&self) -> Result<(), MockRangeError> {
        UniformMock::try_from(self).map(|_| ())
    }
}

impl TryFrom<&MockSettings> for UniformMock {
    type Error = MockRangeError;

    fn try_from(settings: &MockSettings) -> Result<Self, Self::Error> {
        Self::new(settings.min_km, settings.max_km)
    }
}

/// The runtime environment for our application.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}
impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not supported environment.\
                Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");

    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let settings = settings.try_deserialize::<Settings>()?;
    settings
        .mock
        .validate()
        .map_err(|e| config::ConfigError::Message(e.to_string()))?;

    Ok(settings)
}
