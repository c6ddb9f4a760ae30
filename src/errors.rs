use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreationalError {
    #[error("Unknown device kind `{0}`. Use 'phone', 'tablet', or 'laptop'")]
    UnknownDeviceKind(String),

    #[error("Unknown car brand `{0}`. Use 'mastodon' or 'rhino'")]
    UnknownCarBrand(String),

    #[error("Unknown edition `{0}`. Use 'cvt' or 'signature'")]
    UnknownEdition(String),

    #[error("Unknown HTTP method `{0}`")]
    UnknownHttpMethod(String),

    #[error("No production line bound to the director")]
    NoProductionLine,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Event publishing failed: {0}")]
    EventError(String),
}

impl CreationalError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn event<S: Into<String>>(msg: S) -> Self {
        Self::EventError(msg.into())
    }
}
