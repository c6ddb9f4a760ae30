use crate::{CreationalError, DeviceKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters the demo drivers feed into the objects they create.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub mobile: ComponentProfile,
    pub laptop: ComponentProfile,
    pub telemetry: TelemetryConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            mobile: ComponentProfile::new("MB001", 16),
            laptop: ComponentProfile::new("LP001", 32),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl ShowcaseConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, CreationalError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CreationalError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, CreationalError> {
        toml::to_string(self).map_err(|e| CreationalError::config(e.to_string()))
    }

    /// Profile applied to the components of the given device kind.
    pub fn profile_for(&self, kind: DeviceKind) -> &ComponentProfile {
        if kind.is_mobile() {
            &self.mobile
        } else {
            &self.laptop
        }
    }

    pub fn validate(&self) -> Result<(), CreationalError> {
        self.mobile.validate("mobile")?;
        self.laptop.validate("laptop")?;

        if self.telemetry.level.trim().is_empty() {
            return Err(CreationalError::validation("Telemetry level cannot be empty"));
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ComponentProfile {
    pub series: String,
    pub memory_gb: u32,
}

impl ComponentProfile {
    pub fn new<S: Into<String>>(series: S, memory_gb: u32) -> Self {
        Self {
            series: series.into(),
            memory_gb,
        }
    }

    fn validate(&self, section: &str) -> Result<(), CreationalError> {
        if self.series.trim().is_empty() {
            return Err(CreationalError::validation(format!(
                "[{}] series cannot be empty",
                section
            )));
        }

        if self.memory_gb == 0 {
            return Err(CreationalError::validation(format!(
                "[{}] memory_gb must be greater than zero",
                section
            )));
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.profile_for(DeviceKind::Phone).series, "MB001");
        assert_eq!(config.profile_for(DeviceKind::Tablet).memory_gb, 16);
        assert_eq!(config.profile_for(DeviceKind::Laptop).series, "LP001");
        assert_eq!(config.profile_for(DeviceKind::Laptop).memory_gb, 32);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ShowcaseConfig::from_toml_str(
            r#"
            [laptop]
            series = "LP900"
            memory_gb = 64
            "#,
        )
        .unwrap();

        assert_eq!(config.laptop, ComponentProfile::new("LP900", 64));
        assert_eq!(config.mobile, ComponentProfile::new("MB001", 16));
        assert_eq!(config.telemetry.level, "info");
    }

    #[test]
    fn test_zero_memory_is_rejected() {
        let result = ShowcaseConfig::from_toml_str(
            r#"
            [mobile]
            series = "MB001"
            memory_gb = 0
            "#,
        );

        assert!(matches!(result, Err(CreationalError::ValidationError(_))));
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        let result = ShowcaseConfig::from_toml_str("[mobile\nseries = 1");
        assert!(matches!(result, Err(CreationalError::TomlError(_))));
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let config = ShowcaseConfig::default();
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(ShowcaseConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ShowcaseConfig::load("/nonexistent/creational.toml");
        assert!(matches!(result, Err(CreationalError::IoError(_))));
    }
}
